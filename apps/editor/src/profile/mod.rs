// Editable profile: data model, pure mutation ops, drag session, and the
// session cell that holds the current store version.

pub mod canned;
pub mod drag;
pub mod handlers;
pub mod models;
pub mod ops;
pub mod score;
pub mod seed;
pub mod session;

use thiserror::Error;

pub use models::ProfileStore;
pub use session::{Action, EditorSession, SessionSnapshot};

/// Rejections from the mutation ops. The store is left unchanged on every one.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileError {
    #[error("{collection} index {index} out of range (len {len})")]
    IndexOutOfRange {
        collection: &'static str,
        index: usize,
        len: usize,
    },

    #[error("'{value}' is not a valid {kind}")]
    InvalidOption { kind: &'static str, value: String },

    #[error("drag track width must be positive and finite, got {0}")]
    InvalidGeometry(f64),
}
