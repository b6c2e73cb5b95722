use std::sync::Arc;

use crate::config::Config;
use crate::export::{DocumentRenderer, ExportGate, ShareTarget};
use crate::images::ImageStore;
use crate::profile::EditorSession;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// The editing session: current store version and drag state.
    pub session: Arc<EditorSession>,
    pub images: ImageStore,
    /// Pluggable PDF backend. Default: HttpDocumentRenderer when PDF_RENDERER_URL is set.
    pub renderer: Arc<dyn DocumentRenderer>,
    /// Pluggable share backend. Default: S3ShareTarget when SHARE_BUCKET is set.
    pub share_target: Arc<dyn ShareTarget>,
    pub export_gate: ExportGate,
}
