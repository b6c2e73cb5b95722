//! Export boundary: PDF generation and sharing.
//!
//! Both operations render the current store to the HTML surface, pass it to an
//! external collaborator, and never touch the store. One export runs at a time;
//! a second request while one is outstanding is refused.

pub mod guard;
pub mod handlers;
pub mod options;
pub mod renderer;
pub mod share;

use bytes::Bytes;
use thiserror::Error;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::profile::ProfileStore;
use crate::render::{document_html, render};
use crate::state::AppState;

pub use guard::ExportGate;
pub use options::ExportOptions;
pub use renderer::{DocumentRenderer, HttpDocumentRenderer, UnconfiguredRenderer};
pub use share::{S3ShareTarget, SharePayload, ShareReceipt, ShareTarget, UnsupportedShareTarget};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("document renderer failed: {0}")]
    Renderer(String),

    #[error("sharing not supported")]
    ShareUnsupported,

    #[error("storage error: {0}")]
    Storage(String),
}

/// A finished PDF ready to download or share.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pub filename: String,
    pub pdf: Bytes,
}

/// Builds the export surface and default options for `store`.
pub fn prepare_surface(store: &ProfileStore) -> (String, ExportOptions) {
    let view = render(store);
    let surface = document_html(&view, &store.header.name);
    (surface, ExportOptions::for_owner(&store.header.name))
}

async fn render_current(state: &AppState) -> Result<RenderedDocument, AppError> {
    let store = state.session.snapshot();
    let (surface, options) = prepare_surface(&store);

    let pdf = state
        .renderer
        .render_to_document(&surface, &options)
        .await
        .map_err(|e| {
            warn!(error = %e, "Export failed");
            AppError::from(e)
        })?;

    info!(filename = %options.filename, bytes = pdf.len(), "Document exported");
    Ok(RenderedDocument {
        filename: options.filename,
        pdf,
    })
}

/// Renders the current store to a PDF.
pub async fn export_pdf(state: &AppState) -> Result<RenderedDocument, AppError> {
    let _permit = state
        .export_gate
        .try_acquire()
        .ok_or(AppError::ExportInProgress)?;
    render_current(state).await
}

/// Renders the current store and hands it to the share target.
pub async fn share_pdf(state: &AppState) -> Result<ShareReceipt, AppError> {
    let _permit = state
        .export_gate
        .try_acquire()
        .ok_or(AppError::ExportInProgress)?;
    let document = render_current(state).await?;
    let receipt = state
        .share_target
        .share(SharePayload::resume(document.filename, document.pdf))
        .await?;
    Ok(receipt)
}
