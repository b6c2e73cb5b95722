use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};

use crate::errors::AppError;
use crate::export::share::{ShareReceipt, PDF_MIME};
use crate::export::{export_pdf, share_pdf};
use crate::state::AppState;

/// POST /api/v1/export/pdf
pub async fn handle_export_pdf(State(state): State<AppState>) -> Result<Response, AppError> {
    let document = export_pdf(&state).await?;
    let disposition = format!("attachment; filename=\"{}\"", document.filename);
    Ok((
        [
            (header::CONTENT_TYPE, PDF_MIME.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        document.pdf,
    )
        .into_response())
}

/// POST /api/v1/export/share
pub async fn handle_share(State(state): State<AppState>) -> Result<Json<ShareReceipt>, AppError> {
    Ok(Json(share_pdf(&state).await?))
}
