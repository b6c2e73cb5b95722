use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::export::ExportError;
use crate::profile::ProfileError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Profile(#[from] ProfileError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("An export is already in progress")]
    ExportInProgress,

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Profile(e) => {
                let (status, code) = match e {
                    ProfileError::IndexOutOfRange { .. } => {
                        (StatusCode::NOT_FOUND, "INDEX_OUT_OF_RANGE")
                    }
                    ProfileError::InvalidOption { .. } => {
                        (StatusCode::BAD_REQUEST, "INVALID_OPTION")
                    }
                    ProfileError::InvalidGeometry(_) => {
                        (StatusCode::BAD_REQUEST, "INVALID_GEOMETRY")
                    }
                };
                (status, code, e.to_string())
            }
            AppError::Export(ExportError::ShareUnsupported) => (
                StatusCode::NOT_IMPLEMENTED,
                "SHARE_UNSUPPORTED",
                "Sharing not supported on this host".to_string(),
            ),
            AppError::Export(e) => {
                tracing::error!("Export error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "EXPORT_FAILURE",
                    format!("Failed to export: {e}"),
                )
            }
            AppError::ExportInProgress => (
                StatusCode::CONFLICT,
                "EXPORT_IN_PROGRESS",
                "An export is already in progress".to_string(),
            ),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (
                AppError::from(ProfileError::IndexOutOfRange {
                    collection: "work_history",
                    index: 9,
                    len: 1,
                }),
                StatusCode::NOT_FOUND,
            ),
            (
                AppError::from(ProfileError::InvalidGeometry(0.0)),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::from(ExportError::ShareUnsupported),
                StatusCode::NOT_IMPLEMENTED,
            ),
            (
                AppError::from(ExportError::Renderer("down".to_string())),
                StatusCode::BAD_GATEWAY,
            ),
            (AppError::ExportInProgress, StatusCode::CONFLICT),
        ];
        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }
}
