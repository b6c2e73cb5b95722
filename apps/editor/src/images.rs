//! Image input boundary.
//!
//! Takes a user-supplied image upload and turns it into a displayable handle: a
//! URL under `/api/v1/images/<id>` served from memory. The profile has a single
//! image slot, so a new upload replaces whatever was stored before it.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use axum::{
    extract::{Multipart, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::extract::AppPath;
use crate::profile::models::ImageRef;
use crate::profile::{Action, ProfileStore};
use crate::state::AppState;

pub const IMAGE_ROUTE_PREFIX: &str = "/api/v1/images";

#[derive(Debug, Clone)]
struct StoredImage {
    content_type: String,
    data: Bytes,
}

#[derive(Debug, Clone, Default)]
pub struct ImageStore {
    images: Arc<RwLock<HashMap<Uuid, StoredImage>>>,
}

impl ImageStore {
    /// Validates and stores an upload, returning its display handle. Any earlier
    /// upload is dropped.
    pub fn insert(
        &self,
        content_type: Option<&str>,
        data: Bytes,
        max_bytes: usize,
    ) -> Result<ImageRef, AppError> {
        let content_type = content_type
            .filter(|ct| ct.starts_with("image/"))
            .ok_or_else(|| AppError::Validation("upload must be an image/* file".to_string()))?;
        if data.is_empty() {
            return Err(AppError::Validation("image upload is empty".to_string()));
        }
        if data.len() > max_bytes {
            return Err(AppError::Validation(format!(
                "image is {} bytes; the limit is {max_bytes}",
                data.len()
            )));
        }

        let id = Uuid::new_v4();
        let mut images = self.images.write().unwrap_or_else(PoisonError::into_inner);
        images.clear();
        images.insert(
            id,
            StoredImage {
                content_type: content_type.to_string(),
                data,
            },
        );
        Ok(ImageRef(format!("{IMAGE_ROUTE_PREFIX}/{id}")))
    }

    fn get(&self, id: &Uuid) -> Option<StoredImage> {
        self.images
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
    }

    #[cfg(test)]
    fn held(&self) -> usize {
        self.images.read().unwrap_or_else(PoisonError::into_inner).len()
    }
}

#[derive(Serialize)]
pub struct UploadResponse {
    pub image: ImageRef,
    pub profile: Arc<ProfileStore>,
}

/// POST /api/v1/images
///
/// Accepts a multipart form; the first part carrying an image is used.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("malformed multipart body: {e}")))?
    {
        let content_type = field.content_type().map(str::to_string);
        if content_type.is_none() && field.file_name().is_none() {
            // plain form field
            continue;
        }
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("failed to read upload: {e}")))?;

        let image = state
            .images
            .insert(content_type.as_deref(), data, state.config.max_image_bytes)?;
        info!(handle = %image.0, "Profile image uploaded");

        let applied = state.session.apply(Action::SetDisplayImage {
            image: image.clone(),
        })?;
        return Ok(Json(UploadResponse {
            image,
            profile: applied.profile,
        }));
    }

    Err(AppError::Validation("no image file in upload".to_string()))
}

/// GET /api/v1/images/:id
pub async fn handle_get_image(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Response, AppError> {
    let image = state
        .images
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("Image {id} not found")))?;
    Ok(([(header::CONTENT_TYPE, image.content_type)], image.data).into_response())
}
