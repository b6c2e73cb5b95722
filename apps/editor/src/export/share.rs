//! Share targets for exported documents.
//!
//! A server has no native share sheet. `S3ShareTarget` publishes the PDF to an
//! S3-compatible bucket and hands back its URL. Without a bucket the editor uses
//! `UnsupportedShareTarget`, which reports that sharing is not available.

use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;
use chrono::Utc;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::export::ExportError;

pub const SHARE_TITLE: &str = "My Resume";
pub const SHARE_TEXT: &str = "Check out my resume!";
pub const PDF_MIME: &str = "application/pdf";

/// What gets shared: a titled message with one attached file.
#[derive(Debug, Clone)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub filename: String,
    pub mime_type: String,
    pub blob: Bytes,
}

impl SharePayload {
    /// The standard resume share message carrying `blob` as `filename`.
    pub fn resume(filename: String, blob: Bytes) -> Self {
        Self {
            title: SHARE_TITLE.to_string(),
            text: SHARE_TEXT.to_string(),
            filename,
            mime_type: PDF_MIME.to_string(),
            blob,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ShareReceipt {
    pub title: String,
    pub text: String,
    pub filename: String,
    pub url: String,
}

#[async_trait]
pub trait ShareTarget: Send + Sync {
    async fn share(&self, payload: SharePayload) -> Result<ShareReceipt, ExportError>;
}

pub struct UnsupportedShareTarget;

#[async_trait]
impl ShareTarget for UnsupportedShareTarget {
    async fn share(&self, _payload: SharePayload) -> Result<ShareReceipt, ExportError> {
        Err(ExportError::ShareUnsupported)
    }
}

pub struct S3ShareTarget {
    client: aws_sdk_s3::Client,
    bucket: String,
    /// Base URL objects are reachable under (path-style: `<base>/<bucket>/<key>`).
    public_base: String,
}

impl S3ShareTarget {
    pub fn new(client: aws_sdk_s3::Client, bucket: String, public_base: String) -> Self {
        Self {
            client,
            bucket,
            public_base: public_base.trim_end_matches('/').to_string(),
        }
    }
}

/// Object key for a shared file: `shared/<utc timestamp>-<uuid>/<filename>`.
fn share_key(filename: &str) -> String {
    format!(
        "shared/{}-{}/{}",
        Utc::now().format("%Y%m%dT%H%M%SZ"),
        Uuid::new_v4(),
        filename
    )
}

#[async_trait]
impl ShareTarget for S3ShareTarget {
    async fn share(&self, payload: SharePayload) -> Result<ShareReceipt, ExportError> {
        let key = share_key(&payload.filename);

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .content_type(&payload.mime_type)
            .content_disposition(format!("attachment; filename=\"{}\"", payload.filename))
            .metadata("title", &payload.title)
            .metadata("text", &payload.text)
            .body(ByteStream::from(payload.blob))
            .send()
            .await
            .map_err(|e| ExportError::Storage(e.to_string()))?;

        let url = format!("{}/{}/{}", self.public_base, self.bucket, key);
        info!(bucket = %self.bucket, key = %key, "Shared document uploaded");

        Ok(ShareReceipt {
            title: payload.title,
            text: payload.text,
            filename: payload.filename,
            url,
        })
    }
}
