//! Document renderer: turns the HTML surface into PDF bytes.
//!
//! The editor does not rasterize anything itself. `HttpDocumentRenderer` hands the
//! surface to an external conversion service; any HTML-to-PDF service that accepts
//! `{ "html": .., "options": .. }` and answers with the PDF body will do.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, warn};

use crate::export::options::ExportOptions;
use crate::export::ExportError;

#[async_trait]
pub trait DocumentRenderer: Send + Sync {
    async fn render_to_document(
        &self,
        surface: &str,
        options: &ExportOptions,
    ) -> Result<Bytes, ExportError>;
}

#[derive(Debug, Serialize)]
struct RenderRequest<'a> {
    html: &'a str,
    options: &'a ExportOptions,
}

/// Posts the surface to a conversion service and returns the response body.
#[derive(Clone)]
pub struct HttpDocumentRenderer {
    client: Client,
    endpoint: String,
}

impl HttpDocumentRenderer {
    pub fn new(endpoint: String, timeout: Duration) -> Result<Self, ExportError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl DocumentRenderer for HttpDocumentRenderer {
    async fn render_to_document(
        &self,
        surface: &str,
        options: &ExportOptions,
    ) -> Result<Bytes, ExportError> {
        debug!(
            endpoint = %self.endpoint,
            bytes = surface.len(),
            filename = %options.filename,
            "Requesting document render"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(&RenderRequest {
                html: surface,
                options,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "Document renderer returned an error");
            return Err(ExportError::Renderer(format!(
                "renderer returned status {status}: {body}"
            )));
        }

        let pdf = response.bytes().await?;
        if pdf.is_empty() {
            return Err(ExportError::Renderer(
                "renderer returned an empty document".to_string(),
            ));
        }
        Ok(pdf)
    }
}

/// Used when no conversion service is configured. Every export fails.
pub struct UnconfiguredRenderer;

#[async_trait]
impl DocumentRenderer for UnconfiguredRenderer {
    async fn render_to_document(
        &self,
        _surface: &str,
        _options: &ExportOptions,
    ) -> Result<Bytes, ExportError> {
        Err(ExportError::Renderer(
            "no document renderer configured (set PDF_RENDERER_URL)".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unconfigured_renderer_fails() {
        let err = UnconfiguredRenderer
            .render_to_document("<html></html>", &ExportOptions::for_owner("A"))
            .await
            .unwrap_err();
        assert!(matches!(err, ExportError::Renderer(_)));
    }

    #[test]
    fn test_render_request_shape() {
        let options = ExportOptions::for_owner("Evelyn White");
        let json = serde_json::to_value(RenderRequest {
            html: "<p>x</p>",
            options: &options,
        })
        .unwrap();
        assert_eq!(json["html"], "<p>x</p>");
        assert_eq!(json["options"]["filename"], "Evelyn_White_Resume.pdf");
    }
}
