mod config;
mod errors;
mod export;
mod extract;
mod images;
mod profile;
mod render;
mod routes;
mod state;

use anyhow::Result;
use aws_config::Region;
use aws_sdk_s3::config::Credentials;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, ShareConfig};
use crate::export::{
    DocumentRenderer, ExportGate, HttpDocumentRenderer, S3ShareTarget, ShareTarget,
    UnconfiguredRenderer, UnsupportedShareTarget,
};
use crate::images::ImageStore;
use crate::profile::EditorSession;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume editor v{}", env!("CARGO_PKG_VERSION"));

    // Document renderer (external HTML-to-PDF service)
    let renderer: Arc<dyn DocumentRenderer> = match &config.pdf_renderer_url {
        Some(url) => {
            let timeout = Duration::from_secs(config.pdf_renderer_timeout_secs);
            info!("Document renderer: {url}");
            Arc::new(HttpDocumentRenderer::new(url.clone(), timeout)?)
        }
        None => {
            warn!("PDF_RENDERER_URL not set; PDF export is disabled");
            Arc::new(UnconfiguredRenderer)
        }
    };

    // Share target (S3 / MinIO bucket)
    let share_target: Arc<dyn ShareTarget> = match &config.share {
        Some(share) => {
            let s3 = build_s3_client(share).await;
            info!("Share target: bucket {}", share.bucket);
            Arc::new(S3ShareTarget::new(
                s3,
                share.bucket.clone(),
                share.s3_endpoint.clone(),
            ))
        }
        None => {
            info!("SHARE_BUCKET not set; sharing will report unsupported");
            Arc::new(UnsupportedShareTarget)
        }
    };

    // One editing session, seeded with the sample resume
    let session = Arc::new(EditorSession::default());

    let state = AppState {
        config: config.clone(),
        session,
        images: ImageStore::default(),
        renderer,
        share_target,
        export_gate: ExportGate::default(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Constructs an S3 client configured for MinIO (local) or AWS (production).
async fn build_s3_client(share: &ShareConfig) -> aws_sdk_s3::Client {
    let credentials = Credentials::new(
        &share.aws_access_key_id,
        &share.aws_secret_access_key,
        None,
        None,
        "resume-editor-static",
    );

    let s3_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(Region::new("us-east-1"))
        .credentials_provider(credentials)
        .endpoint_url(&share.s3_endpoint)
        .load()
        .await;

    aws_sdk_s3::Client::new(&s3_config)
}
