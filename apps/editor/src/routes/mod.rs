pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, patch, post, put},
    Router,
};

use crate::export::handlers as export;
use crate::images;
use crate::profile::handlers as profile;
use crate::state::AppState;

/// Headroom for multipart framing on top of the image size limit.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_image_bytes + MULTIPART_OVERHEAD;

    Router::new()
        .route("/health", get(health::health_handler))
        // Profile reads
        .route("/api/v1/profile", get(profile::handle_get_profile))
        .route("/api/v1/profile/view", get(profile::handle_get_view))
        .route("/api/v1/profile/catalogs", get(profile::handle_get_catalogs))
        // Profile mutations
        .route("/api/v1/profile/actions", post(profile::handle_action))
        .route("/api/v1/profile/summary", put(profile::handle_set_summary))
        .route("/api/v1/profile/font", put(profile::handle_set_font))
        .route(
            "/api/v1/profile/strengths/toggle",
            post(profile::handle_toggle_strength),
        )
        .route(
            "/api/v1/profile/interests/toggle",
            post(profile::handle_toggle_interest),
        )
        .route("/api/v1/profile/work", post(profile::handle_add_work))
        .route("/api/v1/profile/work/:index", patch(profile::handle_edit_work))
        .route(
            "/api/v1/profile/work/:index/details",
            post(profile::handle_add_work_detail),
        )
        .route(
            "/api/v1/profile/work/:index/details/:detail",
            patch(profile::handle_edit_work_detail),
        )
        .route("/api/v1/profile/education", post(profile::handle_add_education))
        .route(
            "/api/v1/profile/education/:index",
            patch(profile::handle_edit_education),
        )
        // Skill drag session
        .route(
            "/api/v1/profile/skills/:index/drag",
            post(profile::handle_begin_drag),
        )
        .route(
            "/api/v1/profile/skills/:index/pointer",
            post(profile::handle_pointer_move),
        )
        .route("/api/v1/profile/pointer-up", post(profile::handle_pointer_up))
        .route(
            "/api/v1/profile/languages/:index/cycle",
            post(profile::handle_cycle_language),
        )
        .route(
            "/api/v1/profile/edit-mode",
            post(profile::handle_toggle_edit_mode),
        )
        .route("/api/v1/profile/enhance", post(profile::handle_enhance))
        .route("/api/v1/profile/ats-score", post(profile::handle_roll_score))
        // Images
        .route(
            "/api/v1/images",
            post(images::handle_upload).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/api/v1/images/:id", get(images::handle_get_image))
        // Export
        .route("/api/v1/export/pdf", post(export::handle_export_pdf))
        .route("/api/v1/export/share", post(export::handle_share))
        .with_state(state)
}
