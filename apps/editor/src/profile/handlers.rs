//! Axum route handlers for the profile API.
//!
//! Each mutation handler maps its request onto an [`Action`] and runs it through
//! the session. The response carries the resulting store and drag state.

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::extract::{AppJson, AppPath};
use crate::profile::canned::EnhanceSection;
use crate::profile::drag::TrackGeometry;
use crate::profile::models::{EducationField, FontChoice, ProfileStore, WorkField};
use crate::profile::seed::{INTEREST_CATALOG, STRENGTH_CATALOG};
use crate::profile::{Action, SessionSnapshot};
use crate::render::{render, ViewTree};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct CatalogsResponse {
    pub fonts: Vec<&'static str>,
    pub strengths: Vec<&'static str>,
    pub interests: Vec<&'static str>,
}

#[derive(Debug, Deserialize)]
pub struct TextRequest {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct FontRequest {
    pub font: String,
}

#[derive(Debug, Deserialize)]
pub struct NameRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct WorkFieldRequest {
    pub field: WorkField,
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct EducationFieldRequest {
    pub field: EducationField,
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct ValueRequest {
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct EnhanceRequest {
    pub section: EnhanceSection,
}

fn dispatch(state: &AppState, action: Action) -> Result<Json<SessionSnapshot>, AppError> {
    Ok(Json(state.session.apply(action)?))
}

// ────────────────────────────────────────────────────────────────────────────
// Reads
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/profile
pub async fn handle_get_profile(State(state): State<AppState>) -> Json<Arc<ProfileStore>> {
    Json(state.session.snapshot())
}

/// GET /api/v1/profile/view
pub async fn handle_get_view(State(state): State<AppState>) -> Json<ViewTree> {
    Json(render(&state.session.snapshot()))
}

/// GET /api/v1/profile/catalogs
pub async fn handle_get_catalogs() -> Json<CatalogsResponse> {
    Json(CatalogsResponse {
        fonts: FontChoice::ALL.iter().map(FontChoice::css_name).collect(),
        strengths: STRENGTH_CATALOG.to_vec(),
        interests: INTEREST_CATALOG.to_vec(),
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Mutations
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/profile/actions
///
/// Generic entry point taking any tagged [`Action`].
pub async fn handle_action(
    State(state): State<AppState>,
    AppJson(action): AppJson<Action>,
) -> Result<Json<SessionSnapshot>, AppError> {
    dispatch(&state, action)
}

/// PUT /api/v1/profile/summary
pub async fn handle_set_summary(
    State(state): State<AppState>,
    AppJson(req): AppJson<TextRequest>,
) -> Result<Json<SessionSnapshot>, AppError> {
    dispatch(&state, Action::SetSummary { text: req.text })
}

/// PUT /api/v1/profile/font
pub async fn handle_set_font(
    State(state): State<AppState>,
    AppJson(req): AppJson<FontRequest>,
) -> Result<Json<SessionSnapshot>, AppError> {
    dispatch(&state, Action::SetFont { font: req.font })
}

/// POST /api/v1/profile/strengths/toggle
pub async fn handle_toggle_strength(
    State(state): State<AppState>,
    AppJson(req): AppJson<NameRequest>,
) -> Result<Json<SessionSnapshot>, AppError> {
    dispatch(&state, Action::ToggleStrength { name: req.name })
}

/// POST /api/v1/profile/interests/toggle
pub async fn handle_toggle_interest(
    State(state): State<AppState>,
    AppJson(req): AppJson<NameRequest>,
) -> Result<Json<SessionSnapshot>, AppError> {
    dispatch(&state, Action::ToggleInterest { name: req.name })
}

/// POST /api/v1/profile/work
pub async fn handle_add_work(
    State(state): State<AppState>,
) -> Result<Json<SessionSnapshot>, AppError> {
    dispatch(&state, Action::AddWorkEntry)
}

/// PATCH /api/v1/profile/work/:index
pub async fn handle_edit_work(
    State(state): State<AppState>,
    AppPath(index): AppPath<usize>,
    AppJson(req): AppJson<WorkFieldRequest>,
) -> Result<Json<SessionSnapshot>, AppError> {
    dispatch(
        &state,
        Action::EditWorkField {
            index,
            field: req.field,
            value: req.value,
        },
    )
}

/// POST /api/v1/profile/work/:index/details
pub async fn handle_add_work_detail(
    State(state): State<AppState>,
    AppPath(job): AppPath<usize>,
) -> Result<Json<SessionSnapshot>, AppError> {
    dispatch(&state, Action::AddWorkDetail { job })
}

/// PATCH /api/v1/profile/work/:index/details/:detail
pub async fn handle_edit_work_detail(
    State(state): State<AppState>,
    AppPath((job, detail)): AppPath<(usize, usize)>,
    AppJson(req): AppJson<ValueRequest>,
) -> Result<Json<SessionSnapshot>, AppError> {
    dispatch(
        &state,
        Action::EditWorkDetail {
            job,
            detail,
            value: req.value,
        },
    )
}

/// POST /api/v1/profile/education
pub async fn handle_add_education(
    State(state): State<AppState>,
) -> Result<Json<SessionSnapshot>, AppError> {
    dispatch(&state, Action::AddEducationEntry)
}

/// PATCH /api/v1/profile/education/:index
pub async fn handle_edit_education(
    State(state): State<AppState>,
    AppPath(index): AppPath<usize>,
    AppJson(req): AppJson<EducationFieldRequest>,
) -> Result<Json<SessionSnapshot>, AppError> {
    dispatch(
        &state,
        Action::EditEducationField {
            index,
            field: req.field,
            value: req.value,
        },
    )
}

/// POST /api/v1/profile/skills/:index/drag
pub async fn handle_begin_drag(
    State(state): State<AppState>,
    AppPath(index): AppPath<usize>,
) -> Result<Json<SessionSnapshot>, AppError> {
    dispatch(&state, Action::BeginSkillDrag { index })
}

/// POST /api/v1/profile/skills/:index/pointer
pub async fn handle_pointer_move(
    State(state): State<AppState>,
    AppPath(index): AppPath<usize>,
    AppJson(geometry): AppJson<TrackGeometry>,
) -> Result<Json<SessionSnapshot>, AppError> {
    dispatch(&state, Action::SkillPointerMove { index, geometry })
}

/// POST /api/v1/profile/pointer-up
pub async fn handle_pointer_up(
    State(state): State<AppState>,
) -> Result<Json<SessionSnapshot>, AppError> {
    dispatch(&state, Action::PointerUp)
}

/// POST /api/v1/profile/languages/:index/cycle
pub async fn handle_cycle_language(
    State(state): State<AppState>,
    AppPath(index): AppPath<usize>,
) -> Result<Json<SessionSnapshot>, AppError> {
    dispatch(&state, Action::CycleLanguageLevel { index })
}

/// POST /api/v1/profile/edit-mode
pub async fn handle_toggle_edit_mode(
    State(state): State<AppState>,
) -> Result<Json<SessionSnapshot>, AppError> {
    dispatch(&state, Action::ToggleEditMode)
}

/// POST /api/v1/profile/enhance
pub async fn handle_enhance(
    State(state): State<AppState>,
    AppJson(req): AppJson<EnhanceRequest>,
) -> Result<Json<SessionSnapshot>, AppError> {
    dispatch(
        &state,
        Action::ApplyCannedEnhancement {
            section: req.section,
        },
    )
}

/// POST /api/v1/profile/ats-score
///
/// Rolls the placeholder score. The number is random, not an analysis.
pub async fn handle_roll_score(
    State(state): State<AppState>,
) -> Result<Json<SessionSnapshot>, AppError> {
    dispatch(&state, Action::RollAtsScore)
}
