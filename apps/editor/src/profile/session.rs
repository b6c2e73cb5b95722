//! The current-store cell for one editing session.
//!
//! Holds the latest committed [`ProfileStore`] and the skill-bar drag session.
//! Every user action goes through [`EditorSession::apply`]: the matching pure op
//! runs against the current version and, on success, the new version replaces it
//! under the write lock. A rejected action leaves the cell untouched.

use std::sync::{Arc, PoisonError, RwLock};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::profile::canned::EnhanceSection;
use crate::profile::drag::{DragSession, TrackGeometry};
use crate::profile::models::{EducationField, ImageRef, ProfileStore, WorkField};
use crate::profile::ops;
use crate::profile::seed::sample_profile;
use crate::profile::ProfileError;

/// A single user action against the profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    SetSummary { text: String },
    SetFont { font: String },
    ToggleStrength { name: String },
    ToggleInterest { name: String },
    AddWorkEntry,
    EditWorkField { index: usize, field: WorkField, value: String },
    EditWorkDetail { job: usize, detail: usize, value: String },
    AddWorkDetail { job: usize },
    AddEducationEntry,
    EditEducationField { index: usize, field: EducationField, value: String },
    /// Pointer-down on skill `index`.
    BeginSkillDrag { index: usize },
    /// Pointer-move over skill `index`; ignored unless that skill is being dragged.
    SkillPointerMove { index: usize, geometry: TrackGeometry },
    /// Pointer-up anywhere on the page.
    PointerUp,
    CycleLanguageLevel { index: usize },
    ToggleEditMode,
    ApplyCannedEnhancement { section: EnhanceSection },
    RollAtsScore,
    SetDisplayImage { image: ImageRef },
}

impl Action {
    fn name(&self) -> &'static str {
        match self {
            Action::SetSummary { .. } => "set_summary",
            Action::SetFont { .. } => "set_font",
            Action::ToggleStrength { .. } => "toggle_strength",
            Action::ToggleInterest { .. } => "toggle_interest",
            Action::AddWorkEntry => "add_work_entry",
            Action::EditWorkField { .. } => "edit_work_field",
            Action::EditWorkDetail { .. } => "edit_work_detail",
            Action::AddWorkDetail { .. } => "add_work_detail",
            Action::AddEducationEntry => "add_education_entry",
            Action::EditEducationField { .. } => "edit_education_field",
            Action::BeginSkillDrag { .. } => "begin_skill_drag",
            Action::SkillPointerMove { .. } => "skill_pointer_move",
            Action::PointerUp => "pointer_up",
            Action::CycleLanguageLevel { .. } => "cycle_language_level",
            Action::ToggleEditMode => "toggle_edit_mode",
            Action::ApplyCannedEnhancement { .. } => "apply_canned_enhancement",
            Action::RollAtsScore => "roll_ats_score",
            Action::SetDisplayImage { .. } => "set_display_image",
        }
    }
}

/// A committed store version together with the drag state it was committed with.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub profile: Arc<ProfileStore>,
    pub drag: DragSession,
}

struct SessionState {
    store: Arc<ProfileStore>,
    drag: DragSession,
}

/// Owner of the current store version. Shared across handlers behind an `Arc`.
pub struct EditorSession {
    state: RwLock<SessionState>,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(sample_profile())
    }
}

impl EditorSession {
    pub fn new(store: ProfileStore) -> Self {
        Self {
            state: RwLock::new(SessionState {
                store: Arc::new(store),
                drag: DragSession::Idle,
            }),
        }
    }

    /// The latest committed store version.
    pub fn snapshot(&self) -> Arc<ProfileStore> {
        // The cell only ever holds a fully built version, so a poisoned lock is still consistent.
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&state.store)
    }

    #[cfg(test)]
    pub fn drag(&self) -> DragSession {
        self.state.read().unwrap_or_else(PoisonError::into_inner).drag
    }

    /// Applies `action` and returns the resulting store version and drag state,
    /// both read under the same write lock.
    pub fn apply(&self, action: Action) -> Result<SessionSnapshot, ProfileError> {
        let name = action.name();
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);

        let outcome = reduce(&state.store, state.drag, action);
        match outcome {
            Ok(Transition { store, drag }) => {
                if let Some(store) = store {
                    state.store = Arc::new(store);
                }
                state.drag = drag;
                debug!(action = name, drag = ?state.drag, "Profile action applied");
                Ok(SessionSnapshot {
                    profile: Arc::clone(&state.store),
                    drag: state.drag,
                })
            }
            Err(e) => {
                info!(action = name, error = %e, "Profile action rejected");
                Err(e)
            }
        }
    }
}

/// Outcome of one action: a new store version (None = unchanged) and the next drag state.
struct Transition {
    store: Option<ProfileStore>,
    drag: DragSession,
}

impl Transition {
    fn store(store: ProfileStore, drag: DragSession) -> Self {
        Self {
            store: Some(store),
            drag,
        }
    }

    fn drag_only(drag: DragSession) -> Self {
        Self { store: None, drag }
    }
}

fn reduce(store: &ProfileStore, drag: DragSession, action: Action) -> Result<Transition, ProfileError> {
    let next = match action {
        Action::SetSummary { text } => ops::set_summary(store, &text),
        Action::SetFont { font } => ops::set_font(store, &font)?,
        Action::ToggleStrength { name } => ops::toggle_strength(store, &name),
        Action::ToggleInterest { name } => ops::toggle_interest(store, &name),
        Action::AddWorkEntry => ops::add_work_entry(store),
        Action::EditWorkField {
            index,
            field,
            value,
        } => ops::edit_work_field(store, index, field, &value)?,
        Action::EditWorkDetail { job, detail, value } => {
            ops::edit_work_detail(store, job, detail, &value)?
        }
        Action::AddWorkDetail { job } => ops::add_work_detail(store, job)?,
        Action::AddEducationEntry => ops::add_education_entry(store),
        Action::EditEducationField {
            index,
            field,
            value,
        } => ops::edit_education_field(store, index, field, &value)?,
        Action::BeginSkillDrag { index } => {
            if index >= store.skills.len() {
                return Err(ProfileError::IndexOutOfRange {
                    collection: "skills",
                    index,
                    len: store.skills.len(),
                });
            }
            return Ok(Transition::drag_only(DragSession::begin(index)));
        }
        Action::SkillPointerMove { index, geometry } => {
            if !drag.accepts(index) {
                return Ok(Transition::drag_only(drag));
            }
            ops::set_skill_level_from_pointer(store, index, geometry)?
        }
        Action::PointerUp => return Ok(Transition::drag_only(drag.end())),
        Action::CycleLanguageLevel { index } => ops::cycle_language_level(store, index)?,
        Action::ToggleEditMode => ops::toggle_edit_mode(store),
        Action::ApplyCannedEnhancement { section } => ops::apply_canned_enhancement(store, section),
        Action::RollAtsScore => ops::roll_ats_score(store, &mut rand::thread_rng()),
        Action::SetDisplayImage { image } => ops::set_display_image(store, image),
    };
    Ok(Transition::store(next, drag))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn on_track(offset: f64) -> TrackGeometry {
        TrackGeometry {
            pointer_x: 10.0 + offset,
            track_origin_x: 10.0,
            track_width: 100.0,
        }
    }

    #[test]
    fn test_rejected_action_keeps_version() {
        let session = EditorSession::default();
        let before = session.snapshot();
        let err = session
            .apply(Action::EditWorkField {
                index: 99,
                field: WorkField::Title,
                value: "x".to_string(),
            })
            .unwrap_err();
        assert!(matches!(err, ProfileError::IndexOutOfRange { .. }));
        assert!(Arc::ptr_eq(&before, &session.snapshot()));
    }

    #[test]
    fn test_add_work_entry_end_to_end() {
        let session = EditorSession::default();
        let original = session.snapshot().work_history.len();
        let store = session.apply(Action::AddWorkEntry).unwrap().profile;
        assert_eq!(store.work_history.len(), original + 1);
        assert_eq!(store.work_history[original].details, vec![String::new()]);
        assert!(Arc::ptr_eq(&store, &session.snapshot()));
    }

    #[test]
    fn test_pointer_move_without_drag_is_ignored() {
        let session = EditorSession::default();
        let before = session.snapshot();
        session
            .apply(Action::SkillPointerMove {
                index: 0,
                geometry: on_track(0.0),
            })
            .unwrap();
        assert!(Arc::ptr_eq(&before, &session.snapshot()));
    }

    #[test]
    fn test_drag_session_updates_only_dragged_skill() {
        let session = EditorSession::default();
        let began = session.apply(Action::BeginSkillDrag { index: 1 }).unwrap();
        assert_eq!(began.drag, DragSession::Dragging { index: 1 });
        assert_eq!(session.drag(), DragSession::Dragging { index: 1 });

        let store = session
            .apply(Action::SkillPointerMove {
                index: 1,
                geometry: on_track(30.0),
            })
            .unwrap()
            .profile;
        assert_eq!(store.skills[1].level(), 3);

        // a move over another bar while dragging skill 1 does nothing
        let store = session
            .apply(Action::SkillPointerMove {
                index: 2,
                geometry: on_track(0.0),
            })
            .unwrap()
            .profile;
        assert_eq!(store.skills[2].level(), 9);

        let store = session
            .apply(Action::SkillPointerMove {
                index: 1,
                geometry: on_track(300.0),
            })
            .unwrap()
            .profile;
        assert_eq!(store.skills[1].level(), 10);
    }

    #[test]
    fn test_pointer_up_always_ends_drag() {
        let session = EditorSession::default();
        session.apply(Action::BeginSkillDrag { index: 0 }).unwrap();
        session.apply(Action::PointerUp).unwrap();
        assert_eq!(session.drag(), DragSession::Idle);

        let before = session.snapshot();
        session
            .apply(Action::SkillPointerMove {
                index: 0,
                geometry: on_track(0.0),
            })
            .unwrap();
        assert!(Arc::ptr_eq(&before, &session.snapshot()));

        // pointer-up while idle is harmless
        session.apply(Action::PointerUp).unwrap();
        assert_eq!(session.drag(), DragSession::Idle);
    }

    #[test]
    fn test_begin_drag_out_of_range() {
        let session = EditorSession::default();
        assert!(session.apply(Action::BeginSkillDrag { index: 6 }).is_err());
        assert_eq!(session.drag(), DragSession::Idle);
    }

    #[test]
    fn test_invalid_geometry_keeps_drag_open() {
        let session = EditorSession::default();
        session.apply(Action::BeginSkillDrag { index: 0 }).unwrap();
        let err = session
            .apply(Action::SkillPointerMove {
                index: 0,
                geometry: TrackGeometry {
                    pointer_x: 4.0,
                    track_origin_x: 0.0,
                    track_width: 0.0,
                },
            })
            .unwrap_err();
        assert!(matches!(err, ProfileError::InvalidGeometry(_)));
        assert_eq!(session.drag(), DragSession::Dragging { index: 0 });
        assert_eq!(session.snapshot().skills[0].level(), 7);
    }

    #[test]
    fn test_apply_reports_drag_with_profile() {
        let session = EditorSession::default();
        session.apply(Action::BeginSkillDrag { index: 3 }).unwrap();
        let moved = session
            .apply(Action::SkillPointerMove {
                index: 3,
                geometry: on_track(20.0),
            })
            .unwrap();
        assert_eq!(moved.drag, DragSession::Dragging { index: 3 });
        assert_eq!(moved.profile.skills[3].level(), 2);

        let released = session.apply(Action::PointerUp).unwrap();
        assert_eq!(released.drag, DragSession::Idle);
        assert!(Arc::ptr_eq(&released.profile, &moved.profile));
    }

    #[test]
    fn test_action_deserializes_from_tagged_json() {
        let action: Action = serde_json::from_str(
            r#"{"action":"edit_education_field","index":0,"field":"university","value":"MIT"}"#,
        )
        .unwrap();
        assert_eq!(
            action,
            Action::EditEducationField {
                index: 0,
                field: EducationField::University,
                value: "MIT".to_string(),
            }
        );
    }
}
