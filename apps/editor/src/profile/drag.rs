//! Drag-to-level for skill bars.
//!
//! A skill bar is a horizontal track. While the user holds the pointer down on a
//! bar, every pointer move sets that skill's level proportionally to where the
//! pointer sits on the track. Releasing the pointer anywhere ends the gesture.
//!
//! # Rounding
//! `offset * 10 / width` is rounded half up (ties go to the higher level):
//! on a 100px track an offset of 45 gives level 5 and 55 gives level 6.

use serde::{Deserialize, Serialize};

use crate::profile::models::MAX_LEVEL;
use crate::profile::ProfileError;

/// Pointer position and the on-screen bounds of the track it moved over.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackGeometry {
    pub pointer_x: f64,
    pub track_origin_x: f64,
    pub track_width: f64,
}

/// Converts a pointer position on a track into a level in `0..=MAX_LEVEL`.
///
/// The offset is clamped into `[0, track_width]` first, so positions left of the
/// track read as 0 and positions right of it as `MAX_LEVEL`. A zero, negative or
/// non-finite width, or a non-finite pointer, is rejected with `InvalidGeometry`.
pub fn level_from_pointer(geometry: TrackGeometry) -> Result<u8, ProfileError> {
    let TrackGeometry {
        pointer_x,
        track_origin_x,
        track_width,
    } = geometry;

    if !track_width.is_finite() || track_width <= 0.0 {
        return Err(ProfileError::InvalidGeometry(track_width));
    }
    if !pointer_x.is_finite() || !track_origin_x.is_finite() {
        return Err(ProfileError::InvalidGeometry(track_width));
    }

    let offset = (pointer_x - track_origin_x).clamp(0.0, track_width);
    // offset >= 0, so f64::round (half away from zero) is round-half-up here.
    let level = (offset * f64::from(MAX_LEVEL) / track_width).round();
    Ok(level as u8)
}

// ────────────────────────────────────────────────────────────────────────────
// Drag session state machine
// ────────────────────────────────────────────────────────────────────────────

/// Which skill bar, if any, is currently being dragged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DragSession {
    #[default]
    Idle,
    Dragging { index: usize },
}

impl DragSession {
    /// Pointer-down over skill `index`. Replaces any session already open.
    pub fn begin(index: usize) -> Self {
        DragSession::Dragging { index }
    }

    /// Pointer-up, anywhere. Always returns to idle.
    pub fn end(self) -> Self {
        DragSession::Idle
    }

    /// True when a pointer move over `index` should recompute that skill's level.
    pub fn accepts(&self, index: usize) -> bool {
        matches!(self, DragSession::Dragging { index: i } if *i == index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geom(offset: f64, width: f64) -> TrackGeometry {
        TrackGeometry {
            pointer_x: 20.0 + offset,
            track_origin_x: 20.0,
            track_width: width,
        }
    }

    #[test]
    fn test_track_endpoints() {
        assert_eq!(level_from_pointer(geom(0.0, 100.0)).unwrap(), 0);
        assert_eq!(level_from_pointer(geom(100.0, 100.0)).unwrap(), 10);
    }

    #[test]
    fn test_round_half_up_boundary() {
        assert_eq!(level_from_pointer(geom(44.0, 100.0)).unwrap(), 4);
        assert_eq!(level_from_pointer(geom(45.0, 100.0)).unwrap(), 5);
        assert_eq!(level_from_pointer(geom(55.0, 100.0)).unwrap(), 6);
        assert_eq!(level_from_pointer(geom(54.9, 100.0)).unwrap(), 5);
    }

    #[test]
    fn test_pointer_outside_track_is_clamped() {
        assert_eq!(level_from_pointer(geom(-35.0, 100.0)).unwrap(), 0);
        assert_eq!(level_from_pointer(geom(250.0, 100.0)).unwrap(), 10);
    }

    #[test]
    fn test_proportional_on_odd_width() {
        // 120 of 240 = half the track
        assert_eq!(level_from_pointer(geom(120.0, 240.0)).unwrap(), 5);
        assert_eq!(level_from_pointer(geom(23.0, 240.0)).unwrap(), 1);
    }

    #[test]
    fn test_zero_width_is_invalid_geometry() {
        let err = level_from_pointer(geom(10.0, 0.0)).unwrap_err();
        assert!(matches!(err, ProfileError::InvalidGeometry(w) if w == 0.0));
        assert!(level_from_pointer(geom(10.0, -5.0)).is_err());
        assert!(level_from_pointer(geom(10.0, f64::NAN)).is_err());
        assert!(level_from_pointer(geom(f64::INFINITY, 100.0)).is_err());
    }

    #[test]
    fn test_session_transitions() {
        let idle = DragSession::default();
        assert!(!idle.accepts(0));

        let dragging = DragSession::begin(2);
        assert!(dragging.accepts(2));
        assert!(!dragging.accepts(1));

        assert_eq!(dragging.end(), DragSession::Idle);
        assert_eq!(DragSession::Idle.end(), DragSession::Idle);
    }
}
