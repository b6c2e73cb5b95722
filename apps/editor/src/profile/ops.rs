//! Mutation operations over [`ProfileStore`].
//!
//! Every function here is pure: it reads the current store and returns a new one
//! with exactly one sub-field replaced. The input is never modified. On error no
//! store is produced, so the caller keeps the previous version.

use std::sync::Arc;

use rand::Rng;

use crate::profile::canned::{
    enhanced_education, enhanced_work_history, EnhanceSection, ENHANCED_SUMMARY,
};
use crate::profile::drag::{level_from_pointer, TrackGeometry};
use crate::profile::models::{
    EducationEntry, EducationField, FontChoice, ImageRef, ProfileStore, RatedItem, WorkEntry,
    WorkField, MAX_LEVEL,
};
use crate::profile::score::roll_placeholder_score;
use crate::profile::ProfileError;

fn check_index(collection: &'static str, index: usize, len: usize) -> Result<(), ProfileError> {
    if index >= len {
        return Err(ProfileError::IndexOutOfRange {
            collection,
            index,
            len,
        });
    }
    Ok(())
}

/// Copies `items` and replaces the element at `index` with `f(&items[index])`.
fn replace_at<T: Clone>(
    collection: &'static str,
    items: &[T],
    index: usize,
    f: impl FnOnce(&T) -> Result<T, ProfileError>,
) -> Result<Vec<T>, ProfileError> {
    check_index(collection, index, items.len())?;
    let replacement = f(&items[index])?;
    let mut next = items.to_vec();
    next[index] = replacement;
    Ok(next)
}

// ────────────────────────────────────────────────────────────────────────────
// Text and presentation
// ────────────────────────────────────────────────────────────────────────────

pub fn set_summary(store: &ProfileStore, text: &str) -> ProfileStore {
    ProfileStore {
        summary: Arc::from(text),
        ..store.clone()
    }
}

/// Sets the document font. `choice` must name one of [`FontChoice::ALL`].
pub fn set_font(store: &ProfileStore, choice: &str) -> Result<ProfileStore, ProfileError> {
    let font: FontChoice = choice.parse()?;
    Ok(ProfileStore {
        font,
        ..store.clone()
    })
}

pub fn toggle_edit_mode(store: &ProfileStore) -> ProfileStore {
    ProfileStore {
        edit_mode: !store.edit_mode,
        ..store.clone()
    }
}

pub fn set_display_image(store: &ProfileStore, image: ImageRef) -> ProfileStore {
    ProfileStore {
        display_image: Arc::new(image),
        ..store.clone()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Selections
// ────────────────────────────────────────────────────────────────────────────

/// Flips membership of `name`. Names outside the catalog are accepted as-is.
pub fn toggle_strength(store: &ProfileStore, name: &str) -> ProfileStore {
    ProfileStore {
        selected_strengths: Arc::new(store.selected_strengths.toggled(name)),
        ..store.clone()
    }
}

pub fn toggle_interest(store: &ProfileStore, name: &str) -> ProfileStore {
    ProfileStore {
        selected_interests: Arc::new(store.selected_interests.toggled(name)),
        ..store.clone()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Work history
// ────────────────────────────────────────────────────────────────────────────

pub fn add_work_entry(store: &ProfileStore) -> ProfileStore {
    let mut work = store.work_history.to_vec();
    work.push(WorkEntry::blank());
    ProfileStore {
        work_history: Arc::new(work),
        ..store.clone()
    }
}

pub fn edit_work_field(
    store: &ProfileStore,
    index: usize,
    field: WorkField,
    value: &str,
) -> Result<ProfileStore, ProfileError> {
    let work = replace_at("work_history", store.work_history.as_slice(), index, |job| {
        let mut job = job.clone();
        match field {
            WorkField::Title => job.title = value.to_string(),
            WorkField::Company => job.company = value.to_string(),
            WorkField::Years => job.years = value.to_string(),
        }
        Ok(job)
    })?;
    Ok(ProfileStore {
        work_history: Arc::new(work),
        ..store.clone()
    })
}

pub fn edit_work_detail(
    store: &ProfileStore,
    job_index: usize,
    detail_index: usize,
    value: &str,
) -> Result<ProfileStore, ProfileError> {
    let work = replace_at("work_history", store.work_history.as_slice(), job_index, |job| {
        let details = replace_at("details", &job.details, detail_index, |_| {
            Ok(value.to_string())
        })?;
        Ok(WorkEntry {
            details,
            ..job.clone()
        })
    })?;
    Ok(ProfileStore {
        work_history: Arc::new(work),
        ..store.clone()
    })
}

/// Appends an empty detail line to job `job_index`.
pub fn add_work_detail(store: &ProfileStore, job_index: usize) -> Result<ProfileStore, ProfileError> {
    let work = replace_at("work_history", store.work_history.as_slice(), job_index, |job| {
        let mut job = job.clone();
        job.details.push(String::new());
        Ok(job)
    })?;
    Ok(ProfileStore {
        work_history: Arc::new(work),
        ..store.clone()
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Education
// ────────────────────────────────────────────────────────────────────────────

pub fn add_education_entry(store: &ProfileStore) -> ProfileStore {
    let mut education = store.education.to_vec();
    education.push(EducationEntry::blank());
    ProfileStore {
        education: Arc::new(education),
        ..store.clone()
    }
}

pub fn edit_education_field(
    store: &ProfileStore,
    index: usize,
    field: EducationField,
    value: &str,
) -> Result<ProfileStore, ProfileError> {
    let education = replace_at("education", store.education.as_slice(), index, |entry| {
        let mut entry = entry.clone();
        match field {
            EducationField::Degree => entry.degree = value.to_string(),
            EducationField::University => entry.university = value.to_string(),
            EducationField::Year => entry.year = value.to_string(),
        }
        Ok(entry)
    })?;
    Ok(ProfileStore {
        education: Arc::new(education),
        ..store.clone()
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Levels
// ────────────────────────────────────────────────────────────────────────────

/// Sets skill `index` from a pointer position on its track.
///
/// See [`level_from_pointer`] for the rounding rule and geometry errors. Callers
/// gate this on the drag session; the op itself does not look at it.
pub fn set_skill_level_from_pointer(
    store: &ProfileStore,
    index: usize,
    geometry: TrackGeometry,
) -> Result<ProfileStore, ProfileError> {
    check_index("skills", index, store.skills.len())?;
    let level = level_from_pointer(geometry)?;
    let skills = replace_at("skills", store.skills.as_slice(), index, |skill| {
        Ok(skill.with_level(level))
    })?;
    Ok(ProfileStore {
        skills: Arc::new(skills),
        ..store.clone()
    })
}

/// Next language level: `MAX_LEVEL` wraps to 1, anything else goes up by one.
pub fn next_language_level(level: u8) -> u8 {
    if level >= MAX_LEVEL {
        1
    } else {
        level + 1
    }
}

pub fn cycle_language_level(store: &ProfileStore, index: usize) -> Result<ProfileStore, ProfileError> {
    let languages = replace_at("languages", store.languages.as_slice(), index, |lang: &RatedItem| {
        Ok(lang.with_level(next_language_level(lang.level())))
    })?;
    Ok(ProfileStore {
        languages: Arc::new(languages),
        ..store.clone()
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Assist and score
// ────────────────────────────────────────────────────────────────────────────

/// Overwrites `section` with its canned replacement, whatever it held before.
pub fn apply_canned_enhancement(store: &ProfileStore, section: EnhanceSection) -> ProfileStore {
    match section {
        EnhanceSection::Summary => ProfileStore {
            summary: Arc::from(ENHANCED_SUMMARY),
            ..store.clone()
        },
        EnhanceSection::WorkHistory => ProfileStore {
            work_history: Arc::new(enhanced_work_history()),
            ..store.clone()
        },
        EnhanceSection::Education => ProfileStore {
            education: Arc::new(enhanced_education()),
            ..store.clone()
        },
    }
}

/// Stores a fresh placeholder score. The number says nothing about the resume.
pub fn roll_ats_score<R: Rng + ?Sized>(store: &ProfileStore, rng: &mut R) -> ProfileStore {
    ProfileStore {
        ats_score: Some(roll_placeholder_score(rng)),
        ..store.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::score::{ATS_SCORE_MAX, ATS_SCORE_MIN};
    use crate::profile::seed::sample_profile;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn geom(offset: f64) -> TrackGeometry {
        TrackGeometry {
            pointer_x: 100.0 + offset,
            track_origin_x: 100.0,
            track_width: 100.0,
        }
    }

    #[test]
    fn test_set_summary_replaces_verbatim() {
        let store = sample_profile();
        let next = set_summary(&store, "  short \n summary ");
        assert_eq!(&*next.summary, "  short \n summary ");
        assert!(Arc::ptr_eq(&store.work_history, &next.work_history));
        // original untouched
        assert_ne!(&*store.summary, &*next.summary);
    }

    #[test]
    fn test_set_font_rejects_unknown() {
        let store = sample_profile();
        assert_eq!(set_font(&store, "Georgia").unwrap().font, FontChoice::Georgia);
        let err = set_font(&store, "Papyrus").unwrap_err();
        assert!(matches!(err, ProfileError::InvalidOption { .. }));
    }

    #[test]
    fn test_toggle_strength_is_its_own_inverse() {
        let store = sample_profile();
        let once = toggle_strength(&store, "Planning");
        assert!(once.selected_strengths.contains("Planning"));
        let twice = toggle_strength(&once, "Planning");
        assert_eq!(*twice.selected_strengths, *store.selected_strengths);
        assert!(Arc::ptr_eq(&store.selected_interests, &twice.selected_interests));
    }

    #[test]
    fn test_toggle_unknown_interest_is_added() {
        let store = toggle_interest(&sample_profile(), "Knitting");
        assert!(store.selected_interests.contains("Knitting"));
    }

    #[test]
    fn test_add_work_entry_appends_blank() {
        let store = sample_profile();
        let next = add_work_entry(&store);
        assert_eq!(next.work_history.len(), store.work_history.len() + 1);
        let added = next.work_history.last().unwrap();
        assert_eq!(
            *added,
            WorkEntry {
                title: String::new(),
                company: String::new(),
                years: String::new(),
                details: vec![String::new()],
            }
        );
        assert_eq!(next.work_history[0], store.work_history[0]);
    }

    #[test]
    fn test_edit_work_field_touches_only_target() {
        let store = add_work_entry(&sample_profile());
        let next = edit_work_field(&store, 1, WorkField::Company, "Initech").unwrap();
        assert_eq!(next.work_history[1].company, "Initech");
        assert_eq!(next.work_history[1].title, "");
        assert_eq!(next.work_history[0], store.work_history[0]);
        assert!(Arc::ptr_eq(&store.education, &next.education));
        assert!(Arc::ptr_eq(&store.skills, &next.skills));
        assert_eq!(store.work_history[1].company, "");
    }

    #[test]
    fn test_edit_work_field_out_of_range() {
        let store = sample_profile();
        let err = edit_work_field(&store, 99, WorkField::Title, "x").unwrap_err();
        assert!(matches!(
            err,
            ProfileError::IndexOutOfRange {
                collection: "work_history",
                index: 99,
                len: 1
            }
        ));
        assert_eq!(store, sample_profile());
    }

    #[test]
    fn test_edit_work_detail_bounds() {
        let store = sample_profile();
        let next = edit_work_detail(&store, 0, 1, "Shipped things.").unwrap();
        assert_eq!(next.work_history[0].details[1], "Shipped things.");
        assert_eq!(next.work_history[0].details[0], store.work_history[0].details[0]);

        assert!(matches!(
            edit_work_detail(&store, 0, 2, "x"),
            Err(ProfileError::IndexOutOfRange { collection: "details", .. })
        ));
        assert!(matches!(
            edit_work_detail(&store, 3, 0, "x"),
            Err(ProfileError::IndexOutOfRange { collection: "work_history", .. })
        ));
    }

    #[test]
    fn test_add_work_detail() {
        let next = add_work_detail(&sample_profile(), 0).unwrap();
        assert_eq!(next.work_history[0].details.len(), 3);
        assert_eq!(next.work_history[0].details[2], "");
        assert!(add_work_detail(&next, 1).is_err());
    }

    #[test]
    fn test_education_add_and_edit() {
        let store = add_education_entry(&sample_profile());
        assert_eq!(store.education.len(), 2);
        assert_eq!(store.education[1], EducationEntry::blank());

        let next = edit_education_field(&store, 1, EducationField::Year, "2030").unwrap();
        assert_eq!(next.education[1].year, "2030");
        assert_eq!(next.education[0], store.education[0]);
        assert!(Arc::ptr_eq(&store.work_history, &next.work_history));

        assert!(matches!(
            edit_education_field(&store, 2, EducationField::Degree, "x"),
            Err(ProfileError::IndexOutOfRange { collection: "education", index: 2, len: 2 })
        ));
    }

    #[test]
    fn test_skill_level_from_pointer() {
        let store = sample_profile();
        let next = set_skill_level_from_pointer(&store, 0, geom(55.0)).unwrap();
        assert_eq!(next.skills[0].level(), 6);
        assert_eq!(next.skills[1], store.skills[1]);
        assert!(Arc::ptr_eq(&store.languages, &next.languages));

        let zeroed = set_skill_level_from_pointer(&store, 0, geom(-10.0)).unwrap();
        assert_eq!(zeroed.skills[0].level(), 0);
    }

    #[test]
    fn test_skill_level_errors_leave_store_unchanged() {
        let store = sample_profile();
        let flat = TrackGeometry {
            pointer_x: 5.0,
            track_origin_x: 0.0,
            track_width: 0.0,
        };
        assert!(matches!(
            set_skill_level_from_pointer(&store, 0, flat),
            Err(ProfileError::InvalidGeometry(_))
        ));
        assert!(matches!(
            set_skill_level_from_pointer(&store, 6, geom(10.0)),
            Err(ProfileError::IndexOutOfRange { collection: "skills", .. })
        ));
    }

    #[test]
    fn test_language_cycle_has_length_ten() {
        let mut store = sample_profile();
        let start = store.languages[1].level();
        for _ in 0..10 {
            store = cycle_language_level(&store, 1).unwrap();
        }
        assert_eq!(store.languages[1].level(), start);
    }

    #[test]
    fn test_language_wraps_ten_to_one() {
        let store = sample_profile();
        assert_eq!(store.languages[0].level(), 10);
        let next = cycle_language_level(&store, 0).unwrap();
        assert_eq!(next.languages[0].level(), 1);
        assert_eq!(next_language_level(0), 1);
        assert_eq!(next_language_level(9), 10);
        assert!(cycle_language_level(&store, 3).is_err());
    }

    #[test]
    fn test_toggle_edit_mode_keeps_data() {
        let store = sample_profile();
        let next = toggle_edit_mode(&store);
        assert!(next.edit_mode);
        assert!(Arc::ptr_eq(&store.summary, &next.summary));
        assert!(Arc::ptr_eq(&store.work_history, &next.work_history));
        assert!(!toggle_edit_mode(&next).edit_mode);
    }

    #[test]
    fn test_canned_summary_ignores_prior_content() {
        let a = apply_canned_enhancement(&sample_profile(), EnhanceSection::Summary);
        let b = apply_canned_enhancement(
            &set_summary(&sample_profile(), "anything at all"),
            EnhanceSection::Summary,
        );
        assert_eq!(&*a.summary, ENHANCED_SUMMARY);
        assert_eq!(&*b.summary, ENHANCED_SUMMARY);
    }

    #[test]
    fn test_canned_work_and_education_overwrite() {
        let store = add_work_entry(&add_work_entry(&sample_profile()));
        let next = apply_canned_enhancement(&store, EnhanceSection::WorkHistory);
        assert_eq!(next.work_history.len(), 1);
        assert_eq!(next.work_history[0].title, "Senior Front End Developer");
        assert_eq!(next.work_history[0].details.len(), 3);
        assert!(Arc::ptr_eq(&store.education, &next.education));

        let edu = apply_canned_enhancement(&store, EnhanceSection::Education);
        assert!(edu.education[0].university.contains("Graduated with Distinction"));
    }

    #[test]
    fn test_roll_ats_score_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut store = sample_profile();
        for _ in 0..500 {
            store = roll_ats_score(&store, &mut rng);
            let v = store.ats_score.unwrap();
            assert!((ATS_SCORE_MIN..=ATS_SCORE_MAX).contains(&v));
        }
    }
}
