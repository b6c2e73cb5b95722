//! The sample resume every session starts from, plus the fixed selection catalogs.

use std::sync::Arc;

use crate::profile::models::{
    ContactHeader, EducationEntry, FontChoice, ImageRef, ProfileStore, RatedItem, SelectionSet,
    WorkEntry,
};

pub const STRENGTH_CATALOG: [&str; 4] = ["Patience", "Perseverance", "Planning", "Positivity"];

pub const INTEREST_CATALOG: [&str; 4] =
    ["Surfing", "Martial Arts", "Community Service", "Blogging"];

const SEED_NAME: &str = "Evelyn White";
const SEED_HEADLINE: &str =
    "Frontend Developer | evelyn@example.com | +1234567890 | New York, NY";

const SEED_SUMMARY: &str = "Detail-oriented Front End Web Developer with 5+ years of experience in creating responsive, user-friendly websites. Proficient in HTML, CSS, and JavaScript, with a strong understanding of frameworks like React and Vue.js. Passionate about performance optimization and clean code.";

const SEED_SKILLS: [(&str, u8); 6] = [
    ("Service Workers", 7),
    ("Seo Basics", 8),
    ("Testing/debugging", 9),
    ("Chrome Devtools", 10),
    ("Front-end Frameworks", 10),
    ("State Management", 8),
];

const SEED_LANGUAGES: [(&str, u8); 3] = [("English", 10), ("French", 7), ("Mandarin", 5)];

fn rated(items: &[(&str, u8)]) -> Vec<RatedItem> {
    items
        .iter()
        .map(|(name, level)| RatedItem::new(*name, *level))
        .collect()
}

/// Builds the sample resume.
pub fn sample_profile() -> ProfileStore {
    ProfileStore {
        header: Arc::new(ContactHeader {
            name: SEED_NAME.to_string(),
            headline: SEED_HEADLINE.to_string(),
        }),
        summary: Arc::from(SEED_SUMMARY),
        work_history: Arc::new(vec![WorkEntry {
            title: "Front End Web Developer".to_string(),
            company: "ABC Corporation".to_string(),
            years: "2019 - Present".to_string(),
            details: vec![
                "Developed and maintained web applications using React and Vue.js.".to_string(),
                "Collaborated with designers and backend developers.".to_string(),
            ],
        }]),
        education: Arc::new(vec![EducationEntry {
            degree: "B.Tech in Computer Science & Engineering".to_string(),
            university: "PES University, Bangalore".to_string(),
            year: "2025".to_string(),
        }]),
        skills: Arc::new(rated(&SEED_SKILLS)),
        languages: Arc::new(rated(&SEED_LANGUAGES)),
        selected_strengths: Arc::new(SelectionSet::default()),
        selected_interests: Arc::new(SelectionSet::default()),
        display_image: Arc::new(ImageRef::default()),
        font: FontChoice::default(),
        edit_mode: false,
        ats_score: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::models::PLACEHOLDER_IMAGE;

    #[test]
    fn test_sample_profile_shape() {
        let store = sample_profile();
        assert_eq!(store.header.name, "Evelyn White");
        assert_eq!(store.work_history.len(), 1);
        assert_eq!(store.work_history[0].details.len(), 2);
        assert_eq!(store.education.len(), 1);
        assert_eq!(store.skills.len(), 6);
        assert_eq!(store.languages.len(), 3);
        assert_eq!(store.languages[2].level(), 5);
        assert_eq!(*store.selected_strengths, SelectionSet::default());
        assert_eq!(*store.selected_interests, SelectionSet::default());
        assert_eq!(store.display_image.0, PLACEHOLDER_IMAGE);
        assert_eq!(store.font, FontChoice::SansSerif);
        assert!(!store.edit_mode);
        assert_eq!(store.ats_score, None);
    }
}
