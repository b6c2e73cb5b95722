use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::profile::ProfileError;

/// Highest proficiency level a skill or language can hold.
pub const MAX_LEVEL: u8 = 10;

// ────────────────────────────────────────────────────────────────────────────
// Entries
// ────────────────────────────────────────────────────────────────────────────

/// A named proficiency rating. Used for both skills and languages.
///
/// `level` is always within `0..=MAX_LEVEL`; every constructor and setter clamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RatedItem {
    pub name: String,
    level: u8,
}

impl RatedItem {
    pub fn new(name: impl Into<String>, level: u8) -> Self {
        Self {
            name: name.into(),
            level: level.min(MAX_LEVEL),
        }
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn with_level(&self, level: u8) -> Self {
        Self::new(self.name.clone(), level)
    }

    /// Width of the level bar as a percentage of the full track.
    pub fn percent(&self) -> u8 {
        self.level * 10
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkEntry {
    pub title: String,
    pub company: String,
    pub years: String,
    pub details: Vec<String>,
}

impl WorkEntry {
    /// The entry appended by "add work experience": all fields empty, one blank detail line.
    pub fn blank() -> Self {
        Self {
            title: String::new(),
            company: String::new(),
            years: String::new(),
            details: vec![String::new()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub university: String,
    pub year: String,
}

impl EducationEntry {
    pub fn blank() -> Self {
        Self {
            degree: String::new(),
            university: String::new(),
            year: String::new(),
        }
    }
}

/// Editable text fields of a [`WorkEntry`]. Details are addressed separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkField {
    Title,
    Company,
    Years,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationField {
    Degree,
    University,
    Year,
}

// ────────────────────────────────────────────────────────────────────────────
// Selection sets
// ────────────────────────────────────────────────────────────────────────────

/// Set of selected catalog names. Iteration (and serialization) is sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionSet(BTreeSet<String>);

impl SelectionSet {
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    /// Returns a new set with `name`'s membership flipped.
    pub fn toggled(&self, name: &str) -> Self {
        let mut next = self.0.clone();
        if !next.remove(name) {
            next.insert(name.to_string());
        }
        Self(next)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Font choice
// ────────────────────────────────────────────────────────────────────────────

/// The fixed list of document fonts offered by the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FontChoice {
    #[default]
    #[serde(rename = "sans-serif")]
    SansSerif,
    #[serde(rename = "serif")]
    Serif,
    #[serde(rename = "monospace")]
    Monospace,
    Georgia,
    Arial,
    #[serde(rename = "Courier New")]
    CourierNew,
    Roboto,
}

impl FontChoice {
    pub const ALL: [FontChoice; 7] = [
        FontChoice::SansSerif,
        FontChoice::Serif,
        FontChoice::Monospace,
        FontChoice::Georgia,
        FontChoice::Arial,
        FontChoice::CourierNew,
        FontChoice::Roboto,
    ];

    /// CSS `font-family` value.
    pub fn css_name(&self) -> &'static str {
        match self {
            FontChoice::SansSerif => "sans-serif",
            FontChoice::Serif => "serif",
            FontChoice::Monospace => "monospace",
            FontChoice::Georgia => "Georgia",
            FontChoice::Arial => "Arial",
            FontChoice::CourierNew => "Courier New",
            FontChoice::Roboto => "Roboto",
        }
    }
}

impl fmt::Display for FontChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_name())
    }
}

impl FromStr for FontChoice {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FontChoice::ALL
            .into_iter()
            .find(|f| f.css_name() == s)
            .ok_or_else(|| ProfileError::InvalidOption {
                kind: "font",
                value: s.to_string(),
            })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Store aggregate
// ────────────────────────────────────────────────────────────────────────────

/// Name and contact line printed at the top of the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactHeader {
    pub name: String,
    pub headline: String,
}

/// Opaque reference to a displayable image (a URL the client can load).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(pub String);

pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/150";

impl Default for ImageRef {
    fn default() -> Self {
        ImageRef(PLACEHOLDER_IMAGE.to_string())
    }
}

/// The whole editable document.
///
/// Every sub-field sits behind an `Arc`. A mutation builds a new store that shares
/// every untouched sub-field with the previous version, so `Arc::ptr_eq` on a
/// sibling tells a renderer it has not changed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileStore {
    pub header: Arc<ContactHeader>,
    pub summary: Arc<str>,
    pub work_history: Arc<Vec<WorkEntry>>,
    pub education: Arc<Vec<EducationEntry>>,
    pub skills: Arc<Vec<RatedItem>>,
    pub languages: Arc<Vec<RatedItem>>,
    pub selected_strengths: Arc<SelectionSet>,
    pub selected_interests: Arc<SelectionSet>,
    pub display_image: Arc<ImageRef>,
    pub font: FontChoice,
    pub edit_mode: bool,
    /// Placeholder score from [`crate::profile::score`]; not a real ATS analysis.
    pub ats_score: Option<u8>,
}
