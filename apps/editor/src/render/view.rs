//! Derived view tree for a [`ProfileStore`].
//!
//! `render` is a pure function of the store. Its only decision is per field: an
//! editing widget when `edit_mode` is on, static text when it is off. The tree is
//! serialized to clients as JSON and turned into the export surface by
//! [`crate::render::html`].

use serde::Serialize;

use crate::profile::models::{
    EducationEntry, EducationField, FontChoice, ProfileStore, RatedItem, WorkEntry, WorkField,
    MAX_LEVEL,
};
use crate::profile::seed::{INTEREST_CATALOG, STRENGTH_CATALOG};

/// Which store field an editing widget writes back to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "target", rename_all = "snake_case")]
pub enum FieldPath {
    Summary,
    Work { index: usize, field: WorkField },
    WorkDetail { job: usize, detail: usize },
    Education { index: usize, field: EducationField },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChipGroup {
    Strengths,
    Interests,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonAction {
    AddWorkEntry,
    AddWorkDetail { job: usize },
    AddEducationEntry,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViewNode {
    Heading { level: u8, text: String },
    Text { text: String, bold: bool },
    TextInput { field: FieldPath, value: String, bold: bool },
    TextArea { field: FieldPath, value: String, rows: u8 },
    BulletList { items: Vec<String> },
    /// Draggable skill bar.
    LevelBar { index: usize, name: String, level: u8, percent: u8 },
    /// Clickable language label, e.g. "French: 7/10".
    LevelLabel { index: usize, label: String, level: u8 },
    Chip { group: ChipGroup, name: String, selected: bool },
    Image { src: String, alt: String },
    Button { action: ButtonAction, label: String },
    Block { children: Vec<ViewNode> },
}

/// The three panels of the editor page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewTree {
    pub font: FontChoice,
    pub edit_mode: bool,
    /// Tool panel status (score readout).
    pub tools: Vec<ViewNode>,
    /// Photo, skills, languages, strengths, interests.
    pub profile_panel: Vec<ViewNode>,
    /// The resume body. This is the part handed to the export boundary.
    pub document: Vec<ViewNode>,
}

pub fn render(store: &ProfileStore) -> ViewTree {
    ViewTree {
        font: store.font,
        edit_mode: store.edit_mode,
        tools: render_tools(store),
        profile_panel: render_profile_panel(store),
        document: render_document(store),
    }
}

fn heading(level: u8, text: &str) -> ViewNode {
    ViewNode::Heading {
        level,
        text: text.to_string(),
    }
}

fn text(text: &str) -> ViewNode {
    ViewNode::Text {
        text: text.to_string(),
        bold: false,
    }
}

fn render_tools(store: &ProfileStore) -> Vec<ViewNode> {
    match store.ats_score {
        Some(score) => vec![text(&format!("ATS Score: {score}/100"))],
        None => Vec::new(),
    }
}

fn render_profile_panel(store: &ProfileStore) -> Vec<ViewNode> {
    let mut nodes = vec![ViewNode::Image {
        src: store.display_image.0.clone(),
        alt: "Profile".to_string(),
    }];

    nodes.push(heading(3, "Skills"));
    nodes.extend(store.skills.iter().enumerate().map(|(index, skill)| {
        ViewNode::LevelBar {
            index,
            name: skill.name.clone(),
            level: skill.level(),
            percent: skill.percent(),
        }
    }));

    nodes.push(heading(3, "Languages"));
    nodes.extend(
        store
            .languages
            .iter()
            .enumerate()
            .map(|(index, lang)| language_label(index, lang)),
    );

    nodes.push(heading(3, "Strengths"));
    nodes.extend(STRENGTH_CATALOG.iter().map(|name| ViewNode::Chip {
        group: ChipGroup::Strengths,
        name: name.to_string(),
        selected: store.selected_strengths.contains(name),
    }));

    nodes.push(heading(3, "Interests"));
    nodes.extend(INTEREST_CATALOG.iter().map(|name| ViewNode::Chip {
        group: ChipGroup::Interests,
        name: name.to_string(),
        selected: store.selected_interests.contains(name),
    }));

    nodes
}

fn language_label(index: usize, lang: &RatedItem) -> ViewNode {
    ViewNode::LevelLabel {
        index,
        label: format!("{}: {}/{}", lang.name, lang.level(), MAX_LEVEL),
        level: lang.level(),
    }
}

fn render_document(store: &ProfileStore) -> Vec<ViewNode> {
    let editing = store.edit_mode;
    let mut nodes = vec![heading(1, &store.header.name), text(&store.header.headline)];

    nodes.push(heading(2, "Professional Summary"));
    nodes.push(if editing {
        ViewNode::TextArea {
            field: FieldPath::Summary,
            value: store.summary.to_string(),
            rows: 4,
        }
    } else {
        text(&store.summary)
    });

    nodes.push(heading(2, "Work Experience"));
    nodes.extend(
        store
            .work_history
            .iter()
            .enumerate()
            .map(|(index, job)| render_work_entry(index, job, editing)),
    );
    if editing {
        nodes.push(ViewNode::Button {
            action: ButtonAction::AddWorkEntry,
            label: "+ Add Work Experience".to_string(),
        });
    }

    nodes.push(heading(2, "Education"));
    nodes.extend(
        store
            .education
            .iter()
            .enumerate()
            .map(|(index, entry)| render_education_entry(index, entry, editing)),
    );
    if editing {
        nodes.push(ViewNode::Button {
            action: ButtonAction::AddEducationEntry,
            label: "+ Add Education".to_string(),
        });
    }

    nodes
}

fn render_work_entry(index: usize, job: &WorkEntry, editing: bool) -> ViewNode {
    if !editing {
        return ViewNode::Block {
            children: vec![
                ViewNode::Text {
                    text: job.title.clone(),
                    bold: true,
                },
                text(&job.company),
                text(&job.years),
                ViewNode::BulletList {
                    items: job.details.clone(),
                },
            ],
        };
    }

    let input = |field: WorkField, value: &str, bold: bool| ViewNode::TextInput {
        field: FieldPath::Work { index, field },
        value: value.to_string(),
        bold,
    };
    let mut children = vec![
        input(WorkField::Title, &job.title, true),
        input(WorkField::Company, &job.company, false),
        input(WorkField::Years, &job.years, false),
    ];

    // An entry always shows at least one detail editor, even with no details stored.
    let blank = [String::new()];
    let details: &[String] = if job.details.is_empty() {
        &blank
    } else {
        &job.details
    };
    children.extend(
        details
            .iter()
            .enumerate()
            .map(|(detail, value)| ViewNode::TextArea {
                field: FieldPath::WorkDetail { job: index, detail },
                value: value.clone(),
                rows: 2,
            }),
    );
    children.push(ViewNode::Button {
        action: ButtonAction::AddWorkDetail { job: index },
        label: "+ Add Detail".to_string(),
    });

    ViewNode::Block { children }
}

fn render_education_entry(index: usize, entry: &EducationEntry, editing: bool) -> ViewNode {
    let fields = [
        (EducationField::Degree, &entry.degree),
        (EducationField::University, &entry.university),
        (EducationField::Year, &entry.year),
    ];
    let children = fields
        .into_iter()
        .map(|(field, value)| {
            if editing {
                ViewNode::TextInput {
                    field: FieldPath::Education { index, field },
                    value: value.clone(),
                    bold: false,
                }
            } else {
                text(value)
            }
        })
        .collect();
    ViewNode::Block { children }
}
