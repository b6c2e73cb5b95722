use serde::{Deserialize, Serialize};

/// Page and rasterization settings passed to the document renderer.
///
/// Defaults reproduce the editor's historical PDF output: US letter, portrait,
/// no margin, JPEG page images at quality 0.98 rasterized at 2x.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportOptions {
    pub filename: String,
    pub format: PageFormat,
    pub orientation: Orientation,
    /// Unit for `margin`.
    pub unit: String,
    pub margin: f32,
    pub image_type: String,
    pub image_quality: f32,
    pub scale: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageFormat {
    Letter,
    A4,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl ExportOptions {
    /// Default options for a document owned by `name`.
    pub fn for_owner(name: &str) -> Self {
        Self {
            filename: export_filename(name),
            format: PageFormat::Letter,
            orientation: Orientation::Portrait,
            unit: "in".to_string(),
            margin: 0.0,
            image_type: "jpeg".to_string(),
            image_quality: 0.98,
            scale: 2.0,
        }
    }
}

/// `<Name>_Resume.pdf`, with whitespace runs in the name collapsed to `_`.
pub fn export_filename(name: &str) -> String {
    let stem: Vec<&str> = name.split_whitespace().collect();
    if stem.is_empty() {
        return "Resume.pdf".to_string();
    }
    format!("{}_Resume.pdf", stem.join("_"))
}
