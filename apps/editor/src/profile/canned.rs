//! "AI assist" stub: fixed replacement text per document section.
//!
//! Nothing here looks at the current content. Each enhancement overwrites its
//! section with the literal values below, shaped exactly like the seed data.

use serde::{Deserialize, Serialize};

use crate::profile::models::{EducationEntry, WorkEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnhanceSection {
    Summary,
    WorkHistory,
    Education,
}

pub const ENHANCED_SUMMARY: &str = "Creative and highly motivated Front End Developer with a proven track record of building dynamic, user-centric web applications. Skilled in modern front-end technologies including React, Vue.js, and performance best practices. Adept at collaborating across teams to deliver scalable, maintainable code and exceptional user experiences.";

pub fn enhanced_work_history() -> Vec<WorkEntry> {
    vec![WorkEntry {
        title: "Senior Front End Developer".to_string(),
        company: "ABC Corporation".to_string(),
        years: "2019 - Present".to_string(),
        details: vec![
            "Led the front-end development of high-impact projects using React, improving performance by 30%.".to_string(),
            "Mentored junior developers and conducted code reviews to uphold best practices.".to_string(),
            "Worked cross-functionally with design and product teams to deliver seamless user interfaces.".to_string(),
        ],
    }]
}

pub fn enhanced_education() -> Vec<EducationEntry> {
    vec![EducationEntry {
        degree: "B.Tech in Computer Science & Engineering".to_string(),
        university: "PES University, Bangalore - Graduated with Distinction, CGPA: 9.1/10"
            .to_string(),
        year: "2025".to_string(),
    }]
}
