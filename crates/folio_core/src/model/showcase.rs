//! Services and skills showcase records.
//!
//! Static cards for the Services and Skills sections. They participate in
//! rendering only and are never filtered or transformed.

use serde::{Deserialize, Serialize};

/// One card in the Services section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceOffering {
    /// Card heading.
    pub title: String,
    /// One-paragraph description.
    pub blurb: String,
    /// Bullet list under the blurb, in display order.
    pub bullets: Vec<String>,
}

impl ServiceOffering {
    /// Creates an offering from literal content.
    pub fn new(title: impl Into<String>, blurb: impl Into<String>, bullets: &[&str]) -> Self {
        Self {
            title: title.into(),
            blurb: blurb.into(),
            bullets: bullets.iter().map(|item| (*item).to_string()).collect(),
        }
    }
}

/// One card in the Skills section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGroup {
    /// Group heading.
    pub heading: String,
    /// Comma-separated stack summary, kept as one line of prose.
    pub stack: String,
}

impl SkillGroup {
    /// Creates a group from literal content.
    pub fn new(heading: impl Into<String>, stack: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            stack: stack.into(),
        }
    }
}
