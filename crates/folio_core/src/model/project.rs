//! Project gallery record.
//!
//! # Responsibility
//! - Define the canonical shape of one gallery entry.
//!
//! # Invariants
//! - `title` is unique within the built-in catalog (practical invariant,
//!   not enforced).
//! - `tags` is non-empty; membership tests use exact string equality.

use serde::{Deserialize, Serialize};

/// One entry of the project gallery.
///
/// Records are compiled-in content: they are constructed once at startup and
/// never change afterwards. Rendering order is the order they appear in the
/// catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    /// Human-readable display name.
    pub title: String,
    /// Absolute URL to the external source repository.
    pub repo_url: String,
    /// Free-text description shown on the card.
    pub summary: String,
    /// Short category labels in display order. May repeat across records.
    pub tags: Vec<String>,
}

impl ProjectRecord {
    /// Creates a record from literal content.
    pub fn new(
        title: impl Into<String>,
        repo_url: impl Into<String>,
        summary: impl Into<String>,
        tags: &[&str],
    ) -> Self {
        Self {
            title: title.into(),
            repo_url: repo_url.into(),
            summary: summary.into(),
            tags: tags.iter().map(|tag| (*tag).to_string()).collect(),
        }
    }

    /// Returns whether this record carries the given tag, byte-for-byte.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|candidate| candidate == tag)
    }
}

#[cfg(test)]
mod tests {
    use super::ProjectRecord;

    #[test]
    fn has_tag_is_case_sensitive() {
        let record = ProjectRecord::new("t", "https://example.com", "s", &["Backend"]);
        assert!(record.has_tag("Backend"));
        assert!(!record.has_tag("backend"));
    }
}
