//! Project gallery filtering.
//!
//! # Responsibility
//! - Define the criteria pair and the inclusion predicate.
//! - Expose the stateful engine that drives reactive front ends.
//!
//! # Invariants
//! - The predicate is total: any tag/query strings produce a boolean, never
//!   an error.
//! - Filtering never re-orders records; output keeps catalog order.

pub mod engine;

use crate::model::project::ProjectRecord;

/// Catch-all tag label that disables tag filtering.
pub const TAG_ALL: &str = "All";

/// Mutable criteria pair owned by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Selected tag label, or [`TAG_ALL`]. Unrecognized labels are legal and
    /// simply match nothing.
    pub selected_tag: String,
    /// Free-text query, stored verbatim; case-folded only at match time.
    pub query_text: String,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            selected_tag: TAG_ALL.to_string(),
            query_text: String::new(),
        }
    }
}

impl FilterCriteria {
    /// Creates a criteria pair from explicit values.
    pub fn new(selected_tag: impl Into<String>, query_text: impl Into<String>) -> Self {
        Self {
            selected_tag: selected_tag.into(),
            query_text: query_text.into(),
        }
    }
}

/// Decides whether one record is visible under the given criteria.
///
/// Tag membership is exact, case-sensitive string equality. The query is
/// matched as a literal substring (regex metacharacters carry no meaning)
/// against the lowercased concatenation of title, summary and space-joined
/// tags; there is no separator between title and summary. An empty query
/// always passes.
pub fn matches(record: &ProjectRecord, criteria: &FilterCriteria) -> bool {
    let tag_pass = criteria.selected_tag == TAG_ALL || record.has_tag(&criteria.selected_tag);
    if !tag_pass {
        return false;
    }

    let haystack = format!(
        "{}{}{}",
        record.title,
        record.summary,
        record.tags.join(" ")
    )
    .to_lowercase();
    haystack.contains(&criteria.query_text.to_lowercase())
}

/// Applies [`matches`] over a record slice, preserving input order.
pub fn visible<'a>(
    records: &'a [ProjectRecord],
    criteria: &FilterCriteria,
) -> Vec<&'a ProjectRecord> {
    records
        .iter()
        .filter(|record| matches(record, criteria))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{matches, visible, FilterCriteria, TAG_ALL};
    use crate::model::project::ProjectRecord;

    fn record() -> ProjectRecord {
        ProjectRecord::new(
            "Sample App",
            "https://example.com/repo",
            "A demo summary.",
            &["Frontend", "React"],
        )
    }

    #[test]
    fn empty_query_with_all_tag_passes() {
        assert!(matches(&record(), &FilterCriteria::default()));
    }

    #[test]
    fn unknown_tag_matches_nothing() {
        let criteria = FilterCriteria::new("Nope", "");
        assert!(!matches(&record(), &criteria));
    }

    #[test]
    fn query_spans_title_summary_boundary() {
        // No separator between title and summary: "App" + "A demo" meet as
        // "appa demo".
        let criteria = FilterCriteria::new(TAG_ALL, "appa demo");
        assert!(matches(&record(), &criteria));
    }

    #[test]
    fn visible_keeps_input_order() {
        let records = vec![
            ProjectRecord::new("one", "u", "x", &["A"]),
            ProjectRecord::new("two", "u", "x", &["B"]),
            ProjectRecord::new("three", "u", "x", &["A"]),
        ];
        let criteria = FilterCriteria::new("A", "");
        let titles: Vec<&str> = visible(&records, &criteria)
            .into_iter()
            .map(|record| record.title.as_str())
            .collect();
        assert_eq!(titles, vec!["one", "three"]);
    }
}
