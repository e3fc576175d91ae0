//! Stateful filter engine with observer notification.
//!
//! # Responsibility
//! - Own the criteria pair and the project list it filters.
//! - Re-derive the visible subset in full after every criteria change.
//!
//! # Invariants
//! - Observers always receive a freshly derived list, never a patched one.
//! - Notification is synchronous on the caller's thread; the engine is
//!   confined to one UI/session context.

use log::debug;

use crate::filter::{visible, FilterCriteria};
use crate::model::project::ProjectRecord;

/// Observer invoked with the derived visible list after a criteria change.
pub type FilterObserver = Box<dyn FnMut(&[ProjectRecord])>;

/// State holder driving the reactive project gallery.
///
/// The engine owns an immutable copy of the catalog's project list and the
/// mutable [`FilterCriteria`]. Both setters replace their field and notify
/// subscribers; recomputation is a linear scan, so no incremental indexing
/// exists.
pub struct ProjectFilterEngine {
    projects: Vec<ProjectRecord>,
    criteria: FilterCriteria,
    observers: Vec<FilterObserver>,
}

impl ProjectFilterEngine {
    /// Creates an engine over the given records with default criteria.
    pub fn new(projects: Vec<ProjectRecord>) -> Self {
        Self {
            projects,
            criteria: FilterCriteria::default(),
            observers: Vec::new(),
        }
    }

    /// Returns the current criteria pair.
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Returns the full record list in catalog order.
    pub fn projects(&self) -> &[ProjectRecord] {
        &self.projects
    }

    /// Replaces the selected tag and notifies observers.
    ///
    /// No validation happens here: a label outside the enumerated set is
    /// legal and yields an empty result.
    pub fn set_tag(&mut self, tag: impl Into<String>) {
        self.criteria.selected_tag = tag.into();
        debug!(
            "event=criteria_update module=filter field=tag value={}",
            self.criteria.selected_tag
        );
        self.notify();
    }

    /// Replaces the query text verbatim and notifies observers.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.criteria.query_text = text.into();
        debug!(
            "event=criteria_update module=filter field=query len={}",
            self.criteria.query_text.len()
        );
        self.notify();
    }

    /// Derives the visible subset from current state, in catalog order.
    pub fn visible_projects(&self) -> Vec<&ProjectRecord> {
        visible(&self.projects, &self.criteria)
    }

    /// Registers an observer invoked after every criteria change.
    pub fn subscribe(&mut self, observer: impl FnMut(&[ProjectRecord]) + 'static) {
        self.observers.push(Box::new(observer));
    }

    fn notify(&mut self) {
        if self.observers.is_empty() {
            return;
        }
        let derived: Vec<ProjectRecord> = self
            .visible_projects()
            .into_iter()
            .cloned()
            .collect();
        for observer in &mut self.observers {
            observer(&derived);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ProjectFilterEngine;
    use crate::model::project::ProjectRecord;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn sample_projects() -> Vec<ProjectRecord> {
        vec![
            ProjectRecord::new("alpha", "u", "first", &["A"]),
            ProjectRecord::new("beta", "u", "second", &["B"]),
        ]
    }

    #[test]
    fn default_criteria_show_everything() {
        let engine = ProjectFilterEngine::new(sample_projects());
        assert_eq!(engine.visible_projects().len(), 2);
    }

    #[test]
    fn observer_sees_each_derivation() {
        let seen: Rc<RefCell<Vec<usize>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut engine = ProjectFilterEngine::new(sample_projects());
        engine.subscribe(move |records| sink.borrow_mut().push(records.len()));

        engine.set_tag("A");
        engine.set_query("zzz");
        assert_eq!(*seen.borrow(), vec![1, 0]);
    }
}
