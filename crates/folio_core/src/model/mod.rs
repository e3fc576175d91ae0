//! Portfolio domain model.
//!
//! # Responsibility
//! - Define the canonical records rendered by every portfolio front end.
//! - Keep content immutable once constructed.
//!
//! # Invariants
//! - Records never mutate at runtime; only filter criteria change.
//! - Project titles are unique within the built-in catalog.

pub mod profile;
pub mod project;
pub mod showcase;
