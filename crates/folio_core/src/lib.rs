//! Core domain logic for the folio portfolio page.
//! This crate is the single source of truth for catalog content and
//! filtering behavior.

pub mod catalog;
pub mod contact;
pub mod filter;
pub mod logging;
pub mod model;
pub mod render;

pub use catalog::Catalog;
pub use contact::mailto::mailto_url;
pub use contact::{ContactError, ContactMessage};
pub use filter::engine::ProjectFilterEngine;
pub use filter::{matches, visible, FilterCriteria, TAG_ALL};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::profile::Profile;
pub use model::project::ProjectRecord;
pub use model::showcase::{ServiceOffering, SkillGroup};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
