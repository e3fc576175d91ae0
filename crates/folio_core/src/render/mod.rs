//! Portfolio page rendering.
//!
//! # Responsibility
//! - Define the section skeleton shared by the text and HTML renderers.
//! - Keep renderers pure string producers; callers decide where output
//!   goes.
//!
//! # Invariants
//! - Section anchors are stable: `services`, `projects`, `skills`,
//!   `contact`.
//! - Both renderers emit the no-matches affordance for an empty gallery;
//!   an empty result is an expected state, not an error.

pub mod html;
pub mod text;

/// In-page anchor ids, in page order.
pub const SECTION_ANCHORS: [&str; 4] = ["services", "projects", "skills", "contact"];

/// Copy shown when filtering yields no projects.
pub const NO_MATCHES_COPY: &str = "No matches. Try clearing filters.";

/// Section subtitles shared by both renderers.
pub(crate) const SERVICES_SUBTITLE: &str =
    "Ways I can help your team ship high‑quality web software.";
pub(crate) const PROJECTS_SUBTITLE: &str =
    "Selected repos that show how I build, test, and document software.";
pub(crate) const SKILLS_SUBTITLE: &str = "Tech I use day‑to‑day.";
pub(crate) const CONTACT_TITLE: &str = "Let’s work together";
pub(crate) const CONTACT_SUBTITLE: &str =
    "Tell me about your project — I’ll reply with next steps and an estimate.";
