//! Profile header record.
//!
//! # Responsibility
//! - Hold the identity block shown in the hero section and contact card.
//!
//! # Invariants
//! - `resume_url` is a site-relative path; the other URLs are external and
//!   passed through without validation.

use serde::{Deserialize, Serialize};

/// Identity and outbound-link data for the page owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Display name.
    pub name: String,
    /// Role line rendered next to the name.
    pub role: String,
    /// One-sentence pitch under the hero heading.
    pub tagline: String,
    /// Location / availability line.
    pub location: String,
    /// Contact address used for the mailto handoff.
    pub email: String,
    /// Site-relative path to the downloadable resume.
    pub resume_url: String,
    /// External GitHub profile URL.
    pub github_url: String,
    /// External LinkedIn profile URL.
    pub linkedin_url: String,
}
