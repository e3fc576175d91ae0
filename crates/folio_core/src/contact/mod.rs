//! Contact form handling.
//!
//! # Responsibility
//! - Validate contact form input before mail handoff.
//! - Keep failure semantics typed; no network or delivery tracking exists.
//!
//! # Invariants
//! - Validation never panics on arbitrary input.
//! - A message that passes [`ContactMessage::validate`] always produces a
//!   well-formed mailto URL.

pub mod mailto;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex"));

/// Contact form fields mirrored from the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    /// Sender display name; required.
    pub name: String,
    /// Sender reply address; required and format-checked.
    pub email: String,
    /// Optional subject line.
    pub subject: Option<String>,
    /// Free-text body; required.
    pub message: String,
}

/// Validation error for contact form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// A required field is empty or whitespace-only.
    MissingField(&'static str),
    /// Sender address does not look like an email address.
    InvalidEmail(String),
}

impl Display for ContactError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "required field is empty: {field}"),
            Self::InvalidEmail(value) => write!(f, "invalid email address: `{value}`"),
        }
    }
}

impl Error for ContactError {}

impl ContactMessage {
    /// Checks required fields and the sender address format.
    ///
    /// # Errors
    /// - [`ContactError::MissingField`] when `name`, `email` or `message`
    ///   is blank.
    /// - [`ContactError::InvalidEmail`] when the address fails the format
    ///   check.
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::MissingField("name"));
        }
        if self.email.trim().is_empty() {
            return Err(ContactError::MissingField("email"));
        }
        if !EMAIL_RE.is_match(self.email.trim()) {
            return Err(ContactError::InvalidEmail(self.email.clone()));
        }
        if self.message.trim().is_empty() {
            return Err(ContactError::MissingField("message"));
        }
        Ok(())
    }
}
