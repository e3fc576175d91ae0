//! Mailto link construction (RFC 6068).
//!
//! # Responsibility
//! - Turn a validated contact message into a `mailto:` URL the platform
//!   mail client can open.
//!
//! # Invariants
//! - Header values are percent-encoded; a space becomes `%20`, never `+`.
//! - Construction is pure. Navigation, client availability and delivery are
//!   outside this system's control and are not reported here.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::contact::{ContactError, ContactMessage};

/// Encode set for `subject=` / `body=` header values: everything except
/// RFC 3986 unreserved characters.
const HEADER_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Builds the `mailto:` URL for the given recipient from form input.
///
/// The body carries the form fields as plain text lines, the same shape a
/// `text/plain` form post produces. The `subject=` header is only present
/// when the form supplied a non-blank subject. The recipient is compiled-in
/// profile data and is emitted verbatim.
///
/// # Errors
/// Returns the underlying [`ContactError`] when the message fails
/// validation.
pub fn mailto_url(recipient: &str, message: &ContactMessage) -> Result<String, ContactError> {
    message.validate()?;

    let body = format!(
        "Name: {}\r\nEmail: {}\r\n\r\n{}",
        message.name.trim(),
        message.email.trim(),
        message.message
    );

    let mut url = format!("mailto:{recipient}?");
    if let Some(subject) = message
        .subject
        .as_deref()
        .map(str::trim)
        .filter(|subject| !subject.is_empty())
    {
        url.push_str("subject=");
        url.push_str(&utf8_percent_encode(subject, HEADER_VALUE).to_string());
        url.push('&');
    }
    url.push_str("body=");
    url.push_str(&utf8_percent_encode(&body, HEADER_VALUE).to_string());

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::mailto_url;
    use crate::contact::ContactMessage;

    #[test]
    fn spaces_are_percent20() {
        let message = ContactMessage {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            subject: Some("Site inquiry".to_string()),
            message: "I have a project.".to_string(),
        };
        let url = mailto_url("owner@example.com", &message).unwrap();
        assert!(url.contains("subject=Site%20inquiry"));
        assert!(!url.contains('+'));
    }
}
