//! Contact-form mail composition. Submitting the form never makes a
//! network request; it only builds a `mailto:` URI for the navigator.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

pub const CONTACT_ADDRESS: &str = "hello@heleolabs.dev";

// Characters `encodeURIComponent` leaves verbatim.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Builds the `mailto:` URI carrying the submitted form. A blank name
/// falls back to a generic sender label in the subject line.
pub fn mailto_uri(name: &str, email: &str, brief: &str) -> String {
    let sender = if name.trim().is_empty() {
        "Website Contact"
    } else {
        name
    };
    let subject = format!("Project Inquiry from {sender}");
    let body = format!("Name: {name}\nEmail: {email}\n\nMessage:\n{brief}");
    format!(
        "mailto:{CONTACT_ADDRESS}?subject={}&body={}",
        utf8_percent_encode(&subject, COMPONENT),
        utf8_percent_encode(&body, COMPONENT),
    )
}
