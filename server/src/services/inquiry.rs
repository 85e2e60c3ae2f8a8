//! Inquiry validation and email rendering.
//!
//! The relay accepts the registration form payload, checks the contact fields
//! the sales team needs, and renders it into the HTML template. Every
//! visitor-supplied value is HTML-escaped before substitution.

use serde::Deserialize;

use super::mailer::OutgoingEmail;

const INQUIRY_TEMPLATE: &str = include_str!("../../templates/inquiry.html");
const UNSPECIFIED: &str = "Not specified";

/// Body of `POST /api/send-email`. Absent fields read as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct InquiryRequest {
    pub from_name: String,
    pub from_email: String,
    pub from_phone: String,
    pub property_type: String,
    pub message: String,
    pub inquiry_date: String,
    /// Reply-to address; the form sends the visitor's email here too.
    pub email: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InquiryError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

/// Check the fields every inquiry must carry.
///
/// # Errors
///
/// Returns [`InquiryError::MissingField`] naming the first blank one of
/// `from_name`, `from_email`, `from_phone`.
pub fn validate(req: &InquiryRequest) -> Result<(), InquiryError> {
    for (field, value) in [("from_name", &req.from_name), ("from_email", &req.from_email), ("from_phone", &req.from_phone)]
    {
        if value.trim().is_empty() {
            return Err(InquiryError::MissingField(field));
        }
    }
    Ok(())
}

/// Escape text for HTML element content and attribute values.
#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

fn or_unspecified(value: &str) -> &str {
    match value.trim() {
        "" => UNSPECIFIED,
        value => value,
    }
}

#[must_use]
pub fn render_inquiry_template(req: &InquiryRequest) -> String {
    INQUIRY_TEMPLATE
        .replace("{{INQUIRY_DATE}}", &escape_html(or_unspecified(&req.inquiry_date)))
        .replace("{{NAME}}", &escape_html(req.from_name.trim()))
        .replace("{{EMAIL}}", &escape_html(req.from_email.trim()))
        .replace("{{PHONE}}", &escape_html(req.from_phone.trim()))
        .replace("{{PROPERTY_TYPE}}", &escape_html(or_unspecified(&req.property_type)))
        .replace("{{MESSAGE}}", &escape_html(or_unspecified(&req.message)))
}

/// Build the message for a validated inquiry. Replies go to `email`, falling
/// back to `from_email`.
#[must_use]
pub fn compose_email(req: &InquiryRequest, subject: &str) -> OutgoingEmail {
    let reply_to = [&req.email, &req.from_email]
        .into_iter()
        .map(|v| v.trim())
        .find(|v| !v.is_empty())
        .map(str::to_owned);
    OutgoingEmail { subject: subject.to_owned(), html: render_inquiry_template(req), reply_to }
}

#[cfg(test)]
#[path = "inquiry_test.rs"]
mod tests;
