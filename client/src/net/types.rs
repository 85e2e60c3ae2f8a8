//! JSON schema for the email relay.
//!
//! Field names are the relay's wire names and must stay in sync with the
//! server's `InquiryRequest`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body of `POST /api/send-email`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InquiryPayload {
    pub from_name: String,
    pub from_email: String,
    pub from_phone: String,
    /// Property type option value, or `"Not specified"`.
    pub property_type: String,
    pub message: String,
    /// Submission time formatted for the `en-MY` locale.
    pub inquiry_date: String,
    /// Reply-to address; same as `from_email`.
    pub email: String,
}

/// Relay response. `error` is only present on failure.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayResponse {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
