//! REST helper for the email relay.
//!
//! Client-side (hydrate): real HTTP call via `gloo-net`.
//! Server-side (SSR): stub returning an error, since inquiries are only sent
//! from the browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::InquiryPayload;
#[cfg(any(test, feature = "hydrate"))]
use super::types::RelayResponse;

/// Relay endpoint served by the `server` crate.
pub const INQUIRY_ENDPOINT: &str = "/api/send-email";

#[cfg(any(test, feature = "hydrate"))]
const FALLBACK_ERROR: &str = "Email sending failed";

#[cfg(any(test, feature = "hydrate"))]
/// Interpret a relay reply. A send only counts when both the HTTP status and
/// the body's `ok` flag say so.
fn relay_outcome(status_ok: bool, status: u16, body: RelayResponse) -> Result<(), String> {
    if status_ok && body.ok {
        return Ok(());
    }
    Err(match body.error {
        Some(error) if !error.is_empty() => error,
        _ if !status_ok => format!("{FALLBACK_ERROR}: {status}"),
        _ => FALLBACK_ERROR.to_owned(),
    })
}

/// Send an inquiry through `POST /api/send-email`.
///
/// # Errors
///
/// Returns an error string if the request fails, the relay answers with a
/// non-OK status, or the body does not report `ok: true`.
pub async fn send_inquiry(payload: &InquiryPayload) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(INQUIRY_ENDPOINT)
            .json(payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        // An unreadable body is treated like `{ ok: false }`.
        let body = match resp.json::<RelayResponse>().await {
            Ok(body) => body,
            Err(e) => {
                log::warn!("relay response unreadable: {e}");
                RelayResponse::default()
            }
        };
        relay_outcome(resp.ok(), resp.status(), body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err("not available on server".to_owned())
    }
}
