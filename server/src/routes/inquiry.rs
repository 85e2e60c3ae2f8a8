//! Email relay endpoint for the registration form.
//!
//! `POST /api/send-email` answers `{ "ok": true }` once the provider accepts
//! the message. Failures carry `{ "ok": false, "error": ... }` with 400 for
//! a rejected or incomplete inquiry and 500 for relay faults.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::Json;
use serde::Serialize;

use crate::services::inquiry::{self, InquiryRequest};
use crate::services::mailer::MailError;
use crate::state::AppState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelayReply {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RelayReply {
    fn sent() -> (StatusCode, Json<Self>) {
        (StatusCode::OK, Json(Self { ok: true, error: None }))
    }

    fn failed(status: StatusCode, error: impl Into<String>) -> (StatusCode, Json<Self>) {
        (status, Json(Self { ok: false, error: Some(error.into()) }))
    }
}

/// `POST /api/send-email`
pub async fn send_email(
    State(state): State<AppState>,
    payload: Result<Json<InquiryRequest>, JsonRejection>,
) -> (StatusCode, Json<RelayReply>) {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(e) => {
            tracing::warn!(error = %e, "unreadable inquiry body");
            return RelayReply::failed(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error");
        }
    };
    let Some(mailer) = state.mailer.as_ref() else {
        tracing::error!("inquiry received but mailer is not configured");
        return RelayReply::failed(StatusCode::INTERNAL_SERVER_ERROR, "Email relay is not configured");
    };
    if let Err(e) = inquiry::validate(&req) {
        tracing::info!(error = %e, "inquiry rejected");
        return RelayReply::failed(StatusCode::BAD_REQUEST, e.to_string());
    }

    let email = inquiry::compose_email(&req, mailer.subject());
    match mailer.send(email).await {
        Ok(()) => {
            tracing::info!(property_type = %req.property_type, "inquiry relayed");
            RelayReply::sent()
        }
        Err(e @ MailError::Rejected(_)) => {
            tracing::warn!(error = %e, "inquiry email rejected upstream");
            RelayReply::failed(StatusCode::BAD_REQUEST, e.to_string())
        }
        Err(e @ MailError::Transport(_)) => {
            tracing::error!(error = %e, "inquiry email could not be delivered");
            RelayReply::failed(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

#[cfg(test)]
#[path = "inquiry_test.rs"]
mod tests;
