//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! site keeps no data between requests; the state only carries the outbound
//! mailer, which is absent when the relay is not configured.

use std::sync::Arc;

use crate::services::mailer::InquiryMailer;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; inner fields are Arc-wrapped.
#[derive(Clone, Default)]
pub struct AppState {
    /// Inquiry delivery backend. `None` when mailer env vars are missing.
    pub mailer: Option<Arc<dyn InquiryMailer>>,
}

impl AppState {
    #[must_use]
    pub fn new(mailer: Option<Arc<dyn InquiryMailer>>) -> Self {
        Self { mailer }
    }

    #[must_use]
    pub fn mailer_configured(&self) -> bool {
        self.mailer.is_some()
    }
}

#[cfg(test)]
#[path = "state_helpers_test.rs"]
pub mod test_helpers;

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
