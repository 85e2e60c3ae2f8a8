//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own validation, rendering and delivery so route handlers
//! can stay focused on protocol translation.

pub mod inquiry;
pub mod mailer;
