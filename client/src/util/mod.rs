//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (window handles, event
//! coordinates, deep links) from component logic so the pure parts stay
//! testable off-browser.

pub mod browser;
pub mod tour_input;
pub mod whatsapp;
