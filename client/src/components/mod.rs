//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page sections and the tour surfaces, reading shared
//! state (`UiState`, `Arc<Catalog>`) from Leptos context.

pub mod hotspot_layer;
pub mod image_gallery;
pub mod lead_form;
pub mod tour_launcher;
pub mod tour_viewer;
