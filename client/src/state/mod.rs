//! Client-side state held in Leptos signals.
//!
//! DESIGN
//! ======
//! Plain structs with methods; components wrap them in `RwSignal` and provide
//! page-wide ones through context. Tour viewer state is not here: it lives in
//! `tour::session::TourSession`, owned by the viewer component.

pub mod lead;
pub mod ui;
