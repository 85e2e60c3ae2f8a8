//! Panoramic room tour engine for the Aricia Residences site.
//!
//! This crate holds everything about the virtual tour that does not touch the
//! DOM: the static unit catalog and its room graph, the viewer's rotation and
//! drag state machine, hotspot activation, the auto-rotation timer driver, and
//! the gallery/lightbox state. The Leptos `client` crate renders these models
//! and forwards browser events into them.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`session`] | Top-level [`session::TourSession`]: unit/room selection, hotspot activation, observers |
//! | [`catalog`] | Immutable unit catalog loaded from embedded JSON |
//! | [`model`] | Room, hotspot and unit records |
//! | [`rotation`] | Pitch/yaw rotation, drag update rule and CSS transform |
//! | [`input`] | Pointer drag gesture state machine |
//! | [`viewer`] | Per-session viewer state (rotation, drag, auto-rotate, selection) |
//! | [`hotspot`] | Hotspot activation outcomes and marker placement |
//! | [`autorotate`] | Scoped auto-rotation timer driver |
//! | [`view`] | Derived render model captured from a session |
//! | [`gallery`] | Image gallery / lightbox state |
//! | [`consts`] | Shared numeric constants (sensitivity, limits, tick rate) |

pub mod autorotate;
pub mod catalog;
pub mod consts;
pub mod gallery;
pub mod hotspot;
pub mod input;
pub mod model;
pub mod rotation;
pub mod session;
pub mod view;
pub mod viewer;
