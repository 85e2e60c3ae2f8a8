//! Shared numeric constants for the tour crate.

// ── Rotation ────────────────────────────────────────────────────

/// Degrees of rotation per CSS pixel of pointer drag.
pub const DRAG_DEGREES_PER_PX: f64 = 0.5;

/// Pitch is clamped to ±this many degrees.
pub const PITCH_LIMIT_DEG: f64 = 80.0;

/// One full turn, the modulus for yaw.
pub const FULL_TURN_DEG: f64 = 360.0;

/// CSS perspective distance applied to the panorama surface.
pub const PERSPECTIVE_PX: f64 = 1000.0;

/// Transition used while the view is not being dragged.
pub const SETTLE_TRANSITION: &str = "transform 0.1s ease-out";

// ── Auto-rotation ───────────────────────────────────────────────

/// Yaw advanced on every auto-rotation tick.
pub const AUTO_ROTATE_STEP_DEG: f64 = 0.2;

/// Auto-rotation tick period in milliseconds.
pub const AUTO_ROTATE_INTERVAL_MS: u32 = 50;

// ── Hotspots ────────────────────────────────────────────────────

/// Hotspot coordinates are percentages of the panorama surface.
pub const HOTSPOT_COORD_MAX: f64 = 100.0;

// ── Gallery ─────────────────────────────────────────────────────

/// Lightbox zoom bounds and step.
pub const ZOOM_MIN: f64 = 0.5;
pub const ZOOM_MAX: f64 = 3.0;
pub const ZOOM_STEP: f64 = 0.5;

// ── VR launcher ─────────────────────────────────────────────────

/// Window features used when opening an external VR tour.
pub const VR_WINDOW_FEATURES: &str = "width=1200,height=800,scrollbars=yes,resizable=yes";
