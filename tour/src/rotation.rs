//! Panorama orientation: pitch and yaw, the drag rule and the CSS transform.

#[cfg(test)]
#[path = "rotation_test.rs"]
mod rotation_test;

use crate::consts::{DRAG_DEGREES_PER_PX, FULL_TURN_DEG, PERSPECTIVE_PX, PITCH_LIMIT_DEG};

/// A pointer position in CSS pixels (client coordinates).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Orientation of the panorama surface.
///
/// `pitch` is the X-axis tilt in degrees, clamped to ±80.
/// `yaw` is the Y-axis turn in degrees, kept in `[0, 360)`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rotation {
    pub pitch: f64,
    pub yaw: f64,
}

impl Rotation {
    /// Apply a drag of `dx`/`dy` CSS pixels.
    ///
    /// Dragging right turns the view right; dragging down tilts it up.
    pub fn apply_drag(&mut self, dx: f64, dy: f64) {
        self.yaw = wrap_yaw(self.yaw + dx * DRAG_DEGREES_PER_PX);
        self.pitch = (self.pitch - dy * DRAG_DEGREES_PER_PX).clamp(-PITCH_LIMIT_DEG, PITCH_LIMIT_DEG);
    }

    /// Advance yaw by `degrees`, wrapping at a full turn.
    pub fn turn(&mut self, degrees: f64) {
        self.yaw = wrap_yaw(self.yaw + degrees);
    }

    /// CSS `transform` value for the panorama surface.
    #[must_use]
    pub fn css_transform(&self) -> String {
        format!(
            "perspective({PERSPECTIVE_PX}px) rotateX({:.2}deg) rotateY({:.2}deg)",
            self.pitch, self.yaw
        )
    }
}

/// Euclidean modulo so yaw never goes negative.
fn wrap_yaw(yaw: f64) -> f64 {
    let wrapped = yaw.rem_euclid(FULL_TURN_DEG);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs.
    if wrapped >= FULL_TURN_DEG { 0.0 } else { wrapped }
}
