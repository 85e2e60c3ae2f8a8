//! Input model: pointer sources and the drag gesture state machine.
//!
//! Mouse and single-touch input feed the same gesture. `DragState` tracks the
//! last pointer position between pointer-down and pointer-up so each move can
//! be turned into an incremental rotation delta.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::rotation::Point;

/// Where a pointer event came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerSource {
    Mouse,
    /// First touch point of a touch event.
    Touch,
}

/// Active drag gesture, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum DragState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is rotating the view by dragging.
    Dragging {
        /// Position of the previous pointer event, used to compute the delta.
        last: Point,
    },
}

impl DragState {
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Begin a drag at `at`.
    pub fn begin(&mut self, at: Point) {
        *self = Self::Dragging { last: at };
    }

    /// Move the pointer to `to`, returning the `(dx, dy)` since the previous
    /// event. Returns `None` when no drag is active.
    pub fn advance(&mut self, to: Point) -> Option<(f64, f64)> {
        match self {
            Self::Idle => None,
            Self::Dragging { last } => {
                let delta = (to.x - last.x, to.y - last.y);
                *last = to;
                Some(delta)
            }
        }
    }

    /// End the drag. Returns whether a drag was active.
    pub fn end(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        *self = Self::Idle;
        was_dragging
    }
}
