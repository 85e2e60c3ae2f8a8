//! Per-session viewer state for the panorama surface.
//!
//! DESIGN
//! ======
//! `ViewerState` owns rotation, the drag gesture, the auto-rotate flag and the
//! selected hotspot overlay. It is created fresh for every unit the viewer is
//! mounted against and is never shared between sessions. The first manual
//! drag turns auto-rotation off until an explicit reset or toggle.

#[cfg(test)]
#[path = "viewer_test.rs"]
mod viewer_test;

use crate::consts::{AUTO_ROTATE_STEP_DEG, SETTLE_TRANSITION};
use crate::input::{DragState, PointerSource};
use crate::model::Hotspot;
use crate::rotation::{Point, Rotation};

#[derive(Debug, Clone, PartialEq)]
pub struct ViewerState {
    pub rotation: Rotation,
    pub drag: DragState,
    pub auto_rotate: bool,
    /// Hotspot whose info overlay is showing, if any.
    pub selected: Option<Hotspot>,
}

impl Default for ViewerState {
    fn default() -> Self {
        Self { rotation: Rotation::default(), drag: DragState::Idle, auto_rotate: true, selected: None }
    }
}

impl ViewerState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Pointer input ---

    /// Start a drag. Suspends auto-rotation until reset.
    pub fn pointer_down(&mut self, at: Point, source: PointerSource) {
        log::debug!("viewer: drag start from {source:?}");
        self.drag.begin(at);
        self.auto_rotate = false;
    }

    /// Update rotation from a pointer move. Returns `true` if the rotation changed.
    pub fn pointer_move(&mut self, at: Point) -> bool {
        let Some((dx, dy)) = self.drag.advance(at) else {
            return false;
        };
        let before = self.rotation;
        self.rotation.apply_drag(dx, dy);
        self.rotation != before
    }

    /// Finish the drag. Auto-rotation stays suspended.
    pub fn pointer_up(&mut self) -> bool {
        self.drag.end()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    // --- Controls ---

    /// Level the view and resume auto-rotation.
    pub fn reset(&mut self) {
        self.rotation = Rotation::default();
        self.auto_rotate = true;
    }

    /// Flip auto-rotation on or off. Returns the new value.
    pub fn toggle_auto_rotate(&mut self) -> bool {
        self.auto_rotate = !self.auto_rotate;
        self.auto_rotate
    }

    /// One auto-rotation tick. Does nothing once auto-rotation is off, so a
    /// tick that races a drag never moves the view.
    pub fn auto_rotate_tick(&mut self) -> bool {
        if !self.auto_rotate {
            return false;
        }
        self.rotation.turn(AUTO_ROTATE_STEP_DEG);
        true
    }

    // --- Overlay ---

    /// Show `hotspot`'s overlay, replacing any open one.
    pub fn select(&mut self, hotspot: Hotspot) {
        self.selected = Some(hotspot);
    }

    /// Close the overlay. Returns whether one was open.
    pub fn clear_selection(&mut self) -> bool {
        self.selected.take().is_some()
    }

    // --- Rendering ---

    #[must_use]
    pub fn css_transform(&self) -> String {
        self.rotation.css_transform()
    }

    /// Transition is suppressed mid-drag so the surface tracks the pointer.
    #[must_use]
    pub fn css_transition(&self) -> &'static str {
        if self.is_dragging() { "none" } else { SETTLE_TRANSITION }
    }
}
