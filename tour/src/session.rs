//! Tour session: one active viewing of the unit catalog.
//!
//! ARCHITECTURE
//! ============
//! A `TourSession` binds the shared, immutable [`Catalog`] to the mutable
//! state of one viewer: which unit and room are showing, plus the
//! [`ViewerState`] for rotation, drag and the hotspot overlay. The host UI
//! forwards pointer, timer and click events into it and re-renders from
//! [`crate::view::TourView`] whenever an observer fires.
//!
//! Every room or unit switch bumps the session epoch. The auto-rotation timer
//! is bound to one epoch, so a switch always tears the old timer down.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::hotspot::{self, HotspotAction, HotspotOutcome};
use crate::input::PointerSource;
use crate::model::{Room, UnitType};
use crate::rotation::Point;
use crate::viewer::ViewerState;

/// State change notifications delivered to observers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TourEvent {
    /// A different unit is selected; viewer state was re-initialized.
    UnitChanged { unit: String },
    /// The current room changed within the unit.
    RoomChanged { room: String },
    /// Pitch or yaw changed.
    RotationChanged,
    /// Auto-rotation was switched on or off.
    AutoRotateChanged { enabled: bool },
    /// An info/feature overlay opened.
    HotspotSelected { hotspot: String },
    /// The overlay closed.
    HotspotCleared,
}

/// Handle returned by [`TourSession::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// Observer callback. Runs synchronously after the state change it reports.
pub type Observer = Box<dyn Fn(&TourSession, &TourEvent) + Send + Sync>;

pub struct TourSession {
    catalog: Arc<Catalog>,
    unit_index: usize,
    room_index: usize,
    viewer: ViewerState,
    epoch: u64,
    observers: Vec<(ObserverId, Observer)>,
    next_observer: u64,
}

impl TourSession {
    /// Open a session on `initial_unit`, or the first unit when it is absent
    /// or unknown. Starts in that unit's first room.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, initial_unit: Option<&str>) -> Self {
        let unit_index = catalog.resolve_unit_index(initial_unit);
        Self {
            catalog,
            unit_index,
            room_index: 0,
            viewer: ViewerState::new(),
            epoch: 0,
            observers: Vec::new(),
            next_observer: 0,
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn unit(&self) -> &UnitType {
        &self.catalog.units()[self.unit_index]
    }

    #[must_use]
    pub fn room(&self) -> &Room {
        &self.unit().rooms[self.room_index]
    }

    #[must_use]
    pub fn room_index(&self) -> usize {
        self.room_index
    }

    #[must_use]
    pub fn viewer(&self) -> &ViewerState {
        &self.viewer
    }

    /// Counter bumped on every room or unit switch.
    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    // --- Observers ---

    pub fn subscribe(&mut self, observer: Observer) -> ObserverId {
        let id = ObserverId(self.next_observer);
        self.next_observer += 1;
        self.observers.push((id, observer));
        id
    }

    /// Remove an observer. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(oid, _)| *oid != id);
        self.observers.len() != before
    }

    fn notify(&self, event: &TourEvent) {
        for (_, observer) in &self.observers {
            observer(self, event);
        }
    }

    // --- Unit / room selection ---

    /// Switch to another unit. Always lands on that unit's first room with a
    /// fresh viewer. Unknown ids leave the session untouched.
    pub fn select_unit(&mut self, id: &str) -> bool {
        let Some(index) = self.catalog.units().iter().position(|u| u.id == id) else {
            log::warn!("tour: unknown unit {id}");
            return false;
        };
        self.unit_index = index;
        self.room_index = 0;
        self.viewer = ViewerState::new();
        self.epoch += 1;
        log::debug!("tour: unit {id} selected");
        self.notify(&TourEvent::UnitChanged { unit: id.to_owned() });
        true
    }

    /// Move to the next room, wrapping to the first.
    pub fn next_room(&mut self) -> bool {
        let len = self.unit().rooms.len();
        self.enter_room((self.room_index + 1) % len)
    }

    /// Move to the previous room, wrapping to the last.
    pub fn previous_room(&mut self) -> bool {
        let len = self.unit().rooms.len();
        self.enter_room((self.room_index + len - 1) % len)
    }

    /// Jump straight to a room of the current unit.
    pub fn go_to_room(&mut self, id: &str) -> bool {
        match self.unit().room_index(id) {
            Some(index) => self.enter_room(index),
            None => {
                log::warn!("tour: unit {} has no room {id}", self.unit().id);
                false
            }
        }
    }

    /// Rotation is preserved across rooms; the overlay is not.
    fn enter_room(&mut self, index: usize) -> bool {
        if index == self.room_index {
            return false;
        }
        self.room_index = index;
        self.epoch += 1;
        let cleared = self.viewer.clear_selection();
        let room = self.room().id.clone();
        log::debug!("tour: entered room {room}");
        if cleared {
            self.notify(&TourEvent::HotspotCleared);
        }
        self.notify(&TourEvent::RoomChanged { room });
        true
    }

    // --- Hotspots ---

    /// Activate a hotspot of the current room.
    pub fn activate_hotspot(&mut self, hotspot_id: &str) -> HotspotOutcome {
        let Some(spot) = self.room().hotspot(hotspot_id).cloned() else {
            log::warn!("tour: room {} has no hotspot {hotspot_id}", self.room().id);
            return HotspotOutcome::UnknownHotspot;
        };

        match hotspot::resolve(self.unit(), &spot) {
            HotspotAction::Navigate { room_index } => {
                self.enter_room(room_index);
                HotspotOutcome::Navigated(self.room().id.clone())
            }
            HotspotAction::ShowInfo => {
                self.viewer.select(spot);
                self.notify(&TourEvent::HotspotSelected { hotspot: hotspot_id.to_owned() });
                HotspotOutcome::InfoShown(hotspot_id.to_owned())
            }
            HotspotAction::Unresolved { target } => {
                log::warn!(
                    "tour: hotspot {}/{hotspot_id} targets unknown room {target:?}, ignoring",
                    self.room().id
                );
                HotspotOutcome::Unresolved
            }
        }
    }

    /// Close the hotspot overlay.
    pub fn close_info(&mut self) -> bool {
        let cleared = self.viewer.clear_selection();
        if cleared {
            self.notify(&TourEvent::HotspotCleared);
        }
        cleared
    }

    // --- Viewer input ---

    pub fn pointer_down(&mut self, at: Point, source: PointerSource) {
        let was_auto = self.viewer.auto_rotate;
        self.viewer.pointer_down(at, source);
        if was_auto {
            self.notify(&TourEvent::AutoRotateChanged { enabled: false });
        }
    }

    pub fn pointer_move(&mut self, at: Point) {
        if self.viewer.pointer_move(at) {
            self.notify(&TourEvent::RotationChanged);
        }
    }

    pub fn pointer_up(&mut self) {
        if self.viewer.pointer_up() {
            // Transition CSS depends on the drag flag.
            self.notify(&TourEvent::RotationChanged);
        }
    }

    pub fn reset_view(&mut self) {
        let was_auto = self.viewer.auto_rotate;
        self.viewer.reset();
        self.notify(&TourEvent::RotationChanged);
        if !was_auto {
            self.notify(&TourEvent::AutoRotateChanged { enabled: true });
        }
    }

    pub fn toggle_auto_rotate(&mut self) -> bool {
        let enabled = self.viewer.toggle_auto_rotate();
        self.notify(&TourEvent::AutoRotateChanged { enabled });
        enabled
    }

    /// Timer callback for the auto-rotation driver.
    pub fn auto_rotate_tick(&mut self) -> bool {
        let turned = self.viewer.auto_rotate_tick();
        if turned {
            self.notify(&TourEvent::RotationChanged);
        }
        turned
    }
}
