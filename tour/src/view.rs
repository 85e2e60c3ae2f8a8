//! Derived render model.
//!
//! `TourView` is a plain snapshot of everything the viewer UI draws, computed
//! from a [`TourSession`]. Hosts keep the latest snapshot in a reactive cell
//! and re-capture it from a session observer; equality lets them skip
//! redundant renders.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use crate::hotspot::{marker_class, marker_style};
use crate::model::HotspotKind;
use crate::session::TourSession;

#[derive(Debug, Clone, PartialEq)]
pub struct MarkerView {
    pub id: String,
    pub title: String,
    pub kind: HotspotKind,
    pub style: String,
    pub class: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayView {
    pub title: String,
    pub description: Option<String>,
}

/// One entry of a room or unit picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceView {
    pub id: String,
    pub name: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TourView {
    pub unit_id: String,
    pub unit_name: String,
    pub room_id: String,
    pub room_name: String,
    pub room_description: Option<String>,
    pub image: String,
    pub transform: String,
    pub transition: &'static str,
    pub auto_rotate: bool,
    pub dragging: bool,
    pub markers: Vec<MarkerView>,
    pub overlay: Option<OverlayView>,
    pub rooms: Vec<ChoiceView>,
    pub units: Vec<ChoiceView>,
    pub epoch: u64,
}

impl TourView {
    #[must_use]
    pub fn capture(session: &TourSession) -> Self {
        let unit = session.unit();
        let room = session.room();
        let viewer = session.viewer();

        let markers = room
            .hotspots
            .iter()
            .map(|h| MarkerView {
                id: h.id.clone(),
                title: h.title.clone(),
                kind: h.kind,
                style: marker_style(h),
                class: marker_class(h.kind),
            })
            .collect();

        let rooms = unit
            .rooms
            .iter()
            .map(|r| ChoiceView { id: r.id.clone(), name: r.name.clone(), active: r.id == room.id })
            .collect();

        let units = session
            .catalog()
            .units()
            .iter()
            .map(|u| ChoiceView { id: u.id.clone(), name: u.name.clone(), active: u.id == unit.id })
            .collect();

        Self {
            unit_id: unit.id.clone(),
            unit_name: unit.name.clone(),
            room_id: room.id.clone(),
            room_name: room.name.clone(),
            room_description: room.description.clone(),
            image: room.image.clone(),
            transform: viewer.css_transform(),
            transition: viewer.css_transition(),
            auto_rotate: viewer.auto_rotate,
            dragging: viewer.is_dragging(),
            markers,
            overlay: viewer
                .selected
                .as_ref()
                .map(|h| OverlayView { title: h.title.clone(), description: h.description.clone() }),
            rooms,
            units,
            epoch: session.epoch(),
        }
    }

    /// Label such as `"2 / 3"` for the room counter.
    #[must_use]
    pub fn room_counter(&self) -> String {
        let position = self.rooms.iter().position(|r| r.active).map_or(0, |i| i + 1);
        format!("{position} / {}", self.rooms.len())
    }
}
