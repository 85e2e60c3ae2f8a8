//! Static tour records: units, rooms, hotspots and external VR tours.
//!
//! These are plain value types deserialized once from the catalog document.
//! Nothing mutates them after load; sessions refer to them through an
//! `Arc<Catalog>`.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use serde::{Deserialize, Serialize};

use crate::consts::HOTSPOT_COORD_MAX;

/// What a hotspot does when activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HotspotKind {
    /// Moves the viewer to another room of the same unit.
    Navigation,
    /// Shows an informational overlay.
    Info,
    /// Shows a feature highlight overlay.
    Feature,
}

impl HotspotKind {
    /// Stable lowercase name, used for CSS modifiers and logs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Navigation => "navigation",
            Self::Info => "info",
            Self::Feature => "feature",
        }
    }
}

/// A clickable marker placed over a room panorama.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotspot {
    pub id: String,
    /// Horizontal offset in percent (0–100).
    pub x: f64,
    /// Vertical offset in percent (0–100).
    pub y: f64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: HotspotKind,
    /// Target room id; only meaningful for [`HotspotKind::Navigation`].
    #[serde(default)]
    pub target_room: Option<String>,
}

impl Hotspot {
    /// The room this hotspot navigates to, if it is a navigation hotspot.
    #[must_use]
    pub fn navigation_target(&self) -> Option<&str> {
        match self.kind {
            HotspotKind::Navigation => self.target_room.as_deref(),
            HotspotKind::Info | HotspotKind::Feature => None,
        }
    }

    /// Whether both coordinates fall inside the 0–100 percentage range.
    #[must_use]
    pub fn in_bounds(&self) -> bool {
        let range = 0.0..=HOTSPOT_COORD_MAX;
        range.contains(&self.x) && range.contains(&self.y)
    }
}

/// A single panorama in a unit's tour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    pub name: String,
    /// Panorama image URI.
    pub image: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub hotspots: Vec<Hotspot>,
}

impl Room {
    /// Look up a hotspot by id.
    #[must_use]
    pub fn hotspot(&self, id: &str) -> Option<&Hotspot> {
        self.hotspots.iter().find(|h| h.id == id)
    }
}

/// A sellable unit layout and its tour rooms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitType {
    pub id: String,
    pub name: String,
    /// Display size, e.g. `"1410 sq ft"`.
    pub size: String,
    /// Display bedroom count, e.g. `"2 + 1"`.
    pub bedrooms: String,
    pub bathrooms: u8,
    pub carparks: u8,
    pub description: String,
    /// Floor plan image URI.
    pub floor_plan: String,
    /// Ordered rooms; the first one is the tour entry point.
    pub rooms: Vec<Room>,
}

impl UnitType {
    /// Index of the room with the given id.
    #[must_use]
    pub fn room_index(&self, id: &str) -> Option<usize> {
        self.rooms.iter().position(|r| r.id == id)
    }

    /// Look up a room by id.
    #[must_use]
    pub fn room(&self, id: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }
}

/// An externally hosted VR walkthrough for one unit layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VrTour {
    pub id: String,
    pub name: String,
    pub url: String,
}
