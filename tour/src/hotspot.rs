//! Hotspot activation and marker placement.

#[cfg(test)]
#[path = "hotspot_test.rs"]
mod hotspot_test;

use crate::model::{Hotspot, HotspotKind, UnitType};

/// What activating a hotspot should do, before any state is touched.
#[derive(Debug, Clone, PartialEq)]
pub enum HotspotAction {
    /// Move to the room at this index of the current unit.
    Navigate { room_index: usize },
    /// Show the hotspot's overlay.
    ShowInfo,
    /// Navigation hotspot whose target is missing from the unit.
    Unresolved { target: Option<String> },
}

/// Result of activating a hotspot on a session.
#[derive(Debug, Clone, PartialEq)]
pub enum HotspotOutcome {
    /// Current room changed to this room id.
    Navigated(String),
    /// The overlay for this hotspot id is now showing.
    InfoShown(String),
    /// Navigation target did not resolve; nothing changed.
    Unresolved,
    /// No hotspot with that id exists in the current room.
    UnknownHotspot,
}

/// Decide what `hotspot` does inside `unit`.
#[must_use]
pub fn resolve(unit: &UnitType, hotspot: &Hotspot) -> HotspotAction {
    match hotspot.kind {
        HotspotKind::Navigation => {
            let target = hotspot.navigation_target();
            match target.and_then(|id| unit.room_index(id)) {
                Some(room_index) => HotspotAction::Navigate { room_index },
                None => HotspotAction::Unresolved { target: target.map(str::to_owned) },
            }
        }
        HotspotKind::Info | HotspotKind::Feature => HotspotAction::ShowInfo,
    }
}

/// Inline style placing a marker centered on its percentage position.
#[must_use]
pub fn marker_style(hotspot: &Hotspot) -> String {
    format!("left: {}%; top: {}%; transform: translate(-50%, -50%);", hotspot.x, hotspot.y)
}

/// BEM class for a marker of the given kind.
#[must_use]
pub fn marker_class(kind: HotspotKind) -> String {
    format!("tour-hotspot tour-hotspot--{}", kind.as_str())
}
