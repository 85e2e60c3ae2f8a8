//! Immutable unit catalog.
//!
//! DESIGN
//! ======
//! The catalog is parsed once from the embedded `data/catalog.json` document
//! and validated before anyone can hold it, so every `Catalog` value has at
//! least one unit, every unit has at least one room, and ids are unique where
//! lookups depend on them. Sessions share it through `Arc<Catalog>`.
//!
//! Navigation hotspots whose target room does not exist are not load errors.
//! They are reported by [`Catalog::dangling_targets`] and logged at load;
//! activating one at runtime is a no-op.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::collections::HashSet;

use serde::Deserialize;

use crate::model::{HotspotKind, UnitType, VrTour};

const BUILTIN_CATALOG: &str = include_str!("../data/catalog.json");

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("catalog has no units")]
    NoUnits,
    #[error("unit {0} has no rooms")]
    EmptyUnit(String),
    #[error("duplicate unit id {0}")]
    DuplicateUnit(String),
    #[error("duplicate room id {room} in unit {unit}")]
    DuplicateRoom { unit: String, room: String },
    #[error("duplicate hotspot id {hotspot} in room {room}")]
    DuplicateHotspot { room: String, hotspot: String },
    #[error("hotspot {hotspot} in room {room} lies outside the 0-100 range")]
    HotspotOutOfBounds { room: String, hotspot: String },
}

/// A navigation hotspot whose target does not resolve inside its unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingTarget {
    pub unit: String,
    pub room: String,
    pub hotspot: String,
    /// `None` when the hotspot has no target at all.
    pub target: Option<String>,
}

#[derive(Deserialize)]
struct RawCatalog {
    units: Vec<UnitType>,
    #[serde(default)]
    vr_tours: Vec<VrTour>,
    default_vr_tour: VrTour,
}

/// Validated, read-only table of unit types and VR tour links.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    units: Vec<UnitType>,
    vr_tours: Vec<VrTour>,
    default_vr_tour: VrTour,
}

impl Catalog {
    /// Build a catalog from already-constructed records.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the records break a structural invariant
    /// (no units, an empty unit, duplicate ids, out-of-range hotspots).
    pub fn new(units: Vec<UnitType>, vr_tours: Vec<VrTour>, default_vr_tour: VrTour) -> Result<Self, CatalogError> {
        validate(&units)?;
        let catalog = Self { units, vr_tours, default_vr_tour };
        for dangling in catalog.dangling_targets() {
            log::warn!(
                "tour catalog: hotspot {}/{}/{} targets unknown room {:?}",
                dangling.unit,
                dangling.room,
                dangling.hotspot,
                dangling.target
            );
        }
        Ok(catalog)
    }

    /// Parse and validate a catalog document.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] for malformed JSON, or any validation error.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let raw: RawCatalog = serde_json::from_str(json)?;
        Self::new(raw.units, raw.vr_tours, raw.default_vr_tour)
    }

    /// The catalog compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns an error only if the embedded document is broken.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    #[must_use]
    pub fn units(&self) -> &[UnitType] {
        &self.units
    }

    /// Look up a unit by id.
    #[must_use]
    pub fn unit(&self, id: &str) -> Option<&UnitType> {
        self.units.iter().find(|u| u.id == id)
    }

    /// Index of the unit with `id`, falling back to the first unit when the
    /// id is absent or unknown.
    #[must_use]
    pub fn resolve_unit_index(&self, id: Option<&str>) -> usize {
        id.and_then(|id| self.units.iter().position(|u| u.id == id))
            .unwrap_or(0)
    }

    #[must_use]
    pub fn vr_tours(&self) -> &[VrTour] {
        &self.vr_tours
    }

    /// External VR tour for `unit_id`, or the default tour.
    #[must_use]
    pub fn vr_tour(&self, unit_id: Option<&str>) -> &VrTour {
        unit_id
            .and_then(|id| self.vr_tours.iter().find(|t| t.id == id))
            .unwrap_or(&self.default_vr_tour)
    }

    /// External VR tour URL for `unit_id`, or the default tour URL.
    #[must_use]
    pub fn vr_link(&self, unit_id: Option<&str>) -> &str {
        &self.vr_tour(unit_id).url
    }

    /// Navigation hotspots that point at a room missing from their unit.
    #[must_use]
    pub fn dangling_targets(&self) -> Vec<DanglingTarget> {
        let mut out = Vec::new();
        for unit in &self.units {
            for room in &unit.rooms {
                for hotspot in room.hotspots.iter().filter(|h| h.kind == HotspotKind::Navigation) {
                    let resolved = hotspot
                        .target_room
                        .as_deref()
                        .is_some_and(|target| unit.room(target).is_some());
                    if !resolved {
                        out.push(DanglingTarget {
                            unit: unit.id.clone(),
                            room: room.id.clone(),
                            hotspot: hotspot.id.clone(),
                            target: hotspot.target_room.clone(),
                        });
                    }
                }
            }
        }
        out
    }
}

fn validate(units: &[UnitType]) -> Result<(), CatalogError> {
    if units.is_empty() {
        return Err(CatalogError::NoUnits);
    }

    let mut unit_ids = HashSet::new();
    for unit in units {
        if !unit_ids.insert(unit.id.as_str()) {
            return Err(CatalogError::DuplicateUnit(unit.id.clone()));
        }
        if unit.rooms.is_empty() {
            return Err(CatalogError::EmptyUnit(unit.id.clone()));
        }

        let mut room_ids = HashSet::new();
        for room in &unit.rooms {
            if !room_ids.insert(room.id.as_str()) {
                return Err(CatalogError::DuplicateRoom { unit: unit.id.clone(), room: room.id.clone() });
            }

            let mut hotspot_ids = HashSet::new();
            for hotspot in &room.hotspots {
                if !hotspot_ids.insert(hotspot.id.as_str()) {
                    return Err(CatalogError::DuplicateHotspot { room: room.id.clone(), hotspot: hotspot.id.clone() });
                }
                if !hotspot.in_bounds() {
                    return Err(CatalogError::HotspotOutOfBounds {
                        room: room.id.clone(),
                        hotspot: hotspot.id.clone(),
                    });
                }
            }
        }
    }
    Ok(())
}
