use super::*;
use crate::model::{Hotspot, Room};

// =============================================================
// Helpers
// =============================================================

fn nav(id: &str, target: Option<&str>) -> Hotspot {
    Hotspot {
        id: id.into(),
        x: 50.0,
        y: 50.0,
        title: id.into(),
        description: None,
        kind: HotspotKind::Navigation,
        target_room: target.map(str::to_owned),
    }
}

fn room(id: &str, hotspots: Vec<Hotspot>) -> Room {
    Room { id: id.into(), name: id.into(), image: format!("{id}.jpg"), description: None, hotspots }
}

fn unit(id: &str, rooms: Vec<Room>) -> UnitType {
    UnitType {
        id: id.into(),
        name: id.into(),
        size: "100 sq ft".into(),
        bedrooms: "1".into(),
        bathrooms: 1,
        carparks: 1,
        description: String::new(),
        floor_plan: "plan.png".into(),
        rooms,
    }
}

fn default_tour() -> VrTour {
    VrTour { id: "default".into(), name: "Default".into(), url: "https://vr.example/default".into() }
}

// =============================================================
// Builtin document
// =============================================================

#[test]
fn builtin_catalog_loads() {
    let catalog = Catalog::builtin().unwrap();
    assert!(!catalog.units().is_empty());
    assert_eq!(catalog.units()[0].id, "type-d1");
}

#[test]
fn builtin_catalog_has_no_dangling_targets() {
    let catalog = Catalog::builtin().unwrap();
    assert!(catalog.dangling_targets().is_empty());
}

#[test]
fn builtin_first_room_of_d1_is_living_room() {
    let catalog = Catalog::builtin().unwrap();
    let d1 = catalog.unit("type-d1").unwrap();
    assert_eq!(d1.rooms[0].id, "living-room");
    assert_eq!(d1.rooms.len(), 3);
}

// =============================================================
// Validation
// =============================================================

#[test]
fn rejects_empty_catalog() {
    let err = Catalog::new(vec![], vec![], default_tour()).unwrap_err();
    assert!(matches!(err, CatalogError::NoUnits));
}

#[test]
fn rejects_unit_without_rooms() {
    let err = Catalog::new(vec![unit("a", vec![])], vec![], default_tour()).unwrap_err();
    assert!(matches!(err, CatalogError::EmptyUnit(id) if id == "a"));
}

#[test]
fn rejects_duplicate_unit_ids() {
    let units = vec![unit("a", vec![room("r", vec![])]), unit("a", vec![room("r", vec![])])];
    let err = Catalog::new(units, vec![], default_tour()).unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateUnit(id) if id == "a"));
}

#[test]
fn rejects_duplicate_room_ids() {
    let units = vec![unit("a", vec![room("r", vec![]), room("r", vec![])])];
    let err = Catalog::new(units, vec![], default_tour()).unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateRoom { .. }));
}

#[test]
fn room_ids_may_repeat_across_units() {
    let units = vec![unit("a", vec![room("r", vec![])]), unit("b", vec![room("r", vec![])])];
    assert!(Catalog::new(units, vec![], default_tour()).is_ok());
}

#[test]
fn rejects_duplicate_hotspot_ids() {
    let units = vec![unit("a", vec![room("r", vec![nav("h", Some("r")), nav("h", Some("r"))])])];
    let err = Catalog::new(units, vec![], default_tour()).unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateHotspot { .. }));
}

#[test]
fn rejects_out_of_bounds_hotspot() {
    let mut h = nav("h", Some("r"));
    h.x = 140.0;
    let units = vec![unit("a", vec![room("r", vec![h])])];
    let err = Catalog::new(units, vec![], default_tour()).unwrap_err();
    assert!(matches!(err, CatalogError::HotspotOutOfBounds { .. }));
}

#[test]
fn rejects_malformed_json() {
    let err = Catalog::from_json("{ not json").unwrap_err();
    assert!(matches!(err, CatalogError::Parse(_)));
}

// =============================================================
// Dangling targets
// =============================================================

#[test]
fn dangling_target_reported_not_rejected() {
    let units = vec![unit("a", vec![room("r", vec![nav("to-attic", Some("attic")), nav("blank", None)])])];
    let catalog = Catalog::new(units, vec![], default_tour()).unwrap();
    let dangling = catalog.dangling_targets();
    assert_eq!(dangling.len(), 2);
    assert_eq!(dangling[0].hotspot, "to-attic");
    assert_eq!(dangling[0].target.as_deref(), Some("attic"));
    assert_eq!(dangling[1].target, None);
}

#[test]
fn targets_resolve_only_within_same_unit() {
    let units = vec![
        unit("a", vec![room("r1", vec![nav("cross", Some("r2"))])]),
        unit("b", vec![room("r2", vec![])]),
    ];
    let catalog = Catalog::new(units, vec![], default_tour()).unwrap();
    assert_eq!(catalog.dangling_targets().len(), 1);
}

// =============================================================
// Lookups
// =============================================================

#[test]
fn resolve_unit_index_matches_or_defaults_to_first() {
    let units = vec![unit("a", vec![room("r", vec![])]), unit("b", vec![room("r", vec![])])];
    let catalog = Catalog::new(units, vec![], default_tour()).unwrap();
    assert_eq!(catalog.resolve_unit_index(Some("b")), 1);
    assert_eq!(catalog.resolve_unit_index(Some("zzz")), 0);
    assert_eq!(catalog.resolve_unit_index(None), 0);
}

#[test]
fn vr_link_falls_back_to_default() {
    let catalog = Catalog::builtin().unwrap();
    assert!(catalog.vr_link(Some("type-a1")).contains("Type_A1"));
    assert!(catalog.vr_link(Some("type-c1")).contains("Type_C1"));
    assert!(catalog.vr_link(Some("penthouse")).contains("Type_D1"));
    assert!(catalog.vr_link(None).contains("Type_D1"));
    assert_eq!(catalog.vr_tour(None).name, "Aricia Residences VR Tour");
}
