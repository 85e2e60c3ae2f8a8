#![allow(clippy::float_cmp)]

use std::sync::Mutex;

use super::*;

// =============================================================
// Helpers
// =============================================================

const FIXTURE: &str = r#"{
  "units": [
    {
      "id": "type-d1", "name": "Sky Duplex", "size": "1410 sq ft", "bedrooms": "4",
      "bathrooms": 3, "carparks": 3, "description": "", "floor_plan": "d1.png",
      "rooms": [
        { "id": "living", "name": "Living", "image": "living.jpg", "hotspots": [
          { "id": "to-kitchen", "x": 75, "y": 60, "title": "Kitchen", "type": "navigation", "target_room": "kitchen" },
          { "id": "ceiling", "x": 50, "y": 20, "title": "High Ceiling", "description": "19ft", "type": "feature" },
          { "id": "art", "x": 30, "y": 40, "title": "Artwork", "type": "info" },
          { "id": "to-attic", "x": 10, "y": 10, "title": "Attic", "type": "navigation", "target_room": "attic" }
        ]},
        { "id": "kitchen", "name": "Kitchen", "image": "kitchen.jpg", "hotspots": [
          { "id": "to-living", "x": 25, "y": 60, "title": "Living", "type": "navigation", "target_room": "living" }
        ]},
        { "id": "bedroom", "name": "Bedroom", "image": "bedroom.jpg", "hotspots": [] }
      ]
    },
    {
      "id": "type-b1", "name": "Standard", "size": "757 sq ft", "bedrooms": "2",
      "bathrooms": 2, "carparks": 1, "description": "", "floor_plan": "b1.png",
      "rooms": [
        { "id": "living-area", "name": "Living Area", "image": "b1-living.jpg", "hotspots": [] },
        { "id": "study", "name": "Study", "image": "b1-study.jpg", "hotspots": [] }
      ]
    }
  ],
  "default_vr_tour": { "id": "default", "name": "Default", "url": "https://vr.example/default" }
}"#;

fn catalog() -> Arc<Catalog> {
    Arc::new(Catalog::from_json(FIXTURE).unwrap())
}

fn session() -> TourSession {
    TourSession::new(catalog(), None)
}

fn record_events(session: &mut TourSession) -> Arc<Mutex<Vec<TourEvent>>> {
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    session.subscribe(Box::new(move |_, event| sink.lock().unwrap().push(event.clone())));
    events
}

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

// =============================================================
// Construction / unit selection
// =============================================================

#[test]
fn new_defaults_to_first_unit_and_room() {
    let s = session();
    assert_eq!(s.unit().id, "type-d1");
    assert_eq!(s.room().id, "living");
    assert_eq!(s.epoch(), 0);
    assert!(s.viewer().auto_rotate);
}

#[test]
fn new_honors_initial_unit() {
    let s = TourSession::new(catalog(), Some("type-b1"));
    assert_eq!(s.unit().id, "type-b1");
    assert_eq!(s.room().id, "living-area");
}

#[test]
fn new_with_unknown_unit_falls_back_to_first() {
    let s = TourSession::new(catalog(), Some("penthouse"));
    assert_eq!(s.unit().id, "type-d1");
}

#[test]
fn select_unit_resets_room_and_viewer() {
    let mut s = session();
    s.go_to_room("bedroom");
    s.pointer_down(pt(0.0, 0.0), PointerSource::Mouse);
    s.pointer_move(pt(90.0, 0.0));
    s.activate_hotspot("ceiling");

    assert!(s.select_unit("type-b1"));
    assert_eq!(s.room().id, "living-area");
    assert_eq!(s.viewer().rotation.yaw, 0.0);
    assert!(s.viewer().auto_rotate);
    assert!(s.viewer().selected.is_none());
    assert!(!s.viewer().is_dragging());
}

#[test]
fn select_same_unit_still_returns_to_first_room() {
    let mut s = session();
    s.next_room();
    assert!(s.select_unit("type-d1"));
    assert_eq!(s.room_index(), 0);
}

#[test]
fn select_unknown_unit_is_noop() {
    let mut s = session();
    s.next_room();
    let epoch = s.epoch();
    assert!(!s.select_unit("penthouse"));
    assert_eq!(s.unit().id, "type-d1");
    assert_eq!(s.room().id, "kitchen");
    assert_eq!(s.epoch(), epoch);
}

// =============================================================
// Room navigation
// =============================================================

#[test]
fn next_room_wraps_to_first() {
    let mut s = session();
    s.next_room();
    s.next_room();
    assert_eq!(s.room().id, "bedroom");
    s.next_room();
    assert_eq!(s.room_index(), 0);
}

#[test]
fn previous_room_from_first_wraps_to_last() {
    let mut s = session();
    s.previous_room();
    assert_eq!(s.room().id, "bedroom");
}

#[test]
fn next_room_n_times_returns_to_start() {
    let mut s = session();
    s.go_to_room("kitchen");
    let n = s.unit().rooms.len();
    for _ in 0..n {
        s.next_room();
    }
    assert_eq!(s.room().id, "kitchen");
}

#[test]
fn single_room_unit_navigation_is_noop() {
    let mut s = TourSession::new(
        Arc::new(
            Catalog::from_json(
                r#"{"units":[{"id":"u","name":"U","size":"","bedrooms":"1","bathrooms":1,"carparks":0,
                "description":"","floor_plan":"","rooms":[{"id":"only","name":"Only","image":"o.jpg"}]}],
                "default_vr_tour":{"id":"d","name":"D","url":"u"}}"#,
            )
            .unwrap(),
        ),
        None,
    );
    assert!(!s.next_room());
    assert!(!s.previous_room());
    assert_eq!(s.room().id, "only");
    assert_eq!(s.epoch(), 0);
}

#[test]
fn room_switch_preserves_rotation_and_bumps_epoch() {
    let mut s = session();
    s.pointer_down(pt(0.0, 0.0), PointerSource::Mouse);
    s.pointer_move(pt(60.0, 0.0));
    s.pointer_up();
    assert!(s.next_room());
    assert_eq!(s.viewer().rotation.yaw, 30.0);
    assert!(!s.viewer().auto_rotate);
    assert_eq!(s.epoch(), 1);
}

#[test]
fn go_to_unknown_room_is_noop() {
    let mut s = session();
    assert!(!s.go_to_room("garage"));
    assert_eq!(s.room().id, "living");
}

// =============================================================
// Hotspots
// =============================================================

#[test]
fn navigation_hotspot_changes_room() {
    let mut s = session();
    assert_eq!(s.activate_hotspot("to-kitchen"), HotspotOutcome::Navigated("kitchen".into()));
    assert_eq!(s.room().image, "kitchen.jpg");
    assert!(s.viewer().selected.is_none());
}

#[test]
fn dangling_navigation_hotspot_leaves_room_unchanged() {
    let mut s = session();
    assert_eq!(s.activate_hotspot("to-attic"), HotspotOutcome::Unresolved);
    assert_eq!(s.room().id, "living");
    assert_eq!(s.epoch(), 0);
}

#[test]
fn unknown_hotspot_id_is_reported() {
    let mut s = session();
    assert_eq!(s.activate_hotspot("nope"), HotspotOutcome::UnknownHotspot);
}

#[test]
fn info_hotspot_opens_overlay_and_replaces_previous() {
    let mut s = session();
    assert_eq!(s.activate_hotspot("ceiling"), HotspotOutcome::InfoShown("ceiling".into()));
    s.activate_hotspot("art");
    let selected = s.viewer().selected.as_ref().unwrap();
    assert_eq!(selected.id, "art");
    assert_eq!(selected.title, "Artwork");
}

#[test]
fn overlay_stays_until_closed() {
    let mut s = session();
    s.activate_hotspot("ceiling");
    s.pointer_down(pt(0.0, 0.0), PointerSource::Mouse);
    s.pointer_move(pt(5.0, 5.0));
    s.pointer_up();
    assert!(s.viewer().selected.is_some());
    assert!(s.close_info());
    assert!(s.viewer().selected.is_none());
    assert!(!s.close_info());
}

#[test]
fn room_switch_clears_overlay() {
    let mut s = session();
    s.activate_hotspot("ceiling");
    s.activate_hotspot("to-kitchen");
    assert!(s.viewer().selected.is_none());
}

// =============================================================
// Viewer delegation
// =============================================================

#[test]
fn reset_view_restores_defaults() {
    let mut s = session();
    s.pointer_down(pt(0.0, 0.0), PointerSource::Touch);
    s.pointer_move(pt(33.0, -71.0));
    s.pointer_up();
    s.reset_view();
    assert_eq!(s.viewer().rotation.pitch, 0.0);
    assert_eq!(s.viewer().rotation.yaw, 0.0);
    assert!(s.viewer().auto_rotate);
}

#[test]
fn tick_stops_after_first_drag() {
    let mut s = session();
    assert!(s.auto_rotate_tick());
    s.pointer_down(pt(0.0, 0.0), PointerSource::Mouse);
    let yaw = s.viewer().rotation.yaw;
    assert!(!s.auto_rotate_tick());
    assert_eq!(s.viewer().rotation.yaw, yaw);
}

// =============================================================
// Observers
// =============================================================

#[test]
fn observers_receive_room_change() {
    let mut s = session();
    let events = record_events(&mut s);
    s.next_room();
    assert_eq!(*events.lock().unwrap(), vec![TourEvent::RoomChanged { room: "kitchen".into() }]);
}

#[test]
fn observers_see_updated_state() {
    let mut s = session();
    let seen = Arc::new(Mutex::new(None::<String>));
    let sink = Arc::clone(&seen);
    s.subscribe(Box::new(move |session, _| {
        *sink.lock().unwrap() = Some(session.room().id.clone());
    }));
    s.activate_hotspot("to-kitchen");
    assert_eq!(seen.lock().unwrap().as_deref(), Some("kitchen"));
}

#[test]
fn drag_emits_auto_rotate_off_once_then_rotation() {
    let mut s = session();
    let events = record_events(&mut s);
    s.pointer_down(pt(0.0, 0.0), PointerSource::Mouse);
    s.pointer_move(pt(10.0, 0.0));
    s.pointer_up();
    s.pointer_down(pt(0.0, 0.0), PointerSource::Mouse);
    let events = events.lock().unwrap();
    assert_eq!(events[0], TourEvent::AutoRotateChanged { enabled: false });
    assert_eq!(events[1], TourEvent::RotationChanged);
    assert_eq!(events.len(), 3);
}

#[test]
fn overlay_events_in_order() {
    let mut s = session();
    let events = record_events(&mut s);
    s.activate_hotspot("ceiling");
    s.activate_hotspot("to-kitchen");
    let events = events.lock().unwrap();
    assert_eq!(
        *events,
        vec![
            TourEvent::HotspotSelected { hotspot: "ceiling".into() },
            TourEvent::HotspotCleared,
            TourEvent::RoomChanged { room: "kitchen".into() },
        ]
    );
}

#[test]
fn unsubscribe_stops_notifications() {
    let mut s = session();
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    let id = s.subscribe(Box::new(move |_, event: &TourEvent| sink.lock().unwrap().push(event.clone())));
    assert!(s.unsubscribe(id));
    assert!(!s.unsubscribe(id));
    s.next_room();
    assert!(events.lock().unwrap().is_empty());
}

#[test]
fn dangling_unit_change_emits_nothing() {
    let mut s = session();
    let events = record_events(&mut s);
    s.select_unit("penthouse");
    s.activate_hotspot("to-attic");
    assert!(events.lock().unwrap().is_empty());
}
