//! DOM event to tour input mapping.

use leptos::ev::{KeyboardEvent, MouseEvent, TouchEvent};
use tour::rotation::Point;

/// Viewer commands bound to keys while the tour has focus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TourKey {
    Close,
    PreviousRoom,
    NextRoom,
    Reset,
}

pub fn mouse_point(ev: &MouseEvent) -> Point {
    Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
}

/// Position of the first touch point, if the event carries one.
pub fn touch_point(ev: &TouchEvent) -> Option<Point> {
    #[cfg(feature = "hydrate")]
    {
        ev.touches()
            .get(0)
            .map(|t| Point::new(f64::from(t.client_x()), f64::from(t.client_y())))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ev;
        None
    }
}

pub fn tour_key(ev: &KeyboardEvent) -> Option<TourKey> {
    tour_key_for(&ev.key())
}

/// Map a `KeyboardEvent.key` value to a viewer command.
pub fn tour_key_for(key: &str) -> Option<TourKey> {
    match key {
        "Escape" => Some(TourKey::Close),
        "ArrowLeft" => Some(TourKey::PreviousRoom),
        "ArrowRight" => Some(TourKey::NextRoom),
        "r" | "R" => Some(TourKey::Reset),
        _ => None,
    }
}
