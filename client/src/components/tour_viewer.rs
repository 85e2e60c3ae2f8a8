//! Panoramic room tour viewer.
//!
//! ARCHITECTURE
//! ============
//! The component owns one `tour::session::TourSession` in a `StoredValue`.
//! DOM events are forwarded into it; a session observer captures a fresh
//! `TourView` into a signal after every change, and the markup renders from
//! that signal only. The auto-rotation `Interval` lives in an
//! `AutoRotationDriver` keyed by the session epoch, so room and unit switches
//! restart it and unmounting drops it.

use std::sync::Arc;

use leptos::prelude::*;
use tour::catalog::Catalog;
use tour::input::PointerSource;
use tour::session::{TourEvent, TourSession};
use tour::view::TourView;

use crate::components::hotspot_layer::{HotspotLayer, HotspotOverlay};
use crate::util::tour_input::{TourKey, mouse_point, touch_point, tour_key};

#[component]
pub fn TourViewer(
    catalog: Arc<Catalog>,
    /// Unit to open; the first unit when `None` or unknown.
    unit: Option<String>,
    on_close: Callback<()>,
) -> impl IntoView {
    let mut initial = TourSession::new(catalog, unit.as_deref());
    let snapshot = RwSignal::new(TourView::capture(&initial));
    initial.subscribe(Box::new(move |session, event| {
        match event {
            TourEvent::UnitChanged { unit } => leptos::logging::log!("tour: unit {unit}"),
            TourEvent::RoomChanged { room } => leptos::logging::log!("tour: room {room}"),
            _ => {}
        }
        snapshot.set(TourView::capture(session));
    }));
    let session = StoredValue::new(initial);
    let fullscreen = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        use gloo_timers::callback::Interval;
        use tour::autorotate::AutoRotationDriver;
        use tour::consts::AUTO_ROTATE_INTERVAL_MS;

        let driver = StoredValue::new_local(AutoRotationDriver::<Interval>::new());
        let timer_key = Memo::new(move |_| snapshot.with(|v| (v.auto_rotate, v.epoch)));
        Effect::new(move || {
            let (enabled, epoch) = timer_key.get();
            driver.update_value(|driver| {
                driver.sync(enabled, epoch, || {
                    Interval::new(AUTO_ROTATE_INTERVAL_MS, move || {
                        session.update_value(|s| {
                            s.auto_rotate_tick();
                        });
                    })
                });
            });
        });
        on_cleanup(move || {
            driver.update_value(|driver| {
                driver.stop();
            });
        });
    }

    let markers = Memo::new(move |_| snapshot.with(|v| v.markers.clone()));
    let overlay = Memo::new(move |_| snapshot.with(|v| v.overlay.clone()));

    // --- Pointer input ---

    let on_mouse_down = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        let at = mouse_point(&ev);
        session.update_value(|s| s.pointer_down(at, PointerSource::Mouse));
    };
    let on_mouse_move = move |ev: leptos::ev::MouseEvent| {
        let at = mouse_point(&ev);
        session.update_value(|s| s.pointer_move(at));
    };
    let on_touch_start = move |ev: leptos::ev::TouchEvent| {
        if let Some(at) = touch_point(&ev) {
            session.update_value(|s| s.pointer_down(at, PointerSource::Touch));
        }
    };
    let on_touch_move = move |ev: leptos::ev::TouchEvent| {
        if let Some(at) = touch_point(&ev) {
            ev.prevent_default();
            session.update_value(|s| s.pointer_move(at));
        }
    };
    let release = move || session.update_value(|s| s.pointer_up());

    // --- Controls ---

    let on_activate = Callback::new(move |id: String| {
        session.update_value(|s| {
            s.activate_hotspot(&id);
        });
    });
    let on_close_info = Callback::new(move |()| {
        session.update_value(|s| {
            s.close_info();
        });
    });
    let previous_room = move || {
        session.update_value(|s| {
            s.previous_room();
        });
    };
    let next_room = move || {
        session.update_value(|s| {
            s.next_room();
        });
    };
    let reset = move || session.update_value(TourSession::reset_view);

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        let Some(key) = tour_key(&ev) else {
            return;
        };
        ev.prevent_default();
        match key {
            TourKey::Close => on_close.run(()),
            TourKey::PreviousRoom => previous_room(),
            TourKey::NextRoom => next_room(),
            TourKey::Reset => reset(),
        }
    };

    let surface_style = move || {
        snapshot.with(|v| {
            format!(
                "background-image: url('{}'); transform: {}; transition: {};",
                v.image, v.transform, v.transition
            )
        })
    };

    view! {
        <div
            class=move || if fullscreen.get() { "tour-viewer tour-viewer--fullscreen" } else { "tour-viewer" }
            tabindex="0"
            on:keydown=on_keydown
        >
            <div class="tour-viewer__header">
                <div class="tour-viewer__titles">
                    <h3 class="tour-viewer__unit">{move || snapshot.with(|v| v.unit_name.clone())}</h3>
                    <p class="tour-viewer__room">
                        {move || snapshot.with(|v| v.room_name.clone())}
                        " · "
                        {move || snapshot.with(TourView::room_counter)}
                    </p>
                </div>
                <select
                    class="tour-viewer__unit-select"
                    on:change=move |ev| {
                        let id = event_target_value(&ev);
                        session.update_value(|s| {
                            s.select_unit(&id);
                        });
                    }
                >
                    {move || {
                        snapshot.with(|v| v.units.clone())
                            .into_iter()
                            .map(|u| view! { <option value=u.id selected=u.active>{u.name}</option> })
                            .collect_view()
                    }}
                </select>
                <button class="tour-viewer__close" title="Close tour" on:click=move |_| on_close.run(())>
                    "✕"
                </button>
            </div>

            <div class="tour-viewer__stage">
                <div
                    class=move || {
                        if snapshot.with(|v| v.dragging) {
                            "tour-viewer__surface tour-viewer__surface--dragging"
                        } else {
                            "tour-viewer__surface"
                        }
                    }
                    style=surface_style
                    on:mousedown=on_mouse_down
                    on:mousemove=on_mouse_move
                    on:mouseup=move |_| release()
                    on:mouseleave=move |_| release()
                    on:touchstart=on_touch_start
                    on:touchmove=on_touch_move
                    on:touchend=move |_| release()
                >
                    <HotspotLayer markers=markers on_activate=on_activate/>
                </div>
                <HotspotOverlay overlay=overlay on_close=on_close_info/>
                <div class="tour-viewer__hint">"Drag to explore • Click hotspots for details"</div>

                <div class="tour-viewer__controls">
                    <button class="tour-viewer__btn" title="Previous room" on:click=move |_| previous_room()>
                        "‹"
                    </button>
                    <button class="tour-viewer__btn" on:click=move |_| reset()>
                        "Reset"
                    </button>
                    <button
                        class=move || {
                            if snapshot.with(|v| v.auto_rotate) {
                                "tour-viewer__btn tour-viewer__btn--active"
                            } else {
                                "tour-viewer__btn"
                            }
                        }
                        on:click=move |_| {
                            session.update_value(|s| {
                                s.toggle_auto_rotate();
                            });
                        }
                    >
                        "Auto"
                    </button>
                    <button class="tour-viewer__btn" title="Next room" on:click=move |_| next_room()>
                        "›"
                    </button>
                    <button class="tour-viewer__btn" on:click=move |_| fullscreen.update(|f| *f = !*f)>
                        {move || if fullscreen.get() { "Exit fullscreen" } else { "Fullscreen" }}
                    </button>
                </div>
            </div>

            <div class="tour-viewer__rooms">
                {move || {
                    snapshot.with(|v| v.rooms.clone())
                        .into_iter()
                        .map(|room| {
                            let id = room.id.clone();
                            view! {
                                <button
                                    class=if room.active { "tour-room tour-room--active" } else { "tour-room" }
                                    on:click=move |_| {
                                        session.update_value(|s| {
                                            s.go_to_room(&id);
                                        });
                                    }
                                >
                                    {room.name}
                                </button>
                            }
                        })
                        .collect_view()
                }}
            </div>
            <Show when=move || snapshot.with(|v| v.room_description.is_some())>
                <p class="tour-viewer__description">
                    {move || snapshot.with(|v| v.room_description.clone().unwrap_or_default())}
                </p>
            </Show>
        </div>
    }
}
