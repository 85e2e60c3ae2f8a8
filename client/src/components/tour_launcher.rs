//! Entry points into the tours: external VR walkthroughs and the in-page
//! panorama viewer.

use std::sync::Arc;

use leptos::prelude::*;
use tour::catalog::Catalog;
use tour::consts::VR_WINDOW_FEATURES;

use crate::state::ui::UiState;
use crate::util::browser::open_in_new_context;

/// Single button launching the VR tour for one unit type, or the default
/// tour when `unit` is absent or has no tour of its own.
#[component]
pub fn VrLaunchButton(
    #[prop(optional, into)] unit: Option<String>,
    #[prop(default = "Virtual Tour")] label: &'static str,
) -> impl IntoView {
    let target = use_context::<Arc<Catalog>>().map(|catalog| {
        let tour = catalog.vr_tour(unit.as_deref());
        (tour.name.clone(), tour.url.clone())
    });
    let title = target.as_ref().map(|(name, _)| name.clone()).unwrap_or_default();
    let url = target.map(|(_, url)| url);
    let on_click = move |_| match url.as_deref() {
        Some(url) => {
            if !open_in_new_context(url, Some(VR_WINDOW_FEATURES)) {
                leptos::logging::warn!("VR tour popup was not opened: {url}");
            }
        }
        None => leptos::logging::warn!("VR tour requested without a catalog"),
    };

    view! {
        <button class="vr-launch" title=title on:click=on_click>
            {label}
            <span class="vr-launch__external">"↗"</span>
        </button>
    }
}

/// Grid of unit types, each with a VR walkthrough link and, when the unit
/// has panorama rooms, a button opening the in-page tour.
#[component]
pub fn TourLauncher() -> impl IntoView {
    let Some(catalog) = use_context::<Arc<Catalog>>() else {
        return view! { <p class="tour-launcher__unavailable">"Virtual tours are unavailable right now."</p> }
            .into_any();
    };
    let ui = expect_context::<RwSignal<UiState>>();

    let cards = catalog
        .vr_tours()
        .iter()
        .map(|tour| {
            let unit = catalog.unit(&tour.id).cloned();
            let vr_unit = tour.id.clone();
            let tour_unit = tour.id.clone();
            let has_rooms = unit.is_some();
            view! {
                <div class="tour-card">
                    <h3 class="tour-card__name">{unit.as_ref().map_or_else(|| tour.name.clone(), |u| u.name.clone())}</h3>
                    {unit.map(|u| {
                        view! {
                            <ul class="tour-card__facts">
                                <li>{u.size}</li>
                                <li>{format!("{} bedrooms", u.bedrooms)}</li>
                                <li>{format!("{} bathrooms", u.bathrooms)}</li>
                                <li>{format!("{} carparks", u.carparks)}</li>
                            </ul>
                            <p class="tour-card__description">{u.description}</p>
                        }
                    })}
                    <div class="tour-card__actions">
                        <VrLaunchButton unit=vr_unit label="Launch VR Tour"/>
                        {has_rooms.then(|| {
                            view! {
                                <button
                                    class="tour-card__panorama"
                                    on:click=move |_| ui.update(|ui| ui.open_tour(Some(&tour_unit)))
                                >
                                    "360° Room Tour"
                                </button>
                            }
                        })}
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="tour-launcher">
            <div class="tour-launcher__intro">
                <h2>"Choose Your VR Experience"</h2>
                <p>"Walk through every unit type in immersive 360° before you visit."</p>
            </div>
            <div class="tour-launcher__grid">{cards}</div>
        </div>
    }
    .into_any()
}
