//! Hotspot markers over the panorama and the info overlay they open.

use leptos::prelude::*;
use tour::model::HotspotKind;
use tour::view::{MarkerView, OverlayView};

fn marker_glyph(kind: HotspotKind) -> &'static str {
    match kind {
        HotspotKind::Navigation => "⤢",
        HotspotKind::Info => "i",
        HotspotKind::Feature => "★",
    }
}

/// Clickable markers, positioned in percent of the panorama surface.
#[component]
pub fn HotspotLayer(#[prop(into)] markers: Signal<Vec<MarkerView>>, on_activate: Callback<String>) -> impl IntoView {
    // Re-render the whole list on change: marker ids repeat across rooms.
    view! {
        <div class="tour-hotspots">
            {move || {
                markers
                    .get()
                    .into_iter()
                    .map(|marker| {
                        let id = marker.id.clone();
                        view! {
                            <div class="tour-hotspot__anchor" style=marker.style>
                                <button
                                    class=marker.class
                                    title=marker.title
                                    on:click=move |ev| {
                                        ev.stop_propagation();
                                        on_activate.run(id.clone());
                                    }
                                >
                                    {marker_glyph(marker.kind)}
                                </button>
                                <span class="tour-hotspot__pulse"></span>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

/// Title/description card for the selected info or feature hotspot.
#[component]
pub fn HotspotOverlay(#[prop(into)] overlay: Signal<Option<OverlayView>>, on_close: Callback<()>) -> impl IntoView {
    view! {
        <Show when=move || overlay.with(Option::is_some)>
            <div class="tour-overlay">
                <div class="tour-overlay__body">
                    <h3 class="tour-overlay__title">
                        {move || overlay.with(|o| o.as_ref().map(|o| o.title.clone()).unwrap_or_default())}
                    </h3>
                    {move || {
                        overlay
                            .with(|o| o.as_ref().and_then(|o| o.description.clone()))
                            .map(|text| view! { <p class="tour-overlay__description">{text}</p> })
                    }}
                </div>
                <button class="tour-overlay__close" title="Close" on:click=move |_| on_close.run(())>
                    "✕"
                </button>
            </div>
        </Show>
    }
}
