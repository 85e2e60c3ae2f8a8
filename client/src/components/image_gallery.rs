//! Image grid with a zoomable lightbox.

use leptos::prelude::*;
use tour::gallery::{Gallery, GalleryImage};

use crate::util::browser::set_scroll_locked;

#[component]
pub fn ImageGallery(
    images: Vec<GalleryImage>,
    #[prop(optional)] title: Option<&'static str>,
    /// Grid columns on wide screens.
    #[prop(default = 3)]
    columns: u8,
) -> impl IntoView {
    let gallery = RwSignal::new(Gallery::new(images));
    let is_open = Memo::new(move |_| gallery.with(Gallery::is_open));

    Effect::new(move || set_scroll_locked(is_open.get()));
    on_cleanup(move || set_scroll_locked(false));

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::keydown, move |ev| {
            let mut handled = false;
            gallery.update(|g| handled = g.handle_key(&ev.key()));
            if handled {
                ev.prevent_default();
            }
        });
        on_cleanup(move || handle.remove());
    }

    let heading_class = if title.is_some_and(|t| t.to_lowercase().contains("smart lock")) {
        "gallery__title gallery__title--lock"
    } else {
        "gallery__title"
    };

    let tiles = gallery.with_untracked(|g| {
        g.images()
            .iter()
            .enumerate()
            .map(|(index, image)| {
                let alt = format!("Gallery image {}", index + 1);
                view! {
                    <button
                        class="gallery__tile"
                        on:click=move |_| {
                            gallery.update(|g| {
                                g.open(index);
                            });
                        }
                    >
                        <img class="gallery__image" src=image.src.clone() alt=alt/>
                        {image.label.clone().map(|label| view! { <span class="gallery__label">{label}</span> })}
                    </button>
                }
            })
            .collect_view()
    });

    view! {
        <div class="gallery">
            {title.map(|t| view! { <h3 class=heading_class>{t}</h3> })}
            <div class=format!("gallery__grid gallery__grid--cols-{columns}")>{tiles}</div>
            <Show when=move || is_open.get()>
                <Lightbox gallery=gallery/>
            </Show>
        </div>
    }
}

/// Fullscreen view of the current gallery image. Clicking the backdrop closes it.
#[component]
fn Lightbox(gallery: RwSignal<Gallery>) -> impl IntoView {
    let current = move || gallery.with(|g| g.current().cloned());
    let has_navigation = move || gallery.with(Gallery::has_navigation);

    let thumbnails = move || {
        gallery.with(|g| {
            let active = g.current_index();
            g.images()
                .iter()
                .enumerate()
                .map(|(index, image)| {
                    view! {
                        <button
                            class=if index == active { "lightbox__thumb lightbox__thumb--active" } else { "lightbox__thumb" }
                            on:click=move |ev| {
                                ev.stop_propagation();
                                gallery.update(|g| {
                                    g.show(index);
                                });
                            }
                        >
                            <img src=image.src.clone() alt=format!("Thumbnail {}", index + 1)/>
                        </button>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <div class="lightbox" on:click=move |_| gallery.update(Gallery::close)>
            <div class="lightbox__toolbar" on:click=move |ev| ev.stop_propagation()>
                <span class="lightbox__counter">{move || gallery.with(Gallery::counter_label)}</span>
                <div class="lightbox__zoom">
                    <button class="lightbox__btn" title="Zoom out" on:click=move |_| gallery.update(Gallery::zoom_out)>
                        "−"
                    </button>
                    <span class="lightbox__zoom-level">{move || gallery.with(Gallery::zoom_label)}</span>
                    <button class="lightbox__btn" title="Zoom in" on:click=move |_| gallery.update(Gallery::zoom_in)>
                        "+"
                    </button>
                </div>
                <button class="lightbox__btn lightbox__close" title="Close" on:click=move |_| gallery.update(Gallery::close)>
                    "✕"
                </button>
            </div>

            <Show when=has_navigation>
                <button
                    class="lightbox__nav lightbox__nav--prev"
                    title="Previous image"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        gallery.update(Gallery::previous_image);
                    }
                >
                    "‹"
                </button>
                <button
                    class="lightbox__nav lightbox__nav--next"
                    title="Next image"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        gallery.update(Gallery::next_image);
                    }
                >
                    "›"
                </button>
            </Show>

            <div class="lightbox__stage" on:click=move |ev| ev.stop_propagation()>
                {move || {
                    current()
                        .map(|image| {
                            view! {
                                <img
                                    class="lightbox__image"
                                    src=image.src
                                    alt=image.label.clone().unwrap_or_default()
                                    style=move || gallery.with(Gallery::zoom_style)
                                />
                                {image.label.map(|label| view! { <p class="lightbox__caption">{label}</p> })}
                            }
                        })
                }}
            </div>

            <Show when=has_navigation>
                <div class="lightbox__thumbs" on:click=move |ev| ev.stop_propagation()>
                    {thumbnails}
                </div>
            </Show>
        </div>
    }
}
