//! Single-page marketing site: hero, virtual tours, galleries, registration.

use std::sync::Arc;

use leptos::prelude::*;
use tour::catalog::Catalog;
use tour::gallery::GalleryImage;

use crate::components::image_gallery::ImageGallery;
use crate::components::lead_form::LeadForm;
use crate::components::tour_launcher::{TourLauncher, VrLaunchButton};
use crate::components::tour_viewer::TourViewer;
use crate::state::ui::UiState;
use crate::util::whatsapp::{DEFAULT_WHATSAPP_MESSAGE, WHATSAPP_NUMBER, chat_url};

const NAV_LINKS: &[(&str, &str)] = &[
    ("#home", "Home"),
    ("#virtual-tour", "Virtual Tour"),
    ("#project-info", "Project Info"),
    ("#floor-plan", "Floor Plan"),
    ("#facilities", "Facilities"),
    ("#register", "Register"),
];

const PROJECT_FACTS: &[(&str, &str)] = &[
    ("Project Name", "Aricia Residences"),
    ("Developer", "Aricia Sdn Bhd"),
    ("Development", "Serviced Apartment"),
    ("Location", "Jalan Sungai Besi, Chan Sow Lin, 57100, KL"),
    ("Land Tenure", "Freehold"),
    ("Authority", "Dewan Bandaraya Kuala Lumpur (DBKL)"),
];

const INTERIOR_IMAGES: &[&str] = &[
    "/images/facilities/facility1.png",
    "/images/facilities/facility2.png",
    "/images/facilities/facility3.png",
    "/images/facilities/facility4.png",
    "/images/facilities/facility5.png",
    "/images/facilities/facility6.png",
];

const FLOOR_PLANS: &[(&str, &str)] = &[
    ("/images/floorplans/Type_A.png", "Type A - 550 sqft"),
    ("/images/floorplans/Type_B.png", "Type B - 757 sqft"),
    ("/images/floorplans/Type_C.png", "Type C - 872 sqft"),
    ("/images/floorplans/Type_D1.png", "Type D1 - 1410 sqft"),
    ("/images/floorplans/Type_D2.png", "Type D2 - 1420 sqft"),
];

fn unlabeled(paths: &[&str]) -> Vec<GalleryImage> {
    paths.iter().map(|p| GalleryImage::new(*p)).collect()
}

fn labeled(items: &[(&str, &str)]) -> Vec<GalleryImage> {
    items.iter().map(|(src, label)| GalleryImage::new(*src).with_label(*label)).collect()
}

#[component]
pub fn HomePage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let whatsapp_href = chat_url(WHATSAPP_NUMBER, DEFAULT_WHATSAPP_MESSAGE);

    view! {
        <div class="home">
            <header class="site-header">
                <img class="site-header__logo" src="/images/logo/aricia.png" alt="Aricia Residences"/>
                <nav class=move || if ui.with(|u| u.nav_open) { "site-nav site-nav--open" } else { "site-nav" }>
                    {NAV_LINKS
                        .iter()
                        .map(|(href, label)| {
                            view! {
                                <a href=*href on:click=move |_| ui.update(|u| u.nav_open = false)>
                                    {*label}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
                <button class="site-header__menu" title="Menu" on:click=move |_| ui.update(UiState::toggle_nav)>
                    "☰"
                </button>
                <a class="site-header__cta" href="#register">"REGISTER NOW"</a>
            </header>

            <section id="home" class="hero">
                <div class="hero__content">
                    <p class="hero__eyebrow">"ARICIA RESIDENCES"</p>
                    <h1 class="hero__title">"TRANSFORM" <br/> "YOUR LIFE AT ARICIA"</h1>
                    <p class="hero__tagline">"Where Nature Inspires Exquisite Living"</p>
                    <div class="hero__actions">
                        <a class="hero__viewing" href="#register">"▶ Request For Viewing"</a>
                        <VrLaunchButton/>
                        <button class="hero__panorama" on:click=move |_| ui.update(|u| u.open_tour(None))>
                            "360° Room Tour"
                        </button>
                    </div>
                </div>
            </section>

            <section class="background">
                <h2>"PROJECT " <span class="accent">"BACKGROUND"</span></h2>
                <p>
                    "Aricia Freehold Residences Sungai Besi, nestled within 4km of Kuala Lumpur's vibrant heart, "
                    "is a high-rise property inspired by the delicate beauty of butterflies."
                </p>
                <p>
                    "Designed for the next generation, Aricia blends convenience and sophistication with "
                    "a strategic, well-connected location."
                </p>
                <img src="/images/exterior/building-exterior.jpg" alt="Aricia Building"/>
                <span class="background__caption">"Artist's Impression"</span>
            </section>

            <section id="virtual-tour" class="section">
                <TourLauncher/>
            </section>

            <section id="facilities" class="section">
                <ImageGallery
                    images=vec![GalleryImage::new("/images/facilities/Facility_plan.png").with_label("Level 8 & 9 Facilities Plan")]
                    title="Facilities"
                    columns=1
                />
                <ImageGallery images=unlabeled(INTERIOR_IMAGES) title="Interior Design"/>
            </section>

            <section id="project-info" class="section project-info">
                <h2>"PROJECT " <span class="accent">"INFORMATION"</span></h2>
                <dl class="project-info__facts">
                    {PROJECT_FACTS
                        .iter()
                        .map(|(label, value)| view! { <dt>{*label}</dt> <dd>{*value}</dd> })
                        .collect_view()}
                </dl>
            </section>

            <section id="floor-plan" class="section">
                <ImageGallery images=labeled(FLOOR_PLANS) title="Floor Plans"/>
            </section>

            <section class="section duplex">
                <h3>"FIRST SKY " <span class="accent">"DUPLEX"</span></h3>
                <h4>"With 19ft Ceiling Height"</h4>
                <p>"3 + 1 Bedrooms at Jalan Sungai Besi"</p>
                <p>"2 Carparks"</p>
                <VrLaunchButton unit="type-d1" label="Explore the Duplex in VR"/>
            </section>

            <section class="section">
                <ImageGallery
                    images=unlabeled(&["/images/exterior/smartlock.png"])
                    title="Exclusive Smart Lock Features for Every Unit"
                    columns=1
                />
            </section>

            <section id="register" class="section register">
                <h2>"REGISTER YOUR " <span class="accent">"INTEREST"</span></h2>
                <p>"Leave your details and our sales team will get back to you."</p>
                <LeadForm/>
            </section>

            <footer class="site-footer">
                <p>"© Aricia Residences. All rights reserved."</p>
            </footer>

            <a class="whatsapp-float" href=whatsapp_href target="_blank" rel="noopener noreferrer" title="Chat on WhatsApp">
                <img src="/images/logo/whatsapp.svg" alt="WhatsApp"/>
            </a>

            <TourModal/>
        </div>
    }
}

/// Panorama viewer overlay driven by [`UiState::tour_open`]. A new open
/// request remounts the viewer with a fresh session.
#[component]
fn TourModal() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let catalog = use_context::<Arc<Catalog>>();
    let is_open = Memo::new(move |_| ui.with(|u| u.tour_open));
    let request = Memo::new(move |_| ui.with(|u| (u.tour_seq, u.tour_unit.clone())));
    let on_close = Callback::new(move |()| {
        ui.update(|u| {
            u.close_tour();
        });
    });

    view! {
        <Show when=move || is_open.get()>
            <div class="tour-modal" on:click=move |_| on_close.run(())>
                <div class="tour-modal__body" on:click=move |ev| ev.stop_propagation()>
                    {
                        let catalog = catalog.clone();
                        move || {
                            let (_, unit) = request.get();
                            match catalog.clone() {
                                Some(catalog) => view! { <TourViewer catalog=catalog unit=unit on_close=on_close/> }.into_any(),
                                None => view! { <p class="tour-modal__unavailable">"The room tour is unavailable right now."</p> }.into_any(),
                            }
                        }
                    }
                </div>
            </div>
        </Show>
    }
}
