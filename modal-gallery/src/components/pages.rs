//! Page components, one per route.
//!
//! The component names match the [`Route`] variants so the `Routable` derive
//! can bind them.

use dioxus::prelude::*;

use crate::components::NavLink;
use crate::hooks::use_image_store;
use crate::images::{Detail, FEATURED};
use crate::route::Route;
use crate::state::NavigationCommand;

/// Render the page for a route.
#[component]
pub fn Page(route: Route) -> Element {
    match route {
        Route::Home {} => rsx! { Home {} },
        Route::Gallery {} => rsx! { Gallery {} },
        Route::ImageView { id } => rsx! { ImageView { id } },
        Route::NoMatch { segments } => rsx! { NoMatch { segments } },
    }
}

/// Home page with links to the featured images.
///
/// These are plain links: the images open as full pages.
#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            class: "page page-home",
            h2 { "Home" }
            h3 { "Featured Images" }
            ul {
                for id in FEATURED.iter().copied() {
                    li {
                        key: "{id}",
                        NavLink {
                            command: NavigationCommand::Navigate(Route::image(id)),
                            "Image {id}"
                        }
                    }
                }
            }
        }
    }
}

/// Grid of every image. Each opens in the modal over this page.
#[component]
pub fn Gallery() -> Element {
    let store = use_image_store();
    let images = store.all().to_vec();

    rsx! {
        div {
            class: "page page-gallery",
            h2 { "Gallery" }
            div {
                class: "gallery-grid",
                for image in images {
                    NavLink {
                        key: "{image.id}",
                        class: "gallery-item",
                        command: NavigationCommand::OpenInModal(image.id),
                        img {
                            class: "gallery-thumb",
                            width: "200",
                            height: "200",
                            src: image.src,
                            alt: image.title,
                        }
                    }
                }
            }
        }
    }
}

/// Full-page image detail. `id` is the raw path segment.
#[component]
pub fn ImageView(id: String) -> Element {
    let store = use_image_store();

    match Detail::from_segment(store.as_ref(), &id) {
        Detail::Found(image) => rsx! {
            div {
                class: "page page-image",
                h1 { "{image.title}" }
                img {
                    width: "400",
                    height: "400",
                    src: image.src,
                    alt: "",
                }
            }
        },
        Detail::NotFound => {
            log::debug!("No image with id {id}");
            rsx! {
                div { class: "page page-image", "Image not found" }
            }
        }
    }
}

/// Fallback for unmatched locations.
#[component]
pub fn NoMatch(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div {
            class: "page page-no-match",
            h2 { "Nothing to see here!" }
            p { class: "muted", "No page at /{path}" }
            p {
                NavLink {
                    command: NavigationCommand::Navigate(Route::home()),
                    "Go to the home page"
                }
            }
        }
    }
}
