//! Explanatory header shown above every page.

use dioxus::prelude::*;

#[component]
pub fn Info() -> Element {
    rsx! {
        header {
            class: "info",
            h1 { "Modal Example" }

            p {
                "Contextual modal navigation: the path taken to reach a location decides "
                "whether it renders in a modal or as a page of its own. Images opened from "
                "the gallery appear in a modal on top of the gallery, keeping you in the "
                "context of the collection while you look at one item."
            }

            p {
                "Notice that the address bar changes to the image location when the modal "
                "opens, yet the gallery is still rendered behind it."
            }

            p {
                "Now type that same location into the address bar and press Enter. The "
                "image shows directly on the page instead of in a modal, which is what "
                "someone following a link to it would see: they never had the gallery as "
                "context, so there is nothing to show behind it."
            }
        }
    }
}
