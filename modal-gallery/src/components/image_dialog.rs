//! Image detail dialog.
//!
//! Shown over the background page when an image is opened from the gallery.

use dioxus::prelude::*;

use crate::components::ModalOverlay;
use crate::hooks::use_navigator;
use crate::images::Image;
use crate::state::NavigationCommand;

const LABEL_ID: &str = "image-dialog-label";
const CLOSE_ID: &str = "image-dialog-close";

/// Modal showing one image. Escape is handled by the root key handler.
#[component]
pub fn ImageDialog(image: Image) -> Element {
    let navigator = use_navigator();

    // Initial focus goes to the Close button
    use_effect(|| {
        document::eval(&format!(
            r"
            requestAnimationFrame(() => {{
                const button = document.getElementById('{CLOSE_ID}');
                if (button) {{
                    button.focus();
                }}
            }});
        "
        ));
    });

    let backdrop_handler = {
        let navigator = navigator.clone();
        move |_: MouseEvent| navigator.send(NavigationCommand::DismissModal)
    };

    rsx! {
        ModalOverlay {
            class: "image-dialog",
            labelled_by: LABEL_ID,
            on_backdrop_click: backdrop_handler,

            div {
                class: "image-dialog-body",

                h1 {
                    id: LABEL_ID,
                    class: "image-dialog-title",
                    "{image.title}"
                }

                img {
                    class: "image-dialog-image",
                    width: "400",
                    height: "400",
                    src: image.src,
                    alt: "",
                }

                button {
                    id: CLOSE_ID,
                    class: "image-dialog-close",
                    onclick: move |_| navigator.send(NavigationCommand::DismissModal),
                    "Close"
                }
            }
        }
    }
}
