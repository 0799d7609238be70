//! Reusable modal overlay component.
//!
//! Encapsulates the overlay+backdrop+container pattern of a modal dialog.

use dioxus::prelude::*;

/// Modal overlay that provides a backdrop and centered dialog container.
///
/// Clicking the backdrop triggers `on_backdrop_click`. Clicks inside the
/// container are stopped from propagating to the backdrop.
///
/// `labelled_by` is the id of the element naming the dialog.
#[component]
pub fn ModalOverlay(
    class: Option<&'static str>,
    labelled_by: &'static str,
    on_backdrop_click: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let container_class = match class {
        Some(c) => format!("modal-container {c}"),
        None => "modal-container".to_string(),
    };

    rsx! {
        div {
            class: "modal-overlay",
            onmousedown: move |evt| on_backdrop_click.call(evt),

            div {
                class: "{container_class}",
                role: "dialog",
                aria_modal: "true",
                aria_labelledby: "{labelled_by}",
                onmousedown: move |evt| evt.stop_propagation(),
                {children}
            }
        }
    }
}
