//! Main application component.
//!
//! This is the root Dioxus component. It renders the base page from the
//! snapshot and, on top of it, the image dialog when the snapshot has one.

use dioxus::prelude::*;

use crate::components::{ImageDialog, Info, Layout, Page};
use crate::hooks::Navigator;
use crate::keybindings::handle_app_key;
use crate::state::GallerySnapshot;
use crate::AppState;

/// Main application component.
#[component]
pub fn App() -> Element {
    let app_state = use_context::<AppState>();

    // Snapshot signal shared with every component below
    let snapshot_signal = {
        let app_state = app_state.clone();
        use_context_provider(move || Signal::new(app_state.get_snapshot()))
    };
    let navigator = Navigator::new(app_state.clone(), snapshot_signal);

    // Auto-focus the app container on mount so window shortcuts work
    use_effect(|| {
        document::eval(
            r"
            requestAnimationFrame(() => {
                const container = document.querySelector('.app-container');
                if (container) {
                    container.focus();
                }
            });
        ",
        );
    });

    // The page behind the dialog takes no focus or pointer input while it is up
    use_effect(move || {
        let inert = snapshot_signal.read().background_inert();
        document::eval(&format!(
            r"
            const background = document.querySelector('.app-background');
            if (background) {{
                background.inert = {inert};
            }}
            // Closing the dialog removes the focused Close button
            if (!{inert} && document.activeElement === document.body) {{
                document.querySelector('.app-container')?.focus();
            }}
        "
        ));
    });

    let snapshot: GallerySnapshot = snapshot_signal.read().clone();
    let modal_open = snapshot.modal.is_some();
    let background_hidden = if snapshot.background_inert() { "true" } else { "false" };

    let onkeydown = move |evt: KeyboardEvent| {
        if let Some(cmd) = handle_app_key(&evt.key(), evt.modifiers().alt(), modal_open) {
            log::debug!("Shortcut: {cmd:?}");
            navigator.send(cmd);
            evt.prevent_default();
        }
    };

    rsx! {
        document::Title { "{app_state.title} - {snapshot.location}" }

        div {
            class: "app-container",
            tabindex: 0,
            onkeydown: onkeydown,

            div {
                class: "app-background",
                aria_hidden: background_hidden,

                Info {}

                Layout {
                    Page { route: snapshot.base.clone() }
                }
            }

            if let Some(image) = snapshot.modal {
                ImageDialog { image }
            }
        }
    }
}
