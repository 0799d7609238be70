//! Page chrome: address bar, history buttons, and the main navigation.

use dioxus::prelude::*;

use crate::components::NavLink;
use crate::hooks::{use_navigator, use_snapshot};
use crate::keybindings::{handle_address_key, AddressKey};
use crate::route::Route;
use crate::state::NavigationCommand;

/// Wraps every page.
#[component]
pub fn Layout(children: Element) -> Element {
    rsx! {
        div {
            class: "layout",
            AddressBar {}
            nav {
                ul {
                    li {
                        NavLink {
                            command: NavigationCommand::Navigate(Route::home()),
                            "Home"
                        }
                    }
                    li {
                        NavLink {
                            command: NavigationCommand::Navigate(Route::gallery()),
                            "Gallery"
                        }
                    }
                }
            }
            hr {}
            {children}
        }
    }
}

/// Back/forward buttons and an editable location field.
///
/// Submitting the field is a direct visit: an image location typed here
/// opens as a full page, never in the modal.
#[component]
pub fn AddressBar() -> Element {
    let snapshot = use_snapshot();
    let navigator = use_navigator();
    let mut draft = use_signal(|| None::<String>);

    let shown = draft().unwrap_or_else(|| snapshot.location.clone());

    let back_handler = {
        let navigator = navigator.clone();
        move |_: MouseEvent| navigator.send(NavigationCommand::Back)
    };
    let forward_handler = {
        let navigator = navigator.clone();
        move |_: MouseEvent| navigator.send(NavigationCommand::Forward)
    };

    rsx! {
        div {
            class: "address-bar",

            button {
                class: "history-btn",
                title: "Back (Alt+Left)",
                disabled: !snapshot.can_go_back,
                onclick: back_handler,
                "←"
            }

            button {
                class: "history-btn",
                title: "Forward (Alt+Right)",
                disabled: !snapshot.can_go_forward,
                onclick: forward_handler,
                "→"
            }

            input {
                class: "address-input",
                r#type: "text",
                spellcheck: false,
                value: "{shown}",
                oninput: move |evt: FormEvent| draft.set(Some(evt.value())),
                onkeydown: move |evt: KeyboardEvent| {
                    // Keep editing keys away from the window shortcuts
                    evt.stop_propagation();
                    match handle_address_key(&evt.key()) {
                        AddressKey::Submit => {
                            let typed = draft.write().take();
                            if let Some(path) = typed {
                                navigator.send(NavigationCommand::NavigateToPath(path));
                            }
                        }
                        AddressKey::Cancel => draft.set(None),
                        AddressKey::Edit => {}
                    }
                },
            }
        }
    }
}
