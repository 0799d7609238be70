//! In-app link component.
//!
//! There is no browser location to follow in a desktop webview, so links
//! dispatch a [`NavigationCommand`] instead of setting `href`.

use dioxus::prelude::*;

use crate::hooks::use_navigator;
use crate::route::Route;
use crate::state::NavigationCommand;
use crate::AppState;

/// Clickable link sending `command` when activated by mouse or Enter.
#[component]
pub fn NavLink(
    command: NavigationCommand,
    #[props(default)] class: &'static str,
    children: Element,
) -> Element {
    let navigator = use_navigator();
    let base_path = use_context::<AppState>().base_path();

    // Hover hint shows where the link leads
    let target = match &command {
        NavigationCommand::Navigate(route) | NavigationCommand::Replace(route) => {
            base_path.join(route)
        }
        NavigationCommand::OpenInModal(id) => base_path.join(&Route::image(*id)),
        NavigationCommand::NavigateToPath(path) => path.clone(),
        _ => String::new(),
    };

    let click_command = command.clone();
    let click_navigator = navigator.clone();

    rsx! {
        a {
            class: "nav-link {class}",
            role: "link",
            tabindex: 0,
            title: "{target}",
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                click_navigator.send(click_command.clone());
            },
            onkeydown: move |evt: KeyboardEvent| {
                if evt.key() == Key::Enter {
                    evt.prevent_default();
                    navigator.send(command.clone());
                }
            },
            {children}
        }
    }
}
