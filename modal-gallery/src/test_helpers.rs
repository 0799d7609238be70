//! Test helpers for component rendering tests.
//!
//! Components read `AppState` and the snapshot signal from context, exactly
//! as they do under `App`. These helpers provide both and render to HTML
//! without opening a window.

use std::sync::Arc;

use dioxus::prelude::*;

use crate::config::GalleryConfig;
use crate::images::StaticImageStore;
use crate::state::StartupAction;
use crate::AppState;

/// Render `root` with a fresh `AppState` (built-in catalogue, no base path).
pub(crate) fn render(root: fn() -> Element) -> String {
    let app_state = AppState::new(
        &GalleryConfig::default(),
        &StartupAction::None,
        Arc::new(StaticImageStore::default()),
    );
    let mut dom = VirtualDom::new(root).with_root_context(app_state);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Provide the snapshot signal the way `App` does.
#[component]
pub(crate) fn WithSnapshot(children: Element) -> Element {
    let app_state = use_context::<AppState>();
    use_context_provider(move || Signal::new(app_state.get_snapshot()));
    rsx! { {children} }
}
