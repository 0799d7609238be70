//! Custom Dioxus hooks for modal-gallery components.

use std::sync::Arc;

use dioxus::prelude::*;

use crate::images::ImageStore;
use crate::state::{GallerySnapshot, NavigationCommand};
use crate::AppState;

/// Read the current snapshot from the signal context.
///
/// Components that call this automatically re-render when the snapshot changes.
#[must_use]
pub fn use_snapshot() -> GallerySnapshot {
    use_context::<Signal<GallerySnapshot>>().read().clone()
}

/// Get the snapshot signal for writing (e.g., after processing commands).
#[must_use]
pub fn use_snapshot_signal() -> Signal<GallerySnapshot> {
    use_context::<Signal<GallerySnapshot>>()
}

/// The injected image catalogue.
#[must_use]
pub fn use_image_store() -> Arc<dyn ImageStore> {
    use_context::<AppState>().store
}

/// Handle for sending navigation commands from event handlers.
#[derive(Clone)]
pub struct Navigator {
    app_state: AppState,
    snapshot_signal: Signal<GallerySnapshot>,
}

impl Navigator {
    #[must_use]
    pub fn new(app_state: AppState, snapshot_signal: Signal<GallerySnapshot>) -> Self {
        Self {
            app_state,
            snapshot_signal,
        }
    }

    /// Send a command and re-render with the resulting snapshot.
    pub fn send(&self, cmd: NavigationCommand) {
        let mut snapshot_signal = self.snapshot_signal;
        self.app_state.send_command(cmd);
        self.app_state.process_and_notify(&mut snapshot_signal);
    }
}

/// Navigator bound to the snapshot signal provided by the root component.
#[must_use]
pub fn use_navigator() -> Navigator {
    Navigator::new(use_context::<AppState>(), use_snapshot_signal())
}
