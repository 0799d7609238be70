//! Modal Gallery - contextual modal routing on Dioxus desktop
//!
//! Opening an image from the gallery shows it in a modal over the gallery,
//! while visiting the same location directly (command line, address bar,
//! plain links) shows it as a full page.
//!
//! ## Quick Start
//!
//! ```no_run
//! use modal_gallery::{GalleryConfig, StartupAction};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = GalleryConfig::load_default()?;
//!     modal_gallery::launch(config, StartupAction::None);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! 1. `GalleryContext` owns the navigation history and is only touched on the UI thread
//! 2. Components send `NavigationCommand`s over a channel
//! 3. Commands are drained synchronously and a `GallerySnapshot` is published to a signal
//! 4. The snapshot's `ViewPlan` decides the base page and the optional modal

use std::sync::mpsc;
use std::sync::Arc;

use dioxus::desktop::tao::window::Icon;
use dioxus::prelude::*;
use parking_lot::Mutex;

// Public library modules
pub mod components;
pub mod config;
pub mod error;
pub mod hooks;
pub mod images;
pub mod keybindings;
pub mod modal;
pub mod route;
pub mod state;

// Internal modules
mod app;


#[cfg(test)]
mod test_helpers;

// Convenience re-exports
pub use config::GalleryConfig;
pub use error::GalleryError;
pub use images::{Image, ImageId, ImageStore, StaticImageStore};
pub use route::{BasePath, Route};
pub use state::{GalleryContext, GallerySnapshot, NavigationCommand, StartupAction};

/// Stylesheet injected into the webview head.
const STYLESHEET: &str = include_str!("../assets/style.css");

/// Load the window icon from embedded PNG.
fn load_icon() -> Option<Icon> {
    let icon_bytes = include_bytes!("../assets/icon.png");
    let image = image::load_from_memory(icon_bytes).ok()?.into_rgba8();
    let (width, height) = image.dimensions();
    Icon::from_rgba(image.into_raw(), width, height).ok()
}

/// Launch the Dioxus desktop application with the built-in image catalogue.
///
/// Blocks until the window is closed.
pub fn launch(config: GalleryConfig, startup_action: StartupAction) {
    launch_with_store(config, startup_action, Arc::new(StaticImageStore::default()));
}

/// Launch the Dioxus desktop application with a custom image store.
///
/// The store is shared read-only with every component through [`AppState`].
pub fn launch_with_store(
    config: GalleryConfig,
    startup_action: StartupAction,
    store: Arc<dyn ImageStore>,
) {
    let app_state = AppState::new(&config, &startup_action, store);

    let custom_head = format!("<style>{STYLESHEET}</style>");

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title(&config.window.title)
                        .with_inner_size(dioxus::desktop::LogicalSize::new(
                            config.window.width,
                            config.window.height,
                        ))
                        .with_window_icon(load_icon()),
                )
                .with_custom_head(custom_head),
        )
        .with_context(app_state)
        .launch(app::App);
}

/// Application state that can be shared with Dioxus.
/// This is Clone + Send + Sync because it only contains thread-safe types.
#[derive(Clone)]
pub struct AppState {
    pub command_tx: mpsc::Sender<NavigationCommand>,
    context: Arc<Mutex<GalleryContext>>,
    /// Read-only image catalogue.
    pub store: Arc<dyn ImageStore>,
    /// Window title, also used as the document title prefix.
    pub title: String,
}

impl AppState {
    /// Create the navigation context and its command channel.
    #[must_use]
    pub fn new(
        config: &GalleryConfig,
        startup_action: &StartupAction,
        store: Arc<dyn ImageStore>,
    ) -> Self {
        let (command_tx, command_rx) = mpsc::channel::<NavigationCommand>();
        let context = GalleryContext::new(
            Arc::clone(&store),
            config.base_path(),
            startup_action,
            command_rx,
        );

        Self {
            command_tx,
            context: Arc::new(Mutex::new(context)),
            store,
            title: config.window.title.clone(),
        }
    }

    /// Send a command to the navigation context.
    pub fn send_command(&self, cmd: NavigationCommand) {
        if self.command_tx.send(cmd).is_err() {
            log::warn!("Navigation context dropped, command ignored");
        }
    }

    /// Process pending commands and publish the new snapshot to the signal.
    pub fn process_and_notify(&self, snapshot_signal: &mut Signal<GallerySnapshot>) {
        let snapshot = {
            let mut context = self.context.lock();
            context.process_commands();
            context.snapshot()
        };
        snapshot_signal.set(snapshot);
    }

    /// Get the current snapshot.
    pub fn get_snapshot(&self) -> GallerySnapshot {
        self.context.lock().snapshot()
    }

    /// Base path of the running application.
    pub fn base_path(&self) -> BasePath {
        self.context.lock().base_path().clone()
    }
}
