//! Navigation state management for Dioxus integration.
//!
//! Components never mutate navigation state directly. They send
//! [`NavigationCommand`]s over a channel; the context drains the queue on the
//! UI thread and publishes a fresh [`GallerySnapshot`] for rendering.
//!
//! This module provides:
//! - `GalleryContext`: history plus command handling
//! - `GallerySnapshot`: a read-only snapshot of what to render
//! - `NavigationCommand`: commands that can be sent to the context

mod history;
mod types;

pub use history::History;
pub use types::{GallerySnapshot, HistoryEntry, NavState, NavigationCommand, StartupAction};

use std::sync::mpsc;
use std::sync::Arc;

use crate::images::ImageStore;
use crate::modal::{dismiss_target, ViewPlan};
use crate::route::{BasePath, Route};

/// Navigation wrapper that lives on the UI thread.
pub struct GalleryContext {
    store: Arc<dyn ImageStore>,
    base_path: BasePath,
    history: History,
    command_rx: mpsc::Receiver<NavigationCommand>,
}

impl GalleryContext {
    #[must_use]
    pub fn new(
        store: Arc<dyn ImageStore>,
        base_path: BasePath,
        startup_action: &StartupAction,
        command_rx: mpsc::Receiver<NavigationCommand>,
    ) -> Self {
        let initial = match startup_action {
            StartupAction::None => Route::home(),
            StartupAction::OpenPath(path) => base_path.resolve(path),
        };
        log::info!("Initial location: {}", base_path.join(&initial));

        Self {
            store,
            base_path,
            history: History::new(HistoryEntry::direct(initial)),
            command_rx,
        }
    }

    /// Drain and apply every queued command.
    pub fn process_commands(&mut self) {
        while let Ok(cmd) = self.command_rx.try_recv() {
            self.handle_command(cmd);
        }
    }

    /// Apply a single command.
    pub(crate) fn handle_command(&mut self, cmd: NavigationCommand) {
        log::debug!("Navigation command: {cmd:?}");
        if cmd.is_background_interaction() && self.modal_open() {
            log::debug!("Modal open, ignoring {cmd:?}");
            return;
        }
        match cmd {
            NavigationCommand::Navigate(route) => {
                self.history.push(HistoryEntry::direct(route));
            }
            NavigationCommand::OpenInModal(id) => {
                let background = self.effective_route();
                self.history.push(HistoryEntry {
                    route: Route::image(id),
                    state: NavState::over(background),
                });
            }
            NavigationCommand::Replace(route) => {
                self.history.replace(HistoryEntry::direct(route));
            }
            NavigationCommand::NavigateToPath(path) => {
                let route = self.base_path.resolve(&path);
                self.history.push(HistoryEntry::direct(route));
            }
            NavigationCommand::DismissModal => {
                if let Some(background) = &self.history.current().state.background {
                    log::debug!(
                        "Dismissing modal over {}, returning to the gallery",
                        self.base_path.join(background)
                    );
                }
                self.history.replace(HistoryEntry::direct(dismiss_target()));
            }
            NavigationCommand::Back => {
                if !self.history.back() {
                    log::debug!("Already at the first history entry");
                }
            }
            NavigationCommand::Forward => {
                if !self.history.forward() {
                    log::debug!("Already at the last history entry");
                }
            }
        }
        log::info!("Location: {}", self.location());
    }

    fn modal_open(&self) -> bool {
        self.plan().overlay_image(self.store.as_ref()).is_some()
    }

    /// Route rendered as the page for the current entry.
    fn effective_route(&self) -> Route {
        let entry = self.history.current();
        entry
            .state
            .background
            .clone()
            .unwrap_or_else(|| entry.route.clone())
    }

    fn location(&self) -> String {
        self.base_path.join(&self.history.current().route)
    }

    #[must_use]
    pub fn plan(&self) -> ViewPlan {
        let entry = self.history.current();
        ViewPlan::new(&entry.route, entry.state.background.as_ref())
    }

    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    #[must_use]
    pub fn base_path(&self) -> &BasePath {
        &self.base_path
    }

    /// Create a snapshot of the current state for rendering.
    #[must_use]
    pub fn snapshot(&self) -> GallerySnapshot {
        let plan = self.plan();
        let modal = plan.overlay_image(self.store.as_ref()).copied();
        GallerySnapshot {
            location: self.location(),
            base: plan.base,
            modal,
            can_go_back: self.history.can_go_back(),
            can_go_forward: self.history.can_go_forward(),
        }
    }
}
