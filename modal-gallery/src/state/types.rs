//! Data types for navigation state.
//!
//! Shared between the navigation context and the UI components.

use crate::images::{Image, ImageId};
use crate::route::Route;

/// State attached to a history entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavState {
    /// Page to keep rendering underneath a modal.
    pub background: Option<Route>,
    /// Opaque payload carried along with the entry.
    pub offset: Option<i64>,
}

impl NavState {
    #[must_use]
    pub fn over(background: Route) -> Self {
        Self {
            background: Some(background),
            offset: None,
        }
    }
}

/// One entry in the navigation history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub route: Route,
    pub state: NavState,
}

impl HistoryEntry {
    /// Entry for a direct visit, without background.
    #[must_use]
    pub fn direct(route: Route) -> Self {
        Self {
            route,
            state: NavState::default(),
        }
    }
}

/// How the application was asked to start.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StartupAction {
    /// No argument: start on the home page.
    #[default]
    None,
    /// Start at a path, as a direct visit.
    OpenPath(String),
}

/// Commands that can be sent to the navigation context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationCommand {
    /// Push a direct visit.
    Navigate(Route),
    /// Push the image route with the current page as background.
    OpenInModal(ImageId),
    /// Replace the current entry with a direct visit.
    Replace(Route),
    /// Resolve a typed location (base path included) and visit it directly.
    NavigateToPath(String),
    /// Close the modal.
    DismissModal,
    Back,
    Forward,
}

impl NavigationCommand {
    /// Whether the command comes from the page behind the modal (links, the
    /// address bar). Those are refused while the dialog is up.
    #[must_use]
    pub fn is_background_interaction(&self) -> bool {
        matches!(
            self,
            Self::Navigate(_) | Self::OpenInModal(_) | Self::Replace(_) | Self::NavigateToPath(_)
        )
    }
}

/// Read-only snapshot of what to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GallerySnapshot {
    /// Current location, base path included.
    pub location: String,
    /// Route rendered as the page.
    pub base: Route,
    /// Image shown in the modal, when there is one.
    pub modal: Option<Image>,
    pub can_go_back: bool,
    pub can_go_forward: bool,
}

impl GallerySnapshot {
    /// The base page is inert (no focus, no pointer input) while the modal is up.
    #[must_use]
    pub fn background_inert(&self) -> bool {
        self.modal.is_some()
    }
}
