//! Keyboard shortcuts.
//!
//! Translates Dioxus key events into navigation commands. Kept free of
//! component state so the mapping can be tested directly.

use dioxus::prelude::Key;

use crate::state::NavigationCommand;

/// Handle a key pressed anywhere in the window.
///
/// - `Escape` closes the modal when one is shown.
/// - `Alt+Left` / `Alt+Right` walk the history.
#[must_use]
pub fn handle_app_key(key: &Key, alt: bool, modal_open: bool) -> Option<NavigationCommand> {
    match key {
        Key::Escape if modal_open => Some(NavigationCommand::DismissModal),
        Key::ArrowLeft if alt => Some(NavigationCommand::Back),
        Key::ArrowRight if alt => Some(NavigationCommand::Forward),
        _ => None,
    }
}

/// What a key does inside the address field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressKey {
    /// Visit the typed location.
    Submit,
    /// Discard the edit and show the current location again.
    Cancel,
    /// Regular text editing.
    Edit,
}

#[must_use]
pub fn handle_address_key(key: &Key) -> AddressKey {
    match key {
        Key::Enter => AddressKey::Submit,
        Key::Escape => AddressKey::Cancel,
        _ => AddressKey::Edit,
    }
}
