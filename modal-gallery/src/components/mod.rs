//! UI Components for modal-gallery.
//!
//! Page components bound to routes, the page chrome, and the image dialog.

mod image_dialog;
mod info;
mod layout;
mod modal_overlay;
mod nav_link;
mod pages;

pub use image_dialog::ImageDialog;
pub use info::Info;
pub use layout::{AddressBar, Layout};
pub use modal_overlay::ModalOverlay;
pub use nav_link::NavLink;
pub use pages::{Gallery, Home, ImageView, NoMatch, Page};
