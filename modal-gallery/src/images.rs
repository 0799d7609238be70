//! Static image catalogue.
//!
//! The gallery reads images through the [`ImageStore`] trait so the built-in
//! catalogue can be swapped for another read-only source (tests, alternative
//! datasets) without touching the components.

use std::fmt;

use crate::route::parse_image_id;

/// Identifier of an image in the catalogue.
pub type ImageId = u32;

/// A single gallery image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Image {
    pub id: ImageId,
    pub title: &'static str,
    pub src: &'static str,
}

/// Read-only access to the image catalogue.
pub trait ImageStore: fmt::Debug + Send + Sync {
    /// All images, in display order.
    fn all(&self) -> &[Image];

    /// Look up an image by id.
    fn get(&self, id: ImageId) -> Option<&Image> {
        self.all().iter().find(|image| image.id == id)
    }
}

/// The four images shipped with the application.
pub const IMAGES: &[Image] = &[
    Image {
        id: 0,
        title: "Enjoying a cup of coffee",
        src: "https://images.unsplash.com/photo-1631016800696-5ea8801b3c2a?crop=entropy&cs=tinysrgb&fit=crop&fm=jpg&h=400&ixid=MnwxfDB8MXxyYW5kb218MHx8fHx8fHx8MTYzMzM2Mzg4Ng&ixlib=rb-1.2.1&q=80&w=400",
    },
    Image {
        id: 1,
        title: "Magical winter sunrise",
        src: "https://images.unsplash.com/photo-1618824834718-92f8469a4dd1?crop=entropy&cs=tinysrgb&fit=crop&fm=jpg&h=400&ixid=MnwxfDB8MXxyYW5kb218MHx8fHx8fHx8MTYzMzM2NDAzMw&ixlib=rb-1.2.1&q=80&w=400",
    },
    Image {
        id: 2,
        title: "Dalmatian and pumpkins",
        src: "https://images.unsplash.com/photo-1633289944756-6295be214e16?crop=entropy&cs=tinysrgb&fit=crop&fm=jpg&h=400&ixid=MnwxfDB8MXxyYW5kb218MHx8fHx8fHx8MTYzMzM2NDA3Nw&ixlib=rb-1.2.1&q=80&w=400",
    },
    Image {
        id: 3,
        title: "Fall into Autumn 🍂🐶",
        src: "https://images.unsplash.com/photo-1633172905740-2eb6730c95b4?crop=entropy&cs=tinysrgb&fit=crop&fm=jpg&h=400&ixid=MnwxfDB8MXxyYW5kb218MHx8fHx8fHx8MTYzMzM2NDEwMg&ixlib=rb-1.2.1&q=80&w=400",
    },
];

/// Ids linked from the home page.
pub const FEATURED: &[ImageId] = &[1, 2];

/// Store backed by a `'static` slice, [`IMAGES`] by default.
#[derive(Debug, Clone, Copy)]
pub struct StaticImageStore {
    images: &'static [Image],
}

impl StaticImageStore {
    #[must_use]
    pub const fn new(images: &'static [Image]) -> Self {
        Self { images }
    }
}

impl Default for StaticImageStore {
    fn default() -> Self {
        Self::new(IMAGES)
    }
}

impl ImageStore for StaticImageStore {
    fn all(&self) -> &[Image] {
        self.images
    }
}

/// What the full-page detail view shows for an id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Detail<'a> {
    Found(&'a Image),
    NotFound,
}

impl<'a> Detail<'a> {
    pub fn resolve(store: &'a dyn ImageStore, id: ImageId) -> Self {
        store.get(id).map_or(Self::NotFound, Self::Found)
    }

    /// Resolve the raw `/img/:id` segment; unparsable ids are not found.
    pub fn from_segment(store: &'a dyn ImageStore, segment: &str) -> Self {
        parse_image_id(segment).map_or(Self::NotFound, |id| Self::resolve(store, id))
    }
}
