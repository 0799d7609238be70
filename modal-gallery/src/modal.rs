//! Modal-versus-page decision.
//!
//! A location is rendered in two layers: the base page, matched against the
//! background route when one is present, and an optional overlay, matched
//! against the current route with the modal-only `/img/:id` pattern. The
//! overlay is only ever shown over a background.

use crate::images::{Image, ImageId, ImageStore};
use crate::route::Route;

/// What to render for a location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewPlan {
    /// Route rendered as the page.
    pub base: Route,
    /// Image requested in the overlay, before store lookup.
    pub overlay: Option<ImageId>,
}

impl ViewPlan {
    #[must_use]
    pub fn new(current: &Route, background: Option<&Route>) -> Self {
        let base = background.unwrap_or(current).clone();
        let overlay = background.and(current.modal_image_id());
        Self { base, overlay }
    }

    /// The overlay image, if the overlay is requested and the id exists.
    ///
    /// Unknown ids produce no overlay at all rather than an error dialog.
    #[must_use]
    pub fn overlay_image<'a>(&self, store: &'a dyn ImageStore) -> Option<&'a Image> {
        self.overlay.and_then(|id| store.get(id))
    }
}

/// Where dismissing the modal navigates to.
///
/// Fixed to the gallery, the only page that opens images in the modal.
#[must_use]
pub fn dismiss_target() -> Route {
    Route::gallery()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::images::StaticImageStore;

    #[test]
    fn direct_visit_renders_full_page_without_overlay() {
        let plan = ViewPlan::new(&Route::image(1), None);
        assert_eq!(plan.base, Route::image(1));
        assert_eq!(plan.overlay, None);
    }

    #[test]
    fn visit_over_gallery_renders_gallery_and_overlay() {
        let store = StaticImageStore::default();
        let gallery = Route::gallery();
        let plan = ViewPlan::new(&Route::image(1), Some(&gallery));
        assert_eq!(plan.base, Route::gallery());
        assert_eq!(plan.overlay, Some(1));
        assert_eq!(
            plan.overlay_image(&store).map(|image| image.title),
            Some("Magical winter sunrise")
        );
    }

    #[test]
    fn base_is_identical_with_or_without_overlay() {
        let gallery = Route::gallery();
        let with_modal = ViewPlan::new(&Route::image(3), Some(&gallery));
        let without_modal = ViewPlan::new(&gallery, None);
        assert_eq!(with_modal.base, without_modal.base);
        assert!(with_modal.overlay.is_some());
        assert!(without_modal.overlay.is_none());
    }

    #[test]
    fn non_image_route_over_background_has_no_overlay() {
        let gallery = Route::gallery();
        let plan = ViewPlan::new(&Route::home(), Some(&gallery));
        assert_eq!(plan.base, Route::gallery());
        assert_eq!(plan.overlay, None);
    }

    #[test]
    fn unknown_image_in_modal_renders_nothing() {
        let store = StaticImageStore::default();
        let gallery = Route::gallery();
        let plan = ViewPlan::new(&Route::image(99), Some(&gallery));
        assert_eq!(plan.overlay, Some(99));
        assert!(plan.overlay_image(&store).is_none());
    }

    #[test]
    fn invalid_image_segment_over_background_renders_nothing() {
        let store = StaticImageStore::default();
        let gallery = Route::gallery();
        for path in ["/img/abc", "/img/-1", "/img/4294967296"] {
            let plan = ViewPlan::new(&Route::parse(path), Some(&gallery));
            assert_eq!(plan.base, Route::gallery());
            assert_eq!(plan.overlay, None, "path {path}");
            assert!(plan.overlay_image(&store).is_none());
        }
    }

    #[test]
    fn unmatched_path_renders_no_match_page() {
        let route = Route::parse("/does/not/exist");
        let plan = ViewPlan::new(&route, None);
        assert!(matches!(plan.base, Route::NoMatch { .. }));
        assert!(plan.overlay.is_none());
    }

    #[test]
    fn dismiss_always_targets_gallery() {
        assert_eq!(dismiss_target(), Route::gallery());
    }
}
