//! Route table.
//!
//! Path matching and formatting come from the Dioxus `Routable` derive; this
//! module only declares the patterns, the component bound to each, and the
//! base-path handling used when locations are typed or displayed.

use std::fmt;

use dioxus::prelude::*;

use crate::components::{Gallery, Home, ImageView, NoMatch};
use crate::images::ImageId;

/// Application routes, matched in declaration order.
#[derive(Clone, Routable, Debug, PartialEq, Eq)]
pub enum Route {
    /// Home page with the featured images.
    #[route("/")]
    Home {},

    /// Grid of every image. Links from here open in the modal.
    #[route("/gallery")]
    Gallery {},

    /// Image detail. Full page on a direct visit, modal over a background.
    ///
    /// The segment is kept as text so that every `/img/<x>` lands here; an
    /// id that is not a valid [`ImageId`] resolves to "not found".
    #[route("/img/:id")]
    ImageView { id: String },

    /// Catch-all.
    #[route("/:..segments")]
    NoMatch { segments: Vec<String> },
}

impl Route {
    #[must_use]
    pub fn home() -> Self {
        Self::Home {}
    }

    #[must_use]
    pub fn gallery() -> Self {
        Self::Gallery {}
    }

    #[must_use]
    pub fn image(id: ImageId) -> Self {
        Self::ImageView { id: id.to_string() }
    }

    /// Parse a path relative to the base path.
    ///
    /// Never fails: anything the table does not recognise becomes
    /// [`Route::NoMatch`].
    #[must_use]
    pub fn parse(path: &str) -> Self {
        let path = path.trim();
        let normalized = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };
        normalized
            .parse::<Self>()
            .unwrap_or_else(|_| Self::no_match(&normalized))
    }

    fn no_match(path: &str) -> Self {
        Self::NoMatch {
            segments: path
                .split('/')
                .filter(|segment| !segment.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    /// The id captured by the modal-only pattern (`/img/:id`), if any.
    ///
    /// A segment that is not a valid id matches the pattern but names no
    /// image, so it yields `None` and the overlay stays empty.
    #[must_use]
    pub fn modal_image_id(&self) -> Option<ImageId> {
        match self {
            Self::ImageView { id } => parse_image_id(id),
            _ => None,
        }
    }
}

/// Parse an `/img/:id` segment. Signs, overflow and non-digits are rejected.
#[must_use]
pub fn parse_image_id(segment: &str) -> Option<ImageId> {
    if segment.is_empty() || !segment.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}

/// Prefix under which every route is served, e.g. `/example7`.
///
/// Stored without a trailing slash; the empty string means "no prefix".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BasePath(String);

impl BasePath {
    #[must_use]
    pub fn new(raw: &str) -> Self {
        let trimmed = raw.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            Self(String::new())
        } else if trimmed.starts_with('/') {
            Self(trimmed.to_string())
        } else {
            Self(format!("/{trimmed}"))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Remove the prefix from an absolute path.
    ///
    /// Returns `None` when the path lives outside the base path.
    #[must_use]
    pub fn strip<'a>(&self, path: &'a str) -> Option<&'a str> {
        if self.0.is_empty() {
            return Some(path);
        }
        let rest = path.strip_prefix(self.0.as_str())?;
        if rest.is_empty() {
            Some("/")
        } else if rest.starts_with('/') {
            Some(rest)
        } else {
            None
        }
    }

    /// Absolute path for a route, prefix included.
    #[must_use]
    pub fn join(&self, route: &Route) -> String {
        let relative = route.to_string();
        if self.0.is_empty() {
            relative
        } else if relative == "/" {
            self.0.clone()
        } else {
            format!("{}{relative}", self.0)
        }
    }

    /// Resolve a typed or command-line location to a route.
    #[must_use]
    pub fn resolve(&self, input: &str) -> Route {
        let input = input.trim();
        let absolute = if input.starts_with('/') {
            input.to_string()
        } else {
            format!("/{input}")
        };
        match self.strip(&absolute) {
            Some(relative) => Route::parse(relative),
            None => Route::no_match(&absolute),
        }
    }
}

impl fmt::Display for BasePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_static_routes() {
        assert_eq!(Route::parse("/"), Route::home());
        assert_eq!(Route::parse("/gallery"), Route::gallery());
    }

    #[test]
    fn parse_image_route_captures_id() {
        assert_eq!(Route::parse("/img/3"), Route::image(3));
        assert_eq!(Route::parse("img/0"), Route::image(0));
    }

    #[test]
    fn parse_unknown_path_is_no_match() {
        assert!(matches!(Route::parse("/nowhere"), Route::NoMatch { .. }));
        assert!(matches!(Route::parse("/gallery/extra/deep"), Route::NoMatch { .. }));
        assert!(matches!(Route::parse("/img/1/extra"), Route::NoMatch { .. }));
    }

    #[test]
    fn any_image_segment_reaches_image_view() {
        for segment in ["abc", "-1", "4294967296", "1.5"] {
            let route = Route::parse(&format!("/img/{segment}"));
            assert_eq!(
                route,
                Route::ImageView {
                    id: segment.to_string()
                }
            );
            assert_eq!(route.modal_image_id(), None, "segment {segment}");
        }
    }

    #[test]
    fn image_id_parsing_is_strict() {
        assert_eq!(parse_image_id("0"), Some(0));
        assert_eq!(parse_image_id("4294967295"), Some(u32::MAX));
        assert_eq!(parse_image_id("4294967296"), None);
        assert_eq!(parse_image_id("+1"), None);
        assert_eq!(parse_image_id("-1"), None);
        assert_eq!(parse_image_id(""), None);
    }

    #[test]
    fn display_round_trips_known_routes() {
        for route in [Route::home(), Route::gallery(), Route::image(2)] {
            assert_eq!(Route::parse(&route.to_string()), route);
        }
        assert_eq!(Route::image(2).to_string(), "/img/2");
    }

    #[test]
    fn only_image_route_matches_modal_pattern() {
        assert_eq!(Route::image(1).modal_image_id(), Some(1));
        assert_eq!(Route::home().modal_image_id(), None);
        assert_eq!(Route::gallery().modal_image_id(), None);
        assert_eq!(Route::parse("/missing").modal_image_id(), None);
    }

    #[test]
    fn base_path_is_normalized() {
        assert_eq!(BasePath::new("").as_str(), "");
        assert_eq!(BasePath::new("/").as_str(), "");
        assert_eq!(BasePath::new("example7/").as_str(), "/example7");
        assert_eq!(BasePath::new("/example7").as_str(), "/example7");
    }

    #[test]
    fn base_path_strip() {
        let base = BasePath::new("/example7");
        assert_eq!(base.strip("/example7"), Some("/"));
        assert_eq!(base.strip("/example7/gallery"), Some("/gallery"));
        assert_eq!(base.strip("/example70/gallery"), None);
        assert_eq!(base.strip("/gallery"), None);
        assert_eq!(BasePath::default().strip("/gallery"), Some("/gallery"));
    }

    #[test]
    fn base_path_join() {
        let base = BasePath::new("/example7");
        assert_eq!(base.join(&Route::home()), "/example7");
        assert_eq!(base.join(&Route::image(1)), "/example7/img/1");
        assert_eq!(BasePath::default().join(&Route::gallery()), "/gallery");
    }

    #[test]
    fn base_path_resolve() {
        let base = BasePath::new("/example7");
        assert_eq!(base.resolve("/example7/img/2"), Route::image(2));
        assert_eq!(base.resolve("example7/gallery"), Route::gallery());
        assert!(matches!(base.resolve("/img/2"), Route::NoMatch { .. }));
    }
}
