//! Application configuration.
//!
//! Configuration is loaded from `<config dir>/modal-gallery/gallery.toml` and
//! provides window, routing, and logging settings. Every field is optional.

use std::path::{Path, PathBuf};

use etcetera::BaseStrategy;
use serde::Deserialize;

use crate::error::{GalleryError, Result};
use crate::route::BasePath;

/// Configuration loaded from `gallery.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    pub window: WindowConfig,
    pub routing: RoutingConfig,
    pub logging: LoggingConfig,
}

/// Window configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
}

/// Routing configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RoutingConfig {
    /// Prefix under which every route is served, e.g. `/example7`.
    pub base_path: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub log_file: Option<PathBuf>,
    pub level: String,
    pub suppressed_patterns: Vec<String>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Modal Gallery".to_string(),
            width: 1024.0,
            height: 768.0,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_file: Some(PathBuf::from("/tmp/modal-gallery.log")),
            level: "info".to_string(),
            // Webview chatter while the cursor crosses the thumbnail grid
            suppressed_patterns: [
                "SelectionDidChange",
                "Dispatched unknown event",
                "mousemove",
                "mouseover",
                "mouseout",
                "pointermove",
                "pointerover",
                "pointerout",
            ]
            .map(String::from)
            .to_vec(),
        }
    }
}

impl GalleryConfig {
    /// Default config file location.
    pub fn default_path() -> Result<PathBuf> {
        let strategy = etcetera::choose_base_strategy()?;
        Ok(strategy.config_dir().join("modal-gallery").join("gallery.toml"))
    }

    /// Load configuration from the default location.
    ///
    /// Falls back to defaults if the file doesn't exist.
    /// Returns an error only if the file exists but is unreadable or malformed.
    pub fn load_default() -> Result<Self> {
        let config_path = Self::default_path()?;
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| GalleryError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str::<GalleryConfig>(&content).map_err(|source| GalleryError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    #[must_use]
    pub fn base_path(&self) -> BasePath {
        BasePath::new(&self.routing.base_path)
    }

    /// Set the window title.
    #[must_use]
    pub fn with_window_title(mut self, title: impl Into<String>) -> Self {
        self.window.title = title.into();
        self
    }

    /// Set the window dimensions.
    #[must_use]
    pub fn with_window_size(mut self, width: f64, height: f64) -> Self {
        self.window.width = width;
        self.window.height = height;
        self
    }

    /// Set the base path routes are served under.
    #[must_use]
    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.routing.base_path = base_path.into();
        self
    }

    /// Set the log file path.
    #[must_use]
    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.logging.log_file = Some(path.into());
        self
    }

    /// Set the log level (e.g., "info", "debug", "warn").
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.logging.level = level.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn default_config_has_expected_values() {
        let config = GalleryConfig::default();
        assert_eq!(config.window.title, "Modal Gallery");
        assert!((config.window.width - 1024.0).abs() < f64::EPSILON);
        assert!((config.window.height - 768.0).abs() < f64::EPSILON);
        assert_eq!(config.routing.base_path, "");
        assert_eq!(config.logging.level, "info");
        assert!(config
            .logging
            .suppressed_patterns
            .contains(&"SelectionDidChange".to_string()));
    }

    #[test]
    fn builder_methods_override_defaults() {
        let config = GalleryConfig::default()
            .with_window_title("Photos")
            .with_window_size(800.0, 600.0)
            .with_base_path("/example7")
            .with_log_file("/tmp/other.log")
            .with_log_level("debug");

        assert_eq!(config.window.title, "Photos");
        assert!((config.window.width - 800.0).abs() < f64::EPSILON);
        assert!((config.window.height - 600.0).abs() < f64::EPSILON);
        assert_eq!(config.base_path().as_str(), "/example7");
        assert_eq!(config.logging.log_file, Some(PathBuf::from("/tmp/other.log")));
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn deserialize_partial_config() {
        let toml_str = r#"
[window]
title = "custom"

[routing]
base_path = "example7/"
"#;
        let config = toml::from_str::<GalleryConfig>(toml_str).expect("should deserialize");
        assert_eq!(config.window.title, "custom");
        // Width should be default
        assert!((config.window.width - 1024.0).abs() < f64::EPSILON);
        assert_eq!(config.base_path().as_str(), "/example7");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "[logging]\nlevel = \"warn\"").expect("write config");
        let config = GalleryConfig::load_from(file.path()).expect("should load");
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.window.title, "Modal Gallery");
    }

    #[test]
    fn load_from_malformed_file_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "[window\ntitle = ").expect("write config");
        let result = GalleryConfig::load_from(file.path());
        assert!(matches!(result, Err(GalleryError::ConfigParse { .. })));
    }

    #[test]
    fn load_from_nonexistent_path_returns_error() {
        let result = GalleryConfig::load_from(Path::new("/nonexistent/gallery.toml"));
        assert!(matches!(result, Err(GalleryError::ConfigRead { .. })));
    }
}
