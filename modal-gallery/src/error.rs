//! Error types for modal-gallery.

use std::path::PathBuf;

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum GalleryError {
    /// The config file exists but could not be read.
    #[error("failed to read {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for [`crate::GalleryConfig`].
    #[error("failed to parse {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// No home directory to derive the config directory from.
    #[error("cannot locate config directory: {0}")]
    ConfigDir(#[from] etcetera::HomeDirError),
}

pub type Result<T, E = GalleryError> = std::result::Result<T, E>;
