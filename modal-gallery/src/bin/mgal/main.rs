//! Entry point for the mgal binary.

mod args;
mod tracing_setup;

use std::path::PathBuf;

use anyhow::{Context, Result};
use modal_gallery::{GalleryConfig, GalleryError};

/// Environment variable naming an explicit config file.
const CONFIG_ENV: &str = "MGAL_CONFIG";

/// Load the configuration.
///
/// An explicit file must load. The default `gallery.toml` may be broken, in
/// which case defaults are used and the error is handed back for logging once
/// tracing is up.
fn load_config(explicit: Option<PathBuf>) -> Result<(GalleryConfig, Option<GalleryError>)> {
    if let Some(path) = explicit {
        let config = GalleryConfig::load_from(&path)
            .with_context(|| format!("Cannot load {CONFIG_ENV}={}", path.display()))?;
        return Ok((config, None));
    }
    Ok(match GalleryConfig::load_default() {
        Ok(config) => (config, None),
        Err(err) => (GalleryConfig::default(), Some(err)),
    })
}

fn main() -> Result<()> {
    let (config, config_error) = load_config(std::env::var_os(CONFIG_ENV).map(PathBuf::from))?;

    // Before Dioxus, so dioxus-logger does not install its own subscriber
    if let Some(path) = tracing_setup::init(&config.logging) {
        eprintln!("Logging to {}", path.display());
    }
    if let Some(err) = config_error {
        log::warn!("Ignoring gallery.toml, using defaults: {err}");
    }

    let startup_action = args::parse_args();
    log::info!(
        "Starting mgal: {startup_action:?}, base path {:?}",
        config.base_path().as_str()
    );

    modal_gallery::launch(config, startup_action);
    Ok(())
}
