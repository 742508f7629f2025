//! Configuration module for Research Radar
//!
//! Handles loading settings from YAML files and environment variables.

mod settings;

pub use settings::*;

use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::info;

/// Environment variable pointing at a settings file
pub const SETTINGS_PATH_ENV: &str = "RADAR_SETTINGS_PATH";

/// Default locations searched for settings.yml, in order
pub fn default_paths() -> Vec<PathBuf> {
    let mut paths = vec![
        PathBuf::from("settings.yml"),
        PathBuf::from("config/settings.yml"),
        PathBuf::from("/etc/research-radar/settings.yml"),
    ];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("research-radar/settings.yml"));
    }
    paths
}

/// Load settings from an explicit path, the settings env var, a default
/// location, or built-in defaults; environment variables are applied last.
pub fn load(explicit: Option<&Path>) -> Result<Settings> {
    let candidate = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => std::env::var(SETTINGS_PATH_ENV)
            .ok()
            .map(PathBuf::from)
            .filter(|p| p.exists())
            .or_else(|| default_paths().into_iter().find(|p| p.exists())),
    };

    let mut settings = match candidate {
        Some(path) => {
            info!("Loading settings from: {}", path.display());
            Settings::from_file(&path)?
        }
        None => {
            info!("No settings file found, using defaults");
            Settings::default()
        }
    };

    settings.merge_env();
    settings.validate()?;
    Ok(settings)
}
