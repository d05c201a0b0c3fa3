//! User settings, read from `settings.toml` in the platform config directory.
//!
//! Every field has a default, so a partial or missing file is fine. A file
//! that fails to parse is reported and replaced by the defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::constants::FPS;
use crate::theme::ThemeMode;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "gallery-book";

pub const DEFAULT_ASSET_ROOT: &str = "public";
pub const DEFAULT_THEME_POLL_SECONDS: f32 = 1.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory the site-absolute asset paths are resolved against.
    pub asset_root: PathBuf,
    pub theme: ThemeMode,
    /// Page shown at startup, clamped to the book.
    pub initial_page: i64,
    pub fps: u32,
    /// How often the system color scheme is checked.
    pub theme_poll_seconds: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            asset_root: PathBuf::from(DEFAULT_ASSET_ROOT),
            theme: ThemeMode::System,
            initial_page: 1,
            fps: FPS,
            theme_poll_seconds: DEFAULT_THEME_POLL_SECONDS,
        }
    }
}

pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Settings from the default location, defaults when there is no file.
pub fn load() -> Result<Config> {
    match default_path() {
        Some(path) if path.exists() => load_from_path(&path),
        _ => Ok(Config::default()),
    }
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "invalid settings, using defaults");
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let content = toml::to_string_pretty(config).context("failed to serialize settings")?;
    fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip() {
        let config = Config {
            asset_root: PathBuf::from("/srv/site/public"),
            theme: ThemeMode::Dark,
            initial_page: 3,
            fps: 30,
            theme_poll_seconds: 2.5,
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("nested").join(CONFIG_FILE);

        save_to_path(&config, &path).expect("failed to save config");
        let loaded = load_from_path(&path).expect("failed to load config");
        assert_eq!(loaded, config);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&path, "theme = \"light\"\n").expect("failed to write settings");

        let loaded = load_from_path(&path).expect("load should not error");
        assert_eq!(loaded.theme, ThemeMode::Light);
        assert_eq!(loaded.asset_root, PathBuf::from(DEFAULT_ASSET_ROOT));
        assert_eq!(loaded.initial_page, 1);
    }

    #[test]
    fn invalid_toml_falls_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&path, "not = valid = toml").expect("failed to write settings");

        let loaded = load_from_path(&path).expect("load should not error");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn missing_file_is_an_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        assert!(load_from_path(&temp_dir.path().join(CONFIG_FILE)).is_err());
    }

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.theme, ThemeMode::System);
        assert_eq!(config.fps, 60);
        assert_eq!(config.theme_poll_seconds, DEFAULT_THEME_POLL_SECONDS);
    }
}
