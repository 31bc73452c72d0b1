// SPDX-License-Identifier: MPL-2.0
//! Application configuration stored in `settings.toml`.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[viewer]` - Viewer toggles, close reset delay, swipe threshold, cache size
//! - `[page]` - Gallery grid layout
//! - `[source]` - Content store (manifest path or remote endpoint)
//!
//! Out-of-range numeric values are clamped when read through the section
//! accessors, never rejected, so a hand-edited file cannot prevent startup.
//!
//! # Examples
//!
//! ```no_run
//! use gallery_lens::config;
//!
//! let (config, _warning) = config::load();
//! let delay = config.viewer.close_reset_delay();
//! # let _ = delay;
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::source::SourceSettings;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Warning key surfaced when an existing config file cannot be parsed.
pub const LOAD_ERROR_KEY: &str = "notification-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewerConfig {
    #[serde(default = "default_true")]
    pub show_thumbnails: bool,

    #[serde(default = "default_true")]
    pub show_navigation: bool,

    #[serde(default = "default_true")]
    pub show_caption: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close_reset_delay_ms: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swipe_threshold_px: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_max_images: Option<usize>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            show_thumbnails: true,
            show_navigation: true,
            show_caption: true,
            close_reset_delay_ms: Some(DEFAULT_CLOSE_RESET_DELAY_MS),
            swipe_threshold_px: Some(DEFAULT_SWIPE_THRESHOLD_PX),
            cache_max_images: Some(DEFAULT_CACHE_MAX_IMAGES),
        }
    }
}

impl ViewerConfig {
    #[must_use]
    pub fn close_reset_delay(&self) -> Duration {
        let ms = self
            .close_reset_delay_ms
            .unwrap_or(DEFAULT_CLOSE_RESET_DELAY_MS)
            .clamp(MIN_CLOSE_RESET_DELAY_MS, MAX_CLOSE_RESET_DELAY_MS);
        Duration::from_millis(ms)
    }

    #[must_use]
    pub fn swipe_threshold(&self) -> f32 {
        let px = self
            .swipe_threshold_px
            .filter(|px| px.is_finite())
            .unwrap_or(DEFAULT_SWIPE_THRESHOLD_PX);
        px.clamp(MIN_SWIPE_THRESHOLD_PX, MAX_SWIPE_THRESHOLD_PX)
    }

    #[must_use]
    pub fn cache_max_images(&self) -> usize {
        self.cache_max_images
            .unwrap_or(DEFAULT_CACHE_MAX_IMAGES)
            .clamp(MIN_CACHE_MAX_IMAGES, MAX_CACHE_MAX_IMAGES)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PageConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<usize>,
}

impl PageConfig {
    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
            .unwrap_or(DEFAULT_PAGE_COLUMNS)
            .clamp(MIN_PAGE_COLUMNS, MAX_PAGE_COLUMNS)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SourceConfig {
    /// Path to a TOML manifest of gallery records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest: Option<PathBuf>,

    /// Base URL of a REST content store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_url: Option<String>,

    /// Public (anonymous) API key for the content store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,
}

impl SourceConfig {
    /// Converts to source settings; a relative manifest path is resolved
    /// against `config_dir`.
    #[must_use]
    pub fn to_settings(&self, config_dir: Option<&Path>) -> SourceSettings {
        let manifest = self.manifest.as_ref().map(|path| match config_dir {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path.clone(),
        });
        SourceSettings {
            manifest,
            remote_url: self.remote_url.clone(),
            api_key: self.api_key.clone(),
            table: Some(
                self.table
                    .clone()
                    .unwrap_or_else(|| DEFAULT_SOURCE_TABLE.to_string()),
            ),
        }
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub viewer: ViewerConfig,

    #[serde(default)]
    pub page: PageConfig,

    #[serde(default)]
    pub source: SourceConfig,
}

fn default_true() -> bool {
    true
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Load / Save
// =============================================================================

/// Returns the config file path, preferring `base_dir` when given.
#[must_use]
pub fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default location.
///
/// Returns the config and an optional warning key. A missing file yields
/// defaults silently; an unreadable one yields defaults plus a warning.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = config_path_with_override(base_dir) else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }
    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "failed to load config, using defaults");
            (Config::default(), Some(LOAD_ERROR_KEY.to_string()))
        }
    }
}

/// Loads configuration from a specific file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read, or a config error if it
/// is not valid TOML for [`Config`].
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Writes a default `settings.toml` when none exists yet, so users have a
/// file to edit. Returns the path when one was written.
///
/// # Errors
///
/// Propagates I/O and serialization failures.
pub fn write_defaults_if_missing(base_dir: Option<PathBuf>) -> Result<Option<PathBuf>> {
    let Some(path) = config_path_with_override(base_dir) else {
        return Ok(None);
    };
    if path.exists() {
        return Ok(None);
    }
    save_to_path(&Config::default(), &path)?;
    Ok(Some(path))
}

/// Saves configuration to a specific file, creating parent directories.
///
/// # Errors
///
/// Propagates I/O and serialization failures.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            viewer: ViewerConfig {
                show_thumbnails: false,
                close_reset_delay_ms: Some(500),
                ..ViewerConfig::default()
            },
            page: PageConfig { columns: Some(4) },
            source: SourceConfig {
                remote_url: Some("https://db.example.org".into()),
                ..SourceConfig::default()
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("nested").join(CONFIG_FILE);

        save_to_path(&config, &path).expect("failed to save config");
        let loaded = load_from_path(&path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config: Config = toml::from_str("[general]\nlanguage = \"fr\"").expect("parse");
        assert_eq!(config.general.language.as_deref(), Some("fr"));
        assert!(config.viewer.show_thumbnails);
        assert_eq!(config.viewer.close_reset_delay(), Duration::from_millis(300));
        assert_eq!(config.page.columns(), DEFAULT_PAGE_COLUMNS);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config: Config = toml::from_str(
            "[viewer]\nclose_reset_delay_ms = 99999\nswipe_threshold_px = 1.0\ncache_max_images = 0\n\
             [page]\ncolumns = 40",
        )
        .expect("parse");
        assert_eq!(
            config.viewer.close_reset_delay(),
            Duration::from_millis(MAX_CLOSE_RESET_DELAY_MS)
        );
        assert_eq!(config.viewer.swipe_threshold(), MIN_SWIPE_THRESHOLD_PX);
        assert_eq!(config.viewer.cache_max_images(), MIN_CACHE_MAX_IMAGES);
        assert_eq!(config.page.columns(), MAX_PAGE_COLUMNS);
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let config: Config = toml::from_str("[general]\ntheme_mode = \"DARK\"").expect("parse");
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
        assert!(toml::from_str::<Config>("[general]\ntheme_mode = \"sepia\"").is_err());
    }

    #[test]
    fn invalid_file_loads_defaults_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "not = [valid").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some(LOAD_ERROR_KEY));
    }

    #[test]
    fn missing_file_loads_defaults_silently() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn write_defaults_only_once() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let dir = Some(temp_dir.path().to_path_buf());

        let written = write_defaults_if_missing(dir.clone()).expect("write");
        assert!(written.is_some());
        assert!(write_defaults_if_missing(dir).expect("write").is_none());
    }

    #[test]
    fn relative_manifest_resolves_against_config_dir() {
        let source = SourceConfig {
            manifest: Some(PathBuf::from("gallery.toml")),
            ..SourceConfig::default()
        };
        let settings = source.to_settings(Some(Path::new("/etc/gallery")));
        assert_eq!(
            settings.manifest,
            Some(PathBuf::from("/etc/gallery/gallery.toml"))
        );
        assert_eq!(settings.table.as_deref(), Some(DEFAULT_SOURCE_TABLE));
    }
}
