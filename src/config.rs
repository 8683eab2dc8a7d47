//! Application configuration.
//!
//! Loaded from `$XDG_CONFIG_HOME/hyprcc/config.json`.  Every field is
//! optional; a missing file or a `{}` file means compiled-in defaults.
//!
//! # Example
//!
//! ```json
//! {
//!   "schema_path": "/usr/share/hyprcc/options_v0.37.0.json",
//!   "save_path": "/home/me/.config/hypr/hyprcc.conf",
//!   "window": {
//!     "width": 1000,
//!     "height": 760,
//!     "prefer_dark": true,
//!     "accent_color": "#6CC6F8"
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name of the schema looked up in the config directory when
/// `schema_path` is not set.
pub const DEFAULT_SCHEMA_FILE: &str = "options.json";

/// File name of the overrides file written on save when `save_path` is
/// not set.
pub const DEFAULT_SAVE_FILE: &str = "overrides.conf";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Option schema to load.  Default: `<config dir>/options.json`.
    #[serde(default)]
    pub schema_path: Option<PathBuf>,

    /// Where "Save" writes the overrides file.  Default:
    /// `<config dir>/overrides.conf`.
    #[serde(default)]
    pub save_path: Option<PathBuf>,

    /// Window size and look.
    #[serde(default)]
    pub window: WindowConfig,
}

/// Window size and look.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Initial width in pixels.
    pub width: i32,
    /// Initial height in pixels.
    pub height: i32,
    /// Ask GTK for the dark variant of the theme.
    pub prefer_dark: bool,
    /// Colour of the Save button and other highlights.
    pub accent_color: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 900,
            height: 700,
            prefer_dark: true,
            accent_color: "#6CC6F8".into(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError(format!("failed to read {}: {}", path.display(), e)))?;
        let config: Self = serde_json::from_str(&contents)
            .map_err(|e| ConfigError(format!("failed to parse {}: {}", path.display(), e)))?;
        Ok(config)
    }

    /// The schema path, falling back to `config_dir/options.json`.
    pub fn schema_path_in(&self, config_dir: &Path) -> PathBuf {
        self.schema_path
            .clone()
            .unwrap_or_else(|| config_dir.join(DEFAULT_SCHEMA_FILE))
    }

    /// The save target, falling back to `config_dir/overrides.conf`.
    pub fn save_path_in(&self, config_dir: &Path) -> PathBuf {
        self.save_path
            .clone()
            .unwrap_or_else(|| config_dir.join(DEFAULT_SAVE_FILE))
    }
}

/// Error from loading or parsing a configuration file.
#[derive(Debug, thiserror::Error)]
#[error("config error: {0}")]
pub struct ConfigError(String);
