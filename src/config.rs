//! Runtime configuration.
//!
//! Loaded from a TOML file. Every key is optional; anything missing keeps its
//! default.
//!
//! ```toml
//! progress_interval_ms = 1000
//! default_columns = 80
//! default_rows = 25
//! fill_glyph = "█"
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use log::debug;
use serde::Deserialize;

use crate::progress::DEFAULT_FILL_GLYPH;
use crate::term::Geometry;

/// Environment variable naming an alternative config file.
pub const CONFIG_ENV: &str = "PURGE_CONFIG";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Minimum milliseconds between two progress renders
    pub progress_interval_ms: u64,
    /// Geometry assumed when no terminal can be queried
    pub default_columns: u16,
    pub default_rows: u16,
    /// Character used for filled bar cells
    pub fill_glyph: char,
}

impl Default for Config {
    fn default() -> Self {
        let geometry = Geometry::default();
        Self {
            progress_interval_ms: 1000,
            default_columns: geometry.columns,
            default_rows: geometry.rows,
            fill_glyph: DEFAULT_FILL_GLYPH,
        }
    }
}

impl Config {
    pub fn progress_interval(&self) -> Duration {
        Duration::from_millis(self.progress_interval_ms)
    }

    pub fn fallback_geometry(&self) -> Geometry {
        Geometry::new(self.default_columns, self.default_rows)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Invalid configuration")
    }

    /// Read and parse a config file that must exist.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("In config file: {}", path.display()))
    }

    /// Resolve the configuration.
    ///
    /// An explicit path, then `$PURGE_CONFIG`, must point at a readable file.
    /// The per-user default location is optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Self::from_file(Path::new(&path));
        }
        match default_path() {
            Some(path) if path.is_file() => Self::from_file(&path),
            _ => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }
}

/// `<config dir>/purge/config.toml`, e.g. `~/.config/purge/config.toml`.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("purge").join("config.toml"))
}
