//! Configuration system for yamlutils.
//!
//! Settings come from `~/.config/yamlutils/config.toml` when it exists and
//! from defaults otherwise. Command line flags override both.
//!
//! # Example
//!
//! ```
//! use yamlutils::config::Config;
//!
//! let config = Config::default();
//! assert!(!config.include_container);
//! assert_eq!(config.buffer_size, 65536);
//!
//! let custom = Config {
//!     numeric_sort: true,
//!     ..Config::default()
//! };
//! assert!(custom.numeric_sort);
//! ```

use crate::fileutils::DEFAULT_BUFFER_SIZE;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Configuration for the yamlutils command line tool.
///
/// # Fields
///
/// * `include_container` - Wrap `get` output in its last key (default: false)
/// * `buffer_size` - Longest line `replace` accepts, in bytes (default: 65536)
/// * `numeric_sort` - Order listings numerically by basename (default: false)
/// * `create_backup` - Create .bak files before `replace` overwrites (default: false)
/// * `log_level` - Log filter used when `RUST_LOG` and `-v` are absent (default: "warn")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub include_container: bool,

    #[serde(default = "default_buffer_size")]
    pub buffer_size: usize,

    #[serde(default)]
    pub numeric_sort: bool,

    /// Create .bak files before replacing
    #[serde(default)]
    pub create_backup: bool,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_buffer_size() -> usize {
    DEFAULT_BUFFER_SIZE
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            include_container: false,
            buffer_size: default_buffer_size(),
            numeric_sort: false,
            create_backup: false,
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/yamlutils/config.toml` on all platforms.
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("yamlutils");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the defaults when there is no file, and an error when the
    /// file exists but cannot be read or parsed.
    pub fn try_load() -> anyhow::Result<Self> {
        match Self::config_path() {
            Some(path) => Self::try_load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Loads configuration from `path`, falling back to defaults.
    pub fn load_from(path: &Path) -> Self {
        Self::try_load_from(path).unwrap_or_else(|err| {
            warn!(path = %path.display(), error = %format!("{:#}", err), "ignoring config file");
            Self::default()
        })
    }

    /// Loads configuration from `path`. A missing file yields the defaults.
    pub fn try_load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("could not read {}", path.display()))?;
        toml::from_str(&contents).with_context(|| format!("invalid config file {}", path.display()))
    }

    /// Saves configuration to the default config file.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        self.save_to(&config_path)
    }

    /// Saves configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;

        Ok(())
    }
}
