//! Configuration file support for persistent settings.
//!
//! This module provides support for loading configuration from a TOML file
//! located at `~/.config/fx-lib/config.toml` (or the platform-specific
//! equivalent). Configuration file values serve as defaults that can be
//! overridden by CLI arguments.
//!
//! # Layering
//!
//! The precedence order is: **CLI argument > config file > hardcoded default**.
//!
//! # Example config
//!
//! ```toml
//! json = false
//! verbose = true
//!
//! [size]
//! style = "binary"
//! threads = 4
//!
//! [chunk]
//! size = 100
//!
//! [pipe]
//! transforms = ["trim", "lower"]
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::config::SizeStyle;
use crate::transform::Transform;

/// Top-level configuration file structure.
///
/// All fields are `Option<T>` so we can detect which values are present in the
/// config file and apply layered configuration (CLI > config file > defaults).
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Emit JSON output by default
    pub json: Option<bool>,

    /// Print diagnostics by default
    pub verbose: Option<bool>,

    /// Size formatting options
    #[serde(default)]
    pub size: FileSizeConfig,

    /// Chunking options
    #[serde(default)]
    pub chunk: FileChunkConfig,

    /// Pipeline options
    #[serde(default)]
    pub pipe: FilePipeConfig,
}

/// Size formatting options from the configuration file.
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct FileSizeConfig {
    /// Rendering style (`"compact"`, `"decimal"`, `"binary"`)
    pub style: Option<SizeStyle>,

    /// Number of threads used when measuring paths
    pub threads: Option<usize>,
}

/// Chunking options from the configuration file.
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct FileChunkConfig {
    /// Default number of lines per chunk
    pub size: Option<usize>,
}

/// Pipeline options from the configuration file.
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct FilePipeConfig {
    /// Transforms applied when none are given on the command line
    pub transforms: Option<Vec<Transform>>,
}

/// Expand a leading `~` in a path to the user's home directory.
///
/// Paths that don't start with `~` are returned unchanged.
#[must_use]
pub fn expand_tilde(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    path.to_path_buf()
}

impl FileConfig {
    /// Returns the path where the configuration file is expected.
    ///
    /// The configuration file is located at `<config_dir>/fx-lib/config.toml`,
    /// where `<config_dir>` is the platform-specific configuration directory
    /// (e.g., `~/.config` on Linux, `%APPDATA%` on Windows).
    ///
    /// # Returns
    ///
    /// `Some(PathBuf)` with the config file path, or `None` if the config
    /// directory cannot be determined.
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("fx-lib").join("config.toml"))
    }

    /// Load configuration from the default config file location.
    ///
    /// If the config file doesn't exist, returns a default (empty) configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read or parsed.
    pub fn load() -> anyhow::Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from an explicit path.
    ///
    /// A leading `~` is expanded. A missing file yields the default
    /// configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file exists but cannot be read
    /// - The config file exists but contains invalid TOML or unexpected fields
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let path = expand_tilde(path);

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file at {}: {e}", path.display())
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file at {}: {e}", path.display())
        })?;

        Ok(config)
    }
}
