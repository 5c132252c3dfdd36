//! Configuration system for yq-continuations.
//!
//! This module provides the configuration structure with sensible defaults
//! and support for deserialization via serde. Configuration is loaded from a
//! TOML file and merged with command-line arguments.
//!
//! # Example
//!
//! ```
//! use yq_continuations::config::Config;
//!
//! // Use default configuration
//! let config = Config::default();
//! assert_eq!(config.engine, "yq");
//! assert_eq!(config.null_token, "null");
//!
//! // Create custom configuration
//! let custom = Config {
//!     engine: "/usr/local/bin/yq".to_string(),
//!     ..Config::default()
//! };
//! assert!(custom.discover_keys);
//! ```

use crate::driver::RunOptions;
use crate::engine::yq::DEFAULT_PROGRAM;
use crate::tester::NULL_TOKEN;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Configuration for yq-continuations.
///
/// # Fields
///
/// * `engine` - Query engine binary to run (default: "yq")
/// * `null_token` - Output treated as "no value" (default: "null")
/// * `discover_keys` - Query the document for keys under the base expression (default: true)
/// * `show_base_output` - Print the base expression's output (default: true)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Query engine binary, looked up on `PATH` unless absolute
    #[serde(default = "default_engine")]
    pub engine: String,

    /// Output treated as "no value"
    #[serde(default = "default_null_token")]
    pub null_token: String,

    /// Add key-derived candidates
    #[serde(default = "default_true")]
    pub discover_keys: bool,

    /// Print the base expression's output before the continuations
    #[serde(default = "default_true")]
    pub show_base_output: bool,
}

/// Returns the default engine binary.
fn default_engine() -> String {
    DEFAULT_PROGRAM.to_string()
}

/// Returns the default "no value" token.
fn default_null_token() -> String {
    NULL_TOKEN.to_string()
}

/// Returns `true`, the default for the feature toggles.
fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            engine: default_engine(),
            null_token: default_null_token(),
            discover_keys: true,
            show_base_output: true,
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/yq-continuations/config.toml` on all platforms.
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("yq-continuations");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or can't be read.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Loads configuration from `path`, falling back to defaults.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
                warn!(path = %path.display(), error = %e, "invalid config, using defaults");
                Self::default()
            }),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "unreadable config, using defaults");
                Self::default()
            }
        }
    }

    /// Settings for a run derived from this configuration.
    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            null_token: self.null_token.clone(),
            discover_keys: self.discover_keys,
            show_base_output: self.show_base_output,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str("engine = \"yq4\"").unwrap();
        assert_eq!(config.engine, "yq4");
        assert_eq!(config.null_token, "null");
        assert!(config.discover_keys);
        assert!(config.show_base_output);
    }

    #[test]
    fn test_run_options_follow_config() {
        let config = Config {
            discover_keys: false,
            null_token: "~".to_string(),
            ..Default::default()
        };
        let options = config.run_options();
        assert!(!options.discover_keys);
        assert_eq!(options.null_token, "~");
        assert!(options.show_base_output);
    }
}
