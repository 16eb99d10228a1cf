//! Configuration management
//!
//! Settings are layered: built-in defaults, then an optional TOML file,
//! then command-line flags applied by the binary.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_TOP_N};
use crate::error::AnalyzerError;

/// Analyzer settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalyzerConfig {
    /// Number of ranked paths and clients to report
    pub top_n: usize,
    /// Emit JSON instead of the text report
    pub json: bool,
    /// Append failed lines verbatim to the report
    pub show_failed: bool,
    /// Rank paths and clients concurrently
    pub parallel: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            json: false,
            show_failed: false,
            parallel: false,
        }
    }
}

impl AnalyzerConfig {
    /// Load configuration from a TOML file. Missing keys take their defaults.
    pub fn load_from_file(path: &Path) -> Result<Self, AnalyzerError> {
        if !path.is_file() {
            return Err(AnalyzerError::NotFound(path.to_path_buf()));
        }
        log::debug!("Loading config file {}", path.display());

        let content = std::fs::read_to_string(path).map_err(|source| AnalyzerError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| AnalyzerError::Config {
            path: path.to_path_buf(),
            message: e.message().to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// `<config_dir>/logtally/config.toml`, if the platform has a config dir
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load from `explicit` if given, else from the default location if that file
    /// exists, else fall back to defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, AnalyzerError> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }

        match Self::default_config_path() {
            Some(path) if path.is_file() => Self::load_from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), AnalyzerError> {
        if self.top_n == 0 {
            return Err(AnalyzerError::InvalidArgument(
                "top_n must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
