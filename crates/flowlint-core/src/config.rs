//! Configuration file loading for flowlint.
//!
//! Reads `flowlint.json` and provides typed access to all settings.
//! Falls back to defaults when the config file is missing or incomplete.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// File name looked up in a directory by [`LintConfig::load`].
pub const CONFIG_FILE_NAME: &str = "flowlint.json";

/// Top-level flowlint configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LintConfig {
    /// Per-rule on/off switches keyed by rule id. Rules not listed are enabled.
    #[serde(default)]
    pub rules: BTreeMap<String, bool>,
    /// Rule ids whose issues are reported as INFO instead of their own severity.
    #[serde(default)]
    pub suppress: Vec<String>,
    /// Treat warnings as failures for the exit status.
    #[serde(default)]
    pub strict: bool,
}

/// Errors from loading an explicitly requested config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl LintConfig {
    /// Load `flowlint.json` from the given directory.
    /// Returns defaults if the file doesn't exist or can't be parsed.
    pub fn load(dir: &Path) -> Self {
        let config_path = dir.join(CONFIG_FILE_NAME);
        if !config_path.is_file() {
            return Self::default();
        }
        match Self::from_file(&config_path) {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::warn!("{e}, using defaults");
                Self::default()
            }
        }
    }

    /// Load a config file that the user asked for by path. Unlike
    /// [`LintConfig::load`], failures are reported to the caller.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn is_rule_enabled(&self, rule_id: &str) -> bool {
        self.rules.get(rule_id).copied().unwrap_or(true)
    }

    pub fn is_suppressed(&self, rule_id: &str) -> bool {
        self.suppress.iter().any(|r| r == rule_id)
    }

    /// Every rule id this config mentions, in `rules` then `suppress` order.
    pub fn referenced_rules(&self) -> impl Iterator<Item = &str> {
        self.rules
            .keys()
            .map(String::as_str)
            .chain(self.suppress.iter().map(String::as_str))
    }
}
