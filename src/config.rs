//! Configuration loading for ilrcheck.
//!
//! Configuration follows a precedence chain:
//! 1. Environment variables (highest priority)
//! 2. Project config (`.ilrcheck/config.toml`)
//! 3. User config (`~/.ilrcheck/config.toml`)
//! 4. Defaults (lowest priority)
//!
//! All configuration is optional. Validation runs with the full built-in
//! rule set and no reference data when no config exists. Loading is
//! fail-open: a broken config file logs a warning and falls back to
//! defaults rather than blocking a validation run.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{IlrError, Result};

/// Main configuration struct for ilrcheck.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Rule enable/disable overrides.
    pub rules: RulesConfig,
    /// Funding-cap reference data.
    pub caps: CapsConfig,
    /// Provider identity and organisation reference data.
    pub provider: ProviderConfig,
}

/// Rule enable/disable overrides, keyed by stable rule name.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RulesConfig {
    /// Per-rule enable/disable overrides. Rules default to enabled.
    pub overrides: HashMap<String, bool>,
}

impl RulesConfig {
    /// Whether a rule is enabled under these overrides.
    pub fn is_enabled(&self, rule_name: &str) -> bool {
        self.overrides.get(rule_name).copied().unwrap_or(true)
    }
}

/// Funding-cap reference data configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CapsConfig {
    /// Path to a TOML file of `[[cap]]` entries.
    pub file: Option<PathBuf>,
}

/// Provider identity and organisation reference data configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProviderConfig {
    /// The provider's UKPRN, used by provider-scoped rules.
    pub ukprn: Option<u64>,
    /// Path to a TOML file of `[[provider]]` organisation entries.
    pub directory: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the current working directory, fail-open.
    pub fn load() -> Self {
        match env::current_dir() {
            Ok(cwd) => Self::load_from_cwd(&cwd),
            Err(err) => {
                tracing::warn!("cannot resolve working directory: {err} (using defaults)");
                let mut config = Self::default();
                config.apply_env_overrides();
                config
            }
        }
    }

    /// Load configuration rooted at the given working directory, fail-open.
    ///
    /// User config is applied first, then project config, then environment
    /// overrides; a file that fails to parse is skipped with a warning.
    pub fn load_from_cwd(cwd: &Path) -> Self {
        let mut config = Self::default();

        if let Some(home) = ilrcheck_home() {
            config.merge_file(&home.join("config.toml"));
        }
        config.merge_file(&cwd.join(".ilrcheck").join("config.toml"));
        config.apply_env_overrides();
        config
    }

    /// Parse a config file, merging it over `self`. Missing files are
    /// silently fine; unreadable or invalid files warn and are skipped.
    fn merge_file(&mut self, path: &Path) {
        if !path.exists() {
            return;
        }
        match Self::load_from_file(path) {
            Ok(loaded) => self.merge(loaded),
            Err(err) => {
                tracing::warn!("skipping config {}: {err}", path.display());
            }
        }
    }

    /// Parse one config file.
    pub fn load_from_file(path: &Path) -> Result<Config> {
        let text = fs::read_to_string(path).map_err(|e| IlrError::storage(path, e))?;
        toml::from_str(&text).map_err(|e| IlrError::config(e.to_string()))
    }

    /// Merge a higher-precedence config over this one. Scalar fields take
    /// the later value when set; rule overrides accumulate with later
    /// entries winning.
    fn merge(&mut self, other: Config) {
        self.rules.overrides.extend(other.rules.overrides);
        if other.caps.file.is_some() {
            self.caps.file = other.caps.file;
        }
        if other.provider.ukprn.is_some() {
            self.provider.ukprn = other.provider.ukprn;
        }
        if other.provider.directory.is_some() {
            self.provider.directory = other.provider.directory;
        }
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = env::var("ILRCHECK_CAPS_FILE") {
            if !val.is_empty() {
                self.caps.file = Some(PathBuf::from(val));
            }
        }
        if let Ok(val) = env::var("ILRCHECK_ORG_FILE") {
            if !val.is_empty() {
                self.provider.directory = Some(PathBuf::from(val));
            }
        }
        if let Ok(val) = env::var("ILRCHECK_UKPRN") {
            match val.parse::<u64>() {
                Ok(ukprn) => self.provider.ukprn = Some(ukprn),
                Err(_) => {
                    tracing::warn!("ILRCHECK_UKPRN is not a number, ignoring: {val}");
                }
            }
        }
    }
}

/// The ilrcheck home directory: `$ILRCHECK_HOME`, or `~/.ilrcheck`.
pub fn ilrcheck_home() -> Option<PathBuf> {
    if let Ok(home) = env::var("ILRCHECK_HOME") {
        if !home.is_empty() {
            return Some(PathBuf::from(home));
        }
        tracing::warn!("ILRCHECK_HOME is empty, using default");
    }
    dirs::home_dir().map(|h| h.join(".ilrcheck"))
}
