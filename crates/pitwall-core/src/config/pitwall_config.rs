//! Top-level Pitwall configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{NarrowingConfig, ObservabilityConfig, SearchConfig};
use crate::errors::ConfigError;

/// Project config file name, looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "pitwall.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Explicit overrides (applied via `apply_overrides`)
/// 2. Environment variables (`PITWALL_*`)
/// 3. Project config (`pitwall.toml` in project root)
/// 4. User config (`~/.pitwall/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct PitwallConfig {
    pub search: SearchConfig,
    pub narrowing: NarrowingConfig,
    pub observability: ObservabilityConfig,
}

/// Overrides a shell can apply on top of every file and env layer.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub search_step_count: Option<usize>,
    pub search_top_n: Option<usize>,
    pub seed: Option<u64>,
    pub log_level: Option<String>,
}

impl PitwallConfig {
    /// Load configuration with full layered resolution.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        Self::load_with_user_config(Self::user_config_path().as_deref(), root, overrides)
    }

    /// Same as [`PitwallConfig::load`] with an explicit user config location.
    pub fn load_with_user_config(
        user_config: Option<&Path>,
        root: &Path,
        overrides: Option<&ConfigOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(path) = user_config {
            if path.exists() {
                Self::merge_toml_file(&mut config, path)?;
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config, |key| std::env::var(key).ok());

        // Layer 1 (highest priority): explicit overrides
        if let Some(overrides) = overrides {
            config.apply_overrides(overrides);
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.search.validate()?;
        self.narrowing.validate()
    }

    /// Apply explicit overrides (highest priority).
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(v) = overrides.search_step_count {
            self.search.step_count = Some(v);
        }
        if let Some(v) = overrides.search_top_n {
            self.search.top_n = Some(v);
        }
        if let Some(v) = overrides.seed {
            self.narrowing.seed = Some(v);
        }
        if let Some(ref v) = overrides.log_level {
            self.observability.log_level = Some(v.clone());
        }
    }

    /// Apply `PITWALL_*` overrides read through `lookup`.
    /// Unparseable values are ignored.
    pub fn apply_env_overrides<F>(config: &mut PitwallConfig, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("PITWALL_SEARCH_STEP_COUNT").and_then(|s| s.parse().ok()) {
            config.search.step_count = Some(v);
        }
        if let Some(v) = lookup("PITWALL_SEARCH_TOP_N").and_then(|s| s.parse().ok()) {
            config.search.top_n = Some(v);
        }
        if let Some(v) = lookup("PITWALL_SEARCH_PARALLEL").and_then(|s| s.parse().ok()) {
            config.search.parallel = Some(v);
        }
        if let Some(v) = lookup("PITWALL_NARROWING_SEED").and_then(|s| s.parse().ok()) {
            config.narrowing.seed = Some(v);
        }
        if let Some(v) = lookup("PITWALL_NARROWING_PERTURBATION_RANGE").and_then(|s| s.parse().ok())
        {
            config.narrowing.perturbation_range = Some(v);
        }
        if let Some(v) = lookup("PITWALL_LOG_LEVEL") {
            config.observability.log_level = Some(v);
        }
        if let Some(v) = lookup("PITWALL_LOG_JSON").and_then(|s| s.parse().ok()) {
            config.observability.json = Some(v);
        }
    }

    /// Returns the user config path: `~/.pitwall/config.toml`.
    pub fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".pitwall").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are ignored.
    fn merge_toml_file(config: &mut PitwallConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => ConfigError::ReadError {
                path: path.display().to_string(),
                message: e.to_string(),
            },
        })?;
        let file_config: PitwallConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        config.merge_from(&file_config);
        Ok(())
    }

    /// Values set in `other` override values in `self`.
    pub fn merge_from(&mut self, other: &PitwallConfig) {
        self.search.merge_from(&other.search);
        self.narrowing.merge_from(&other.narrowing);
        self.observability.merge_from(&other.observability);
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
