//! Top-level GlobalRank configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{ItemBankConfig, ScoringConfig};
use crate::constants::PROJECT_CONFIG_FILE;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`GLOBALRANK_*`)
/// 2. Project config (`globalrank.toml` in the given root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RankConfig {
    pub scoring: ScoringConfig,
    pub item_bank: ItemBankConfig,
}

impl RankConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 2: project config
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
            debug!(path = %project_config_path.display(), "merged project config");
        }

        // Layer 1 (highest priority): environment variables
        Self::apply_env_overrides(&mut config);

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &RankConfig) -> Result<(), ConfigError> {
        if config.scoring.max_iterations == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "scoring.max_iterations".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if let Some(tolerance) = config.scoring.convergence_tolerance {
            if !tolerance.is_finite() || tolerance <= 0.0 {
                return Err(ConfigError::ValidationFailed {
                    field: "scoring.convergence_tolerance".to_string(),
                    message: "must be a positive finite number".to_string(),
                });
            }
        }
        if let Some(ref path) = config.item_bank.path {
            if path.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "item_bank.path".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut RankConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: RankConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` value.
    fn merge(base: &mut RankConfig, other: &RankConfig) {
        if other.scoring.max_iterations.is_some() {
            base.scoring.max_iterations = other.scoring.max_iterations;
        }
        if other.scoring.convergence_tolerance.is_some() {
            base.scoring.convergence_tolerance = other.scoring.convergence_tolerance;
        }
        if other.item_bank.path.is_some() {
            base.item_bank.path = other.item_bank.path.clone();
        }
        if other.item_bank.question_set_id.is_some() {
            base.item_bank.question_set_id = other.item_bank.question_set_id.clone();
        }
    }

    /// Apply `GLOBALRANK_*` environment variable overrides.
    /// Unparseable values are ignored.
    fn apply_env_overrides(config: &mut RankConfig) {
        if let Ok(val) = std::env::var("GLOBALRANK_MAX_ITERATIONS") {
            if let Ok(v) = val.parse::<u32>() {
                config.scoring.max_iterations = Some(v);
            }
        }
        if let Ok(val) = std::env::var("GLOBALRANK_CONVERGENCE_TOLERANCE") {
            if let Ok(v) = val.parse::<f64>() {
                config.scoring.convergence_tolerance = Some(v);
            }
        }
        if let Ok(val) = std::env::var("GLOBALRANK_ITEM_BANK_PATH") {
            config.item_bank.path = Some(val);
        }
    }
}
