//! Prediction engine configuration.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants;
use crate::errors::ConfigError;

/// Configuration for the attack-path prediction engine.
///
/// Every field is optional; `effective_*()` accessors fall back to the
/// defaults in [`crate::constants`]. Loadable from TOML:
///
/// ```toml
/// max_paths = 20
/// max_depth = 6
/// high_value_threshold = 0.8
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EngineConfig {
    /// Maximum ranked paths returned per query. Default: 10.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_paths: Option<usize>,
    /// Maximum path length in nodes. Default: 10.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,
    /// Node value above which a node is a high-value target. Default: 0.7.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high_value_threshold: Option<f64>,
    /// Maximum recommendation entries per report. Default: 5.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_recommendations: Option<usize>,
}

impl EngineConfig {
    /// Returns the effective max paths, defaulting to 10.
    pub fn effective_max_paths(&self) -> usize {
        self.max_paths.unwrap_or(constants::DEFAULT_MAX_PATHS)
    }

    /// Returns the effective max depth, defaulting to 10.
    pub fn effective_max_depth(&self) -> usize {
        self.max_depth.unwrap_or(constants::DEFAULT_MAX_DEPTH)
    }

    /// Returns the effective high-value threshold, defaulting to 0.7.
    pub fn effective_high_value_threshold(&self) -> f64 {
        self.high_value_threshold
            .unwrap_or(constants::HIGH_VALUE_THRESHOLD)
    }

    /// Returns the effective recommendation cap, defaulting to 5.
    pub fn effective_max_recommendations(&self) -> usize {
        self.max_recommendations
            .unwrap_or(constants::DEFAULT_MAX_RECOMMENDATIONS)
    }

    /// Parse a configuration from a TOML string and validate it.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(raw)?;
        config.validate()?;
        debug!(?config, "engine config loaded");
        Ok(config)
    }

    /// Validate field ranges.
    ///
    /// Bounds must be at least 1 and the high-value threshold must lie
    /// in [0, 1]. Node/edge attribute values are a caller contract and
    /// are never validated by the engine.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(max_paths) = self.max_paths {
            if max_paths == 0 {
                return Err(ConfigError::InvalidValue {
                    field: "max_paths".into(),
                    message: "must be at least 1".into(),
                });
            }
        }
        if let Some(max_depth) = self.max_depth {
            if max_depth == 0 {
                return Err(ConfigError::InvalidValue {
                    field: "max_depth".into(),
                    message: "must be at least 1".into(),
                });
            }
        }
        if let Some(threshold) = self.high_value_threshold {
            if !(0.0..=1.0).contains(&threshold) {
                return Err(ConfigError::InvalidValue {
                    field: "high_value_threshold".into(),
                    message: format!("must be in [0, 1], got {threshold}"),
                });
            }
        }
        Ok(())
    }
}
