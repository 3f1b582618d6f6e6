//! Configuration file support for teamassess.
//!
//! Loads settings from `~/.teamassess/config.toml` (or `TEAMASSESS_CONFIG`)
//! with the following precedence:
//! CLI arguments > Environment variables > Config file > defaults
//!
//! ## Configuration File Format
//!
//! ```toml
//! # ~/.teamassess/config.toml
//!
//! [store]
//! # Directory holding assessments.json and draft.json
//! data_dir = "/path/to/data"
//!
//! # Load the sample assessments on first use
//! seed_samples = true
//!
//! [recommend]
//! # Minimum |delta| counted as a real change
//! significance_threshold = 0.2
//!
//! # Priority tier cut-offs
//! high_priority_below = 3.0
//! medium_priority_below = 4.0
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use teamassess_intelligence::RecommendationPolicy;
use teamassess_state::{config_file, data_dir_from_env, default_data_dir, env_seed_samples};
use thiserror::Error;

/// Problems reading or applying the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid [recommend] setting: {0}")]
    InvalidPolicy(String),
}

/// Top-level configuration structure.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub recommend: RecommendConfig,
}

/// Where assessments live and whether to seed them.
#[derive(Debug, Default, Deserialize)]
pub struct StoreConfig {
    /// Store directory.
    pub data_dir: Option<PathBuf>,
    /// Load the sample assessments into a fresh store.
    pub seed_samples: Option<bool>,
}

/// Overrides for the recommendation thresholds.
#[derive(Debug, Default, Deserialize)]
pub struct RecommendConfig {
    pub significance_threshold: Option<f64>,
    pub high_priority_below: Option<f64>,
    pub medium_priority_below: Option<f64>,
}

impl RecommendConfig {
    /// Overlay the configured values on `base`.
    pub fn apply(&self, base: RecommendationPolicy) -> Result<RecommendationPolicy, ConfigError> {
        let mut policy = base;
        if let Some(threshold) = self.significance_threshold {
            if !threshold.is_finite() || threshold < 0.0 {
                return Err(ConfigError::InvalidPolicy(format!(
                    "significance_threshold must be a non-negative number, got {threshold}"
                )));
            }
            policy.significance_threshold = threshold;
        }
        if let Some(high) = self.high_priority_below {
            policy.high_priority_below = high;
        }
        if let Some(medium) = self.medium_priority_below {
            policy.medium_priority_below = medium;
        }
        if policy.high_priority_below > policy.medium_priority_below {
            return Err(ConfigError::InvalidPolicy(format!(
                "high_priority_below ({}) exceeds medium_priority_below ({})",
                policy.high_priority_below, policy.medium_priority_below
            )));
        }
        Ok(policy)
    }
}

/// Loads the configuration file if it exists.
///
/// Returns `Ok(None)` if the file doesn't exist.
/// Returns `Err` if the file exists but fails to parse.
pub fn load_config() -> Result<Option<Config>, ConfigError> {
    match config_file() {
        Some(path) => load_config_from(&path),
        None => Ok(None),
    }
}

/// Loads a configuration file from an explicit path.
pub fn load_config_from(path: &Path) -> Result<Option<Config>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(
        target: "teamassess::config",
        path = %path.display(),
        "Loaded configuration file"
    );
    Ok(Some(config))
}

/// Fully resolved runtime settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub data_dir: PathBuf,
    pub seed_samples: bool,
    pub policy: RecommendationPolicy,
}

/// Merge CLI overrides, environment, and config file into [`Settings`].
pub fn resolve_settings(
    cli_data_dir: Option<PathBuf>,
    cli_no_seed: bool,
    config: Option<&Config>,
) -> anyhow::Result<Settings> {
    let store = config.map(|c| &c.store);

    let data_dir = match cli_data_dir
        .or_else(data_dir_from_env)
        .or_else(|| store.and_then(|s| s.data_dir.clone()))
    {
        Some(dir) => dir,
        None => default_data_dir()?,
    };

    let seed_samples = if cli_no_seed {
        false
    } else {
        env_seed_samples()
            .or_else(|| store.and_then(|s| s.seed_samples))
            .unwrap_or(true)
    };

    let policy = match config {
        Some(c) => c.recommend.apply(RecommendationPolicy::default())?,
        None => RecommendationPolicy::default(),
    };

    Ok(Settings {
        data_dir,
        seed_samples,
        policy,
    })
}
