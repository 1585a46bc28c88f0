//! Configuration for sponsorship screening.
//! TOML-based; every section falls back to compiled defaults.

pub mod defaults;
pub mod notice_config;
pub mod observability_config;
pub mod screening_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use notice_config::NoticeConfig;
pub use observability_config::ObservabilityConfig;
pub use screening_config::ScreeningConfig;

use crate::errors::{SponsorError, SponsorResult};

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`SPONSOR_*`)
/// 2. Config file / TOML string
/// 3. Compiled defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SponsorConfig {
    pub screening: ScreeningConfig,
    pub notice: NoticeConfig,
    pub observability: ObservabilityConfig,
}

impl SponsorConfig {
    /// Parse a TOML string. Missing sections and keys keep their defaults.
    pub fn from_toml(toml_str: &str) -> SponsorResult<Self> {
        let config: Self = toml::from_str(toml_str).map_err(|e| SponsorError::ConfigError {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load a TOML file, then apply `SPONSOR_*` environment overrides.
    pub fn load(path: &Path) -> SponsorResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SponsorError::ConfigError {
            reason: format!("{}: {e}", path.display()),
        })?;
        let mut config = Self::from_toml(&content)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Apply `SPONSOR_*` environment variables on top of the current values.
    /// Unparseable values are ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("SPONSOR_FILTER_CITIZENSHIP") {
            if let Ok(v) = val.parse::<bool>() {
                self.screening.filter_citizenship = v;
            }
        }
        if let Ok(val) = std::env::var("SPONSOR_CONTEXT_WINDOW_CHARS") {
            if let Ok(v) = val.parse::<usize>() {
                self.screening.context_window_chars = v;
            }
        }
        if let Ok(val) = std::env::var("SPONSOR_LOG_LEVEL") {
            self.observability.log_level = val;
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> SponsorResult<()> {
        if self.notice.reason_display_limit <= crate::constants::ELLIPSIS.len() {
            return Err(SponsorError::ConfigError {
                reason: format!(
                    "notice.reason_display_limit must be greater than {}",
                    crate::constants::ELLIPSIS.len()
                ),
            });
        }
        Ok(())
    }
}
