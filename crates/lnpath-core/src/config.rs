//! Configuration loading and management.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::CoreError;

/// Full configuration for lnpath.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LnpathConfig {
    /// Route construction settings.
    #[serde(default)]
    pub routing: RoutingConfig,

    /// Probe loop settings.
    #[serde(default)]
    pub probe: ProbeConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Timelock delta required by the final hop, in blocks.
    #[serde(default = "default_final_cltv_delta")]
    pub final_cltv_delta: u32,
    /// Largest total timelock delta a route may accumulate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cltv_limit: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeConfig {
    /// Maximum number of routes probed before giving up.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (text, json).
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_final_cltv_delta() -> u32 {
    40
}
fn default_max_attempts() -> usize {
    10
}
fn default_log_level() -> String {
    "info".into()
}
fn default_log_format() -> String {
    "text".into()
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            final_cltv_delta: default_final_cltv_delta(),
            cltv_limit: None,
        }
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LnpathConfig {
    /// Load config from a TOML file, falling back to defaults for missing fields.
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            let config: LnpathConfig = toml::from_str(&contents)?;
            tracing::debug!(path = %path.display(), "loaded config");
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save the current config to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), CoreError> {
        let contents = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, contents)?;
        Ok(())
    }
}
