// ABOUTME: Environment configuration management for runtime settings
// ABOUTME: Handles environment variables and deployment modes with sensible local defaults

//! Environment-based configuration management
//!
//! Everything has a working default: with no environment set, state lands in
//! the platform data directory and saves debounce at 500 ms. Tests and
//! throwaway runs point `MACROLOG_STORAGE_URL` at `memory:`.

use crate::constants::{defaults, env_config};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Environment type for logging defaults and diagnostics
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development (default)
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

/// Runtime configuration for the engine
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Storage backend URL (`file:<dir>` or `memory:`)
    pub storage_url: String,
    /// Well-known key the application snapshot is stored under
    pub state_key: String,
    /// Quiet window for the debounced save scheduler
    pub save_debounce: Duration,
    /// Deployment environment
    pub environment: Environment,
}

impl AppConfig {
    /// Build configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if `MACROLOG_SAVE_DEBOUNCE_MS` is set but not a
    /// valid number of milliseconds.
    pub fn from_env() -> Result<Self> {
        let storage_url = env::var(env_config::STORAGE_URL)
            .unwrap_or_else(|_| format!("file:{}", default_data_dir().display()));

        let state_key =
            env::var(env_config::STATE_KEY).unwrap_or_else(|_| defaults::STATE_KEY.to_owned());

        let save_debounce = match env::var(env_config::SAVE_DEBOUNCE_MS) {
            Ok(raw) => Duration::from_millis(raw.parse::<u64>().map_err(|error| {
                anyhow::anyhow!(
                    "{} must be a millisecond count, got {raw:?}: {error}",
                    env_config::SAVE_DEBOUNCE_MS
                )
            })?),
            Err(_) => Duration::from_millis(defaults::SAVE_DEBOUNCE_MS),
        };

        let environment = Environment::from_str_or_default(
            &env::var(env_config::ENVIRONMENT).unwrap_or_default(),
        );

        Ok(Self {
            storage_url,
            state_key,
            save_debounce,
            environment,
        })
    }

    /// Configuration for an ephemeral in-memory run
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            storage_url: "memory:".to_owned(),
            state_key: defaults::STATE_KEY.to_owned(),
            save_debounce: Duration::from_millis(defaults::SAVE_DEBOUNCE_MS),
            environment: Environment::Testing,
        }
    }
}

/// Platform data directory for the default file backend
fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("macrolog")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_parsing() {
        assert_eq!(
            Environment::from_str_or_default("prod"),
            Environment::Production
        );
        assert_eq!(
            Environment::from_str_or_default("unknown"),
            Environment::Development
        );
        assert!(Environment::Production.is_production());
    }

    #[test]
    fn test_in_memory_config() {
        let config = AppConfig::in_memory();
        assert_eq!(config.storage_url, "memory:");
        assert_eq!(config.state_key, "macrolog.state");
    }
}
