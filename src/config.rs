//! Environment-driven runtime configuration.
//!
//! Settings are read from `TASKBOARD_*` environment variables layered over
//! built-in defaults. Every key has a usable default so the server starts
//! with no environment at all.

use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable prefix for every setting.
const ENV_PREFIX: &str = "TASKBOARD_";

/// Runtime configuration for the service and its managed collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Region selector for the managed services.
    pub region: String,
    /// Record-store table identifier.
    pub tasks_table: String,
    /// Identity-provider pool identifier. Empty when unset.
    pub user_pool_id: String,
    /// Outbound email sender address. Empty disables notification sends.
    pub sender_email: String,
    /// Allowed cross-origin caller URL.
    pub frontend_url: String,
    /// HTTP listening port.
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            region: "eu-west-1".to_owned(),
            tasks_table: "Tasks".to_owned(),
            user_pool_id: String::new(),
            sender_email: String::new(),
            frontend_url: "*".to_owned(),
            port: 3000,
        }
    }
}

impl AppConfig {
    /// Loads configuration from the environment over the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when an environment value fails to parse
    /// (for example a non-numeric `TASKBOARD_PORT`).
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Builds the figment provider chain; exposed so tests can layer
    /// additional providers.
    #[must_use]
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Self::default())).merge(Env::prefixed(ENV_PREFIX))
    }
}

/// Errors returned while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A configuration source failed to parse or extract.
    #[error(transparent)]
    Source(#[from] figment::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn defaults_apply_without_environment() {
        figment::Jail::expect_with(|_jail| {
            let config = AppConfig::load().expect("defaults should load");
            assert_eq!(config.region, "eu-west-1");
            assert_eq!(config.tasks_table, "Tasks");
            assert_eq!(config.frontend_url, "*");
            assert_eq!(config.port, 3000);
            assert!(config.sender_email.is_empty());
            Ok(())
        });
    }

    #[rstest]
    fn environment_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("TASKBOARD_PORT", "8080");
            jail.set_env("TASKBOARD_SENDER_EMAIL", "noreply@example.com");
            jail.set_env("TASKBOARD_FRONTEND_URL", "https://tasks.example.com");

            let config = AppConfig::load().expect("environment should load");
            assert_eq!(config.port, 8080);
            assert_eq!(config.sender_email, "noreply@example.com");
            assert_eq!(config.frontend_url, "https://tasks.example.com");
            Ok(())
        });
    }
}
