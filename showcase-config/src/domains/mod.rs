//! Domain-specific configuration modules

pub mod api;
pub mod http;
pub mod server;
pub mod utils;

use crate::error::{ConfigError, ConfigResult};
use crate::validation::Validatable;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Deployment environment flag
///
/// Selects the baseline defaults: local development ships with a usable
/// endpoint and key baked in, production starts empty and must be configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Production,
    #[default]
    Local,
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Ok(Environment::Production),
            "local" | "development" | "dev" => Ok(Environment::Local),
            other => Err(ConfigError::EnvError(format!(
                "Unknown environment '{}', expected 'production' or 'local'",
                other
            ))),
        }
    }
}

/// Main Showcase configuration combining all domains
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ShowcaseConfig {
    /// GraphQL API configuration
    #[serde(default)]
    pub api: api::ApiConfig,

    /// Companion server configuration
    #[serde(default)]
    pub server: server::ServerConfig,

    /// HTTP client configuration
    #[serde(default)]
    pub http: http::HttpConfig,
}

impl ShowcaseConfig {
    /// Baseline configuration for the given environment
    pub fn for_environment(env: Environment) -> Self {
        match env {
            Environment::Local => Self::default(),
            Environment::Production => Self {
                api: api::ApiConfig::production(),
                server: server::ServerConfig::production(),
                http: http::HttpConfig::default(),
            },
        }
    }

    /// Validate all domain configurations
    pub fn validate_all(&self) -> ConfigResult<()> {
        self.api.validate()?;
        self.server.validate()?;
        self.http.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_str() {
        assert_eq!("production".parse::<Environment>().unwrap(), Environment::Production);
        assert_eq!("PROD".parse::<Environment>().unwrap(), Environment::Production);
        assert_eq!("local".parse::<Environment>().unwrap(), Environment::Local);
        assert_eq!("development".parse::<Environment>().unwrap(), Environment::Local);
        assert!("staging".parse::<Environment>().is_err());
    }

    #[test]
    fn test_local_baseline_validates() {
        let config = ShowcaseConfig::for_environment(Environment::Local);
        assert!(config.validate_all().is_ok());
    }

    #[test]
    fn test_production_baseline_needs_overrides() {
        let config = ShowcaseConfig::for_environment(Environment::Production);
        assert!(config.validate_all().is_err());
    }
}
