//! Configuration loading and environment variable handling

use crate::domains::{Environment, ShowcaseConfig};
use crate::error::{ConfigError, ConfigResult};
use std::path::Path;

/// Configuration loader with environment variable support
pub struct ConfigLoader {
    /// Environment variable prefix
    prefix: String,
}

impl ConfigLoader {
    /// Create a new config loader with default prefix
    pub fn new() -> Self {
        Self {
            prefix: "SHOWCASE".to_string(),
        }
    }

    /// Create a new config loader with custom prefix
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Load configuration from a YAML file with environment overrides
    pub fn from_file(&self, path: impl AsRef<Path>) -> ConfigResult<ShowcaseConfig> {
        let content = std::fs::read_to_string(path)?;
        let mut config: ShowcaseConfig = serde_yaml::from_str(&content)?;

        // Apply environment variable overrides
        self.apply_env_overrides(&mut config)?;

        // Validate all domains
        config.validate_all()?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    ///
    /// Starts from the baseline selected by `{PREFIX}_ENV` (local when
    /// unset), then applies the per-field overrides.
    pub fn from_env(&self) -> ConfigResult<ShowcaseConfig> {
        let environment = self.environment()?;
        let mut config = ShowcaseConfig::for_environment(environment);
        self.apply_env_overrides(&mut config)?;
        config.validate_all()?;
        Ok(config)
    }

    /// Load configuration with fallback chain
    pub fn load(&self, config_path: Option<impl AsRef<Path>>) -> ConfigResult<ShowcaseConfig> {
        match config_path {
            Some(path) => self.from_file(path),
            None => self.from_env(),
        }
    }

    /// Read the deployment environment flag
    pub fn environment(&self) -> ConfigResult<Environment> {
        match self.get_env_var("ENV") {
            Ok(value) => value.parse(),
            Err(_) => Ok(Environment::default()),
        }
    }

    /// Apply environment variable overrides to configuration
    fn apply_env_overrides(&self, config: &mut ShowcaseConfig) -> ConfigResult<()> {
        self.apply_api_overrides(&mut config.api)?;
        self.apply_server_overrides(&mut config.server)?;
        self.apply_http_overrides(&mut config.http)?;
        Ok(())
    }

    /// Apply API config overrides
    fn apply_api_overrides(&self, config: &mut crate::domains::api::ApiConfig) -> ConfigResult<()> {
        if let Ok(url) = self.get_env_var("GRAPHQL_API_URL") {
            config.graphql_url = url;
        }

        if let Ok(key) = self.get_env_var("GRAPHQL_API_KEY") {
            config.api_key = key;
        }

        Ok(())
    }

    /// Apply companion server overrides
    fn apply_server_overrides(
        &self,
        config: &mut crate::domains::server::ServerConfig,
    ) -> ConfigResult<()> {
        if let Ok(url) = self.get_env_var("SERVER_URL") {
            config.base_url = url;
        }

        Ok(())
    }

    /// Apply HTTP config overrides
    fn apply_http_overrides(
        &self,
        config: &mut crate::domains::http::HttpConfig,
    ) -> ConfigResult<()> {
        if let Ok(timeout) = self.get_env_var("HTTP_TIMEOUT") {
            let seconds: u64 = timeout
                .parse()
                .map_err(|e| ConfigError::EnvError(format!("Invalid HTTP_TIMEOUT: {}", e)))?;
            config.timeout = std::time::Duration::from_secs(seconds);
        }

        if let Ok(user_agent) = self.get_env_var("HTTP_USER_AGENT") {
            config.user_agent = user_agent;
        }

        if let Ok(verify_ssl) = self.get_env_var("HTTP_VERIFY_SSL") {
            config.verify_ssl = verify_ssl
                .parse()
                .map_err(|e| ConfigError::EnvError(format!("Invalid HTTP_VERIFY_SSL: {}", e)))?;
        }

        if let Ok(max_redirects) = self.get_env_var("HTTP_MAX_REDIRECTS") {
            config.max_redirects = max_redirects
                .parse()
                .map_err(|e| ConfigError::EnvError(format!("Invalid HTTP_MAX_REDIRECTS: {}", e)))?;
        }

        Ok(())
    }

    /// Get environment variable with prefix
    fn get_env_var(&self, name: &str) -> Result<String, std::env::VarError> {
        std::env::var(format!("{}_{}", self.prefix, name))
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_from_env_defaults_to_local() {
        temp_env::with_vars_unset(
            [
                "SHOWCASE_ENV",
                "SHOWCASE_GRAPHQL_API_URL",
                "SHOWCASE_GRAPHQL_API_KEY",
                "SHOWCASE_SERVER_URL",
            ],
            || {
                let config = ConfigLoader::new().from_env().unwrap();
                assert_eq!(config.api.graphql_url, "http://127.0.0.1:4000/graphql");
                assert_eq!(config.api.api_key, "letmein");
                assert_eq!(config.server.base_url, "http://localhost:3000");
            },
        );
    }

    #[test]
    fn test_production_requires_env_values() {
        temp_env::with_vars(
            [
                ("SHOWCASE_ENV", Some("production")),
                ("SHOWCASE_GRAPHQL_API_URL", None),
                ("SHOWCASE_GRAPHQL_API_KEY", None),
                ("SHOWCASE_SERVER_URL", None),
            ],
            || {
                assert!(ConfigLoader::new().from_env().is_err());
            },
        );
    }

    #[test]
    fn test_env_overrides_win() {
        temp_env::with_vars(
            [
                ("SHOWCASE_ENV", Some("production")),
                ("SHOWCASE_GRAPHQL_API_URL", Some("https://api.example.com/graphql")),
                ("SHOWCASE_GRAPHQL_API_KEY", Some("prod-key")),
                ("SHOWCASE_SERVER_URL", Some("https://showcase.example.com")),
                ("SHOWCASE_HTTP_TIMEOUT", Some("5")),
            ],
            || {
                let config = ConfigLoader::new().from_env().unwrap();
                assert_eq!(config.api.graphql_url, "https://api.example.com/graphql");
                assert_eq!(config.api.api_key, "prod-key");
                assert_eq!(config.server.base_url, "https://showcase.example.com");
                assert_eq!(config.http.timeout, std::time::Duration::from_secs(5));
            },
        );
    }

    #[test]
    fn test_invalid_timeout_override_rejected() {
        temp_env::with_vars([("SHOWCASE_HTTP_TIMEOUT", Some("soon"))], || {
            let err = ConfigLoader::new().from_env().unwrap_err();
            assert!(matches!(err, ConfigError::EnvError(_)));
        });
    }

    #[test]
    fn test_from_file_with_overrides() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "api:\n  graphql_url: https://api.example.com/graphql\n  api_key: file-key\nhttp:\n  timeout: 10\n"
        )
        .unwrap();

        temp_env::with_vars(
            [
                ("SHOWCASE_GRAPHQL_API_KEY", Some("env-key")),
                ("SHOWCASE_SERVER_URL", None::<&str>),
            ],
            || {
                let config = ConfigLoader::new().from_file(file.path()).unwrap();
                // File values survive unless overridden by the environment.
                assert_eq!(config.api.graphql_url, "https://api.example.com/graphql");
                assert_eq!(config.api.api_key, "env-key");
                assert_eq!(config.http.timeout, std::time::Duration::from_secs(10));
                assert_eq!(config.server.base_url, "http://localhost:3000");
            },
        );
    }

    #[test]
    fn test_custom_prefix() {
        temp_env::with_vars([("ACME_GRAPHQL_API_KEY", Some("acme-key"))], || {
            let config = ConfigLoader::with_prefix("ACME").from_env().unwrap();
            assert_eq!(config.api.api_key, "acme-key");
        });
    }
}
