//! Companion app-server configuration
//!
//! The companion server hosts the session-token and image-upload endpoints.

use crate::error::ConfigResult;
use crate::validation::{validate_url, Validatable};
use serde::{Deserialize, Serialize};

/// Companion server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Base URL of the companion server
    pub base_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl ServerConfig {
    /// Production shape: no baked-in URL
    pub fn production() -> Self {
        Self {
            base_url: String::new(),
        }
    }
}

impl Validatable for ServerConfig {
    fn validate(&self) -> ConfigResult<()> {
        validate_url(&self.base_url, "base_url", self.domain_name())
    }

    fn domain_name(&self) -> &'static str {
        "server"
    }
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_default() {
        let config = ServerConfig::default();
        assert_eq!(config.base_url, "http://localhost:3000");
        assert!(config.validate().is_ok());
    }
}
