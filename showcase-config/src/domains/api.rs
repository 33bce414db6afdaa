//! GraphQL API endpoint configuration

use crate::error::ConfigResult;
use crate::validation::{validate_required_string, validate_url, Validatable};
use serde::{Deserialize, Serialize};

/// GraphQL API configuration
///
/// Defaults point at a local development API; production deployments must
/// supply both values explicitly (file or environment).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// GraphQL endpoint URL
    pub graphql_url: String,

    /// API key attached to read/public operations
    pub api_key: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            graphql_url: default_graphql_url(),
            api_key: default_api_key(),
        }
    }
}

impl ApiConfig {
    /// Production shape: no baked-in credentials
    pub fn production() -> Self {
        Self {
            graphql_url: String::new(),
            api_key: String::new(),
        }
    }
}

impl Validatable for ApiConfig {
    fn validate(&self) -> ConfigResult<()> {
        validate_url(&self.graphql_url, "graphql_url", self.domain_name())?;
        validate_required_string(&self.api_key, "api_key", self.domain_name())?;
        Ok(())
    }

    fn domain_name(&self) -> &'static str {
        "api"
    }
}

fn default_graphql_url() -> String {
    "http://127.0.0.1:4000/graphql".to_string()
}

fn default_api_key() -> String {
    "letmein".to_string()
}
