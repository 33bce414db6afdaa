//! Domain-driven configuration management for the Showcase client
//!
//! Configuration is split by functional domain (API endpoint, companion
//! server, HTTP client behaviour), with defaults keyed by a production/local
//! environment flag, YAML file support, environment variable overrides, and
//! per-domain validation. The aggregate is constructed once at process start
//! and passed by reference; nothing reads the process environment afterwards.

pub mod error;
pub mod loader;
pub mod validation;

// Domain-specific configuration modules
pub mod domains;

// Re-export main types
pub use error::{ConfigError, ConfigResult};
pub use loader::ConfigLoader;

// Re-export domain configurations
pub use domains::{
    api::ApiConfig, http::HttpConfig, server::ServerConfig, Environment, ShowcaseConfig,
};

// Re-export utilities
pub use domains::utils::serde_duration;
