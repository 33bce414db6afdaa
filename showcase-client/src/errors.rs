//! Client error types

use thiserror::Error;

/// Client result type
pub type ClientResult<T> = Result<T, ClientError>;

/// Error type for client operations
///
/// Errors are surfaced unchanged from the failing layer; no variant wraps
/// another with extra context strings and nothing is retried.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid JSON in response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("GraphQL operation '{operation}' failed: {message}")]
    Graphql { operation: String, message: String },

    #[error("GraphQL operation '{0}' returned no data")]
    MissingData(String),

    #[error("Credential contains characters not allowed in an HTTP header")]
    InvalidCredential,

    #[error("Image upload response did not contain a hosted URL")]
    UploadFailed,

    #[error("No mock response registered for '{0}' in offline mode")]
    NoMockResponse(String),
}
