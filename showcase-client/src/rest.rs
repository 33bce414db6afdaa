//! Plain HTTP transport for the companion server endpoints
//!
//! The session-token and image-upload endpoints are ordinary JSON-over-HTTP,
//! not GraphQL. The transport sits behind a trait so the action layer can run
//! against a canned implementation in tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value as JsonValue;
use tracing::debug;

use showcase_config::ShowcaseConfig;

use crate::errors::ClientError;

/// JSON-over-HTTP transport
#[async_trait]
pub trait RestTransport: Send + Sync {
    async fn get_json(&self, url: &str) -> Result<JsonValue, ClientError>;
    async fn post_json(&self, url: &str, body: &JsonValue) -> Result<JsonValue, ClientError>;
}

/// Production transport backed by reqwest
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport from the loaded configuration
    pub fn new(config: &ShowcaseConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(config.http.timeout)
            .user_agent(&config.http.user_agent)
            .danger_accept_invalid_certs(!config.http.verify_ssl)
            .redirect(reqwest::redirect::Policy::limited(
                config.http.max_redirects as usize,
            ))
            .build()?;
        Ok(Self { http })
    }
}

#[async_trait]
impl RestTransport for HttpTransport {
    async fn get_json(&self, url: &str) -> Result<JsonValue, ClientError> {
        debug!(%url, "GET");
        let response = self.http.get(url).send().await?;
        Ok(response.json().await?)
    }

    async fn post_json(&self, url: &str, body: &JsonValue) -> Result<JsonValue, ClientError> {
        debug!(%url, "POST");
        let response = self.http.post(url).json(body).send().await?;
        Ok(response.json().await?)
    }
}

/// Canned transport for tests
///
/// Responses are keyed `"METHOD:URL"`; a key whose URL is a substring of the
/// requested URL (or vice versa) also matches, so tests can register
/// `POST:/api/upload` without spelling out the host.
#[derive(Debug, Default)]
pub struct MockTransport {
    responses: Mutex<HashMap<String, JsonValue>>,
    calls: Mutex<Vec<String>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a canned response
    pub fn add_mock(&self, method: &str, url: &str, response: JsonValue) {
        self.responses
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(format!("{}:{}", method.to_uppercase(), url), response);
    }

    /// Every `"METHOD:URL"` this transport has served or been asked for
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn resolve(&self, method: &str, url: &str) -> Result<JsonValue, ClientError> {
        let key = format!("{}:{}", method, url);
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(key.clone());

        let responses = self.responses.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(response) = responses.get(&key) {
            return Ok(response.clone());
        }

        for (mock_key, response) in responses.iter() {
            if let Some((mock_method, mock_url)) = mock_key.split_once(':') {
                if mock_method.eq_ignore_ascii_case(method)
                    && (url.contains(mock_url) || mock_url.contains(url))
                {
                    return Ok(response.clone());
                }
            }
        }

        Err(ClientError::NoMockResponse(key))
    }
}

#[async_trait]
impl RestTransport for MockTransport {
    async fn get_json(&self, url: &str) -> Result<JsonValue, ClientError> {
        self.resolve("GET", url)
    }

    async fn post_json(&self, url: &str, _body: &JsonValue) -> Result<JsonValue, ClientError> {
        self.resolve("POST", url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_mock_transport_exact_match() {
        let transport = MockTransport::new();
        transport.add_mock("GET", "http://localhost:3000/api/auth/token", json!({ "token": "t" }));

        let body = transport
            .get_json("http://localhost:3000/api/auth/token")
            .await
            .unwrap();
        assert_eq!(body, json!({ "token": "t" }));
        assert_eq!(transport.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_mock_transport_partial_match() {
        let transport = MockTransport::new();
        transport.add_mock("POST", "/api/upload", json!({ "url": "https://cdn.example.com/x.png" }));

        let body = transport
            .post_json("http://localhost:3000/api/upload", &json!({ "path": "data:image/png;base64,AAAA" }))
            .await
            .unwrap();
        assert_eq!(body["url"], "https://cdn.example.com/x.png");
    }

    #[tokio::test]
    async fn test_mock_transport_miss() {
        let transport = MockTransport::new();
        let err = transport.get_json("http://localhost:3000/api/other").await.unwrap_err();
        assert!(matches!(err, ClientError::NoMockResponse(_)));
        // The miss is still recorded.
        assert_eq!(transport.calls().len(), 1);
    }
}
