//! GraphQL request wrapper
//!
//! A thin wrapper over the configured endpoint. Credentials are attached per
//! request from a [`RequestAuth`] value; the client itself holds no mutable
//! header state, so two in-flight requests with different credentials cannot
//! observe each other's headers.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use tracing::{debug, info, warn};

use showcase_config::ShowcaseConfig;

use crate::errors::ClientError;

/// Header carrying the API key on read/public operations
pub const API_KEY_HEADER: &str = "x-api-key";

/// Credentials for a single request
#[derive(Debug, Clone)]
pub enum RequestAuth {
    /// `x-api-key` header; read/public operations
    ApiKey,
    /// `Authorization: Bearer <token>`; owner-scoped operations
    Bearer(String),
}

impl RequestAuth {
    fn kind(&self) -> AuthKind {
        match self {
            RequestAuth::ApiKey => AuthKind::ApiKey,
            RequestAuth::Bearer(_) => AuthKind::Bearer,
        }
    }
}

/// Which credential a recorded request carried
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthKind {
    ApiKey,
    Bearer,
}

/// GraphQL request body
#[derive(Debug, Serialize)]
struct GraphqlRequest<'a> {
    query: &'a str,
    variables: JsonValue,
}

/// GraphQL response envelope
#[derive(Debug, Deserialize)]
struct GraphqlResponse<T> {
    data: Option<T>,
    errors: Option<Vec<GraphqlErrorItem>>,
}

/// Single GraphQL-level error
#[derive(Debug, Clone, Deserialize)]
pub struct GraphqlErrorItem {
    pub message: String,
    #[serde(default)]
    pub path: Option<Vec<JsonValue>>,
}

/// One issued request, as seen by the wrapper
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub operation: String,
    pub auth: AuthKind,
    pub variables: JsonValue,
    pub started_at: DateTime<Utc>,
}

/// GraphQL client bound to one endpoint and API key
///
/// Immutable after construction apart from the mock table: tests flip
/// `set_offline` and register responses keyed by operation name, and no
/// network traffic happens in offline mode.
#[derive(Debug, Clone)]
pub struct GraphqlClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
    offline: bool,
    mocks: HashMap<String, JsonValue>,
    recorded: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl GraphqlClient {
    /// Create a client from the loaded configuration
    pub fn new(config: &ShowcaseConfig) -> Result<Self, ClientError> {
        debug!(
            endpoint = %config.api.graphql_url,
            timeout_secs = config.http.timeout.as_secs(),
            "creating GraphQL client"
        );
        let http = reqwest::Client::builder()
            .timeout(config.http.timeout)
            .user_agent(&config.http.user_agent)
            .danger_accept_invalid_certs(!config.http.verify_ssl)
            .redirect(reqwest::redirect::Policy::limited(
                config.http.max_redirects as usize,
            ))
            .build()?;

        Ok(Self {
            http,
            endpoint: config.api.graphql_url.clone(),
            api_key: config.api.api_key.clone(),
            offline: false,
            mocks: HashMap::new(),
            recorded: Arc::new(Mutex::new(Vec::new())),
        })
    }

    /// Set offline mode; requests resolve from the mock table only
    pub fn set_offline(&mut self) {
        self.offline = true;
        debug!("GraphQL client set to offline mode");
    }

    /// Register a mock `data` payload for an operation name
    pub fn add_mock(&mut self, operation: &str, data: JsonValue) {
        self.mocks.insert(operation.to_string(), data);
        debug!(operation, "added GraphQL mock");
    }

    /// Snapshot of every request issued through this client (clones share it)
    pub fn recorded_requests(&self) -> Vec<RecordedRequest> {
        self.recorded
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Issue one GraphQL request and parse its `data` into `T`
    ///
    /// GraphQL-level errors are surfaced verbatim; transport errors propagate
    /// unchanged. There is no retry and no backoff.
    pub async fn request<T: DeserializeOwned>(
        &self,
        query: &'static str,
        variables: JsonValue,
        auth: RequestAuth,
    ) -> Result<T, ClientError> {
        let operation = operation_name(query).to_string();
        self.record(RecordedRequest {
            operation: operation.clone(),
            auth: auth.kind(),
            variables: variables.clone(),
            started_at: Utc::now(),
        });

        if self.offline {
            debug!(%operation, "offline mode, resolving from mock table");
            let data = self
                .mocks
                .get(&operation)
                .cloned()
                .ok_or_else(|| ClientError::NoMockResponse(operation.clone()))?;
            return Ok(serde_json::from_value(data)?);
        }

        debug!(%operation, endpoint = %self.endpoint, "sending GraphQL request");
        let body = GraphqlRequest { query, variables };
        let response = self
            .http
            .post(&self.endpoint)
            .headers(self.auth_headers(&auth)?)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        info!(%operation, status = status.as_u16(), "GraphQL response received");

        let envelope: GraphqlResponse<T> = response.json().await?;

        if let Some(errors) = envelope.errors {
            if !errors.is_empty() {
                let message = errors
                    .iter()
                    .map(|e| e.message.as_str())
                    .collect::<Vec<_>>()
                    .join("; ");
                warn!(%operation, %message, "GraphQL operation failed");
                return Err(ClientError::Graphql { operation, message });
            }
        }

        envelope.data.ok_or(ClientError::MissingData(operation))
    }

    /// Build the header set for one request
    fn auth_headers(&self, auth: &RequestAuth) -> Result<HeaderMap, ClientError> {
        let mut headers = HeaderMap::new();
        match auth {
            RequestAuth::ApiKey => {
                let value = HeaderValue::from_str(&self.api_key)
                    .map_err(|_| ClientError::InvalidCredential)?;
                headers.insert(API_KEY_HEADER, value);
            }
            RequestAuth::Bearer(token) => {
                let value = HeaderValue::from_str(&format!("Bearer {}", token))
                    .map_err(|_| ClientError::InvalidCredential)?;
                headers.insert(AUTHORIZATION, value);
            }
        }
        Ok(headers)
    }

    fn record(&self, request: RecordedRequest) {
        self.recorded
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(request);
    }
}

/// Extract the operation name from a GraphQL document
///
/// Anonymous documents record as "anonymous".
fn operation_name(document: &str) -> &str {
    let rest = document.trim_start();
    let rest = rest
        .strip_prefix("mutation")
        .or_else(|| rest.strip_prefix("query"))
        .unwrap_or(rest)
        .trim_start();
    let end = rest
        .find(|c: char| c == '(' || c == '{' || c.is_whitespace())
        .unwrap_or(rest.len());
    let name = &rest[..end];
    if name.is_empty() {
        "anonymous"
    } else {
        name
    }
}
