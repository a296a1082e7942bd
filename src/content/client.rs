//! HTTP client for the content backend.
//!
//! One POST endpoint takes `{query, variables?}` and answers `{data}` or
//! `{errors: [...]}`. The client makes exactly one round trip per call: no
//! retries, no timeout beyond reqwest's defaults, no deduplication of
//! identical in-flight queries.

use std::fmt;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use url::Url;

use fyrre_core::NormalizeError;

use super::ContentQuery;

/// Content fetching errors.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("backend reported errors: {0}")]
    Backend(BackendErrors),

    #[error("unauthorized: bearer token missing or rejected")]
    Unauthorized,

    /// The envelope or the `data` shape was not what the query expects.
    #[error("malformed response: {0}")]
    Malformed(String),

    /// A well-formed response carried a record the normalizer rejects.
    #[error(transparent)]
    Content(#[from] NormalizeError),
}

/// One entry of the backend's `errors` list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BackendMessage {
    pub message: String,
    #[serde(default)]
    pub path: Option<Vec<Value>>,
}

impl BackendMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BackendErrors(pub Vec<BackendMessage>);

impl fmt::Display for BackendErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.0.iter().map(|m| m.message.as_str()).collect();
        write!(f, "{}", messages.join("; "))
    }
}

/// Where the bearer token comes from. Resolved on every request so a token
/// rotated in the environment is picked up without a restart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenSource {
    /// Read the named environment variable at call time.
    Env(String),
    Static(String),
    None,
}

impl TokenSource {
    /// The current token. Absent and empty both mean "send no header".
    pub fn resolve(&self) -> Option<String> {
        match self {
            Self::Env(var) => std::env::var(var).ok(),
            Self::Static(token) => Some(token.clone()),
            Self::None => None,
        }
        .filter(|token| !token.is_empty())
    }
}

#[derive(Debug, Deserialize)]
struct Envelope {
    data: Option<Value>,
    #[serde(default)]
    errors: Option<Vec<BackendMessage>>,
}

/// HTTP client for the content backend.
#[derive(Debug, Clone)]
pub struct ContentClient {
    endpoint: Url,
    token: TokenSource,
    client: Client,
}

impl ContentClient {
    pub fn new(endpoint: Url, token: TokenSource) -> Self {
        Self {
            endpoint,
            token,
            client: Client::new(),
        }
    }

    /// Run `query` and return the raw `data` object.
    pub async fn execute(&self, query: &ContentQuery) -> Result<Value, ContentError> {
        tracing::debug!("Executing content query {}", query.operation_name());

        let mut request = self.client.post(self.endpoint.clone()).json(query);
        match self.token.resolve() {
            Some(token) => request = request.bearer_auth(token),
            None => tracing::warn!(
                "No bearer token available for {}; the backend will likely refuse it",
                query.operation_name()
            ),
        }

        let response = request.send().await?;
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            tracing::warn!("Content backend refused {}: {}", query.operation_name(), status);
            return Err(ContentError::Unauthorized);
        }

        let body = response.text().await?;
        let envelope = serde_json::from_str::<Envelope>(&body);

        if !status.is_success() {
            let errors = envelope
                .ok()
                .and_then(|e| e.errors)
                .filter(|errors| !errors.is_empty())
                .unwrap_or_else(|| vec![BackendMessage::new(format!("{}: {}", status, body))]);
            return Err(ContentError::Backend(BackendErrors(errors)));
        }

        let envelope = envelope.map_err(|e| {
            ContentError::Malformed(format!("response is not a content envelope: {}", e))
        })?;
        if let Some(errors) = envelope.errors.filter(|errors| !errors.is_empty()) {
            let errors = BackendErrors(errors);
            tracing::warn!("Content query {} failed: {}", query.operation_name(), errors);
            return Err(ContentError::Backend(errors));
        }

        envelope.data.ok_or_else(|| {
            ContentError::Malformed("response carries neither data nor errors".to_string())
        })
    }

    /// Run `query` and deserialize its `data` into `T`.
    pub async fn fetch<T: DeserializeOwned>(&self, query: &ContentQuery) -> Result<T, ContentError> {
        let data = self.execute(query).await?;
        serde_json::from_value(data).map_err(|e| {
            ContentError::Malformed(format!(
                "unexpected data shape for {}: {}",
                query.operation_name(),
                e
            ))
        })
    }
}
