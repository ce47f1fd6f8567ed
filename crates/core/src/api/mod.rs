//! HTTP collaborator behind a trait, so widgets take an injected client and
//! tests substitute a recording mock instead of patching anything global.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Failure taxonomy for API calls.
///
/// Variants carry rendered text rather than source errors so snapshots of
/// request state stay cheaply cloneable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },
    #[error("unexpected status {status} from {url}")]
    Status { status: u16, url: String },
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    fn transport(url: &str, error: &reqwest::Error) -> Self {
        ApiError::Transport {
            url: url.to_string(),
            message: error.to_string(),
        }
    }
}

/// The fetch collaborator widgets depend on
#[async_trait]
pub trait ApiClient: Send + Sync {
    /// GET `url` and parse the body as JSON
    async fn get_json(&self, url: &str) -> Result<Value, ApiError>;

    /// POST `body` as JSON to `url` and parse the response body as JSON
    async fn post_json(&self, url: &str, body: &Value) -> Result<Value, ApiError>;
}

/// Convenience alias for the injected form
pub type SharedApiClient = Arc<dyn ApiClient>;

/// reqwest-backed [`ApiClient`]
#[derive(Debug, Clone, Default)]
pub struct HttpClient {
    inner: reqwest::Client,
}

impl HttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    fn check_status(url: &str, response: &reqwest::Response) -> Result<(), ApiError> {
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ApiError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            })
        }
    }

    async fn read_json(url: &str, response: reqwest::Response) -> Result<Value, ApiError> {
        Self::check_status(url, &response)?;
        response
            .json::<Value>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait]
impl ApiClient for HttpClient {
    async fn get_json(&self, url: &str) -> Result<Value, ApiError> {
        debug!(target: "api", %url, "GET");
        let response = self
            .inner
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::transport(url, &e))?;
        Self::read_json(url, response).await
    }

    async fn post_json(&self, url: &str, body: &Value) -> Result<Value, ApiError> {
        debug!(target: "api", %url, "POST");
        let response = self
            .inner
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::transport(url, &e))?;
        Self::read_json(url, response).await
    }
}
