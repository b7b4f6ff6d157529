//! Transport capability for the query history backend.
//!
//! [`RemoteHistoryStorage`](crate::storage::RemoteHistoryStorage) only sees
//! [`HistoryTransport`]; [`HttpTransport`] is the reqwest implementation used
//! outside of tests.

use crate::config::HistoryConfig;
use crate::error::{HistoryError, HistoryResult};
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// JSON request/response calls against backend paths such as
/// `/api/query-history?page=1`. Each call returns the decoded response body,
/// or `Value::Null` when the body is empty.
#[async_trait]
pub trait HistoryTransport: Send + Sync {
    async fn get(&self, path: &str) -> HistoryResult<Value>;

    async fn post(&self, path: &str, body: &Value) -> HistoryResult<Value>;

    /// POST without a request body.
    async fn post_empty(&self, path: &str) -> HistoryResult<Value>;

    async fn patch(&self, path: &str, body: &Value) -> HistoryResult<Value>;

    async fn delete(&self, path: &str) -> HistoryResult<Value>;
}

/// HTTP transport built on reqwest.
pub struct HttpTransport {
    client: Client,
    base_url: String,
    bearer_token: Option<String>,
}

impl HttpTransport {
    pub fn new(config: &HistoryConfig) -> HistoryResult<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            bearer_token: None,
        })
    }

    /// Sends `Authorization: Bearer <token>` on every request.
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let builder = self.client.request(method, url);
        match &self.bearer_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Neither logs nor errors carry the query string; it holds the user's
    /// search text.
    async fn send(&self, method: Method, path: &str, body: Option<&Value>) -> HistoryResult<Value> {
        let endpoint = path.split_once('?').map_or(path, |(endpoint, _)| endpoint);
        debug!("{method} {endpoint}");

        let mut builder = self.request(method.clone(), path);
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let bytes = builder
            .send()
            .await
            .map_err(|e| HistoryError::Http(e.without_url()))?
            .error_for_status()
            .map_err(|e| HistoryError::Remote(format!("{method} {endpoint}: {}", e.without_url())))?
            .bytes()
            .await
            .map_err(|e| HistoryError::Http(e.without_url()))?;

        if bytes.is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_slice(&bytes)
            .map_err(|e| HistoryError::MalformedResponse(format!("{method} {endpoint}: {e}")))
    }
}

#[async_trait]
impl HistoryTransport for HttpTransport {
    async fn get(&self, path: &str) -> HistoryResult<Value> {
        self.send(Method::GET, path, None).await
    }

    async fn post(&self, path: &str, body: &Value) -> HistoryResult<Value> {
        self.send(Method::POST, path, Some(body)).await
    }

    async fn post_empty(&self, path: &str) -> HistoryResult<Value> {
        self.send(Method::POST, path, None).await
    }

    async fn patch(&self, path: &str, body: &Value) -> HistoryResult<Value> {
        self.send(Method::PATCH, path, Some(body)).await
    }

    async fn delete(&self, path: &str) -> HistoryResult<Value> {
        self.send(Method::DELETE, path, None).await
    }
}
