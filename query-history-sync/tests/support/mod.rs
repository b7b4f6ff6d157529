//! Shared fixtures: a recording transport, a two-datasource registry and a
//! sample history record.

#![allow(dead_code)]

use async_trait::async_trait;
use query_history_sync::{
    HistoryConfig, HistoryResult, HistoryTransport, InMemoryDatasourceRegistry,
    RemoteHistoryStorage, RichHistoryQuery,
};
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::Mutex;

/// One call seen by [`RecordingTransport`].
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedCall {
    pub method: &'static str,
    pub path: String,
    pub body: Option<Value>,
}

/// Transport that records every call and replays queued responses in order.
/// Once the queue is empty it answers `Value::Null`.
pub struct RecordingTransport {
    calls: Mutex<Vec<RecordedCall>>,
    responses: Mutex<VecDeque<HistoryResult<Value>>>,
}

impl RecordingTransport {
    pub fn new(responses: Vec<HistoryResult<Value>>) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            responses: Mutex::new(VecDeque::from(responses)),
        }
    }

    pub async fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().await.clone()
    }

    async fn record(&self, method: &'static str, path: &str, body: Option<&Value>) -> HistoryResult<Value> {
        self.calls.lock().await.push(RecordedCall {
            method,
            path: path.to_string(),
            body: body.cloned(),
        });
        self.responses
            .lock()
            .await
            .pop_front()
            .unwrap_or(Ok(Value::Null))
    }
}

#[async_trait]
impl HistoryTransport for RecordingTransport {
    async fn get(&self, path: &str) -> HistoryResult<Value> {
        self.record("GET", path, None).await
    }

    async fn post(&self, path: &str, body: &Value) -> HistoryResult<Value> {
        self.record("POST", path, Some(body)).await
    }

    async fn post_empty(&self, path: &str) -> HistoryResult<Value> {
        self.record("POST", path, None).await
    }

    async fn patch(&self, path: &str, body: &Value) -> HistoryResult<Value> {
        self.record("PATCH", path, Some(body)).await
    }

    async fn delete(&self, path: &str) -> HistoryResult<Value> {
        self.record("DELETE", path, None).await
    }
}

/// `ds1` ↔ `name-of-ds1`, `ds2` ↔ `name-of-ds2`.
pub fn registry() -> InMemoryDatasourceRegistry {
    [("ds1", "name-of-ds1"), ("ds2", "name-of-ds2")]
        .into_iter()
        .collect()
}

pub fn sample_query() -> RichHistoryQuery {
    RichHistoryQuery {
        id: "123".into(),
        created_at: 200 * 1000,
        datasource_uid: "ds1".into(),
        datasource_name: "name-of-ds1".into(),
        starred: true,
        comment: "comment".into(),
        queries: vec![serde_json::json!({ "foo": "bar " })],
    }
}

/// Wire form of [`sample_query`].
pub fn sample_dto_json() -> Value {
    serde_json::json!({
        "uid": "123",
        "createdAt": 200,
        "datasourceUid": "ds1",
        "starred": true,
        "comment": "comment",
        "queries": [{ "foo": "bar " }]
    })
}

pub fn storage_with(transport: Arc<RecordingTransport>) -> RemoteHistoryStorage {
    RemoteHistoryStorage::new(transport, Arc::new(registry()), HistoryConfig::default())
        .expect("default config is valid")
}
