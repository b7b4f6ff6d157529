//! Remote query history storage.
//!
//! Reads go through the search endpoint and come back as domain records in
//! server order. Nothing is cached; every call hits the backend once.

use crate::config::HistoryConfig;
use crate::error::{HistoryError, HistoryResult};
use crate::mapper::from_dto;
use crate::params::build_query_params;
use crate::registry::DatasourceRegistry;
use crate::transport::HistoryTransport;
use crate::types::*;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

pub(crate) const QUERY_HISTORY_PATH: &str = "/api/query-history";

/// Query history client for the remote backend store.
pub struct RemoteHistoryStorage {
    pub(crate) transport: Arc<dyn HistoryTransport>,
    pub(crate) registry: Arc<dyn DatasourceRegistry>,
    pub(crate) config: HistoryConfig,
}

impl RemoteHistoryStorage {
    pub fn new(
        transport: Arc<dyn HistoryTransport>,
        registry: Arc<dyn DatasourceRegistry>,
        config: HistoryConfig,
    ) -> HistoryResult<Self> {
        config.validate()?;

        Ok(Self {
            transport,
            registry,
            config,
        })
    }

    pub fn config(&self) -> &HistoryConfig {
        &self.config
    }

    // ── Search ──

    /// Fetches one page of history matching `filters`.
    pub async fn get_rich_history(
        &self,
        filters: &RichHistorySearchFilters,
    ) -> HistoryResult<Vec<RichHistoryQuery>> {
        if filters.page == Some(0) {
            return Err(HistoryError::Config("pages are numbered from 1".to_string()));
        }

        let params = build_query_params(filters, self.registry.as_ref(), &self.config);
        debug!(
            "searching {QUERY_HISTORY_PATH} with {} params",
            params.matches('&').count() + 1
        );
        let path = format!("{QUERY_HISTORY_PATH}?{params}");

        let body = self.transport.get(&path).await?;
        let resp: QueryHistorySearchResponse = decode(body, QUERY_HISTORY_PATH)?;
        debug!("fetched {} query history items", resp.result.query_history.len());

        Ok(resp
            .result
            .query_history
            .into_iter()
            .map(|dto| from_dto(dto, self.registry.as_ref()))
            .collect())
    }

    // ── Single-record writes ──

    /// Stores a new history record. The backend assigns the uid and creation time.
    pub async fn add_to_rich_history(
        &self,
        datasource_uid: &str,
        queries: &[Value],
    ) -> HistoryResult<RichHistoryQuery> {
        let body = serde_json::to_value(CreateQueryRequest {
            data_source_uid: datasource_uid,
            queries,
        })?;

        let resp = self.transport.post(QUERY_HISTORY_PATH, &body).await?;
        self.decode_record(resp, QUERY_HISTORY_PATH)
    }

    pub async fn update_starred(&self, id: &str, starred: bool) -> HistoryResult<RichHistoryQuery> {
        let path = format!("{QUERY_HISTORY_PATH}/star/{}", urlencoding::encode(id));
        let resp = if starred {
            self.transport.post_empty(&path).await?
        } else {
            self.transport.delete(&path).await?
        };
        self.decode_record(resp, &path)
    }

    pub async fn update_comment(&self, id: &str, comment: &str) -> HistoryResult<RichHistoryQuery> {
        let path = format!("{QUERY_HISTORY_PATH}/{}", urlencoding::encode(id));
        let body = serde_json::to_value(PatchCommentRequest { comment })?;

        let resp = self.transport.patch(&path, &body).await?;
        self.decode_record(resp, &path)
    }

    pub async fn delete_rich_history(&self, id: &str) -> HistoryResult<()> {
        let path = format!("{QUERY_HISTORY_PATH}/{}", urlencoding::encode(id));
        self.transport.delete(&path).await?;
        Ok(())
    }

    fn decode_record(&self, body: Value, path: &str) -> HistoryResult<RichHistoryQuery> {
        let resp: QueryHistoryResponse = decode(body, path)?;
        Ok(from_dto(resp.result, self.registry.as_ref()))
    }
}

fn decode<T: DeserializeOwned>(body: Value, path: &str) -> HistoryResult<T> {
    serde_json::from_value(body)
        .map_err(|e| HistoryError::MalformedResponse(format!("{path}: {e}")))
}
