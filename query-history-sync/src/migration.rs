//! Bulk migration of locally kept history into the remote store.
//!
//! Meant to run once, when a client switches from local history to the
//! backend. Nothing here guards against a second run: calling `migrate`
//! twice sends the same records twice.

use crate::error::HistoryResult;
use crate::mapper::to_dto;
use crate::storage::{QUERY_HISTORY_PATH, RemoteHistoryStorage};
use crate::types::{MigrateRequest, MigrationAck, QueryHistoryDto, RichHistoryQuery};
use tracing::info;

impl RemoteHistoryStorage {
    /// Sends every record in `queries` to the backend in one request,
    /// preserving order. An empty slice still issues the request.
    pub async fn migrate(&self, queries: &[RichHistoryQuery]) -> HistoryResult<MigrationAck> {
        let dtos: Vec<QueryHistoryDto> = queries.iter().map(to_dto).collect();
        let body = serde_json::to_value(MigrateRequest { queries: &dtos })?;

        info!("migrating {} query history items", dtos.len());
        let response = self
            .transport
            .post(&format!("{QUERY_HISTORY_PATH}/migrate"), &body)
            .await?;

        Ok(MigrationAck {
            submitted: dtos.len(),
            response,
        })
    }
}
