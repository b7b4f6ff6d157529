//! Domain and wire types for query history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A saved query-history record as the application sees it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RichHistoryQuery {
    pub id: String,
    /// Milliseconds since the Unix epoch.
    pub created_at: i64,
    pub datasource_uid: String,
    /// Resolved from the datasource registry on read. Never sent to the backend.
    pub datasource_name: String,
    pub starred: bool,
    pub comment: String,
    /// Per-datasource query objects, opaque to this crate.
    pub queries: Vec<serde_json::Value>,
}

impl RichHistoryQuery {
    /// `created_at` as a UTC timestamp, or `None` if out of range.
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.created_at)
    }
}

/// Wire representation of a query-history record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryHistoryDto {
    pub uid: String,
    /// Seconds since the Unix epoch.
    pub created_at: i64,
    pub datasource_uid: String,
    pub starred: bool,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub queries: Vec<serde_json::Value>,
}

/// Ordering of search results by creation time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    Descending,
    Ascending,
}

impl SortOrder {
    /// Value of the `sort` query parameter.
    pub fn as_param(self) -> &'static str {
        match self {
            SortOrder::Descending => "time-desc",
            SortOrder::Ascending => "time-asc",
        }
    }
}

/// Caller-supplied criteria for a history search.
///
/// `from` and `to` are day counts relative to now; see
/// [`build_query_params`](crate::params::build_query_params) for how they map
/// onto the request.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RichHistorySearchFilters {
    pub search: String,
    /// Datasource display names, not uids.
    pub datasource_filters: Vec<String>,
    pub sort_order: SortOrder,
    pub starred: bool,
    pub from: u32,
    pub to: u32,
    /// Page to fetch; `None` means the configured first page.
    #[serde(default)]
    pub page: Option<u32>,
}

/// Acknowledgement for a completed migration.
#[derive(Clone, Debug, PartialEq)]
pub struct MigrationAck {
    /// Number of records sent in the migrate request.
    pub submitted: usize,
    /// Response body as returned by the backend.
    pub response: serde_json::Value,
}

/// `{ "result": { "queryHistory": [...] } }`
#[derive(Debug, Deserialize)]
pub(crate) struct QueryHistorySearchResponse {
    pub result: QueryHistorySearchResult,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct QueryHistorySearchResult {
    pub query_history: Vec<QueryHistoryDto>,
}

/// `{ "result": { ...dto } }`
#[derive(Debug, Deserialize)]
pub(crate) struct QueryHistoryResponse {
    pub result: QueryHistoryDto,
}

#[derive(Debug, Serialize)]
pub(crate) struct MigrateRequest<'a> {
    pub queries: &'a [QueryHistoryDto],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateQueryRequest<'a> {
    pub data_source_uid: &'a str,
    pub queries: &'a [serde_json::Value],
}

#[derive(Debug, Serialize)]
pub(crate) struct PatchCommentRequest<'a> {
    pub comment: &'a str,
}
