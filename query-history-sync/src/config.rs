//! Query history client configuration.

use crate::error::{HistoryError, HistoryResult};
use serde::{Deserialize, Serialize};

/// Number of records requested per page when the caller doesn't say otherwise.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Pages are numbered from 1.
pub const FIRST_PAGE: u32 = 1;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the remote query history client.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Base URL of the backend (e.g., "http://localhost:3000"). Endpoint
    /// paths are appended verbatim.
    pub api_base_url: String,

    /// Value sent as `limit` on search requests.
    pub page_size: u32,

    /// Page requested when the filter doesn't carry one.
    pub first_page: u32,

    /// HTTP client timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:3000".to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            first_page: FIRST_PAGE,
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl HistoryConfig {
    /// Builds a config from `QUERY_HISTORY_*` environment variables, falling
    /// back to defaults for anything unset.
    pub fn from_env() -> HistoryResult<Self> {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("QUERY_HISTORY_API_URL") {
            config.api_base_url = url;
        }
        if let Ok(raw) = std::env::var("QUERY_HISTORY_PAGE_SIZE") {
            config.page_size = raw.parse().map_err(|e| {
                HistoryError::Config(format!("QUERY_HISTORY_PAGE_SIZE={raw}: {e}"))
            })?;
        }
        if let Ok(raw) = std::env::var("QUERY_HISTORY_TIMEOUT_SECS") {
            config.request_timeout_secs = raw.parse().map_err(|e| {
                HistoryError::Config(format!("QUERY_HISTORY_TIMEOUT_SECS={raw}: {e}"))
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> HistoryResult<()> {
        if self.api_base_url.trim().is_empty() {
            return Err(HistoryError::Config("missing api_base_url".to_string()));
        }
        if self.page_size == 0 {
            return Err(HistoryError::Config("page_size must be at least 1".to_string()));
        }
        if self.first_page == 0 {
            return Err(HistoryError::Config("pages are numbered from 1".to_string()));
        }
        Ok(())
    }
}
