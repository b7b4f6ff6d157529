//! Query history error types.

use thiserror::Error;

/// Result type for query history operations.
pub type HistoryResult<T> = Result<T, HistoryError>;

/// Which side of the datasource registry a lookup missed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LookupKind {
    Uid,
    Name,
}

impl std::fmt::Display for LookupKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LookupKind::Uid => f.write_str("uid"),
            LookupKind::Name => f.write_str("name"),
        }
    }
}

/// Errors that can occur while talking to the query history backend.
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("API request failed: {0}")]
    Remote(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("datasource {kind} not found in registry: {key}")]
    RegistryLookupMiss { kind: LookupKind, key: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl HistoryError {
    /// Returns true for failures of the remote call itself: transport errors,
    /// non-success statuses and undecodable response envelopes.
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            HistoryError::Remote(_) | HistoryError::Http(_) | HistoryError::MalformedResponse(_)
        )
    }
}
