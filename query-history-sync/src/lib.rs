//! Remote query-history storage client.
//!
//! Keeps a user's query history in the backend store:
//! - Domain/DTO mapping (millisecond vs. second timestamps, datasource names)
//! - Search request construction (filters, sort order, time window, paging)
//! - Single-record writes (add, star, comment, delete)
//! - One-shot migration of locally kept history into the remote store

pub mod config;
pub mod error;
pub mod mapper;
pub mod migration;
pub mod params;
pub mod registry;
pub mod storage;
pub mod transport;
pub mod types;

pub use config::HistoryConfig;
pub use error::{HistoryError, HistoryResult};
pub use registry::{DatasourceRegistry, InMemoryDatasourceRegistry};
pub use storage::RemoteHistoryStorage;
pub use transport::{HistoryTransport, HttpTransport};
pub use types::*;
