//! Datasource registry capability.
//!
//! Query history records reference datasources by uid while the UI filters
//! by display name. The registry is owned elsewhere; this crate only reads
//! from it while mapping records and building search requests.

use crate::error::{HistoryError, HistoryResult, LookupKind};
use std::collections::HashMap;

/// Read-only lookup between datasource uids and display names.
pub trait DatasourceRegistry: Send + Sync {
    /// Display name for a datasource uid.
    fn name_for_uid(&self, uid: &str) -> Option<String>;

    /// Uid for a datasource display name.
    fn uid_for_name(&self, name: &str) -> Option<String>;

    /// Like [`name_for_uid`](Self::name_for_uid), reporting a miss as an error.
    fn resolve_name(&self, uid: &str) -> HistoryResult<String> {
        self.name_for_uid(uid)
            .ok_or_else(|| HistoryError::RegistryLookupMiss {
                kind: LookupKind::Uid,
                key: uid.to_string(),
            })
    }

    /// Like [`uid_for_name`](Self::uid_for_name), reporting a miss as an error.
    fn resolve_uid(&self, name: &str) -> HistoryResult<String> {
        self.uid_for_name(name)
            .ok_or_else(|| HistoryError::RegistryLookupMiss {
                kind: LookupKind::Name,
                key: name.to_string(),
            })
    }
}

/// Registry backed by two hash maps, for hosts that already hold the
/// datasource list in memory.
#[derive(Clone, Debug, Default)]
pub struct InMemoryDatasourceRegistry {
    names_by_uid: HashMap<String, String>,
    uids_by_name: HashMap<String, String>,
}

impl InMemoryDatasourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a datasource. Re-registering a uid or a name replaces the
    /// previous pairing in both directions.
    pub fn insert(&mut self, uid: impl Into<String>, name: impl Into<String>) {
        let uid = uid.into();
        let name = name.into();

        if let Some(old_name) = self.names_by_uid.remove(&uid) {
            self.uids_by_name.remove(&old_name);
        }
        if let Some(old_uid) = self.uids_by_name.remove(&name) {
            self.names_by_uid.remove(&old_uid);
        }

        self.names_by_uid.insert(uid.clone(), name.clone());
        self.uids_by_name.insert(name, uid);
    }

    pub fn len(&self) -> usize {
        self.names_by_uid.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names_by_uid.is_empty()
    }
}

impl<U, N> FromIterator<(U, N)> for InMemoryDatasourceRegistry
where
    U: Into<String>,
    N: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (U, N)>>(iter: I) -> Self {
        let mut registry = Self::new();
        for (uid, name) in iter {
            registry.insert(uid, name);
        }
        registry
    }
}

impl DatasourceRegistry for InMemoryDatasourceRegistry {
    fn name_for_uid(&self, uid: &str) -> Option<String> {
        self.names_by_uid.get(uid).cloned()
    }

    fn uid_for_name(&self, name: &str) -> Option<String> {
        self.uids_by_name.get(name).cloned()
    }
}
