//! Conversion between [`RichHistoryQuery`] and [`QueryHistoryDto`].
//!
//! The backend stores `createdAt` in whole seconds while the domain uses
//! milliseconds, so `to_dto` truncates any sub-second part.

use crate::registry::DatasourceRegistry;
use crate::types::{QueryHistoryDto, RichHistoryQuery};
use tracing::warn;

const MILLIS_PER_SEC: i64 = 1000;

/// Converts a domain record to its wire form. `datasource_name` is dropped.
pub fn to_dto(query: &RichHistoryQuery) -> QueryHistoryDto {
    QueryHistoryDto {
        uid: query.id.clone(),
        created_at: query.created_at / MILLIS_PER_SEC,
        datasource_uid: query.datasource_uid.clone(),
        starred: query.starred,
        comment: query.comment.clone(),
        queries: query.queries.clone(),
    }
}

/// Converts a wire record back to the domain form, resolving the datasource
/// name through `registry`. An unknown uid yields an empty name.
pub fn from_dto(dto: QueryHistoryDto, registry: &dyn DatasourceRegistry) -> RichHistoryQuery {
    let datasource_name = registry
        .resolve_name(&dto.datasource_uid)
        .unwrap_or_else(|err| {
            warn!(history_uid = %dto.uid, "{err}, leaving datasource name empty");
            String::new()
        });

    RichHistoryQuery {
        id: dto.uid,
        created_at: dto.created_at.saturating_mul(MILLIS_PER_SEC),
        datasource_uid: dto.datasource_uid,
        datasource_name,
        starred: dto.starred,
        comment: dto.comment,
        queries: dto.queries,
    }
}
