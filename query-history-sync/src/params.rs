//! Query string construction for history searches.

use crate::config::HistoryConfig;
use crate::registry::DatasourceRegistry;
use crate::types::RichHistorySearchFilters;
use tracing::warn;

/// Encodes `filters` as the query string of a `GET /api/query-history`
/// request.
///
/// Parameter order is fixed: `datasourceUid` (repeated, one per filter, in
/// input order), `searchString`, `sort`, `to`, `from`, `limit`, `page`,
/// `onlyStarred`. Values are percent-encoded.
///
/// The day window is crossed over: `filters.from` is sent as `to=now-<n>d`
/// and `filters.to` as `from=now-<n>d`. The backend depends on this.
///
/// A `page` of 0 falls back to `config.first_page`.
///
/// Datasource filters hold display names. A name the registry doesn't know
/// is sent as-is so the search stays restricted instead of matching every
/// datasource.
pub fn build_query_params(
    filters: &RichHistorySearchFilters,
    registry: &dyn DatasourceRegistry,
    config: &HistoryConfig,
) -> String {
    let mut params: Vec<(&str, String)> = Vec::with_capacity(filters.datasource_filters.len() + 7);

    for name in &filters.datasource_filters {
        let uid = registry.resolve_uid(name).unwrap_or_else(|err| {
            warn!("{err}, filtering by the raw name");
            name.clone()
        });
        params.push(("datasourceUid", uid));
    }

    params.push(("searchString", filters.search.clone()));
    params.push(("sort", filters.sort_order.as_param().to_string()));
    params.push(("to", format!("now-{}d", filters.from)));
    params.push(("from", format!("now-{}d", filters.to)));
    params.push(("limit", config.page_size.to_string()));
    params.push((
        "page",
        filters
            .page
            .filter(|page| *page > 0)
            .unwrap_or(config.first_page)
            .to_string(),
    ));
    params.push(("onlyStarred", filters.starred.to_string()));

    params
        .iter()
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}
