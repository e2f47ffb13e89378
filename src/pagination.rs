//! Page-number pagination over a [`ReadStore`].
//!
//! A listing is always two store round-trips issued together: a fetch
//! bounded by `limit` at `(page - 1) * limit`, and a count over the same
//! predicates. No explicit ordering is imposed; rows come back in the
//! store's natural order, which is not guaranteed to be stable.
//!
//! Envelope policy:
//! - `totalPages = ceil(totalItems / limit)`
//! - an empty result has `totalPages = 0` and `currentPage = 1`
//! - a page past the end returns no items and reports the last page as
//!   `currentPage`

use axum::http::header::{CONTENT_RANGE, HeaderMap, HeaderValue};
use sea_orm::DbErr;
use serde::Serialize;
use serde_json::Value as JsonValue;
use utoipa::IntoParams;

use crate::filtering::{ParamValue, QueryDescriptor, QueryParams};
use crate::store::ReadStore;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 10;
pub const DEFAULT_MAX_LIMIT: u64 = 100;

/// Largest offset the SQL drivers bind; anything beyond is past the end anyway.
pub const MAX_OFFSET: u64 = i64::MAX.unsigned_abs();

/// Page-size policy, taken from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationSettings {
    /// Limit used when the request gives none or an invalid one.
    pub default_limit: u64,
    /// Larger requested limits are clamped to this.
    pub max_limit: u64,
}

impl Default for PaginationSettings {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_LIMIT,
            max_limit: DEFAULT_MAX_LIMIT,
        }
    }
}

/// Query parameters for page-number pagination.
///
/// Only used to document the listing endpoints; the values are read from
/// the raw parameter map by [`PageRequest::from_params`] so that a bad
/// value falls back to the default instead of rejecting the request.
#[derive(Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// Page number, 1-based. Defaults to `1`.
    #[param(example = 1)]
    pub page: Option<u64>,
    /// Items per page. Defaults to `10`, capped by the server's maximum.
    #[param(example = 10)]
    pub limit: Option<u64>,
}

/// Validated page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub limit: u64,
}

impl PageRequest {
    /// Read `page` and `limit` from the query string. Missing, non-integer
    /// or non-positive values fall back to the defaults.
    #[must_use]
    pub fn from_params(params: &QueryParams, settings: &PaginationSettings) -> Self {
        let page = positive_integer(params.get("page")).unwrap_or(DEFAULT_PAGE);
        let limit = positive_integer(params.get("limit"))
            .unwrap_or(settings.default_limit)
            .min(settings.max_limit.max(1));
        Self { page, limit }
    }

    /// `(page - 1) * limit`, capped at [`MAX_OFFSET`].
    #[must_use]
    pub const fn offset(&self) -> u64 {
        let offset = self.page.saturating_sub(1).saturating_mul(self.limit);
        if offset > MAX_OFFSET { MAX_OFFSET } else { offset }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

fn positive_integer(raw: Option<&ParamValue>) -> Option<u64> {
    raw?.as_single()?
        .trim()
        .parse::<u64>()
        .ok()
        .filter(|value| *value >= 1)
}

/// Uniform response body of every listing endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageEnvelope<T = JsonValue> {
    pub items: Vec<T>,
    pub total_items: u64,
    pub current_page: u64,
    pub total_pages: u64,
}

impl<T> PageEnvelope<T> {
    /// Shape a fetched page and its total count.
    #[must_use]
    pub fn new(items: Vec<T>, total_items: u64, request: PageRequest) -> Self {
        let total_pages = total_pages(total_items, request.limit);
        let current_page = if total_items == 0 {
            DEFAULT_PAGE
        } else {
            request.page.min(total_pages)
        };
        Self {
            items,
            total_items,
            current_page,
            total_pages,
        }
    }
}

#[must_use]
pub const fn total_pages(total_items: u64, limit: u64) -> u64 {
    if limit == 0 {
        return 0;
    }
    total_items.div_ceil(limit)
}

/// Run the bounded fetch and the count concurrently and build the envelope.
///
/// # Errors
///
/// Returns the store's `DbErr` if either query fails; no partial envelope is
/// produced.
pub async fn paginate(
    store: &dyn ReadStore,
    query: &QueryDescriptor,
    request: PageRequest,
) -> Result<PageEnvelope, DbErr> {
    let (items, total_items) = tokio::try_join!(
        store.fetch(query, request.offset(), request.limit),
        store.count(query),
    )?;
    tracing::debug!(
        resource = %query.resource(),
        predicates = query.predicates().len(),
        page = request.page,
        limit = request.limit,
        total_items,
        "Fetched page"
    );
    Ok(PageEnvelope::new(items, total_items, request))
}

/// Remove characters that cannot appear in a header value.
fn sanitize_resource_name(name: &str) -> String {
    name.chars().filter(|c| c.is_ascii() && !c.is_ascii_control()).collect()
}

/// Build the `Content-Range` header for a returned page.
///
/// `<resource> <first>-<last>/<total>` for a non-empty page and
/// `<resource> */<total>` when the page holds no items.
#[must_use]
pub fn calculate_content_range(
    offset: u64,
    returned: u64,
    total_count: u64,
    resource_name: &str,
) -> HeaderMap {
    let safe_name = sanitize_resource_name(resource_name);
    let content_range = if returned == 0 {
        format!("{safe_name} */{total_count}")
    } else {
        let last = offset.saturating_add(returned - 1);
        format!("{safe_name} {offset}-{last}/{total_count}")
    };

    let mut headers = HeaderMap::new();
    let value = HeaderValue::from_str(&content_range)
        .unwrap_or_else(|_| HeaderValue::from_static("items */0"));
    headers.insert(CONTENT_RANGE, value);
    headers
}
