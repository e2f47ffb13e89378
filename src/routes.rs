//! Axum handlers and router for the read API.
//!
//! Every listing endpoint runs the same pipeline: decode the query string,
//! narrow a fresh [`QueryDescriptor`] through [`apply_filters`], paginate it
//! against the shared [`ReadStore`], and answer with the page envelope plus
//! a `Content-Range` header.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::HeaderMap,
    routing::get,
};
use sea_orm::DatabaseConnection;
use utoipa::OpenApi;

use crate::errors::ApiError;
use crate::filtering::{
    FilterValue, Predicate, QueryDescriptor, QueryParams, ResourceKind, apply_filters,
};
use crate::pagination::{
    PageEnvelope, PageQuery, PageRequest, PaginationSettings, calculate_content_range, paginate,
};
use crate::store::ReadStore;

/// Shared handler state: the store and the page-size policy.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn ReadStore>,
    pagination: PaginationSettings,
}

impl AppState {
    #[must_use]
    pub fn new(db: DatabaseConnection, pagination: PaginationSettings) -> Self {
        Self::with_store(Arc::new(db), pagination)
    }

    #[must_use]
    pub fn with_store(store: Arc<dyn ReadStore>, pagination: PaginationSettings) -> Self {
        Self { store, pagination }
    }

    #[must_use]
    pub fn store(&self) -> &dyn ReadStore {
        self.store.as_ref()
    }

    #[must_use]
    pub const fn pagination(&self) -> PaginationSettings {
        self.pagination
    }
}

type ListResponse = Result<(HeaderMap, Json<PageEnvelope>), ApiError>;

/// Filter, paginate and shape one listing request.
///
/// # Errors
///
/// Returns [`ApiError::Database`] when the store fails.
pub async fn list_resource(
    state: &AppState,
    query: QueryDescriptor,
    params: &QueryParams,
) -> ListResponse {
    let query = apply_filters(params, query);
    let request = PageRequest::from_params(params, &state.pagination);
    let envelope = paginate(state.store(), &query, request).await?;
    let headers = calculate_content_range(
        request.offset(),
        envelope.items.len() as u64,
        envelope.total_items,
        query.resource().name_plural(),
    );
    Ok((headers, Json(envelope)))
}

/// Fetch one row by its primary key.
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] when no row matches or `kind` has no
/// single-column key, and [`ApiError::Database`] when the store fails.
pub async fn get_resource(
    state: &AppState,
    kind: ResourceKind,
    id: String,
) -> Result<Json<serde_json::Value>, ApiError> {
    let Some(id_column) = kind.id_column() else {
        return Err(ApiError::not_found(kind.name_singular(), Some(id)));
    };
    let query = QueryDescriptor::new(kind)
        .with(Predicate::eq(id_column, FilterValue::Text(id.clone())));
    let mut rows = state.store().fetch(&query, 0, 1).await?;
    match rows.pop() {
        Some(row) => Ok(Json(row)),
        None => Err(ApiError::not_found(kind.name_singular(), Some(id))),
    }
}

macro_rules! resource_handlers {
    ($module:ident, $kind:ident, $tag:literal, $list_path:literal, $one_path:literal) => {
        pub mod $module {
            use super::*;

            /// Filtered, paginated listing. Unknown or invalid filter
            /// parameters are ignored.
            #[utoipa::path(
                get,
                path = $list_path,
                params(PageQuery),
                responses(
                    (status = 200, description = "One page of matching rows"),
                    (status = 500, description = "Internal Server Error")
                ),
                tag = $tag
            )]
            pub async fn get_all_handler(
                State(state): State<AppState>,
                Query(pairs): Query<Vec<(String, String)>>,
            ) -> ListResponse {
                list_resource(
                    &state,
                    QueryDescriptor::new(ResourceKind::$kind),
                    &QueryParams::from_pairs(pairs),
                )
                .await
            }

            /// One row by ID.
            #[utoipa::path(
                get,
                path = $one_path,
                params(("id" = String, Path, description = "Primary key")),
                responses(
                    (status = 200, description = "The requested row"),
                    (status = 404, description = "Not found"),
                    (status = 500, description = "Internal Server Error")
                ),
                tag = $tag
            )]
            pub async fn get_one_handler(
                State(state): State<AppState>,
                Path(id): Path<String>,
            ) -> Result<Json<serde_json::Value>, ApiError> {
                get_resource(&state, ResourceKind::$kind, id).await
            }
        }
    };
}

resource_handlers!(addresses, Address, "addresses", "/api/addresses", "/api/addresses/{id}");
resource_handlers!(products, Product, "products", "/api/products", "/api/products/{id}");
resource_handlers!(orders, Order, "orders", "/api/orders", "/api/orders/{id}");
resource_handlers!(
    transactions,
    Transaction,
    "transactions",
    "/api/transactions",
    "/api/transactions/{id}"
);
resource_handlers!(users, User, "users", "/api/users", "/api/users/{id}");

pub mod cart_items {
    use super::*;

    const CART_SCOPE: &str = match ResourceKind::CartItem.scope_column() {
        Some(column) => column,
        None => panic!("cart items are listed per cart"),
    };

    /// Paginated items of one cart.
    #[utoipa::path(
        get,
        path = "/api/cart_items/{cart_id}",
        params(
            ("cart_id" = String, Path, description = "Cart identifier"),
            PageQuery
        ),
        responses(
            (status = 200, description = "One page of cart items"),
            (status = 500, description = "Internal Server Error")
        ),
        tag = "cart_items"
    )]
    pub async fn get_by_cart_handler(
        State(state): State<AppState>,
        Path(cart_id): Path<String>,
        Query(pairs): Query<Vec<(String, String)>>,
    ) -> ListResponse {
        let query = QueryDescriptor::new(ResourceKind::CartItem)
            .with(Predicate::eq(CART_SCOPE, FilterValue::Text(cart_id)));
        list_resource(&state, query, &QueryParams::from_pairs(pairs)).await
    }
}

#[derive(OpenApi)]
#[openapi(
    info(title = "Atorbazar read API", description = "Filtered, paginated listings"),
    paths(
        addresses::get_all_handler,
        addresses::get_one_handler,
        products::get_all_handler,
        products::get_one_handler,
        orders::get_all_handler,
        orders::get_one_handler,
        transactions::get_all_handler,
        transactions::get_one_handler,
        users::get_all_handler,
        users::get_one_handler,
        cart_items::get_by_cart_handler,
    )
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the application router.
#[must_use]
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/addresses", get(addresses::get_all_handler))
        .route("/api/addresses/{id}", get(addresses::get_one_handler))
        .route("/api/products", get(products::get_all_handler))
        .route("/api/products/{id}", get(products::get_one_handler))
        .route("/api/orders", get(orders::get_all_handler))
        .route("/api/orders/{id}", get(orders::get_one_handler))
        .route("/api/transactions", get(transactions::get_all_handler))
        .route("/api/transactions/{id}", get(transactions::get_one_handler))
        .route("/api/users", get(users::get_all_handler))
        .route("/api/users/{id}", get(users::get_one_handler))
        .route("/api/cart_items/{cart_id}", get(cart_items::get_by_cart_handler))
        .route("/api-docs/openapi.json", get(openapi_json))
        .with_state(state)
}
