//! HTTP request handlers for the storefront catalog API
//!
//! This module wires the query builder and executor into axum handlers:
//! - Paginated product search with filtering and sorting
//! - Latest and featured product listings
//! - Select-box feeds for products and categories
//!
//! Handlers never degrade input errors to HTTP 4xx: malformed pagination
//! or sort parameters silently fall back to defaults. The only failure a
//! client sees is a bare 500 when the data store itself errors; the detail
//! goes to the log, not the response.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::database::{AppState, StoreError};
use crate::model::{LatestParams, SearchParams};
use crate::query::{parse_limit, SearchQuery};
use crate::search;

/// Maps a data-access failure to the only failure response the read path
/// produces: HTTP 500, no body detail. The error itself is logged.
fn internal_error(endpoint: &str, err: StoreError) -> Response {
    tracing::error!(endpoint, error = %err, "data access failed");
    StatusCode::INTERNAL_SERVER_ERROR.into_response()
}

/// Searches products with filtering, sorting and pagination
///
/// # Query Parameters
///
/// - `categoryId` (optional) - filter by category foreign key
/// - `brandId` (optional) - filter by brand foreign key
/// - `search` (optional) - case-insensitive substring match on the name
/// - `sortBy` (optional) - one of `discount_price`, `name`, `updatedAt`;
///   anything else leaves the store's default ordering
/// - `sortOrder` (optional) - `desc` for descending, otherwise ascending
/// - `page` (optional) - 1-based page number, default 1
/// - `pageSize` (optional) - items per page, default 4
///
/// Only visible products (`isShow == true`) are ever returned; the
/// visibility filter is injected server-side and applies to the total
/// count as well as the page.
///
/// # Example Request
///
/// `GET /product/search?categoryId=c1&search=rose&sortBy=name&page=2&pageSize=8`
///
/// # Response
///
/// ```json
/// {
///   "isOk": true,
///   "data": [...],
///   "total": 17,
///   "currentPage": 2,
///   "totalPages": 3,
///   "message": "Search products successfully!"
/// }
/// ```
pub async fn search_products(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Response {
    let query = SearchQuery::from_params(params);

    match search::search_products(&state.db, &query) {
        Ok(result) => (
            StatusCode::OK,
            Json(json!({
                "isOk": true,
                "data": result.data,
                "total": result.total,
                "currentPage": result.current_page,
                "totalPages": result.total_pages,
                "message": "Search products successfully!"
            })),
        )
            .into_response(),
        Err(err) => internal_error("/product/search", err),
    }
}

/// Returns the most recently updated products, newest first
///
/// # Query Parameters
///
/// - `limit` (optional) - maximum number of products, default 4
///
/// Visibility is not filtered on this listing.
pub async fn latest_products(
    State(state): State<AppState>,
    Query(params): Query<LatestParams>,
) -> Response {
    let limit = parse_limit(params.limit.as_deref());

    match search::latest_products(&state.db, limit) {
        Ok(products) => (
            StatusCode::OK,
            Json(json!({
                "isOk": true,
                "data": products,
                "message": "Get latest products successfully!"
            })),
        )
            .into_response(),
        Err(err) => internal_error("/product/latest", err),
    }
}

/// Returns all visible products for the landing-page featured strip,
/// sorted by name
pub async fn featured_products(State(state): State<AppState>) -> Response {
    match search::featured_products(&state.db) {
        Ok(products) => (
            StatusCode::OK,
            Json(json!({
                "isOk": true,
                "data": products,
                "message": "Get featured products successfully!"
            })),
        )
            .into_response(),
        Err(err) => internal_error("/product-featured", err),
    }
}

/// Returns every product as an id/name pair for select boxes
pub async fn product_select(State(state): State<AppState>) -> Response {
    match search::products_for_select(&state.db) {
        Ok(options) => (
            StatusCode::OK,
            Json(json!({
                "isOk": true,
                "data": options,
                "message": "Get list product successfully!"
            })),
        )
            .into_response(),
        Err(err) => internal_error("/product/select", err),
    }
}

/// Returns all categories for the filter sidebar, sorted by name
pub async fn list_categories(State(state): State<AppState>) -> Response {
    match search::list_categories(&state.db) {
        Ok(categories) => (
            StatusCode::OK,
            Json(json!({
                "isOk": true,
                "data": categories,
                "message": "Get list category successfully!"
            })),
        )
            .into_response(),
        Err(err) => internal_error("/category", err),
    }
}
