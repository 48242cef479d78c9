//! Route definitions for the storefront catalog API
//!
//! This module configures all HTTP routes and maps them to their respective
//! handlers. Every endpoint here is a public read; administrative mutations
//! are not exposed over HTTP.

use axum::routing::get;
use axum::Router;

use crate::database::AppState;
use crate::handler::{
    featured_products, latest_products, list_categories, product_select, search_products,
};

/// Creates and configures the axum application router
///
/// # Route Definitions
///
/// - `GET /product/search` - paginated search with filtering and sorting
/// - `GET /product/latest` - most recently updated products
/// - `GET /product/select` - id/name pairs for select boxes
/// - `GET /product-featured` - visible products for the featured strip
/// - `GET /category` - category list for the filter sidebar
///
/// # Example Usage
///
/// ```no_run
/// # use std::sync::Arc;
/// # use bloomshop::database::{init_db, AppState};
/// # use bloomshop::route::create_app;
/// # let db = init_db("data.db").unwrap();
/// let state = AppState { db: Arc::new(db) };
/// let app = create_app(state);
/// // axum::serve(listener, app).await.unwrap();
/// ```
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/product/search", get(search_products))
        .route("/product/latest", get(latest_products))
        .route("/product/select", get(product_select))
        .route("/product-featured", get(featured_products))
        .route("/category", get(list_categories))
        .with_state(state)
}
