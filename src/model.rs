//! Data models for the storefront catalog API
//!
//! This module defines all the data structures used throughout the application:
//! the stored product/category records, the listing projections sent to the
//! client, and the raw query-parameter payloads accepted by the handlers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A product record as stored in the database
///
/// Field names mirror the JSON wire format exactly (a mix of snake_case
/// price fields and camelCase bookkeeping fields, kept for compatibility
/// with the storefront client).
///
/// Invariant: `discount_price`, when present, is logically less than or
/// equal to `original_price`. The read path does not enforce this; the
/// write helpers document it.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Product {
    /// Opaque unique identifier, also the database key
    pub id: String,

    /// Display name, target of the free-text search filter
    pub name: String,

    /// List price in minor currency units
    pub original_price: i64,

    /// Discounted price in minor currency units, if a promotion is active
    pub discount_price: Option<i64>,

    /// Short marketing description shown on listing cards
    pub description: String,

    /// Reference to the thumbnail image resource
    pub thumbnail: String,

    /// Optional category foreign key (many products to one category)
    #[serde(rename = "categoryId")]
    pub category_id: Option<String>,

    /// Optional brand foreign key
    #[serde(rename = "brandId")]
    pub brand_id: Option<String>,

    /// Visibility flag: whether the product is publicly listable.
    /// Always filtered to `true` for the public search listing.
    #[serde(rename = "isShow")]
    pub is_show: bool,

    /// Timestamp of the last administrative update
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// A category record as stored in the database
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Category {
    pub id: String,

    /// Display name shown in the filter sidebar
    pub name: String,
}

/// Listing projection of a product: the subset of fields the search and
/// latest-products listings need. Prices, description and thumbnail are
/// included; visibility and foreign keys are not.
#[derive(Serialize, Debug, Clone)]
pub struct ProductSummary {
    pub id: String,
    pub name: String,
    pub discount_price: Option<i64>,
    pub original_price: i64,
    pub description: String,
    pub thumbnail: String,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductSummary {
    fn from(p: Product) -> Self {
        ProductSummary {
            id: p.id,
            name: p.name,
            discount_price: p.discount_price,
            original_price: p.original_price,
            description: p.description,
            thumbnail: p.thumbnail,
            updated_at: p.updated_at,
        }
    }
}

/// Minimal projection for select-box feeds (`/product/select`, `/category`)
#[derive(Serialize, Debug, Clone)]
pub struct SelectOption {
    pub id: String,
    pub name: String,
}

/// Projection for the featured-products strip on the landing page
#[derive(Serialize, Debug, Clone)]
pub struct FeaturedProduct {
    pub id: String,
    pub name: String,
    pub thumbnail: String,
    pub description: String,
}

impl From<Product> for FeaturedProduct {
    fn from(p: Product) -> Self {
        FeaturedProduct {
            id: p.id,
            name: p.name,
            thumbnail: p.thumbnail,
            description: p.description,
        }
    }
}

/// Raw query parameters for `GET /product/search`
///
/// Every field is an optional string so that malformed input (for example a
/// non-numeric `page`) never fails extraction; normalization and defaulting
/// happen in [`crate::query::SearchQuery::from_params`]. Unknown query keys
/// are ignored by serde.
///
/// # Example
/// Query string: `?categoryId=c1&search=rose&sortBy=name&page=2&pageSize=8`
#[derive(Deserialize, Debug, Default)]
pub struct SearchParams {
    #[serde(rename = "categoryId")]
    pub category_id: Option<String>,

    #[serde(rename = "brandId")]
    pub brand_id: Option<String>,

    /// Free-text term, matched as a case-insensitive substring of the name
    pub search: Option<String>,

    #[serde(rename = "sortBy")]
    pub sort_by: Option<String>,

    #[serde(rename = "sortOrder")]
    pub sort_order: Option<String>,

    /// 1-based page number; defaults to 1 when absent or unparsable
    pub page: Option<String>,

    /// Items per page; defaults to 4 when absent or unparsable
    #[serde(rename = "pageSize")]
    pub page_size: Option<String>,
}

/// Query parameters for `GET /product/latest`
#[derive(Deserialize, Debug, Default)]
pub struct LatestParams {
    /// Maximum number of products to return; defaults to 4
    pub limit: Option<String>,
}

/// One page of search results plus the pagination metadata derived from
/// the total matching count
#[derive(Serialize, Debug)]
pub struct SearchResult {
    pub data: Vec<ProductSummary>,

    /// Total number of products matching the filter, across all pages
    pub total: usize,

    #[serde(rename = "currentPage")]
    pub current_page: usize,

    /// `ceil(total / pageSize)`; always consistent with `total` because the
    /// count and the page are produced from the same predicate and snapshot
    #[serde(rename = "totalPages")]
    pub total_pages: usize,
}
