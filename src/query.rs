//! Search query normalization
//!
//! Translates the untyped query parameters of `GET /product/search` into a
//! validated [`SearchQuery`]. The transformation is pure and never fails:
//! malformed values degrade to defaults instead of being rejected, and only
//! allow-listed sort fields are honored.

use crate::model::{Product, SearchParams};

/// Default number of products per search page
pub const DEFAULT_PAGE_SIZE: usize = 4;

/// Default number of products returned by the latest-products listing
pub const DEFAULT_LATEST_LIMIT: usize = 4;

/// Fields the listing may be ordered by
///
/// A closed set so clients can never reference arbitrary fields; anything
/// outside it leaves the store's default ordering in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    /// Discounted price; products without one sort after all priced ones
    DiscountPrice,
    Name,
    UpdatedAt,
}

impl SortField {
    /// Maps a raw `sortBy` value onto the allow-list.
    /// Returns `None` for anything outside it.
    fn parse(raw: &str) -> Option<SortField> {
        match raw {
            "discount_price" => Some(SortField::DiscountPrice),
            "name" => Some(SortField::Name),
            "updatedAt" => Some(SortField::UpdatedAt),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Exactly `"desc"` means descending; any other value, including an
    /// absent one, means ascending.
    fn parse(raw: Option<&str>) -> SortOrder {
        match raw {
            Some("desc") => SortOrder::Desc,
            _ => SortOrder::Asc,
        }
    }
}

/// A normalized, validated search request
///
/// Built once per request by [`SearchQuery::from_params`] and consumed by
/// the executor in [`crate::search`]. The visibility filter is implicit:
/// every search matches only `isShow == true` products, and nothing a
/// client sends can change that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub category_id: Option<String>,
    pub brand_id: Option<String>,
    /// Case-insensitive substring filter on the product name, pre-lowercased
    pub term: Option<String>,
    pub sort: Option<(SortField, SortOrder)>,
    /// 1-based page number, always >= 1
    pub page: usize,
    /// Items per page, always >= 1
    pub page_size: usize,
}

impl SearchQuery {
    /// Normalizes raw request parameters into a `SearchQuery`
    ///
    /// - empty-string filters are treated as absent
    /// - `sortBy` outside {`discount_price`, `name`, `updatedAt`} is ignored
    /// - `page`/`pageSize` fall back to `1`/[`DEFAULT_PAGE_SIZE`] when
    ///   absent, unparsable, or zero
    pub fn from_params(params: SearchParams) -> SearchQuery {
        let sort = params
            .sort_by
            .as_deref()
            .and_then(SortField::parse)
            .map(|field| (field, SortOrder::parse(params.sort_order.as_deref())));

        SearchQuery {
            category_id: params.category_id.filter(|id| !id.is_empty()),
            brand_id: params.brand_id.filter(|id| !id.is_empty()),
            term: params
                .search
                .filter(|term| !term.is_empty())
                .map(|term| term.to_lowercase()),
            sort,
            page: parse_positive(params.page.as_deref()).unwrap_or(1),
            page_size: parse_positive(params.page_size.as_deref()).unwrap_or(DEFAULT_PAGE_SIZE),
        }
    }

    /// The filter predicate shared by the count and the page fetch.
    ///
    /// Keeping it in one place is what guarantees `total` and `totalPages`
    /// stay consistent with the returned page.
    pub fn matches(&self, product: &Product) -> bool {
        if !product.is_show {
            return false;
        }
        if let Some(category_id) = &self.category_id {
            if product.category_id.as_deref() != Some(category_id.as_str()) {
                return false;
            }
        }
        if let Some(brand_id) = &self.brand_id {
            if product.brand_id.as_deref() != Some(brand_id.as_str()) {
                return false;
            }
        }
        if let Some(term) = &self.term {
            if !product.name.to_lowercase().contains(term.as_str()) {
                return false;
            }
        }
        true
    }

    /// Number of rows to skip before the requested page starts
    ///
    /// Saturating: an absurdly large page number yields an offset past any
    /// catalog, so the page comes back empty with the totals intact instead
    /// of the multiplication wrapping.
    pub fn offset(&self) -> usize {
        self.page.saturating_sub(1).saturating_mul(self.page_size)
    }
}

/// Parses a positive integer, treating absent, unparsable and zero values
/// alike as "not provided"
fn parse_positive(raw: Option<&str>) -> Option<usize> {
    raw.and_then(|s| s.parse::<usize>().ok()).filter(|n| *n >= 1)
}

/// Parses the `limit` parameter of the latest-products listing
pub fn parse_limit(raw: Option<&str>) -> usize {
    parse_positive(raw).unwrap_or(DEFAULT_LATEST_LIMIT)
}
