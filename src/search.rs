//! Query execution against the product store
//!
//! This module implements the read side of the catalog: the paginated
//! search executor plus the simpler auxiliary listings (latest, featured,
//! select feeds). Every function takes the database handle explicitly and
//! returns `Result`, so data-access failures surface to the handler
//! boundary instead of being swallowed here.

use redb::{Database, ReadOnlyTable, ReadableDatabase, ReadableTable};
use std::cmp::Ordering;

use crate::database::{StoreError, TABLE_CATEGORIES, TABLE_PRODUCTS};
use crate::model::{Category, FeaturedProduct, Product, ProductSummary, SearchResult, SelectOption};
use crate::query::{SearchQuery, SortField, SortOrder};

/// Runs a normalized search query and returns one page of results
///
/// The count and the page fetch run against the same read transaction (a
/// redb snapshot) and share the same predicate, so `total` and
/// `totalPages` are always consistent with the returned page.
///
/// Ordering: per the query's sort clause, or the store's default order
/// (ascending product id) when it carries none. Products without a
/// discount price sort after all priced ones in both directions. Ties keep
/// store order (the sort is stable), so identical requests return
/// identical pages.
pub fn search_products(db: &Database, query: &SearchQuery) -> Result<SearchResult, StoreError> {
    let read_txn = db.begin_read()?;
    let table = read_txn.open_table(TABLE_PRODUCTS)?;

    let mut matching: Vec<Product> = collect_products(&table)?
        .into_iter()
        .filter(|product| query.matches(product))
        .collect();

    let total = matching.len();
    sort_products(&mut matching, query.sort);

    let data: Vec<ProductSummary> = matching
        .into_iter()
        .skip(query.offset())
        .take(query.page_size)
        .map(ProductSummary::from)
        .collect();

    Ok(SearchResult {
        data,
        total,
        current_page: query.page,
        total_pages: total.div_ceil(query.page_size),
    })
}

/// Returns the `limit` most recently updated products, newest first
///
/// Visibility is deliberately not filtered here: the listing feeds an
/// admin-facing "what changed" strip as well as the storefront sidebar.
pub fn latest_products(db: &Database, limit: usize) -> Result<Vec<ProductSummary>, StoreError> {
    let read_txn = db.begin_read()?;
    let table = read_txn.open_table(TABLE_PRODUCTS)?;

    let mut products = collect_products(&table)?;
    products.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));

    Ok(products
        .into_iter()
        .take(limit)
        .map(ProductSummary::from)
        .collect())
}

/// Returns all publicly visible products, sorted by name ascending,
/// projected for the landing-page featured strip
pub fn featured_products(db: &Database) -> Result<Vec<FeaturedProduct>, StoreError> {
    let read_txn = db.begin_read()?;
    let table = read_txn.open_table(TABLE_PRODUCTS)?;

    let mut products: Vec<Product> = collect_products(&table)?
        .into_iter()
        .filter(|product| product.is_show)
        .collect();
    products.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(products.into_iter().map(FeaturedProduct::from).collect())
}

/// Returns every product as an id/name pair, sorted by name ascending.
/// Feeds select boxes; visibility is not filtered.
pub fn products_for_select(db: &Database) -> Result<Vec<SelectOption>, StoreError> {
    let read_txn = db.begin_read()?;
    let table = read_txn.open_table(TABLE_PRODUCTS)?;

    let mut products = collect_products(&table)?;
    products.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(products
        .into_iter()
        .map(|p| SelectOption {
            id: p.id,
            name: p.name,
        })
        .collect())
}

/// Returns all categories sorted by name ascending, for the filter sidebar
pub fn list_categories(db: &Database) -> Result<Vec<Category>, StoreError> {
    let read_txn = db.begin_read()?;
    let table = read_txn.open_table(TABLE_CATEGORIES)?;

    let mut categories = Vec::new();
    for entry in table.iter()? {
        let (_, value) = entry?;
        categories.push(serde_json::from_str::<Category>(value.value())?);
    }
    categories.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(categories)
}

/// Decodes every product in the table, in key (id) order
fn collect_products(
    table: &ReadOnlyTable<&'static str, &'static str>,
) -> Result<Vec<Product>, StoreError> {
    let mut products = Vec::new();
    for entry in table.iter()? {
        let (_, value) = entry?;
        products.push(serde_json::from_str::<Product>(value.value())?);
    }
    Ok(products)
}

fn sort_products(products: &mut [Product], sort: Option<(SortField, SortOrder)>) {
    let Some((field, order)) = sort else {
        // No clause: leave the store's id order untouched
        return;
    };

    match field {
        SortField::Name => match order {
            SortOrder::Asc => products.sort_by(|a, b| a.name.cmp(&b.name)),
            SortOrder::Desc => products.sort_by(|a, b| b.name.cmp(&a.name)),
        },
        SortField::UpdatedAt => match order {
            SortOrder::Asc => products.sort_by(|a, b| a.updated_at.cmp(&b.updated_at)),
            SortOrder::Desc => products.sort_by(|a, b| b.updated_at.cmp(&a.updated_at)),
        },
        SortField::DiscountPrice => {
            products.sort_by(|a, b| cmp_discount(a, b, order));
        }
    }
}

/// Discount-price comparison with the nulls-last policy: products without
/// a discount price come after all priced ones, whichever the direction.
fn cmp_discount(a: &Product, b: &Product, order: SortOrder) -> Ordering {
    match (a.discount_price, b.discount_price) {
        (Some(x), Some(y)) => match order {
            SortOrder::Asc => x.cmp(&y),
            SortOrder::Desc => y.cmp(&x),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
