//! Database initialization, table definitions and write helpers
//!
//! This module handles the setup and configuration of the embedded redb
//! database. It defines the catalog tables, the shared application state,
//! and the write helpers used by seeding tools and tests. The storefront
//! HTTP surface itself is read-only; administrative mutations go through
//! these helpers from outside the request path.

use redb::{Database, TableDefinition};
use std::sync::Arc;
use thiserror::Error;

use crate::model::{Category, Product};

/// Main table for storing product records
///
/// Key: product id as string
/// Value: JSON-serialized Product as string
///
/// Iteration order over this table (ascending id) is the store's default
/// ordering, used whenever a search carries no sort clause.
pub const TABLE_PRODUCTS: TableDefinition<&str, &str> = TableDefinition::new("products_v1");

/// Table for category records
///
/// Key: category id as string
/// Value: JSON-serialized Category as string
pub const TABLE_CATEGORIES: TableDefinition<&str, &str> = TableDefinition::new("categories_v1");

/// Errors surfaced by the data-access layer
///
/// Handlers map every variant to a bare HTTP 500; the distinction only
/// matters for logging.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("record decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Application state shared across all request handlers
///
/// The database handle is constructed in `main` (or a test harness) and
/// injected here; nothing in the crate reaches for a global connection.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe reference to the embedded database
    pub db: Arc<Database>,
}

/// Initializes the embedded database and creates the catalog tables
///
/// Creates or opens the database file at the specified path, opens both
/// tables so they exist for later read transactions, and commits.
///
/// # Example
///
/// ```no_run
/// # use bloomshop::database::init_db;
/// let db = init_db("data.db").expect("Failed to initialize database");
/// ```
pub fn init_db(db_path: &str) -> Result<Database, StoreError> {
    let db = Database::create(db_path)?;

    let write_txn = db.begin_write()?;
    {
        write_txn.open_table(TABLE_PRODUCTS)?;
        write_txn.open_table(TABLE_CATEGORIES)?;
    }
    write_txn.commit()?;

    Ok(db)
}

/// Inserts or replaces a product record
///
/// Callers are expected to uphold the pricing invariant: a present
/// `discount_price` must not exceed `original_price`. The read path
/// assumes it rather than checking it.
pub fn put_product(db: &Database, product: &Product) -> Result<(), StoreError> {
    let record_json = serde_json::to_string(product)?;

    let write_txn = db.begin_write()?;
    {
        let mut table = write_txn.open_table(TABLE_PRODUCTS)?;
        table.insert(product.id.as_str(), record_json.as_str())?;
    }
    write_txn.commit()?;

    Ok(())
}

/// Inserts or replaces a category record
pub fn put_category(db: &Database, category: &Category) -> Result<(), StoreError> {
    let record_json = serde_json::to_string(category)?;

    let write_txn = db.begin_write()?;
    {
        let mut table = write_txn.open_table(TABLE_CATEGORIES)?;
        table.insert(category.id.as_str(), record_json.as_str())?;
    }
    write_txn.commit()?;

    Ok(())
}
