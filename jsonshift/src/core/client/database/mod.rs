pub mod constant;
pub mod error;
pub mod postgres;

use crate::types::document::DocumentRow;
use async_trait::async_trait;
pub use error::DatabaseError;

/// Trait defining document store operations
///
/// The engine only ever reads rows by exact `schema_version` equality and
/// writes them back by primary key; everything else about the host table
/// (other columns, indexes, foreign keys) is invisible to it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DatabaseClient: Send + Sync {
    /// min_schema_version - The lowest `schema_version` present in the table,
    /// or 1 when the table is empty
    async fn min_schema_version(&self) -> Result<i32, DatabaseError>;

    /// get_rows_at_version - All rows whose `schema_version` equals `version`,
    /// in deterministic (primary key) order
    async fn get_rows_at_version(&self, version: i32) -> Result<Vec<DocumentRow>, DatabaseError>;

    /// update_row - Write back a migrated document and its new version by
    /// primary key
    async fn update_row(&self, row: &DocumentRow) -> Result<(), DatabaseError>;
}
