use thiserror::Error;
use uuid::Uuid;

use crate::core::client::database::DatabaseError;
use crate::core::client::lock::error::LockError;
use crate::migration::step::StepError;

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Error types for the migration engine
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    #[error("Lock error: {0}")]
    Lock(#[from] LockError),

    /// Raised instead of returning the `-1` sentinel when strict mode is on.
    #[error("migration lock is held by another session and strict mode is enabled")]
    LockHeldInStrictMode,

    /// A step's transform rejected a document. Fatal: the pass halts with
    /// enough context to find the offending row.
    #[error("migration step v{source_version} -> v{target_version} failed on row {row_id}: {source}")]
    Transform {
        source_version: i32,
        target_version: i32,
        row_id: Uuid,
        source: StepError,
    },
}
