use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Failed to interact with database: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// An update matched no row. Only possible if an out-of-band writer
    /// deleted the row between select and update.
    #[error("No row found for id {0}")]
    RowNotFound(Uuid),
}
