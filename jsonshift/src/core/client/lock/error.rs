use thiserror::Error;

#[derive(Error, Debug)]
pub enum LockError {
    #[error("Failed to interact with lock session: {0}")]
    Sqlx(#[from] sqlx::Error),
}
