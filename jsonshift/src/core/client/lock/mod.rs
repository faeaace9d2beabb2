pub mod constant;
pub mod error;
pub mod postgres;

use async_trait::async_trait;
use error::LockError;

/// Cross-process mutual exclusion for migration passes
///
/// Implementations are cooperative and non-blocking: `try_acquire` returns
/// immediately, and a `false` result means another session currently holds
/// the key. Whoever observes `true` owns the key until `release` or until
/// its store session terminates.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LockClient: Send + Sync {
    /// Attempt to acquire the lock without blocking
    async fn try_acquire(&self) -> Result<bool, LockError>;

    /// Release the lock. Must run on the same store session that acquired
    /// it; a no-op when the lock is not held.
    async fn release(&self) -> Result<(), LockError>;

    /// Whether this instance currently holds the lock
    async fn is_acquired(&self) -> bool;
}
