//! Schema-evolution engine for JSON documents stored in a relational
//! document column.
//!
//! Host rows carry an integer `schema_version` alongside a `jsonb` document.
//! Registered [`MigrationStep`]s move documents forward one version at a
//! time; a Postgres session-scoped advisory lock guarantees that at most one
//! application instance runs a migration pass at any instant, so the engine
//! can be invoked unconditionally at startup on every node.

pub mod core;
pub mod error;
pub mod migration;
pub mod types;
pub mod utils;


// Re-export commonly used items
pub use error::{EngineError, EngineResult};
pub use migration::runner::{MigrationRunner, LOCK_NOT_ACQUIRED};
pub use migration::step::{FnMigrationStep, MigrationStep, StepError};
