/// Default advisory lock key for the document migration pass
///
/// A single fixed key is enough while one document table migrates as a
/// unit. Deployments with several independently migrating collections
/// should give each its own key via
/// [`MigrationArgs::lock_key`](crate::types::params::MigrationArgs).
pub const DEFAULT_LOCK_KEY: i64 = 7_391_825_001;
