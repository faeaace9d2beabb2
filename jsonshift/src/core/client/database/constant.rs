/// Default table name for versioned document rows
///
/// The table must expose at minimum an `id` primary key, a `jsonb`
/// `document` column and an integer `schema_version` column. Override via
/// [`DatabaseArgs`](crate::types::params::DatabaseArgs) when the host
/// application uses its own naming.
pub const DOCUMENTS_TABLE: &str = "versioned_documents";

/// Default connection pool size for the document store client
pub const DEFAULT_POOL_SIZE: u32 = 5;
