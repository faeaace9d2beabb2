use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// One persisted record subject to schema evolution
///
/// The engine never creates or deletes rows and never touches `id`; it only
/// rewrites `document` and bumps `schema_version`, which strictly increases
/// over the row's lifetime. By convention the document also carries its own
/// `"schemaVersion"` key mirroring the column — steps are expected to keep
/// it in sync, the engine does not enforce it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct DocumentRow {
    pub id: Uuid,
    pub document: Value,
    pub schema_version: i32,
}

impl DocumentRow {
    pub fn new(id: Uuid, document: Value, schema_version: i32) -> Self {
        Self { id, document, schema_version }
    }
}
