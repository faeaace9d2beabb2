use super::error::DatabaseError;
use super::DatabaseClient;
use crate::types::document::DocumentRow;
use crate::types::params::DatabaseArgs;
use crate::utils::metrics::ENGINE_METRICS;
use async_trait::async_trait;
use futures::TryStreamExt;
use opentelemetry::KeyValue;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Instant;
use tracing::debug;

/// Postgres document store implementation
///
/// All SQL is runtime-checked (`sqlx::query`, not `sqlx::query!`) so the
/// crate builds without a live database; the table name comes from
/// [`DatabaseArgs`] since identifiers cannot be bound as parameters.
pub struct PostgresDbClient {
    pool: PgPool,
    table_name: String,
}

impl PostgresDbClient {
    pub async fn new(config: &DatabaseArgs) -> Result<Self, DatabaseError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.pool_size)
            .connect(&config.connection_uri)
            .await?;
        Ok(Self { pool, table_name: config.table_name.clone() })
    }

    /// Build a client over an existing pool, e.g. one shared with the host
    /// application.
    pub fn from_pool(pool: PgPool, table_name: impl Into<String>) -> Self {
        Self { pool, table_name: table_name.into() }
    }

    /// The pool uses Arc internally, so handing out clones is cheap.
    pub fn pool(&self) -> PgPool {
        self.pool.clone()
    }
}

#[async_trait]
impl DatabaseClient for PostgresDbClient {
    async fn min_schema_version(&self) -> Result<i32, DatabaseError> {
        let start = Instant::now();
        let sql = format!("SELECT COALESCE(MIN(schema_version), 1) FROM {}", self.table_name);
        let version: i32 = sqlx::query_scalar(&sql).fetch_one(&self.pool).await?;

        let attributes = [KeyValue::new("db_operation_name", "min_schema_version")];
        ENGINE_METRICS.db_call_duration.record(start.elapsed().as_secs_f64(), &attributes);
        Ok(version)
    }

    async fn get_rows_at_version(&self, version: i32) -> Result<Vec<DocumentRow>, DatabaseError> {
        let start = Instant::now();
        // Primary-key order keeps the pass deterministic.
        let sql = format!(
            "SELECT id, document, schema_version FROM {} WHERE schema_version = $1 ORDER BY id",
            self.table_name
        );

        let mut stream = sqlx::query_as::<_, DocumentRow>(&sql).bind(version).fetch(&self.pool);
        let mut rows = Vec::new();
        while let Some(row) = stream.try_next().await? {
            rows.push(row);
        }
        debug!(version, count = rows.len(), "selected document rows at version");

        let attributes = [KeyValue::new("db_operation_name", "get_rows_at_version")];
        ENGINE_METRICS.db_call_duration.record(start.elapsed().as_secs_f64(), &attributes);
        Ok(rows)
    }

    async fn update_row(&self, row: &DocumentRow) -> Result<(), DatabaseError> {
        let start = Instant::now();
        let sql = format!(
            "UPDATE {} SET document = $1, schema_version = $2, updated_at = NOW() WHERE id = $3",
            self.table_name
        );

        let result = sqlx::query(&sql)
            .bind(&row.document)
            .bind(row.schema_version)
            .bind(row.id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(DatabaseError::RowNotFound(row.id));
        }

        let attributes = [KeyValue::new("db_operation_name", "update_row")];
        ENGINE_METRICS.db_call_duration.record(start.elapsed().as_secs_f64(), &attributes);
        Ok(())
    }
}
