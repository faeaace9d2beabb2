use super::chain::MigrationChain;
use super::step::MigrationStep;
use crate::core::client::database::DatabaseClient;
use crate::core::client::lock::LockClient;
use crate::error::{EngineError, EngineResult};
use crate::types::params::MigrationArgs;
use crate::utils::metrics::ENGINE_METRICS;
use opentelemetry::KeyValue;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Sentinel returned by [`MigrationRunner::migrate`] when another session
/// holds the lock and strict mode is off: "someone else is migrating, skip
/// this pass". Not an error.
pub const LOCK_NOT_ACQUIRED: i64 = -1;

/// Coordinates document schema migration across application instances
///
/// One `migrate()` call is one pass: acquire the advisory lock without
/// blocking, walk the step chain over every out-of-date row, release the
/// lock. Rows are committed one by one, so a pass halted mid-way retains
/// its progress and the next invocation resumes from whatever is still out
/// of date — repeated invocation is idempotent, and `Ok(0)` ("lock
/// acquired, nothing to do") is the expected steady state.
pub struct MigrationRunner {
    database: Arc<dyn DatabaseClient>,
    lock: Arc<dyn LockClient>,
    chain: MigrationChain,
    strict: bool,
    enabled: bool,
}

impl MigrationRunner {
    pub fn new(
        database: Arc<dyn DatabaseClient>,
        lock: Arc<dyn LockClient>,
        steps: Vec<Box<dyn MigrationStep>>,
        args: &MigrationArgs,
    ) -> Self {
        Self {
            database,
            lock,
            chain: MigrationChain::new(steps),
            strict: args.strict,
            enabled: args.enabled,
        }
    }

    /// Execute one migration pass
    ///
    /// Returns the number of row *applications* (a row crossing two steps in
    /// one pass counts twice), or [`LOCK_NOT_ACQUIRED`] when the lock was
    /// denied in non-strict mode.
    pub async fn migrate(&self) -> EngineResult<i64> {
        if !self.enabled {
            info!("document migration is disabled, skipping");
            return Ok(0);
        }
        if self.chain.is_empty() {
            info!("no migration steps registered, skipping");
            return Ok(0);
        }

        if !self.lock.try_acquire().await? {
            if self.strict {
                return Err(EngineError::LockHeldInStrictMode);
            }
            ENGINE_METRICS.lock_contention.add(1, &[]);
            info!("migration lock held by another session, skipping this pass");
            return Ok(LOCK_NOT_ACQUIRED);
        }

        // The lock is held from here on: release on every exit path before
        // surfacing the result.
        let result = self.run_chain().await;
        if let Err(err) = self.lock.release().await {
            warn!(error = %err, "failed to release migration lock");
        }
        result
    }

    async fn run_chain(&self) -> EngineResult<i64> {
        let min_version = self.database.min_schema_version().await?;
        debug!(min_version, "current minimum document schema version");

        let mut total: i64 = 0;
        for step in self.chain.ordered() {
            if step.source_version() < min_version {
                debug!(
                    from_version = step.source_version(),
                    to_version = step.target_version(),
                    "skipping step, already past its source version"
                );
                continue;
            }
            total += self.apply_step(step).await?;
        }

        info!(total, "document migration pass complete");
        Ok(total)
    }

    async fn apply_step(&self, step: &dyn MigrationStep) -> EngineResult<i64> {
        let rows = self.database.get_rows_at_version(step.source_version()).await?;
        let mut applied: i64 = 0;

        for mut row in rows {
            let start = Instant::now();
            let migrated = match step.migrate(row.document) {
                Ok(document) => document,
                Err(err) => {
                    ENGINE_METRICS.migrated_rows.add(1, &step_attributes(step, "failure"));
                    return Err(EngineError::Transform {
                        source_version: step.source_version(),
                        target_version: step.target_version(),
                        row_id: row.id,
                        source: err,
                    });
                }
            };

            row.document = migrated;
            row.schema_version = step.target_version();
            self.database.update_row(&row).await?;

            applied += 1;
            let attributes = step_attributes(step, "success");
            ENGINE_METRICS.migrated_rows.add(1, &attributes);
            ENGINE_METRICS.migration_duration.record(start.elapsed().as_secs_f64(), &attributes);
        }

        info!(
            applied,
            from_version = step.source_version(),
            to_version = step.target_version(),
            "applied migration step"
        );
        Ok(applied)
    }
}

fn step_attributes(step: &dyn MigrationStep, outcome: &'static str) -> [KeyValue; 3] {
    [
        KeyValue::new("from_version", i64::from(step.source_version())),
        KeyValue::new("to_version", i64::from(step.target_version())),
        KeyValue::new("outcome", outcome),
    ]
}
