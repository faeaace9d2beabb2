use once_cell::sync::Lazy;
use opentelemetry::global;
use opentelemetry::metrics::{Counter, Histogram, Meter};

pub static ENGINE_METRICS: Lazy<EngineMetrics> = Lazy::new(EngineMetrics::register);

pub struct EngineMetrics {
    /// Row applications per step-transition pair, labelled with
    /// `from_version`, `to_version` and `outcome`
    pub migrated_rows: Counter<u64>,
    /// Per-row transform-and-persist duration for the same label set
    pub migration_duration: Histogram<f64>,
    /// Denied advisory lock acquisitions
    pub lock_contention: Counter<u64>,
    /// Response time of document store calls
    pub db_call_duration: Histogram<f64>,
}

impl EngineMetrics {
    pub fn register() -> Self {
        let meter: Meter = global::meter("jsonshift.opentelemetry");

        let migrated_rows = meter
            .u64_counter("migrated_rows")
            .with_description("Count of document row migrations per step transition")
            .with_unit("rows")
            .build();

        let migration_duration = meter
            .f64_histogram("migration_duration")
            .with_description("Time taken to transform and persist one document row")
            .with_unit("s")
            .build();

        let lock_contention = meter
            .u64_counter("lock_contention")
            .with_description("Count of denied migration lock acquisitions")
            .with_unit("attempts")
            .build();

        let db_call_duration = meter
            .f64_histogram("db_call_duration")
            .with_description("Response time of document store calls")
            .with_unit("s")
            .build();

        Self { migrated_rows, migration_duration, lock_contention, db_call_duration }
    }
}
