use serde_json::Value;
use thiserror::Error;

/// Error raised by a step transform on a malformed or unexpected document
#[derive(Error, Debug)]
pub enum StepError {
    #[error("document root is not a JSON object")]
    NotAnObject,

    #[error("malformed document: {0}")]
    Malformed(String),

    #[error(transparent)]
    Serde(#[from] serde_json::Error),
}

/// A registered, stateless transformation from one schema version to the
/// next
///
/// `migrate` must be pure — no I/O, no side effects — and must preserve
/// every key it does not recognize; forward-compatible evolution depends on
/// that preservation guarantee. Transforms are not required to be
/// idempotent: the runner only ever feeds a step rows sitting at its exact
/// source version, so no document crosses the same step twice.
///
/// `target_version` is `source_version + 1` by convention, though the
/// engine does not enforce it. Registering two steps with the same source
/// version is unsupported; the chain keeps whichever was registered last.
pub trait MigrationStep: Send + Sync {
    /// The schema version this step reads
    fn source_version(&self) -> i32;

    /// The schema version this step produces
    fn target_version(&self) -> i32;

    /// Transform a document from the source version to the target version
    fn migrate(&self, document: Value) -> Result<Value, StepError>;
}

/// Closure-backed [`MigrationStep`] for hosts that prefer registering
/// transforms inline over writing one struct per version bump
pub struct FnMigrationStep<F> {
    source_version: i32,
    target_version: i32,
    transform: F,
}

impl<F> FnMigrationStep<F>
where
    F: Fn(Value) -> Result<Value, StepError> + Send + Sync,
{
    pub fn new(source_version: i32, target_version: i32, transform: F) -> Self {
        Self { source_version, target_version, transform }
    }
}

impl<F> MigrationStep for FnMigrationStep<F>
where
    F: Fn(Value) -> Result<Value, StepError> + Send + Sync,
{
    fn source_version(&self) -> i32 {
        self.source_version
    }

    fn target_version(&self) -> i32 {
        self.target_version
    }

    fn migrate(&self, document: Value) -> Result<Value, StepError> {
        (self.transform)(document)
    }
}
