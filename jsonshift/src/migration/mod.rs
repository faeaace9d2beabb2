pub mod chain;
pub mod runner;
pub mod step;

pub use chain::MigrationChain;
pub use runner::MigrationRunner;
pub use step::{FnMigrationStep, MigrationStep, StepError};
