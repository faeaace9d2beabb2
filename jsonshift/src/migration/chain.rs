use super::step::MigrationStep;
use std::collections::BTreeMap;
use tracing::warn;

/// Orders an unordered set of migration steps by source version
///
/// Registration order is not significant; callers may register `v2 -> v3`
/// before `v1 -> v2`. Steps are indexed by source version so the runner can
/// resolve the applicable step for any row version in one lookup.
///
/// The chain does not verify contiguity. A gap between one step's target
/// and the next step's source strands rows at the gap version; that is
/// logged at construction but deliberately not rejected.
pub struct MigrationChain {
    steps: BTreeMap<i32, Box<dyn MigrationStep>>,
}

impl MigrationChain {
    pub fn new(steps: Vec<Box<dyn MigrationStep>>) -> Self {
        let mut indexed: BTreeMap<i32, Box<dyn MigrationStep>> = BTreeMap::new();
        for step in steps {
            let source_version = step.source_version();
            if indexed.insert(source_version, step).is_some() {
                warn!(source_version, "duplicate step for source version, keeping the last registered");
            }
        }

        let chain = Self { steps: indexed };
        if let Some((stranded_at, resumes_at)) = chain.first_gap() {
            warn!(stranded_at, resumes_at, "migration steps are not contiguous, rows will strand at the gap version");
        }
        chain
    }

    /// The single applicable step for a row currently at `version`, if any
    pub fn step_for(&self, version: i32) -> Option<&dyn MigrationStep> {
        self.steps.get(&version).map(Box::as_ref)
    }

    /// Steps in ascending source-version order — the order a pass walks them
    pub fn ordered(&self) -> impl Iterator<Item = &dyn MigrationStep> {
        self.steps.values().map(Box::as_ref)
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    fn first_gap(&self) -> Option<(i32, i32)> {
        let mut iter = self.steps.values();
        let mut prev = iter.next()?;
        for next in iter {
            if prev.target_version() != next.source_version() {
                return Some((prev.target_version(), next.source_version()));
            }
            prev = next;
        }
        None
    }
}
