use crate::core::client::lock::constant::DEFAULT_LOCK_KEY;

/// MigrationArgs - Arguments controlling a document migration pass
#[derive(Debug, Clone)]
pub struct MigrationArgs {
    /// When false, `migrate()` is a logged no-op returning 0.
    pub enabled: bool,
    /// When true, a denied lock acquisition is a fatal error instead of
    /// the `-1` skip sentinel.
    pub strict: bool,
    /// Advisory lock key; one key per independently migrating collection.
    pub lock_key: i64,
}

impl Default for MigrationArgs {
    fn default() -> Self {
        Self { enabled: true, strict: false, lock_key: DEFAULT_LOCK_KEY }
    }
}

impl MigrationArgs {
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    pub fn with_lock_key(mut self, lock_key: i64) -> Self {
        self.lock_key = lock_key;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}
