use super::error::LockError;
use super::LockClient;
use async_trait::async_trait;
use sqlx::{Connection, PgConnection};
use tokio::sync::Mutex;
use tracing::{info, warn};

/// Postgres session-scoped advisory lock
///
/// Holds a **dedicated** connection (never pooled) for the whole
/// acquire → work → release sequence. Advisory locks are session-scoped:
/// returning the connection to a pool while the lock is held would leave
/// the key locked until the physical connection closes, starving every
/// future migration attempt. Keeping the session private also means a
/// crashed process releases the lock automatically when Postgres reaps
/// the connection.
pub struct PgAdvisoryLock {
    connection_uri: String,
    lock_key: i64,
    session: Mutex<Option<PgConnection>>,
}

impl PgAdvisoryLock {
    pub fn new(connection_uri: impl Into<String>, lock_key: i64) -> Self {
        Self { connection_uri: connection_uri.into(), lock_key, session: Mutex::new(None) }
    }

    pub fn lock_key(&self) -> i64 {
        self.lock_key
    }
}

#[async_trait]
impl LockClient for PgAdvisoryLock {
    async fn try_acquire(&self) -> Result<bool, LockError> {
        let mut session = self.session.lock().await;
        if session.is_some() {
            // This instance already holds the key; an in-process second
            // caller is denied just like a second process would be.
            return Ok(false);
        }

        let mut conn = PgConnection::connect(&self.connection_uri).await?;
        let acquired: bool = sqlx::query_scalar("SELECT pg_try_advisory_lock($1)")
            .bind(self.lock_key)
            .fetch_one(&mut conn)
            .await?;

        if acquired {
            info!(lock_key = self.lock_key, "acquired advisory lock for document migration");
            *session = Some(conn);
        } else {
            info!(lock_key = self.lock_key, "advisory lock already held by another session");
            if let Err(err) = conn.close().await {
                warn!(error = %err, "failed to close lock connection after denial");
            }
        }
        Ok(acquired)
    }

    async fn release(&self) -> Result<(), LockError> {
        let mut session = self.session.lock().await;
        let Some(mut conn) = session.take() else {
            return Ok(());
        };

        // Closing the session releases the lock even if the unlock call
        // fails, so a failed unlock is logged rather than propagated.
        let unlock = sqlx::query("SELECT pg_advisory_unlock($1)")
            .bind(self.lock_key)
            .execute(&mut conn)
            .await;
        match unlock {
            Ok(_) => info!(lock_key = self.lock_key, "released advisory lock"),
            Err(err) => warn!(lock_key = self.lock_key, error = %err, "failed to release advisory lock"),
        }

        if let Err(err) = conn.close().await {
            warn!(error = %err, "failed to close dedicated lock connection");
        }
        Ok(())
    }

    async fn is_acquired(&self) -> bool {
        self.session.lock().await.is_some()
    }
}
