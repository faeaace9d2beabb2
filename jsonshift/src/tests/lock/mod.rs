use crate::core::client::lock::constant::DEFAULT_LOCK_KEY;
use crate::core::client::lock::postgres::PgAdvisoryLock;
use crate::core::client::lock::LockClient;
use crate::tests::common::InMemoryLock;
use rstest::*;

#[rstest]
#[tokio::test]
async fn lock_denies_second_acquisition_until_released() {
    let lock = InMemoryLock::new();

    assert!(lock.try_acquire().await.unwrap());
    assert!(lock.is_acquired().await);

    // Held: a second caller is denied, without blocking.
    assert!(!lock.try_acquire().await.unwrap());

    lock.release().await.unwrap();
    assert!(!lock.is_acquired().await);
    assert!(lock.try_acquire().await.unwrap());
}

#[rstest]
#[tokio::test]
async fn release_without_acquisition_is_a_noop() {
    let lock = InMemoryLock::new();
    lock.release().await.unwrap();
    assert!(!lock.is_acquired().await);
}

/// Construction opens no session; the dedicated connection only exists
/// between a successful try_acquire and the matching release.
#[rstest]
#[tokio::test]
async fn pg_lock_holds_no_session_before_acquisition() {
    let lock = PgAdvisoryLock::new("postgres://localhost/unused", DEFAULT_LOCK_KEY);
    assert!(!lock.is_acquired().await);
    assert_eq!(lock.lock_key(), DEFAULT_LOCK_KEY);

    // Releasing a never-acquired lock must not try to talk to the store.
    lock.release().await.unwrap();
}
