//! Shared-manager tests.
//!
//! The manager has no internal locking; tasks that share one wrap it in
//! an async mutex (`into_shared`). These tests verify that callers who do
//! so observe a single construction.

mod common;

use std::sync::Arc;

use browser_bridge::BrowserManager;
use browser_bridge::factory::mock::MockDriverFactory;
use tokio::task::JoinSet;

/// Many tasks obtaining through a shared manager see one driver.
#[tokio::test]
async fn test_shared_obtain_single_construction() {
    common::init_logging();

    let factory = MockDriverFactory::new();
    let created = factory.counter();

    let shared = BrowserManager::with_factory(factory).into_shared();

    let mut tasks = JoinSet::new();
    for _ in 0..10 {
        let manager = Arc::clone(&shared);
        tasks.spawn(async move {
            for _ in 0..20 {
                let mut guard = manager.lock().await;
                let _driver = guard.driver().await.unwrap();
            }
        });
    }

    while let Some(result) = tasks.join_next().await {
        assert!(result.is_ok(), "Task should complete without panic");
    }

    assert_eq!(
        created.load(std::sync::atomic::Ordering::SeqCst),
        1,
        "Serialized obtain calls must construct exactly once"
    );
}

/// Interleaved obtain/close from several tasks never double-quits a
/// driver and never leaks one.
#[tokio::test]
async fn test_shared_obtain_close_interleaving() {
    common::init_logging();

    let factory = MockDriverFactory::new();
    let created = factory.counter();
    let quits = factory.quit_counter();

    let shared = BrowserManager::with_factory(factory).into_shared();

    let mut tasks = JoinSet::new();
    for i in 0..8 {
        let manager = Arc::clone(&shared);
        tasks.spawn(async move {
            for _ in 0..10 {
                let mut guard = manager.lock().await;
                if i % 2 == 0 {
                    let _driver = guard.driver().await.unwrap();
                } else {
                    guard.close().await;
                }
            }
        });
    }

    while let Some(result) = tasks.join_next().await {
        assert!(result.is_ok(), "Task should complete without panic");
    }

    // Final close so the bookkeeping below is complete
    shared.lock().await.close().await;

    let created = created.load(std::sync::atomic::Ordering::SeqCst);
    let quits = quits.load(std::sync::atomic::Ordering::SeqCst);
    assert_eq!(
        created, quits,
        "Every constructed driver must be quit exactly once"
    );
}
