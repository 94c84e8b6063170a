//! Shared helpers for integration tests.

/// Initialize logging once for all tests in a binary.
///
/// Safe to call from every test; later calls are no-ops.
#[allow(dead_code)]
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
