//! Error types for the browser handle manager.
//!
//! This module provides [`BrowserError`], a unified error type for all
//! manager operations, and a convenient [`Result`] type alias.
//!
//! # Propagation policy
//!
//! Only construction-path failures ([`BrowserError::Launch`] and
//! [`BrowserError::Configuration`]) are surfaced to callers. Teardown-path
//! failures ([`BrowserError::Shutdown`]) are produced by the driver but
//! always absorbed and logged by [`BrowserManager::close`](crate::BrowserManager::close),
//! so cleanup is unconditionally safe to call.
//!
//! # Example
//!
//! ```rust
//! use browser_bridge::{BrowserError, Result};
//!
//! fn launch_something() -> Result<()> {
//!     Err(BrowserError::Launch("chrome binary not found".to_string()))
//! }
//!
//! match launch_something() {
//!     Ok(()) => println!("running"),
//!     Err(BrowserError::Launch(msg)) => eprintln!("launch failed: {}", msg),
//!     Err(e) => eprintln!("error: {}", e),
//! }
//! ```

/// Errors that can occur while managing the browser driver lifecycle.
///
/// # Example
///
/// ```rust
/// use browser_bridge::BrowserError;
///
/// fn handle_error(error: BrowserError) {
///     match error {
///         BrowserError::Launch(msg) => eprintln!("launch failed: {}", msg),
///         BrowserError::Configuration(msg) => eprintln!("bad config: {}", msg),
///         BrowserError::Shutdown(msg) => eprintln!("teardown failed: {}", msg),
///         BrowserError::Terminated => eprintln!("driver already quit"),
///     }
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum BrowserError {
    /// Failed to launch the underlying browser driver.
    ///
    /// # Common Causes
    ///
    /// - Chrome/Chromium binary not found or not installed
    /// - Invalid browser binary path specified
    /// - Insufficient permissions to execute the browser
    /// - System resource limits exceeded
    ///
    /// This is the one error class that reaches callers of
    /// [`BrowserManager::driver`](crate::BrowserManager::driver).
    #[error("Failed to launch browser: {0}")]
    Launch(String),

    /// Invalid configuration or launch-option projection.
    ///
    /// Produced by [`BrowserConfigBuilder::build`](crate::BrowserConfigBuilder::build)
    /// validation and by launch-option construction inside the Chrome
    /// factory.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The driver's terminate operation failed.
    ///
    /// Callers of [`BrowserManager::close`](crate::BrowserManager::close)
    /// never see this variant; it is caught and logged so shutdown cannot
    /// fail loudly. It is still public because custom
    /// [`Driver`](crate::Driver) implementations return it from `quit`.
    #[error("Failed to shut down browser: {0}")]
    Shutdown(String),

    /// The driver's surface was used after `quit`.
    ///
    /// Returned by [`ChromeDriver::browser`](crate::ChromeDriver::browser)
    /// once the handle has been released. Code that sees this held a
    /// driver reference past a `close` call.
    #[error("Browser driver already terminated")]
    Terminated,
}

/// Convenience conversion from [`String`] to [`BrowserError::Configuration`].
///
/// Allows using the `?` operator with functions that return `String`
/// errors in contexts expecting [`BrowserError`].
impl From<String> for BrowserError {
    fn from(msg: String) -> Self {
        BrowserError::Configuration(msg)
    }
}

/// Convenience conversion from `&str` to [`BrowserError::Configuration`].
impl From<&str> for BrowserError {
    fn from(msg: &str) -> Self {
        BrowserError::Configuration(msg.to_string())
    }
}

/// Result type alias using [`BrowserError`].
///
/// # Example
///
/// ```rust
/// use browser_bridge::Result;
///
/// fn my_function() -> Result<String> {
///     Ok("success".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, BrowserError>;

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Verifies error type conversions from String and &str.
    #[test]
    fn test_error_conversion() {
        let error: BrowserError = "test error".into();
        match error {
            BrowserError::Configuration(msg) => {
                assert_eq!(msg, "test error", "Error message should be preserved");
            }
            _ => panic!("Expected Configuration error variant"),
        }

        let error: BrowserError = "another error".to_string().into();
        match error {
            BrowserError::Configuration(msg) => {
                assert_eq!(msg, "another error", "Error message should be preserved");
            }
            _ => panic!("Expected Configuration error variant"),
        }
    }

    /// Verifies that error Display formatting works correctly.
    #[test]
    fn test_error_display() {
        let error = BrowserError::Launch("chrome not found".to_string());
        assert_eq!(
            error.to_string(),
            "Failed to launch browser: chrome not found"
        );

        let error = BrowserError::Configuration("bad proxy".to_string());
        assert_eq!(error.to_string(), "Configuration error: bad proxy");

        let error = BrowserError::Shutdown("process already gone".to_string());
        assert_eq!(
            error.to_string(),
            "Failed to shut down browser: process already gone"
        );

        let error = BrowserError::Terminated;
        assert_eq!(error.to_string(), "Browser driver already terminated");
    }

    /// Verifies that BrowserError implements std::error::Error.
    #[test]
    fn test_error_is_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<BrowserError>();
    }

    /// Verifies that BrowserError is Send + Sync for thread safety.
    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<BrowserError>();
    }
}
