//! Mock driver factory for testing.
//!
//! This module provides mock implementations of [`Driver`] and
//! [`DriverFactory`] so manager behavior - including shutdown paths - can
//! be tested without a browser installed.
//!
//! # Feature Flag
//!
//! This module is only available when:
//! - The `test-utils` feature is enabled, OR
//! - During testing (`#[cfg(test)]`)
//!
//! # Example
//!
//! ```rust,ignore
//! use browser_bridge::factory::mock::MockDriverFactory;
//!
//! // Factory whose drivers fail their quit call
//! let factory = MockDriverFactory::with_failing_quit("Process already gone");
//!
//! // Factory that always fails creation
//! let factory = MockDriverFactory::always_fails("Chrome not installed");
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::DriverFactory;
use crate::driver::Driver;
use crate::error::{BrowserError, Result};

/// In-memory driver for tests.
///
/// Records quit calls in a counter shared with the factory that created
/// it, and can be configured to fail its quit call.
pub struct MockDriver {
    /// Sequential id assigned by the factory (1-based).
    id: usize,

    /// Quit calls across every driver from the same factory.
    quit_calls: Arc<AtomicUsize>,

    /// Whether quit should fail.
    fail_quit: bool,

    /// Error message used when quit fails.
    error_message: String,
}

impl MockDriver {
    /// The sequential id the factory assigned to this driver.
    pub fn id(&self) -> usize {
        self.id
    }
}

impl Driver for MockDriver {
    /// Record the quit call, then succeed or fail per configuration.
    fn quit(&self) -> Result<()> {
        self.quit_calls.fetch_add(1, Ordering::SeqCst);

        if self.fail_quit {
            log::debug!("MockDriver {}: returning configured quit failure", self.id);
            return Err(BrowserError::Shutdown(self.error_message.clone()));
        }

        log::debug!("MockDriver {}: quit", self.id);
        Ok(())
    }
}

impl std::fmt::Debug for MockDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockDriver")
            .field("id", &self.id)
            .field("fail_quit", &self.fail_quit)
            .finish()
    }
}

/// Mock driver factory for testing without a browser.
///
/// This factory can be configured to:
/// - Create in-memory drivers that succeed (default)
/// - Always fail creation with a specific error
/// - Create drivers whose quit call fails
/// - Track creation and quit counts for verification
///
/// # Thread Safety
///
/// This factory is `Send + Sync` and tracks state using atomic operations.
///
/// # Example
///
/// ```rust,ignore
/// use browser_bridge::factory::mock::MockDriverFactory;
///
/// let factory = MockDriverFactory::new();
/// let driver = factory.create().unwrap();
/// assert_eq!(factory.creation_count(), 1);
/// ```
pub struct MockDriverFactory {
    /// Whether to fail on creation.
    should_fail: bool,

    /// Whether created drivers fail their quit call.
    fail_quit: bool,

    /// Custom error message for configured failures.
    error_message: String,

    /// Number of drivers created (for verification in tests).
    creation_count: Arc<AtomicUsize>,

    /// Quit calls across all drivers created by this factory.
    quit_calls: Arc<AtomicUsize>,
}

impl MockDriverFactory {
    /// Create a factory producing well-behaved in-memory drivers.
    pub fn new() -> Self {
        Self {
            should_fail: false,
            fail_quit: false,
            error_message: String::new(),
            creation_count: Arc::new(AtomicUsize::new(0)),
            quit_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a factory that always fails creation with the given message.
    ///
    /// Useful for testing the construction-failure path without a browser
    /// installed.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let factory = MockDriverFactory::always_fails("Chrome not installed");
    /// assert!(factory.create().is_err());
    /// ```
    pub fn always_fails<S: Into<String>>(message: S) -> Self {
        Self {
            should_fail: true,
            fail_quit: false,
            error_message: message.into(),
            creation_count: Arc::new(AtomicUsize::new(0)),
            quit_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a factory whose drivers fail their quit call.
    ///
    /// Useful for testing that shutdown failures are absorbed.
    pub fn with_failing_quit<S: Into<String>>(message: S) -> Self {
        Self {
            should_fail: false,
            fail_quit: true,
            error_message: message.into(),
            creation_count: Arc::new(AtomicUsize::new(0)),
            quit_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of drivers this factory has created.
    pub fn creation_count(&self) -> usize {
        self.creation_count.load(Ordering::SeqCst)
    }

    /// Quit calls across all drivers created by this factory.
    pub fn quit_count(&self) -> usize {
        self.quit_calls.load(Ordering::SeqCst)
    }

    /// Get a clone of the creation counter for external tracking.
    ///
    /// This allows test code to monitor the count even after the factory
    /// has been moved into a manager.
    pub fn counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.creation_count)
    }

    /// Get a clone of the quit counter for external tracking.
    pub fn quit_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.quit_calls)
    }
}

impl Default for MockDriverFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl DriverFactory for MockDriverFactory {
    type Driver = MockDriver;

    /// Create an in-memory driver or return the configured error.
    fn create(&self) -> Result<MockDriver> {
        let count = self.creation_count.fetch_add(1, Ordering::SeqCst);

        if self.should_fail {
            log::debug!("MockDriverFactory: returning configured creation failure");
            return Err(BrowserError::Launch(self.error_message.clone()));
        }

        log::debug!("MockDriverFactory: creating driver #{}", count + 1);
        Ok(MockDriver {
            id: count + 1,
            quit_calls: Arc::clone(&self.quit_calls),
            fail_quit: self.fail_quit,
            error_message: self.error_message.clone(),
        })
    }
}

impl std::fmt::Debug for MockDriverFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockDriverFactory")
            .field("should_fail", &self.should_fail)
            .field("fail_quit", &self.fail_quit)
            .field("creation_count", &self.creation_count.load(Ordering::SeqCst))
            .field("quit_calls", &self.quit_calls.load(Ordering::SeqCst))
            .finish()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
