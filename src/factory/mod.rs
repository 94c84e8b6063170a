//! Driver factory implementations.
//!
//! This module provides the [`DriverFactory`] trait and implementations
//! for constructing driver instances.
//!
//! # Overview
//!
//! The factory is the constructor half of the driver contract. Abstracting
//! it allows:
//! - Different driver backends behind the same manager
//! - Custom launch configurations
//! - Mock factories for testing shutdown behavior without a browser
//!
//! # Available Factories
//!
//! | Factory | Description |
//! |---------|-------------|
//! | [`ChromeDriverFactory`] | Launches Chrome/Chromium via `headless_chrome` |
//! | [`mock::MockDriverFactory`] | For testing (feature-gated) |
//!
//! # Custom Factory
//!
//! ```rust,ignore
//! use browser_bridge::{Driver, DriverFactory, Result};
//!
//! struct MyFactory;
//!
//! impl DriverFactory for MyFactory {
//!     type Driver = MyDriver;
//!
//!     fn create(&self) -> Result<MyDriver> {
//!         // Your launch logic
//!         todo!()
//!     }
//! }
//! ```

mod chrome;

#[cfg(any(test, feature = "test-utils"))]
pub mod mock;

pub use chrome::{ChromeDriverFactory, render_chromium_args};

use crate::driver::Driver;
use crate::error::Result;

/// Trait for driver construction.
///
/// The manager calls [`create`](Self::create) on a worker thread the first
/// time a driver is requested; the call is expected to block until the
/// browser is up.
///
/// # Thread Safety
///
/// Requires `Send + Sync + 'static` because the factory is moved onto
/// Tokio's blocking pool for construction.
pub trait DriverFactory: Send + Sync + 'static {
    /// The driver type this factory produces.
    type Driver: Driver;

    /// Construct a new driver instance.
    ///
    /// # Errors
    ///
    /// - [`BrowserError::Configuration`](crate::BrowserError::Configuration) -
    ///   invalid launch options
    /// - [`BrowserError::Launch`](crate::BrowserError::Launch) -
    ///   binary not found, launch fails, etc.
    ///
    /// Both propagate to the caller of
    /// [`BrowserManager::driver`](crate::BrowserManager::driver).
    fn create(&self) -> Result<Self::Driver>;
}
