//! Browser handle manager.
//!
//! This module provides [`BrowserManager`], the main entry point of the
//! crate: an asynchronous facade over the synchronous browser driver that
//! owns at most one driver instance at a time.
//!
//! # Overview
//!
//! The manager exposes three operations:
//! - **obtain** ([`driver()`](BrowserManager::driver)): lazily launch the
//!   driver on first use, return the existing handle afterwards
//! - **close** ([`close()`](BrowserManager::close)): idempotent,
//!   never-failing shutdown
//! - **implicit cleanup** (`Drop`): best-effort teardown when the owner
//!   forgot to close
//!
//! Every blocking driver call runs on Tokio's blocking pool via
//! `spawn_blocking`, so the async scheduler is never stalled.
//!
//! # State machine
//!
//! ```text
//! NoDriver ──driver()──▶ DriverActive ──driver()──▶ DriverActive (reuse)
//!    ▲                        │
//!    │◀───────close()─────────┘
//!    │◀──close()── (no-op when already NoDriver)
//! ```
//!
//! # Ownership and concurrency
//!
//! There is no internal locking. Obtain and close take `&mut self`, so a
//! single manager value cannot be raced from concurrent tasks - the
//! borrow checker enforces the intended single-owner discipline instead
//! of a hidden mutex changing observable behavior. Callers that genuinely
//! need to share a manager across tasks wrap it in
//! [`SharedBrowserManager`](crate::SharedBrowserManager) and accept that
//! the mutex serializes their calls.
//!
//! # Example
//!
//! ```rust,no_run
//! use browser_bridge::{BrowserConfigBuilder, BrowserManager};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = BrowserConfigBuilder::new().headless(true).build()?;
//!     let mut manager = BrowserManager::new(config);
//!
//!     // First call launches Chrome off-thread; later calls reuse it
//!     let driver = manager.driver().await?;
//!     let browser = driver.browser()?;
//!
//!     let title = tokio::task::spawn_blocking(move || {
//!         let tab = browser.new_tab()?;
//!         tab.navigate_to("https://example.com")?.wait_until_navigated()?;
//!         tab.get_title()
//!     })
//!     .await??;
//!     println!("title: {}", title);
//!
//!     // Deterministic cleanup; never fails
//!     manager.close().await;
//!     Ok(())
//! }
//! ```

use std::sync::Arc;

use crate::config::BrowserConfig;
use crate::driver::Driver;
use crate::error::{BrowserError, Result};
use crate::factory::{ChromeDriverFactory, DriverFactory};

/// Manager owning the lifetime of one browser driver.
///
/// Generic over its [`DriverFactory`] so tests can substitute an
/// in-memory driver; production code uses the
/// [`ChromeBrowserManager`](crate::ChromeBrowserManager) alias through
/// [`BrowserManager::new`].
///
/// # Lifecycle
///
/// Created empty; populated by the first successful
/// [`driver()`](Self::driver); cleared by [`close()`](Self::close);
/// re-creation after a close is legal. At most one driver exists per
/// manager at any time.
///
/// # Failure semantics
///
/// Construction failures propagate from `driver()`. Teardown failures are
/// absorbed: `close()` and the drop path log them at debug severity and
/// never raise, so cleanup is unconditionally safe to call.
pub struct BrowserManager<F: DriverFactory> {
    /// Factory used to (re)construct the driver.
    factory: Arc<F>,

    /// The live driver, if any.
    driver: Option<Arc<F::Driver>>,
}

impl BrowserManager<ChromeDriverFactory> {
    /// Create a manager that launches Chrome with the given configuration.
    ///
    /// No browser is started here; the launch happens on the first
    /// [`driver()`](Self::driver) call.
    ///
    /// # Example
    ///
    /// ```rust
    /// use browser_bridge::{BrowserConfig, BrowserManager};
    ///
    /// let manager = BrowserManager::new(BrowserConfig::default());
    /// assert!(!manager.is_active());
    /// ```
    pub fn new(config: BrowserConfig) -> Self {
        log::debug!("Initializing new browser manager");
        Self::with_factory(ChromeDriverFactory::new(config))
    }

    /// The configuration this manager launches Chrome with.
    pub fn config(&self) -> &BrowserConfig {
        self.factory.config()
    }
}

impl<F: DriverFactory> BrowserManager<F> {
    /// Create a manager around a custom driver factory.
    ///
    /// This is the seam used by tests (see
    /// [`MockDriverFactory`](crate::factory::mock::MockDriverFactory)) and
    /// by callers bringing their own driver backend.
    pub fn with_factory(factory: F) -> Self {
        Self {
            factory: Arc::new(factory),
            driver: None,
        }
    }

    /// The factory this manager constructs drivers with.
    pub fn factory(&self) -> &F {
        &self.factory
    }

    /// Whether a driver is currently active.
    pub fn is_active(&self) -> bool {
        self.driver.is_some()
    }

    /// Get the driver, launching it on first use.
    ///
    /// If a driver already exists, its handle is returned immediately with
    /// no side effects. Otherwise the factory's blocking `create` runs on
    /// Tokio's blocking pool; the calling task suspends until it
    /// completes.
    ///
    /// # Errors
    ///
    /// Construction failures are not absorbed - they propagate so the
    /// caller can decide what a missing browser means for its workflow.
    ///
    /// - [`BrowserError::Configuration`] - launch options rejected
    /// - [`BrowserError::Launch`] - the driver failed to start, or the
    ///   launch task itself died
    pub async fn driver(&mut self) -> Result<Arc<F::Driver>> {
        if let Some(driver) = &self.driver {
            log::trace!("Reusing existing browser driver");
            return Ok(Arc::clone(driver));
        }

        log::debug!("No driver yet, launching one off-thread...");
        let factory = Arc::clone(&self.factory);
        let driver = tokio::task::spawn_blocking(move || factory.create())
            .await
            .map_err(|e| BrowserError::Launch(format!("driver launch task failed: {}", e)))??;

        let driver = Arc::new(driver);
        self.driver = Some(Arc::clone(&driver));
        log::debug!("Browser driver created");
        Ok(driver)
    }

    /// Close the browser.
    ///
    /// Idempotent: with no active driver this is a silent no-op. With one,
    /// the stored handle is cleared and the driver's blocking `quit` runs
    /// on Tokio's blocking pool. The manager's last strong reference is
    /// released on that worker thread too, so driver reclamation never
    /// runs on the async threads.
    ///
    /// Shutdown failures are logged at debug severity and never
    /// propagated; this method cannot fail loudly.
    pub async fn close(&mut self) {
        let driver = match self.driver.take() {
            Some(driver) => driver,
            None => {
                log::trace!("close() called with no active driver, nothing to do");
                return;
            }
        };

        let result = tokio::task::spawn_blocking(move || {
            let outcome = driver.quit();
            drop(driver);
            outcome
        })
        .await;

        match result {
            Ok(Ok(())) => log::debug!("Browser closed successfully"),
            Ok(Err(e)) => log::debug!("Failed to close browser properly: {}", e),
            Err(e) => log::debug!("Browser shutdown task failed: {}", e),
        }
    }

    /// Convert the manager into a shared handle for multi-task use.
    ///
    /// The async mutex serializes obtain/close calls from concurrent
    /// tasks; that serialization is the caller's choice, not something
    /// the manager imposes internally.
    ///
    /// # Example
    ///
    /// ```rust
    /// use browser_bridge::{BrowserConfig, BrowserManager};
    ///
    /// let shared = BrowserManager::new(BrowserConfig::default()).into_shared();
    /// let clone = std::sync::Arc::clone(&shared);
    /// ```
    pub fn into_shared(self) -> Arc<tokio::sync::Mutex<Self>> {
        Arc::new(tokio::sync::Mutex::new(self))
    }
}

impl<F: DriverFactory> Drop for BrowserManager<F> {
    /// Best-effort cleanup when the owner forgot to close.
    ///
    /// Inside a Tokio runtime the quit is fired off on the blocking pool
    /// and not awaited; outside any runtime it runs synchronously to
    /// completion. Either way errors are logged and never raised -
    /// completion and ordering are not guaranteed here. Callers that need
    /// deterministic cleanup must call [`close`](Self::close) before
    /// dropping the manager.
    fn drop(&mut self) {
        let driver = match self.driver.take() {
            Some(driver) => driver,
            None => return,
        };

        log::debug!("BrowserManager dropped with an active driver, running best-effort cleanup");

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                // Fire-and-forget; Drop cannot await the result.
                handle.spawn_blocking(move || {
                    if let Err(e) = driver.quit() {
                        log::debug!("Failed to clean up browser in destructor: {}", e);
                    }
                });
            }
            Err(_) => {
                // No runtime: quit is a plain blocking call, run it here.
                if let Err(e) = driver.quit() {
                    log::debug!("Failed to clean up browser in destructor: {}", e);
                }
            }
        }
    }
}

impl<F: DriverFactory> std::fmt::Debug for BrowserManager<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BrowserManager")
            .field("active", &self.is_active())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Environment Initialization (feature-gated)
// ============================================================================

/// Initialize a shared browser manager from environment variables.
///
/// Reads [`BrowserConfig`] from the environment (and an optional `app.env`
/// file) and wraps the manager for multi-task use. No browser is launched
/// until the first obtain call.
///
/// # Feature Flag
///
/// Only available when the `env-config` feature is enabled.
///
/// # Errors
///
/// Returns [`BrowserError::Configuration`] if the environment values fail
/// validation.
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     env_logger::init();
///
///     let manager = browser_bridge::init_browser_manager()?;
///     let driver = manager.lock().await.driver().await?;
///     // ...
///     Ok(())
/// }
/// ```
#[cfg(feature = "env-config")]
pub fn init_browser_manager() -> Result<crate::SharedBrowserManager> {
    use crate::config::env::from_env;

    log::info!("Initializing browser manager from environment...");
    let config = from_env()?;
    Ok(BrowserManager::new(config).into_shared())
}

// ============================================================================
// Unit Tests
// ============================================================================
