//! The synchronous browser driver wrapped by the manager.
//!
//! This module provides the [`Driver`] trait - the terminate half of the
//! driver contract - and [`ChromeDriver`], the production implementation
//! backed by the `headless_chrome` crate.
//!
//! # Overview
//!
//! The manager treats the driver as an opaque collaborator: it only needs
//! a way to terminate it ([`Driver::quit`]). Everything else - navigation,
//! DOM inspection, tabs - lives on the concrete driver type and is reached
//! through [`ChromeDriver::browser`].
//!
//! Every method here is blocking by nature. [`BrowserManager`](crate::BrowserManager)
//! dispatches calls to a worker thread; callers doing their own navigation
//! should do the same (see `demos/navigate.rs`).

use std::sync::{Arc, Mutex, PoisonError};

use headless_chrome::Browser;

use crate::error::{BrowserError, Result};

/// Terminate capability of a browser driver.
///
/// This is the only operation [`BrowserManager`](crate::BrowserManager)
/// requires of the driver it owns. Implementations must be safe to call
/// from a worker thread and must be idempotent: a second `quit` on an
/// already-terminated driver is a no-op, not an error.
///
/// # Thread Safety
///
/// Requires `Send + Sync + 'static` because the manager moves the driver
/// onto Tokio's blocking pool for shutdown.
///
/// # Example Implementation
///
/// ```rust,ignore
/// use browser_bridge::{Driver, Result};
///
/// struct MyDriver {
///     // your fields
/// }
///
/// impl Driver for MyDriver {
///     fn quit(&self) -> Result<()> {
///         // Tear down the underlying browser process
///         Ok(())
///     }
/// }
/// ```
pub trait Driver: Send + Sync + 'static {
    /// Terminate the underlying browser.
    ///
    /// Blocking. Idempotent: safe to call more than once.
    ///
    /// # Errors
    ///
    /// Returns [`BrowserError::Shutdown`] if teardown fails. The manager
    /// logs and absorbs this error; it never reaches `close` callers.
    fn quit(&self) -> Result<()>;
}

/// Production driver backed by `headless_chrome`.
///
/// Wraps the launched [`Browser`] handle. `headless_chrome` terminates the
/// browser process when the last handle drops, so [`quit`](Driver::quit)
/// releases the handle held here; navigation handles obtained through
/// [`browser`](Self::browser) keep the process alive until they drop too.
///
/// # Example
///
/// ```rust,ignore
/// let driver = manager.driver().await?;
/// let browser = driver.browser()?;
/// let tab = browser.new_tab()?;
/// tab.navigate_to("https://example.com")?;
/// ```
pub struct ChromeDriver {
    /// The launched browser; `None` once quit has run.
    browser: Mutex<Option<Arc<Browser>>>,
}

impl ChromeDriver {
    /// Wrap a freshly launched browser.
    pub(crate) fn new(browser: Browser) -> Self {
        Self {
            browser: Mutex::new(Some(Arc::new(browser))),
        }
    }

    /// Get the driver's navigation surface.
    ///
    /// Returns a shared handle to the underlying [`Browser`]. All calls on
    /// it are blocking; run them via `tokio::task::spawn_blocking` from
    /// async code.
    ///
    /// # Errors
    ///
    /// Returns [`BrowserError::Terminated`] once `quit` has run. Code that
    /// hits this held a driver reference past a
    /// [`close`](crate::BrowserManager::close) call.
    pub fn browser(&self) -> Result<Arc<Browser>> {
        self.browser
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(Arc::clone)
            .ok_or(BrowserError::Terminated)
    }

    /// Whether the driver has been terminated.
    pub fn is_terminated(&self) -> bool {
        self.browser
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_none()
    }
}

impl Driver for ChromeDriver {
    /// Release the browser handle, terminating the process once no other
    /// handle refers to it.
    fn quit(&self) -> Result<()> {
        // Poison recovery instead of unwrap: quit runs on teardown paths
        // that must never panic.
        let taken = self
            .browser
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();

        match taken {
            Some(browser) => {
                log::debug!("Releasing Chrome driver handle");
                // Blocking: waits for the browser process to be reaped if
                // this is the last handle.
                drop(browser);
                Ok(())
            }
            None => {
                log::trace!("Chrome driver already terminated, quit is a no-op");
                Ok(())
            }
        }
    }
}

impl std::fmt::Debug for ChromeDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChromeDriver")
            .field("terminated", &self.is_terminated())
            .finish()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Verifies the Driver trait is object-safe enough for the bounds the
    /// manager needs.
    #[test]
    fn test_driver_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ChromeDriver>();
    }

    /// Verifies that a mock driver satisfies the trait and reports quit
    /// failures through the Shutdown variant.
    #[test]
    fn test_custom_driver_quit_error() {
        struct BrokenDriver;

        impl Driver for BrokenDriver {
            fn quit(&self) -> Result<()> {
                Err(BrowserError::Shutdown("already gone".to_string()))
            }
        }

        let driver = BrokenDriver;
        match driver.quit() {
            Err(BrowserError::Shutdown(msg)) => assert_eq!(msg, "already gone"),
            other => panic!("Expected Shutdown error, got {:?}", other.err()),
        }
    }
}
