//! # browser-bridge
//!
//! Asynchronous handle manager for a synchronous headless Chrome driver.
//!
//! This crate is a thin adapter: it owns at most one `headless_chrome`
//! browser instance and bridges its blocking interface to async callers.
//! The driver is launched lazily, every blocking call runs on Tokio's
//! blocking pool, shutdown is idempotent and never fails loudly, and a
//! best-effort cleanup runs if the manager is dropped with a live
//! browser. There is no pool, no multi-tab coordination, and no retry
//! policy - the actual automation surface belongs to the driver.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │            Your async application           │
//! └─────────────────┬───────────────────────────┘
//!                   │ driver() / close()
//!                   ▼
//! ┌─────────────────────────────────────────────┐
//! │              BrowserManager                 │
//! │   config ──▶ ChromeDriverFactory            │
//! │   state: NoDriver │ DriverActive            │
//! └─────────────────┬───────────────────────────┘
//!                   │ spawn_blocking
//!                   ▼
//! ┌─────────────────────────────────────────────┐
//! │        Headless Chrome browser              │
//! │     (managed by headless_chrome crate)      │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use browser_bridge::{BrowserConfigBuilder, BrowserManager};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = BrowserConfigBuilder::new()
//!         .headless(true)
//!         .build()?;
//!
//!     let mut manager = BrowserManager::new(config);
//!
//!     // Lazily launches Chrome on a worker thread
//!     let driver = manager.driver().await?;
//!
//!     // The driver surface is blocking; offload it the same way
//!     let browser = driver.browser()?;
//!     let title = tokio::task::spawn_blocking(move || {
//!         let tab = browser.new_tab()?;
//!         tab.navigate_to("https://example.com")?.wait_until_navigated()?;
//!         tab.get_title()
//!     })
//!     .await??;
//!     println!("Page title: {}", title);
//!
//!     // Idempotent, never fails loudly
//!     manager.close().await;
//!     Ok(())
//! }
//! ```
//!
//! ## Environment Configuration
//!
//! When the `env-config` feature is enabled, configuration can come from
//! environment variables (loaded from an `app.env` file or the system
//! environment):
//!
//! ```rust,no_run
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let manager = browser_bridge::init_browser_manager()?;
//!     // manager is Arc<tokio::sync::Mutex<ChromeBrowserManager>>
//!     Ok(())
//! }
//! ```
//!
//! | Variable | Type | Default | Description |
//! |----------|------|---------|-------------|
//! | `BROWSER_HEADLESS` | bool | false | Run without a visible window |
//! | `BROWSER_DISABLE_SECURITY` | bool | true | Relax web security |
//! | `BROWSER_EXTRA_ARGS` | String | empty | Comma-separated extra switches |
//! | `CHROME_PATH` | String | auto | Custom browser binary path |
//! | `BROWSER_PROXY_SERVER` | String | unset | Proxy server |
//! | `BROWSER_PROXY_BYPASS` | String | empty | Comma-separated bypass hosts |
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `env-config` | Enable environment-based configuration (default) |
//! | `test-utils` | Enable mock driver factory for testing |
//!
//! ## Error Handling
//!
//! Only construction failures surface: [`BrowserManager::driver`] returns
//! [`Result<Arc<_>>`](Result) and propagates launch problems. Teardown
//! never does - [`BrowserManager::close`] absorbs and logs shutdown
//! failures so it is safe to call from any cleanup path:
//!
//! ```rust,ignore
//! match manager.driver().await {
//!     Ok(driver) => { /* use driver */ }
//!     Err(BrowserError::Launch(msg)) => eprintln!("Chrome failed to start: {}", msg),
//!     Err(e) => eprintln!("error: {}", e),
//! }
//!
//! manager.close().await; // cannot fail
//! ```
//!
//! ## Testing
//!
//! For testing without Chrome, enable the `test-utils` feature and use
//! [`MockDriverFactory`](factory::mock::MockDriverFactory):
//!
//! ```rust,ignore
//! use browser_bridge::BrowserManager;
//! use browser_bridge::factory::mock::MockDriverFactory;
//!
//! let mut manager = BrowserManager::with_factory(MockDriverFactory::new());
//! let driver = manager.driver().await?;
//! assert_eq!(manager.factory().creation_count(), 1);
//! ```

#![doc(html_root_url = "https://docs.rs/browser-bridge/0.1.0")]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

// ============================================================================
// Modules
// ============================================================================

pub mod config;
pub mod driver;
pub mod error;
pub mod factory;
pub mod manager;
pub mod prelude;

// ============================================================================
// Re-exports (Public API)
// ============================================================================

// Core types
pub use config::{BrowserConfig, BrowserConfigBuilder, ProxySettings};
pub use driver::{ChromeDriver, Driver};
pub use error::{BrowserError, Result};
pub use factory::{ChromeDriverFactory, DriverFactory, render_chromium_args};
pub use manager::BrowserManager;

// Feature-gated re-exports
#[cfg(feature = "env-config")]
pub use config::env::{chrome_path_from_env, from_env};

#[cfg(feature = "env-config")]
pub use manager::init_browser_manager;

// ============================================================================
// Convenience type aliases
// ============================================================================

/// Manager backed by the Chrome driver factory.
///
/// This is the concrete type produced by [`BrowserManager::new`].
pub type ChromeBrowserManager = BrowserManager<ChromeDriverFactory>;

/// Shared browser manager for multi-task use.
///
/// The manager itself has no internal locking; the async mutex is how
/// multiple tasks opt into serializing their obtain/close calls.
///
/// # Example
///
/// ```rust,ignore
/// use browser_bridge::SharedBrowserManager;
///
/// let manager: SharedBrowserManager = BrowserManager::new(config).into_shared();
/// ```
pub type SharedBrowserManager = std::sync::Arc<tokio::sync::Mutex<ChromeBrowserManager>>;
