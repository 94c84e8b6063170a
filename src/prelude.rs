//! Convenient imports for common usage patterns.
//!
//! # Usage
//!
//! ```rust,ignore
//! use browser_bridge::prelude::*;
//! ```
//!
//! This imports:
//!
//! - [`BrowserManager`] - the handle manager
//! - [`ChromeBrowserManager`] - Chrome-backed manager alias
//! - [`BrowserConfig`] / [`BrowserConfigBuilder`] - configuration
//! - [`ProxySettings`] - proxy configuration
//! - [`BrowserError`] / [`Result`] - error handling
//! - [`Driver`] / [`DriverFactory`] - the driver seam
//! - [`ChromeDriver`] / [`ChromeDriverFactory`] - Chrome backend
//! - [`SharedBrowserManager`] - type alias for multi-task use

// Core types
pub use crate::config::{BrowserConfig, BrowserConfigBuilder, ProxySettings};
pub use crate::driver::{ChromeDriver, Driver};
pub use crate::error::{BrowserError, Result};
pub use crate::factory::{ChromeDriverFactory, DriverFactory};
pub use crate::manager::BrowserManager;
pub use crate::{ChromeBrowserManager, SharedBrowserManager};

// Feature-gated exports
#[cfg(feature = "env-config")]
pub use crate::config::env::{chrome_path_from_env, from_env};

#[cfg(feature = "env-config")]
pub use crate::manager::init_browser_manager;

// Re-export Arc for convenience (commonly needed with SharedBrowserManager)
pub use std::sync::Arc;
