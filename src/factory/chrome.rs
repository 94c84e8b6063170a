//! Chrome/Chromium driver factory.
//!
//! This module provides [`ChromeDriverFactory`], which projects a
//! [`BrowserConfig`] into `headless_chrome` launch options and starts the
//! browser.
//!
//! # Example
//!
//! ```rust,ignore
//! use browser_bridge::{BrowserConfig, ChromeDriverFactory, DriverFactory};
//!
//! let factory = ChromeDriverFactory::new(BrowserConfig::default());
//! let driver = factory.create()?;
//! ```

use std::ffi::OsStr;

use headless_chrome::{Browser, LaunchOptions};

use super::DriverFactory;
use crate::config::BrowserConfig;
use crate::driver::ChromeDriver;
use crate::error::{BrowserError, Result};

/// Factory launching Chrome/Chromium instances from a [`BrowserConfig`].
///
/// The configuration is captured at construction time and projected into
/// the driver's native [`LaunchOptions`] shape on every
/// [`create`](DriverFactory::create) call.
///
/// # Thread Safety
///
/// This factory is `Send + Sync` and can be safely shared across threads.
pub struct ChromeDriverFactory {
    config: BrowserConfig,

    /// argv rendered once from the config so launch options can borrow it.
    args: Vec<String>,
}

impl ChromeDriverFactory {
    /// Create a factory for the given configuration.
    ///
    /// # Example
    ///
    /// ```rust
    /// use browser_bridge::{BrowserConfigBuilder, ChromeDriverFactory};
    ///
    /// let config = BrowserConfigBuilder::new().headless(true).build().unwrap();
    /// let factory = ChromeDriverFactory::new(config);
    /// assert!(factory.config().headless);
    /// ```
    pub fn new(config: BrowserConfig) -> Self {
        log::debug!(
            "Creating ChromeDriverFactory (headless: {}, path: {})",
            config.headless,
            config
                .chrome_instance_path
                .as_deref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "auto-detect".to_string())
        );

        let args = render_chromium_args(&config);
        Self { config, args }
    }

    /// The configuration this factory launches with.
    pub fn config(&self) -> &BrowserConfig {
        &self.config
    }

    /// Project the configuration into the driver's launch options.
    ///
    /// # Errors
    ///
    /// Returns [`BrowserError::Configuration`] if the options builder
    /// rejects the projection.
    fn launch_options(&self) -> Result<LaunchOptions<'_>> {
        let mut builder = LaunchOptions::default_builder();

        // Set path if provided, otherwise let headless_chrome auto-detect
        if let Some(path) = &self.config.chrome_instance_path {
            builder.path(Some(path.clone()));
        }

        let args: Vec<&OsStr> = self.args.iter().map(|a| a.as_ref()).collect();

        builder
            .headless(self.config.headless)
            .sandbox(!self.config.disable_security)
            .ignore_certificate_errors(self.config.disable_security)
            .args(args);

        if let Some(proxy) = &self.config.proxy {
            builder.proxy_server(Some(proxy.server.as_str()));
        }

        builder.build().map_err(|e| {
            log::error!("Failed to build Chrome launch options: {}", e);
            BrowserError::Configuration(e.to_string())
        })
    }
}

impl DriverFactory for ChromeDriverFactory {
    type Driver = ChromeDriver;

    /// Launch a new Chrome driver.
    ///
    /// Blocking: waits for the browser process to start and the DevTools
    /// connection to come up.
    ///
    /// # Errors
    ///
    /// * Returns [`BrowserError::Configuration`] if option projection fails.
    /// * Returns [`BrowserError::Launch`] if Chrome fails to start.
    fn create(&self) -> Result<ChromeDriver> {
        let options = self.launch_options()?;

        log::debug!(
            "Launching Chrome (headless: {}, args: {:?})",
            self.config.headless,
            self.args
        );

        let browser = Browser::new(options).map_err(|e| {
            log::error!("Chrome launch failed: {}", e);
            BrowserError::Launch(e.to_string())
        })?;

        log::debug!("Chrome driver created");
        Ok(ChromeDriver::new(browser))
    }
}

impl std::fmt::Debug for ChromeDriverFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChromeDriverFactory")
            .field("config", &self.config)
            .finish()
    }
}

/// Render the Chromium argv a configuration maps to.
///
/// Security-bypass switches come first when `disable_security` is set,
/// then the proxy bypass list, then the caller's extra arguments in their
/// original order.
///
/// # Example
///
/// ```rust
/// use browser_bridge::{BrowserConfig, render_chromium_args};
///
/// let args = render_chromium_args(&BrowserConfig::default());
/// assert!(args.contains(&"--disable-web-security".to_string()));
/// ```
pub fn render_chromium_args(config: &BrowserConfig) -> Vec<String> {
    let mut args = Vec::new();

    if config.disable_security {
        args.push("--disable-web-security".to_string());
        args.push("--disable-features=IsolateOrigins,site-per-process".to_string());
        args.push("--allow-running-insecure-content".to_string());
    }

    if let Some(proxy) = &config.proxy {
        if !proxy.bypass_list.is_empty() {
            args.push(format!("--proxy-bypass-list={}", proxy.bypass_list.join(",")));
        }
    }

    args.extend(config.extra_chromium_args.iter().cloned());
    args
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BrowserConfigBuilder, ProxySettings};

    /// Verifies security-bypass switches are emitted only when requested.
    #[test]
    fn test_render_args_security() {
        let relaxed = BrowserConfig::default();
        let args = render_chromium_args(&relaxed);
        assert!(args.contains(&"--disable-web-security".to_string()));
        assert!(args.contains(&"--disable-features=IsolateOrigins,site-per-process".to_string()));

        let strict = BrowserConfigBuilder::new()
            .disable_security(false)
            .build()
            .unwrap();
        assert!(render_chromium_args(&strict).is_empty());
    }

    /// Verifies the proxy bypass list renders into a single switch.
    #[test]
    fn test_render_args_proxy_bypass() {
        let config = BrowserConfigBuilder::new()
            .disable_security(false)
            .proxy(ProxySettings::new("http://proxy:8080").bypass(["localhost", "127.0.0.1"]))
            .build()
            .unwrap();

        let args = render_chromium_args(&config);
        assert_eq!(args, vec!["--proxy-bypass-list=localhost,127.0.0.1".to_string()]);
    }

    /// Verifies caller-supplied extra arguments keep their order and come
    /// last.
    #[test]
    fn test_render_args_extra_order() {
        let config = BrowserConfigBuilder::new()
            .disable_security(false)
            .extra_chromium_args(["--lang=en-US", "--window-size=800,600"])
            .build()
            .unwrap();

        let args = render_chromium_args(&config);
        assert_eq!(
            args,
            vec!["--lang=en-US".to_string(), "--window-size=800,600".to_string()]
        );
    }

    /// Verifies that launch options can be built for common
    /// configurations. This checks the projection is valid without
    /// launching Chrome.
    #[test]
    fn test_launch_options_projection() {
        let factory = ChromeDriverFactory::new(BrowserConfig::default());
        assert!(factory.launch_options().is_ok());

        let config = BrowserConfigBuilder::new()
            .headless(true)
            .chrome_instance_path("/custom/chrome/path")
            .proxy(ProxySettings::new("socks5://127.0.0.1:9050"))
            .build()
            .unwrap();
        let factory = ChromeDriverFactory::new(config);
        let result = factory.launch_options();
        assert!(
            result.is_ok(),
            "Options should build successfully: {:?}",
            result.err()
        );
    }
}
