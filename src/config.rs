//! Configuration for browser driver startup.
//!
//! This module provides [`BrowserConfig`] and [`BrowserConfigBuilder`] for
//! describing how the underlying Chrome/Chromium driver is launched, plus
//! [`ProxySettings`] for routing traffic through a proxy.
//!
//! The configuration is an immutable value object: it is constructed once
//! by the caller, handed to [`BrowserManager::new`](crate::BrowserManager::new),
//! and never mutated afterwards.
//!
//! # Example
//!
//! ```rust
//! use browser_bridge::BrowserConfigBuilder;
//!
//! let config = BrowserConfigBuilder::new()
//!     .headless(true)
//!     .extra_chromium_arg("--window-size=1920,1080")
//!     .build()
//!     .expect("Invalid configuration");
//!
//! assert!(config.headless);
//! assert!(config.disable_security);
//! ```
//!
//! # Environment Configuration
//!
//! When the `env-config` feature is enabled, you can load configuration
//! from environment variables and an optional `app.env` file:
//!
//! ```rust,ignore
//! use browser_bridge::config::env::from_env;
//!
//! let config = from_env()?;
//! ```
//!
//! See [`mod@env`] module for available environment variables.

use std::path::PathBuf;

/// Configuration for browser driver startup.
///
/// Defaults match interactive use: a visible browser window with relaxed
/// security, no extra arguments, auto-detected binary, direct connection.
///
/// # Fields Overview
///
/// | Field | Default | Description |
/// |-------|---------|-------------|
/// | `headless` | `false` | Run without a visible window |
/// | `disable_security` | `true` | Relax web security for automation |
/// | `extra_chromium_args` | empty | Additional command-line switches |
/// | `chrome_instance_path` | `None` | Custom browser binary (auto-detect if unset) |
/// | `proxy` | `None` | Proxy settings (direct connection if unset) |
///
/// # Example
///
/// ```rust
/// use browser_bridge::BrowserConfig;
///
/// let config = BrowserConfig::default();
/// assert!(!config.headless);
/// assert!(config.disable_security);
/// assert!(config.extra_chromium_args.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct BrowserConfig {
    /// Run the browser without a visible window.
    pub headless: bool,

    /// Relax web security for automation.
    ///
    /// Enables cross-origin requests, ignores certificate errors, and
    /// disables the sandbox. Leave enabled for scraping workloads; turn
    /// off when visiting untrusted pages matters more than convenience.
    pub disable_security: bool,

    /// Additional Chromium command-line switches, passed through in order.
    pub extra_chromium_args: Vec<String>,

    /// Path to a specific Chrome/Chromium binary.
    ///
    /// `None` lets the driver auto-detect an installed browser.
    pub chrome_instance_path: Option<PathBuf>,

    /// Proxy settings. `None` means a direct connection.
    pub proxy: Option<ProxySettings>,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            headless: false,
            disable_security: true,
            extra_chromium_args: Vec::new(),
            chrome_instance_path: None,
            proxy: None,
        }
    }
}

/// Proxy settings projected into the driver's launch options.
///
/// # Example
///
/// ```rust
/// use browser_bridge::ProxySettings;
///
/// let proxy = ProxySettings::new("socks5://127.0.0.1:9050");
/// assert_eq!(proxy.server, "socks5://127.0.0.1:9050");
/// assert!(proxy.bypass_list.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct ProxySettings {
    /// Proxy server, e.g. `http://proxy.example.com:8080` or
    /// `socks5://127.0.0.1:9050`.
    pub server: String,

    /// Hosts that bypass the proxy, rendered into
    /// `--proxy-bypass-list`.
    pub bypass_list: Vec<String>,
}

impl ProxySettings {
    /// Create proxy settings for the given server with an empty bypass
    /// list.
    pub fn new<S: Into<String>>(server: S) -> Self {
        Self {
            server: server.into(),
            bypass_list: Vec::new(),
        }
    }

    /// Add hosts that should bypass the proxy.
    ///
    /// # Example
    ///
    /// ```rust
    /// use browser_bridge::ProxySettings;
    ///
    /// let proxy = ProxySettings::new("http://proxy:8080")
    ///     .bypass(["localhost", "127.0.0.1"]);
    /// assert_eq!(proxy.bypass_list.len(), 2);
    /// ```
    pub fn bypass<I, S>(mut self, hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bypass_list.extend(hosts.into_iter().map(Into::into));
        self
    }
}

/// Builder for [`BrowserConfig`] with validation.
///
/// Provides a fluent API for constructing validated configurations.
/// All setter methods can be chained together.
///
/// # Example
///
/// ```rust
/// use browser_bridge::{BrowserConfigBuilder, ProxySettings};
///
/// let config = BrowserConfigBuilder::new()
///     .headless(true)
///     .disable_security(false)
///     .proxy(ProxySettings::new("http://proxy.example.com:8080"))
///     .build()
///     .expect("Invalid configuration");
/// ```
///
/// # Validation
///
/// The [`build()`](Self::build) method validates:
/// - `extra_chromium_args` entries must be non-empty
/// - `chrome_instance_path`, when given, must be non-empty
/// - the proxy server must be non-empty; if it carries a scheme it must
///   parse as a URL
pub struct BrowserConfigBuilder {
    config: BrowserConfig,
}

impl BrowserConfigBuilder {
    /// Create a new builder with default values.
    pub fn new() -> Self {
        Self {
            config: BrowserConfig::default(),
        }
    }

    /// Run the browser without a visible window.
    pub fn headless(mut self, headless: bool) -> Self {
        self.config.headless = headless;
        self
    }

    /// Relax web security for automation.
    pub fn disable_security(mut self, disable: bool) -> Self {
        self.config.disable_security = disable;
        self
    }

    /// Replace the extra Chromium argument list.
    ///
    /// # Example
    ///
    /// ```rust
    /// use browser_bridge::BrowserConfigBuilder;
    ///
    /// let config = BrowserConfigBuilder::new()
    ///     .extra_chromium_args(["--lang=en-US", "--window-size=800,600"])
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(config.extra_chromium_args.len(), 2);
    /// ```
    pub fn extra_chromium_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.extra_chromium_args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Append a single extra Chromium argument.
    pub fn extra_chromium_arg<S: Into<String>>(mut self, arg: S) -> Self {
        self.config.extra_chromium_args.push(arg.into());
        self
    }

    /// Use a specific Chrome/Chromium binary instead of auto-detection.
    pub fn chrome_instance_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.config.chrome_instance_path = Some(path.into());
        self
    }

    /// Route browser traffic through a proxy.
    pub fn proxy(mut self, proxy: ProxySettings) -> Self {
        self.config.proxy = Some(proxy);
        self
    }

    /// Build and validate the configuration.
    ///
    /// # Errors
    ///
    /// - Returns error if any extra Chromium argument is empty
    /// - Returns error if the browser binary path is empty
    /// - Returns error if the proxy server is empty or carries an
    ///   unparseable URL
    ///
    /// # Example
    ///
    /// ```rust
    /// use browser_bridge::BrowserConfigBuilder;
    ///
    /// // Valid configuration
    /// let config = BrowserConfigBuilder::new().headless(true).build();
    /// assert!(config.is_ok());
    ///
    /// // Invalid: empty argument
    /// let config = BrowserConfigBuilder::new().extra_chromium_arg("").build();
    /// assert!(config.is_err());
    /// ```
    pub fn build(self) -> std::result::Result<BrowserConfig, String> {
        // Validation: empty switches would silently corrupt the argv
        if self
            .config
            .extra_chromium_args
            .iter()
            .any(|arg| arg.trim().is_empty())
        {
            return Err("extra_chromium_args entries must be non-empty".to_string());
        }

        if let Some(path) = &self.config.chrome_instance_path {
            if path.as_os_str().is_empty() {
                return Err("chrome_instance_path must be non-empty".to_string());
            }
        }

        if let Some(proxy) = &self.config.proxy {
            validate_proxy_server(&proxy.server)?;
            if proxy.bypass_list.iter().any(|h| h.trim().is_empty()) {
                return Err("proxy bypass_list entries must be non-empty".to_string());
            }
        }

        Ok(self.config)
    }
}

impl Default for BrowserConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate a proxy server string at the configuration boundary.
///
/// Accepts either `scheme://host:port` (validated via the `url` crate) or
/// a bare `host:port` pair.
fn validate_proxy_server(server: &str) -> std::result::Result<(), String> {
    if server.trim().is_empty() {
        return Err("proxy server must be non-empty".to_string());
    }

    if server.contains("://") {
        url::Url::parse(server)
            .map_err(|e| format!("invalid proxy server URL '{}': {}", server, e))?;
    } else if server.contains(char::is_whitespace) {
        return Err(format!("invalid proxy server '{}': contains whitespace", server));
    }

    Ok(())
}

// ============================================================================
// Environment Configuration (feature-gated)
// ============================================================================

/// Environment-based configuration loading.
///
/// This module is only available when the `env-config` feature is enabled.
///
/// # Environment File
///
/// This module uses `dotenvy` to load environment variables from an
/// `app.env` file in the current directory. The file is optional - if not
/// found, environment variables and defaults are used.
///
/// # Environment Variables
///
/// | Variable | Type | Default | Description |
/// |----------|------|---------|-------------|
/// | `BROWSER_HEADLESS` | bool | false | Run without a visible window |
/// | `BROWSER_DISABLE_SECURITY` | bool | true | Relax web security |
/// | `BROWSER_EXTRA_ARGS` | String | empty | Comma-separated extra switches |
/// | `CHROME_PATH` | String | auto | Custom browser binary path |
/// | `BROWSER_PROXY_SERVER` | String | unset | Proxy server |
/// | `BROWSER_PROXY_BYPASS` | String | empty | Comma-separated bypass hosts |
///
/// # Example `app.env` File
///
/// ```text
/// BROWSER_HEADLESS=true
/// BROWSER_DISABLE_SECURITY=true
/// BROWSER_EXTRA_ARGS=--lang=en-US,--window-size=1920,1080
///
/// # Chrome Configuration (optional)
/// # CHROME_PATH=/usr/bin/google-chrome
/// # BROWSER_PROXY_SERVER=http://proxy.internal:8080
/// # BROWSER_PROXY_BYPASS=localhost,127.0.0.1
/// ```
#[cfg(feature = "env-config")]
pub mod env {
    use super::*;
    use crate::error::BrowserError;

    /// Default environment file name.
    pub const ENV_FILE_NAME: &str = "app.env";

    /// Load environment variables from `app.env` file.
    ///
    /// Call this early in your application startup to ensure environment
    /// variables are loaded before any configuration functions are called.
    /// This function is automatically called by [`from_env`].
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)` if the file was found and loaded successfully
    /// - `Err(dotenvy::Error)` if the file was not found or couldn't be parsed
    pub fn load_env_file() -> std::result::Result<std::path::PathBuf, dotenvy::Error> {
        dotenvy::from_filename(ENV_FILE_NAME)
    }

    /// Load configuration from environment variables.
    ///
    /// Reads configuration from environment variables with the defaults
    /// of [`BrowserConfig::default`]. Also loads the `app.env` file if
    /// present (via `dotenvy`).
    ///
    /// # Errors
    ///
    /// Returns [`BrowserError::Configuration`] if the resulting values
    /// fail builder validation.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use browser_bridge::config::env::from_env;
    ///
    /// unsafe { std::env::set_var("BROWSER_HEADLESS", "true") };
    /// let config = from_env()?;
    /// assert!(config.headless);
    /// ```
    pub fn from_env() -> std::result::Result<BrowserConfig, BrowserError> {
        // Load app.env file if present (ignore errors if not found)
        match load_env_file() {
            Ok(path) => {
                log::info!("Loaded configuration from: {:?}", path);
            }
            Err(e) => {
                log::debug!(
                    "No {} file found or failed to load: {} (using environment variables and defaults)",
                    ENV_FILE_NAME,
                    e
                );
            }
        }

        let headless = std::env::var("BROWSER_HEADLESS")
            .ok()
            .map(|s| parse_bool(&s))
            .unwrap_or(false);

        let disable_security = std::env::var("BROWSER_DISABLE_SECURITY")
            .ok()
            .map(|s| parse_bool(&s))
            .unwrap_or(true);

        let extra_args = std::env::var("BROWSER_EXTRA_ARGS")
            .ok()
            .map(|s| parse_list(&s))
            .unwrap_or_default();

        let chrome_path = chrome_path_from_env();

        let proxy_server = std::env::var("BROWSER_PROXY_SERVER").ok();
        let proxy_bypass = std::env::var("BROWSER_PROXY_BYPASS")
            .ok()
            .map(|s| parse_list(&s))
            .unwrap_or_default();

        log::info!("Loading browser configuration from environment:");
        log::info!("   - Headless: {}", headless);
        log::info!("   - Disable security: {}", disable_security);
        log::info!("   - Extra args: {}", extra_args.len());
        log::info!(
            "   - Chrome path: {}",
            chrome_path.as_deref().unwrap_or("auto-detect")
        );
        log::info!(
            "   - Proxy: {}",
            proxy_server.as_deref().unwrap_or("direct connection")
        );

        let mut builder = BrowserConfigBuilder::new()
            .headless(headless)
            .disable_security(disable_security)
            .extra_chromium_args(extra_args);

        if let Some(path) = chrome_path {
            builder = builder.chrome_instance_path(path);
        }

        if let Some(server) = proxy_server {
            builder = builder.proxy(ProxySettings::new(server).bypass(proxy_bypass));
        }

        builder.build().map_err(BrowserError::Configuration)
    }

    /// Get Chrome path from environment.
    ///
    /// Reads the `CHROME_PATH` environment variable.
    ///
    /// **Note:** Call [`from_env`] or [`load_env_file`] first to ensure
    /// `app.env` is loaded if you're using a configuration file.
    ///
    /// # Returns
    ///
    /// - `Some(path)` if `CHROME_PATH` is set
    /// - `None` if not set (will use auto-detection)
    pub fn chrome_path_from_env() -> Option<String> {
        std::env::var("CHROME_PATH").ok()
    }

    fn parse_bool(value: &str) -> bool {
        matches!(
            value.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        )
    }

    fn parse_list(value: &str) -> Vec<String> {
        value
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(ToOwned::to_owned)
            .collect()
    }

}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Verifies that default configuration matches interactive-use
    /// defaults.
    #[test]
    fn test_config_defaults() {
        let config = BrowserConfig::default();

        assert!(!config.headless, "Default should show a window");
        assert!(config.disable_security, "Security relaxed by default");
        assert!(config.extra_chromium_args.is_empty());
        assert!(config.chrome_instance_path.is_none());
        assert!(config.proxy.is_none());
    }

    /// Verifies that BrowserConfigBuilder correctly sets all values.
    #[test]
    fn test_config_builder() {
        let config = BrowserConfigBuilder::new()
            .headless(true)
            .disable_security(false)
            .extra_chromium_args(["--lang=en-US"])
            .chrome_instance_path("/usr/bin/chromium")
            .proxy(ProxySettings::new("http://proxy.example.com:8080").bypass(["localhost"]))
            .build()
            .unwrap();

        assert!(config.headless);
        assert!(!config.disable_security);
        assert_eq!(config.extra_chromium_args, vec!["--lang=en-US".to_string()]);
        assert_eq!(
            config.chrome_instance_path,
            Some(PathBuf::from("/usr/bin/chromium"))
        );

        let proxy = config.proxy.unwrap();
        assert_eq!(proxy.server, "http://proxy.example.com:8080");
        assert_eq!(proxy.bypass_list, vec!["localhost".to_string()]);
    }

    /// Verifies that empty extra arguments are rejected.
    #[test]
    fn test_config_rejects_empty_arg() {
        let result = BrowserConfigBuilder::new().extra_chromium_arg("  ").build();

        assert!(result.is_err());
        let err_msg = result.unwrap_err();
        assert!(
            err_msg.contains("extra_chromium_args"),
            "Expected validation error message, got: {}",
            err_msg
        );
    }

    /// Verifies that an empty browser binary path is rejected.
    #[test]
    fn test_config_rejects_empty_path() {
        let result = BrowserConfigBuilder::new().chrome_instance_path("").build();

        assert!(result.is_err());
        assert!(result.unwrap_err().contains("chrome_instance_path"));
    }

    /// Verifies proxy server validation: empty, malformed URL, bare
    /// host:port, and whitespace cases.
    #[test]
    fn test_config_proxy_validation() {
        // Empty server rejected
        let result = BrowserConfigBuilder::new()
            .proxy(ProxySettings::new(""))
            .build();
        assert!(result.is_err());

        // Malformed URL rejected
        let result = BrowserConfigBuilder::new()
            .proxy(ProxySettings::new("http://:::bad"))
            .build();
        assert!(result.is_err());

        // Bare host:port accepted
        let result = BrowserConfigBuilder::new()
            .proxy(ProxySettings::new("proxy.internal:8080"))
            .build();
        assert!(result.is_ok());

        // Whitespace in a bare server rejected
        let result = BrowserConfigBuilder::new()
            .proxy(ProxySettings::new("proxy internal:8080"))
            .build();
        assert!(result.is_err());

        // Scheme'd URLs accepted
        for server in ["http://proxy:8080", "socks5://127.0.0.1:9050"] {
            let result = BrowserConfigBuilder::new()
                .proxy(ProxySettings::new(server))
                .build();
            assert!(result.is_ok(), "{} should validate", server);
        }
    }

    /// Verifies that empty bypass hosts are rejected.
    #[test]
    fn test_config_rejects_empty_bypass_host() {
        let result = BrowserConfigBuilder::new()
            .proxy(ProxySettings::new("http://proxy:8080").bypass([""]))
            .build();

        assert!(result.is_err());
        assert!(result.unwrap_err().contains("bypass_list"));
    }

    /// Verifies that config builder supports method chaining.
    #[test]
    fn test_config_builder_chaining() {
        let config = BrowserConfigBuilder::new()
            .headless(true)
            .extra_chromium_arg("--lang=en-US")
            .extra_chromium_arg("--window-size=800,600")
            .build()
            .unwrap();

        assert!(config.headless);
        assert_eq!(config.extra_chromium_args.len(), 2);
    }

    /// Verifies that BrowserConfigBuilder implements Default.
    #[test]
    fn test_builder_default() {
        let builder: BrowserConfigBuilder = Default::default();
        let config = builder.build().unwrap();

        assert!(!config.headless);
        assert!(config.disable_security);
    }
}
