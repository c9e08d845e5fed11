//! Configuration types for the Partner Center SDK.
//!
//! This module provides the core configuration types used to initialize
//! a [`PartnerClient`](crate::PartnerClient).
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`PartnerConfig`]: The main configuration struct holding all SDK settings
//! - [`PartnerConfigBuilder`]: A builder for constructing [`PartnerConfig`] instances
//! - [`ApiRoot`]: A validated base URL
//! - [`ApiVersion`]: The API version path segment
//! - [`Locale`]: The locale sent with every request
//! - [`AccessToken`]: An already-acquired bearer token with masked debug output
//!
//! # Example
//!
//! ```rust
//! use partner_center::{AccessToken, ApiRoot, PartnerConfig};
//!
//! let config = PartnerConfig::builder()
//!     .api_root(ApiRoot::new("https://api.partnercenter.microsoft.com").unwrap())
//!     .access_token(AccessToken::new("token").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url(), "https://api.partnercenter.microsoft.com/v1");
//! ```

mod newtypes;

use std::time::Duration;

pub use newtypes::{AccessToken, ApiRoot, ApiVersion, Locale};

use crate::error::ConfigError;

/// Default request timeout, matching the service's own upper bound.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(100);

/// Configuration for the Partner Center SDK.
///
/// # Thread Safety
///
/// `PartnerConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use partner_center::PartnerConfig;
///
/// let config = PartnerConfig::default();
/// assert_eq!(config.api_version().as_ref(), "v1");
/// assert_eq!(config.locale().as_ref(), "en-US");
/// assert!(config.access_token().is_none());
/// ```
#[derive(Clone, Debug)]
pub struct PartnerConfig {
    api_root: ApiRoot,
    api_version: ApiVersion,
    locale: Locale,
    access_token: Option<AccessToken>,
    user_agent_prefix: Option<String>,
    application_name: Option<String>,
    timeout: Duration,
}

impl PartnerConfig {
    /// Creates a new builder for constructing a `PartnerConfig`.
    #[must_use]
    pub fn builder() -> PartnerConfigBuilder {
        PartnerConfigBuilder::new()
    }

    /// Returns the API root.
    #[must_use]
    pub const fn api_root(&self) -> &ApiRoot {
        &self.api_root
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the locale.
    #[must_use]
    pub const fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Returns the access token, if configured.
    #[must_use]
    pub const fn access_token(&self) -> Option<&AccessToken> {
        self.access_token.as_ref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the calling application's name, if configured.
    #[must_use]
    pub fn application_name(&self) -> Option<&str> {
        self.application_name.as_deref()
    }

    /// Returns the request timeout used by the default transport.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the versioned base URL every request path is joined to.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("{}/{}", self.api_root.as_ref(), self.api_version.as_ref())
    }
}

impl Default for PartnerConfig {
    fn default() -> Self {
        Self {
            api_root: ApiRoot::default(),
            api_version: ApiVersion::default(),
            locale: Locale::default(),
            access_token: None,
            user_agent_prefix: None,
            application_name: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

// Verify PartnerConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PartnerConfig>();
};

/// Builder for constructing [`PartnerConfig`] instances.
///
/// No field is required.
///
/// # Defaults
///
/// - `api_root`: `https://api.partnercenter.microsoft.com`
/// - `api_version`: `v1`
/// - `locale`: `en-US`
/// - `access_token`: `None`
/// - `user_agent_prefix`: `None`
/// - `application_name`: `None`
/// - `timeout`: 100 seconds
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use partner_center::{Locale, PartnerConfig};
///
/// let config = PartnerConfig::builder()
///     .locale(Locale::new("fr-FR").unwrap())
///     .user_agent_prefix("MyApp/1.0")
///     .application_name("Billing Sync")
///     .timeout(Duration::from_secs(30))
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct PartnerConfigBuilder {
    api_root: Option<ApiRoot>,
    api_version: Option<ApiVersion>,
    locale: Option<Locale>,
    access_token: Option<AccessToken>,
    user_agent_prefix: Option<String>,
    application_name: Option<String>,
    timeout: Option<Duration>,
}

impl PartnerConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API root.
    #[must_use]
    pub fn api_root(mut self, root: ApiRoot) -> Self {
        self.api_root = Some(root);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets the locale.
    #[must_use]
    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = Some(locale);
        self
    }

    /// Sets the bearer token.
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the application name sent as `MS-PartnerCenter-Application`.
    #[must_use]
    pub fn application_name(mut self, name: impl Into<String>) -> Self {
        self.application_name = Some(name.into());
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`PartnerConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidTimeout`] if the timeout is zero.
    pub fn build(self) -> Result<PartnerConfig, ConfigError> {
        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);
        if timeout.is_zero() {
            return Err(ConfigError::InvalidTimeout);
        }

        Ok(PartnerConfig {
            api_root: self.api_root.unwrap_or_default(),
            api_version: self.api_version.unwrap_or_default(),
            locale: self.locale.unwrap_or_default(),
            access_token: self.access_token,
            user_agent_prefix: self.user_agent_prefix.filter(|p| !p.trim().is_empty()),
            application_name: self.application_name.filter(|n| !n.trim().is_empty()),
            timeout,
        })
    }
}
