//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated API root URL.
///
/// Must be an absolute `http` or `https` URL with a host and no query or
/// fragment. A trailing `/` is removed so paths can be joined uniformly.
///
/// # Example
///
/// ```rust
/// use partner_center::ApiRoot;
///
/// let root = ApiRoot::new("https://api.partnercenter.microsoft.com/").unwrap();
/// assert_eq!(root.as_ref(), "https://api.partnercenter.microsoft.com");
/// assert_eq!(root.host_name(), Some("api.partnercenter.microsoft.com"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRoot {
    url: String,
    host: Option<String>,
}

impl ApiRoot {
    /// The production Partner Center endpoint.
    pub const DEFAULT: &'static str = "https://api.partnercenter.microsoft.com";

    /// Creates a new validated API root.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiRoot`] if the URL is invalid.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let trimmed = url.trim();
        let invalid = || ConfigError::InvalidApiRoot {
            url: trimmed.to_string(),
        };

        let parsed = url::Url::parse(trimmed).map_err(|_| invalid())?;
        if !matches!(parsed.scheme(), "http" | "https")
            || parsed.host_str().is_none()
            || parsed.query().is_some()
            || parsed.fragment().is_some()
        {
            return Err(invalid());
        }

        Ok(Self {
            url: parsed.as_str().trim_end_matches('/').to_string(),
            host: parsed.host_str().map(ToString::to_string),
        })
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> Option<&str> {
        self.host.as_deref()
    }
}

impl Default for ApiRoot {
    fn default() -> Self {
        Self {
            url: Self::DEFAULT.to_string(),
            host: Some("api.partnercenter.microsoft.com".to_string()),
        }
    }
}

impl AsRef<str> for ApiRoot {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

/// A validated API version path segment, such as `v1`.
///
/// # Serialization
///
/// `ApiVersion` serializes to and deserializes from its string form:
///
/// ```rust
/// use partner_center::ApiVersion;
///
/// let version: ApiVersion = serde_json::from_str(r#""v1""#).unwrap();
/// assert_eq!(version, ApiVersion::default());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ApiVersion(String);

impl ApiVersion {
    /// Creates a new validated API version.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiVersion`] if the version is empty or
    /// is not a single alphanumeric path segment.
    pub fn new(version: impl Into<String>) -> Result<Self, ConfigError> {
        let version = version.into().trim().to_string();
        let valid = !version.is_empty()
            && version
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-');
        if !valid {
            return Err(ConfigError::InvalidApiVersion { version });
        }
        Ok(Self(version))
    }
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self("v1".to_string())
    }
}

impl AsRef<str> for ApiVersion {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for ApiVersion {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ApiVersion {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// A validated locale tag sent as the `X-Locale` header.
///
/// Accepts `language` or `language-REGION` forms (`en`, `en-US`, `fr-CA`).
///
/// # Example
///
/// ```rust
/// use partner_center::Locale;
///
/// assert!(Locale::new("fr-CA").is_ok());
/// assert!(Locale::new("fr_CA").is_err());
/// assert_eq!(Locale::default().as_ref(), "en-US");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Locale(String);

impl Locale {
    /// Creates a new validated locale.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLocale`] if the tag is malformed.
    pub fn new(locale: impl Into<String>) -> Result<Self, ConfigError> {
        let locale = locale.into().trim().to_string();
        let mut parts = locale.split('-');
        let language_ok = parts
            .next()
            .is_some_and(|l| (2..=3).contains(&l.len()) && l.chars().all(|c| c.is_ascii_alphabetic()));
        let rest_ok = parts.all(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_alphanumeric()));

        if !language_ok || !rest_ok {
            return Err(ConfigError::InvalidLocale { locale });
        }
        Ok(Self(locale))
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self("en-US".to_string())
    }
}

impl AsRef<str> for Locale {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A bearer token for the `Authorization` header.
///
/// The `Debug` implementation masks the value, displaying only
/// `AccessToken(*****)`.
///
/// # Example
///
/// ```rust
/// use partner_center::AccessToken;
///
/// let token = AccessToken::new("eyJ0eXAi...").unwrap();
/// assert_eq!(format!("{:?}", token), "AccessToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is blank.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ConfigError::EmptyAccessToken);
        }
        Ok(Self(token))
    }

    /// Returns the value of the `Authorization` header.
    #[must_use]
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}
