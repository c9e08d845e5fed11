//! HTTP request types for the Partner Center SDK.
//!
//! This module provides the [`Verb`] enum and the [`TransportRequest`] handed
//! to a [`Transport`](crate::clients::Transport).

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer};

/// HTTP verbs used by Partner Center operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Verb {
    /// HTTP GET, for retrieving resources.
    Get,
    /// HTTP POST, for creating resources and triggering actions.
    Post,
    /// HTTP PATCH, for partial updates.
    Patch,
    /// HTTP PUT, for full replacement.
    Put,
    /// HTTP DELETE, for removing resources.
    Delete,
}

impl Verb {
    /// Returns `true` if requests with this verb may carry a body.
    ///
    /// GET and DELETE never send one.
    #[must_use]
    pub const fn carries_body(self) -> bool {
        matches!(self, Self::Post | Self::Patch | Self::Put)
    }

    /// Returns `true` if requests with this verb must carry a body.
    ///
    /// POST is allowed to be bodiless (actions such as activation).
    #[must_use]
    pub const fn requires_body(self) -> bool {
        matches!(self, Self::Patch | Self::Put)
    }

    /// Returns the verb as an upper-case method name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Verb {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PATCH" => Ok(Self::Patch),
            "PUT" => Ok(Self::Put),
            "DELETE" => Ok(Self::Delete),
            _ => Err(format!("unsupported HTTP verb '{s}'")),
        }
    }
}

impl<'de> Deserialize<'de> for Verb {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// A fully resolved request, ready to be sent by a transport.
///
/// The URL is absolute and already escaped; the transport must send it
/// unchanged.
///
/// # Example
///
/// ```rust
/// use partner_center::clients::{TransportRequest, Verb};
///
/// let request = TransportRequest::new(Verb::Get, "https://api.example.com/v1/customers/c-1")
///     .header("Accept", "application/json");
///
/// assert_eq!(request.verb, Verb::Get);
/// assert!(request.body.is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransportRequest {
    /// The HTTP verb.
    pub verb: Verb,
    /// The absolute, escaped URL.
    pub url: String,
    /// Request headers.
    pub headers: HashMap<String, String>,
    /// The serialized body, if any.
    pub body: Option<Vec<u8>>,
}

impl TransportRequest {
    /// Creates a request with no headers and no body.
    #[must_use]
    pub fn new(verb: Verb, url: impl Into<String>) -> Self {
        Self {
            verb,
            url: url.into(),
            headers: HashMap::new(),
            body: None,
        }
    }

    /// Adds a single header, replacing any previous value.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Merges a set of headers, replacing existing keys.
    #[must_use]
    pub fn headers<'a>(
        mut self,
        headers: impl IntoIterator<Item = (&'a String, &'a String)>,
    ) -> Self {
        for (key, value) in headers {
            self.headers.insert(key.clone(), value.clone());
        }
        self
    }

    /// Sets the body. Ignored for verbs that carry none.
    #[must_use]
    pub fn body(mut self, body: Vec<u8>) -> Self {
        if self.verb.carries_body() {
            self.body = Some(body);
        }
        self
    }
}
