//! Error types for the Partner Center SDK.
//!
//! This module contains the configuration and argument validation errors, and
//! [`PartnerError`], the unified error returned by every terminal operation.
//!
//! # Error Handling
//!
//! Failures fall into four families, and each one is a distinct variant so
//! callers can tell them apart without string matching:
//!
//! - [`PartnerError::InvalidArgument`]: the caller's input was invalid. Raised
//!   before anything is sent.
//! - [`PartnerError::Registry`]: an operation name or path template was misused.
//! - [`PartnerError::Remote`]: the service answered with a non-success status.
//! - [`PartnerError::Transport`]: the service could not be reached.
//!
//! # Example
//!
//! ```rust
//! use partner_center::{InvalidArgumentError, ResourceContext};
//!
//! let result = ResourceContext::new(["cust-1", "  "]);
//! assert!(matches!(
//!     result,
//!     Err(InvalidArgumentError::BlankIdentifier { position: 1, .. })
//! ));
//! ```

use thiserror::Error;

use crate::clients::{RemoteError, TransportError};
use crate::registry::RegistryError;

/// Errors that can occur during SDK configuration.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The API root URL is invalid.
    #[error("Invalid API root '{url}'. Expected an absolute http(s) URL without query or fragment (e.g., 'https://api.partnercenter.microsoft.com').")]
    InvalidApiRoot {
        /// The invalid URL that was provided.
        url: String,
    },

    /// The API version is invalid.
    #[error("Invalid API version '{version}'. Expected a single path segment such as 'v1'.")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// The locale is invalid.
    #[error("Invalid locale '{locale}'. Expected a language tag such as 'en-US'.")]
    InvalidLocale {
        /// The invalid locale that was provided.
        locale: String,
    },

    /// Access token cannot be empty.
    #[error("Access token cannot be empty. Omit the token instead of passing an empty one.")]
    EmptyAccessToken,

    /// The request timeout must be positive.
    #[error("Request timeout must be greater than zero.")]
    InvalidTimeout,
}

/// Errors raised synchronously when a caller supplies invalid input.
///
/// These never reach the transport: resource handles are not constructed and
/// no request is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidArgumentError {
    /// An identifier component is empty or whitespace-only.
    #[error("{} must be set (identifier at position {position} is empty or whitespace)", .name.unwrap_or("identifier"))]
    BlankIdentifier {
        /// Zero-based position of the offending component.
        position: usize,
        /// The component's field name, when the constructor knows it.
        name: Option<&'static str>,
    },

    /// An identifier is `.` or `..`, which a URL would collapse into the
    /// neighbouring segments.
    #[error("{} must not be a dot segment (identifier at position {position} is '{value}')", .name.unwrap_or("identifier"))]
    DotSegment {
        /// Zero-based position of the offending component.
        position: usize,
        /// The component's field name, when the constructor knows it.
        name: Option<&'static str>,
        /// The rejected identifier.
        value: String,
    },

    /// A resource context was built from an empty identifier list.
    #[error("A resource context requires at least one identifier.")]
    EmptyContext,

    /// A resource handle was given the wrong number of identifiers.
    #[error("{resource} is addressed by {expected} identifier(s) but {actual} were supplied")]
    ContextShape {
        /// The resource kind being constructed.
        resource: &'static str,
        /// The number of identifiers the resource kind requires.
        expected: usize,
        /// The number of identifiers that were supplied.
        actual: usize,
    },

    /// A mutating operation was invoked without its required payload.
    #[error("{operation} requires a request payload ({verb} cannot be sent without a body)")]
    MissingPayload {
        /// The operation that was invoked.
        operation: String,
        /// The HTTP verb of the operation.
        verb: String,
    },
}

/// Unified error type for all SDK operations.
///
/// Lower-level errors convert into `PartnerError` via `From`, so `?`
/// composes across layers.
///
/// # Example
///
/// ```rust,ignore
/// use partner_center::PartnerError;
///
/// match subscription.get().await {
///     Ok(subscription) => println!("{:?}", subscription.friendly_name),
///     Err(PartnerError::Remote(e)) if e.status == 404 => println!("gone"),
///     Err(e) if e.is_retryable() => println!("try again later: {e}"),
///     Err(e) => return Err(e),
/// }
/// ```
#[derive(Debug, Error)]
pub enum PartnerError {
    /// The caller's input was invalid.
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgumentError),

    /// The operation registry was misused.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// The service rejected the request.
    #[error(transparent)]
    Remote(#[from] RemoteError),

    /// The service could not be reached.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The SDK configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The request payload could not be serialized.
    #[error("Failed to serialize request for {operation}: {source}")]
    Serialization {
        /// The operation being invoked.
        operation: String,
        /// The underlying serde error.
        #[source]
        source: serde_json::Error,
    },

    /// A successful response body did not match the declared response type.
    #[error("Failed to deserialize response of {operation}: {source}")]
    Deserialization {
        /// The operation being invoked.
        operation: String,
        /// The underlying serde error.
        #[source]
        source: serde_json::Error,
    },

    /// A mandatory response was empty.
    #[error("{operation} returned an empty body but a response was required")]
    EmptyResponse {
        /// The operation being invoked.
        operation: String,
    },
}

impl PartnerError {
    /// Returns `true` if an upper layer may safely retry the call.
    ///
    /// Only transport failures qualify. The SDK never retries on its own.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Returns the HTTP status of a remote failure, if this is one.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Remote(e) => Some(e.status),
            _ => None,
        }
    }

    /// Returns the remote failure, if this is one.
    #[must_use]
    pub const fn as_remote(&self) -> Option<&RemoteError> {
        match self {
            Self::Remote(e) => Some(e),
            _ => None,
        }
    }
}

// Verify error types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ConfigError>();
    assert_send_sync::<InvalidArgumentError>();
    assert_send_sync::<PartnerError>();
};
