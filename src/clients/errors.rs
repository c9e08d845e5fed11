//! HTTP-level error types for the Partner Center SDK.
//!
//! This module contains the two errors that come back from the wire:
//!
//! - [`RemoteError`]: the service answered with a non-success status
//! - [`TransportError`]: the service could not be reached at all
//!
//! Keeping them separate lets a retry policy layered above the SDK tell
//! "the server said no" from "could not reach the server".
//!
//! # Example
//!
//! ```rust,ignore
//! use partner_center::{PartnerError, TransportErrorKind};
//!
//! match customer.get().await {
//!     Err(PartnerError::Remote(e)) => {
//!         println!("{} failed with {} ({:?}): {}", e.operation, e.status, e.code, e.message);
//!     }
//!     Err(PartnerError::Transport(e)) if e.kind == TransportErrorKind::Timeout => {
//!         println!("timed out, safe to retry");
//!     }
//!     _ => {}
//! }
//! ```

use std::fmt;

use thiserror::Error;

/// Error returned when the service answers with a non-success status.
///
/// Carries everything needed to diagnose the failure: the status, the
/// machine-readable code from the error payload (if any), a human message,
/// and the operation and path that produced it.
///
/// # Example
///
/// ```rust
/// use partner_center::RemoteError;
///
/// let error = RemoteError {
///     status: 404,
///     code: Some("NotFound".to_string()),
///     message: "no such subscription".to_string(),
///     operation: "GetSubscription".to_string(),
///     path: "customers/cust-1/subscriptions/sub-9".to_string(),
///     request_id: None,
/// };
///
/// assert!(error.to_string().contains("404"));
/// assert!(error.to_string().contains("NotFound"));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{operation} failed with status {status}{}: {message}", .code.as_deref().map(|c| format!(" ({c})")).unwrap_or_default())]
pub struct RemoteError {
    /// The HTTP status code of the response.
    pub status: u16,
    /// Machine-readable error code from the payload, if supplied.
    pub code: Option<String>,
    /// Human-readable error message.
    pub message: String,
    /// The operation that was invoked.
    pub operation: String,
    /// The resolved request path.
    pub path: String,
    /// The `MS-RequestId` sent with the request, for support tickets.
    pub request_id: Option<String>,
}

impl RemoteError {
    /// Returns `true` for 404 responses.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        self.status == 404
    }
}

/// The category of a transport failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransportErrorKind {
    /// The request did not complete within the transport's deadline.
    Timeout,
    /// The connection could not be established (refused, DNS, TLS).
    Connect,
    /// The request could not be built or sent.
    Request,
    /// The response body could not be read.
    Body,
}

impl fmt::Display for TransportErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timeout => write!(f, "timeout"),
            Self::Connect => write!(f, "connect"),
            Self::Request => write!(f, "request"),
            Self::Body => write!(f, "body"),
        }
    }
}

/// Error returned when the service could not be reached.
///
/// Every transport error is eligible for retry; the SDK itself never retries.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Transport error ({kind}): {message}")]
pub struct TransportError {
    /// The failure category.
    pub kind: TransportErrorKind,
    /// Description of the failure.
    pub message: String,
}

impl TransportError {
    /// Creates a new transport error.
    #[must_use]
    pub fn new(kind: TransportErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Always `true`: a transport failure says nothing about the server's
    /// answer, so the request may be attempted again.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        true
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(error: reqwest::Error) -> Self {
        let kind = if error.is_timeout() {
            TransportErrorKind::Timeout
        } else if error.is_connect() {
            TransportErrorKind::Connect
        } else if error.is_body() || error.is_decode() {
            TransportErrorKind::Body
        } else {
            TransportErrorKind::Request
        };
        Self::new(kind, error.to_string())
    }
}
