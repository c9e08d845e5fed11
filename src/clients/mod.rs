//! HTTP client types for Partner Center API communication.
//!
//! This module provides the layer between resource handles and the wire.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ServiceClient`]: The generic invoker that resolves an operation name
//!   and identifiers into one HTTP call
//! - [`Transport`]: The injectable boundary that actually sends a request
//! - [`ReqwestTransport`]: The default `reqwest`-backed transport
//! - [`TransportRequest`] / [`TransportResponse`]: What crosses that boundary
//! - [`Verb`]: Supported HTTP verbs (GET, POST, PATCH, PUT, DELETE)
//! - [`RemoteError`] / [`TransportError`]: Wire-level failures
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use partner_center::clients::{ReqwestTransport, ServiceClient};
//! use partner_center::registry::OperationRegistry;
//! use partner_center::PartnerConfig;
//!
//! let config = PartnerConfig::default();
//! let transport = Arc::new(ReqwestTransport::new(config.timeout())?);
//! let client = ServiceClient::new(&config, transport, OperationRegistry::global()?);
//!
//! let customer: serde_json::Value = client
//!     .invoke::<(), _>("GetCustomer", &["cust-1"], None)
//!     .await?;
//! ```
//!
//! # Retry Behavior
//!
//! None. Every [`TransportError`] is retry-eligible and every
//! [`RemoteError`] carries its status, so a policy can be layered on top.

mod errors;
mod http_request;
mod http_response;
mod service_client;
mod transport;

pub use errors::{RemoteError, TransportError, TransportErrorKind};
pub use http_request::{TransportRequest, Verb};
pub use http_response::{ErrorDetails, TransportResponse};
pub use service_client::{ServiceClient, SDK_VERSION};
pub use transport::{ReqwestTransport, Transport};
