//! # Partner Center Rust SDK
//!
//! A Rust SDK for the Partner Center REST API, exposing customers,
//! subscriptions, orders and devices as a navigable graph of typed resource
//! handles.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`PartnerConfig`] and [`PartnerConfigBuilder`]
//! - Validated, immutable resource addresses via [`ResourceContext`]
//! - A registry mapping operation names to HTTP verb + path template via
//!   [`registry::OperationRegistry`]
//! - A generic invoker, [`clients::ServiceClient`], over an injectable
//!   [`clients::Transport`]
//! - Lazily built, cached child handles on every [`ResourceNode`]
//! - A single error type, [`PartnerError`], separating invalid input, remote
//!   rejections and transport failures
//!
//! ## Quick Start
//!
//! ```rust
//! use partner_center::{AccessToken, PartnerClient, PartnerConfig};
//!
//! let config = PartnerConfig::builder()
//!     .access_token(AccessToken::new("eyJ0eXAi...").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let partner = PartnerClient::new(config).unwrap();
//!
//! // Navigating performs no I/O.
//! let subscription = partner
//!     .customers()
//!     .by_id("cust-1")
//!     .unwrap()
//!     .subscriptions()
//!     .by_id("sub-9")
//!     .unwrap();
//!
//! assert_eq!(subscription.context().components(), &["cust-1", "sub-9"]);
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use partner_center::models::Subscription;
//!
//! let current = subscription.get().await?;
//!
//! let renamed = subscription
//!     .patch(&Subscription {
//!         friendly_name: Some("Office (Sales)".to_string()),
//!         ..current
//!     })
//!     .await?;
//!
//! let usage = subscription.usage_summary().get().await?;
//! ```
//!
//! ## Error Handling
//!
//! ```rust,ignore
//! use partner_center::PartnerError;
//!
//! match subscription.get().await {
//!     Ok(s) => println!("{:?}", s.status),
//!     Err(PartnerError::Remote(e)) if e.is_not_found() => println!("gone"),
//!     Err(e) if e.is_retryable() => println!("transport failure: {e}"),
//!     Err(e) => return Err(e.into()),
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **Fail-fast validation**: Blank identifiers and missing payloads are
//!   rejected before a request exists
//! - **Read-only shared state**: The operation registry is loaded once and
//!   never mutated
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **No hidden retries**: Retry policy belongs to the caller

pub mod clients;
pub mod config;
pub mod context;
pub mod error;
pub mod models;
pub mod operations;
pub mod registry;
pub mod resources;

// Re-export public types at crate root for convenience
pub use config::{
    AccessToken, ApiRoot, ApiVersion, Locale, PartnerConfig, PartnerConfigBuilder,
};
pub use context::ResourceContext;
pub use error::{ConfigError, InvalidArgumentError, PartnerError};

// Re-export HTTP client types
pub use clients::{
    RemoteError, ReqwestTransport, ServiceClient, Transport, TransportError, TransportErrorKind,
    Verb,
};

pub use registry::{OperationDescriptor, OperationRegistry, RegistryError};
pub use resources::{
    PartnerClient, PartnerClientBuilder, Resource, ResourceCollection, ResourceKind, ResourceNode,
};
