//! The resource graph.
//!
//! A [`PartnerClient`] is the root. Every node below it is a
//! [`ResourceNode`] bound to one [`ResourceContext`](crate::ResourceContext):
//!
//! - fixed children (`customer.subscriptions()`) are built once and cached
//! - members of a collection (`subscriptions.by_id(id)`) are built per call
//! - terminal operations (`get`, `patch`, ...) always go to the service
//!
//! Building a handle performs no I/O; invalid identifiers are rejected
//! before any request exists.

mod cache;
mod collection;
mod node;
mod partner;

pub use cache::ChildCache;
pub use collection::ResourceCollection;
pub(crate) use node::resource_kind;
pub use node::{Resource, ResourceKind, ResourceNode};
pub use partner::{PartnerClient, PartnerClientBuilder};
