//! The generic resource handle.
//!
//! Every addressable resource is a [`ResourceNode`] parameterized by a
//! zero-sized [`ResourceKind`] marker. The marker supplies the resource's name
//! and the field names of its identifiers; behaviour specific to a resource is
//! added with `impl ResourceNode<Kind>` blocks in [`crate::operations`].

use std::any::Any;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::clients::ServiceClient;
use crate::context::ResourceContext;
use crate::error::{InvalidArgumentError, PartnerError};
use crate::resources::cache::ChildCache;
use crate::resources::PartnerClient;

/// Compile-time description of a resource type.
pub trait ResourceKind: Send + Sync + 'static {
    /// Human-readable resource name, used in error messages.
    const NAME: &'static str;

    /// Field names of the identifiers addressing one instance, outermost
    /// first. Empty for root-level collections.
    const IDENTIFIERS: &'static [&'static str];
}

/// Declares a [`ResourceKind`] marker type.
macro_rules! resource_kind {
    ($(#[$meta:meta])* $kind:ident => $name:literal [$($id:literal),* $(,)?]) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $kind {}

        impl $crate::resources::ResourceKind for $kind {
            const NAME: &'static str = $name;
            const IDENTIFIERS: &'static [&'static str] = &[$($id),*];
        }
    };
}

pub(crate) use resource_kind;

/// A handle to one resource instance.
///
/// Holds the instance's [`ResourceContext`], a shared reference to the
/// [`ServiceClient`] and a cache of child handles. Handles are cheap to create
/// and hold no response data.
pub struct ResourceNode<K: ResourceKind> {
    client: Arc<ServiceClient>,
    context: ResourceContext,
    children: ChildCache,
    kind: PhantomData<fn() -> K>,
}

// Verify ResourceNode is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    enum Probe {}
    impl ResourceKind for Probe {
        const NAME: &'static str = "Probe";
        const IDENTIFIERS: &'static [&'static str] = &[];
    }
    assert_send_sync::<ResourceNode<Probe>>();
};

impl<K: ResourceKind> ResourceNode<K> {
    /// Creates a handle from raw identifiers.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgumentError::ContextShape`] if the number of
    /// identifiers does not match the resource kind, and
    /// [`InvalidArgumentError::BlankIdentifier`] for a blank identifier.
    ///
    /// # Example
    ///
    /// ```rust
    /// use partner_center::{InvalidArgumentError, PartnerClient, PartnerConfig};
    /// use partner_center::operations::SubscriptionOperations;
    ///
    /// let partner = PartnerClient::new(PartnerConfig::default()).unwrap();
    ///
    /// let subscription = SubscriptionOperations::new(&partner, &["cust-1", "sub-9"]).unwrap();
    /// assert_eq!(subscription.context().components(), &["cust-1", "sub-9"]);
    ///
    /// let blank = SubscriptionOperations::new(&partner, &["", "sub-9"]);
    /// assert!(matches!(
    ///     blank,
    ///     Err(InvalidArgumentError::BlankIdentifier { position: 0, name: Some("customerId") })
    /// ));
    /// ```
    pub fn new<S: AsRef<str>>(
        partner: &PartnerClient,
        ids: &[S],
    ) -> Result<Self, InvalidArgumentError> {
        Ok(Self::with_context(
            Arc::clone(partner.service_client()),
            Self::context_for(ids)?,
        ))
    }

    fn context_for<S: AsRef<str>>(ids: &[S]) -> Result<ResourceContext, InvalidArgumentError> {
        if ids.len() != K::IDENTIFIERS.len() {
            return Err(InvalidArgumentError::ContextShape {
                resource: K::NAME,
                expected: K::IDENTIFIERS.len(),
                actual: ids.len(),
            });
        }
        if ids.is_empty() {
            return Ok(ResourceContext::root());
        }
        ResourceContext::named(K::IDENTIFIERS, ids)
    }

    /// Wraps an already validated context.
    pub(crate) fn with_context(client: Arc<ServiceClient>, context: ResourceContext) -> Self {
        debug_assert_eq!(context.len(), K::IDENTIFIERS.len());
        Self {
            client,
            context,
            children: ChildCache::new(),
            kind: PhantomData,
        }
    }

    /// Returns the resource's address.
    #[must_use]
    pub const fn context(&self) -> &ResourceContext {
        &self.context
    }

    /// Returns the client requests are sent through.
    #[must_use]
    pub const fn client(&self) -> &Arc<ServiceClient> {
        &self.client
    }

    /// Returns the resource kind's name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        K::NAME
    }

    /// Returns the child handle of kind `C`, bound to this node's context.
    ///
    /// The child is built on first access; later calls, from any thread,
    /// return the same instance.
    #[must_use]
    pub fn child<C: ResourceKind>(&self) -> Arc<ResourceNode<C>> {
        self.children.get_or_init(|| {
            tracing::trace!(parent = K::NAME, child = C::NAME, "building child handle");
            ResourceNode::<C>::with_context(Arc::clone(&self.client), self.context.clone())
        })
    }

    /// Returns a fresh handle to the member `id` of this collection.
    ///
    /// Members are not cached.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgumentError::BlankIdentifier`] if `id` is blank.
    pub fn member<C: ResourceKind>(
        &self,
        id: impl Into<String>,
    ) -> Result<ResourceNode<C>, InvalidArgumentError> {
        let name = C::IDENTIFIERS.get(self.context.len()).copied();
        let context = self.context.extend_named(id, name)?;
        Ok(ResourceNode::with_context(Arc::clone(&self.client), context))
    }

    /// Invokes `operation` with this node's identifiers followed by `extra`.
    ///
    /// # Errors
    ///
    /// See [`ServiceClient::invoke`].
    pub async fn invoke<B, T>(
        &self,
        operation: &str,
        extra: &[&str],
        body: Option<&B>,
    ) -> Result<T, PartnerError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned + Default,
    {
        let components = self.components_with(extra);
        self.client.invoke(operation, &components, body).await
    }

    /// Invokes `operation`, failing if the response body is empty.
    ///
    /// # Errors
    ///
    /// See [`ServiceClient::invoke_mandatory`].
    pub async fn invoke_mandatory<B, T>(
        &self,
        operation: &str,
        extra: &[&str],
        body: Option<&B>,
    ) -> Result<T, PartnerError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let components = self.components_with(extra);
        self.client.invoke_mandatory(operation, &components, body).await
    }

    /// GET shorthand for operations addressed by this node alone.
    pub(crate) async fn fetch<T>(&self, operation: &str) -> Result<T, PartnerError>
    where
        T: DeserializeOwned + Default,
    {
        self.invoke::<(), T>(operation, &[], None).await
    }

    fn components_with<'a>(&'a self, extra: &[&'a str]) -> Vec<&'a str> {
        self.context
            .components()
            .iter()
            .map(String::as_str)
            .chain(extra.iter().copied())
            .collect()
    }
}

impl<K: ResourceKind> fmt::Debug for ResourceNode<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceNode")
            .field("kind", &K::NAME)
            .field("context", &self.context)
            .field("children", &self.children)
            .finish_non_exhaustive()
    }
}

/// Type-erased access to any resource handle.
pub trait Resource: Any + Send + Sync + fmt::Debug {
    /// Returns the resource's address.
    fn context(&self) -> &ResourceContext;

    /// Returns the resource kind's name.
    fn name(&self) -> &'static str;
}

impl<K: ResourceKind> Resource for ResourceNode<K> {
    fn context(&self) -> &ResourceContext {
        &self.context
    }

    fn name(&self) -> &'static str {
        K::NAME
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PartnerConfig;
    use crate::registry::OperationRegistry;

    resource_kind!(Parent => "Parent" ["parentId"]);
    resource_kind!(Children => "Children" ["parentId"]);
    resource_kind!(Member => "Member" ["parentId", "memberId"]);

    fn partner() -> PartnerClient {
        PartnerClient::builder(PartnerConfig::default())
            .registry(OperationRegistry::new())
            .build()
            .unwrap()
    }

    #[test]
    fn test_new_validates_shape_then_blanks() {
        let partner = partner();

        assert_eq!(
            ResourceNode::<Member>::new(&partner, &["p-1"]).unwrap_err(),
            InvalidArgumentError::ContextShape {
                resource: "Member",
                expected: 2,
                actual: 1
            }
        );
        assert_eq!(
            ResourceNode::<Member>::new(&partner, &["p-1", " "]).unwrap_err(),
            InvalidArgumentError::BlankIdentifier {
                position: 1,
                name: Some("memberId")
            }
        );
    }

    #[test]
    fn test_child_is_cached_and_shares_context() {
        let partner = partner();
        let parent = ResourceNode::<Parent>::new(&partner, &["p-1"]).unwrap();

        let first = parent.child::<Children>();
        let second = parent.child::<Children>();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.context(), parent.context());
        assert!(Arc::ptr_eq(first.client(), parent.client()));
    }

    #[test]
    fn test_member_is_fresh_and_validated() {
        let partner = partner();
        let children = ResourceNode::<Children>::new(&partner, &["p-1"]).unwrap();

        let member = children.member::<Member>("m-1").unwrap();
        assert_eq!(member.context().components(), &["p-1", "m-1"]);

        assert_eq!(
            children.member::<Member>("").unwrap_err(),
            InvalidArgumentError::BlankIdentifier {
                position: 1,
                name: Some("memberId")
            }
        );
    }

    #[test]
    fn test_components_with_appends_extra() {
        let partner = partner();
        let member = ResourceNode::<Member>::new(&partner, &["p-1", "m-1"]).unwrap();
        assert_eq!(member.components_with(&["x"]), vec!["p-1", "m-1", "x"]);
    }

    #[test]
    fn test_debug_and_type_erasure() {
        let partner = partner();
        let member = ResourceNode::<Member>::new(&partner, &["p-1", "m-1"]).unwrap();
        let erased: &dyn Resource = &member;

        assert_eq!(erased.name(), "Member");
        assert_eq!(erased.context().len(), 2);
        assert!(format!("{member:?}").contains("Member"));
    }
}
