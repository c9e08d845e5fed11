//! The root partner client.

use std::sync::Arc;

use crate::clients::{ReqwestTransport, ServiceClient, Transport};
use crate::config::PartnerConfig;
use crate::context::ResourceContext;
use crate::error::PartnerError;
use crate::operations::CustomerCollectionOperations;
use crate::registry::OperationRegistry;
use crate::resources::cache::ChildCache;

/// Entry point into the resource graph.
///
/// Owns the configuration and the [`ServiceClient`] every resource handle
/// shares.
///
/// # Example
///
/// ```rust,ignore
/// use partner_center::{AccessToken, PartnerClient, PartnerConfig};
///
/// let config = PartnerConfig::builder()
///     .access_token(AccessToken::new(token)?)
///     .build()?;
/// let partner = PartnerClient::new(config)?;
///
/// let subscription = partner
///     .customers()
///     .by_id("cust-1")?
///     .subscriptions()
///     .by_id("sub-9")?
///     .get()
///     .await?;
/// ```
#[derive(Debug, Clone)]
pub struct PartnerClient {
    config: PartnerConfig,
    service: Arc<ServiceClient>,
    children: Arc<ChildCache>,
}

// Verify PartnerClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PartnerClient>();
};

impl PartnerClient {
    /// Creates a client with the default transport and the global registry.
    ///
    /// # Errors
    ///
    /// Returns [`PartnerError::Transport`] if the HTTP client cannot be built
    /// and [`PartnerError::Registry`] if the global registry is invalid.
    pub fn new(config: PartnerConfig) -> Result<Self, PartnerError> {
        Self::builder(config).build()
    }

    /// Creates a builder for overriding the transport or registry.
    #[must_use]
    pub fn builder(config: PartnerConfig) -> PartnerClientBuilder {
        PartnerClientBuilder {
            config,
            transport: None,
            registry: None,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &PartnerConfig {
        &self.config
    }

    /// Returns the shared service client.
    #[must_use]
    pub const fn service_client(&self) -> &Arc<ServiceClient> {
        &self.service
    }

    /// Returns the customer collection.
    #[must_use]
    pub fn customers(&self) -> Arc<CustomerCollectionOperations> {
        self.children.get_or_init(|| {
            CustomerCollectionOperations::with_context(
                Arc::clone(&self.service),
                ResourceContext::root(),
            )
        })
    }
}

/// Builder for [`PartnerClient`].
#[derive(Debug)]
pub struct PartnerClientBuilder {
    config: PartnerConfig,
    transport: Option<Arc<dyn Transport>>,
    registry: Option<Arc<OperationRegistry>>,
}

impl PartnerClientBuilder {
    /// Sends requests through `transport` instead of the default one.
    #[must_use]
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Resolves operations against `registry` instead of the global one.
    #[must_use]
    pub fn registry(mut self, registry: impl Into<Arc<OperationRegistry>>) -> Self {
        self.registry = Some(registry.into());
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// See [`PartnerClient::new`].
    pub fn build(self) -> Result<PartnerClient, PartnerError> {
        let transport: Arc<dyn Transport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new(self.config.timeout())?),
        };
        let registry = match self.registry {
            Some(registry) => registry,
            None => OperationRegistry::global()?,
        };

        let service = Arc::new(ServiceClient::new(&self.config, transport, registry));
        Ok(PartnerClient {
            config: self.config,
            service,
            children: Arc::new(ChildCache::new()),
        })
    }
}
