//! Customer operations.

use std::sync::Arc;

use serde::de::IgnoredAny;

use crate::error::{InvalidArgumentError, PartnerError};
use crate::models::Customer;
use crate::operations::{
    DeviceBatchCollectionOperations, OrderCollectionOperations, SubscriptionCollectionOperations,
};
use crate::resources::{resource_kind, ResourceCollection, ResourceNode};

resource_kind!(
    /// The partner's customers.
    CustomerCollectionResource => "CustomerCollection" []
);
resource_kind!(
    /// A single customer.
    CustomerResource => "Customer" ["customerId"]
);

/// Operations on the partner's customer collection.
pub type CustomerCollectionOperations = ResourceNode<CustomerCollectionResource>;

/// Operations on a single customer.
pub type CustomerOperations = ResourceNode<CustomerResource>;

impl CustomerCollectionOperations {
    /// Returns the customer `customer_id`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgumentError`] if `customer_id` is blank.
    pub fn by_id(
        &self,
        customer_id: impl Into<String>,
    ) -> Result<CustomerOperations, InvalidArgumentError> {
        self.member(customer_id)
    }

    /// Retrieves the first page of customers.
    ///
    /// # Errors
    ///
    /// Returns [`PartnerError`] if the call fails.
    pub async fn get(&self) -> Result<ResourceCollection<Customer>, PartnerError> {
        self.fetch("GetCustomers").await
    }

    /// Retrieves the first `size` customers.
    ///
    /// # Errors
    ///
    /// Returns [`PartnerError`] if the call fails.
    pub async fn get_with_size(
        &self,
        size: u32,
    ) -> Result<ResourceCollection<Customer>, PartnerError> {
        let size = size.to_string();
        self.invoke::<(), _>("GetCustomersWithSize", &[size.as_str()], None)
            .await
    }

    /// Creates a customer.
    ///
    /// # Errors
    ///
    /// Returns [`PartnerError`] if the call fails.
    pub async fn create(&self, customer: &Customer) -> Result<Customer, PartnerError> {
        self.invoke_mandatory("CreateCustomer", &[], Some(customer))
            .await
    }
}

impl CustomerOperations {
    /// Retrieves the customer.
    ///
    /// # Errors
    ///
    /// Returns [`PartnerError`] if the call fails.
    pub async fn get(&self) -> Result<Customer, PartnerError> {
        self.invoke_mandatory::<(), _>("GetCustomer", &[], None).await
    }

    /// Deletes the customer. Only available in the integration sandbox.
    ///
    /// # Errors
    ///
    /// Returns [`PartnerError`] if the call fails.
    pub async fn delete(&self) -> Result<(), PartnerError> {
        self.invoke::<(), IgnoredAny>("DeleteCustomer", &[], None)
            .await
            .map(|_| ())
    }

    /// The customer's subscriptions.
    #[must_use]
    pub fn subscriptions(&self) -> Arc<SubscriptionCollectionOperations> {
        self.child()
    }

    /// The customer's orders.
    #[must_use]
    pub fn orders(&self) -> Arc<OrderCollectionOperations> {
        self.child()
    }

    /// The customer's device batches.
    #[must_use]
    pub fn device_batches(&self) -> Arc<DeviceBatchCollectionOperations> {
        self.child()
    }
}
