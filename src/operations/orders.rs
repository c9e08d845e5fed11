//! Order operations.

use std::sync::Arc;

use crate::error::{InvalidArgumentError, PartnerError};
use crate::models::{ActivationLink, Order};
use crate::resources::{resource_kind, ResourceCollection, ResourceNode};

resource_kind!(
    /// A customer's orders.
    OrderCollectionResource => "OrderCollection" ["customerId"]
);
resource_kind!(
    /// A single order.
    OrderResource => "Order" ["customerId", "orderId"]
);
resource_kind!(
    /// The line items of an order.
    OrderLineItemCollectionResource => "OrderLineItemCollection" ["customerId", "orderId"]
);
resource_kind!(
    /// A single order line item.
    OrderLineItemResource => "OrderLineItem" ["customerId", "orderId", "lineItemNumber"]
);

/// Operations on a customer's order collection.
pub type OrderCollectionOperations = ResourceNode<OrderCollectionResource>;

/// Operations on a single order.
pub type OrderOperations = ResourceNode<OrderResource>;

/// Operations on an order's line items.
pub type OrderLineItemCollectionOperations = ResourceNode<OrderLineItemCollectionResource>;

/// Operations on a single order line item.
pub type OrderLineItemOperations = ResourceNode<OrderLineItemResource>;

impl OrderCollectionOperations {
    /// Returns the order `order_id`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgumentError`] if `order_id` is blank.
    pub fn by_id(
        &self,
        order_id: impl Into<String>,
    ) -> Result<OrderOperations, InvalidArgumentError> {
        self.member(order_id)
    }

    /// Retrieves the customer's orders.
    ///
    /// # Errors
    ///
    /// Returns [`PartnerError`] if the call fails.
    pub async fn get(&self) -> Result<ResourceCollection<Order>, PartnerError> {
        self.fetch("GetOrders").await
    }

    /// Places an order.
    ///
    /// # Errors
    ///
    /// Returns [`PartnerError`] if the call fails.
    pub async fn create(&self, order: &Order) -> Result<Order, PartnerError> {
        self.invoke_mandatory("CreateOrder", &[], Some(order)).await
    }
}

impl OrderOperations {
    /// Retrieves the order.
    ///
    /// # Errors
    ///
    /// Returns [`PartnerError`] if the call fails.
    pub async fn get(&self) -> Result<Order, PartnerError> {
        self.invoke_mandatory::<(), _>("GetOrder", &[], None).await
    }

    /// Updates the order.
    ///
    /// # Errors
    ///
    /// Returns [`PartnerError`] if the call fails.
    pub async fn patch(&self, order: &Order) -> Result<Order, PartnerError> {
        self.invoke_mandatory("UpdateOrder", &[], Some(order)).await
    }

    /// The order's line items.
    #[must_use]
    pub fn line_items(&self) -> Arc<OrderLineItemCollectionOperations> {
        self.child()
    }
}

impl OrderLineItemCollectionOperations {
    /// Returns the line item numbered `line_item_number`.
    ///
    /// # Errors
    ///
    /// Infallible in practice: a number always renders to a non-blank
    /// identifier.
    pub fn by_id(
        &self,
        line_item_number: u32,
    ) -> Result<OrderLineItemOperations, InvalidArgumentError> {
        self.member(line_item_number.to_string())
    }
}

impl OrderLineItemOperations {
    /// Retrieves the activation links of the line item.
    ///
    /// # Errors
    ///
    /// Returns [`PartnerError`] if the call fails.
    pub async fn activation_links(
        &self,
    ) -> Result<ResourceCollection<ActivationLink>, PartnerError> {
        self.fetch("GetActivationLinksByLineItemNumber").await
    }
}
