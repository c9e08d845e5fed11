//! Partner Center resource operations.
//!
//! Each resource is a [`ResourceNode`](crate::ResourceNode) specialized by a
//! marker kind, exposed under an `...Operations` alias:
//!
//! | Handle                                 | Addressed by                              |
//! |----------------------------------------|-------------------------------------------|
//! | [`CustomerCollectionOperations`]       | (root)                                    |
//! | [`CustomerOperations`]                 | customerId                                |
//! | [`SubscriptionCollectionOperations`]   | customerId                                |
//! | [`SubscriptionOperations`]             | customerId, subscriptionId                |
//! | [`OrderCollectionOperations`]          | customerId                                |
//! | [`OrderOperations`]                    | customerId, orderId                       |
//! | [`OrderLineItemOperations`]            | customerId, orderId, lineItemNumber       |
//! | [`DeviceBatchCollectionOperations`]    | customerId                                |
//! | [`DeviceBatchOperations`]              | customerId, deviceBatchId                 |
//! | [`DeviceOperations`]                   | customerId, deviceBatchId, deviceId       |
//!
//! Every terminal operation is one call to the operation of the same name in
//! the [`OperationRegistry`](crate::registry::OperationRegistry).

mod customers;
mod devices;
mod orders;
mod subscriptions;

pub use customers::{
    CustomerCollectionOperations, CustomerCollectionResource, CustomerOperations,
    CustomerResource,
};
pub use devices::{
    DeviceBatchCollectionOperations, DeviceBatchCollectionResource, DeviceBatchOperations,
    DeviceBatchResource, DeviceCollectionOperations, DeviceCollectionResource, DeviceOperations,
    DeviceResource,
};
pub use orders::{
    OrderCollectionOperations, OrderCollectionResource, OrderLineItemCollectionOperations,
    OrderLineItemCollectionResource, OrderLineItemOperations, OrderLineItemResource,
    OrderOperations, OrderResource,
};
pub use subscriptions::{
    SubscriptionActivationLinksOperations, SubscriptionActivationLinksResource,
    SubscriptionAddOnCollectionOperations, SubscriptionAddOnCollectionResource,
    SubscriptionCollectionOperations, SubscriptionCollectionResource,
    SubscriptionConversionCollectionOperations, SubscriptionConversionCollectionResource,
    SubscriptionOperations, SubscriptionProvisioningStatusOperations,
    SubscriptionProvisioningStatusResource, SubscriptionRegistrationOperations,
    SubscriptionRegistrationResource, SubscriptionRegistrationStatusOperations,
    SubscriptionRegistrationStatusResource, SubscriptionResource,
    SubscriptionSupportContactOperations, SubscriptionSupportContactResource,
    SubscriptionUpgradeCollectionOperations, SubscriptionUpgradeCollectionResource,
    SubscriptionUsageRecordCollectionOperations, SubscriptionUsageRecordCollectionResource,
    SubscriptionUsageSummaryOperations, SubscriptionUsageSummaryResource,
    SubscriptionUtilizationOperations, SubscriptionUtilizationResource,
};
