//! Payload types carried by the domain operations.
//!
//! Only the fields the SDK's own logic or common callers touch are typed.
//! Everything else the service sends is kept in each model's `extra` map and
//! written back unchanged, so a fetched resource can be patched without
//! losing data.

mod customer;
mod device;
mod order;
mod subscription;
mod usage;

pub use customer::{Address, CompanyProfile, Customer, CustomerBillingProfile};
pub use device::{Device, DeviceBatch, DeviceBatchCreationRequest, DeviceUploadStatus};
pub use order::{ActivationLink, Order, OrderLineItem};
pub use subscription::{
    AzureEntitlement, Conversion, ConversionResult, Subscription, SubscriptionActivationResult,
    SubscriptionProvisioningStatus, SubscriptionRegistrationStatus, SubscriptionStatus,
    SupportContact, Upgrade, UpgradeResult,
};
pub use usage::{
    AzureUtilizationGranularity, AzureUtilizationRecord, ResourceUsageRecord,
    SubscriptionUsageSummary,
};

/// Fields not modelled explicitly.
pub type Extra = serde_json::Map<String, serde_json::Value>;
