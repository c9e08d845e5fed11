//! Subscription operations.

use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::de::IgnoredAny;

use crate::error::{InvalidArgumentError, PartnerError};
use crate::models::{
    ActivationLink, AzureEntitlement, AzureUtilizationGranularity, AzureUtilizationRecord,
    Conversion, ConversionResult, ResourceUsageRecord, Subscription, SubscriptionActivationResult,
    SubscriptionProvisioningStatus, SubscriptionRegistrationStatus, SubscriptionUsageSummary,
    SupportContact, Upgrade, UpgradeResult,
};
use crate::resources::{resource_kind, ResourceCollection, ResourceNode};

resource_kind!(
    /// A customer's subscriptions.
    SubscriptionCollectionResource => "SubscriptionCollection" ["customerId"]
);
resource_kind!(
    /// A single subscription.
    SubscriptionResource => "Subscription" ["customerId", "subscriptionId"]
);
resource_kind!(
    /// A subscription's add-ons.
    SubscriptionAddOnCollectionResource => "SubscriptionAddOnCollection" ["customerId", "subscriptionId"]
);
resource_kind!(
    /// Upgrades available to a subscription.
    SubscriptionUpgradeCollectionResource => "SubscriptionUpgradeCollection" ["customerId", "subscriptionId"]
);
resource_kind!(
    /// Per-resource usage records of a subscription.
    SubscriptionUsageRecordCollectionResource => "SubscriptionUsageRecordCollection" ["customerId", "subscriptionId"]
);
resource_kind!(
    /// A subscription's usage summary.
    SubscriptionUsageSummaryResource => "SubscriptionUsageSummary" ["customerId", "subscriptionId"]
);
resource_kind!(
    /// A subscription's provisioning status.
    SubscriptionProvisioningStatusResource => "SubscriptionProvisioningStatus" ["customerId", "subscriptionId"]
);
resource_kind!(
    /// A subscription's support contact.
    SubscriptionSupportContactResource => "SubscriptionSupportContact" ["customerId", "subscriptionId"]
);

resource_kind!(
    /// A subscription's activation links.
    SubscriptionActivationLinksResource => "SubscriptionActivationLinks" ["customerId", "subscriptionId"]
);
resource_kind!(
    /// A subscription's Azure utilization records.
    SubscriptionUtilizationResource => "SubscriptionUtilization" ["customerId", "subscriptionId"]
);
resource_kind!(
    /// A subscription's registration.
    SubscriptionRegistrationResource => "SubscriptionRegistration" ["customerId", "subscriptionId"]
);
resource_kind!(
    /// A subscription's registration status.
    SubscriptionRegistrationStatusResource => "SubscriptionRegistrationStatus" ["customerId", "subscriptionId"]
);
resource_kind!(
    /// A subscription's trial conversions.
    SubscriptionConversionCollectionResource => "SubscriptionConversionCollection" ["customerId", "subscriptionId"]
);

/// Operations on a customer's subscription collection.
pub type SubscriptionCollectionOperations = ResourceNode<SubscriptionCollectionResource>;

/// Operations on a single subscription.
///
/// Child collections are built on first access and cached; `get`, `patch`
/// and `activate` always call the service.
pub type SubscriptionOperations = ResourceNode<SubscriptionResource>;

/// Add-ons of a subscription.
pub type SubscriptionAddOnCollectionOperations = ResourceNode<SubscriptionAddOnCollectionResource>;

/// Upgrades available to a subscription.
pub type SubscriptionUpgradeCollectionOperations =
    ResourceNode<SubscriptionUpgradeCollectionResource>;

/// Per-resource usage of an Azure subscription.
pub type SubscriptionUsageRecordCollectionOperations =
    ResourceNode<SubscriptionUsageRecordCollectionResource>;

/// Usage summary of a subscription.
pub type SubscriptionUsageSummaryOperations = ResourceNode<SubscriptionUsageSummaryResource>;

/// Provisioning status of a subscription.
pub type SubscriptionProvisioningStatusOperations =
    ResourceNode<SubscriptionProvisioningStatusResource>;

/// Support contact (value-added reseller) of a subscription.
pub type SubscriptionSupportContactOperations = ResourceNode<SubscriptionSupportContactResource>;

/// Activation links of a subscription.
pub type SubscriptionActivationLinksOperations = ResourceNode<SubscriptionActivationLinksResource>;

/// Azure utilization of a subscription.
pub type SubscriptionUtilizationOperations = ResourceNode<SubscriptionUtilizationResource>;

/// Registration of an Azure reserved-instance subscription.
pub type SubscriptionRegistrationOperations = ResourceNode<SubscriptionRegistrationResource>;

/// Registration status of a subscription.
pub type SubscriptionRegistrationStatusOperations =
    ResourceNode<SubscriptionRegistrationStatusResource>;

/// Trial conversions of a subscription.
pub type SubscriptionConversionCollectionOperations =
    ResourceNode<SubscriptionConversionCollectionResource>;

impl SubscriptionCollectionOperations {
    /// Returns the subscription `subscription_id`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgumentError`] if `subscription_id` is blank.
    pub fn by_id(
        &self,
        subscription_id: impl Into<String>,
    ) -> Result<SubscriptionOperations, InvalidArgumentError> {
        self.member(subscription_id)
    }

    /// Retrieves all of the customer's subscriptions.
    ///
    /// # Errors
    ///
    /// Returns [`PartnerError`] if the call fails.
    pub async fn get(&self) -> Result<ResourceCollection<Subscription>, PartnerError> {
        self.fetch("GetCustomerSubscriptions").await
    }
}

impl SubscriptionOperations {
    /// Retrieves the subscription.
    ///
    /// # Errors
    ///
    /// Returns [`PartnerError`] if the call fails.
    pub async fn get(&self) -> Result<Subscription, PartnerError> {
        self.invoke_mandatory::<(), _>("GetSubscription", &[], None)
            .await
    }

    /// Updates the subscription (friendly name, quantity, status, ...).
    ///
    /// # Errors
    ///
    /// Returns [`PartnerError`] if the call fails.
    pub async fn patch(&self, subscription: &Subscription) -> Result<Subscription, PartnerError> {
        self.invoke_mandatory("UpdateSubscription", &[], Some(subscription))
            .await
    }

    /// Activates a third-party subscription. Sends no body.
    ///
    /// # Errors
    ///
    /// Returns [`PartnerError`] if the call fails.
    pub async fn activate(&self) -> Result<SubscriptionActivationResult, PartnerError> {
        self.invoke::<(), _>("Activate3ppSubscription", &[], None)
            .await
    }

    /// Retrieves the entitlements of an Azure plan subscription.
    ///
    /// # Errors
    ///
    /// Returns [`PartnerError`] if the call fails.
    pub async fn azure_entitlements(
        &self,
    ) -> Result<ResourceCollection<AzureEntitlement>, PartnerError> {
        self.fetch("GetAzureEntitlements").await
    }

    /// The subscription's add-ons.
    #[must_use]
    pub fn add_ons(&self) -> Arc<SubscriptionAddOnCollectionOperations> {
        self.child()
    }

    /// The upgrades available to the subscription.
    #[must_use]
    pub fn upgrades(&self) -> Arc<SubscriptionUpgradeCollectionOperations> {
        self.child()
    }

    /// The subscription's per-resource usage records.
    #[must_use]
    pub fn usage_records(&self) -> Arc<SubscriptionUsageRecordCollectionOperations> {
        self.child()
    }

    /// The subscription's usage summary.
    #[must_use]
    pub fn usage_summary(&self) -> Arc<SubscriptionUsageSummaryOperations> {
        self.child()
    }

    /// The subscription's provisioning status.
    #[must_use]
    pub fn provisioning_status(&self) -> Arc<SubscriptionProvisioningStatusOperations> {
        self.child()
    }

    /// The subscription's support contact.
    #[must_use]
    pub fn support_contact(&self) -> Arc<SubscriptionSupportContactOperations> {
        self.child()
    }

    /// The subscription's activation links.
    #[must_use]
    pub fn activation_links(&self) -> Arc<SubscriptionActivationLinksOperations> {
        self.child()
    }

    /// The subscription's Azure utilization.
    #[must_use]
    pub fn utilization(&self) -> Arc<SubscriptionUtilizationOperations> {
        self.child()
    }

    /// The subscription's registration.
    #[must_use]
    pub fn registration(&self) -> Arc<SubscriptionRegistrationOperations> {
        self.child()
    }

    /// The subscription's registration status.
    #[must_use]
    pub fn registration_status(&self) -> Arc<SubscriptionRegistrationStatusOperations> {
        self.child()
    }

    /// The trial conversions available to the subscription.
    #[must_use]
    pub fn conversions(&self) -> Arc<SubscriptionConversionCollectionOperations> {
        self.child()
    }
}

impl SubscriptionAddOnCollectionOperations {
    /// Retrieves the add-on subscriptions.
    ///
    /// # Errors
    ///
    /// Returns [`PartnerError`] if the call fails.
    pub async fn get(&self) -> Result<ResourceCollection<Subscription>, PartnerError> {
        self.fetch("GetSubscriptionAddOns").await
    }
}

impl SubscriptionUpgradeCollectionOperations {
    /// Retrieves the available upgrades.
    ///
    /// # Errors
    ///
    /// Returns [`PartnerError`] if the call fails.
    pub async fn get(&self) -> Result<ResourceCollection<Upgrade>, PartnerError> {
        self.fetch("GetSubscriptionUpgrades").await
    }

    /// Performs an upgrade.
    ///
    /// # Errors
    ///
    /// Returns [`PartnerError`] if the call fails.
    pub async fn create(&self, upgrade: &Upgrade) -> Result<UpgradeResult, PartnerError> {
        self.invoke_mandatory("CreateSubscriptionUpgrade", &[], Some(upgrade))
            .await
    }
}

impl SubscriptionUsageRecordCollectionOperations {
    /// Retrieves usage grouped by Azure resource.
    ///
    /// # Errors
    ///
    /// Returns [`PartnerError`] if the call fails.
    pub async fn get(&self) -> Result<ResourceCollection<ResourceUsageRecord>, PartnerError> {
        self.fetch("GetSubscriptionUsageRecords").await
    }
}

impl SubscriptionUsageSummaryOperations {
    /// Retrieves the usage summary.
    ///
    /// # Errors
    ///
    /// Returns [`PartnerError`] if the call fails.
    pub async fn get(&self) -> Result<SubscriptionUsageSummary, PartnerError> {
        self.fetch("GetSubscriptionUsageSummary").await
    }
}

impl SubscriptionProvisioningStatusOperations {
    /// Retrieves the provisioning status.
    ///
    /// # Errors
    ///
    /// Returns [`PartnerError`] if the call fails.
    pub async fn get(&self) -> Result<SubscriptionProvisioningStatus, PartnerError> {
        self.fetch("GetSubscriptionProvisioningStatus").await
    }
}

impl SubscriptionSupportContactOperations {
    /// Retrieves the support contact.
    ///
    /// # Errors
    ///
    /// Returns [`PartnerError`] if the call fails.
    pub async fn get(&self) -> Result<SupportContact, PartnerError> {
        self.fetch("GetSubscriptionSupportContact").await
    }

    /// Replaces the support contact.
    ///
    /// # Errors
    ///
    /// Returns [`PartnerError`] if the call fails.
    pub async fn update(&self, contact: &SupportContact) -> Result<SupportContact, PartnerError> {
        self.invoke("UpdateSubscriptionSupportContact", &[], Some(contact))
            .await
    }
}

impl SubscriptionActivationLinksOperations {
    /// Retrieves the activation links.
    ///
    /// # Errors
    ///
    /// Returns [`PartnerError`] if the call fails.
    pub async fn get(&self) -> Result<ResourceCollection<ActivationLink>, PartnerError> {
        self.fetch("GetSubscriptionActivationLinks").await
    }
}

impl SubscriptionUtilizationOperations {
    /// Retrieves Azure utilization between `start` and `end`.
    ///
    /// With `show_details`, each record carries its resource instance data.
    ///
    /// # Errors
    ///
    /// Returns [`PartnerError`] if the call fails.
    pub async fn azure(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        granularity: AzureUtilizationGranularity,
        show_details: bool,
    ) -> Result<ResourceCollection<AzureUtilizationRecord>, PartnerError> {
        let start = start.to_rfc3339_opts(SecondsFormat::Secs, true);
        let end = end.to_rfc3339_opts(SecondsFormat::Secs, true);
        let show_details = show_details.to_string();
        self.invoke::<(), _>(
            "GetSubscriptionAzureUtilization",
            &[
                start.as_str(),
                end.as_str(),
                granularity.as_str(),
                show_details.as_str(),
            ],
            None,
        )
        .await
    }
}

impl SubscriptionRegistrationOperations {
    /// Registers the subscription so Azure reserved instances can be
    /// purchased under it. Sends no body.
    ///
    /// # Errors
    ///
    /// Returns [`PartnerError`] if the call fails.
    pub async fn register(&self) -> Result<(), PartnerError> {
        self.invoke::<(), IgnoredAny>("RegisterSubscription", &[], None)
            .await
            .map(|_| ())
    }
}

impl SubscriptionRegistrationStatusOperations {
    /// Retrieves the registration status.
    ///
    /// # Errors
    ///
    /// Returns [`PartnerError`] if the call fails.
    pub async fn get(&self) -> Result<SubscriptionRegistrationStatus, PartnerError> {
        self.fetch("GetSubscriptionRegistrationStatus").await
    }
}

impl SubscriptionConversionCollectionOperations {
    /// Retrieves the available conversions.
    ///
    /// # Errors
    ///
    /// Returns [`PartnerError`] if the call fails.
    pub async fn get(&self) -> Result<ResourceCollection<Conversion>, PartnerError> {
        self.fetch("GetSubscriptionConversions").await
    }

    /// Converts the trial subscription.
    ///
    /// # Errors
    ///
    /// Returns [`PartnerError`] if the call fails.
    pub async fn create(&self, conversion: &Conversion) -> Result<ConversionResult, PartnerError> {
        self.invoke_mandatory("CreateSubscriptionConversion", &[], Some(conversion))
            .await
    }
}
