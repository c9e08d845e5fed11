//! Subscription payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Extra;

/// Lifecycle state of a subscription.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    /// No status reported.
    #[default]
    None,
    /// In use and billed.
    Active,
    /// Temporarily disabled.
    Suspended,
    /// Cancelled.
    Deleted,
    /// Past its term.
    Expired,
    /// Awaiting provisioning.
    Pending,
    /// Disabled by the service.
    Disabled,
    /// A status this SDK does not know yet.
    #[serde(other)]
    Unknown,
}

/// A customer's subscription to an offer.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The offer identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offer_id: Option<String>,
    /// The offer name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offer_name: Option<String>,
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub friendly_name: Option<String>,
    /// Number of licenses or units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    /// Unit the quantity is counted in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_type: Option<String>,
    /// The base subscription, for add-ons.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_subscription_id: Option<String>,
    /// When the resource was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<DateTime<Utc>>,
    /// When the subscription took effect.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_start_date: Option<DateTime<Utc>>,
    /// When the current commitment term ends.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commitment_end_date: Option<DateTime<Utc>>,
    /// Lifecycle state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SubscriptionStatus>,
    /// Whether the subscription renews automatically.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_renew_enabled: Option<bool>,
    /// How the subscription is billed (e.g. `license`, `usage`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_type: Option<String>,
    /// Billing cycle (e.g. `monthly`, `annual`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_cycle: Option<String>,
    /// ISO 8601 duration of the term (e.g. `P1M`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term_duration: Option<String>,
    /// The order that created the subscription.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: Extra,
}

impl Subscription {
    /// Returns `true` if the service reports the subscription as active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == Some(SubscriptionStatus::Active)
    }
}

/// Result of activating a third-party subscription.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionActivationResult {
    /// The subscription identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_id: Option<String>,
    /// Status reported by the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: Extra,
}

/// An Azure plan entitlement.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AzureEntitlement {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub friendly_name: Option<String>,
    /// Entitlement status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// The subscription identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_id: Option<String>,
    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: Extra,
}

/// A possible upgrade target for a subscription.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Upgrade {
    /// The offer the subscription can be upgraded to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_offer: Option<serde_json::Value>,
    /// Kind of upgrade (e.g. `upgrade_only`, `upgrade_and_transfer`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upgrade_type: Option<String>,
    /// Whether the subscription can take this upgrade.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_eligible: Option<bool>,
    /// Licenses carried over by the upgrade.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: Extra,
}

/// Outcome of performing an upgrade.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpgradeResult {
    /// The subscription that was upgraded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_subscription_id: Option<String>,
    /// The subscription created by the upgrade.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_subscription_id: Option<String>,
    /// Upgrade status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: Extra,
}

/// Provisioning state of a subscription.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionProvisioningStatus {
    /// The provisioned SKU.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku_id: Option<String>,
    /// Provisioning status (e.g. `success`, `pending`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Number of licenses or units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    /// When provisioning ends.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: Extra,
}

/// The value-added reseller providing support for a subscription.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SupportContact {
    /// The support partner's tenant identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_tenant_id: Option<String>,
    /// The support partner's MPN identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_mpn_id: Option<String>,
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: Extra,
}

/// Registration state of an Azure reserved-instance subscription.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionRegistrationStatus {
    /// The subscription identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_id: Option<String>,
    /// Registration status (e.g. `registered`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: Extra,
}

/// A trial-to-paid conversion offered for a subscription.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Conversion {
    /// The trial offer being converted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offer_id: Option<String>,
    /// The offer converted to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_offer_id: Option<String>,
    /// The order the conversion is placed under.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    /// Number of licenses or units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    /// Billing cycle (e.g. `monthly`, `annual`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_cycle: Option<String>,
    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: Extra,
}

/// Outcome of converting a trial subscription.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResult {
    /// The trial offer that was converted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offer_id: Option<String>,
    /// The offer converted to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_offer_id: Option<String>,
    /// The subscription identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_id: Option<String>,
    /// Error details, when the conversion failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<serde_json::Value>,
    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: Extra,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscription_parses_dates_and_status() {
        let json = r#"{
            "id": "sub-9",
            "friendlyName": "Office",
            "quantity": 5,
            "status": "active",
            "creationDate": "2024-03-01T10:00:00Z",
            "links": {"self": {"uri": "/customers/cust-1/subscriptions/sub-9"}}
        }"#;
        let subscription: Subscription = serde_json::from_str(json).unwrap();

        assert!(subscription.is_active());
        assert_eq!(subscription.quantity, Some(5));
        assert_eq!(
            subscription.creation_date.unwrap().to_rfc3339(),
            "2024-03-01T10:00:00+00:00"
        );
        assert!(subscription.extra.contains_key("links"));
    }

    #[test]
    fn test_unknown_status_does_not_fail() {
        let subscription: Subscription =
            serde_json::from_str(r#"{"status": "migrating"}"#).unwrap();
        assert_eq!(subscription.status, Some(SubscriptionStatus::Unknown));
    }
}
