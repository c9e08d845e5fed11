//! Usage payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Extra;

/// Usage of one Azure resource within a subscription.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResourceUsageRecord {
    /// The Azure resource identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
    /// The Azure resource name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_name: Option<String>,
    /// The Azure resource category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Total cost so far.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<f64>,
    /// Locale the cost is expressed in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_locale: Option<String>,
    /// When the record was last updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_date: Option<DateTime<Utc>>,
    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: Extra,
}

/// Aggregated usage of a subscription.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionUsageSummary {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Total cost so far.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<f64>,
    /// ISO 4217 currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
    /// Start of the usage period.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_start_date: Option<DateTime<Utc>>,
    /// End of the usage period.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_end_date: Option<DateTime<Utc>>,
    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: Extra,
}

/// Time bucket size of Azure utilization records.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AzureUtilizationGranularity {
    /// One record per day.
    #[default]
    Daily,
    /// One record per hour.
    Hourly,
}

impl AzureUtilizationGranularity {
    /// Returns the value the service expects in the `granularity` query
    /// parameter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Hourly => "hourly",
        }
    }
}

/// Utilization of one Azure resource over one time bucket.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AzureUtilizationRecord {
    /// Start of the time bucket.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_start_time: Option<DateTime<Utc>>,
    /// End of the time bucket.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_end_time: Option<DateTime<Utc>>,
    /// The metered resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<serde_json::Value>,
    /// Number of licenses or units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    /// Unit of measure of the quantity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Resource instance details, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_data: Option<serde_json::Value>,
    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: Extra,
}
