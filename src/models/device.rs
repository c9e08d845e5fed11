//! Device deployment payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Extra;

/// A named group of devices registered for deployment.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeviceBatch {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Who created the batch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    /// When the resource was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<DateTime<Utc>>,
    /// Number of devices in the batch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub devices_count: Option<u32>,
    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: Extra,
}

/// Request creating a device batch with its initial devices.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeviceBatchCreationRequest {
    /// Name of the new batch.
    pub batch_id: String,
    /// Devices to upload with the batch.
    #[serde(default)]
    pub devices: Vec<Device>,
}

/// A device registered for deployment.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Device serial number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    /// Windows product key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_key: Option<String>,
    /// Hardware hash used for Autopilot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hardware_hash: Option<String>,
    /// Device model.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
    /// Device manufacturer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oem_manufacturer_name: Option<String>,
    /// Deployment policies applied to the device.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub policies: Vec<String>,
    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: Extra,
}

/// Tracking status returned by device uploads.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeviceUploadStatus {
    /// Identifier for tracking the upload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_tracking_id: Option<String>,
    /// Status reported by the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: Extra,
}
