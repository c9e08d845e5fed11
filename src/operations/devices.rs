//! Device deployment operations.

use std::sync::Arc;

use serde::de::IgnoredAny;

use crate::error::{InvalidArgumentError, PartnerError};
use crate::models::{Device, DeviceBatch, DeviceBatchCreationRequest, DeviceUploadStatus};
use crate::resources::{resource_kind, ResourceCollection, ResourceNode};

resource_kind!(
    /// A customer's device batches.
    DeviceBatchCollectionResource => "DeviceBatchCollection" ["customerId"]
);
resource_kind!(
    /// A single device batch.
    DeviceBatchResource => "DeviceBatch" ["customerId", "deviceBatchId"]
);
resource_kind!(
    /// The devices in a batch.
    DeviceCollectionResource => "DeviceCollection" ["customerId", "deviceBatchId"]
);
resource_kind!(
    /// A single device.
    DeviceResource => "Device" ["customerId", "deviceBatchId", "deviceId"]
);

/// Operations on a customer's device batches.
pub type DeviceBatchCollectionOperations = ResourceNode<DeviceBatchCollectionResource>;

/// Operations on a single device batch.
pub type DeviceBatchOperations = ResourceNode<DeviceBatchResource>;

/// Operations on the devices of a batch.
pub type DeviceCollectionOperations = ResourceNode<DeviceCollectionResource>;

/// Operations on a single device.
pub type DeviceOperations = ResourceNode<DeviceResource>;

impl DeviceBatchCollectionOperations {
    /// Returns the batch `batch_id`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgumentError`] if `batch_id` is blank.
    pub fn by_id(
        &self,
        batch_id: impl Into<String>,
    ) -> Result<DeviceBatchOperations, InvalidArgumentError> {
        self.member(batch_id)
    }

    /// Retrieves the customer's device batches.
    ///
    /// # Errors
    ///
    /// Returns [`PartnerError`] if the call fails.
    pub async fn get(&self) -> Result<ResourceCollection<DeviceBatch>, PartnerError> {
        self.fetch("GetDeviceBatches").await
    }

    /// Creates a batch and uploads its devices.
    ///
    /// # Errors
    ///
    /// Returns [`PartnerError`] if the call fails.
    pub async fn create(
        &self,
        request: &DeviceBatchCreationRequest,
    ) -> Result<DeviceUploadStatus, PartnerError> {
        self.invoke_mandatory("CreateDeviceBatch", &[], Some(request)).await
    }
}

impl DeviceBatchOperations {
    /// The devices in the batch.
    #[must_use]
    pub fn devices(&self) -> Arc<DeviceCollectionOperations> {
        self.child()
    }
}

impl DeviceCollectionOperations {
    /// Returns the device `device_id`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgumentError`] if `device_id` is blank.
    pub fn by_id(
        &self,
        device_id: impl Into<String>,
    ) -> Result<DeviceOperations, InvalidArgumentError> {
        self.member(device_id)
    }

    /// Retrieves the devices in the batch.
    ///
    /// # Errors
    ///
    /// Returns [`PartnerError`] if the call fails.
    pub async fn get(&self) -> Result<ResourceCollection<Device>, PartnerError> {
        self.fetch("GetDevices").await
    }

    /// Adds devices to the batch.
    ///
    /// # Errors
    ///
    /// Returns [`PartnerError`] if the call fails.
    pub async fn create(&self, devices: &[Device]) -> Result<DeviceUploadStatus, PartnerError> {
        self.invoke_mandatory("CreateDevices", &[], Some(devices)).await
    }
}

impl DeviceOperations {
    /// Updates the device's policies.
    ///
    /// # Errors
    ///
    /// Returns [`PartnerError`] if the call fails.
    pub async fn patch(&self, device: &Device) -> Result<Device, PartnerError> {
        self.invoke("UpdateDevice", &[], Some(device)).await
    }

    /// Removes the device from its batch.
    ///
    /// # Errors
    ///
    /// Returns [`PartnerError`] if the call fails.
    pub async fn delete(&self) -> Result<(), PartnerError> {
        self.invoke::<(), IgnoredAny>("DeleteDevice", &[], None)
            .await
            .map(|_| ())
    }
}
