//! Core traits for device lookups

use crate::{DeviceInfo, DeviceQuery, Result};

/// A single resolver layer
///
/// `Ok(None)` means the layer has no answer for the query; errors are reserved
/// for failures the caller must see.
pub trait DeviceLookup: Send + Sync {
    /// Short name of the layer, used in logs
    fn name(&self) -> &'static str;

    /// Look up the device described by `query`
    fn lookup(&self, query: &DeviceQuery) -> Result<Option<DeviceInfo>>;
}

impl<T: DeviceLookup + ?Sized> DeviceLookup for std::sync::Arc<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn lookup(&self, query: &DeviceQuery) -> Result<Option<DeviceInfo>> {
        (**self).lookup(query)
    }
}
