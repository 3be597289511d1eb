//! Core types for device name resolution

use crate::text::capitalize;
use std::fmt;

// Serde is imported conditionally through cfg_attr

/// A single row of the device corpus
///
/// `(codename, model)` pairs are not unique across the corpus; resolvers apply
/// their own tie-break.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Device {
    /// Retail brand, may be missing in the source data
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub manufacturer: Option<String>,
    /// Consumer-facing product name
    pub market_name: String,
    /// Hardware identifier (`ro.product.device`)
    pub codename: String,
    /// Model identifier (`ro.product.model`)
    pub model: String,
}

impl Device {
    /// Create a new device record
    pub fn new(
        manufacturer: Option<&str>,
        market_name: impl Into<String>,
        codename: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            manufacturer: manufacturer
                .filter(|m| !m.trim().is_empty())
                .map(str::to_string),
            market_name: market_name.into(),
            codename: codename.into(),
            model: model.into(),
        }
    }
}

/// Result of a device lookup
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeviceInfo {
    /// Retail brand, if known
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub manufacturer: Option<String>,
    /// Consumer-facing product name, if known
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub market_name: Option<String>,
    /// Hardware identifier the lookup was made for
    pub codename: String,
    /// Model identifier the lookup was made for
    pub model: String,
}

impl DeviceInfo {
    /// Create a new device info
    pub fn new(
        manufacturer: Option<String>,
        market_name: Option<String>,
        codename: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            manufacturer,
            market_name,
            codename: codename.into(),
            model: model.into(),
        }
    }

    /// Info for a device no resolver knows about
    pub fn unknown(codename: impl Into<String>, model: impl Into<String>) -> Self {
        Self::new(None, None, codename, model)
    }

    /// Info carrying only the identifiers of `query`
    pub fn for_query(query: &DeviceQuery) -> Self {
        Self::unknown(
            query.codename().unwrap_or_default(),
            query.model().unwrap_or_default(),
        )
    }

    /// Get the consumer friendly name of the device
    ///
    /// Returns the market name when it is known and non-empty, otherwise the
    /// capitalized model.
    pub fn name(&self) -> String {
        match self.market_name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => capitalize(&self.model),
        }
    }

    /// Whether a market name was found
    pub fn is_resolved(&self) -> bool {
        self.market_name.as_deref().is_some_and(|n| !n.is_empty())
    }
}

impl From<Device> for DeviceInfo {
    fn from(device: Device) -> Self {
        Self {
            manufacturer: device.manufacturer,
            market_name: Some(device.market_name).filter(|n| !n.is_empty()),
            codename: device.codename,
            model: device.model,
        }
    }
}

impl fmt::Display for DeviceInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Identifiers of a device to resolve
///
/// Empty strings are normalized to "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DeviceQuery {
    codename: Option<String>,
    model: Option<String>,
}

impl DeviceQuery {
    /// Create a new query, dropping empty identifiers
    pub fn new(codename: Option<&str>, model: Option<&str>) -> Self {
        Self {
            codename: codename.filter(|c| !c.is_empty()).map(str::to_string),
            model: model.filter(|m| !m.is_empty()).map(str::to_string),
        }
    }

    /// Query for a codename only
    pub fn codename_only(codename: &str) -> Self {
        Self::new(Some(codename), None)
    }

    /// The codename constraint
    pub fn codename(&self) -> Option<&str> {
        self.codename.as_deref()
    }

    /// The model constraint
    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    /// Whether neither identifier is set
    pub fn is_empty(&self) -> bool {
        self.codename.is_none() && self.model.is_none()
    }

    /// Key under which a resolved record is cached
    pub fn cache_key(&self) -> String {
        format!(
            "{}:{}",
            self.codename().unwrap_or_default(),
            self.model().unwrap_or_default()
        )
    }

    /// Whether `device` has exactly this codename and model
    pub fn matches(&self, codename: &str, model: &str) -> bool {
        self.codename() == Some(codename) && self.model() == Some(model)
    }
}

impl fmt::Display for DeviceQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.cache_key())
    }
}

/// Build properties of the device the process runs on
///
/// Passed explicitly to resolvers instead of being read from global state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurrentDevice {
    /// `ro.product.manufacturer`
    pub manufacturer: String,
    /// `ro.product.device`
    pub codename: String,
    /// `ro.product.model`
    pub model: String,
}

impl CurrentDevice {
    /// Create a new current-device handle
    pub fn new(
        manufacturer: impl Into<String>,
        codename: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            manufacturer: manufacturer.into(),
            codename: codename.into(),
            model: model.into(),
        }
    }

    /// Query for this device
    pub fn query(&self) -> DeviceQuery {
        DeviceQuery::new(Some(&self.codename), Some(&self.model))
    }

    /// Whether `query` names this device
    pub fn is(&self, query: &DeviceQuery) -> bool {
        query.matches(&self.codename, &self.model)
    }
}

/// Layer that produced a resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ResolutionSource {
    /// Compiled-in table of popular devices
    Static,
    /// Bundled relational snapshot
    Database,
    /// Persistent cache of earlier network lookups
    Cache,
    /// Remote per-codename catalog
    Network,
    /// No layer matched
    Fallback,
}

impl fmt::Display for ResolutionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Static => "static",
            Self::Database => "database",
            Self::Cache => "cache",
            Self::Network => "network",
            Self::Fallback => "fallback",
        };
        f.write_str(name)
    }
}

/// A device info together with the layer that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Resolution {
    /// The resolved info
    pub info: DeviceInfo,
    /// The layer that answered
    pub source: ResolutionSource,
}

impl Resolution {
    /// Create a new resolution
    pub fn new(info: DeviceInfo, source: ResolutionSource) -> Self {
        Self { info, source }
    }
}
