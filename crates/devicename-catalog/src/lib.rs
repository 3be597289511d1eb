//! Compiled-in table of popular Android devices
//!
//! The table maps hardware codenames and model identifiers to consumer market
//! names without any I/O, so it is safe to call from a UI thread. It is
//! generated offline from the device corpus (see `devicename generate`) and
//! indexed into hash maps on first use.
//!
//! # Examples
//!
//! ```rust
//! use devicename_catalog::{device_name, device_name_for};
//!
//! assert_eq!(device_name("clark", "Unknown"), "Moto X Style");
//! assert_eq!(device_name_for(Some("zerolte"), Some("SM-G925I"), "?"), "Galaxy S6 Edge");
//! assert_eq!(device_name("unknown-xyz", "Unknown device"), "Unknown device");
//! ```

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

use devicename_types::{capitalize, CurrentDevice, DeviceInfo, DeviceLookup, DeviceQuery, Result};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use tracing::trace;

mod table;

pub use table::DEVICES;

/// One consumer product and every identifier it ships under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopularDevice {
    /// Retail brand
    pub manufacturer: &'static str,
    /// Consumer-facing product name
    pub market_name: &'static str,
    /// Regional hardware codenames
    pub codenames: &'static [&'static str],
    /// Regional model identifiers
    pub models: &'static [&'static str],
}

impl PopularDevice {
    /// Whether the product owns `codename` or `model`
    pub fn matches(&self, codename: &str, model: &str) -> bool {
        self.codenames.contains(&codename) || self.models.contains(&model)
    }

    /// Every identifier of the product, codenames first
    pub fn identifiers(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.codenames.iter().chain(self.models.iter()).copied()
    }
}

/// An identifier claimed by more than one product
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overlap {
    /// The shared codename or model
    pub identifier: &'static str,
    /// Product that wins the lookup
    pub first: &'static str,
    /// Product shadowed by `first`
    pub second: &'static str,
}

/// Hash index over a device table
///
/// Lookups are first-match-wins in table order: when a codename and a model
/// point at different products, the one listed earlier is returned.
#[derive(Debug)]
pub struct StaticTable {
    devices: &'static [PopularDevice],
    by_codename: HashMap<&'static str, usize>,
    by_model: HashMap<&'static str, usize>,
}

static GLOBAL: Lazy<StaticTable> = Lazy::new(|| StaticTable::new(DEVICES));

impl StaticTable {
    /// Index `devices`
    pub fn new(devices: &'static [PopularDevice]) -> Self {
        let mut by_codename = HashMap::new();
        let mut by_model = HashMap::new();
        for (index, device) in devices.iter().enumerate() {
            for codename in device.codenames {
                by_codename.entry(*codename).or_insert(index);
            }
            for model in device.models {
                by_model.entry(*model).or_insert(index);
            }
        }
        Self {
            devices,
            by_codename,
            by_model,
        }
    }

    /// The compiled-in table
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Every product in lookup priority order
    pub fn devices(&self) -> &'static [PopularDevice] {
        self.devices
    }

    /// Find the product owning `codename` or `model`
    ///
    /// An absent model is taken to be the codename, so a caller holding only
    /// one identifier can pass it either way.
    pub fn find(
        &self,
        codename: Option<&str>,
        model: Option<&str>,
    ) -> Option<&'static PopularDevice> {
        let model = model.or(codename);
        let by_codename = codename.and_then(|c| self.by_codename.get(c)).copied();
        let by_model = model.and_then(|m| self.by_model.get(m)).copied();

        let index = match (by_codename, by_model) {
            (Some(a), Some(b)) => a.min(b),
            (a, b) => a.or(b)?,
        };
        let device = &self.devices[index];
        trace!(
            "Static table hit: {} ({})",
            device.market_name,
            device.manufacturer
        );
        Some(device)
    }

    /// Market name for the pair, or `fallback` verbatim
    pub fn resolve(&self, codename: Option<&str>, model: Option<&str>, fallback: &str) -> String {
        self.find(codename, model)
            .map_or_else(|| fallback.to_string(), |d| d.market_name.to_string())
    }

    /// Identifiers claimed by more than one product
    pub fn overlaps(&self) -> Vec<Overlap> {
        let mut owner: HashMap<&'static str, usize> = HashMap::new();
        let mut overlaps = Vec::new();
        for (index, device) in self.devices.iter().enumerate() {
            for identifier in device.identifiers() {
                match owner.get(identifier) {
                    Some(&first) if first != index => overlaps.push(Overlap {
                        identifier,
                        first: self.devices[first].market_name,
                        second: device.market_name,
                    }),
                    Some(_) => {}
                    None => {
                        owner.insert(identifier, index);
                    }
                }
            }
        }
        overlaps
    }

    /// Number of products
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    /// Whether the table holds no products
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }
}

impl Default for StaticTable {
    fn default() -> Self {
        Self::new(DEVICES)
    }
}

impl DeviceLookup for StaticTable {
    fn name(&self) -> &'static str {
        "static"
    }

    fn lookup(&self, query: &DeviceQuery) -> Result<Option<DeviceInfo>> {
        Ok(self.find(query.codename(), query.model()).map(|device| {
            let codename = query.codename().unwrap_or_default();
            DeviceInfo::new(
                Some(device.manufacturer.to_string()),
                Some(device.market_name.to_string()),
                codename,
                query.model().unwrap_or(codename),
            )
        }))
    }
}

/// Get the consumer friendly name of a device by codename
///
/// Returns `fallback` unchanged when the codename is unknown.
pub fn device_name(codename: &str, fallback: &str) -> String {
    StaticTable::global().resolve(Some(codename), None, fallback)
}

/// Get the consumer friendly name of a device by codename and model
pub fn device_name_for(codename: Option<&str>, model: Option<&str>, fallback: &str) -> String {
    StaticTable::global().resolve(codename, model, fallback)
}

/// Name to show for `device` when no resolver knows it
///
/// `"samsung"` / `"SM-G925I"` gives `"Samsung SM-G925I"`, while a model that
/// already carries the brand (`"Nexus"` / `"Nexus One"`) is only capitalized.
pub fn fallback_name(device: &CurrentDevice) -> String {
    if device.model.starts_with(&device.manufacturer) {
        capitalize(&device.model)
    } else {
        format!("{} {}", capitalize(&device.manufacturer), device.model)
    }
}

/// Get the consumer friendly name of the device the process runs on
pub fn current_device_name(device: &CurrentDevice) -> String {
    device_name(&device.codename, &fallback_name(device))
}

/// Record to return when no resolver knows `query`
///
/// For the running device this carries its manufacturer and
/// [`current_device_name`]; for anything else only the queried identifiers.
pub fn fallback_info(current: &CurrentDevice, query: &DeviceQuery) -> DeviceInfo {
    if current.is(query) {
        DeviceInfo::new(
            Some(current.manufacturer.clone()).filter(|m| !m.is_empty()),
            Some(current_device_name(current)),
            current.codename.clone(),
            current.model.clone(),
        )
    } else {
        DeviceInfo::for_query(query)
    }
}
