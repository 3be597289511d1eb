//! JSON artifacts

use devicename_types::{Device, Error, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Directory holding one document per codename
pub const CODENAMES_DIR: &str = "devices";
/// Directory holding one document per manufacturer
pub const MANUFACTURERS_DIR: &str = "manufacturers";
/// Every record
pub const DEVICES_JSON: &str = "devices.json";
/// Records of popular market names
pub const POPULAR_DEVICES_JSON: &str = "popular-devices.json";

/// A manufacturer document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Manufacturer {
    /// Retail brand
    pub manufacturer: String,
    /// The brand's records, without the brand repeated
    pub devices: Vec<Device>,
}

impl Manufacturer {
    /// File name of this document
    pub fn file_name(&self) -> String {
        manufacturer_file_name(&self.manufacturer)
    }
}

/// File name for a manufacturer document
///
/// Uppercased, spaces become underscores, dots and hyphens are dropped:
/// `"HTC Corp."` gives `"HTC_CORP.json"`.
pub fn manufacturer_file_name(manufacturer: &str) -> String {
    let mut name: String = manufacturer
        .to_uppercase()
        .chars()
        .filter(|c| *c != '.' && *c != '-')
        .map(|c| if c == ' ' { '_' } else { c })
        .collect();
    name.push_str(".json");
    name
}

/// Group records by manufacturer, skipping those without one
pub fn group_by_manufacturer(devices: &[Device]) -> Vec<Manufacturer> {
    let mut groups: BTreeMap<&str, Vec<Device>> = BTreeMap::new();
    for device in devices {
        let Some(manufacturer) = device.manufacturer.as_deref() else {
            continue;
        };
        groups.entry(manufacturer).or_default().push(Device {
            manufacturer: None,
            ..device.clone()
        });
    }
    groups
        .into_iter()
        .map(|(manufacturer, devices)| Manufacturer {
            manufacturer: manufacturer.to_string(),
            devices,
        })
        .collect()
}

/// Group records by lowercased codename
pub fn group_by_codename(devices: &[Device]) -> BTreeMap<String, Vec<Device>> {
    let mut groups: BTreeMap<String, Vec<Device>> = BTreeMap::new();
    for device in devices {
        groups
            .entry(device.codename.to_lowercase())
            .or_default()
            .push(device.clone());
    }
    groups
}

/// Counts of files written by [`JsonWriter`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct JsonSummary {
    /// Per-codename documents
    pub codenames: usize,
    /// Per-manufacturer documents
    pub manufacturers: usize,
    /// Records in the popular document
    pub popular: usize,
    /// Codenames that cannot be used as a file name
    pub rejected_codenames: usize,
}

/// Writes the JSON artifacts under one output directory
#[derive(Debug, Clone)]
pub struct JsonWriter {
    output_dir: PathBuf,
}

impl JsonWriter {
    /// Write into `output_dir`
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// The output directory
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Write every artifact
    pub fn write_all(&self, devices: &[Device], popular: &[Device]) -> Result<JsonSummary> {
        self.write_devices(devices)?;
        let (codenames, rejected_codenames) = self.write_codenames(devices)?;
        let manufacturers = self.write_manufacturers(devices)?;
        self.write_popular(popular)?;
        Ok(JsonSummary {
            codenames,
            manufacturers,
            popular: popular.len(),
            rejected_codenames,
        })
    }

    /// Write `devices.json`
    pub fn write_devices(&self, devices: &[Device]) -> Result<()> {
        write_json(&self.output_dir.join(DEVICES_JSON), &devices)
    }

    /// Write `popular-devices.json`
    pub fn write_popular(&self, popular: &[Device]) -> Result<()> {
        write_json(&self.output_dir.join(POPULAR_DEVICES_JSON), &popular)
    }

    /// Write `devices/<codename>.json`, returning written and rejected counts
    pub fn write_codenames(&self, devices: &[Device]) -> Result<(usize, usize)> {
        let dir = self.output_dir.join(CODENAMES_DIR);
        let mut written = 0;
        let mut rejected = 0;
        for (codename, group) in group_by_codename(devices) {
            if !is_safe_file_stem(&codename) {
                warn!("Skipping codename {:?}: not usable as a file name", codename);
                rejected += 1;
                continue;
            }
            write_json(&dir.join(format!("{}.json", codename)), &group)?;
            written += 1;
        }
        debug!("Wrote {} codename documents", written);
        Ok((written, rejected))
    }

    /// Write `manufacturers/<NAME>.json`, returning the number written
    pub fn write_manufacturers(&self, devices: &[Device]) -> Result<usize> {
        let dir = self.output_dir.join(MANUFACTURERS_DIR);
        let manufacturers = group_by_manufacturer(devices);
        for manufacturer in &manufacturers {
            write_json(&dir.join(manufacturer.file_name()), manufacturer)?;
        }
        debug!("Wrote {} manufacturer documents", manufacturers.len());
        Ok(manufacturers.len())
    }
}

fn is_safe_file_stem(stem: &str) -> bool {
    !stem.is_empty()
        && stem != "."
        && stem != ".."
        && !stem.contains(['/', '\\'])
        && !stem.chars().any(char::is_control)
}

/// Pretty-print `value` to `path`, creating parent directories
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| Error::other(format!("Failed to serialize {}: {}", path.display(), e)))?;
    fs::write(path, json)?;
    Ok(())
}
