//! Unified test utilities for devicename integration tests
//!
//! Builds small device corpora, zipped database assets and configurations
//! pointing every on-disk resource into a temporary directory.

use devicename_config::Config;
use devicename_database::{write_database, zip_database};
use devicename_engine::DeviceNames;
use devicename_network::{CatalogSource, StaticConnectivity};
use devicename_store::MemoryStore;
use devicename_types::{CurrentDevice, Device, DeviceInfo, Error, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tempfile::TempDir;

/// A corpus where every codename and model belongs to one product
pub fn sample_corpus() -> Vec<Device> {
    vec![
        Device::new(Some("Samsung"), "Galaxy S6 Edge", "zerolte", "SM-G925I"),
        Device::new(Some("Samsung"), "Galaxy S6 Edge", "zeroltetmo", "SM-G925T"),
        Device::new(Some("HTC"), "HTC One (M8)", "htc_m8", "HTC6525LVW"),
        Device::new(Some("Acme"), "Acme Rocket", "rocket", "AR-1"),
        Device::new(Some("Acme"), "Acme Rocket Mini", "rocketmini", "ARM-1"),
        Device::new(None, "Nameless Tab", "nameless", "NT-7"),
    ]
}

/// Two products sharing the codename `x`
pub fn tie_break_corpus() -> Vec<Device> {
    vec![
        Device::new(Some("Acme"), "First", "x", "m1"),
        Device::new(Some("Acme"), "Second", "x", "m2"),
    ]
}

/// Supported devices CSV in the published layout, including a five-field row
/// for a manufacturer containing a comma and a malformed row
pub const SAMPLE_CSV: &str = "Retail Branding,Marketing Name,Device,Model\n\
    Samsung,Galaxy S6 Edge,zerolte,SM-G925I\n\
    Samsung,Galaxy S6 Edge,zeroltetmo,SM-G925T\n\
    HTC, Inc.,HTC One (M8),htc_m8,HTC6525LVW\n\
    HTC Corp.,HTC Desire,bravo,HTC Desire\n\
    Motorola,Moto X Style,clark,XT1572\n\
    broken row\n";

/// `text` as UTF-16LE with a byte order mark
pub fn utf16le_bytes(text: &str) -> Vec<u8> {
    let mut bytes = vec![0xFF, 0xFE];
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    bytes
}

/// Write `devices` as a database and zip it to `<dir>/android-devices.zip`
pub fn build_database_asset(dir: &Path, devices: &[Device]) -> PathBuf {
    let source = dir.join("snapshot").join("android-devices.db");
    write_database(&source, devices).expect("Failed to write database");

    let asset = dir.join("android-devices.zip");
    zip_database(&source, &asset).expect("Failed to zip database");
    asset
}

/// Configuration keeping every resource inside `temp_dir`
///
/// The database asset is built from `devices`. The network layer is left
/// disabled.
pub fn test_config(temp_dir: &TempDir, devices: &[Device]) -> Config {
    let root = temp_dir.path();
    let mut config = Config::default();
    config.database.asset_path = build_database_asset(root, devices);
    config.database.install_dir = Some(root.join("install"));
    config.cache.path = Some(root.join("cache").join("device-names.json"));
    config.pipeline.output_dir = root.join("json");
    config.pipeline.database_dir = root.join("database");
    config
}

/// Configuration that only consults the bundled database
pub fn database_only_config(temp_dir: &TempDir, devices: &[Device]) -> Config {
    let mut config = test_config(temp_dir, devices);
    config.catalog.enabled = false;
    config
}

/// [`CatalogSource`] serving fixed documents and counting fetches
#[derive(Debug, Default)]
pub struct StubCatalogSource {
    documents: HashMap<String, String>,
    calls: AtomicUsize,
}

impl StubCatalogSource {
    /// Create an empty source; every fetch fails like a 404
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `records` for `codename`
    pub fn with_records(mut self, codename: &str, records: &[DeviceInfo]) -> Self {
        let body = serde_json::to_string(records).expect("Failed to encode records");
        self.documents.insert(codename.to_lowercase(), body);
        self
    }

    /// Serve a raw body for `codename`
    pub fn with_body(mut self, codename: &str, body: &str) -> Self {
        self.documents
            .insert(codename.to_lowercase(), body.to_string());
        self
    }

    /// Number of fetches so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl CatalogSource for StubCatalogSource {
    fn fetch(&self, codename: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.documents
            .get(&codename.to_lowercase())
            .cloned()
            .ok_or_else(|| Error::network(format!("{} returned status 404", codename)))
    }
}

/// Resolver with the network layer enabled and served by `source`
///
/// The cache lives in memory and the network always reports connected.
pub fn networked_names(
    mut config: Config,
    current: CurrentDevice,
    source: Arc<StubCatalogSource>,
) -> DeviceNames {
    config.network.enabled = true;
    DeviceNames::builder()
        .with_config(config)
        .with_current_device(current)
        .with_cache_store(Arc::new(MemoryStore::new()))
        .with_catalog_source(source)
        .with_connectivity(Arc::new(StaticConnectivity::online()))
        .build()
        .expect("Failed to build resolver")
}
