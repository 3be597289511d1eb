//! Configuration management system for devicename
//!
//! This crate loads the settings every resolver layer and the data pipeline
//! run with. Values are layered: built-in defaults, then a YAML, TOML or JSON
//! file, then `DEVICENAME__SECTION__KEY` environment variables.
//!
//! # Examples
//!
//! ```rust
//! use devicename_config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new()
//!     .add_defaults()
//!     .add_source_file("devicename.yaml")
//!     .add_env_prefix("DEVICENAME")
//!     .build()
//!     .expect("Failed to load configuration");
//!
//! assert_eq!(config.database.schema_version, 1);
//! ```

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

use devicename_types::{CacheCapacity, TimeoutConfig};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub mod builder;
pub mod error;
pub mod loader;

pub use builder::ConfigBuilder;
pub use error::{ConfigError, ConfigResult};
pub use loader::ConfigLoader;

/// Placeholder replaced by the lowercased codename in remote catalog URLs
pub const CODENAME_PLACEHOLDER: &str = "{codename}";

/// Main configuration structure for devicename
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Static table resolver
    pub catalog: CatalogConfig,
    /// Bundled database resolver
    pub database: DatabaseConfig,
    /// Legacy network resolver
    pub network: NetworkConfig,
    /// Persistent lookup cache
    pub cache: CacheConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Offline data pipeline
    pub pipeline: PipelineConfig,
}

/// Static table resolver configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Consult the compiled-in table
    pub enabled: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Bundled database resolver configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Consult the bundled database
    pub enabled: bool,
    /// Zip archive shipped with the application
    pub asset_path: PathBuf,
    /// Where the database is extracted to (default: the user data directory)
    pub install_dir: Option<PathBuf>,
    /// File name of the extracted database
    pub database_name: String,
    /// Schema version the bundled asset carries
    pub schema_version: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            asset_path: PathBuf::from("assets").join("android-devices.zip"),
            install_dir: None,
            database_name: "android-devices.db".to_string(),
            schema_version: 1,
        }
    }
}

impl DatabaseConfig {
    /// Directory the database is extracted into
    pub fn install_dir(&self) -> PathBuf {
        self.install_dir.clone().unwrap_or_else(default_data_dir)
    }

    /// Full path of the extracted database
    pub fn database_path(&self) -> PathBuf {
        self.install_dir().join(&self.database_name)
    }

    /// Key-value file recording which schema version is installed
    pub fn preferences_path(&self) -> PathBuf {
        self.install_dir().join("preferences.json")
    }
}

/// Legacy network resolver configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Fetch unknown devices from the remote catalog
    pub enabled: bool,
    /// URL of the per-codename JSON file, containing `{codename}`
    pub url_template: String,
    /// Connection timeout configuration
    pub timeouts: TimeoutConfig,
    /// Report the network as unavailable and never fetch
    pub offline: bool,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            url_template: "https://raw.githubusercontent.com/jaredrummler/AndroidDeviceNames/master/json/codenames/{codename}.json".to_string(),
            timeouts: TimeoutConfig::default(),
            offline: false,
        }
    }
}

/// Persistent lookup cache configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Cache file (default: `device-names.json` in the user data directory)
    pub path: Option<PathBuf>,
    /// Keep at most this many entries, evicting the least recently used
    pub max_entries: Option<CacheCapacity>,
}

impl CacheConfig {
    /// Cache file location
    pub fn path(&self) -> PathBuf {
        self.path
            .clone()
            .unwrap_or_else(|| default_data_dir().join("device-names.json"))
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    pub level: String,
    /// Enable JSON formatting
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            json_format: false,
        }
    }
}

/// Offline data pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Published device list
    pub csv_url: String,
    /// Directory receiving the JSON artifacts
    pub output_dir: PathBuf,
    /// Directory receiving the database snapshot and its zip
    pub database_dir: PathBuf,
    /// Market names exported to `popular-devices.json` (default: built-in list)
    pub popular_devices: Option<Vec<String>>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            csv_url: "https://storage.googleapis.com/play_public/supported_devices.csv"
                .to_string(),
            output_dir: PathBuf::from("json"),
            database_dir: PathBuf::from("database"),
            popular_devices: None,
        }
    }
}

/// Per-user directories for devicename
pub fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "loonghao", "devicename")
}

/// Per-user data directory, or `.devicename` when no home directory exists
pub fn default_data_dir() -> PathBuf {
    project_dirs().map_or_else(
        || PathBuf::from(".devicename"),
        |dirs| dirs.data_dir().to_path_buf(),
    )
}
