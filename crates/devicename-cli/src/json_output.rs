//! JSON output structures for the devicename CLI

use devicename_pipeline::{DroppedIdentifier, Manifest, PipelineReport};
use devicename_store::CacheStats;
use devicename_types::{DeviceInfo, DeviceQuery, Resolution, ResolutionSource};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Operation metadata
#[derive(Debug, Serialize, Deserialize)]
pub struct OperationMetadata {
    /// devicename version
    pub version: String,
    /// Subcommand that produced the output
    pub operation: String,
    /// When the output was produced
    pub timestamp: String,
}

impl OperationMetadata {
    /// Metadata for `operation` stamped now
    pub fn new(operation: &str) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            operation: operation.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Output of `resolve` and `info`
#[derive(Debug, Serialize, Deserialize)]
pub struct ResolutionJson {
    /// Operation metadata
    pub metadata: OperationMetadata,
    /// Queried codename
    pub codename: Option<String>,
    /// Queried model
    pub model: Option<String>,
    /// Display name
    pub name: String,
    /// Layer that answered
    pub source: ResolutionSource,
    /// Full record
    pub info: DeviceInfo,
    /// Lookup error reported alongside the fallback record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ResolutionJson {
    /// Describe `resolution` of `query`
    pub fn new(operation: &str, query: &DeviceQuery, resolution: Resolution) -> Self {
        Self {
            metadata: OperationMetadata::new(operation),
            codename: query.codename().map(str::to_string),
            model: query.model().map(str::to_string),
            name: resolution.info.name(),
            source: resolution.source,
            info: resolution.info,
            error: None,
        }
    }

    /// Attach a lookup error
    pub fn with_error(mut self, error: Option<String>) -> Self {
        self.error = error;
        self
    }
}

/// Output of `cache stats`
#[derive(Debug, Serialize, Deserialize)]
pub struct CacheJson {
    /// Operation metadata
    pub metadata: OperationMetadata,
    /// Cache file
    pub path: PathBuf,
    /// Entries stored
    pub entries: usize,
    /// Entry cap, if any
    pub capacity: Option<usize>,
    /// Writes since the cache was opened
    pub writes: u64,
    /// Evictions since the cache was opened
    pub evictions: u64,
}

impl CacheJson {
    /// Describe the cache at `path`
    pub fn new(path: &Path, stats: &CacheStats, capacity: Option<usize>) -> Self {
        Self {
            metadata: OperationMetadata::new("cache"),
            path: path.to_path_buf(),
            entries: stats.entries,
            capacity,
            writes: stats.writes,
            evictions: stats.evictions,
        }
    }
}

/// Output of `generate`
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateJson {
    /// Operation metadata
    pub metadata: OperationMetadata,
    /// Run summary
    pub manifest: Manifest,
    /// JSON artifact directory
    pub output_dir: PathBuf,
    /// Database snapshot
    pub database_path: Option<PathBuf>,
    /// Zipped snapshot
    pub asset_path: Option<PathBuf>,
    /// Static table source
    pub table_path: Option<PathBuf>,
    /// Identifiers dropped from the static table
    pub dropped_identifiers: Vec<DroppedIdentifierJson>,
}

/// An identifier dropped from the static table
#[derive(Debug, Serialize, Deserialize)]
pub struct DroppedIdentifierJson {
    /// The shared identifier
    pub identifier: String,
    /// Product keeping it
    pub kept_by: String,
    /// Product it was removed from
    pub dropped_from: String,
}

impl From<&DroppedIdentifier> for DroppedIdentifierJson {
    fn from(dropped: &DroppedIdentifier) -> Self {
        Self {
            identifier: dropped.identifier.clone(),
            kept_by: dropped.kept_by.clone(),
            dropped_from: dropped.dropped_from.clone(),
        }
    }
}

impl From<&PipelineReport> for GenerateJson {
    fn from(report: &PipelineReport) -> Self {
        Self {
            metadata: OperationMetadata::new("generate"),
            manifest: report.manifest.clone(),
            output_dir: report.output_dir.clone(),
            database_path: report.database_path.clone(),
            asset_path: report.asset_path.clone(),
            table_path: report.table_path.clone(),
            dropped_identifiers: report.table.dropped.iter().map(Into::into).collect(),
        }
    }
}

/// Print `value` as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
