//! End-to-end artifact generation

use crate::csv::{self, ParsedCsv};
use crate::json::{write_json, JsonSummary, JsonWriter};
use crate::popular::{select_popular, POPULAR_DEVICES};
use crate::source::CsvSource;
use crate::table::{generate_table, GeneratedTable};
use chrono::{DateTime, Utc};
use devicename_config::PipelineConfig;
use devicename_database::schema::{ASSET_NAME, DATABASE_NAME, SCHEMA_VERSION};
use devicename_database::{write_database, zip_database};
use devicename_types::{Result, TimeoutConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Name of the run summary written next to the JSON artifacts
pub const MANIFEST_JSON: &str = "manifest.json";

/// Summary of one pipeline run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// When the run finished
    pub generated_at: DateTime<Utc>,
    /// Where the CSV came from
    pub source: String,
    /// Records accepted from the CSV
    pub records: usize,
    /// CSV rows skipped for an unexpected field count
    pub skipped_rows: usize,
    /// Per-codename documents written
    pub codenames: usize,
    /// Codenames not usable as file names
    pub rejected_codenames: usize,
    /// Per-manufacturer documents written
    pub manufacturers: usize,
    /// Records in `popular-devices.json`
    pub popular: usize,
    /// Rows of the generated static table
    pub table_rows: usize,
    /// Identifiers dropped from the static table as duplicates
    pub dropped_identifiers: usize,
    /// Rows in the database snapshot, if one was written
    pub database_rows: Option<usize>,
    /// Schema version of the database snapshot
    pub schema_version: u32,
}

/// Everything a run produced
#[derive(Debug, Clone)]
pub struct PipelineReport {
    /// The manifest, also written as `manifest.json`
    pub manifest: Manifest,
    /// Static table rows and overlap report
    pub table: GeneratedTable,
    /// JSON artifact directory
    pub output_dir: PathBuf,
    /// Database snapshot, if written
    pub database_path: Option<PathBuf>,
    /// Zipped snapshot, if written
    pub asset_path: Option<PathBuf>,
    /// Generated table source, if written
    pub table_path: Option<PathBuf>,
}

/// Turns the supported devices CSV into every runtime artifact
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: PipelineConfig,
    timeouts: TimeoutConfig,
    table_output: Option<PathBuf>,
    write_database: bool,
}

impl Pipeline {
    /// Create a pipeline from configuration
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            config,
            timeouts: TimeoutConfig::default(),
            table_output: None,
            write_database: true,
        }
    }

    /// Use `timeouts` for the CSV download
    pub fn with_timeouts(mut self, timeouts: TimeoutConfig) -> Self {
        self.timeouts = timeouts;
        self
    }

    /// Also write the static table source to `path`
    pub fn with_table_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.table_output = Some(path.into());
        self
    }

    /// Skip the database snapshot
    pub fn without_database(mut self) -> Self {
        self.write_database = false;
        self
    }

    /// The configured source location
    pub fn default_source(&self) -> CsvSource {
        CsvSource::parse(&self.config.csv_url)
    }

    /// Market names treated as popular
    pub fn popular_names(&self) -> Vec<String> {
        self.config.popular_devices.clone().unwrap_or_else(|| {
            POPULAR_DEVICES.iter().map(ToString::to_string).collect()
        })
    }

    /// Load, parse and generate everything from `source`
    pub fn run(&self, source: &CsvSource) -> Result<PipelineReport> {
        let bytes = source.load(&self.timeouts)?;
        let parsed = csv::parse_bytes(&bytes)?;
        info!(
            "Read {} records from {} ({} rows skipped)",
            parsed.devices.len(),
            source,
            parsed.skipped
        );
        self.generate(&source.to_string(), &parsed)
    }

    /// Generate every artifact from already parsed records
    pub fn generate(&self, source: &str, parsed: &ParsedCsv) -> Result<PipelineReport> {
        let devices = &parsed.devices;
        let names = self.popular_names();

        let popular = select_popular(devices, &names);
        let json = JsonWriter::new(&self.config.output_dir).write_all(devices, &popular)?;
        info!(
            "Wrote JSON artifacts to {}",
            self.config.output_dir.display()
        );

        let table = generate_table(devices, &names);
        let table_path = match &self.table_output {
            Some(path) => {
                write_text(path, &table.render())?;
                info!("Wrote static table to {}", path.display());
                Some(path.clone())
            }
            None => None,
        };

        let (database_rows, database_path, asset_path) = if self.write_database {
            let database_path = self.config.database_dir.join(DATABASE_NAME);
            let asset_path = self.config.database_dir.join(ASSET_NAME);
            let rows = write_database(&database_path, devices)?;
            zip_database(&database_path, &asset_path)?;
            info!("Wrote database asset {}", asset_path.display());
            (Some(rows), Some(database_path), Some(asset_path))
        } else {
            (None, None, None)
        };

        let manifest = manifest(source, parsed, json, &table, database_rows);
        write_json(&self.config.output_dir.join(MANIFEST_JSON), &manifest)?;

        Ok(PipelineReport {
            manifest,
            table,
            output_dir: self.config.output_dir.clone(),
            database_path,
            asset_path,
            table_path,
        })
    }
}

fn manifest(
    source: &str,
    parsed: &ParsedCsv,
    json: JsonSummary,
    table: &GeneratedTable,
    database_rows: Option<usize>,
) -> Manifest {
    Manifest {
        generated_at: Utc::now(),
        source: source.to_string(),
        records: parsed.devices.len(),
        skipped_rows: parsed.skipped,
        codenames: json.codenames,
        rejected_codenames: json.rejected_codenames,
        manufacturers: json.manufacturers,
        popular: json.popular,
        table_rows: table.entries.len(),
        dropped_identifiers: table.dropped.len(),
        database_rows,
        schema_version: SCHEMA_VERSION,
    }
}

fn write_text(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, text)?;
    Ok(())
}
