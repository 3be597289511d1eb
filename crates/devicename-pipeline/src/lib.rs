//! Offline data pipeline for devicename
//!
//! Reads the Google Play supported devices list and produces every artifact
//! the runtime resolvers consume:
//!
//! - `devices.json`, `popular-devices.json`, per-codename and
//!   per-manufacturer documents ([`json`])
//! - the SQLite snapshot and its zip asset (via `devicename-database`)
//! - the static table source compiled into `devicename-catalog` ([`table`])
//! - `manifest.json` with record and skip counts
//!
//! # Examples
//!
//! ```rust,no_run
//! use devicename_config::PipelineConfig;
//! use devicename_pipeline::Pipeline;
//!
//! let pipeline = Pipeline::new(PipelineConfig::default());
//! let report = pipeline.run(&pipeline.default_source())?;
//! println!("{} records", report.manifest.records);
//! # Ok::<(), devicename_types::Error>(())
//! ```

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod csv;
pub mod json;
pub mod pipeline;
pub mod popular;
pub mod source;
pub mod table;

pub use csv::ParsedCsv;
pub use json::{manufacturer_file_name, JsonWriter, Manufacturer};
pub use pipeline::{Manifest, Pipeline, PipelineReport};
pub use popular::{select_popular, POPULAR_DEVICES};
pub use source::CsvSource;
pub use table::{generate_table, render_table, DroppedIdentifier, GeneratedTable, TableEntry};
