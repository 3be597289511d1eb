//! Bundled SQLite device database for devicename
//!
//! The full device corpus ships as a zip archive holding a single SQLite file.
//! On first use the archive is extracted to writable storage
//! ([`AssetInstaller`]), after which every lookup is an offline query
//! ([`DeviceDatabase`]). [`DatabaseResolver`] ties both together behind the
//! [`DeviceLookup`](devicename_types::DeviceLookup) seam.
//!
//! The [`writer`] module produces the same artifact from a list of records.

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod database;
pub mod installer;
pub mod resolver;
pub mod schema;
pub mod writer;

pub use database::DeviceDatabase;
pub use installer::AssetInstaller;
pub use resolver::DatabaseResolver;
pub use writer::{write_database, zip_database};

use devicename_types::Error;

pub(crate) fn sql_error(error: rusqlite::Error) -> Error {
    Error::database(error.to_string())
}
