//! Produce the database asset from device records

use crate::schema::{CREATE_INDEXES, CREATE_TABLE, DATABASE_NAME, TABLE};
use crate::sql_error;
use devicename_types::{Device, Error, Result};
use rusqlite::{params, Connection};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;
use tracing::{debug, info};
use zip::{write::SimpleFileOptions, CompressionMethod, ZipWriter};

/// Write `devices` into a fresh SQLite file at `path`
///
/// Any existing file is replaced. Rows keep the order of `devices`, which
/// is the order ambiguous queries fall back on. Returns the number of rows
/// written.
pub fn write_database<P: AsRef<Path>>(path: P, devices: &[Device]) -> Result<usize> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    if path.exists() {
        fs::remove_file(path)?;
    }

    let mut conn = Connection::open(path).map_err(sql_error)?;
    conn.execute_batch(CREATE_TABLE).map_err(sql_error)?;

    let tx = conn.transaction().map_err(sql_error)?;
    {
        let mut stmt = tx
            .prepare(&format!(
                "INSERT INTO {} (manufacturer, name, codename, model) VALUES (?1, ?2, ?3, ?4)",
                TABLE
            ))
            .map_err(sql_error)?;
        for device in devices {
            stmt.execute(params![
                device.manufacturer,
                device.market_name,
                device.codename,
                device.model
            ])
            .map_err(sql_error)?;
        }
    }
    tx.commit().map_err(sql_error)?;

    conn.execute_batch(CREATE_INDEXES).map_err(sql_error)?;
    conn.execute_batch("VACUUM").map_err(sql_error)?;

    info!("Wrote {} rows to {}", devices.len(), path.display());
    Ok(devices.len())
}

/// Pack the database at `db_path` into a single-entry zip archive
///
/// The entry is always named [`DATABASE_NAME`] so the installer finds it
/// regardless of the source file name.
pub fn zip_database<P: AsRef<Path>, Q: AsRef<Path>>(db_path: P, zip_path: Q) -> Result<()> {
    let db_path = db_path.as_ref();
    let zip_path = zip_path.as_ref();
    if let Some(parent) = zip_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut source = File::open(db_path)?;
    let mut zip = ZipWriter::new(File::create(zip_path)?);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    zip.start_file(DATABASE_NAME, options)
        .map_err(|e| Error::storage(format!("Failed to start zip entry: {}", e)))?;
    let copied = io::copy(&mut source, &mut zip)?;
    zip.flush()?;
    zip.finish()
        .map_err(|e| Error::storage(format!("Failed to finish '{}': {}", zip_path.display(), e)))?;

    debug!(
        "Packed {} ({} bytes) into {}",
        db_path.display(),
        copied,
        zip_path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use tempfile::TempDir;

    fn devices() -> Vec<Device> {
        vec![
            Device::new(Some("Google"), "Pixel", "sailfish", "Pixel"),
            Device::new(Some("Google"), "Pixel XL", "marlin", "Pixel XL"),
        ]
    }

    #[test]
    fn test_write_database_replaces_existing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("devices.db");

        assert_eq!(write_database(&path, &devices()).unwrap(), 2);
        assert_eq!(write_database(&path, &devices()[..1]).unwrap(), 1);

        let conn = Connection::open(&path).unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM devices", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_rows_keep_input_order() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("devices.db");
        write_database(&path, &devices()).unwrap();

        let conn = Connection::open(&path).unwrap();
        let mut stmt = conn.prepare("SELECT codename FROM devices ORDER BY _id").unwrap();
        let codenames: Vec<String> = stmt
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<std::result::Result<_, _>>()
            .unwrap();
        assert_eq!(codenames, vec!["sailfish", "marlin"]);
    }

    #[test]
    fn test_zip_database_single_entry() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("source.db");
        let zip_path = temp_dir.path().join("out").join("android-devices.zip");
        write_database(&db_path, &devices()).unwrap();
        zip_database(&db_path, &zip_path).unwrap();

        let mut archive = zip::ZipArchive::new(File::open(&zip_path).unwrap()).unwrap();
        assert_eq!(archive.len(), 1);
        let mut entry = archive.by_index(0).unwrap();
        assert_eq!(entry.name(), DATABASE_NAME);

        let mut extracted = Vec::new();
        entry.read_to_end(&mut extracted).unwrap();
        assert_eq!(extracted, fs::read(&db_path).unwrap());
    }
}
