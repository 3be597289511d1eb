//! Read-only queries against the extracted device database

use crate::schema::TABLE;
use crate::sql_error;
use devicename_types::{Device, DeviceQuery, Error, Result};
use parking_lot::Mutex;
use rusqlite::{params_from_iter, Connection, OpenFlags};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Open handle on the device database
pub struct DeviceDatabase {
    path: PathBuf,
    conn: Mutex<Connection>,
}

impl DeviceDatabase {
    /// Open an extracted database read-only
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Err(Error::asset_not_found(path));
        }

        let conn = Connection::open_with_flags(
            &path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(sql_error)?;

        let has_table: bool = conn
            .query_row(
                "SELECT COUNT(*) > 0 FROM sqlite_master WHERE type = 'table' AND name = ?1",
                [TABLE],
                |row| row.get(0),
            )
            .map_err(|e| Error::asset_corrupt(&path, e.to_string()))?;
        if !has_table {
            return Err(Error::asset_corrupt(
                &path,
                format!("missing table `{}`", TABLE),
            ));
        }

        debug!("Opened device database {}", path.display());
        Ok(Self {
            path,
            conn: Mutex::new(conn),
        })
    }

    /// Location of the database file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Find the best row for `query`
    ///
    /// Absent identifiers place no constraint. With both present, rows
    /// matching either one are considered; when that is ambiguous and exactly
    /// one row matches both, that row wins. Otherwise the first row by `_id`
    /// is returned.
    pub fn query(&self, query: &DeviceQuery) -> Result<Option<Device>> {
        let conn = self.conn.lock();

        let rows = match (query.model(), query.codename()) {
            (Some(model), Some(codename)) => {
                let rows = select(&conn, "model = ?1 OR codename = ?2", &[model, codename])?;
                if rows.len() > 1 {
                    let narrowed =
                        select(&conn, "model = ?1 AND codename = ?2", &[model, codename])?;
                    if narrowed.len() == 1 {
                        trace!("Disambiguated {} by codename and model", query);
                        return Ok(narrowed.into_iter().next());
                    }
                }
                rows
            }
            (Some(model), None) => select(&conn, "model = ?1", &[model])?,
            (None, Some(codename)) => select(&conn, "codename = ?1", &[codename])?,
            (None, None) => return Ok(None),
        };

        Ok(rows.into_iter().next())
    }

    /// Number of rows in the database
    pub fn count(&self) -> Result<usize> {
        let conn = self.conn.lock();
        let count: i64 = conn
            .query_row(&format!("SELECT COUNT(*) FROM {}", TABLE), [], |row| {
                row.get(0)
            })
            .map_err(sql_error)?;
        Ok(count as usize)
    }
}

impl std::fmt::Debug for DeviceDatabase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeviceDatabase")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

/// Up to two rows matching `predicate`, in `_id` order
///
/// Two rows are enough to tell "unique" from "ambiguous".
fn select(conn: &Connection, predicate: &str, params: &[&str]) -> Result<Vec<Device>> {
    let sql = format!(
        "SELECT manufacturer, name, codename, model FROM {} WHERE {} ORDER BY _id LIMIT 2",
        TABLE, predicate
    );
    let mut stmt = conn.prepare_cached(&sql).map_err(sql_error)?;
    let rows = stmt
        .query_map(params_from_iter(params.iter()), |row| {
            let manufacturer: Option<String> = row.get(0)?;
            let name: Option<String> = row.get(1)?;
            let codename: Option<String> = row.get(2)?;
            let model: Option<String> = row.get(3)?;
            Ok(Device::new(
                manufacturer.as_deref(),
                name.unwrap_or_default(),
                codename.unwrap_or_default(),
                model.unwrap_or_default(),
            ))
        })
        .map_err(sql_error)?;

    rows.collect::<std::result::Result<Vec<_>, _>>()
        .map_err(sql_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::write_database;
    use rstest::rstest;
    use tempfile::TempDir;

    fn fixture() -> (TempDir, DeviceDatabase) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("android-devices.db");
        let devices = vec![
            Device::new(Some("Samsung"), "Galaxy S6 Edge", "zerolte", "SM-G925I"),
            Device::new(Some("Samsung"), "Galaxy S6 Edge", "zerolte", "SM-G925F"),
            Device::new(Some("Acme"), "First", "x", "m1"),
            Device::new(Some("Acme"), "Second", "x", "m2"),
            Device::new(Some("Acme"), "Third", "y", "m1"),
            Device::new(None, "Nameless Maker", "solo", "S1"),
        ];
        write_database(&path, &devices).unwrap();
        let db = DeviceDatabase::open(&path).unwrap();
        (temp_dir, db)
    }

    fn name(db: &DeviceDatabase, codename: Option<&str>, model: Option<&str>) -> Option<String> {
        db.query(&DeviceQuery::new(codename, model))
            .unwrap()
            .map(|d| d.market_name)
    }

    #[rstest]
    #[case(Some("zerolte"), Some("SM-G925I"), Some("Galaxy S6 Edge"))]
    #[case(None, Some("SM-G925F"), Some("Galaxy S6 Edge"))]
    #[case(Some("solo"), None, Some("Nameless Maker"))]
    #[case(Some("nope"), Some("nope"), None)]
    #[case(None, None, None)]
    #[case(Some(""), Some(""), None)]
    fn test_query(
        #[case] codename: Option<&str>,
        #[case] model: Option<&str>,
        #[case] expected: Option<&str>,
    ) {
        let (_dir, db) = fixture();
        assert_eq!(name(&db, codename, model).as_deref(), expected);
    }

    #[test]
    fn test_conjunction_breaks_ties() {
        let (_dir, db) = fixture();
        // "x" OR "m2" matches First and Second, only Second matches both
        assert_eq!(name(&db, Some("x"), Some("m2")).as_deref(), Some("Second"));
        // "x" OR "m1" matches First and Third, only First matches both
        assert_eq!(name(&db, Some("x"), Some("m1")).as_deref(), Some("First"));
    }

    #[test]
    fn test_ambiguous_falls_back_to_first_row() {
        let (_dir, db) = fixture();
        // Nothing matches both, so the first disjunctive row wins
        assert_eq!(name(&db, Some("y"), Some("m2")).as_deref(), Some("Second"));
        assert_eq!(name(&db, Some("x"), None).as_deref(), Some("First"));
    }

    #[test]
    fn test_missing_manufacturer() {
        let (_dir, db) = fixture();
        let device = db
            .query(&DeviceQuery::codename_only("solo"))
            .unwrap()
            .unwrap();
        assert_eq!(device.manufacturer, None);
        assert_eq!(db.count().unwrap(), 6);
    }

    #[test]
    fn test_open_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let error = DeviceDatabase::open(temp_dir.path().join("missing.db")).unwrap_err();
        assert!(matches!(error, Error::AssetNotFound { .. }));
    }

    #[test]
    fn test_open_wrong_schema() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("other.db");
        Connection::open(&path)
            .unwrap()
            .execute_batch("CREATE TABLE other (id INTEGER)")
            .unwrap();
        let error = DeviceDatabase::open(&path).unwrap_err();
        assert!(matches!(error, Error::AssetCorrupt { .. }));
    }
}
