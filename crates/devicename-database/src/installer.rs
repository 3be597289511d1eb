//! Extract the bundled database archive to writable storage

use crate::schema::SCHEMA_VERSION;
use devicename_config::DatabaseConfig;
use devicename_store::{path_lock, KeyValueStore, PreferenceStore};
use devicename_types::{Error, Result};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Copies the database out of its zip asset when needed
///
/// The installed schema version is recorded in a preference store under the
/// database file name. Extraction happens when the file is missing or the
/// recorded version differs from the expected one.
pub struct AssetInstaller {
    asset_path: PathBuf,
    database_path: PathBuf,
    schema_version: u32,
    prefs: Arc<dyn KeyValueStore>,
}

impl AssetInstaller {
    /// Create an installer with an explicit preference store
    pub fn new(
        asset_path: impl Into<PathBuf>,
        database_path: impl Into<PathBuf>,
        prefs: Arc<dyn KeyValueStore>,
    ) -> Self {
        Self {
            asset_path: asset_path.into(),
            database_path: database_path.into(),
            schema_version: SCHEMA_VERSION,
            prefs,
        }
    }

    /// Create an installer from configuration
    ///
    /// The version marker lives in `preferences.json` next to the database,
    /// in the process-wide store for that file.
    pub fn from_config(config: &DatabaseConfig) -> Result<Self> {
        let prefs = PreferenceStore::shared(config.preferences_path())?;
        Ok(
            Self::new(&config.asset_path, config.database_path(), prefs)
                .with_schema_version(config.schema_version),
        )
    }

    /// Expect `version` instead of the built-in schema version
    pub fn with_schema_version(mut self, version: u32) -> Self {
        self.schema_version = version;
        self
    }

    /// Where the database is extracted to
    pub fn database_path(&self) -> &Path {
        &self.database_path
    }

    /// The zip asset
    pub fn asset_path(&self) -> &Path {
        &self.asset_path
    }

    /// Version recorded by the last successful extraction
    pub fn installed_version(&self) -> Result<Option<u32>> {
        let value = self.prefs.get(&self.marker_key())?;
        Ok(value.and_then(|v| v.trim().parse().ok()))
    }

    /// Whether the extracted file is present and current
    pub fn is_installed(&self) -> Result<bool> {
        Ok(self.database_path.exists() && self.installed_version()? == Some(self.schema_version))
    }

    /// Extract the database unless an up-to-date copy is already in place
    ///
    /// Concurrent callers in this process serialize on the database path, so
    /// only the first one extracts. Returns the database path.
    pub fn ensure_installed(&self) -> Result<&Path> {
        self.install_if_needed()?;
        Ok(&self.database_path)
    }

    /// Like [`ensure_installed`](Self::ensure_installed), reporting whether
    /// this call extracted the archive
    pub fn install_if_needed(&self) -> Result<bool> {
        let lock = path_lock(&self.database_path);
        let _guard = lock.lock();

        if self.is_installed()? {
            debug!("Database {} is current", self.database_path.display());
            return Ok(false);
        }

        self.extract()?;
        Ok(true)
    }

    /// Extract unconditionally, replacing any existing copy
    pub fn reinstall(&self) -> Result<&Path> {
        let lock = path_lock(&self.database_path);
        let _guard = lock.lock();
        self.extract()?;
        Ok(&self.database_path)
    }

    fn extract(&self) -> Result<()> {
        if !self.asset_path.is_file() {
            return Err(Error::asset_not_found(&self.asset_path));
        }
        let corrupt =
            |e: zip::result::ZipError| Error::asset_corrupt(&self.asset_path, e.to_string());

        let mut archive = zip::ZipArchive::new(File::open(&self.asset_path)?).map_err(corrupt)?;
        if archive.is_empty() {
            return Err(Error::asset_corrupt(&self.asset_path, "archive has no entries"));
        }
        if archive.len() > 1 {
            warn!(
                "{} holds {} entries, extracting the first",
                self.asset_path.display(),
                archive.len()
            );
        }

        if let Some(parent) = self
            .database_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
        {
            fs::create_dir_all(parent)?;
        }

        let mut tmp_name = self.database_path.clone().into_os_string();
        tmp_name.push(".tmp");
        let tmp_path = PathBuf::from(tmp_name);

        let written = {
            let mut entry = archive.by_index(0).map_err(corrupt)?;
            let mut out = File::create(&tmp_path)?;
            match io::copy(&mut entry, &mut out) {
                Ok(written) => written,
                Err(e) => {
                    drop(out);
                    let _ = fs::remove_file(&tmp_path);
                    return Err(Error::asset_corrupt(&self.asset_path, e.to_string()));
                }
            }
        };
        fs::rename(&tmp_path, &self.database_path)?;

        self.prefs
            .set(&self.marker_key(), &self.schema_version.to_string())?;

        info!(
            "Installed {} ({} bytes, version {})",
            self.database_path.display(),
            written,
            self.schema_version
        );
        Ok(())
    }

    fn marker_key(&self) -> String {
        self.database_path
            .file_name()
            .map_or_else(String::new, |name| name.to_string_lossy().into_owned())
    }
}

impl std::fmt::Debug for AssetInstaller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssetInstaller")
            .field("asset_path", &self.asset_path)
            .field("database_path", &self.database_path)
            .field("schema_version", &self.schema_version)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::{write_database, zip_database};
    use crate::DeviceDatabase;
    use devicename_store::MemoryStore;
    use devicename_types::{Device, DeviceQuery};
    use std::io::Write;
    use tempfile::TempDir;

    struct Fixture {
        dir: TempDir,
        prefs: Arc<MemoryStore>,
    }

    impl Fixture {
        fn new() -> Self {
            let dir = TempDir::new().unwrap();
            let source = dir.path().join("source.db");
            write_database(
                &source,
                &[Device::new(Some("Motorola"), "Moto X Style", "clark", "XT1572")],
            )
            .unwrap();
            zip_database(&source, dir.path().join("android-devices.zip")).unwrap();
            Self {
                dir,
                prefs: Arc::new(MemoryStore::new()),
            }
        }

        fn installer(&self) -> AssetInstaller {
            AssetInstaller::new(
                self.dir.path().join("android-devices.zip"),
                self.dir.path().join("data").join("android-devices.db"),
                self.prefs.clone(),
            )
        }
    }

    #[test]
    fn test_first_install_extracts() {
        let fixture = Fixture::new();
        let installer = fixture.installer();
        assert!(!installer.is_installed().unwrap());

        let path = installer.ensure_installed().unwrap().to_path_buf();
        assert!(path.exists());
        assert_eq!(installer.installed_version().unwrap(), Some(SCHEMA_VERSION));
        assert_eq!(
            fixture.prefs.get("android-devices.db").unwrap().as_deref(),
            Some("1")
        );

        let db = DeviceDatabase::open(&path).unwrap();
        let device = db.query(&DeviceQuery::codename_only("clark")).unwrap().unwrap();
        assert_eq!(device.market_name, "Moto X Style");
    }

    #[test]
    fn test_current_install_is_kept() {
        let fixture = Fixture::new();
        let installer = fixture.installer();
        let path = installer.ensure_installed().unwrap().to_path_buf();

        // A sentinel byte survives when no re-extraction happens
        fs::OpenOptions::new()
            .append(true)
            .open(&path)
            .unwrap()
            .write_all(b"x")
            .unwrap();
        let len = fs::metadata(&path).unwrap().len();

        installer.ensure_installed().unwrap();
        assert_eq!(fs::metadata(&path).unwrap().len(), len);
    }

    #[test]
    fn test_version_bump_reextracts() {
        let fixture = Fixture::new();
        fixture.installer().ensure_installed().unwrap();

        let upgraded = fixture.installer().with_schema_version(2);
        assert!(!upgraded.is_installed().unwrap());
        upgraded.ensure_installed().unwrap();
        assert_eq!(upgraded.installed_version().unwrap(), Some(2));
    }

    #[test]
    fn test_missing_file_reextracts() {
        let fixture = Fixture::new();
        let installer = fixture.installer();
        let path = installer.ensure_installed().unwrap().to_path_buf();
        fs::remove_file(&path).unwrap();

        assert!(!installer.is_installed().unwrap());
        installer.ensure_installed().unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_missing_asset() {
        let dir = TempDir::new().unwrap();
        let installer = AssetInstaller::new(
            dir.path().join("absent.zip"),
            dir.path().join("android-devices.db"),
            Arc::new(MemoryStore::new()),
        );
        let error = installer.ensure_installed().unwrap_err();
        assert!(matches!(error, Error::AssetNotFound { .. }));
    }

    #[test]
    fn test_corrupt_asset() {
        let dir = TempDir::new().unwrap();
        let asset = dir.path().join("broken.zip");
        fs::write(&asset, b"not a zip archive").unwrap();
        let prefs = Arc::new(MemoryStore::new());
        let installer =
            AssetInstaller::new(&asset, dir.path().join("android-devices.db"), prefs.clone());

        let error = installer.ensure_installed().unwrap_err();
        assert!(matches!(error, Error::AssetCorrupt { .. }));
        assert!(prefs.get("android-devices.db").unwrap().is_none());
    }

    #[test]
    fn test_from_config_persists_marker() {
        let fixture = Fixture::new();
        let config = DatabaseConfig {
            asset_path: fixture.dir.path().join("android-devices.zip"),
            install_dir: Some(fixture.dir.path().join("install")),
            ..DatabaseConfig::default()
        };
        AssetInstaller::from_config(&config)
            .unwrap()
            .ensure_installed()
            .unwrap();

        let reopened = AssetInstaller::from_config(&config).unwrap();
        assert!(reopened.is_installed().unwrap());
        assert!(config.preferences_path().exists());
    }

    fn fixture_config(fixture: &Fixture) -> DatabaseConfig {
        DatabaseConfig {
            asset_path: fixture.dir.path().join("android-devices.zip"),
            install_dir: Some(fixture.dir.path().join("install")),
            ..DatabaseConfig::default()
        }
    }

    #[test]
    fn test_installer_opened_earlier_sees_install() {
        let fixture = Fixture::new();
        let config = fixture_config(&fixture);
        let first = AssetInstaller::from_config(&config).unwrap();
        let second = AssetInstaller::from_config(&config).unwrap();

        assert!(first.install_if_needed().unwrap());
        let path = first.database_path().to_path_buf();
        fs::write(&path, b"sentinel").unwrap();

        assert!(!second.install_if_needed().unwrap());
        assert_eq!(fs::read(&path).unwrap(), b"sentinel");
    }

    #[test]
    fn test_concurrent_installers_extract_once() {
        let fixture = Fixture::new();
        let config = fixture_config(&fixture);
        let installers: Vec<_> = (0..8)
            .map(|_| AssetInstaller::from_config(&config).unwrap())
            .collect();
        let barrier = Arc::new(std::sync::Barrier::new(installers.len()));

        let handles: Vec<_> = installers
            .into_iter()
            .map(|installer| {
                let barrier = Arc::clone(&barrier);
                std::thread::spawn(move || {
                    barrier.wait();
                    installer.install_if_needed().unwrap()
                })
            })
            .collect();
        let extractions = handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .filter(|extracted| *extracted)
            .count();

        assert_eq!(extractions, 1);
        assert!(AssetInstaller::from_config(&config)
            .unwrap()
            .is_installed()
            .unwrap());
    }
}
