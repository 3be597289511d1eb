//! [`DeviceLookup`] over the bundled database

use crate::{AssetInstaller, DeviceDatabase};
use devicename_config::DatabaseConfig;
use devicename_types::{DeviceInfo, DeviceLookup, DeviceQuery, Result};
use once_cell::sync::OnceCell;
use tracing::debug;

/// Installs the database on first lookup, then answers queries from it
///
/// Installation and opening run once per resolver. A failed attempt is not
/// cached, so the next lookup retries.
#[derive(Debug)]
pub struct DatabaseResolver {
    installer: AssetInstaller,
    db: OnceCell<DeviceDatabase>,
}

impl DatabaseResolver {
    /// Wrap an installer
    pub fn new(installer: AssetInstaller) -> Self {
        Self {
            installer,
            db: OnceCell::new(),
        }
    }

    /// Build from configuration
    pub fn from_config(config: &DatabaseConfig) -> Result<Self> {
        Ok(Self::new(AssetInstaller::from_config(config)?))
    }

    /// The installer backing this resolver
    pub fn installer(&self) -> &AssetInstaller {
        &self.installer
    }

    /// Install if needed and return the open database
    pub fn database(&self) -> Result<&DeviceDatabase> {
        self.db.get_or_try_init(|| {
            let path = self.installer.ensure_installed()?;
            DeviceDatabase::open(path)
        })
    }
}

impl DeviceLookup for DatabaseResolver {
    fn name(&self) -> &'static str {
        "database"
    }

    fn lookup(&self, query: &DeviceQuery) -> Result<Option<DeviceInfo>> {
        if query.is_empty() {
            return Ok(None);
        }
        let device = self.database()?.query(query)?;
        if let Some(device) = &device {
            debug!("Database hit for {}: {}", query, device.market_name);
        }
        Ok(device.map(DeviceInfo::from))
    }
}
