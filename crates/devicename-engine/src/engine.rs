//! Layered resolver composed from configuration

use crate::dispatch::MainThread;
use crate::request::Request;
use devicename_catalog::{current_device_name, device_name, fallback_info, StaticTable};
use devicename_config::{Config, ConfigLoader};
use devicename_database::DatabaseResolver;
use devicename_network::{
    CatalogSource, Connectivity, HttpCatalogSource, LegacyResolver, StaticConnectivity,
};
use devicename_store::{CacheStats, DeviceCache, KeyValueStore, PreferenceStore, SharedDeviceCache};
use devicename_types::{
    CurrentDevice, DeviceInfo, DeviceLookup, DeviceQuery, Resolution, ResolutionSource, Result,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

struct Inner {
    config: Config,
    current: CurrentDevice,
    catalog: Option<&'static StaticTable>,
    database: Option<DatabaseResolver>,
    legacy: Option<LegacyResolver>,
    main_thread: Option<Arc<dyn MainThread>>,
}

/// Resolves market names through the static table, the bundled database and
/// the legacy network resolver, in that order
///
/// Cloning is cheap; clones share every layer.
#[derive(Clone)]
pub struct DeviceNames {
    inner: Arc<Inner>,
}

impl DeviceNames {
    /// Create a resolver with default configuration
    pub fn new() -> Result<Self> {
        DeviceNamesBuilder::new().build()
    }

    /// Create a resolver for `current` from `config`
    pub fn with_config(config: Config, current: CurrentDevice) -> Result<Self> {
        DeviceNamesBuilder::new()
            .with_config(config)
            .with_current_device(current)
            .build()
    }

    /// Start a builder
    pub fn builder() -> DeviceNamesBuilder {
        DeviceNamesBuilder::new()
    }

    /// Market name for the pair, or `fallback` verbatim
    pub fn resolve(
        &self,
        codename: Option<&str>,
        model: Option<&str>,
        fallback: &str,
    ) -> Result<String> {
        let query = DeviceQuery::new(codename, model);
        Ok(self
            .resolve_detailed(&query)?
            .and_then(|resolution| resolution.info.market_name)
            .unwrap_or_else(|| fallback.to_string()))
    }

    /// First resolved answer across the enabled layers
    ///
    /// A layer that knows the device but has no market name for it does not
    /// stop the search. Database answers are also written to the lookup cache
    /// when the network layer is enabled.
    pub fn resolve_detailed(&self, query: &DeviceQuery) -> Result<Option<Resolution>> {
        let inner = &self.inner;

        if let Some(table) = inner.catalog {
            if let Some(info) = table.lookup(query)?.filter(DeviceInfo::is_resolved) {
                return Ok(Some(Resolution::new(info, ResolutionSource::Static)));
            }
        }

        if let Some(database) = &inner.database {
            if let Some(info) = database.lookup(query)?.filter(DeviceInfo::is_resolved) {
                if let Some(legacy) = &inner.legacy {
                    legacy.remember(query, &info)?;
                }
                return Ok(Some(Resolution::new(info, ResolutionSource::Database)));
            }
        }

        if let Some(legacy) = &inner.legacy {
            if let Some(resolution) = legacy
                .lookup_detailed(query)?
                .filter(|resolution| resolution.info.is_resolved())
            {
                return Ok(Some(resolution));
            }
        }

        debug!("No layer resolved {}", query);
        Ok(None)
    }

    /// Full record for `query`, falling back when no layer resolves it
    pub fn device_info(&self, query: &DeviceQuery) -> Result<DeviceInfo> {
        Ok(self.resolution(query)?.info)
    }

    /// Like [`resolve_detailed`](Self::resolve_detailed), reporting fallbacks
    /// as [`ResolutionSource::Fallback`]
    pub fn resolution(&self, query: &DeviceQuery) -> Result<Resolution> {
        Ok(self.resolve_detailed(query)?.unwrap_or_else(|| {
            Resolution::new(
                fallback_info(&self.inner.current, query),
                ResolutionSource::Fallback,
            )
        }))
    }

    /// Market name for `codename` from the static table only
    ///
    /// Never performs I/O.
    pub fn device_name(&self, codename: &str, fallback: &str) -> String {
        device_name(codename, fallback)
    }

    /// The device this resolver was built for
    pub fn current_device(&self) -> &CurrentDevice {
        &self.inner.current
    }

    /// Display name of the current device from the static table only
    pub fn current_device_name(&self) -> String {
        current_device_name(&self.inner.current)
    }

    /// Start a request for the current device
    pub fn request(&self) -> Request {
        Request::new(self.clone())
    }

    /// Configuration the resolver was built from
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Lookup cache of the legacy resolver, when enabled
    pub fn cache(&self) -> Option<&SharedDeviceCache> {
        self.inner.legacy.as_ref().map(LegacyResolver::cache)
    }

    /// Cache statistics, when the legacy resolver is enabled
    pub fn cache_stats(&self) -> Option<CacheStats> {
        self.cache().map(|cache| cache.stats())
    }

    /// Remove every cached lookup
    pub fn clear_cache(&self) -> Result<()> {
        match self.cache() {
            Some(cache) => cache.clear(),
            None => Ok(()),
        }
    }

    /// Extract the bundled database now instead of on first lookup
    ///
    /// Returns the installed path, or `None` when the database layer is off.
    pub fn install_database(&self) -> Result<Option<PathBuf>> {
        match &self.inner.database {
            Some(database) => Ok(Some(database.database()?.path().to_path_buf())),
            None => Ok(None),
        }
    }

    pub(crate) fn main_thread(&self) -> Option<&Arc<dyn MainThread>> {
        self.inner.main_thread.as_ref()
    }
}

impl std::fmt::Debug for DeviceNames {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeviceNames")
            .field("current", &self.inner.current)
            .field("static", &self.inner.catalog.is_some())
            .field("database", &self.inner.database.is_some())
            .field("network", &self.inner.legacy.is_some())
            .finish()
    }
}

/// Builder for [`DeviceNames`]
///
/// Unset parts come from configuration: the loaded config file, an HTTP
/// catalog source, a cache file at `cache.path` and connectivity derived from
/// `network.offline`.
#[derive(Default)]
pub struct DeviceNamesBuilder {
    config: Option<Config>,
    current: Option<CurrentDevice>,
    cache_store: Option<Arc<dyn KeyValueStore>>,
    catalog_source: Option<Arc<dyn CatalogSource>>,
    connectivity: Option<Arc<dyn Connectivity>>,
    main_thread: Option<Arc<dyn MainThread>>,
}

impl DeviceNamesBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the device the process runs on
    pub fn with_current_device(mut self, current: CurrentDevice) -> Self {
        self.current = Some(current);
        self
    }

    /// Keep the lookup cache in `store`
    pub fn with_cache_store(mut self, store: Arc<dyn KeyValueStore>) -> Self {
        self.cache_store = Some(store);
        self
    }

    /// Fetch codename documents from `source`
    pub fn with_catalog_source(mut self, source: Arc<dyn CatalogSource>) -> Self {
        self.catalog_source = Some(source);
        self
    }

    /// Ask `connectivity` before fetching
    pub fn with_connectivity(mut self, connectivity: Arc<dyn Connectivity>) -> Self {
        self.connectivity = Some(connectivity);
        self
    }

    /// Marshal request callbacks to `main_thread`
    pub fn with_main_thread(mut self, main_thread: Arc<dyn MainThread>) -> Self {
        self.main_thread = Some(main_thread);
        self
    }

    /// Build the resolver
    ///
    /// Nothing is extracted or fetched here; the database installs on first
    /// lookup.
    pub fn build(self) -> Result<DeviceNames> {
        let config = match self.config {
            Some(config) => config,
            None => ConfigLoader::load_default()?,
        };
        let current = self.current.unwrap_or_default();

        let catalog = config.catalog.enabled.then(StaticTable::global);

        let database = if config.database.enabled {
            Some(DatabaseResolver::from_config(&config.database)?)
        } else {
            None
        };

        let legacy = if config.network.enabled {
            let store: Arc<dyn KeyValueStore> = match self.cache_store {
                Some(store) => store,
                None => PreferenceStore::shared(config.cache.path())?,
            };
            let cache = DeviceCache::with_capacity(store, config.cache.max_entries)?;
            let source: Arc<dyn CatalogSource> = match self.catalog_source {
                Some(source) => source,
                None => Arc::new(HttpCatalogSource::new(&config.network)),
            };
            let connectivity: Arc<dyn Connectivity> = match self.connectivity {
                Some(connectivity) => connectivity,
                None if config.network.offline => Arc::new(StaticConnectivity::offline()),
                None => Arc::new(StaticConnectivity::default()),
            };
            Some(LegacyResolver::new(
                source,
                connectivity,
                Arc::new(cache),
                current.clone(),
            ))
        } else {
            None
        };

        info!(
            "Device name resolver ready (static: {}, database: {}, network: {})",
            catalog.is_some(),
            database.is_some(),
            legacy.is_some()
        );

        Ok(DeviceNames {
            inner: Arc::new(Inner {
                config,
                current,
                catalog,
                database,
                legacy,
                main_thread: self.main_thread,
            }),
        })
    }
}
