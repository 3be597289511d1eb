//! Cache-then-network resolution

use crate::connectivity::Connectivity;
use crate::source::CatalogSource;
use devicename_catalog::fallback_info;
use devicename_store::SharedDeviceCache;
use devicename_types::{
    CurrentDevice, DeviceInfo, DeviceLookup, DeviceQuery, Error, Resolution, ResolutionSource,
    Result,
};
use serde::Deserialize;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Steps of one legacy resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionState {
    /// Nothing done yet
    Unqueried,
    /// Looking up the persistent cache
    CacheCheck,
    /// Answered from the cache
    CacheHit,
    /// Asking whether the network is usable
    NetworkCheck,
    /// Downloading the codename document
    NetworkFetch,
    /// Decoding the document
    Parse,
    /// Picking the matching record or the fallback
    MatchOrFallback,
    /// Persisting a match
    CacheWrite,
    /// Finished
    Done,
}

impl fmt::Display for ResolutionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unqueried => "unqueried",
            Self::CacheCheck => "cache-check",
            Self::CacheHit => "cache-hit",
            Self::NetworkCheck => "network-check",
            Self::NetworkFetch => "network-fetch",
            Self::Parse => "parse",
            Self::MatchOrFallback => "match-or-fallback",
            Self::CacheWrite => "cache-write",
            Self::Done => "done",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Deserialize)]
struct RemoteRecord {
    #[serde(default)]
    manufacturer: Option<String>,
    #[serde(default)]
    market_name: Option<String>,
    #[serde(default)]
    codename: Option<String>,
    #[serde(default)]
    model: Option<String>,
}

impl From<RemoteRecord> for DeviceInfo {
    fn from(record: RemoteRecord) -> Self {
        Self::new(
            record.manufacturer.filter(|m| !m.is_empty()),
            record.market_name,
            record.codename.unwrap_or_default(),
            record.model.unwrap_or_default(),
        )
    }
}

/// Decode a codename document into device records
///
/// Fields missing from a record decode as empty.
pub fn parse_catalog(body: &str) -> Result<Vec<DeviceInfo>> {
    let records: Vec<RemoteRecord> = serde_json::from_str(body)
        .map_err(|e| Error::parse(format!("Invalid codename document: {}", e)))?;
    Ok(records.into_iter().map(DeviceInfo::from).collect())
}

/// Resolves devices from the persistent cache, then the remote catalog
///
/// Matches are stored forever under `codename:model`. Network and decoding
/// failures degrade to the fallback record; cache storage failures are
/// returned.
pub struct LegacyResolver {
    source: Arc<dyn CatalogSource>,
    connectivity: Arc<dyn Connectivity>,
    cache: SharedDeviceCache,
    current: CurrentDevice,
}

struct Trace {
    query: String,
    states: Vec<ResolutionState>,
}

impl Trace {
    fn new(query: &DeviceQuery) -> Self {
        Self {
            query: query.to_string(),
            states: vec![ResolutionState::Unqueried],
        }
    }

    fn enter(&mut self, state: ResolutionState) {
        trace!("Legacy resolution {} -> {}", self.query, state);
        self.states.push(state);
    }
}

impl LegacyResolver {
    /// Create a resolver from its parts
    pub fn new(
        source: Arc<dyn CatalogSource>,
        connectivity: Arc<dyn Connectivity>,
        cache: SharedDeviceCache,
        current: CurrentDevice,
    ) -> Self {
        Self {
            source,
            connectivity,
            cache,
            current,
        }
    }

    /// The lookup cache
    pub fn cache(&self) -> &SharedDeviceCache {
        &self.cache
    }

    /// Record an answer another layer found for `query`
    ///
    /// Only complete queries are kept, and an existing entry is left as it
    /// is. Returns whether a new entry was written.
    pub fn remember(&self, query: &DeviceQuery, info: &DeviceInfo) -> Result<bool> {
        if query.codename().is_none() || query.model().is_none() || self.cache.contains(query)? {
            return Ok(false);
        }
        self.cache.insert(query, info)?;
        Ok(true)
    }

    /// Resolve `query`, always producing a record
    pub fn resolve(&self, query: &DeviceQuery) -> Result<DeviceInfo> {
        Ok(self.resolve_detailed(query)?.info)
    }

    /// Resolve `query` and report which layer answered
    pub fn resolve_detailed(&self, query: &DeviceQuery) -> Result<Resolution> {
        self.resolve_traced(query).map(|(resolution, _)| resolution)
    }

    /// Resolve `query` from the cache or network only
    ///
    /// Returns `None` where [`resolve`](Self::resolve) would fall back.
    pub fn lookup_detailed(&self, query: &DeviceQuery) -> Result<Option<Resolution>> {
        let mut trace = Trace::new(query);
        self.find(query, &mut trace)
    }

    /// Resolve `query` and return the states visited
    pub fn resolve_traced(
        &self,
        query: &DeviceQuery,
    ) -> Result<(Resolution, Vec<ResolutionState>)> {
        let mut trace = Trace::new(query);
        let found = self.find(query, &mut trace)?;
        let resolution = match found {
            Some(resolution) => resolution,
            None => Resolution::new(
                fallback_info(&self.current, query),
                ResolutionSource::Fallback,
            ),
        };
        trace.enter(ResolutionState::Done);
        Ok((resolution, trace.states))
    }

    fn find(&self, query: &DeviceQuery, trace: &mut Trace) -> Result<Option<Resolution>> {
        trace.enter(ResolutionState::CacheCheck);
        if let Some(info) = self.cache.get(query)? {
            trace.enter(ResolutionState::CacheHit);
            debug!("Legacy cache hit for {}", query);
            return Ok(Some(Resolution::new(info, ResolutionSource::Cache)));
        }

        let (Some(codename), Some(model)) = (query.codename(), query.model()) else {
            trace.enter(ResolutionState::MatchOrFallback);
            return Ok(None);
        };

        trace.enter(ResolutionState::NetworkCheck);
        let state = self.connectivity.state();
        if !state.should_fetch() {
            debug!("Network {:?}, skipping fetch for {}", state, query);
            trace.enter(ResolutionState::MatchOrFallback);
            return Ok(None);
        }

        let records = match self.fetch(codename, trace) {
            Ok(records) => records,
            Err(e) if e.is_recoverable() => {
                warn!("Legacy lookup for {} failed: {}", query, e);
                trace.enter(ResolutionState::MatchOrFallback);
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        trace.enter(ResolutionState::MatchOrFallback);
        let Some(info) = records
            .into_iter()
            .find(|info| info.codename == codename && info.model == model)
        else {
            debug!("No record in the codename document matches {}", query);
            return Ok(None);
        };

        trace.enter(ResolutionState::CacheWrite);
        self.cache.insert(query, &info)?;
        Ok(Some(Resolution::new(info, ResolutionSource::Network)))
    }

    fn fetch(&self, codename: &str, trace: &mut Trace) -> Result<Vec<DeviceInfo>> {
        trace.enter(ResolutionState::NetworkFetch);
        let body = self.source.fetch(codename)?;
        trace.enter(ResolutionState::Parse);
        parse_catalog(&body)
    }
}

impl DeviceLookup for LegacyResolver {
    fn name(&self) -> &'static str {
        "network"
    }

    fn lookup(&self, query: &DeviceQuery) -> Result<Option<DeviceInfo>> {
        Ok(self
            .lookup_detailed(query)?
            .map(|resolution| resolution.info))
    }
}

impl fmt::Debug for LegacyResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LegacyResolver")
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connectivity::StaticConnectivity;
    use devicename_store::{DeviceCache, KeyValueStore, MemoryStore};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use ResolutionState::*;

    const CLARK: &str = r#"[
        {"manufacturer": "Motorola", "market_name": "Moto X Pure Edition", "codename": "clark", "model": "XT1575"},
        {"manufacturer": "Motorola", "market_name": "Moto X Style", "codename": "clark", "model": "XT1572"}
    ]"#;

    struct StubSource {
        body: Result<String>,
        calls: AtomicUsize,
    }

    impl StubSource {
        fn new(body: Result<String>) -> Arc<Self> {
            Arc::new(Self {
                body,
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl CatalogSource for StubSource {
        fn fetch(&self, _codename: &str) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.body.clone()
        }
    }

    /// Store whose writes always fail
    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Ok(None)
        }
        fn set(&self, _key: &str, _value: &str) -> Result<()> {
            Err(Error::storage("read-only"))
        }
        fn delete(&self, _key: &str) -> Result<()> {
            Ok(())
        }
        fn scan(&self, _prefix: &str) -> Result<Vec<(String, String)>> {
            Ok(Vec::new())
        }
        fn clear(&self) -> Result<()> {
            Ok(())
        }
    }

    fn resolver(source: Arc<StubSource>, connectivity: StaticConnectivity) -> LegacyResolver {
        let cache = DeviceCache::new(Arc::new(MemoryStore::new())).unwrap();
        LegacyResolver::new(
            source,
            Arc::new(connectivity),
            Arc::new(cache),
            CurrentDevice::new("samsung", "zerolte", "SM-G925I"),
        )
    }

    #[test]
    fn test_network_match_is_cached() {
        let source = StubSource::new(Ok(CLARK.to_string()));
        let resolver = resolver(source.clone(), StaticConnectivity::online());
        let query = DeviceQuery::new(Some("clark"), Some("XT1572"));

        let (first, states) = resolver.resolve_traced(&query).unwrap();
        assert_eq!(first.source, ResolutionSource::Network);
        assert_eq!(first.info.name(), "Moto X Style");
        assert_eq!(
            states,
            vec![
                Unqueried,
                CacheCheck,
                NetworkCheck,
                NetworkFetch,
                Parse,
                MatchOrFallback,
                CacheWrite,
                Done
            ]
        );

        let (second, states) = resolver.resolve_traced(&query).unwrap();
        assert_eq!(second.source, ResolutionSource::Cache);
        assert_eq!(second.info, first.info);
        assert_eq!(states, vec![Unqueried, CacheCheck, CacheHit, Done]);
        assert_eq!(source.calls(), 1);
    }

    #[test]
    fn test_no_exact_match_falls_back_uncached() {
        let source = StubSource::new(Ok(CLARK.to_string()));
        let resolver = resolver(source.clone(), StaticConnectivity::online());
        let query = DeviceQuery::new(Some("clark"), Some("XT9999"));

        let resolution = resolver.resolve_detailed(&query).unwrap();
        assert_eq!(resolution.source, ResolutionSource::Fallback);
        assert_eq!(resolution.info.market_name, None);
        assert_eq!(resolution.info.codename, "clark");
        assert_eq!(resolution.info.model, "XT9999");
        assert!(resolver.cache().is_empty());

        resolver.resolve(&query).unwrap();
        assert_eq!(source.calls(), 2);
    }

    #[test]
    fn test_disconnected_skips_fetch() {
        let source = StubSource::new(Ok(CLARK.to_string()));
        let resolver = resolver(source.clone(), StaticConnectivity::offline());
        let query = DeviceQuery::new(Some("clark"), Some("XT1572"));

        let (resolution, states) = resolver.resolve_traced(&query).unwrap();
        assert_eq!(resolution.source, ResolutionSource::Fallback);
        assert_eq!(
            states,
            vec![Unqueried, CacheCheck, NetworkCheck, MatchOrFallback, Done]
        );
        assert_eq!(source.calls(), 0);
    }

    #[test]
    fn test_unknown_connectivity_still_fetches() {
        let source = StubSource::new(Ok(CLARK.to_string()));
        let resolver = resolver(source.clone(), StaticConnectivity::default());
        let query = DeviceQuery::new(Some("clark"), Some("XT1575"));
        assert_eq!(
            resolver.resolve(&query).unwrap().name(),
            "Moto X Pure Edition"
        );
        assert_eq!(source.calls(), 1);
    }

    #[test]
    fn test_network_error_degrades() {
        let source = StubSource::new(Err(Error::network("connection refused")));
        let resolver = resolver(source, StaticConnectivity::online());
        let info = resolver
            .resolve(&DeviceQuery::new(Some("clark"), Some("XT1572")))
            .unwrap();
        assert!(!info.is_resolved());
        assert_eq!(info.name(), "XT1572");
    }

    #[test]
    fn test_malformed_json_degrades() {
        let source = StubSource::new(Ok("<html>404</html>".to_string()));
        let resolver = resolver(source, StaticConnectivity::online());
        let query = DeviceQuery::new(Some("clark"), Some("XT1572"));
        let (resolution, states) = resolver.resolve_traced(&query).unwrap();
        assert_eq!(resolution.source, ResolutionSource::Fallback);
        assert!(states.contains(&Parse));
    }

    #[test]
    fn test_current_device_fallback() {
        let source = StubSource::new(Err(Error::network("offline")));
        let resolver = resolver(source, StaticConnectivity::online());
        let info = resolver
            .resolve(&DeviceQuery::new(Some("zerolte"), Some("SM-G925I")))
            .unwrap();
        assert_eq!(info.manufacturer.as_deref(), Some("samsung"));
        assert_eq!(info.name(), "Galaxy S6 Edge");
        assert_eq!(info.codename, "zerolte");
    }

    #[test]
    fn test_storage_failure_surfaces() {
        let source = StubSource::new(Ok(CLARK.to_string()));
        let cache = DeviceCache::new(Arc::new(ReadOnlyStore)).unwrap();
        let resolver = LegacyResolver::new(
            source,
            Arc::new(StaticConnectivity::online()),
            Arc::new(cache),
            CurrentDevice::default(),
        );
        let error = resolver
            .resolve(&DeviceQuery::new(Some("clark"), Some("XT1572")))
            .unwrap_err();
        assert!(matches!(error, Error::Storage { .. }));
    }

    #[test]
    fn test_lookup_reports_only_matches() {
        let source = StubSource::new(Ok(CLARK.to_string()));
        let resolver = resolver(source, StaticConnectivity::online());
        assert!(resolver
            .lookup(&DeviceQuery::new(Some("clark"), Some("nope")))
            .unwrap()
            .is_none());
        assert!(resolver
            .lookup(&DeviceQuery::new(Some("clark"), Some("XT1572")))
            .unwrap()
            .is_some());
        assert!(resolver
            .lookup(&DeviceQuery::codename_only("clark"))
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_remember_keeps_complete_queries_once() {
        let source = StubSource::new(Ok(CLARK.to_string()));
        let resolver = resolver(source.clone(), StaticConnectivity::online());
        let query = DeviceQuery::new(Some("zerolte"), Some("SM-G925I"));
        let found = DeviceInfo::new(
            Some("Samsung".to_string()),
            Some("Galaxy S6 Edge".to_string()),
            "zerolte",
            "SM-G925I",
        );

        assert!(resolver.remember(&query, &found).unwrap());
        assert!(!resolver.remember(&query, &found).unwrap());
        assert!(!resolver
            .remember(&DeviceQuery::codename_only("zerolte"), &found)
            .unwrap());
        assert_eq!(resolver.cache().len(), 1);

        let resolution = resolver.resolve_detailed(&query).unwrap();
        assert_eq!(resolution.source, ResolutionSource::Cache);
        assert_eq!(resolution.info, found);
        assert_eq!(source.calls(), 0);
    }

    #[test]
    fn test_parse_catalog_lenient_fields() {
        let records =
            parse_catalog(r#"[{"codename": "a", "model": "b", "manufacturer": null}]"#).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].manufacturer, None);
        assert_eq!(records[0].market_name, None);
        assert!(matches!(
            parse_catalog("{}").unwrap_err(),
            Error::Parse { .. }
        ));
    }
}
