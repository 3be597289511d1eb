//! Integration tests for devicename
//!
//! These tests drive every resolver layer through the public engine and the
//! data pipeline through to a database the engine then resolves from.

use devicename_config::Config;
use devicename_engine::{DeviceNames, ForegroundLoop, MainThread};
use devicename_network::StaticConnectivity;
use devicename_pipeline::csv::parse;
use devicename_pipeline::{manufacturer_file_name, CsvSource, Pipeline};
use devicename_tests::test_utils::{
    database_only_config, networked_names, sample_corpus, test_config, tie_break_corpus,
    utf16le_bytes, StubCatalogSource, SAMPLE_CSV,
};
use devicename_store::{KeyValueStore, PreferenceStore};
use devicename_types::{capitalize, CurrentDevice, DeviceInfo, DeviceQuery, ResolutionSource};
use proptest::prelude::*;
use rstest::rstest;
use std::fs;
use std::sync::{Arc, Mutex};
use std::time::{Duration, SystemTime};
use tempfile::TempDir;

fn names(config: Config) -> DeviceNames {
    DeviceNames::with_config(config, CurrentDevice::default()).unwrap()
}

#[test]
fn test_static_scenario() {
    let temp_dir = TempDir::new().unwrap();
    let names = names(test_config(&temp_dir, &sample_corpus()));

    assert_eq!(
        names.resolve(Some("clark"), None, "Unknown").unwrap(),
        "Moto X Style"
    );
    assert_eq!(
        names.resolve(Some("clark"), Some("anything"), "Unknown").unwrap(),
        "Moto X Style"
    );
    // Nothing was extracted for a static hit
    assert!(!temp_dir.path().join("install").exists());
}

#[test]
fn test_unknown_returns_fallback_verbatim() {
    let temp_dir = TempDir::new().unwrap();
    let names = names(test_config(&temp_dir, &sample_corpus()));

    assert_eq!(
        names
            .resolve(Some("unknown-xyz"), Some("unknown-xyz"), "Unknown device")
            .unwrap(),
        "Unknown device"
    );
    assert_eq!(names.resolve(None, None, "  spaced  ").unwrap(), "  spaced  ");
}

#[test]
fn test_database_scenario() {
    let temp_dir = TempDir::new().unwrap();
    let names = names(database_only_config(&temp_dir, &sample_corpus()));

    let resolution = names
        .resolution(&DeviceQuery::new(Some("zerolte"), Some("SM-G925I")))
        .unwrap();
    assert_eq!(resolution.source, ResolutionSource::Database);
    assert_eq!(resolution.info.name(), "Galaxy S6 Edge");
    assert_eq!(resolution.info.manufacturer.as_deref(), Some("Samsung"));
    assert!(temp_dir
        .path()
        .join("install")
        .join("android-devices.db")
        .exists());
}

#[test]
fn test_every_record_resolves_by_each_identifier() {
    let temp_dir = TempDir::new().unwrap();
    let corpus = sample_corpus();
    let names = names(database_only_config(&temp_dir, &corpus));

    for device in &corpus {
        assert_eq!(
            names.resolve(Some(device.codename.as_str()), None, "?").unwrap(),
            device.market_name,
            "codename {}",
            device.codename
        );
        assert_eq!(
            names.resolve(None, Some(device.model.as_str()), "?").unwrap(),
            device.market_name,
            "model {}",
            device.model
        );
        assert_eq!(
            names
                .resolve(Some(device.codename.as_str()), Some(device.model.as_str()), "?")
                .unwrap(),
            device.market_name
        );
    }
}

#[test]
fn test_missing_manufacturer_survives() {
    let temp_dir = TempDir::new().unwrap();
    let names = names(database_only_config(&temp_dir, &sample_corpus()));

    let info = names
        .device_info(&DeviceQuery::new(Some("nameless"), Some("NT-7")))
        .unwrap();
    assert_eq!(info.manufacturer, None);
    assert_eq!(info.name(), "Nameless Tab");
}

#[rstest]
#[case("m1", "First")]
#[case("m2", "Second")]
fn test_tie_break_prefers_exact_pair(#[case] model: &str, #[case] expected: &str) {
    let temp_dir = TempDir::new().unwrap();
    let names = names(database_only_config(&temp_dir, &tie_break_corpus()));

    assert_eq!(names.resolve(Some("x"), Some(model), "?").unwrap(), expected);
}

#[test]
fn test_tie_break_codename_only_takes_first_row() {
    let temp_dir = TempDir::new().unwrap();
    let names = names(database_only_config(&temp_dir, &tie_break_corpus()));

    assert_eq!(names.resolve(Some("x"), None, "?").unwrap(), "First");
    assert_eq!(names.resolve(Some("x"), Some("m3"), "?").unwrap(), "First");
}

#[test]
fn test_manufacturer_file_names() {
    assert_eq!(manufacturer_file_name("HTC Corp."), "HTC_CORP.json");

    let parsed = parse(SAMPLE_CSV);
    let htc = parsed
        .devices
        .iter()
        .find(|device| device.codename == "htc_m8")
        .unwrap();
    assert_eq!(htc.manufacturer.as_deref(), Some("HTC Inc."));
    assert_eq!(manufacturer_file_name("HTC Inc."), "HTC_INC.json");
    assert_eq!(parsed.skipped, 1);
}

#[rstest]
#[case("sm-g920f", "Sm-g920f")]
#[case("a b", "A B")]
#[case("", "")]
#[case("galaxy\u{3000}tab", "Galaxy\u{3000}Tab")]
fn test_capitalize(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(capitalize(input), expected);
}

#[test]
fn test_pipeline_output_feeds_database_layer() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = database_only_config(&temp_dir, &[]);

    let report = Pipeline::new(config.pipeline.clone())
        .with_table_output(temp_dir.path().join("table.rs"))
        .run(&CsvSource::Bytes(utf16le_bytes(SAMPLE_CSV)))
        .unwrap();
    assert_eq!(report.manifest.records, 5);
    assert_eq!(report.manifest.skipped_rows, 1);

    let json = temp_dir.path().join("json");
    assert!(json.join("manufacturers").join("HTC_INC.json").exists());
    assert!(json.join("manufacturers").join("HTC_CORP.json").exists());
    assert!(json.join("devices").join("htc_m8.json").exists());
    assert!(temp_dir.path().join("table.rs").exists());

    config.database.asset_path = report.asset_path.unwrap();
    let names = names(config);
    let info = names
        .device_info(&DeviceQuery::new(Some("htc_m8"), Some("HTC6525LVW")))
        .unwrap();
    assert_eq!(info.name(), "HTC One (M8)");
    assert_eq!(info.manufacturer.as_deref(), Some("HTC Inc."));
}

#[test]
fn test_network_result_is_cached() {
    let temp_dir = TempDir::new().unwrap();
    let source = Arc::new(StubCatalogSource::new().with_records(
        "ZZJet",
        &[
            DeviceInfo::new(
                Some("Acme".to_string()),
                Some("Acme Jet".to_string()),
                "ZZJet",
                "AJ-1",
            ),
            DeviceInfo::new(
                Some("Acme".to_string()),
                Some("Acme Jet Pro".to_string()),
                "ZZJet",
                "AJ-2",
            ),
        ],
    ));
    let names = networked_names(
        test_config(&temp_dir, &sample_corpus()),
        CurrentDevice::default(),
        Arc::clone(&source),
    );

    let query = DeviceQuery::new(Some("ZZJet"), Some("AJ-2"));
    let first = names.resolution(&query).unwrap();
    let second = names.resolution(&query).unwrap();

    assert_eq!(first.source, ResolutionSource::Network);
    assert_eq!(second.source, ResolutionSource::Cache);
    assert_eq!(first.info, second.info);
    assert_eq!(first.info.name(), "Acme Jet Pro");
    assert_eq!(source.calls(), 1);
    assert_eq!(
        names.resolve(Some("ZZJet"), Some("AJ-2"), "?").unwrap(),
        "Acme Jet Pro"
    );
}

#[test]
fn test_network_without_exact_match_falls_back() {
    let temp_dir = TempDir::new().unwrap();
    let source = Arc::new(
        StubCatalogSource::new()
            .with_records(
                "zzjet",
                &[DeviceInfo::new(None, Some("Acme Jet".to_string()), "zzjet", "AJ-1")],
            )
            .with_body("zzbroken", "{not json"),
    );
    let names = networked_names(
        test_config(&temp_dir, &sample_corpus()),
        CurrentDevice::default(),
        Arc::clone(&source),
    );

    for (codename, model) in [("zzjet", "AJ-9"), ("zzbroken", "B-1"), ("zzmissing", "M-1")] {
        assert_eq!(
            names.resolve(Some(codename), Some(model), "Unknown device").unwrap(),
            "Unknown device"
        );
    }
    assert_eq!(source.calls(), 3);
    assert!(names.cache().unwrap().is_empty());
}

#[test]
fn test_engines_share_one_database_install() {
    let temp_dir = TempDir::new().unwrap();
    let config = database_only_config(&temp_dir, &sample_corpus());
    let first = names(config.clone());
    let second = names(config);

    let installed = first.install_database().unwrap().unwrap();
    let marked = SystemTime::UNIX_EPOCH + Duration::from_secs(86_400);
    fs::File::options()
        .write(true)
        .open(&installed)
        .unwrap()
        .set_modified(marked)
        .unwrap();

    assert_eq!(second.install_database().unwrap(), Some(installed.clone()));
    assert_eq!(fs::metadata(&installed).unwrap().modified().unwrap(), marked);
    assert_eq!(
        second.resolve(Some("rocket"), Some("AR-1"), "?").unwrap(),
        "Acme Rocket"
    );
}

#[test]
fn test_engines_share_one_cache_file() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = test_config(&temp_dir, &sample_corpus());
    config.network.enabled = true;
    let source = Arc::new(
        StubCatalogSource::new()
            .with_records(
                "zzjet",
                &[DeviceInfo::new(None, Some("Acme Jet".to_string()), "zzjet", "AJ-1")],
            )
            .with_records(
                "zzkite",
                &[DeviceInfo::new(None, Some("Acme Kite".to_string()), "zzkite", "AK-1")],
            ),
    );
    let engine = || {
        DeviceNames::builder()
            .with_config(config.clone())
            .with_catalog_source(source.clone())
            .with_connectivity(Arc::new(StaticConnectivity::online()))
            .build()
            .unwrap()
    };
    let first = engine();
    let second = engine();

    assert_eq!(first.resolve(Some("zzjet"), Some("AJ-1"), "?").unwrap(), "Acme Jet");
    assert_eq!(second.resolve(Some("zzkite"), Some("AK-1"), "?").unwrap(), "Acme Kite");

    let keys: Vec<String> = PreferenceStore::open(config.cache.path())
        .unwrap()
        .scan("")
        .unwrap()
        .into_iter()
        .map(|(key, _)| key)
        .collect();
    assert_eq!(keys, vec!["zzjet:AJ-1", "zzkite:AK-1"]);

    let cached = second
        .resolution(&DeviceQuery::new(Some("zzjet"), Some("AJ-1")))
        .unwrap();
    assert_eq!(cached.source, ResolutionSource::Cache);
    assert_eq!(source.calls(), 2);
}

#[test]
fn test_database_answer_is_cached_for_network_layer() {
    let temp_dir = TempDir::new().unwrap();
    let source = Arc::new(StubCatalogSource::new());
    let names = networked_names(
        test_config(&temp_dir, &sample_corpus()),
        CurrentDevice::default(),
        Arc::clone(&source),
    );

    let resolution = names
        .resolution(&DeviceQuery::new(Some("rocket"), Some("AR-1")))
        .unwrap();
    assert_eq!(resolution.source, ResolutionSource::Database);

    let entries = names.cache().unwrap().entries().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].0, "rocket:AR-1");
    assert_eq!(entries[0].1.name(), "Acme Rocket");
    assert_eq!(source.calls(), 0);
}

#[test]
fn test_current_device_fallback_through_every_layer() {
    let temp_dir = TempDir::new().unwrap();
    let names = networked_names(
        test_config(&temp_dir, &sample_corpus()),
        CurrentDevice::new("samsung", "zz-proto", "SM-X999"),
        Arc::new(StubCatalogSource::new()),
    );

    let info = names.request().run().0;
    assert_eq!(info.name(), "Samsung SM-X999");
    assert_eq!(info.manufacturer.as_deref(), Some("samsung"));
}

#[test]
fn test_request_marshals_to_foreground_loop() {
    let temp_dir = TempDir::new().unwrap();
    let main = Arc::new(ForegroundLoop::new());
    let names = DeviceNames::builder()
        .with_config(database_only_config(&temp_dir, &sample_corpus()))
        .with_current_device(CurrentDevice::new("Acme", "rocket", "AR-1"))
        .with_main_thread(Arc::clone(&main) as Arc<dyn MainThread>)
        .build()
        .unwrap();

    let seen = Arc::new(Mutex::new(None));
    let slot = Arc::clone(&seen);
    names
        .request()
        .request(move |info, error| {
            *slot.lock().unwrap() = Some((info.name(), error.is_none()));
        })
        .unwrap();

    assert!(main.run_once(Duration::from_secs(5)));
    assert_eq!(
        seen.lock().unwrap().take(),
        Some(("Acme Rocket".to_string(), true))
    );
}

#[tokio::test]
async fn test_execute_on_blocking_pool() {
    let temp_dir = TempDir::new().unwrap();
    let names = names(database_only_config(&temp_dir, &sample_corpus()));

    let info = names
        .request()
        .codename("rocketmini")
        .model("ARM-1")
        .execute()
        .await
        .unwrap();
    assert_eq!(info.name(), "Acme Rocket Mini");
}

proptest! {
    #[test]
    fn test_static_only_fallback_verbatim(
        codename in "zz-[a-z]{3,8}-[0-9]{2}",
        fallback in ".*",
    ) {
        let mut config = Config::default();
        config.database.enabled = false;
        let names = names(config);
        let first = names.resolve(Some(codename.as_str()), None, &fallback).unwrap();
        let second = names.resolve(Some(codename.as_str()), None, &fallback).unwrap();
        prop_assert_eq!(&first, &fallback);
        prop_assert_eq!(first, second);
    }
}
