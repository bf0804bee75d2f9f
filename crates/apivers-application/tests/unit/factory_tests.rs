//! Client type memoization tests

use std::sync::{Arc, Barrier, Mutex};

use apivers_application::{ServiceContext, ServiceDefinition};
use apivers_domain::ports::ClientModification;
use apivers_domain::{ApiDescriptionRef, ClientType, Error, Result};
use tempfile::TempDir;

use crate::support::{
    CountingLoader, Recording, TestConfig, description, key, legacy_document, write_document,
};

fn counting_service(loader: &Arc<CountingLoader>) -> ServiceDefinition {
    let context = ServiceContext::new(TestConfig::new()).with_loader(loader.clone());
    ServiceDefinition::new("DynamoDB", context)
}

#[test]
fn test_client_type_is_memoized() {
    let dir = TempDir::new().unwrap();
    let path = write_document(dir.path(), "d.json", &legacy_document("2012-08-10"));
    let loader = CountingLoader::new();
    let service = counting_service(&loader);
    service.register_version("2012-08-10", ApiDescriptionRef::path(path)).unwrap();

    let first = service.client_type(&key("2012-08-10")).unwrap();
    let second = service.client_type(&key("2012-08-10")).unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(loader.loads(), 1);
    assert_eq!(first.type_name(), "DynamoDB::V20120810");
}

#[test]
fn test_concurrent_construction_loads_once() {
    let dir = TempDir::new().unwrap();
    let path = write_document(dir.path(), "d.json", &legacy_document("2012-08-10"));
    let loader = CountingLoader::new();
    let service = counting_service(&loader);
    service.register_version("2012-08-10", ApiDescriptionRef::path(path)).unwrap();

    let types: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| service.client_type(&key("2012-08-10")).unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(loader.loads(), 1);
    assert!(types.windows(2).all(|w| Arc::ptr_eq(&w[0], &w[1])));
}

#[test]
fn test_unregistered_version_is_unknown() {
    let service = ServiceDefinition::new("DynamoDB", ServiceContext::default());
    service
        .register_version("2012-08-10", description("2012-08-10", &[]))
        .unwrap();

    let err = service.client_type(&key("2011-12-05")).unwrap_err();
    assert!(matches!(err, Error::UnknownVersion { .. }));
}

#[test]
fn test_global_pin_before_all_versions_fails_at_construction() {
    let config = TestConfig::new();
    config.set_global(Some("2000-01-01"));
    let service = ServiceDefinition::new("DynamoDB", ServiceContext::new(config));
    service
        .register_version("2012-08-10", description("2012-08-10", &[]))
        .unwrap();

    assert_eq!(service.default_version().unwrap(), key("2000-01-01"));
    let err = service.new_client(Default::default()).unwrap_err();
    match err {
        Error::UnknownVersion { version, .. } => assert_eq!(version, "2000-01-01"),
        other => panic!("Expected UnknownVersion, got {:?}", other),
    }
}

#[test]
fn test_failed_load_does_not_poison_cache() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("late.json");
    let loader = CountingLoader::new();
    let service = counting_service(&loader);
    service
        .register_version("2012-08-10", ApiDescriptionRef::path(&path))
        .unwrap();

    let err = service.client_type(&key("2012-08-10")).unwrap_err();
    assert!(matches!(err, Error::DescriptionLoad { .. }));
    assert!(service.materialized_types().is_empty());
    assert_eq!(service.versions(), vec![key("2012-08-10")]);

    write_document(dir.path(), "late.json", &legacy_document("2012-08-10"));
    let client_type = service.client_type(&key("2012-08-10")).unwrap();
    assert_eq!(client_type.version(), &key("2012-08-10"));
    assert_eq!(loader.loads(), 2);
}

#[test]
fn test_modification_applies_to_later_versions_in_order() {
    let journal = Arc::new(Mutex::new(Vec::new()));
    let service = ServiceDefinition::new("DynamoDB", ServiceContext::default());
    service
        .register_version("2011-12-05", description("2011-12-05", &[]))
        .unwrap();

    service.add_modification(Recording::new("retry", &journal)).unwrap();
    service.add_modification(Recording::new("logging", &journal)).unwrap();

    service
        .register_version("2012-08-10", description("2012-08-10", &[]))
        .unwrap();
    let late = service.client_type(&key("2012-08-10")).unwrap();

    assert_eq!(late.modification_names(), vec!["retry", "logging"]);
    assert_eq!(
        *journal.lock().unwrap(),
        vec![
            "+retry@2011-12-05",
            "+logging@2011-12-05",
            "+retry@2012-08-10",
            "+logging@2012-08-10",
        ]
    );
}

/// Holds the first attach until the test releases it
struct Gate {
    entered: Barrier,
    released: Barrier,
    journal: Arc<Mutex<Vec<String>>>,
}

impl ClientModification for Gate {
    fn name(&self) -> &str {
        "gate"
    }

    fn on_attach(&self, client_type: &ClientType) -> Result<()> {
        self.journal
            .lock()
            .unwrap()
            .push(format!("+gate@{}", client_type.version()));
        self.entered.wait();
        self.released.wait();
        Ok(())
    }

    fn on_detach(&self, client_type: &ClientType) -> Result<()> {
        self.journal
            .lock()
            .unwrap()
            .push(format!("-gate@{}", client_type.version()));
        Ok(())
    }
}

#[test]
fn test_removal_during_build_is_not_lost() {
    let journal = Arc::new(Mutex::new(Vec::new()));
    let gate = Arc::new(Gate {
        entered: Barrier::new(2),
        released: Barrier::new(2),
        journal: Arc::clone(&journal),
    });
    let service = ServiceDefinition::new("DynamoDB", ServiceContext::default());
    service.add_modification(Arc::clone(&gate) as _).unwrap();
    service
        .register_version("2012-08-10", description("2012-08-10", &[]))
        .unwrap();

    let client_type = std::thread::scope(|scope| {
        let build = scope.spawn(|| service.client_type(&key("2012-08-10")).unwrap());
        gate.entered.wait();
        // The type is mid-build, so it is not materialized yet.
        assert!(service.remove_modification("gate").unwrap());
        gate.released.wait();
        build.join().unwrap()
    });

    assert!(!client_type.has_modification("gate"));
    assert!(service.modification_names().is_empty());
    assert_eq!(
        *journal.lock().unwrap(),
        vec!["+gate@2012-08-10", "-gate@2012-08-10"]
    );
}
