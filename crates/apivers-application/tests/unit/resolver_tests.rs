//! Version resolution tests

use std::sync::Arc;

use apivers_application::{ServiceContext, ServiceDefinition, VersionResolver, VersionSource};
use apivers_domain::{Error, ServiceId, ServiceSettings};

use crate::support::{TestConfig, description, key};

fn keys(values: &[&str]) -> Vec<apivers_domain::VersionKey> {
    values.iter().map(|v| key(v)).collect()
}

fn resolver(config: &Arc<TestConfig>) -> VersionResolver {
    VersionResolver::new(config.clone())
}

#[test]
fn test_latest_when_nothing_configured() {
    let config = TestConfig::new();
    let available = keys(&["2011-12-05", "2012-08-10"]);
    let resolved = resolver(&config)
        .resolve(&ServiceId::new("DynamoDB"), &available, None)
        .unwrap();
    assert_eq!(resolved.version, key("2012-08-10"));
    assert_eq!(resolved.source, VersionSource::Latest);
}

#[test]
fn test_empty_registry_has_no_applicable_version() {
    let config = TestConfig::new();
    let err = resolver(&config)
        .resolve(&ServiceId::new("DynamoDB"), &[], None)
        .unwrap_err();
    assert!(matches!(err, Error::NoApplicableVersion { .. }));
}

#[test]
fn test_global_pin_clamps_to_nearest_not_exceeding() {
    let config = TestConfig::new();
    let available = keys(&["2011-01-01", "2012-01-01", "2013-01-01"]);
    let service = ServiceId::new("EC2");
    let resolve = |pin: &str| {
        config.set_global(Some(pin));
        resolver(&config).resolve(&service, &available, None).unwrap()
    };

    let between = resolve("2011-06-15");
    assert_eq!(between.version, key("2011-01-01"));
    assert_eq!(between.source, VersionSource::GlobalPin);

    assert_eq!(resolve("2012-01-01").version, key("2012-01-01"));
    assert_eq!(resolve("2013-01-01").version, key("2013-01-01"));
    assert_eq!(resolve("2099-12-31").version, key("2013-01-01"));

    let before = resolve("2010-01-01");
    assert_eq!(before.version, key("2010-01-01"));
    assert_eq!(before.source, VersionSource::GlobalPinUnmatched);
}

#[test]
fn test_service_pin_overrides_global_pin() {
    let config = TestConfig::new();
    let available = keys(&["2011-01-01", "2012-01-01", "2013-01-01"]);
    let service = ServiceId::new("EC2");

    for (global, pinned) in [
        ("2013-01-01", "2011-01-01"),
        ("2010-01-01", "2012-01-01"),
        ("2012-06-01", "2013-01-01"),
    ] {
        config.set_global(Some(global));
        config.set_service("EC2", ServiceSettings::default().with_api_version(pinned));
        let resolved = resolver(&config).resolve(&service, &available, None).unwrap();
        assert_eq!(resolved.version, key(pinned));
        assert_eq!(resolved.source, VersionSource::ServicePin);
    }
}

#[test]
fn test_service_pin_is_used_verbatim() {
    let config = TestConfig::new();
    config.set_service("EC2", ServiceSettings::default().with_api_version("2000-01-01"));
    let resolved = resolver(&config)
        .resolve(&ServiceId::new("EC2"), &keys(&["2012-01-01"]), None)
        .unwrap();
    assert_eq!(resolved.version, key("2000-01-01"));
}

#[test]
fn test_explicit_request_overrides_everything() {
    let config = TestConfig::new();
    config.set_global(Some("2011-01-01"));
    config.set_service("EC2", ServiceSettings::default().with_api_version("2012-01-01"));
    let resolved = resolver(&config)
        .resolve(
            &ServiceId::new("EC2"),
            &keys(&["2011-01-01", "2012-01-01", "2013-01-01"]),
            Some("2013-01-01"),
        )
        .unwrap();
    assert_eq!(resolved.version, key("2013-01-01"));
    assert_eq!(resolved.source, VersionSource::Requested);
}

#[test]
fn test_malformed_pin_is_rejected() {
    let config = TestConfig::new();
    config.set_global(Some("last-tuesday"));
    let err = resolver(&config)
        .resolve(&ServiceId::new("EC2"), &keys(&["2012-01-01"]), None)
        .unwrap_err();
    assert!(matches!(err, Error::InvalidVersionKey { .. }));
}

#[test]
fn test_default_version_end_to_end() {
    let config = TestConfig::new();
    let dynamo = ServiceDefinition::new(
        "DynamoDB",
        ServiceContext::new(config.clone()),
    );
    dynamo
        .register_version("2011-12-05", description("2011-12-05", &["ListTables"]))
        .unwrap();
    dynamo
        .register_version("2012-08-10", description("2012-08-10", &["ListTables"]))
        .unwrap();

    assert_eq!(dynamo.default_version().unwrap(), key("2012-08-10"));

    config.set_service(
        "DynamoDB",
        ServiceSettings::default().with_api_version("2011-12-05"),
    );
    assert_eq!(dynamo.default_version().unwrap(), key("2011-12-05"));

    config.set_service("DynamoDB", ServiceSettings::default());
    config.set_global(Some("2012-01-01"));
    assert_eq!(dynamo.default_version().unwrap(), key("2011-12-05"));
}

#[test]
fn test_latest_version_is_maximum() {
    let dynamo = ServiceDefinition::new("DynamoDB", ServiceContext::default());
    assert!(matches!(
        dynamo.latest_version(),
        Err(Error::NoVersionsRegistered { .. })
    ));

    for v in ["2012-08-10", "2011-12-05", "2013-02-01", "2012-01-01"] {
        dynamo.register_version(v, description(v, &[])).unwrap();
    }
    assert_eq!(dynamo.latest_version().unwrap(), key("2013-02-01"));
    assert_eq!(
        dynamo.versions(),
        keys(&["2011-12-05", "2012-01-01", "2012-08-10", "2013-02-01"])
    );
}
