//! Reloadable configuration handle tests

use std::sync::Arc;

use apivers_application::{ServiceContext, ServiceDefinition, VersionSource};
use apivers_domain::ports::ConfigurationProvider;
use apivers_domain::{ApiDescription, ServiceId, VersionKey};
use apivers_infrastructure::config::{ConfigBuilder, ConfigHandle, ConfigLoader};
use figment::Jail;

fn dynamodb(handle: &Arc<ConfigHandle>) -> ServiceDefinition {
    let service = ServiceDefinition::new("DynamoDB", ServiceContext::new(handle.clone()));
    for version in ["2011-12-05", "2012-08-10"] {
        let key = VersionKey::parse(version).unwrap();
        service
            .register_version(version, ApiDescription::new(key))
            .unwrap();
    }
    service
}

#[test]
fn test_replace_is_observed_by_later_resolutions() {
    let handle = Arc::new(ConfigHandle::new(ConfigBuilder::new().build()));
    let service = dynamodb(&handle);
    assert_eq!(service.default_version().unwrap().as_str(), "2012-08-10");

    handle.replace(ConfigBuilder::new().with_api_version("2012-01-01").build());

    let resolved = service.resolve_version(None).unwrap();
    assert_eq!(resolved.version.as_str(), "2011-12-05");
    assert_eq!(resolved.source, VersionSource::GlobalPin);
}

#[test]
fn test_update_applies_to_current_snapshot() {
    let handle = ConfigHandle::new(ConfigBuilder::new().with_api_version("2012-01-01").build());

    handle.update(|current| {
        let mut next = current.clone();
        next.api_version = None;
        next
    });

    assert!(handle.global_api_version().is_none());
    assert!(handle.current().api_version.is_none());
}

#[test]
fn test_reload_reads_sources_again() {
    Jail::expect_with(|jail| {
        jail.create_file("apivers.toml", r#"api_version = "2012-01-01""#)?;
        let handle = ConfigHandle::load(ConfigLoader::new()).map_err(|e| e.to_string())?;
        assert_eq!(handle.global_api_version().as_deref(), Some("2012-01-01"));

        jail.create_file(
            "apivers.toml",
            r#"
            [services.dynamodb]
            api_version = "2011-12-05"
            "#,
        )?;
        let reloaded = handle.reload().map_err(|e| e.to_string())?;

        assert!(reloaded.api_version.is_none());
        let settings = handle.service_settings(&ServiceId::new("DynamoDB"));
        assert_eq!(settings.api_version.as_deref(), Some("2011-12-05"));
        Ok(())
    });
}

#[test]
fn test_failed_reload_keeps_previous_snapshot() {
    Jail::expect_with(|jail| {
        jail.create_file("apivers.toml", r#"api_version = "2012-01-01""#)?;
        let handle = ConfigHandle::load(ConfigLoader::new()).map_err(|e| e.to_string())?;

        jail.create_file("apivers.toml", r#"api_version = "not-a-date""#)?;
        assert!(handle.reload().is_err());

        assert_eq!(handle.global_api_version().as_deref(), Some("2012-01-01"));
        Ok(())
    });
}
