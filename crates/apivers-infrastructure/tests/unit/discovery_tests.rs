//! Description discovery tests

use std::fs;
use std::path::Path;
use std::sync::Arc;

use apivers_application::{ApiLoader, DocumentFormat, ServiceContext, ServiceRegistry};
use apivers_domain::{Error, ServiceId, VersionKey};
use apivers_infrastructure::constants::DESCRIPTION_FILE_PATTERN;
use apivers_infrastructure::discovery::{
    discover_descriptions, parse_file_name, register_discovered,
};
use figment::Jail;
use regex::Regex;
use serde_json::json;
use tempfile::TempDir;

fn touch(dir: &TempDir, name: &str) {
    fs::write(dir.path().join(name), b"{}").unwrap();
}

#[test]
fn test_file_name_pattern_compiles() {
    let pattern = Regex::new(DESCRIPTION_FILE_PATTERN).unwrap();
    assert!(pattern.is_match("DynamoDB-2012-08-10.api.json"));
}

#[test]
fn test_parse_file_name() {
    let (service, version, format) = parse_file_name("DynamoDB-2012-08-10.json").unwrap();
    assert_eq!(service.as_str(), "DynamoDB");
    assert_eq!(version.as_str(), "2012-08-10");
    assert_eq!(format, DocumentFormat::Legacy);

    let (_, _, format) = parse_file_name("SQS-2012-11-05.api.json").unwrap();
    assert_eq!(format, DocumentFormat::Normalized);
}

#[test]
fn test_parse_file_name_rejects_other_names() {
    assert!(parse_file_name("DynamoDB.json").is_none());
    assert!(parse_file_name("DynamoDB-2012-08-10.yaml").is_none());
    assert!(parse_file_name("DynamoDB-2012-13-40.json").is_none());
    assert!(parse_file_name("-2012-08-10.json").is_none());
}

#[test]
fn test_discover_descriptions_sorted_and_filtered() {
    let dir = TempDir::new().unwrap();
    touch(&dir, "SQS-2012-11-05.api.json");
    touch(&dir, "DynamoDB-2012-08-10.json");
    touch(&dir, "DynamoDB-2011-12-05.json");
    touch(&dir, "README.md");
    touch(&dir, "notes.json");
    fs::create_dir(dir.path().join("EC2-2014-01-01.json")).unwrap();

    let found = discover_descriptions(dir.path()).unwrap();
    let keys: Vec<(&str, &str)> = found
        .iter()
        .map(|d| (d.service.as_str(), d.version.as_str()))
        .collect();
    assert_eq!(
        keys,
        vec![
            ("DynamoDB", "2011-12-05"),
            ("DynamoDB", "2012-08-10"),
            ("SQS", "2012-11-05"),
        ]
    );
    let root = dir.path().canonicalize().unwrap();
    assert!(found.iter().all(|d| d.path.is_absolute() && d.path.starts_with(&root)));
}

#[test]
fn test_discover_missing_directory() {
    let err = discover_descriptions(std::path::Path::new("/nonexistent/apivers")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}

#[test]
fn test_register_discovered_defines_services() {
    let dir = TempDir::new().unwrap();
    touch(&dir, "DynamoDB-2011-12-05.json");
    touch(&dir, "DynamoDB-2012-08-10.json");
    touch(&dir, "SQS-2012-11-05.api.json");

    let registry = ServiceRegistry::default();
    assert_eq!(register_discovered(&registry, dir.path()).unwrap(), 3);

    let dynamodb = registry.require(&ServiceId::new("DynamoDB")).unwrap();
    assert_eq!(
        dynamodb.latest_version().unwrap(),
        VersionKey::parse("2012-08-10").unwrap()
    );
    assert_eq!(registry.services().len(), 2);
}

#[test]
fn test_register_discovered_rejects_duplicate_versions() {
    let dir = TempDir::new().unwrap();
    touch(&dir, "SQS-2012-11-05.json");
    touch(&dir, "SQS-2012-11-05.api.json");

    let err = register_discovered(&ServiceRegistry::default(), dir.path()).unwrap_err();
    assert!(matches!(err, Error::DuplicateVersion { .. }));
}

#[test]
fn test_relative_dir_loads_through_base_dir_loader() {
    Jail::expect_with(|jail| {
        fs::create_dir(jail.directory().join("apis")).map_err(|e| e.to_string())?;
        let document = json!({
            "metadata": { "apiVersion": "2012-11-05", "endpointPrefix": "sqs" },
            "operations": { "SendMessage": { "name": "SendMessage" } },
            "shapes": {}
        });
        jail.create_file("apis/SQS-2012-11-05.api.json", &document.to_string())?;

        let loader = Arc::new(ApiLoader::new().with_base_dir("apis"));
        let registry = ServiceRegistry::new(ServiceContext::default().with_loader(loader));
        register_discovered(&registry, Path::new("apis")).map_err(|e| e.to_string())?;

        let sqs = registry
            .require(&ServiceId::new("SQS"))
            .map_err(|e| e.to_string())?;
        let description = sqs
            .api_description(&VersionKey::parse("2012-11-05").map_err(|e| e.to_string())?)
            .map_err(|e| e.to_string())?;
        assert_eq!(description.operation_names(), vec!["SendMessage"]);
        Ok(())
    });
}
