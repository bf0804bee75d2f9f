//! Unit tests for domain error types

use apivers_domain::Error;

#[test]
fn test_unknown_version_error() {
    let error = Error::unknown_version("DynamoDB", "2010-01-01");
    match &error {
        Error::UnknownVersion { service, version } => {
            assert_eq!(service, "DynamoDB");
            assert_eq!(version, "2010-01-01");
        }
        _ => panic!("Expected UnknownVersion error"),
    }
    assert!(error.to_string().contains("2010-01-01"));
}

#[test]
fn test_description_load_error_keeps_source() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let error = Error::description_load_with_source("apis/missing.json", "read failed", io);
    match &error {
        Error::DescriptionLoad {
            reference, source, ..
        } => {
            assert_eq!(reference, "apis/missing.json");
            assert!(source.is_some());
        }
        _ => panic!("Expected DescriptionLoad error"),
    }
    assert!(std::error::Error::source(&error).is_some());
}

#[test]
fn test_duplicate_version_error() {
    let error = Error::duplicate_version("S3", "2006-03-01");
    assert!(matches!(error, Error::DuplicateVersion { .. }));
}

#[test]
fn test_no_versions_registered_display() {
    let error = Error::no_versions_registered("EC2");
    assert_eq!(
        error.to_string(),
        "No API versions registered for service 'EC2'"
    );
}

#[test]
fn test_json_error_conversion() {
    let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error: Error = parse.into();
    assert!(matches!(error, Error::Json { .. }));
}
