//! Description file discovery
//!
//! Scans a directory for description documents named
//! `<Service>-<YYYY-MM-DD>.json` (legacy) or `<Service>-<YYYY-MM-DD>.api.json`
//! (normalized) and registers each one as a deferred path reference, so
//! nothing is parsed until a client type for that version is requested.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use apivers_application::{DocumentFormat, ServiceRegistry};
use apivers_domain::error::{Error, Result};
use apivers_domain::value_objects::{ApiDescriptionRef, ServiceId, VersionKey};
use regex::Regex;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::constants::{DESCRIPTION_EXTENSION, DESCRIPTION_FILE_PATTERN};
use crate::error_ext::ErrorContext;

static DESCRIPTION_FILE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(DESCRIPTION_FILE_PATTERN).ok());

/// A description document found on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredDescription {
    /// Service the file belongs to (its name prefix)
    pub service: ServiceId,
    /// Version encoded in the file name
    pub version: VersionKey,
    /// Absolute path of the document
    pub path: PathBuf,
    /// Format implied by the file name
    pub format: DocumentFormat,
}

/// Parse a description file name
///
/// Returns `None` for names that do not follow the naming scheme or whose
/// date is not a real calendar date.
pub fn parse_file_name(name: &str) -> Option<(ServiceId, VersionKey, DocumentFormat)> {
    let captures = DESCRIPTION_FILE.as_ref()?.captures(name)?;
    let version = VersionKey::parse(&captures["version"]).ok()?;
    let format = if captures.name("normalized").is_some() {
        DocumentFormat::Normalized
    } else {
        DocumentFormat::Legacy
    };
    Some((ServiceId::new(&captures["service"]), version, format))
}

/// List description documents directly inside `dir`
///
/// Results are ordered by service, then version. Files that do not follow
/// the naming scheme are skipped. Paths are absolute, so a loader with its
/// own base directory reads them as they are.
pub fn discover_descriptions(dir: &Path) -> Result<Vec<DiscoveredDescription>> {
    if DESCRIPTION_FILE.is_none() {
        return Err(Error::internal(format!(
            "Invalid description file pattern: {DESCRIPTION_FILE_PATTERN}"
        )));
    }
    if !dir.is_dir() {
        return Err(Error::io(format!(
            "Description directory not found: {}",
            dir.display()
        )));
    }
    let root = dir
        .canonicalize()
        .io_context(format!("Failed to resolve {}", dir.display()))?;

    let mut found = Vec::new();
    for entry in WalkDir::new(&root).min_depth(1).max_depth(1) {
        let entry = entry.io_context(format!("Failed to scan {}", dir.display()))?;
        if !entry.file_type().is_file()
            || entry.path().extension().is_none_or(|ext| ext != DESCRIPTION_EXTENSION)
        {
            continue;
        }
        let Some(name) = entry.file_name().to_str() else {
            continue;
        };
        match parse_file_name(name) {
            Some((service, version, format)) => found.push(DiscoveredDescription {
                service,
                version,
                path: entry.into_path(),
                format,
            }),
            None => debug!(file = name, "Skipping file outside the naming scheme"),
        }
    }

    found.sort_by(|a, b| (&a.service, &a.version).cmp(&(&b.service, &b.version)));
    Ok(found)
}

/// Register every description found in `dir` with `registry`
///
/// Returns the number of versions registered. A version registered twice
/// (for example both a `.json` and an `.api.json` file) fails with
/// `DuplicateVersion`.
pub fn register_discovered(registry: &ServiceRegistry, dir: &Path) -> Result<usize> {
    let discovered = discover_descriptions(dir)?;
    for description in &discovered {
        registry.define(description.service.clone()).register_version(
            description.version.as_str(),
            ApiDescriptionRef::path(&description.path),
        )?;
    }
    info!(
        dir = %dir.display(),
        versions = discovered.len(),
        "Registered discovered API descriptions"
    );
    Ok(discovered.len())
}
