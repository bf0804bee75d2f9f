//! Version Resolver
//!
//! Picks the single API version a construction request uses. Sources are
//! consulted in order and the first one present wins:
//!
//! ```text
//! explicit request ──► per-service pin ──► global pin (clamped) ──► latest
//! ```
//!
//! Explicit and per-service values are used verbatim. A global pin is
//! clamped down to the newest registered version not after it, and only if
//! it predates every registered version is it used verbatim, which then
//! fails later with `UnknownVersion`.

use std::fmt;
use std::sync::Arc;

use apivers_domain::error::{Error, Result};
use apivers_domain::ports::ConfigurationProvider;
use apivers_domain::value_objects::{ServiceId, VersionKey};
use tracing::debug;

/// Where a resolved version came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionSource {
    /// Passed explicitly by the caller
    Requested,
    /// Pinned in the service's configuration section
    ServicePin,
    /// Global pin, clamped to a registered version
    GlobalPin,
    /// Global pin predating every registered version, used as-is
    GlobalPinUnmatched,
    /// Newest registered version
    Latest,
}

impl fmt::Display for VersionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Requested => "requested",
            Self::ServicePin => "service pin",
            Self::GlobalPin => "global pin",
            Self::GlobalPinUnmatched => "global pin (unmatched)",
            Self::Latest => "latest",
        };
        f.write_str(label)
    }
}

/// Outcome of version resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedVersion {
    /// The chosen key
    pub version: VersionKey,
    /// Which layer chose it
    pub source: VersionSource,
}

/// Computes the effective version from configuration and registered keys
#[derive(Clone)]
pub struct VersionResolver {
    config: Arc<dyn ConfigurationProvider>,
}

impl VersionResolver {
    /// Create a resolver reading from `config`
    pub fn new(config: Arc<dyn ConfigurationProvider>) -> Self {
        Self { config }
    }

    /// Resolve the version for `service`
    ///
    /// `available` must be sorted ascending. Values coming from the caller or
    /// from configuration must be well-formed keys; they are not checked
    /// against `available`.
    pub fn resolve(
        &self,
        service: &ServiceId,
        available: &[VersionKey],
        requested: Option<&str>,
    ) -> Result<ResolvedVersion> {
        let resolved = self.select(service, available, requested)?;
        debug!(
            service = %service,
            version = %resolved.version,
            source = %resolved.source,
            "Resolved API version"
        );
        Ok(resolved)
    }

    fn select(
        &self,
        service: &ServiceId,
        available: &[VersionKey],
        requested: Option<&str>,
    ) -> Result<ResolvedVersion> {
        if let Some(requested) = requested {
            return Ok(ResolvedVersion {
                version: VersionKey::parse(requested)?,
                source: VersionSource::Requested,
            });
        }

        if let Some(pinned) = self.config.service_settings(service).api_version {
            return Ok(ResolvedVersion {
                version: VersionKey::parse(pinned)?,
                source: VersionSource::ServicePin,
            });
        }

        if let Some(global) = self.config.global_api_version() {
            let pin = VersionKey::parse(global)?;
            return Ok(match select_not_after(available, &pin) {
                Some(version) => ResolvedVersion {
                    version,
                    source: VersionSource::GlobalPin,
                },
                None => ResolvedVersion {
                    version: pin,
                    source: VersionSource::GlobalPinUnmatched,
                },
            });
        }

        available
            .last()
            .cloned()
            .map(|version| ResolvedVersion {
                version,
                source: VersionSource::Latest,
            })
            .ok_or_else(|| Error::no_applicable_version(service.as_str()))
    }
}

/// Newest key in `available` (sorted ascending) that is not after `pin`
pub fn select_not_after(available: &[VersionKey], pin: &VersionKey) -> Option<VersionKey> {
    let idx = available.partition_point(|k| k <= pin);
    idx.checked_sub(1).map(|i| available[i].clone())
}
