//! Client types
//!
//! A client type is bound to exactly one API description and is built once
//! per (service, version). Modifications attached to it are kept as an
//! ordered, lock-free snapshot so instances can read them while plugins are
//! being added elsewhere.

use std::fmt;
use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::constants::CLIENT_TYPE_NAME_SEPARATOR;
use crate::entities::ClientInstance;
use crate::error::Result;
use crate::ports::SharedModification;
use crate::value_objects::{ApiDescription, ClientConfig, ServiceId, VersionKey};

/// Constructible client type bound to one API description
pub struct ClientType {
    service: ServiceId,
    version: VersionKey,
    type_name: String,
    description: Arc<ApiDescription>,
    modifications: ArcSwap<Vec<SharedModification>>,
}

impl ClientType {
    /// Create a client type for `service` bound to `description`
    pub fn new(service: ServiceId, version: VersionKey, description: Arc<ApiDescription>) -> Self {
        let type_name = Self::synthesize_name(&service, &version);
        Self {
            service,
            version,
            type_name,
            description,
            modifications: ArcSwap::from_pointee(Vec::new()),
        }
    }

    /// Name under which a framework may register the type (`DynamoDB::V20120810`)
    pub fn synthesize_name(service: &ServiceId, version: &VersionKey) -> String {
        format!("{}{}{}", service, CLIENT_TYPE_NAME_SEPARATOR, version.compact())
    }

    /// Owning service
    pub fn service(&self) -> &ServiceId {
        &self.service
    }

    /// Registered version key
    pub fn version(&self) -> &VersionKey {
        &self.version
    }

    /// Synthesized type name
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// The description this type is bound to
    pub fn description(&self) -> &Arc<ApiDescription> {
        &self.description
    }

    /// Attach a modification; returns `false` when one with the same name is present
    ///
    /// If the modification's hook fails it is removed again and the error returned.
    pub fn attach_modification(&self, modification: SharedModification) -> Result<bool> {
        let mut inserted = false;
        self.modifications.rcu(|current| {
            if current.iter().any(|m| m.name() == modification.name()) {
                inserted = false;
                return Arc::clone(current);
            }
            inserted = true;
            let mut next = Vec::with_capacity(current.len() + 1);
            next.extend(current.iter().cloned());
            next.push(Arc::clone(&modification));
            Arc::new(next)
        });
        if !inserted {
            return Ok(false);
        }
        if let Err(e) = modification.on_attach(self) {
            self.remove_named(modification.name());
            return Err(e);
        }
        Ok(true)
    }

    /// Detach a modification by name; returns `false` if it was not attached
    pub fn detach_modification(&self, name: &str) -> Result<bool> {
        match self.remove_named(name) {
            Some(removed) => {
                removed.on_detach(self)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Whether a modification with this name is attached
    pub fn has_modification(&self, name: &str) -> bool {
        self.modifications.load().iter().any(|m| m.name() == name)
    }

    /// Attached modification names in attachment order
    pub fn modification_names(&self) -> Vec<String> {
        self.modifications
            .load()
            .iter()
            .map(|m| m.name().to_string())
            .collect()
    }

    /// Build an instance of this type with the given effective configuration
    pub fn instantiate(self: &Arc<Self>, config: ClientConfig) -> ClientInstance {
        ClientInstance::new(Arc::clone(self), config)
    }

    fn remove_named(&self, name: &str) -> Option<SharedModification> {
        let mut removed = None;
        self.modifications.rcu(|current| {
            removed = current.iter().find(|m| m.name() == name).cloned();
            if removed.is_none() {
                return Arc::clone(current);
            }
            Arc::new(
                current
                    .iter()
                    .filter(|m| m.name() != name)
                    .cloned()
                    .collect::<Vec<_>>(),
            )
        });
        removed
    }
}

impl fmt::Debug for ClientType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientType")
            .field("type_name", &self.type_name)
            .field("version", &self.version)
            .field("operations", &self.description.operations.len())
            .field("modifications", &self.modification_names())
            .finish()
    }
}
