//! Named client type registry
//!
//! Default [`ClientFramework`]: every materialized client type is published
//! under its synthesized name (`<Service>::V<YYYYMMDD>`) so it can be looked
//! up by name later.

use std::sync::Arc;

use apivers_domain::entities::ClientType;
use apivers_domain::error::Result;
use apivers_domain::ports::ClientFramework;
use dashmap::DashMap;
use tracing::debug;

/// Framework adapter recording name → client type
#[derive(Default)]
pub struct NamedTypeRegistry {
    types: DashMap<String, Arc<ClientType>>,
}

impl NamedTypeRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Client type published under `name`
    pub fn get(&self, name: &str) -> Option<Arc<ClientType>> {
        self.types.get(name).map(|entry| Arc::clone(entry.value()))
    }

    /// Published names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.types.iter().map(|e| e.key().clone()).collect();
        names.sort();
        names
    }

    /// Number of published types
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether nothing has been published
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl ClientFramework for NamedTypeRegistry {
    fn framework_name(&self) -> &str {
        "named"
    }

    fn define_client_type(&self, client_type: &Arc<ClientType>) -> Result<()> {
        // A build that failed after this hook leaves a stale entry; the retry replaces it.
        let previous = self
            .types
            .insert(client_type.type_name().to_string(), Arc::clone(client_type));
        debug!(
            type_name = client_type.type_name(),
            replaced = previous.is_some(),
            "Defined client type"
        );
        Ok(())
    }
}

impl std::fmt::Debug for NamedTypeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NamedTypeRegistry")
            .field("types", &self.names())
            .finish()
    }
}
