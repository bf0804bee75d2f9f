//! Recorded cross-cutting modifications of a service

use std::sync::Arc;

use apivers_domain::ports::SharedModification;
use arc_swap::ArcSwap;

/// Ordered list of modifications recorded for one service
///
/// New client types receive the full list in recorded order at construction.
pub struct ModificationLog {
    entries: ArcSwap<Vec<SharedModification>>,
}

impl ModificationLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self {
            entries: ArcSwap::from_pointee(Vec::new()),
        }
    }

    /// Append a modification; returns `false` if the name is already recorded
    pub fn record(&self, modification: SharedModification) -> bool {
        let mut recorded = false;
        self.entries.rcu(|current| {
            recorded = !current.iter().any(|m| m.name() == modification.name());
            if !recorded {
                return Arc::clone(current);
            }
            let mut next = Vec::clone(current);
            next.push(Arc::clone(&modification));
            Arc::new(next)
        });
        recorded
    }

    /// Remove a modification by name, returning it if it was recorded
    pub fn forget(&self, name: &str) -> Option<SharedModification> {
        let mut removed = None;
        self.entries.rcu(|current| {
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

    /// Current modifications in recorded order
    pub fn snapshot(&self) -> Arc<Vec<SharedModification>> {
        self.entries.load_full()
    }

    /// Recorded names in order
    pub fn names(&self) -> Vec<String> {
        self.entries
            .load()
            .iter()
            .map(|m| m.name().to_string())
            .collect()
    }
}

impl Default for ModificationLog {
    fn default() -> Self {
        Self::new()
    }
}
