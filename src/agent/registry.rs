//! Immutable persona registry: load once, look up forever.

use crate::agent::entry::AgentEntry;
use crate::error::RegistryError;
use std::collections::HashMap;

/// Registry mapping agent ids to persona entries.
///
/// Built once from a sequence of sources and read-only afterward. Lookup is a
/// pure function of the loaded state; `list` preserves source enumeration
/// order for stable UI listings.
pub struct AgentRegistry {
    entries: HashMap<String, AgentEntry>,
    order: Vec<String>,
}

impl AgentRegistry {
    /// Build a registry from a sequence of entries.
    ///
    /// Fails with [`RegistryError::DuplicateId`] when two sources share an id;
    /// a duplicate means the source set is misconfigured, so nothing partial
    /// is returned.
    pub fn load(
        sources: impl IntoIterator<Item = AgentEntry>,
    ) -> Result<Self, RegistryError> {
        let mut entries = HashMap::new();
        let mut order = Vec::new();
        for entry in sources {
            let id = entry.id.clone();
            if entries.insert(id.clone(), entry).is_some() {
                return Err(RegistryError::DuplicateId(id));
            }
            order.push(id);
        }
        tracing::debug!(agents = order.len(), "Loaded persona registry");
        Ok(Self { entries, order })
    }

    /// Get an entry by id, or `None` when absent.
    pub fn find(&self, id: &str) -> Option<&AgentEntry> {
        self.entries.get(id)
    }

    /// Get an entry by id or fail with [`RegistryError::NotFound`].
    pub fn get(&self, id: &str) -> Result<&AgentEntry, RegistryError> {
        self.find(id)
            .ok_or_else(|| RegistryError::NotFound(id.to_string()))
    }

    /// Iterate `(id, title)` pairs in insertion order.
    ///
    /// The iterator borrows the registry; call again to restart.
    pub fn list(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.order.iter().map(|id| {
            let entry = &self.entries[id];
            (entry.id.as_str(), entry.title.as_str())
        })
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
