//! Adapter registry for runtime provider lookup.
//!
//! A simple provider-keyed registry of boxed adapters. Adding a fourth
//! vendor means registering one more adapter; the dispatch and batching
//! logic does not change.

use std::collections::HashMap;

use mnemo_types::dispatch::ProviderId;

use super::box_adapter::BoxAdapter;

/// Registry of available completion adapters, indexed by provider.
pub struct AdapterRegistry {
    adapters: HashMap<ProviderId, BoxAdapter>,
}

impl AdapterRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            adapters: HashMap::new(),
        }
    }

    /// Register an adapter under its own provider id.
    ///
    /// If an adapter for this provider already exists, it is replaced.
    pub fn register(&mut self, adapter: BoxAdapter) {
        self.adapters.insert(adapter.provider(), adapter);
    }

    /// Look up an adapter by provider.
    pub fn get(&self, provider: ProviderId) -> Option<&BoxAdapter> {
        self.adapters.get(&provider)
    }

    /// List all registered providers.
    pub fn providers(&self) -> Vec<ProviderId> {
        self.adapters.keys().copied().collect()
    }
}

impl Default for AdapterRegistry {
    fn default() -> Self {
        Self::new()
    }
}
