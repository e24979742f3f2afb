//! Plugin registry owned by the host configuration
//!
//! Tracks registered plugins and a typed capability index. The registry is
//! shared behind `&Config`, so bookkeeping uses an interior lock: installs
//! happen on the single-threaded startup path, and queries are safe from
//! concurrent readers afterwards.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::capability::{Capability, FileSignatureProvider, LicenseProvider};
use super::signature::FileSignature;
use super::{Plugin, PluginInfo};

#[derive(Default)]
struct RegistryState {
    plugins: Vec<Arc<dyn Plugin>>,
    by_capability: HashMap<Capability, Vec<Arc<dyn Plugin>>>,
}

/// Registry of plugins installed into a configuration
///
/// Registration is keyed by plugin id: duplicates are rejected, so an id
/// identifies at most one live registration and removal is id-based.
pub struct PluginRegistry {
    state: RwLock<RegistryState>,
}

impl PluginRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: RwLock::new(RegistryState::default()),
        }
    }

    /// Register a plugin, returning whether it was accepted
    ///
    /// An id that is already registered is rejected with a warn log; the
    /// existing registration is left untouched. On success the plugin's
    /// capability tags are indexed for typed queries.
    #[must_use = "a rejected registration leaves the registry unchanged"]
    pub fn add(&self, plugin: Arc<dyn Plugin>) -> bool {
        let mut state = self.write_state();
        if state.plugins.iter().any(|p| p.id() == plugin.id()) {
            tracing::warn!(plugin_id = %plugin.id(), "plugin already registered, rejecting");
            return false;
        }

        tracing::info!(
            plugin_id = %plugin.id(),
            capabilities = ?plugin.capabilities(),
            "registered plugin"
        );

        for &capability in plugin.capabilities() {
            state
                .by_capability
                .entry(capability)
                .or_default()
                .push(Arc::clone(&plugin));
        }
        state.plugins.push(plugin);
        true
    }

    /// Deregister the plugin with the given id, returning whether it was
    /// found and removed
    #[must_use = "removal of an unregistered id is a no-op"]
    pub fn remove(&self, id: &str) -> bool {
        let mut state = self.write_state();
        let Some(position) = state.plugins.iter().position(|p| p.id() == id) else {
            return false;
        };

        let removed = state.plugins.remove(position);
        for indexed in state.by_capability.values_mut() {
            indexed.retain(|p| p.id() != id);
        }

        tracing::info!(plugin_id = %removed.id(), "deregistered plugin");
        true
    }

    /// Get a registered plugin by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<Arc<dyn Plugin>> {
        self.read_state()
            .plugins
            .iter()
            .find(|p| p.id() == id)
            .cloned()
    }

    /// List all registered plugins in registration order
    #[must_use]
    pub fn list(&self) -> Vec<PluginInfo> {
        self.read_state()
            .plugins
            .iter()
            .map(|p| PluginInfo {
                id: p.id().to_string(),
                capabilities: p.capabilities().to_vec(),
            })
            .collect()
    }

    /// Plugins tagged with the given capability, in registration order
    #[must_use]
    pub fn with_capability(&self, capability: Capability) -> Vec<Arc<dyn Plugin>> {
        self.read_state()
            .by_capability
            .get(&capability)
            .cloned()
            .unwrap_or_default()
    }

    /// All registered file-signature providers
    #[must_use]
    pub fn signature_providers(&self) -> Vec<Arc<dyn FileSignatureProvider>> {
        self.with_capability(Capability::Signatures)
            .into_iter()
            .filter_map(Plugin::as_signature_provider)
            .collect()
    }

    /// All registered license providers
    #[must_use]
    pub fn license_providers(&self) -> Vec<Arc<dyn LicenseProvider>> {
        self.with_capability(Capability::Licenses)
            .into_iter()
            .filter_map(Plugin::as_license_provider)
            .collect()
    }

    /// Collect the signatures of every registered provider
    #[must_use]
    pub fn signatures(&self) -> Vec<FileSignature> {
        let providers = self.signature_providers();
        providers.iter().flat_map(|p| p.signatures()).collect()
    }

    /// Collect the licenses of every registered provider, in registration
    /// order
    #[must_use]
    pub fn licenses(&self) -> Vec<String> {
        let providers = self.license_providers();
        providers.iter().flat_map(|p| p.licenses()).collect()
    }

    /// Number of registered plugins
    #[must_use]
    pub fn len(&self) -> usize {
        self.read_state().plugins.len()
    }

    /// Whether no plugins are registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read_state().plugins.is_empty()
    }

    // A poisoned lock only means a reader panicked mid-query; the state
    // itself is never left partially updated, so recover the guard.
    fn read_state(&self) -> RwLockReadGuard<'_, RegistryState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, RegistryState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self::new()
    }
}
