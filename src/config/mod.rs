//! Configuration for the Prism host
//!
//! [`Config`] is the shared object every plugin installs against: it owns
//! the parsed configuration tree and the plugin registry. Plugins read the
//! tree during install and register themselves with the registry; the host
//! later queries the registry by capability.

pub mod file;
pub mod tree;

pub use file::default_config_path;
pub use tree::ConfigNode;

use crate::plugins::PluginRegistry;

/// Shared host configuration
///
/// Handed to plugins by reference during the single-threaded install phase;
/// the registry uses interior locking, so no exclusive access is needed.
pub struct Config {
    root: ConfigNode,
    plugins: PluginRegistry,
}

impl Config {
    /// Create a configuration from an already-built tree
    #[must_use]
    pub fn new(root: ConfigNode) -> Self {
        Self {
            root,
            plugins: PluginRegistry::new(),
        }
    }

    /// Find the first node with the given name, depth-first from the root
    ///
    /// Returns `None` when no such node exists; an absent section is a
    /// normal outcome, not an error.
    #[must_use]
    pub fn get_node(&self, name: &str) -> Option<&ConfigNode> {
        self.root.find(name)
    }

    /// Root of the configuration tree
    #[must_use]
    pub fn root(&self) -> &ConfigNode {
        &self.root
    }

    /// The plugin registry owned by this configuration
    #[must_use]
    pub fn plugins(&self) -> &PluginRegistry {
        &self.plugins
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(ConfigNode::new(file::ROOT_NODE))
    }
}
