//! Plugin system for the Prism host
//!
//! Plugins attach optional functionality to a shared [`Config`]. Every
//! plugin implements the install/uninstall lifecycle against the config's
//! [`PluginRegistry`]; a plugin additionally advertises capabilities
//! (file-signature detection, license provisioning) through explicit
//! [`Capability`] tags declared at construction, which the registry indexes
//! at registration time. The host queries the typed index rather than
//! inspecting concrete plugin types.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use prism_host::{Config, ConfigLicenseReader, Plugin};
//!
//! let config = Config::from_toml_str(
//!     "[licenses]\nlicense = [\"ABCD-1234\"]\n",
//! ).unwrap();
//!
//! Arc::new(ConfigLicenseReader::new()).install(&config);
//! assert_eq!(config.plugins().licenses(), vec!["ABCD-1234"]);
//! ```

mod capability;
mod license;
mod registry;
mod signature;

pub use capability::{Capability, FileSignatureProvider, LicenseProvider};
pub use license::ConfigLicenseReader;
pub use registry::PluginRegistry;
pub use signature::{FileSignature, ImageSignatureProvider};

use std::sync::Arc;

use serde::Serialize;

use crate::config::Config;

/// Lifecycle contract every plugin implements
///
/// Plugins are shared between the host and the registry as
/// `Arc<dyn Plugin>`; install takes the `Arc` receiver so the plugin can
/// hand a clone of itself to the registry and still return itself for
/// fluent chaining.
pub trait Plugin: Send + Sync {
    /// Unique plugin identifier
    ///
    /// Should be a lowercase, hyphenated string (e.g. "license-reader").
    fn id(&self) -> &str;

    /// Capability tags declared by this plugin
    ///
    /// The registry indexes these at registration time; a plugin that
    /// declares a tag must also override the matching accessor below.
    fn capabilities(&self) -> &[Capability] {
        &[]
    }

    /// Install this plugin into the given configuration
    ///
    /// Performs capability-specific setup (reading the config tree),
    /// registers the plugin with `config.plugins()`, and returns itself.
    /// Installing twice is safe: the registry rejects the duplicate and the
    /// bookkeeping is unchanged.
    fn install(self: Arc<Self>, config: &Config) -> Arc<dyn Plugin>;

    /// Remove this plugin from the given configuration
    ///
    /// Returns whether the plugin was found and deregistered. Uninstalling
    /// a plugin that was never installed is the normal `false` case, not a
    /// fault.
    fn uninstall(&self, config: &Config) -> bool;

    /// View this plugin as a file-signature provider
    ///
    /// Overridden by plugins tagged [`Capability::Signatures`].
    fn as_signature_provider(self: Arc<Self>) -> Option<Arc<dyn FileSignatureProvider>> {
        None
    }

    /// View this plugin as a license provider
    ///
    /// Overridden by plugins tagged [`Capability::Licenses`].
    fn as_license_provider(self: Arc<Self>) -> Option<Arc<dyn LicenseProvider>> {
        None
    }
}

/// Information about a registered plugin
#[derive(Debug, Clone, Serialize)]
pub struct PluginInfo {
    /// Plugin unique identifier
    pub id: String,

    /// Declared capability tags
    pub capabilities: Vec<Capability>,
}
