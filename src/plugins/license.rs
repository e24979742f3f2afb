//! Config-driven license reader

use std::sync::{Arc, PoisonError, RwLock};

use crate::config::Config;

use super::capability::{Capability, LicenseProvider};
use super::Plugin;

/// Reads license keys declared in the host configuration
///
/// On install, scans the `licenses` node for `license` children in document
/// order and retains each text value with every whitespace character
/// removed, embedded ones included: license keys are contiguous tokens, and
/// administrators paste them into config files carrying line breaks and
/// indentation. The collected list is a snapshot of the tree at install
/// time; later config changes are not observed. The store is append-only:
/// re-installing after an uninstall re-scans and appends.
pub struct ConfigLicenseReader {
    licenses: RwLock<Vec<String>>,
}

impl ConfigLicenseReader {
    /// Create a reader with an empty license list
    #[must_use]
    pub fn new() -> Self {
        Self {
            licenses: RwLock::new(Vec::new()),
        }
    }
}

impl Default for ConfigLicenseReader {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for ConfigLicenseReader {
    fn id(&self) -> &str {
        "license-reader"
    }

    fn capabilities(&self) -> &[Capability] {
        &[Capability::Licenses]
    }

    fn install(self: Arc<Self>, config: &Config) -> Arc<dyn Plugin> {
        // An absent licenses node means "no licenses declared", not a fault.
        if let Some(node) = config.get_node("licenses") {
            let mut licenses = self
                .licenses
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            for child in node.children_by_name("license") {
                if let Some(text) = child.text_contents() {
                    licenses.push(text.chars().filter(|c| !c.is_whitespace()).collect());
                }
            }
            tracing::debug!(count = licenses.len(), "collected license keys");
        }

        // a duplicate registration is rejected (and logged) by the registry
        let _ = config.plugins().add(self.clone());
        self
    }

    fn uninstall(&self, config: &Config) -> bool {
        config.plugins().remove(self.id())
    }

    fn as_license_provider(self: Arc<Self>) -> Option<Arc<dyn LicenseProvider>> {
        Some(self)
    }
}

impl LicenseProvider for ConfigLicenseReader {
    fn licenses(&self) -> Vec<String> {
        self.licenses
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
