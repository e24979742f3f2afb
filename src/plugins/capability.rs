//! Capability tags and capability contracts
//!
//! A capability is an optional contract a plugin advertises beyond the base
//! lifecycle. Tags are declared explicitly at construction and indexed by
//! the registry, so capability discovery never relies on runtime type
//! inspection.

use serde::{Deserialize, Serialize};

use super::signature::FileSignature;

/// Capability category a plugin can advertise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Capability {
    /// Identifies file formats by leading byte pattern
    Signatures,
    /// Holds license strings collected for the host
    Licenses,
}

/// Capability contract: file-signature detection
pub trait FileSignatureProvider: Send + Sync {
    /// Enumerate the signatures this provider recognizes
    ///
    /// The sequence is finite and restartable: every call yields a fresh
    /// enumeration. There is no failure mode; a provider that has nothing
    /// to offer returns an empty iterator.
    fn signatures(&self) -> Box<dyn Iterator<Item = FileSignature> + '_>;
}

/// Capability contract: license provisioning
pub trait LicenseProvider: Send + Sync {
    /// Licenses collected by this provider, in insertion order
    ///
    /// A pure accessor over previously collected strings; duplicates are
    /// preserved and the configuration is never touched.
    fn licenses(&self) -> Vec<String>;
}
