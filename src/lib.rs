//! Prism Host - plugin extensibility core for the Prism imaging pipeline
//!
//! This library provides the contract between the host and its plugins:
//! - Capability-tagged plugins with an install/uninstall lifecycle
//! - A plugin registry owned by the shared [`Config`], with typed
//!   capability queries
//! - Config-tree-driven discovery: plugins read the sections of the
//!   configuration relevant to them at install time
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │                      Host                        │
//! │   builds Config ── installs plugins ── queries   │
//! └───────────────────────┬──────────────────────────┘
//!                         │
//! ┌───────────────────────▼──────────────────────────┐
//! │                     Config                       │
//! │   ConfigNode tree   │   PluginRegistry           │
//! └───────────────────────┬──────────────────────────┘
//!                         │
//! ┌───────────────────────▼──────────────────────────┐
//! │                    Plugins                       │
//! │   license-reader  │  image-signatures  │  ...    │
//! └──────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use prism_host::{Config, ConfigLicenseReader, Plugin};
//!
//! let config = Config::from_toml_str(r#"
//! [licenses]
//! license = ["ABCD-1234", "EFGH 5678"]
//! "#).unwrap();
//!
//! Arc::new(ConfigLicenseReader::new()).install(&config);
//!
//! // license keys are whitespace-stripped tokens
//! assert_eq!(config.plugins().licenses(), vec!["ABCD-1234", "EFGH5678"]);
//! ```

pub mod config;
pub mod error;
pub mod plugins;

pub use config::{default_config_path, Config, ConfigNode};
pub use error::{Error, Result};
pub use plugins::{
    Capability, ConfigLicenseReader, FileSignature, FileSignatureProvider,
    ImageSignatureProvider, LicenseProvider, Plugin, PluginInfo, PluginRegistry,
};
