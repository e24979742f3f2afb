//! Error types for the Prism host core

use thiserror::Error;

/// Result type alias for host operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the host core
///
/// Faults are confined to configuration loading. Absence conditions inside
/// the plugin layer (missing config nodes, missing text, plugin not found)
/// are normal outcomes modeled as `Option` or `bool`, never as errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
