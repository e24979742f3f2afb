//! Configuration file loading
//!
//! Supports `~/.config/prism/host.toml` as the persistent config source.
//! TOML is the native on-disk format; JSON input is accepted for hosts that
//! generate their configuration.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

use super::{Config, ConfigNode};

/// Name given to the synthetic root node of a loaded tree
pub const ROOT_NODE: &str = "config";

impl Config {
    /// Parse a configuration from TOML text
    ///
    /// # Errors
    ///
    /// Returns [`Error::Toml`] when the input is not valid TOML.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let value: toml::Value = toml::from_str(input)?;
        Ok(Self::new(ConfigNode::from_toml(ROOT_NODE, &value)))
    }

    /// Parse a configuration from JSON text
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`] when the input is not valid JSON.
    pub fn from_json_str(input: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(input)?;
        Ok(Self::new(ConfigNode::from_json(ROOT_NODE, &value)))
    }

    /// Load a configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] when the file cannot be read and
    /// [`Error::Toml`] when it cannot be parsed.
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::info!(path = %path.display(), "loaded host configuration");
        Ok(config)
    }

    /// Load the configuration from the standard path
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when the config directory cannot be
    /// resolved, otherwise the errors of [`Config::from_toml_file`].
    pub fn load_default() -> Result<Self> {
        let path = default_config_path()
            .ok_or_else(|| Error::Config("could not resolve config directory".to_string()))?;
        Self::from_toml_file(&path)
    }
}

/// Return the config file path: `~/.config/prism/host.toml`
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|d| d.config_dir().join("prism").join("host.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_toml_config() {
        let config = Config::from_toml_str(
            r#"
            [licenses]
            license = ["ABCD-1234"]
            "#,
        )
        .unwrap();

        let node = config.get_node("licenses").unwrap();
        assert_eq!(node.children_by_name("license").count(), 1);
    }

    #[test]
    fn reject_invalid_toml() {
        let result = Config::from_toml_str("licenses = [");
        assert!(matches!(result, Err(Error::Toml(_))));
    }

    #[test]
    fn reject_invalid_json() {
        let result = Config::from_json_str("{");
        assert!(matches!(result, Err(Error::Serialization(_))));
    }

    #[test]
    fn default_path_under_prism() {
        let path = default_config_path().unwrap();
        assert!(path.to_string_lossy().contains("prism"));
        assert!(path.to_string_lossy().ends_with("host.toml"));
    }
}
