//! Top-level registration configuration.

use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::assembly::AssemblyConfig;
use crate::matching::OverlapConfig;

use super::error::ConfigLoadError;

/// Path searched by [`RegistrationConfig::load_default`].
pub const DEFAULT_CONFIG_PATH: &str = "configs/registration.yaml";

/// Full registration configuration loaded from YAML
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationConfig {
    /// Pairwise overlap detection
    #[serde(default)]
    pub overlap: OverlapConfig,

    /// Global assembly
    #[serde(default)]
    pub assembly: AssemblyConfig,
}

impl RegistrationConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        debug!("Loaded registration config from {}", path.display());
        Self::from_yaml(&contents)
    }

    /// Load from the default config path, falling back to built-in defaults
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new(DEFAULT_CONFIG_PATH);
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> Result<String, ConfigLoadError> {
        serde_yaml::to_string(self).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }
}
