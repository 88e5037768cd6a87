//! Configuration loading errors.

/// Config load error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigLoadError {
    /// File could not be read
    Io(String),
    /// YAML did not match the configuration schema
    Parse(String),
}

impl std::fmt::Display for ConfigLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigLoadError::Io(msg) => write!(f, "Config IO error: {}", msg),
            ConfigLoadError::Parse(msg) => write!(f, "Config parse error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigLoadError {}
