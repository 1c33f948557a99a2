//! Configuration system
//!
//! File-backed configuration replacing the hard-coded lookup table of the
//! original tool: the swap mapping and match mode live in a TOML or RON
//! file the host loads at startup and hands to the engine explicitly.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::swap::{MappingEntry, MappingError, MatchMode, SwapConfig, SwapMapping};

/// Configuration trait with format-dispatched file loading
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from a `.toml` or `.ron` file
    ///
    /// # Errors
    /// Returns [`ConfigError`] on IO failure, parse failure, or an
    /// unrecognized file extension.
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => {
                toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
            }
            Some("ron") => ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Save configuration to a `.toml` or `.ron` file
    ///
    /// # Errors
    /// Returns [`ConfigError`] on IO failure, serialization failure, or an
    /// unrecognized file extension.
    fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => {
                toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
            }
            Some("ron") => ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?,
            _ => return Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        };

        std::fs::write(path, contents)?;
        Ok(())
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The parsed mapping failed validation
    #[error(transparent)]
    Mapping(#[from] MappingError),
}

/// On-disk swap configuration: match mode plus ordered mapping entries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingConfig {
    /// Slot-matching mode
    #[serde(default)]
    pub match_mode: MatchMode,
    /// Mapping entries, applied in file order
    #[serde(default)]
    pub entries: Vec<MappingEntry>,
}

impl Config for MappingConfig {}

impl MappingConfig {
    /// Validate the entries into a [`SwapMapping`]
    ///
    /// # Errors
    /// Returns [`MappingError::RepeatedName`] for duplicate names.
    pub fn mapping(&self) -> Result<SwapMapping, MappingError> {
        SwapMapping::new(self.entries.clone())
    }

    /// Engine configuration carried by this file
    pub fn swap_config(&self) -> SwapConfig {
        SwapConfig {
            match_mode: self.match_mode,
        }
    }
}
