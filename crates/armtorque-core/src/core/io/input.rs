use crate::core::models::input::CalculationInput;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("TOML serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl CalculationInput {
    /// Parses an input document. Every field is required; ranges are not
    /// checked here.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads a complete input document from disk.
    ///
    /// This is the strict library-side loader: every field must be present.
    /// The `armtorque` binary reads its own partial document instead so that
    /// defaults and command-line overrides can fill in missing values.
    pub fn load(path: &Path) -> Result<Self, InputLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| InputLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Self::from_toml_str(&content).map_err(|e| InputLoadError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })
    }

    pub fn to_toml_string(&self) -> Result<String, InputLoadError> {
        Ok(toml::to_string(self)?)
    }
}
