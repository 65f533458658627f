use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileLink {
    pub length: Option<f64>,
    pub radius: Option<f64>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileMotor {
    pub mass: Option<f64>,
    pub body_length: Option<f64>,
    pub pivot_position: Option<f64>,
    pub rpm: Option<f64>,
    pub gear_ratio: Option<f64>,
    pub safety_factor: Option<f64>,
}

/// An arm description as written by the user, before defaults are applied.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileConfig {
    pub payload_mass: Option<f64>,
    pub link_density: Option<f64>,
    #[serde(default)]
    pub links: Vec<FileLink>,
    #[serde(default)]
    pub motors: Vec<FileMotor>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading arm description from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
