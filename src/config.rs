use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::IngestError;

/// Output layout for assessed batches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

/// Settings for the command-line tool, read from TOML.
///
/// The regulatory tables and risk thresholds are fixed and not part of it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub format: OutputFormat,
    /// Tracing filter used when `HEAVYMETAL_LOG` is not set.
    pub log_filter: Option<String>,
}

impl EngineConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    pub fn load(path: &Path) -> Result<Self, IngestError> {
        let raw = fs::read_to_string(path).map_err(|source| IngestError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw).map_err(|source| IngestError::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}
