use std::path::PathBuf;

use thiserror::Error;

use crate::metals::MetalSymbol;

/// A concentration record that breaks the engine's input contract.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SampleError {
    #[error("{metal} concentration cannot be negative: {value} mg/L")]
    Negative { metal: MetalSymbol, value: f64 },
    #[error("{metal} concentration is not a finite number")]
    NotFinite { metal: MetalSymbol },
}

/// Errors for reading sample batches and configuration.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read samples from stdin: {0}")]
    Stdin(#[source] std::io::Error),
    #[error("malformed sample batch: {0}")]
    Json(#[from] serde_json::Error),
    #[error("malformed config {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("{rejected} of {total} samples were rejected")]
    Rejected { rejected: usize, total: usize },
}
