// src/error.rs
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to read one of the JSON sources.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("invalid JSON in {}: {source}", path.display())]
    Json { path: PathBuf, source: serde_json::Error },
    #[error("{} does not contain a JSON array", path.display())]
    NotAnArray { path: PathBuf },
}

impl LoadError {
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::Io { path, .. } | Self::Json { path, .. } | Self::NotAnArray { path } => path,
        }
    }
}
