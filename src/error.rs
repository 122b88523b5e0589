use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CovdiffError {
    #[error("Failed to read {path}: {source}")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Invalid JSON in {path}: {source}")]
    Json {
        source: serde_json::Error,
        path: PathBuf,
    },

    #[error("Invalid YAML in {path}: {source}")]
    Yaml {
        source: serde_yaml::Error,
        path: PathBuf,
    },
}

pub type Result<T> = std::result::Result<T, CovdiffError>;
