//! Error types for the runner crate

use std::io;

use thiserror::Error;

/// Errors raised while preparing a command for remote execution
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),

    #[error("Payload error: {0}")]
    Payload(#[from] PayloadError),
}

/// Errors from an asset source
///
/// These indicate a packaging defect, not bad input. Retrying cannot fix them.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("Asset not found: {name}")]
    NotFound { name: String },
}

/// Errors from building or materialising a payload bundle
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("Payload already contains an entry named {path}")]
    DuplicateEntry { path: String },

    #[error("Failed to read contents for {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: io::Error,
    },
}
