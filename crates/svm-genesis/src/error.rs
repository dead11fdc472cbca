//! Error types for genesis configuration

use svm_runner::CommandError;
use thiserror::Error;

/// Configuration errors caught before any environment is built
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenesisError {
    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("Invalid primordial entry at index {index}: {reason}")]
    InvalidPrimordialEntry { index: usize, reason: String },
}

impl From<GenesisError> for CommandError {
    fn from(err: GenesisError) -> Self {
        CommandError::InvalidConfig(err.to_string())
    }
}
