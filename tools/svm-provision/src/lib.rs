//! SVM Provision: operator CLI for genesis provisioning commands.
//!
//! ```text
//! svm-provision check      -c genesis.json
//! svm-provision env        -c genesis.json [--format lines|inline|json]
//! svm-provision bundle     -c genesis.json --out ./bundle
//! svm-provision invocation -c genesis.json
//! ```

pub mod cli;
pub mod commands;

pub use cli::{Action, Cli, ConfigArgs, EnvFormat};
