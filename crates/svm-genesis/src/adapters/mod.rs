//! Adapters Layer - Build-time packaged assets

pub mod assets;

pub use assets::{genesis_assets, GENESIS_SCRIPT};
