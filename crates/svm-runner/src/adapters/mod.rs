//! Adapters Layer - Port implementations

pub mod embedded;

pub use embedded::EmbeddedAssets;
