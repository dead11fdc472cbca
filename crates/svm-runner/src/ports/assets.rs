//! Asset port
//!
//! Read-only access to script assets packaged at build time.

use std::io::Read;

use crate::error::AssetError;

/// Source of named, read-only assets
pub trait AssetSource: Send + Sync {
    /// Open the asset stored under `name`
    fn open(&self, name: &str) -> Result<Box<dyn Read + '_>, AssetError>;
}
