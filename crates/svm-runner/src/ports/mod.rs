//! Ports Layer - Trait definitions
//!
//! - `Command`: driving port implemented by each configuration descriptor
//! - `AssetSource`: driven port for build-time packaged scripts

pub mod assets;
pub mod command;

pub use assets::AssetSource;
pub use command::Command;
