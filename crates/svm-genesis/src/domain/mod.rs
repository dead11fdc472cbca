//! Domain Layer - Genesis configuration and its environment contract
//!
//! RULES:
//! - No I/O operations
//! - No blockchain semantics: keys and amounts are opaque strings

pub mod config;
pub mod env_keys;

pub use config::{Genesis, GenesisFlags, PrimordialEntry};
