//! Domain Layer - Pure data structures
//!
//! - Shell quoting
//! - Ordered environment builder
//! - Payload bundle
//!
//! RULES:
//! - No network I/O
//! - No async code

pub mod env_builder;
pub mod payload;
pub mod quoting;

pub use env_builder::{is_valid_name, EnvBuilder};
pub use payload::{Payload, PayloadFile, DEFAULT_FILE_MODE};
pub use quoting::{join, quote};
