//! Service Layer - Orchestration of a single command

pub mod prepare;

pub use prepare::{prepare, PreparedCommand};
