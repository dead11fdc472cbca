//! Service Layer - Command descriptors built from genesis configuration

pub mod create_command;

pub use create_command::{CreateCommand, STEPS_SCRIPT};
