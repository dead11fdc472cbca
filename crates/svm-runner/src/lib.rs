//! # SVM Runner
//!
//! Turns a configuration descriptor into the environment and payload that a
//! remote provisioning script runs with.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): pure data structures
//!   - `EnvBuilder`: ordered, shell-quoted `NAME=value` accumulator
//!   - `Payload`: named files shipped next to the environment
//!   - `quote` / `join`: POSIX shell quoting
//!
//! - **Ports Layer** (`ports/`): trait definitions
//!   - `Command`: implemented by each configuration descriptor
//!   - `AssetSource`: read-only access to packaged scripts
//!
//! - **Adapters Layer** (`adapters/`)
//!   - `EmbeddedAssets`: `include_bytes!` table implementing `AssetSource`
//!
//! - **Service Layer** (`service/`)
//!   - `prepare`: check -> env -> payload for one command
//!
//! ## Invariants
//!
//! - **INVARIANT-1**: `EnvBuilder` output order is first-insertion order;
//!   overwriting a name never moves or duplicates it
//! - **INVARIANT-2**: a POSIX shell evaluating `NAME=value` recovers the
//!   exact original value
//! - **INVARIANT-3**: a failed payload contribution leaves the bundle as it was
//! - **INVARIANT-4**: variable names are shell identifiers
//!
//! ## Usage Example
//!
//! ```
//! use svm_runner::EnvBuilder;
//!
//! let mut env = EnvBuilder::new();
//! env.set("LEDGER_PATH", "/mnt/ledger");
//! env.set("INFLATION", "none");
//! env.set_optional("CLUSTER_TYPE", None::<&str>);
//! env.set("INFLATION", "full");
//!
//! assert_eq!(env.to_key_value_list(), vec!["LEDGER_PATH=/mnt/ledger", "INFLATION=full"]);
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

// Re-exports for convenience
pub use adapters::EmbeddedAssets;
pub use domain::{is_valid_name, join, quote, EnvBuilder, Payload, PayloadFile, DEFAULT_FILE_MODE};
pub use error::{AssetError, CommandError, PayloadError};
pub use ports::{AssetSource, Command};
pub use service::{prepare, PreparedCommand};
