//! # SVM Genesis
//!
//! Genesis ledger provisioning: typed configuration in, environment and
//! `steps.sh` payload out.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`)
//!   - `Genesis`, `GenesisFlags`, `PrimordialEntry`: configuration with validation
//!   - `env_keys`: variable names and defaults the script reads
//!
//! - **Service Layer** (`service/`)
//!   - `CreateCommand`: implements `svm_runner::Command`
//!
//! - **Adapters Layer** (`adapters/`)
//!   - `genesis_assets()`: embedded script table
//!
//! ## Environment Contract
//!
//! | Variable | Default | Notes |
//! |----------|---------|-------|
//! | `FAUCET_LAMPORTS` | `1000` | |
//! | `TARGET_LAMPORTS_PER_SIGNATURE` | `0` | |
//! | `INFLATION` | `none` | |
//! | `LAMPORTS_PER_BYTE_YEAR` | `1` | |
//! | `SLOT_PER_EPOCH` | `150` | |
//! | `CLUSTER_TYPE` | `development` | |
//! | `PRIMORDIAL_PUBKEYS` | empty | comma-joined, always set |
//! | `PRIMORDIAL_LAMPORTS` | empty | comma-joined, always set |
//! | `GENESIS_EXTRA_FLAGS` | unset | space-joined |
//! | `PACKAGE_VERSION` | unset | |
//!
//! ## Usage Example
//!
//! ```
//! use svm_genesis::{Genesis, GenesisFlags};
//! use svm_runner::prepare;
//!
//! let genesis = Genesis::new(
//!     GenesisFlags::new("/ledger", "Id111", "Vote111", "Stake111", "Faucet111")
//!         .with_inflation("full"),
//! );
//!
//! let prepared = prepare(&genesis.create()).unwrap();
//! assert!(prepared.env.to_key_value_list().contains(&"INFLATION=full".to_string()));
//! assert!(prepared.payload.contains("steps.sh"));
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod service;

// Re-exports for convenience
pub use adapters::{genesis_assets, GENESIS_SCRIPT};
pub use domain::{env_keys, Genesis, GenesisFlags, PrimordialEntry};
pub use error::GenesisError;
pub use service::{CreateCommand, STEPS_SCRIPT};
