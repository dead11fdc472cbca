//! Environment contract of the genesis script
//!
//! Names and defaults here must match what `assets/genesis/steps.sh` reads.

pub const LEDGER_PATH: &str = "LEDGER_PATH";
pub const IDENTITY_PUBKEY: &str = "IDENTITY_PUBKEY";
pub const VOTE_PUBKEY: &str = "VOTE_PUBKEY";
pub const STAKE_PUBKEY: &str = "STAKE_PUBKEY";
pub const FAUCET_PUBKEY: &str = "FAUCET_PUBKEY";

pub const FAUCET_LAMPORTS: &str = "FAUCET_LAMPORTS";
pub const TARGET_LAMPORTS_PER_SIGNATURE: &str = "TARGET_LAMPORTS_PER_SIGNATURE";
pub const INFLATION: &str = "INFLATION";
pub const LAMPORTS_PER_BYTE_YEAR: &str = "LAMPORTS_PER_BYTE_YEAR";
pub const SLOT_PER_EPOCH: &str = "SLOT_PER_EPOCH";
pub const CLUSTER_TYPE: &str = "CLUSTER_TYPE";

pub const GENESIS_EXTRA_FLAGS: &str = "GENESIS_EXTRA_FLAGS";
pub const PRIMORDIAL_PUBKEYS: &str = "PRIMORDIAL_PUBKEYS";
pub const PRIMORDIAL_LAMPORTS: &str = "PRIMORDIAL_LAMPORTS";
pub const PACKAGE_VERSION: &str = "PACKAGE_VERSION";

/// Fallbacks applied before any override, in this order
pub const DEFAULTS: [(&str, &str); 6] = [
    (FAUCET_LAMPORTS, "1000"),
    (TARGET_LAMPORTS_PER_SIGNATURE, "0"),
    (INFLATION, "none"),
    (LAMPORTS_PER_BYTE_YEAR, "1"),
    (SLOT_PER_EPOCH, "150"),
    (CLUSTER_TYPE, "development"),
];
