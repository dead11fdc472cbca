//! Scripts compiled into the crate

use svm_runner::EmbeddedAssets;

/// Name of the genesis script inside the asset table
pub const GENESIS_SCRIPT: &str = "genesis/steps.sh";

static GENESIS_ASSETS: EmbeddedAssets = EmbeddedAssets::new(&[(
    GENESIS_SCRIPT,
    include_bytes!("../../assets/genesis/steps.sh") as &[u8],
)]);

/// Process-wide, read-only asset table
pub fn genesis_assets() -> &'static EmbeddedAssets {
    &GENESIS_ASSETS
}
