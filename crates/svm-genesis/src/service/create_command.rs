//! Genesis create command
//!
//! Environment layering:
//! 1. required fields
//! 2. defaults, unconditionally
//! 3. `GENESIS_EXTRA_FLAGS`, when supplied
//! 4. overrides, each replacing its default in place
//! 5. `PRIMORDIAL_PUBKEYS` / `PRIMORDIAL_LAMPORTS`, always set
//! 6. `PACKAGE_VERSION`, when supplied

use svm_runner::{AssetSource, Command, CommandError, EmbeddedAssets, EnvBuilder, Payload};
use tracing::{debug, warn};

use crate::adapters::{genesis_assets, GENESIS_SCRIPT};
use crate::domain::env_keys::*;
use crate::domain::Genesis;

/// Name the script is shipped under inside the payload
pub const STEPS_SCRIPT: &str = "steps.sh";

/// Descriptor that creates a genesis ledger on the target host
#[derive(Clone, Debug)]
pub struct CreateCommand<'a, A: AssetSource + ?Sized = EmbeddedAssets> {
    genesis: Genesis,
    assets: &'a A,
}

impl<'a, A: AssetSource + ?Sized> CreateCommand<'a, A> {
    /// Descriptor reading its script from `assets` instead of the embedded table
    pub fn with_assets(genesis: Genesis, assets: &'a A) -> Self {
        Self { genesis, assets }
    }

    pub fn genesis(&self) -> &Genesis {
        &self.genesis
    }
}

impl Genesis {
    /// Descriptor backed by the embedded genesis script
    pub fn create(&self) -> CreateCommand<'static> {
        CreateCommand::with_assets(self.clone(), genesis_assets())
    }
}

impl<A: AssetSource + ?Sized> Command for CreateCommand<'_, A> {
    fn name(&self) -> &str {
        "genesis.create"
    }

    fn check(&self) -> Result<(), CommandError> {
        self.genesis.validate().map_err(|err| {
            warn!(error = %err, "Genesis configuration rejected");
            CommandError::from(err)
        })
    }

    fn env(&self) -> EnvBuilder {
        let flags = &self.genesis.flags;
        let mut b = EnvBuilder::new();

        b.set_all([
            (LEDGER_PATH, flags.ledger_path.as_str()),
            (IDENTITY_PUBKEY, flags.identity_pubkey.as_str()),
            (VOTE_PUBKEY, flags.vote_pubkey.as_str()),
            (STAKE_PUBKEY, flags.stake_pubkey.as_str()),
            (FAUCET_PUBKEY, flags.faucet_pubkey.as_str()),
        ]);
        b.set_all(DEFAULTS);

        b.set_optional_sequence(GENESIS_EXTRA_FLAGS, flags.extra_flags.as_deref());
        b.set_optional(FAUCET_LAMPORTS, flags.faucet_lamports.as_deref());
        b.set_optional(
            TARGET_LAMPORTS_PER_SIGNATURE,
            flags.target_lamports_per_signature.as_deref(),
        );
        b.set_optional(INFLATION, flags.inflation.as_deref());
        b.set_optional(LAMPORTS_PER_BYTE_YEAR, flags.lamports_per_byte_year.as_deref());
        b.set_optional(SLOT_PER_EPOCH, flags.slot_per_epoch.as_deref());
        b.set_optional(CLUSTER_TYPE, flags.cluster_type.as_deref());

        let (pubkeys, lamports) = self.genesis.primordial_lists();
        b.set(PRIMORDIAL_PUBKEYS, pubkeys);
        b.set(PRIMORDIAL_LAMPORTS, lamports);

        b.set_optional(PACKAGE_VERSION, self.genesis.version.as_deref());

        debug!(variables = b.len(), "Built genesis environment");
        b
    }

    fn add_to_payload(&self, payload: &mut Payload) -> Result<(), CommandError> {
        let script = self.assets.open(GENESIS_SCRIPT)?;
        payload.add_reader(STEPS_SCRIPT, script)?;
        Ok(())
    }
}
