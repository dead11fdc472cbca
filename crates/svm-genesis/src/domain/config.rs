//! Genesis configuration
//!
//! Field names serialize in camelCase so provisioning configs written as
//! JSON map directly onto these types.
//!
//! # Example
//!
//! ```
//! use svm_genesis::{Genesis, GenesisFlags, PrimordialEntry};
//!
//! let genesis = Genesis::new(GenesisFlags::new(
//!     "/home/sol/ledger",
//!     "IdentityPubkey111",
//!     "VotePubkey111",
//!     "StakePubkey111",
//!     "FaucetPubkey111",
//! ))
//! .with_primordial(vec![PrimordialEntry::new("Treasury111", "500000000000")])
//! .with_version("1.18.26-1");
//!
//! assert!(genesis.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::error::GenesisError;

/// Account funded in the genesis ledger
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrimordialEntry {
    pub pubkey: String,
    /// Balance as the decimal string handed to the script
    pub lamports: String,
}

impl PrimordialEntry {
    pub fn new(pubkey: impl Into<String>, lamports: impl Into<String>) -> Self {
        Self {
            pubkey: pubkey.into(),
            lamports: lamports.into(),
        }
    }
}

/// Flags passed to the genesis tool
///
/// Required fields are plain strings. Every `Option` field falls back to the
/// script's documented default when absent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenesisFlags {
    pub ledger_path: String,
    pub identity_pubkey: String,
    pub vote_pubkey: String,
    pub stake_pubkey: String,
    pub faucet_pubkey: String,

    /// Extra arguments appended verbatim to the genesis invocation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_flags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faucet_lamports: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_lamports_per_signature: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inflation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lamports_per_byte_year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slot_per_epoch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_type: Option<String>,
}

impl GenesisFlags {
    /// Flags with all required fields and no overrides
    pub fn new(
        ledger_path: impl Into<String>,
        identity_pubkey: impl Into<String>,
        vote_pubkey: impl Into<String>,
        stake_pubkey: impl Into<String>,
        faucet_pubkey: impl Into<String>,
    ) -> Self {
        Self {
            ledger_path: ledger_path.into(),
            identity_pubkey: identity_pubkey.into(),
            vote_pubkey: vote_pubkey.into(),
            stake_pubkey: stake_pubkey.into(),
            faucet_pubkey: faucet_pubkey.into(),
            ..Default::default()
        }
    }

    /// Required fields as `(field name, value)` pairs
    pub(crate) fn required(&self) -> [(&'static str, &str); 5] {
        [
            ("ledgerPath", self.ledger_path.as_str()),
            ("identityPubkey", self.identity_pubkey.as_str()),
            ("votePubkey", self.vote_pubkey.as_str()),
            ("stakePubkey", self.stake_pubkey.as_str()),
            ("faucetPubkey", self.faucet_pubkey.as_str()),
        ]
    }

    pub fn with_extra_flags<I, S>(mut self, flags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_flags = Some(flags.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_faucet_lamports(mut self, lamports: impl Into<String>) -> Self {
        self.faucet_lamports = Some(lamports.into());
        self
    }

    pub fn with_target_lamports_per_signature(mut self, lamports: impl Into<String>) -> Self {
        self.target_lamports_per_signature = Some(lamports.into());
        self
    }

    pub fn with_inflation(mut self, inflation: impl Into<String>) -> Self {
        self.inflation = Some(inflation.into());
        self
    }

    pub fn with_lamports_per_byte_year(mut self, lamports: impl Into<String>) -> Self {
        self.lamports_per_byte_year = Some(lamports.into());
        self
    }

    pub fn with_slot_per_epoch(mut self, slots: impl Into<String>) -> Self {
        self.slot_per_epoch = Some(slots.into());
        self
    }

    pub fn with_cluster_type(mut self, cluster_type: impl Into<String>) -> Self {
        self.cluster_type = Some(cluster_type.into());
        self
    }
}

/// Genesis settings for one ledger
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Genesis {
    pub flags: GenesisFlags,
    /// Accounts funded at genesis, in the order they are listed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primordial: Option<Vec<PrimordialEntry>>,
    /// Package version to install instead of the default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl Genesis {
    pub fn new(flags: GenesisFlags) -> Self {
        Self {
            flags,
            primordial: None,
            version: None,
        }
    }

    pub fn with_primordial(mut self, entries: Vec<PrimordialEntry>) -> Self {
        self.primordial = Some(entries);
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Check internal consistency.
    ///
    /// Rejects empty required fields, and primordial entries that would
    /// corrupt the comma-joined lists the script splits. Amounts and keys are
    /// otherwise passed through unparsed.
    pub fn validate(&self) -> Result<(), GenesisError> {
        for (field, value) in self.flags.required() {
            if value.trim().is_empty() {
                return Err(GenesisError::MissingField { field });
            }
        }

        for (index, entry) in self.primordial.iter().flatten().enumerate() {
            for (what, value) in [("pubkey", &entry.pubkey), ("lamports", &entry.lamports)] {
                if value.is_empty() {
                    return Err(GenesisError::InvalidPrimordialEntry {
                        index,
                        reason: format!("{what} is empty"),
                    });
                }
                if value.contains(',') {
                    return Err(GenesisError::InvalidPrimordialEntry {
                        index,
                        reason: format!("{what} contains ','"),
                    });
                }
            }
        }

        Ok(())
    }

    /// Comma-joined pubkeys and lamports, in table order.
    ///
    /// Both are empty when no table was given.
    pub fn primordial_lists(&self) -> (String, String) {
        let entries = self.primordial.as_deref().unwrap_or_default();
        let pubkeys = entries
            .iter()
            .map(|e| e.pubkey.as_str())
            .collect::<Vec<_>>()
            .join(",");
        let lamports = entries
            .iter()
            .map(|e| e.lamports.as_str())
            .collect::<Vec<_>>()
            .join(",");
        (pubkeys, lamports)
    }
}
