//! # Genesis Command Tests
//!
//! ## Test Categories
//!
//! 1. **Environment Contract** - defaults, overrides, derived variables
//! 2. **Payload** - embedded script shipped byte-for-byte, failures leave bundle intact
//! 3. **Config Files** - camelCase JSON maps onto the typed configuration

use std::io::{self, Read};

use svm_genesis::{
    genesis_assets, CreateCommand, Genesis, GenesisFlags, PrimordialEntry, GENESIS_SCRIPT,
    STEPS_SCRIPT,
};
use svm_runner::{is_valid_name, prepare, AssetError, AssetSource, Command, CommandError, Payload};

// =============================================================================
// TEST HELPERS
// =============================================================================

fn required_only() -> Genesis {
    Genesis::new(GenesisFlags::new(
        "/home/sol/ledger",
        "IdentityPubkey111",
        "VotePubkey111",
        "StakePubkey111",
        "FaucetPubkey111",
    ))
}

/// Asset source with nothing in it
struct MissingAssets;

impl AssetSource for MissingAssets {
    fn open(&self, name: &str) -> Result<Box<dyn Read + '_>, AssetError> {
        Err(AssetError::NotFound {
            name: name.to_string(),
        })
    }
}

/// Asset source whose script opens but cannot be read
struct TruncatedAssets;

struct BrokenReader;

impl Read for BrokenReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::InvalidData, "corrupt asset"))
    }
}

impl AssetSource for TruncatedAssets {
    fn open(&self, _name: &str) -> Result<Box<dyn Read + '_>, AssetError> {
        Ok(Box::new(BrokenReader))
    }
}

// =============================================================================
// ENVIRONMENT CONTRACT
// =============================================================================

#[test]
fn required_only_yields_defaults_and_empty_primordial_lists() {
    let env = required_only().create().env();

    assert_eq!(
        env.to_key_value_list(),
        vec![
            "LEDGER_PATH=/home/sol/ledger",
            "IDENTITY_PUBKEY=IdentityPubkey111",
            "VOTE_PUBKEY=VotePubkey111",
            "STAKE_PUBKEY=StakePubkey111",
            "FAUCET_PUBKEY=FaucetPubkey111",
            "FAUCET_LAMPORTS=1000",
            "TARGET_LAMPORTS_PER_SIGNATURE=0",
            "INFLATION=none",
            "LAMPORTS_PER_BYTE_YEAR=1",
            "SLOT_PER_EPOCH=150",
            "CLUSTER_TYPE=development",
            "PRIMORDIAL_PUBKEYS=''",
            "PRIMORDIAL_LAMPORTS=''",
        ]
    );
}

#[test]
fn empty_primordial_values_parse_as_empty_strings() {
    let env = required_only().create().env();

    for name in ["PRIMORDIAL_PUBKEYS", "PRIMORDIAL_LAMPORTS"] {
        let token = format!("{name}={}", env.get(name).unwrap());
        let words = shell_words::split(&token).unwrap();
        assert_eq!(words, vec![format!("{name}=")]);
    }
}

#[test]
fn primordial_table_is_joined_in_order() {
    let env = required_only()
        .with_primordial(vec![
            PrimordialEntry::new("A", "100"),
            PrimordialEntry::new("B", "200"),
        ])
        .create()
        .env();

    let list = env.to_key_value_list();
    assert!(list.contains(&"PRIMORDIAL_PUBKEYS=A,B".to_string()));
    assert!(list.contains(&"PRIMORDIAL_LAMPORTS=100,200".to_string()));
}

#[test]
fn inflation_override_replaces_only_its_default() {
    let base = required_only().create().env();

    let mut genesis = required_only();
    genesis.flags.inflation = Some("full".to_string());
    let env = genesis.create().env();

    assert_eq!(env.get("INFLATION"), Some("full"));
    for (name, value) in base.iter().filter(|(name, _)| *name != "INFLATION") {
        assert_eq!(env.get(name), Some(value), "{name} changed");
    }
    assert_eq!(env.len(), base.len());
}

#[test]
fn every_override_is_applied() {
    let genesis = Genesis::new(
        GenesisFlags::new("/l", "i", "v", "s", "f")
            .with_faucet_lamports("500")
            .with_target_lamports_per_signature("10000")
            .with_inflation("pico")
            .with_lamports_per_byte_year("3480")
            .with_slot_per_epoch("8192")
            .with_cluster_type("testnet"),
    );
    let env = genesis.create().env();

    assert_eq!(env.get("FAUCET_LAMPORTS"), Some("500"));
    assert_eq!(env.get("TARGET_LAMPORTS_PER_SIGNATURE"), Some("10000"));
    assert_eq!(env.get("INFLATION"), Some("pico"));
    assert_eq!(env.get("LAMPORTS_PER_BYTE_YEAR"), Some("3480"));
    assert_eq!(env.get("SLOT_PER_EPOCH"), Some("8192"));
    assert_eq!(env.get("CLUSTER_TYPE"), Some("testnet"));
}

#[test]
fn explicit_empty_override_differs_from_absent() {
    let mut genesis = required_only();
    genesis.flags.cluster_type = Some(String::new());
    let env = genesis.create().env();

    assert_eq!(env.get("CLUSTER_TYPE"), Some("''"));
}

#[test]
fn optional_variables_absent_unless_supplied() {
    let env = required_only().create().env();
    assert!(!env.contains("GENESIS_EXTRA_FLAGS"));
    assert!(!env.contains("PACKAGE_VERSION"));

    let mut genesis = required_only().with_version("1.18.26-1");
    genesis.flags.extra_flags = Some(vec!["--hashes-per-tick".into(), "sleep".into()]);
    let env = genesis.create().env();

    assert_eq!(env.get("PACKAGE_VERSION"), Some("1.18.26-1"));
    let token = format!("GENESIS_EXTRA_FLAGS={}", env.get("GENESIS_EXTRA_FLAGS").unwrap());
    assert_eq!(
        shell_words::split(&token).unwrap(),
        vec!["GENESIS_EXTRA_FLAGS=--hashes-per-tick sleep"]
    );
}

#[test]
fn every_emitted_name_is_a_shell_identifier() {
    let mut genesis = required_only()
        .with_version("1.18.26-1")
        .with_primordial(vec![PrimordialEntry::new("A", "1")]);
    genesis.flags.extra_flags = Some(vec!["--x".into()]);

    let env = genesis.create().env();

    assert_eq!(env.len(), 15);
    for name in env.names() {
        assert!(is_valid_name(name), "{name} is not a shell identifier");
    }
}

#[test]
fn hostile_ledger_path_is_quoted() {
    let mut genesis = required_only();
    genesis.flags.ledger_path = "/mnt/my ledger; rm -rf $HOME".to_string();
    let env = genesis.create().env();

    let token = &env.to_key_value_list()[0];
    assert_eq!(
        shell_words::split(token).unwrap(),
        vec!["LEDGER_PATH=/mnt/my ledger; rm -rf $HOME"]
    );
}

// =============================================================================
// CHECK
// =============================================================================

#[test]
fn check_rejects_missing_required_field() {
    let mut genesis = required_only();
    genesis.flags.faucet_pubkey.clear();

    let result = genesis.create().check();

    match result {
        Err(CommandError::InvalidConfig(msg)) => assert!(msg.contains("faucetPubkey")),
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn prepare_stops_before_payload_on_invalid_config() {
    let genesis = required_only().with_primordial(vec![PrimordialEntry::new("A,B", "1")]);

    assert!(matches!(
        prepare(&genesis.create()),
        Err(CommandError::InvalidConfig(_))
    ));
}

// =============================================================================
// PAYLOAD
// =============================================================================

#[test]
fn payload_contains_embedded_script_byte_for_byte() {
    let mut payload = Payload::new();

    required_only().create().add_to_payload(&mut payload).unwrap();

    assert_eq!(payload.len(), 1);
    let file = payload.get(STEPS_SCRIPT).unwrap();
    assert_eq!(file.contents, genesis_assets().get(GENESIS_SCRIPT).unwrap());
}

#[test]
fn missing_asset_fails_and_leaves_payload_unmodified() {
    let mut payload = Payload::new();
    payload.add_string("existing.txt", "keep me").unwrap();
    let before = payload.clone();

    let command = CreateCommand::with_assets(required_only(), &MissingAssets);
    let result = command.add_to_payload(&mut payload);

    assert!(matches!(result, Err(CommandError::Asset(AssetError::NotFound { .. }))));
    assert_eq!(payload, before);
}

#[test]
fn unreadable_asset_fails_and_leaves_payload_unmodified() {
    let mut payload = Payload::new();

    let command = CreateCommand::with_assets(required_only(), &TruncatedAssets);
    let result = command.add_to_payload(&mut payload);

    assert!(matches!(result, Err(CommandError::Payload(_))));
    assert!(payload.is_empty());
}

#[test]
fn prepare_produces_environment_and_single_script() {
    let prepared = prepare(&required_only().create()).unwrap();

    assert_eq!(prepared.env.len(), 13);
    assert_eq!(prepared.payload.len(), 1);
    assert!(prepared
        .invocation(STEPS_SCRIPT)
        .ends_with("PRIMORDIAL_LAMPORTS='' bash steps.sh"));
}

// =============================================================================
// CONFIG FILES
// =============================================================================

#[test]
fn config_json_round_trips_into_environment() {
    let json = r#"{
        "flags": {
            "ledgerPath": "/home/sol/ledger",
            "identityPubkey": "Id111",
            "votePubkey": "Vote111",
            "stakePubkey": "Stake111",
            "faucetPubkey": "Faucet111",
            "inflation": "full",
            "extraFlags": ["--max-genesis-archive-unpacked-size", "1073741824"]
        },
        "primordial": [
            { "pubkey": "A", "lamports": "100" },
            { "pubkey": "B", "lamports": "200" }
        ],
        "version": "1.18.26-1"
    }"#;

    let genesis: Genesis = serde_json::from_str(json).unwrap();
    let env = genesis.create().env();

    assert_eq!(genesis.flags.cluster_type, None);
    assert_eq!(env.get("INFLATION"), Some("full"));
    assert_eq!(env.get("CLUSTER_TYPE"), Some("development"));
    assert_eq!(env.get("PRIMORDIAL_PUBKEYS"), Some("A,B"));
    assert_eq!(env.get("PACKAGE_VERSION"), Some("1.18.26-1"));
}
