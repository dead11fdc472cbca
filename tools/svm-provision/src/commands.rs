//! Subcommand implementations
//!
//! Each function returns what would be printed so it can be tested without
//! capturing stdout.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use svm_genesis::{Genesis, STEPS_SCRIPT};
use svm_runner::{prepare, Command, EnvBuilder, PreparedCommand};
use tracing::info;

use crate::cli::EnvFormat;

/// File holding one `NAME=value` per line next to the payload
pub const ENV_FILE: &str = "env";

/// Read a camelCase JSON genesis configuration.
pub fn load_genesis(path: &Path) -> Result<Genesis> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let genesis: Genesis = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    Ok(genesis)
}

pub fn check(genesis: &Genesis) -> Result<()> {
    genesis.create().check().context("genesis configuration is invalid")?;
    info!(ledger = %genesis.flags.ledger_path, "Genesis configuration is valid");
    Ok(())
}

/// Validated environment in the requested layout.
pub fn render_env(genesis: &Genesis, format: EnvFormat) -> Result<String> {
    let command = genesis.create();
    command.check().context("genesis configuration is invalid")?;
    let env = command.env();

    Ok(match format {
        EnvFormat::Lines => env_lines(&env),
        EnvFormat::Inline => env.to_environment_string(),
        EnvFormat::Json => serde_json::to_string_pretty(&env)?,
    })
}

/// Prepare the command and write its payload plus an `env` file under `out`.
pub fn bundle(genesis: &Genesis, out: &Path) -> Result<PreparedCommand> {
    let prepared = prepare(&genesis.create()).context("failed to prepare genesis command")?;

    fs::create_dir_all(out).with_context(|| format!("failed to create {}", out.display()))?;
    prepared
        .payload
        .write_to_dir(out)
        .context("failed to write payload")?;

    let env_path = out.join(ENV_FILE);
    let mut contents = env_lines(&prepared.env);
    contents.push('\n');
    fs::write(&env_path, contents)
        .with_context(|| format!("failed to write {}", env_path.display()))?;

    info!(
        out = %out.display(),
        files = prepared.payload.len(),
        variables = prepared.env.len(),
        "Wrote bundle"
    );
    Ok(prepared)
}

/// Command line the remote host runs from the payload root.
pub fn invocation(genesis: &Genesis) -> Result<String> {
    let prepared = prepare(&genesis.create()).context("failed to prepare genesis command")?;
    Ok(prepared.invocation(STEPS_SCRIPT))
}

fn env_lines(env: &EnvBuilder) -> String {
    env.to_key_value_list().join("\n")
}
