//! Command-line arguments

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// SVM Provision: prepare genesis provisioning payloads
#[derive(Parser, Debug)]
#[command(name = "svm-provision")]
#[command(about = "Check, render and bundle genesis provisioning commands", version)]
pub struct Cli {
    /// Log filter (overrides SVM_LOG_LEVEL / RUST_LOG)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Action,
}

#[derive(Subcommand, Debug)]
pub enum Action {
    /// Validate a genesis configuration file
    Check(ConfigArgs),

    /// Print the environment the genesis script runs with
    Env {
        #[command(flatten)]
        config: ConfigArgs,

        /// Output layout
        #[arg(long, value_enum, default_value_t = EnvFormat::Lines)]
        format: EnvFormat,
    },

    /// Write the payload files and an `env` file into a directory
    Bundle {
        #[command(flatten)]
        config: ConfigArgs,

        /// Output directory (created if missing)
        #[arg(short, long)]
        out: PathBuf,
    },

    /// Print the command line the remote host runs
    Invocation(ConfigArgs),
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Genesis configuration (JSON, camelCase fields)
    #[arg(short, long, env = "SVM_GENESIS_CONFIG")]
    pub config: PathBuf,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnvFormat {
    /// One `NAME=value` per line
    Lines,
    /// All assignments on one line
    Inline,
    /// Ordered JSON object of quoted values
    Json,
}
