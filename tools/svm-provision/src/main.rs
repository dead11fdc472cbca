//! SVM Provision: operator CLI for genesis provisioning commands.

use anyhow::Result;
use clap::Parser;

use svm_provision::commands;
use svm_provision::{Action, Cli};
use svm_telemetry::{init_telemetry, TelemetryConfig};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = TelemetryConfig::from_env();
    if let Some(level) = &cli.log_level {
        config = config.with_log_level(level.clone());
    }
    if cli.json_logs {
        config = config.with_json_logs(true);
    }
    init_telemetry(&config)?;

    match cli.command {
        Action::Check(args) => {
            let genesis = commands::load_genesis(&args.config)?;
            commands::check(&genesis)?;
            println!("ok");
        }
        Action::Env { config, format } => {
            let genesis = commands::load_genesis(&config.config)?;
            println!("{}", commands::render_env(&genesis, format)?);
        }
        Action::Bundle { config, out } => {
            let genesis = commands::load_genesis(&config.config)?;
            commands::bundle(&genesis, &out)?;
            println!("{}", out.display());
        }
        Action::Invocation(args) => {
            let genesis = commands::load_genesis(&args.config)?;
            println!("{}", commands::invocation(&genesis)?);
        }
    }

    Ok(())
}
