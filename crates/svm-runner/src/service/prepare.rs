//! Prepare pipeline
//!
//! Drives a `Command` through check -> env -> payload and hands back what
//! the transport layer ships to the host.

use tracing::{debug, info, warn};

use crate::domain::{join, EnvBuilder, Payload};
use crate::error::CommandError;
use crate::ports::Command;

/// Environment and payload for one remote-execution attempt
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreparedCommand {
    pub env: EnvBuilder,
    pub payload: Payload,
}

impl PreparedCommand {
    /// Command line the remote executor runs from the payload root.
    ///
    /// `env NAME=value ... bash <entrypoint>`, or just `bash <entrypoint>`
    /// when the environment is empty.
    pub fn invocation(&self, entrypoint: &str) -> String {
        let script = join(["bash", entrypoint]);
        if self.env.is_empty() {
            script
        } else {
            format!("env {} {}", self.env.to_environment_string(), script)
        }
    }
}

/// Run `command` through validation, environment and payload construction.
///
/// Stops at the first failure; nothing is built for a command that fails
/// its check.
pub fn prepare(command: &dyn Command) -> Result<PreparedCommand, CommandError> {
    let name = command.name();

    if let Err(err) = command.check() {
        warn!(command = name, error = %err, "Command rejected by check");
        return Err(err);
    }

    let env = command.env();
    debug!(command = name, variables = env.len(), "Built command environment");

    let mut payload = Payload::new();
    command.add_to_payload(&mut payload)?;

    info!(
        command = name,
        variables = env.len(),
        files = payload.len(),
        "Prepared command"
    );

    Ok(PreparedCommand { env, payload })
}
