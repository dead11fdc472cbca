//! Command port
//!
//! A configuration object hands out a `Command` describing the environment
//! its remote script needs and the files that script depends on.

use crate::domain::{EnvBuilder, Payload};
use crate::error::CommandError;

/// Descriptor for one remote-execution attempt.
///
/// Callers invoke `check`, then `env`, then `add_to_payload`. Implementations
/// hold no mutable state; each call is idempotent and only writes into the
/// payload it is given.
pub trait Command {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Validate the wrapped configuration before anything is built
    fn check(&self) -> Result<(), CommandError>;

    /// Build the ordered environment for the remote script
    fn env(&self) -> EnvBuilder;

    /// Register the script(s) this command depends on.
    ///
    /// On error the payload must be left as it was.
    fn add_to_payload(&self, payload: &mut Payload) -> Result<(), CommandError>;
}
