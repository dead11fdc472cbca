//! # SVM Telemetry
//!
//! Structured logging for provisioning tools, built on `tracing-subscriber`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use svm_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     init_telemetry(&TelemetryConfig::from_env())?;
//!     tracing::info!("ready");
//!     Ok(())
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `OTEL_SERVICE_NAME` | `svm-provision` | Service name in logs |
//! | `SVM_LOG_LEVEL` | `info` | Log level filter (falls back to `RUST_LOG`) |
//! | `SVM_JSON_LOGS` | `false` | JSON output |
//! | `NO_COLOR` | unset | Disable ANSI colours |

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::build_filter;

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to install tracing subscriber: {0}")]
    SubscriberInit(String),
}

/// Initialize logging for the process.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    logging::init_logging(config)
}
