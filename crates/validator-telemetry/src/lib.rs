//! # Validator Telemetry
//!
//! Logging bootstrap for processes embedding the validator core.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use validator_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() {
//!     init_telemetry(&TelemetryConfig::from_env()).expect("Failed to init telemetry");
//!     // Validator code runs here; every subsystem logs through `tracing`.
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `OTEL_SERVICE_NAME` | `validator-core` | Service name attached to logs |
//! | `VC_LOG_LEVEL` / `RUST_LOG` | `info` | Log level filter |
//! | `VC_JSON_LOGS` | `false` (`true` in containers) | JSON log lines |
//! | `VC_CONSOLE_OUTPUT` | `true` | Emit logs to stdout |

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::init_logging;

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Failed to initialize logging: {0}")]
    LoggingInit(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Initializes structured logging for the process.
///
/// Fails if a global subscriber is already installed.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    init_logging(config)?;
    tracing::info!(
        service = %config.service_name,
        json_logs = config.json_logs,
        "Telemetry initialized"
    );
    Ok(())
}
