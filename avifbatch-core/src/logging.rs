//! Logging helpers shared by the batch engine.
//!
//! The core only emits records through the `log` facade; installing a logger
//! (console, file) is left to the binary.

use crate::config::EncodeConfig;
use crate::external::EncoderInvocation;

use log::debug;

/// Logs the full encoder command line at debug level.
pub fn log_invocation(invocation: &EncoderInvocation) {
    debug!("Running: {}", invocation.command_line());
}

/// Dumps the effective options, one per line, at debug level.
pub fn log_config(config: &EncodeConfig) {
    debug!("Options:");
    debug!("  binpath: {}", config.binpath.display());
    debug!("  mode: {:?}", config.mode);
    debug!("  quality: {}", display_opt(config.quality));
    debug!("  speed: {}", display_opt(config.speed));
    debug!("  deleteLarger: {}", config.delete_larger);
    debug!(
        "  deleteLargerWebp: {} (.{})",
        config.delete_larger_than_reference, config.reference_extension
    );
    debug!("  accounting: {:?}", config.accounting);
}

fn display_opt(value: Option<i32>) -> String {
    value.map_or_else(|| "unset".to_string(), |v| v.to_string())
}
