// ============================================================================
// avifbatch-cli/src/logging.rs
// ============================================================================
//
// LOGGING SETUP: Console and File Output via fern
//
// The core library only emits `log` records. This module installs the
// dispatcher that routes them:
//
// - Console: message only, colored by level. `info` by default, `debug`
//   with --verbose, `warn` with --json. Warnings and errors go to stderr,
//   the rest to stdout. With --json everything goes to stderr so stdout
//   carries only the report.
// - Log file: every record at `debug`, timestamped, ANSI codes stripped.
//
// AI-ASSISTANT-INFO: Logging setup and helper functions

use crate::error::{CliErrorContext, CliResult};
use crate::terminal;

use avifbatch_core::CoreError;
use log::{Level, LevelFilter};
use std::fs;
use std::path::{Path, PathBuf};

/// Returns the current local timestamp formatted as "YYYYMMDD_HHMMSS".
///
/// # Example
/// ```
/// let log_filename = format!("avifbatch_run_{}.log", avifbatch_cli::logging::get_timestamp());
/// assert!(log_filename.ends_with(".log"));
/// ```
pub fn get_timestamp() -> String {
    chrono::Local::now().format("%Y%m%d_%H%M%S").to_string()
}

/// Path of this run's log file inside `log_dir`.
pub fn log_file_path(log_dir: &Path) -> PathBuf {
    log_dir.join(format!("avifbatch_run_{}.log", get_timestamp()))
}

/// Whether a console record at `level` belongs on stderr.
pub fn routes_to_stderr(level: Level, stdout_reserved: bool) -> bool {
    stdout_reserved || level <= Level::Warn
}

/// Installs the global logger.
///
/// `stdout_reserved` sends every console record to stderr, for runs that
/// print machine-readable output on stdout. `log_file`, when given, is
/// created (along with its directory) and receives every record at debug
/// level.
pub fn setup_logging(
    console_level: LevelFilter,
    stdout_reserved: bool,
    log_file: Option<&Path>,
) -> CliResult<()> {
    let console = fern::Dispatch::new()
        .level(console_level)
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}",
                terminal::style_for_level(record.level(), &message.to_string())
            ))
        })
        .chain(
            fern::Dispatch::new()
                .filter(move |meta| routes_to_stderr(meta.level(), stdout_reserved))
                .chain(std::io::stderr()),
        )
        .chain(
            fern::Dispatch::new()
                .filter(move |meta| !routes_to_stderr(meta.level(), stdout_reserved))
                .chain(std::io::stdout()),
        );

    let mut dispatch = fern::Dispatch::new()
        .level(LevelFilter::Debug)
        .chain(console);

    if let Some(path) = log_file {
        if let Some(dir) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(dir).cli_with_context(|| {
                format!("Failed to create log directory '{}'", dir.display())
            })?;
        }
        let file = fern::log_file(path)
            .cli_with_context(|| format!("Failed to open log file '{}'", path.display()))?;

        let file_output = fern::Dispatch::new()
            .level(LevelFilter::Debug)
            .format(|out, message, record| {
                out.finish(format_args!(
                    "{} [{:<5}] {}",
                    chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                    record.level(),
                    strip_ansi_escapes::strip_str(message.to_string())
                ))
            })
            .chain(file);
        dispatch = dispatch.chain(file_output);
    }

    dispatch.apply().map_err(|e| {
        CoreError::OperationFailed(format!("Failed to initialize logging: {e}"))
    })
}
