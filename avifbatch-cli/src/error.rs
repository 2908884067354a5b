// ============================================================================
// avifbatch-cli/src/error.rs
// ============================================================================
//
// CLI ERROR HANDLING: Error types and utilities for the CLI
//
// This module provides error handling utilities for the CLI that integrate
// with the avifbatch-core error types while adding CLI-specific context and
// the mapping from errors to process exit codes.
//
// AI-ASSISTANT-INFO: CLI error handling utilities

// ---- Internal crate imports ----
use avifbatch_core::{CoreError, CoreResult};

// ---- Standard library imports ----
use std::fmt;

/// Type alias for CLI results using CoreError.
pub type CliResult<T> = CoreResult<T>;

/// Exit code used for every failure that did not come from the encoder.
pub const GENERIC_FAILURE_EXIT_CODE: i32 = 1;

/// Extension trait for adding context to errors in the CLI.
pub trait CliErrorContext<T> {
    /// Add context to an error.
    fn cli_context<C>(self, context: C) -> CliResult<T>
    where
        C: fmt::Display;

    /// Add context using a closure (for lazy evaluation).
    fn cli_with_context<C, F>(self, f: F) -> CliResult<T>
    where
        C: fmt::Display,
        F: FnOnce() -> C;
}

impl<T, E> CliErrorContext<T> for Result<T, E>
where
    E: Into<CoreError>,
{
    fn cli_context<C>(self, context: C) -> CliResult<T>
    where
        C: fmt::Display,
    {
        self.map_err(|e| {
            let core_error: CoreError = e.into();
            CoreError::OperationFailed(format!("{context}: {core_error}"))
        })
    }

    fn cli_with_context<C, F>(self, f: F) -> CliResult<T>
    where
        C: fmt::Display,
        F: FnOnce() -> C,
    {
        self.map_err(|e| {
            let core_error: CoreError = e.into();
            CoreError::OperationFailed(format!("{}: {}", f(), core_error))
        })
    }
}

/// Process exit code for a failed run.
///
/// A failed encode propagates the encoder's own code (kept within 1-255 so
/// it never reads as success); anything else exits with 1.
pub fn exit_code_for(error: &CoreError) -> i32 {
    error
        .exit_code()
        .map_or(GENERIC_FAILURE_EXIT_CODE, |code| code.clamp(1, 255))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_exit_code_propagates_encoder_code() {
        let err = CoreError::CommandFailed {
            command: "avif".to_string(),
            code: 3,
        };
        assert_eq!(exit_code_for(&err), 3);
    }

    #[test]
    fn test_exit_code_is_clamped() {
        let signalled = CoreError::CommandFailed {
            command: "avif".to_string(),
            code: -1,
        };
        assert_eq!(exit_code_for(&signalled), 1);

        let huge = CoreError::CommandFailed {
            command: "avif".to_string(),
            code: 300,
        };
        assert_eq!(exit_code_for(&huge), 255);
    }

    #[test]
    fn test_other_errors_exit_with_one() {
        assert_eq!(exit_code_for(&CoreError::NoFilesFound), 1);
        assert_eq!(
            exit_code_for(&CoreError::Config("bad".to_string())),
            GENERIC_FAILURE_EXIT_CODE
        );
    }

    #[test]
    fn test_cli_context_wraps_message() {
        let result: Result<(), io::Error> = Err(io::Error::other("disk full"));
        let err = result.cli_context("Failed to create log directory").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed to create log directory: IO error: disk full"
        );
    }
}
