// ============================================================================
// avifbatch-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Core Error Types and Constructors
//
// Every error in this crate is batch-fatal: the sequencer stops at the first
// one and hands it to the caller together with the totals gathered so far.
//
// KEY COMPONENTS:
// - CoreError: All failure kinds (configuration, launch, exit, filesystem)
// - CoreResult: Crate-wide result alias
// - Helper constructors mirroring the external-command call sites
//
// AI-ASSISTANT-INFO: Error types for the avifbatch core library

// ---- External crate imports ----
use thiserror::Error;

// ---- Standard library imports ----
use std::io;
use std::path::{Path, PathBuf};

/// Errors produced by the batch engine.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Quality/speed out of range or otherwise unusable settings.
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Required encoder '{0}' not found. Check the binpath setting or PATH.")]
    DependencyNotFound(String),

    #[error("Failed to start command '{0}': {1}")]
    CommandStart(String, #[source] io::Error),

    #[error("Failed waiting for command '{0}': {1}")]
    CommandWait(String, #[source] io::Error),

    /// The encoder ran but exited with a non-zero code.
    #[error("Command '{command}' failed with exit code {code}")]
    CommandFailed { command: String, code: i32 },

    #[error("Filesystem error on '{}': {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No processable image files found")]
    NoFilesFound,

    #[error("Path error: {0}")]
    PathError(String),

    #[error("{0}")]
    OperationFailed(String),
}

impl CoreError {
    /// The encoder's exit code, when this error came from a failed encode.
    #[must_use]
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            CoreError::CommandFailed { code, .. } => Some(*code),
            _ => None,
        }
    }
}

/// Result type for avifbatch-core operations.
pub type CoreResult<T> = Result<T, CoreError>;

// ============================================================================
// HELPER CONSTRUCTORS
// ============================================================================

pub fn command_start_error(command: impl Into<String>, source: io::Error) -> CoreError {
    let command = command.into();
    if source.kind() == io::ErrorKind::NotFound {
        CoreError::DependencyNotFound(command)
    } else {
        CoreError::CommandStart(command, source)
    }
}

pub fn command_wait_error(command: impl Into<String>, source: io::Error) -> CoreError {
    CoreError::CommandWait(command.into(), source)
}

pub fn command_failed_error(command: impl Into<String>, code: i32) -> CoreError {
    CoreError::CommandFailed {
        command: command.into(),
        code,
    }
}

pub fn filesystem_error(path: &Path, source: io::Error) -> CoreError {
    CoreError::Filesystem {
        path: path.to_path_buf(),
        source,
    }
}
