// ============================================================================
// avifbatch-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL INTERACTIONS: Encoder Executable and File System
//
// This module encapsulates everything the batch engine touches outside its own
// memory: the encoder executable and the filesystem. Both sit behind traits
// so the sequencer can be driven by mocks in tests.
//
// KEY COMPONENTS:
// - Argument builder for the encoder command line
// - Traits for encoder execution (EncoderSpawner, EncoderProcess)
// - FileSystem trait for size lookups, deletions and directory creation
//
// AI-ASSISTANT-INFO: External tool interactions and filesystem abstraction

// ---- Internal crate imports ----
use crate::error::{CoreResult, filesystem_error};

// ---- Standard library imports ----
use std::path::Path;

// ============================================================================
// SUBMODULES
// ============================================================================

/// Builds encoder argument lists from the batch configuration
pub mod encoder_args;

/// Traits and implementations for running the encoder
pub mod encoder_executor;

/// Test doubles for the traits in this module
#[cfg(feature = "test-mocks")]
pub mod mocks;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use encoder_args::{EncoderInvocation, build_encoder_args, prepare_invocation};
pub use encoder_executor::{CommandProcess, CommandSpawner, EncoderProcess, EncoderSpawner};

// ============================================================================
// FILE SYSTEM ACCESS
// ============================================================================

/// Trait for abstracting the filesystem operations the engine performs.
///
/// # Examples
///
/// ```rust
/// use avifbatch_core::external::{FileSystem, StdFileSystem};
/// use std::path::Path;
///
/// let fs = StdFileSystem;
/// assert!(fs.get_size(Path::new("/surely/missing/file.png")).is_err());
/// ```
pub trait FileSystem {
    /// Gets the size of the file at the given path in bytes.
    fn get_size(&self, path: &Path) -> CoreResult<u64>;

    /// Removes the file at the given path.
    fn remove_file(&self, path: &Path) -> CoreResult<()>;

    /// Creates a directory and its parents; an existing directory is not an error.
    fn ensure_dir(&self, path: &Path) -> CoreResult<()>;
}

/// Standard implementation of FileSystem using `std::fs`.
#[derive(Debug, Clone, Default)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn get_size(&self, path: &Path) -> CoreResult<u64> {
        std::fs::metadata(path)
            .map(|meta| meta.len())
            .map_err(|e| filesystem_error(path, e))
    }

    fn remove_file(&self, path: &Path) -> CoreResult<()> {
        std::fs::remove_file(path).map_err(|e| filesystem_error(path, e))
    }

    fn ensure_dir(&self, path: &Path) -> CoreResult<()> {
        std::fs::create_dir_all(path).map_err(|e| filesystem_error(path, e))
    }
}
