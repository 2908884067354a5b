// ============================================================================
// avifbatch-core/src/external/encoder_executor.rs
// ============================================================================
//
// ENCODER EXECUTOR: Encoder Process Management and Abstraction
//
// This module provides abstractions for spawning the encoder executable and
// waiting for it. The child's stdout and stderr are inherited from the parent
// so encoder output shows up live, unbuffered, on the caller's console.
//
// KEY COMPONENTS:
// - EncoderProcess: Trait representing a running encoder
// - EncoderSpawner: Trait for starting encoder processes
// - CommandSpawner: Concrete implementation using std::process::Command
//
// No timeout is applied: a hung encoder blocks the batch until it exits.
//
// AI-ASSISTANT-INFO: Encoder process management and execution abstraction

use crate::error::{CoreResult, command_start_error, command_wait_error};
use crate::external::encoder_args::EncoderInvocation;
use std::process::{Child, Command, Stdio};

/// Exit code reported when the child was terminated without one (e.g. by a signal).
pub const NO_EXIT_CODE: i32 = -1;

// --- Encoder Execution Abstraction ---

/// Trait representing an active encoder process.
pub trait EncoderProcess {
    /// Blocks until the process exits and returns its exit code.
    fn wait(&mut self) -> CoreResult<i32>;
}

/// Trait representing something that can start an encoder process.
pub trait EncoderSpawner {
    type Process: EncoderProcess;

    /// Starts the encoder. Launch failures (missing binary, permissions) are errors here.
    fn spawn(&self, invocation: &EncoderInvocation) -> CoreResult<Self::Process>;
}

// --- Concrete Implementation using std::process ---

/// Wrapper around `std::process::Child` implementing `EncoderProcess`.
pub struct CommandProcess {
    name: String,
    child: Child,
}

impl EncoderProcess for CommandProcess {
    fn wait(&mut self) -> CoreResult<i32> {
        let status = self
            .child
            .wait()
            .map_err(|e| command_wait_error(self.name.clone(), e))?;
        Ok(status.code().unwrap_or(NO_EXIT_CODE))
    }
}

/// Spawns the encoder with inherited stdio.
#[derive(Debug, Clone, Default)]
pub struct CommandSpawner;

impl EncoderSpawner for CommandSpawner {
    type Process = CommandProcess;

    fn spawn(&self, invocation: &EncoderInvocation) -> CoreResult<Self::Process> {
        let name = invocation.program.display().to_string();
        crate::logging::log_invocation(invocation);

        let child = Command::new(&invocation.program)
            .args(&invocation.args)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| {
                log::error!("Failed to start encoder '{}': {}", name, e);
                command_start_error(name.clone(), e)
            })?;

        Ok(CommandProcess { name, child })
    }
}
