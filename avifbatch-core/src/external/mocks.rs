// avifbatch-core/src/external/mocks.rs

// --- Mocking Infrastructure (for testing) ---

// This module is only compiled when the "test-mocks" feature is enabled.

use super::encoder_args::EncoderInvocation;
use super::encoder_executor::{EncoderProcess, EncoderSpawner};
use crate::error::{CoreResult, command_start_error};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;

/// Scripted behaviour for one mocked encoder run.
#[derive(Debug, Clone)]
pub enum MockEncode {
    /// Exit 0, writing an output of `output_size` bytes to the `-o` path if given.
    Success { output_size: Option<u64> },
    /// Exit with a non-zero code and write nothing.
    Exit { code: i32 },
    /// Fail to launch at all.
    LaunchError(io::ErrorKind),
}

/// Mock implementation of EncoderProcess.
#[derive(Debug, Clone)]
pub struct MockEncoderProcess {
    pub exit_code: i32,
}

impl EncoderProcess for MockEncoderProcess {
    fn wait(&mut self) -> CoreResult<i32> {
        Ok(self.exit_code)
    }
}

/// Mock implementation of EncoderSpawner that plays back scripted runs in order.
///
/// Once the script is exhausted every further run succeeds without writing output.
#[derive(Clone, Default)]
pub struct MockEncoderSpawner {
    script: Rc<RefCell<VecDeque<MockEncode>>>,
    received_calls: Rc<RefCell<Vec<EncoderInvocation>>>,
}

impl MockEncoderSpawner {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn push(&self, run: MockEncode) -> &Self {
        self.script.borrow_mut().push_back(run);
        self
    }

    /// Next run succeeds and leaves an output of `output_size` bytes.
    pub fn add_success(&self, output_size: u64) -> &Self {
        self.push(MockEncode::Success {
            output_size: Some(output_size),
        })
    }

    /// Next run exits with `code`.
    pub fn add_exit_error(&self, code: i32) -> &Self {
        self.push(MockEncode::Exit { code })
    }

    pub fn add_launch_error(&self, kind: io::ErrorKind) -> &Self {
        self.push(MockEncode::LaunchError(kind))
    }

    pub fn get_received_calls(&self) -> Vec<EncoderInvocation> {
        self.received_calls.borrow().clone()
    }

    /// Argument lists of every received call, as strings.
    pub fn get_received_args(&self) -> Vec<Vec<String>> {
        self.received_calls
            .borrow()
            .iter()
            .map(EncoderInvocation::args_lossy)
            .collect()
    }
}

fn output_path(invocation: &EncoderInvocation) -> Option<PathBuf> {
    invocation
        .args
        .iter()
        .position(|arg| arg == "-o")
        .and_then(|idx| invocation.args.get(idx + 1))
        .map(PathBuf::from)
}

impl EncoderSpawner for MockEncoderSpawner {
    type Process = MockEncoderProcess;

    fn spawn(&self, invocation: &EncoderInvocation) -> CoreResult<Self::Process> {
        self.received_calls.borrow_mut().push(invocation.clone());

        let run = self
            .script
            .borrow_mut()
            .pop_front()
            .unwrap_or(MockEncode::Success { output_size: None });

        match run {
            MockEncode::Success { output_size } => {
                if let (Some(size), Some(path)) = (output_size, output_path(invocation)) {
                    log::debug!("Mock encoder writing {} bytes to {}", size, path.display());
                    let len = usize::try_from(size).map_err(|_| {
                        io::Error::new(io::ErrorKind::InvalidInput, "mock output too large")
                    })?;
                    fs::write(&path, vec![0u8; len])?;
                }
                Ok(MockEncoderProcess { exit_code: 0 })
            }
            MockEncode::Exit { code } => Ok(MockEncoderProcess { exit_code: code }),
            MockEncode::LaunchError(kind) => Err(command_start_error(
                invocation.program.display().to_string(),
                io::Error::new(kind, "mock launch failure"),
            )),
        }
    }
}
