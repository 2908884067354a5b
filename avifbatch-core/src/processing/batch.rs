// ============================================================================
// avifbatch-core/src/processing/batch.rs
// ============================================================================
//
// BATCH SEQUENCER: Strictly Sequential Encode Orchestration
//
// Drives every file pair through the same three steps, one pair at a time and
// in input order:
//
//   1. Build the encoder invocation (creating the destination directory)
//   2. Run the encoder and wait for it
//   3. Evaluate the outcome and fold it into the batch totals
//
// STATE MACHINE:
//   Idle -> Running -> Completed
//                   -> Aborted   (first error of any kind)
//
// Every error is batch-fatal. Totals gathered before an abort are kept and
// returned alongside the error.
//
// AI-ASSISTANT-INFO: Sequential batch orchestration and fail-fast handling

// ---- Internal crate imports ----
use crate::config::EncodeConfig;
use crate::error::{CoreError, CoreResult, command_failed_error};
use crate::external::{EncoderProcess, EncoderSpawner, FileSystem, prepare_invocation};
use crate::file_pair::FilePair;
use crate::processing::outcome::{EncodeOutcome, evaluate_outcome};
use crate::processing::totals::BatchTotals;
use crate::reporting::BatchReport;

// ---- External crate imports ----
use log::{debug, error, info};
use serde::Serialize;
use thiserror::Error;

/// Lifecycle of one batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BatchState {
    Idle,
    Running,
    Completed,
    Aborted,
}

/// A batch that stopped early, with the totals gathered up to that point.
#[derive(Error, Debug)]
#[error("Batch aborted after {} file(s): {error}", .report.files_processed)]
pub struct BatchAborted {
    #[source]
    pub error: CoreError,
    pub report: BatchReport,
}

impl BatchAborted {
    /// The encoder's exit code, if the abort was caused by a failed encode.
    #[must_use]
    pub fn exit_code(&self) -> Option<i32> {
        self.error.exit_code()
    }
}

/// Runs file pairs through the encoder one at a time.
pub struct BatchSequencer<'a, S: EncoderSpawner, F: FileSystem> {
    spawner: &'a S,
    fs: &'a F,
    config: &'a EncodeConfig,
    totals: BatchTotals,
    state: BatchState,
}

impl<'a, S: EncoderSpawner, F: FileSystem> BatchSequencer<'a, S, F> {
    pub fn new(spawner: &'a S, fs: &'a F, config: &'a EncodeConfig) -> Self {
        Self {
            spawner,
            fs,
            config,
            totals: BatchTotals::new(),
            state: BatchState::Idle,
        }
    }

    #[must_use]
    pub fn state(&self) -> BatchState {
        self.state
    }

    #[must_use]
    pub fn totals(&self) -> &BatchTotals {
        &self.totals
    }

    /// Processes `pairs` in order, stopping at the first error.
    ///
    /// A sequencer runs once; calling `run` again is an error.
    pub fn run(&mut self, pairs: &[FilePair]) -> CoreResult<()> {
        if self.state != BatchState::Idle {
            return Err(CoreError::OperationFailed(format!(
                "Batch already {:?}; create a new sequencer for another batch",
                self.state
            )));
        }
        self.transition(BatchState::Running);

        for (index, pair) in pairs.iter().enumerate() {
            info!("Compressing ({}/{}): {}", index + 1, pairs.len(), pair.dest().display());
            if let Err(e) = self.process_pair(pair) {
                error!("Aborting batch at {}: {}", pair.display_name(), e);
                self.transition(BatchState::Aborted);
                return Err(e);
            }
        }

        self.transition(BatchState::Completed);
        Ok(())
    }

    fn process_pair(&mut self, pair: &FilePair) -> CoreResult<EncodeOutcome> {
        let invocation = prepare_invocation(self.fs, self.config, pair)?;

        let mut process = self.spawner.spawn(&invocation)?;
        let exit_code = process.wait()?;
        if exit_code != 0 {
            return Err(command_failed_error(self.config.encoder_name(), exit_code));
        }

        let outcome = evaluate_outcome(self.fs, self.config, pair, exit_code, &mut self.totals)?;
        debug!("Outcome for {}: {:?}", pair.display_name(), outcome);
        Ok(outcome)
    }

    fn transition(&mut self, next: BatchState) {
        debug!("Batch state: {:?} -> {:?}", self.state, next);
        self.state = next;
    }

    /// Consumes the sequencer and produces the report for its current totals.
    pub fn into_report(self) -> BatchReport {
        BatchReport::from_totals(&self.totals, self.state, self.config.delete_larger)
    }
}

/// Runs a whole batch and reports on it.
///
/// # Returns
///
/// * `Ok(BatchReport)` - Every pair was encoded and evaluated
/// * `Err(BatchAborted)` - The first error, plus a report of the files done before it
///
/// # Examples
///
/// ```rust,no_run
/// use avifbatch_core::{EncodeConfig, FilePair, process_batch};
/// use avifbatch_core::external::{CommandSpawner, StdFileSystem};
///
/// let config = EncodeConfig { quality: Some(30), ..Default::default() };
/// let pairs = vec![FilePair::new("img/cat.png", "dist/cat.avif")];
///
/// match process_batch(&CommandSpawner, &StdFileSystem, &config, &pairs) {
///     Ok(report) => println!("{}", report.summary_lines().join("\n")),
///     Err(aborted) => eprintln!("{aborted}"),
/// }
/// ```
pub fn process_batch<S: EncoderSpawner, F: FileSystem>(
    spawner: &S,
    fs: &F,
    config: &EncodeConfig,
    pairs: &[FilePair],
) -> Result<BatchReport, BatchAborted> {
    crate::logging::log_config(config);
    debug!("Starting batch of {} file(s)", pairs.len());

    let mut sequencer = BatchSequencer::new(spawner, fs, config);
    match sequencer.run(pairs) {
        Ok(()) => Ok(sequencer.into_report()),
        Err(error) => Err(BatchAborted {
            error,
            report: sequencer.into_report(),
        }),
    }
}
