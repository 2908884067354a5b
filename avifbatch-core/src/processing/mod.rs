//! Core batch processing logic and orchestration.
//!
//! This module organizes the per-batch steps into submodules: the sequencer
//! that drives encodes one at a time, the outcome evaluator that measures each
//! result, and the running totals both of them share.

/// Sequential batch orchestration
pub mod batch;

/// Per-file size comparison and keep/delete decisions
pub mod outcome;

/// Running byte totals
pub mod totals;

pub use batch::{BatchAborted, BatchSequencer, BatchState, process_batch};
pub use outcome::{EncodeOutcome, ReferenceOutcome, SizeComparison, compare_sizes, evaluate_outcome};
pub use totals::BatchTotals;
