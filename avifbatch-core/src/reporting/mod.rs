//! Batch-level reporting.
//!
//! Turns the sequencer's totals into the final report: byte totals, percent
//! saved and the oversized-output notice.

pub mod summary;

pub use summary::{BatchReport, percent_saved};
