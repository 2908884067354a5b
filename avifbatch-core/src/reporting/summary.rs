//! Summary reporting module
//!
//! This module computes the batch-wide statistics once the sequencer has
//! finished (or aborted) and renders them as plain text lines. Styling of
//! those lines is up to the caller.

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::processing::batch::BatchState;
use crate::processing::totals::BatchTotals;
use crate::utils::{format_percent, percent_smaller};

/// Percentage of source bytes saved, rounded to two decimals.
///
/// Returns `None` when nothing was measured, in which case there is no
/// savings figure to report.
#[must_use]
pub fn percent_saved(source_total: u64, dest_total: u64) -> Option<f64> {
    percent_smaller(source_total, dest_total)
}

/// Final statistics for one batch.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    /// State the batch ended in
    pub state: BatchState,

    pub files_processed: usize,

    /// Source bytes considered
    pub source_bytes: u64,

    /// Bytes of outputs kept on disk
    pub dest_bytes: u64,

    /// Bytes of reference files compared against
    pub reference_bytes: u64,

    pub oversized_count: usize,

    /// `None` when no source bytes were recorded
    pub percent_saved: Option<f64>,

    /// Whether oversized outputs were deleted (otherwise they were kept with a warning)
    pub delete_larger: bool,

    pub completed_at: DateTime<Local>,
}

impl BatchReport {
    /// Builds the report from the accumulated totals.
    pub fn from_totals(totals: &BatchTotals, state: BatchState, delete_larger: bool) -> Self {
        Self {
            state,
            files_processed: totals.files_processed,
            source_bytes: totals.source_bytes,
            dest_bytes: totals.dest_bytes,
            reference_bytes: totals.reference_bytes,
            oversized_count: totals.oversized_count,
            percent_saved: percent_saved(totals.source_bytes, totals.dest_bytes),
            delete_larger,
            completed_at: Local::now(),
        }
    }

    /// Bytes saved; negative when the kept outputs outweigh the sources.
    #[must_use]
    pub fn saved_bytes(&self) -> i128 {
        i128::from(self.source_bytes) - i128::from(self.dest_bytes)
    }

    /// Line describing oversized outputs, if there were any.
    #[must_use]
    pub fn oversized_notice(&self) -> Option<String> {
        match (self.oversized_count, self.delete_larger) {
            (0, _) => None,
            (count, true) => Some(format!("Deleted {count} file(s) due to larger output.")),
            (count, false) => Some(format!(
                "Warning: Contains {count} file(s) larger than their sources."
            )),
        }
    }

    /// The report as plain text lines.
    #[must_use]
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = vec![format!("{} -> {}", self.source_bytes, self.dest_bytes)];
        if let Some(pct) = self.percent_saved {
            lines.push(format!("{}% saved.", format_percent(pct)));
        }
        if let Some(notice) = self.oversized_notice() {
            lines.push(notice);
        }
        lines
    }
}
