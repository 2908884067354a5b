//! Running byte totals for one batch.

use serde::Serialize;

/// Accumulator owned by the batch sequencer and folded into once per file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchTotals {
    /// Source bytes considered (see `Accounting` for what gets added)
    pub source_bytes: u64,
    /// Bytes of outputs that were kept
    pub dest_bytes: u64,
    /// Bytes of reference files the outputs were compared against
    pub reference_bytes: u64,
    /// Outputs found larger than their source or reference
    pub oversized_count: usize,
    /// Files whose outcome was evaluated
    pub files_processed: usize,
}

impl BatchTotals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_source(&mut self, bytes: u64) {
        self.source_bytes = self.source_bytes.saturating_add(bytes);
    }

    pub fn add_kept(&mut self, bytes: u64) {
        self.dest_bytes = self.dest_bytes.saturating_add(bytes);
    }

    /// Takes back bytes previously counted as kept, when that output is deleted later.
    pub fn remove_kept(&mut self, bytes: u64) {
        self.dest_bytes = self.dest_bytes.saturating_sub(bytes);
    }

    pub fn add_reference(&mut self, bytes: u64) {
        self.reference_bytes = self.reference_bytes.saturating_add(bytes);
    }

    pub fn record_oversized(&mut self) {
        self.oversized_count += 1;
    }

    pub fn record_processed(&mut self) {
        self.files_processed += 1;
    }
}
