// ============================================================================
// avifbatch-core/src/processing/outcome.rs
// ============================================================================
//
// OUTCOME EVALUATION: Per-File Size Comparison and Keep/Delete Decision
//
// Runs after an encoder exits with code 0. Compares the output against its
// source (and optionally against a sibling reference file), deletes oversized
// outputs when configured to, and folds the sizes into the batch totals.
//
// CLASSIFICATION:
// The delta is rounded to two decimals before its sign is checked, so an
// output that grew by less than 0.005% still counts as "smaller".
//
// AI-ASSISTANT-INFO: Per-file size comparison and output retention policy

// ---- Internal crate imports ----
use crate::config::{Accounting, EncodeConfig};
use crate::error::CoreResult;
use crate::external::FileSystem;
use crate::file_pair::FilePair;
use crate::processing::totals::BatchTotals;
use crate::utils::{format_percent, percent_smaller};

// ---- External crate imports ----
use log::{info, warn};

// ---- Standard library imports ----
use std::path::PathBuf;

/// Result of comparing an output against a baseline file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeComparison {
    pub baseline_bytes: u64,
    pub output_bytes: u64,
    /// Magnitude of the rounded delta, always >= 0
    pub delta_percent: f64,
    /// True when the rounded delta was negative
    pub oversized: bool,
}

/// Compares `output` against `baseline`.
///
/// A zero-byte baseline yields a delta of 0 and counts as oversized only if
/// the output has any bytes at all.
#[must_use]
pub fn compare_sizes(baseline_bytes: u64, output_bytes: u64) -> SizeComparison {
    let (delta_percent, oversized) = match percent_smaller(baseline_bytes, output_bytes) {
        Some(delta) => (delta.abs(), delta < 0.0),
        None => (0.0, output_bytes > 0),
    };
    SizeComparison {
        baseline_bytes,
        output_bytes,
        delta_percent,
        oversized,
    }
}

/// Outcome of the comparison against the sibling reference file.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceOutcome {
    pub reference_path: PathBuf,
    pub reference_bytes: u64,
    pub delta_percent: f64,
    pub oversized: bool,
    pub deleted: bool,
}

/// Per-file result of a successful encode.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodeOutcome {
    pub exit_code: i32,
    pub source_bytes: u64,
    /// Output size, or `None` if the output was deleted
    pub dest_bytes: Option<u64>,
    pub delta_percent: f64,
    pub oversized: bool,
    pub deleted: bool,
    pub reference: Option<ReferenceOutcome>,
}

/// Measures one finished encode and folds it into `totals`.
///
/// # Errors
///
/// * `CoreError::Filesystem` - If the source, output or reference file cannot be
///   stat'd, or an oversized output cannot be deleted
pub fn evaluate_outcome<F: FileSystem>(
    fs: &F,
    config: &EncodeConfig,
    pair: &FilePair,
    exit_code: i32,
    totals: &mut BatchTotals,
) -> CoreResult<EncodeOutcome> {
    let legacy = config.accounting == Accounting::Legacy;

    let source_bytes = fs.get_size(pair.primary_source())?;
    let dest_bytes = fs.get_size(pair.dest())?;
    let primary = compare_sizes(source_bytes, dest_bytes);
    let pct = format_percent(primary.delta_percent);

    totals.add_source(source_bytes);
    let mut deleted = false;

    if primary.oversized {
        totals.record_oversized();
        if legacy {
            totals.add_source(source_bytes);
        }
        if config.delete_larger {
            fs.remove_file(pair.dest())?;
            deleted = true;
            warn!("Deleted: {pct}% larger than its source. ({})", pair.dest().display());
        } else {
            totals.add_kept(dest_bytes);
            warn!(
                "Warning: {pct}% larger than its source. Left undeleted. ({})",
                pair.dest().display()
            );
        }
    } else {
        totals.add_kept(dest_bytes);
        info!("Done: {pct}% smaller | {source_bytes} -> {dest_bytes}");
    }

    let reference = if config.delete_larger_than_reference && !deleted {
        let reference = compare_with_reference(fs, config, pair, dest_bytes, totals)?;
        deleted = reference.deleted;
        Some(reference)
    } else {
        None
    };

    totals.record_processed();

    Ok(EncodeOutcome {
        exit_code,
        source_bytes,
        dest_bytes: (!deleted).then_some(dest_bytes),
        delta_percent: primary.delta_percent,
        oversized: primary.oversized,
        deleted,
        reference,
    })
}

/// Second pass: the kept output against `<dest>.<reference_extension>`.
fn compare_with_reference<F: FileSystem>(
    fs: &F,
    config: &EncodeConfig,
    pair: &FilePair,
    dest_bytes: u64,
    totals: &mut BatchTotals,
) -> CoreResult<ReferenceOutcome> {
    let legacy = config.accounting == Accounting::Legacy;
    let ext = config.reference_extension.trim_start_matches('.');
    let reference_path = pair.reference_path(ext);

    let reference_bytes = fs.get_size(&reference_path)?;
    let comparison = compare_sizes(reference_bytes, dest_bytes);
    let pct = format_percent(comparison.delta_percent);

    totals.add_reference(reference_bytes);
    let mut deleted = false;

    if comparison.oversized {
        totals.record_oversized();
        if legacy {
            totals.add_source(reference_bytes);
        }
        if config.delete_larger {
            fs.remove_file(pair.dest())?;
            deleted = true;
            if !legacy {
                totals.remove_kept(dest_bytes);
            }
            warn!(
                "Deleted: {pct}% larger than its {ext} counterpart. ({})",
                pair.dest().display()
            );
        } else {
            if legacy {
                totals.add_kept(dest_bytes);
            }
            warn!(
                "Warning: {pct}% larger than its {ext} counterpart. Left undeleted. ({})",
                pair.dest().display()
            );
        }
    } else {
        if legacy {
            totals.add_kept(dest_bytes);
        }
        info!("Done: {ext} comparison: {pct}% smaller | {reference_bytes} -> {dest_bytes}");
    }

    Ok(ReferenceOutcome {
        reference_path,
        reference_bytes,
        delta_percent: comparison.delta_percent,
        oversized: comparison.oversized,
        deleted,
    })
}
