//! Utility functions for size arithmetic and formatting.
//!
//! This module provides the percentage math shared by the outcome evaluator
//! and the report aggregator, plus human-readable byte formatting.

/// Rounds to two decimal places (half away from zero).
#[must_use]
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Signed percentage by which `output` is smaller than `baseline`, rounded to
/// two decimals. Negative means `output` is larger.
///
/// Returns `None` when `baseline` is zero.
#[must_use]
pub fn percent_smaller(baseline: u64, output: u64) -> Option<f64> {
    if baseline == 0 {
        return None;
    }
    let baseline_f = baseline as f64;
    let delta = (baseline_f - output as f64) / baseline_f * 100.0;
    Some(round_to_hundredths(delta))
}

/// Formats bytes with appropriate binary units (B, KiB, MiB, GiB).
#[must_use]
pub fn format_bytes(bytes: u64) -> String {
    const KIB: f64 = 1024.0;
    const MIB: f64 = KIB * 1024.0;
    const GIB: f64 = MIB * 1024.0;

    let bytes_f64 = bytes as f64;
    if bytes_f64 >= GIB {
        format!("{:.2} GiB", bytes_f64 / GIB)
    } else if bytes_f64 >= MIB {
        format!("{:.2} MiB", bytes_f64 / MIB)
    } else if bytes_f64 >= KIB {
        format!("{:.2} KiB", bytes_f64 / KIB)
    } else {
        format!("{bytes} B")
    }
}

/// Formats a percentage with two decimals, e.g. `20.00`.
#[must_use]
pub fn format_percent(value: f64) -> String {
    format!("{value:.2}")
}
