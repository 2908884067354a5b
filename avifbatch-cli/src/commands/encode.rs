//! Implementation of the 'encode' subcommand.
//!
//! This module gathers the file pairs (from a manifest or by discovery),
//! layers the configuration, hands both to avifbatch-core and prints the
//! batch report.

use crate::cli::EncodeArgs;
use crate::config::build_encode_config;
use crate::error::CliResult;
use crate::terminal;

use avifbatch_core::config::EncodeMode;
use avifbatch_core::external::{CommandSpawner, EncoderSpawner, FileSystem, StdFileSystem};
use avifbatch_core::{
    BatchReport, CoreError, EncodeConfig, FilePair, discover_file_pairs, format_bytes,
    load_manifest, process_batch,
};

use log::{Level, debug, info, warn};

/// Collects the file pairs for this run.
///
/// An input directory without any supported images is not an error; the
/// batch simply has nothing to do.
pub fn collect_file_pairs(args: &EncodeArgs) -> CliResult<Vec<FilePair>> {
    if let Some(manifest) = &args.manifest {
        return load_manifest(manifest);
    }

    let input_path = args.input_path.as_deref().ok_or_else(|| {
        CoreError::OperationFailed("Either --input or --manifest is required".to_string())
    })?;
    let output_dir = args.output_dir.as_deref().ok_or_else(|| {
        CoreError::OperationFailed("--output is required with --input".to_string())
    })?;

    match discover_file_pairs(input_path, output_dir, args.recursive) {
        Ok(pairs) => Ok(pairs),
        Err(CoreError::NoFilesFound) => {
            terminal::print_warning(&format!(
                "No supported images found in '{}'",
                input_path.display()
            ));
            Ok(Vec::new())
        }
        Err(e) => Err(e),
    }
}

/// Runs the `encode` subcommand with the real encoder and filesystem.
///
/// On an aborted batch the partial report is still printed before the error
/// is returned.
pub fn run_encode(args: &EncodeArgs) -> CliResult<BatchReport> {
    let config = build_encode_config(args)?;
    let pairs = collect_file_pairs(args)?;
    encode_pairs(&CommandSpawner, &StdFileSystem, &config, &pairs, args.json)
}

/// Runs a batch over `pairs` and prints its report.
pub fn encode_pairs<S: EncoderSpawner, F: FileSystem>(
    spawner: &S,
    fs: &F,
    config: &EncodeConfig,
    pairs: &[FilePair],
    json: bool,
) -> CliResult<BatchReport> {
    print_settings(config, pairs.len());

    match process_batch(spawner, fs, config, pairs) {
        Ok(report) => {
            print_report(&report, json)?;
            if report.files_processed > 0 {
                terminal::print_success(&format!(
                    "Converted {} file(s)",
                    report.files_processed
                ));
            }
            Ok(report)
        }
        Err(aborted) => {
            print_report(&aborted.report, json)?;
            Err(aborted.error)
        }
    }
}

fn print_settings(config: &EncodeConfig, file_count: usize) {
    terminal::print_section("AVIF conversion");
    terminal::print_status("Encoder", &config.encoder_name());
    match config.mode {
        EncodeMode::Standard => {
            let unset = || "encoder default".to_string();
            terminal::print_status(
                "Quality",
                &config.quality.map_or_else(unset, |q| q.to_string()),
            );
            terminal::print_status(
                "Speed",
                &config.speed.map_or_else(unset, |s| s.to_string()),
            );
        }
        EncodeMode::LosslessFast => terminal::print_status("Mode", "lossless (fast)"),
    }
    terminal::print_status(
        "Larger outputs",
        if config.delete_larger { "delete" } else { "keep" },
    );
    if config.delete_larger_than_reference {
        terminal::print_status("Reference", &format!(".{}", config.reference_extension));
    }
    terminal::print_status("Files", &file_count.to_string());
    debug!("Accounting policy: {:?}", config.accounting);
    info!("");
}

fn print_report(report: &BatchReport, json: bool) -> CliResult<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    terminal::print_section("Operation statistics");
    for (level, line) in leveled_summary(report) {
        match level {
            Level::Warn => warn!("  {line}"),
            _ => terminal::print_line(&line),
        }
    }
    terminal::print_status("Source total", &format_bytes(report.source_bytes));
    terminal::print_status("Kept total", &format_bytes(report.dest_bytes));
    if report.reference_bytes > 0 {
        terminal::print_status("Reference", &format_bytes(report.reference_bytes));
    }
    Ok(())
}

/// Summary lines paired with the level they are logged at. Oversized
/// outputs that were kept are a warning.
fn leveled_summary(report: &BatchReport) -> Vec<(Level, String)> {
    let warning = report
        .oversized_notice()
        .filter(|_| !report.delete_larger);
    report
        .summary_lines()
        .into_iter()
        .map(|line| {
            let level = if warning.as_ref() == Some(&line) {
                Level::Warn
            } else {
                Level::Info
            };
            (level, line)
        })
        .collect()
}
