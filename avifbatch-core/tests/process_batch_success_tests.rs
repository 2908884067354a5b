// avifbatch-core/tests/process_batch_success_tests.rs

use avifbatch_core::config::{EncodeConfigBuilder, EncodeMode};
use avifbatch_core::external::StdFileSystem;
use avifbatch_core::external::mocks::MockEncoderSpawner;
use avifbatch_core::processing::{BatchState, process_batch};
use avifbatch_core::{EncodeConfig, FilePair};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn create_source(dir: &Path, filename: &str, size: usize) -> PathBuf {
    let path = dir.join(filename);
    fs::write(&path, vec![7u8; size]).expect("Failed to create source file");
    path
}

#[test]
fn test_smaller_output_is_kept_and_counted() -> Result<(), Box<dyn std::error::Error>> {
    let input_dir = tempdir()?;
    let output_dir = tempdir()?;
    let src = create_source(input_dir.path(), "cat.png", 1000);
    let dest = output_dir.path().join("cat.avif");
    let pairs = vec![FilePair::new(&src, &dest)];

    let spawner = MockEncoderSpawner::new();
    spawner.add_success(800);

    let config = EncodeConfigBuilder::new().quality(30).speed(4).build()?;
    let report = process_batch(&spawner, &StdFileSystem, &config, &pairs)?;

    assert_eq!(report.state, BatchState::Completed);
    assert_eq!(report.files_processed, 1);
    assert_eq!(report.source_bytes, 1000);
    assert_eq!(report.dest_bytes, 800);
    assert_eq!(report.percent_saved, Some(20.0));
    assert_eq!(report.oversized_count, 0);
    assert_eq!(report.summary_lines(), ["1000 -> 800", "20.00% saved."]);
    assert!(dest.exists());

    let args = &spawner.get_received_args()[0];
    let expected: Vec<String> = vec![
        "--quality".into(),
        "30".into(),
        "--speed".into(),
        "4".into(),
        "-e".into(),
        src.display().to_string(),
        "-o".into(),
        dest.display().to_string(),
    ];
    assert_eq!(args, &expected);
    Ok(())
}

#[test]
fn test_oversized_output_is_deleted_when_configured() -> Result<(), Box<dyn std::error::Error>> {
    let input_dir = tempdir()?;
    let output_dir = tempdir()?;
    let src = create_source(input_dir.path(), "tiny.png", 100);
    let dest = output_dir.path().join("tiny.avif");

    let spawner = MockEncoderSpawner::new();
    spawner.add_success(150);

    let config = EncodeConfigBuilder::new().delete_larger(true).build()?;
    let report = process_batch(&spawner, &StdFileSystem, &config, &[FilePair::new(&src, &dest)])?;

    assert!(!dest.exists());
    assert_eq!(report.oversized_count, 1);
    assert_eq!(report.source_bytes, 100);
    assert_eq!(report.dest_bytes, 0);
    assert_eq!(
        report.oversized_notice().as_deref(),
        Some("Deleted 1 file(s) due to larger output.")
    );
    Ok(())
}

#[test]
fn test_oversized_output_is_kept_without_delete() -> Result<(), Box<dyn std::error::Error>> {
    let input_dir = tempdir()?;
    let output_dir = tempdir()?;
    let src = create_source(input_dir.path(), "tiny.png", 100);
    let dest = output_dir.path().join("tiny.avif");

    let spawner = MockEncoderSpawner::new();
    spawner.add_success(150);

    let report = process_batch(
        &spawner,
        &StdFileSystem,
        &EncodeConfig::default(),
        &[FilePair::new(&src, &dest)],
    )?;

    assert!(dest.exists());
    assert_eq!(report.oversized_count, 1);
    assert_eq!(report.dest_bytes, 150);
    assert_eq!(report.percent_saved, Some(-50.0));
    assert_eq!(
        report.oversized_notice().as_deref(),
        Some("Warning: Contains 1 file(s) larger than their sources.")
    );
    Ok(())
}

#[test]
fn test_legacy_accounting_double_counts_oversized_source() -> Result<(), Box<dyn std::error::Error>> {
    let input_dir = tempdir()?;
    let output_dir = tempdir()?;
    let src = create_source(input_dir.path(), "tiny.png", 100);
    let dest = output_dir.path().join("tiny.avif");

    let spawner = MockEncoderSpawner::new();
    spawner.add_success(150);

    let config = EncodeConfigBuilder::new()
        .delete_larger(true)
        .accounting(avifbatch_core::Accounting::Legacy)
        .build()?;
    let report = process_batch(&spawner, &StdFileSystem, &config, &[FilePair::new(&src, &dest)])?;

    assert_eq!(report.source_bytes, 200);
    assert_eq!(report.dest_bytes, 0);
    assert_eq!(report.percent_saved, Some(100.0));
    Ok(())
}

#[test]
fn test_lossless_mode_arguments() -> Result<(), Box<dyn std::error::Error>> {
    let input_dir = tempdir()?;
    let output_dir = tempdir()?;
    let src = create_source(input_dir.path(), "a.png", 1000);
    let dest = output_dir.path().join("nested/a.avif");

    let spawner = MockEncoderSpawner::new();
    spawner.add_success(10);

    let config = EncodeConfigBuilder::new()
        .mode(EncodeMode::LosslessFast)
        .quality(30)
        .build()?;
    process_batch(&spawner, &StdFileSystem, &config, &[FilePair::new(&src, &dest)])?;

    // The destination directory is created before the encoder runs
    assert!(output_dir.path().join("nested").is_dir());

    let args = &spawner.get_received_args()[0];
    assert_eq!(&args[..6], ["--min", "0", "--max", "5", "-s", "3"]);
    assert_eq!(args[6], src.display().to_string());
    assert_eq!(args[7], "-o");
    assert!(!args.contains(&"--quality".to_string()));
    Ok(())
}

#[test]
fn test_empty_batch_completes_with_zero_totals() -> Result<(), Box<dyn std::error::Error>> {
    let spawner = MockEncoderSpawner::new();
    let report = process_batch(&spawner, &StdFileSystem, &EncodeConfig::default(), &[])?;

    assert_eq!(report.state, BatchState::Completed);
    assert_eq!(report.files_processed, 0);
    assert_eq!(report.percent_saved, None);
    assert_eq!(report.summary_lines(), ["0 -> 0"]);
    assert!(spawner.get_received_calls().is_empty());
    Ok(())
}

#[test]
fn test_files_run_in_input_order() -> Result<(), Box<dyn std::error::Error>> {
    let input_dir = tempdir()?;
    let output_dir = tempdir()?;
    let names = ["c", "a", "b"];
    let pairs: Vec<FilePair> = names
        .iter()
        .map(|name| {
            let src = create_source(input_dir.path(), &format!("{name}.png"), 400);
            FilePair::new(src, output_dir.path().join(format!("{name}.avif")))
        })
        .collect();

    let spawner = MockEncoderSpawner::new();
    for _ in &names {
        spawner.add_success(100);
    }

    let report = process_batch(&spawner, &StdFileSystem, &EncodeConfig::default(), &pairs)?;
    assert_eq!(report.files_processed, 3);
    assert_eq!(report.source_bytes, 1200);
    assert_eq!(report.dest_bytes, 300);
    assert_eq!(report.percent_saved, Some(75.0));

    let order: Vec<String> = spawner
        .get_received_args()
        .iter()
        .map(|args| args.last().cloned().unwrap_or_default())
        .collect();
    let expected: Vec<String> = names
        .iter()
        .map(|name| output_dir.path().join(format!("{name}.avif")).display().to_string())
        .collect();
    assert_eq!(order, expected);
    Ok(())
}
