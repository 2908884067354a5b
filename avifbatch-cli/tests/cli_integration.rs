// avifbatch-cli/tests/cli_integration.rs
//
// Drives the avifbatch binary against a fake encoder: a shell script that
// writes an output of fixed size to the path after `-o` and exits with a
// chosen code.

#![cfg(unix)]

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::error::Error;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn avifbatch_cmd() -> Command {
    let mut cmd = Command::cargo_bin("avifbatch").expect("Failed to find avifbatch binary");
    cmd.env_remove("AVIFBATCH_BINPATH").env("NO_COLOR", "1");
    cmd
}

// Writes an executable fake encoder into `dir`.
fn fake_encoder(dir: &Path, output_size: u64, exit_code: i32) -> Result<PathBuf, Box<dyn Error>> {
    let path = dir.join("fake-avif");
    let script = format!(
        "#!/bin/sh\n\
         out=\"\"\n\
         while [ $# -gt 0 ]; do\n\
           if [ \"$1\" = \"-o\" ]; then out=\"$2\"; fi\n\
           shift\n\
         done\n\
         if [ {exit_code} -eq 0 ] && [ -n \"$out\" ]; then\n\
           head -c {output_size} /dev/zero > \"$out\"\n\
         fi\n\
         exit {exit_code}\n"
    );
    fs::write(&path, script)?;
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755))?;
    Ok(path)
}

fn write_source(dir: &Path, name: &str, size: usize) -> Result<PathBuf, Box<dyn Error>> {
    let path = dir.join(name);
    fs::write(&path, vec![1u8; size])?;
    Ok(path)
}

#[test]
fn test_encode_directory_reports_savings() -> Result<(), Box<dyn Error>> {
    let tools = tempdir()?;
    let input_dir = tempdir()?;
    let output_dir = tempdir()?;
    let encoder = fake_encoder(tools.path(), 100, 0)?;
    write_source(input_dir.path(), "photo.png", 1000)?;

    avifbatch_cmd()
        .arg("encode")
        .arg("--input")
        .arg(input_dir.path())
        .arg("--output")
        .arg(output_dir.path())
        .arg("--binpath")
        .arg(&encoder)
        .arg("--quality")
        .arg("30")
        .assert()
        .success()
        .stdout(contains("1000 -> 100"))
        .stdout(contains("90.00% saved."));

    assert_eq!(fs::metadata(output_dir.path().join("photo.avif"))?.len(), 100);

    // Log file lands in OUTPUT_DIR/logs by default
    let logs: Vec<_> = fs::read_dir(output_dir.path().join("logs"))?.collect();
    assert_eq!(logs.len(), 1);
    Ok(())
}

#[test]
fn test_encoder_exit_code_is_propagated() -> Result<(), Box<dyn Error>> {
    let tools = tempdir()?;
    let input_dir = tempdir()?;
    let output_dir = tempdir()?;
    let encoder = fake_encoder(tools.path(), 0, 3)?;
    write_source(input_dir.path(), "a.png", 500)?;
    write_source(input_dir.path(), "b.png", 500)?;

    avifbatch_cmd()
        .arg("encode")
        .arg("-i")
        .arg(input_dir.path())
        .arg("-o")
        .arg(output_dir.path())
        .arg("--binpath")
        .arg(&encoder)
        .arg("--no-log-file")
        .assert()
        .code(3)
        .stderr(contains("exit code 3"));

    assert!(!output_dir.path().join("b.avif").exists());
    Ok(())
}

#[test]
fn test_missing_encoder_exits_with_one() -> Result<(), Box<dyn Error>> {
    let input_dir = tempdir()?;
    let output_dir = tempdir()?;
    write_source(input_dir.path(), "a.png", 500)?;

    avifbatch_cmd()
        .arg("encode")
        .arg("-i")
        .arg(input_dir.path())
        .arg("-o")
        .arg(output_dir.path())
        .arg("--binpath")
        .arg("/surely/this/does/not/exist/avif")
        .arg("--no-log-file")
        .assert()
        .code(1)
        .stderr(contains("not found"))
        .stdout(contains("not found").not());
    Ok(())
}

#[test]
fn test_invalid_quality_is_rejected() -> Result<(), Box<dyn Error>> {
    let output_dir = tempdir()?;

    avifbatch_cmd()
        .arg("encode")
        .arg("-i")
        .arg("img")
        .arg("-o")
        .arg(output_dir.path())
        .arg("--quality")
        .arg("64")
        .assert()
        .failure()
        .stderr(contains("64"));
    Ok(())
}

#[test]
fn test_oversized_output_deleted() -> Result<(), Box<dyn Error>> {
    let tools = tempdir()?;
    let input_dir = tempdir()?;
    let output_dir = tempdir()?;
    let encoder = fake_encoder(tools.path(), 300, 0)?;
    write_source(input_dir.path(), "tiny.gif", 100)?;

    avifbatch_cmd()
        .arg("encode")
        .arg("-i")
        .arg(input_dir.path())
        .arg("-o")
        .arg(output_dir.path())
        .arg("--binpath")
        .arg(&encoder)
        .arg("--delete-larger")
        .arg("--no-log-file")
        .assert()
        .success()
        .stdout(contains("Deleted 1 file(s) due to larger output."));

    assert!(!output_dir.path().join("tiny.avif").exists());
    Ok(())
}

#[test]
fn test_json_report_from_manifest() -> Result<(), Box<dyn Error>> {
    let tools = tempdir()?;
    let work = tempdir()?;
    let encoder = fake_encoder(tools.path(), 250, 0)?;
    fs::create_dir(work.path().join("img"))?;
    write_source(&work.path().join("img"), "a.png", 1000)?;
    // b.png encodes larger than its source and is kept, which warns
    write_source(&work.path().join("img"), "b.png", 100)?;
    let manifest = work.path().join("pairs.json");
    fs::write(
        &manifest,
        r#"[
            {"src": "img/a.png", "dest": "dist/a.avif"},
            {"src": "img/b.png", "dest": "dist/b.avif"}
        ]"#,
    )?;

    let assert = avifbatch_cmd()
        .arg("encode")
        .arg("--manifest")
        .arg(&manifest)
        .arg("--binpath")
        .arg(&encoder)
        .arg("--json")
        .arg("--no-log-file")
        .assert()
        .success()
        .stderr(contains("Left undeleted"))
        .stderr(contains("larger than their sources"));
    let output = &assert.get_output().stdout;

    let report: serde_json::Value = serde_json::from_slice(output)?;
    assert_eq!(report["state"], "completed");
    assert_eq!(report["files_processed"], 2);
    assert_eq!(report["source_bytes"], 1100);
    assert_eq!(report["dest_bytes"], 500);
    assert_eq!(report["oversized_count"], 1);
    assert!(work.path().join("dist/a.avif").exists());
    assert!(work.path().join("dist/b.avif").exists());
    Ok(())
}

#[test]
fn test_colliding_stems_abort_before_encoding() -> Result<(), Box<dyn Error>> {
    let tools = tempdir()?;
    let input_dir = tempdir()?;
    let output_dir = tempdir()?;
    let encoder = fake_encoder(tools.path(), 100, 0)?;
    write_source(input_dir.path(), "logo.png", 1000)?;
    write_source(input_dir.path(), "logo.jpg", 1000)?;

    avifbatch_cmd()
        .arg("encode")
        .arg("-i")
        .arg(input_dir.path())
        .arg("-o")
        .arg(output_dir.path())
        .arg("--binpath")
        .arg(&encoder)
        .arg("--no-log-file")
        .assert()
        .code(1)
        .stderr(contains("logo.avif"));

    assert!(!output_dir.path().join("logo.avif").exists());
    Ok(())
}

#[test]
fn test_empty_directory_is_not_an_error() -> Result<(), Box<dyn Error>> {
    let input_dir = tempdir()?;
    let output_dir = tempdir()?;
    fs::write(input_dir.path().join("readme.txt"), "not an image")?;

    avifbatch_cmd()
        .arg("encode")
        .arg("-i")
        .arg(input_dir.path())
        .arg("-o")
        .arg(output_dir.path())
        .arg("--no-log-file")
        .assert()
        .success()
        .stderr(contains("No supported images found"))
        .stdout(contains("saved.").not());
    Ok(())
}
