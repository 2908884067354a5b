//! Configuration structures and constants for the avifbatch-core library.
//!
//! An [`EncodeConfig`] is built once per batch and shared, read-only, by every
//! encoder invocation in that batch. It can be assembled in code (directly or
//! through [`EncodeConfigBuilder`]) or deserialized from a JSON object that
//! uses the Grunt-style option keys (`binpath`, `quality`,
//! `speed`, `deleteLarger`, `deleteLargerWebp`).

mod builder;
pub mod utils;

use crate::error::{CoreError, CoreResult};

use serde::{Deserialize, Serialize};
use std::fs;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

pub use builder::EncodeConfigBuilder;

// Default constants

/// Encoder executable used when no `binpath` is configured; resolved via `PATH`.
pub const DEFAULT_ENCODER_BINARY: &str = "avif";

/// Valid quality factors. 0 is lossless.
pub const QUALITY_RANGE: RangeInclusive<i32> = 0..=63;

/// Valid speed factors. 0 is slowest.
pub const SPEED_RANGE: RangeInclusive<i32> = 0..=8;

/// Extension of the sibling reference file used by the reference comparison.
pub const DEFAULT_REFERENCE_EXTENSION: &str = "webp";

/// Fixed quantizer range and speed emitted in lossless/fast mode.
pub const LOSSLESS_FAST_MIN_QUANTIZER: u8 = 0;
pub const LOSSLESS_FAST_MAX_QUANTIZER: u8 = 5;
pub const LOSSLESS_FAST_SPEED: u8 = 3;

/// Environment variable that overrides the encoder path.
pub const ENV_BINPATH: &str = "AVIFBATCH_BINPATH";

/// Shape of the encoder invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EncodeMode {
    /// `[--quality N] [--speed N] -e <src> -o <dest>`
    #[default]
    Standard,
    /// `--min 0 --max 5 -s 3 <src> -o <dest>`
    LosslessFast,
}

/// How per-file sizes are folded into the batch totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Accounting {
    /// Each source counted once; kept total equals the bytes of surviving outputs.
    #[default]
    Corrected,
    /// Reproduces the historical Grunt-task totals, including counting an oversized
    /// file's source twice and re-adding the output after the reference pass.
    Legacy,
}

/// Batch-wide encoder settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EncodeConfig {
    /// Encoder executable (a bare name is looked up on `PATH`)
    pub binpath: PathBuf,

    /// Quality factor, 0-63
    pub quality: Option<i32>,

    /// Speed factor, 0-8
    pub speed: Option<i32>,

    /// Delete outputs that came out larger than their source
    pub delete_larger: bool,

    /// Also compare each output against its sibling reference file
    #[serde(rename = "deleteLargerWebp", alias = "deleteLargerThanReference")]
    pub delete_larger_than_reference: bool,

    /// Extension of the sibling reference file (without the dot)
    pub reference_extension: String,

    pub mode: EncodeMode,

    pub accounting: Accounting,
}

impl Default for EncodeConfig {
    fn default() -> Self {
        Self {
            binpath: PathBuf::from(DEFAULT_ENCODER_BINARY),
            quality: None,
            speed: None,
            delete_larger: false,
            delete_larger_than_reference: false,
            reference_extension: DEFAULT_REFERENCE_EXTENSION.to_string(),
            mode: EncodeMode::Standard,
            accounting: Accounting::Corrected,
        }
    }
}

impl EncodeConfig {
    /// Loads a configuration from a JSON file. Missing keys keep their defaults.
    pub fn from_json_file(path: &Path) -> CoreResult<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            CoreError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let config: Self = serde_json::from_str(&contents)?;
        log::debug!("Loaded encode configuration from {}", path.display());
        Ok(config)
    }

    /// Applies `AVIFBATCH_BINPATH` if it is set.
    pub fn apply_env_overrides(&mut self) {
        if let Some(binpath) = utils::get_env_opt_string(ENV_BINPATH) {
            log::debug!("Using encoder path from {ENV_BINPATH}: {binpath}");
            self.binpath = PathBuf::from(binpath);
        }
    }

    /// Checks every setting the argument builder would check, up front.
    pub fn validate(&self) -> CoreResult<()> {
        if self.binpath.as_os_str().is_empty() {
            return Err(CoreError::Config("binpath must not be empty".to_string()));
        }
        validate_quality(self.quality)?;
        validate_speed(self.speed)?;
        if self.delete_larger_than_reference {
            let ext = self.reference_extension.trim_start_matches('.');
            if ext.is_empty() {
                return Err(CoreError::Config(
                    "reference extension must not be empty when the reference comparison is enabled"
                        .to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Program name used in logs and error messages.
    #[must_use]
    pub fn encoder_name(&self) -> String {
        self.binpath.display().to_string()
    }
}

/// Returns the quality unchanged when it is absent or within 0-63.
pub fn validate_quality(quality: Option<i32>) -> CoreResult<Option<i32>> {
    match quality {
        Some(q) if !QUALITY_RANGE.contains(&q) => Err(CoreError::Config(format!(
            "Quality must be between {} and {} (got {q})",
            QUALITY_RANGE.start(),
            QUALITY_RANGE.end()
        ))),
        other => Ok(other),
    }
}

/// Returns the speed unchanged when it is absent or within 0-8.
pub fn validate_speed(speed: Option<i32>) -> CoreResult<Option<i32>> {
    match speed {
        Some(s) if !SPEED_RANGE.contains(&s) => Err(CoreError::Config(format!(
            "Speed value must be between {} and {} (got {s})",
            SPEED_RANGE.start(),
            SPEED_RANGE.end()
        ))),
        other => Ok(other),
    }
}
