// ============================================================================
// avifbatch-core/src/external/encoder_args.rs
// ============================================================================
//
// ENCODER ARGUMENTS: Per-File Encoder Invocation Builder
//
// Translates the batch configuration plus one file pair into the concrete
// argument list for the encoder executable.
//
// INVOCATION SHAPES:
// - Standard:     <bin> [--quality N] [--speed N] -e <src> -o <dest>
// - LosslessFast: <bin> --min 0 --max 5 -s 3 <src> -o <dest>
//
// Quality and speed are range-checked here as well as in
// EncodeConfig::validate, so a configuration built without validation still
// aborts the batch before the first encoder starts.
//
// AI-ASSISTANT-INFO: Encoder argument construction and validation

// ---- Internal crate imports ----
use crate::config::{
    self, EncodeConfig, EncodeMode, LOSSLESS_FAST_MAX_QUANTIZER, LOSSLESS_FAST_MIN_QUANTIZER,
    LOSSLESS_FAST_SPEED,
};
use crate::error::CoreResult;
use crate::external::FileSystem;
use crate::file_pair::FilePair;

// ---- Standard library imports ----
use std::ffi::OsString;
use std::path::PathBuf;

/// A fully built encoder command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncoderInvocation {
    pub program: PathBuf,
    pub args: Vec<OsString>,
}

impl EncoderInvocation {
    /// Arguments as lossy UTF-8 strings, for logging and assertions.
    pub fn args_lossy(&self) -> Vec<String> {
        self.args
            .iter()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect()
    }

    /// Shell-like rendering of the whole command line.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.to_string_lossy().into_owned())
            .chain(self.args_lossy())
            .map(|part| {
                if part.is_empty() || part.contains(char::is_whitespace) {
                    format!("\"{part}\"")
                } else {
                    part
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Builds the ordered encoder arguments for one pair.
///
/// # Errors
///
/// * `CoreError::Config` - In standard mode, when quality or speed is out of range
pub fn build_encoder_args(config: &EncodeConfig, pair: &FilePair) -> CoreResult<Vec<OsString>> {
    let mut args: Vec<OsString> = Vec::new();

    match config.mode {
        EncodeMode::LosslessFast => {
            args.push("--min".into());
            args.push(LOSSLESS_FAST_MIN_QUANTIZER.to_string().into());
            args.push("--max".into());
            args.push(LOSSLESS_FAST_MAX_QUANTIZER.to_string().into());
            args.push("-s".into());
            args.push(LOSSLESS_FAST_SPEED.to_string().into());
            args.push(pair.primary_source().as_os_str().to_os_string());
        }
        EncodeMode::Standard => {
            if let Some(quality) = config::validate_quality(config.quality)? {
                args.push("--quality".into());
                args.push(quality.to_string().into());
            }
            if let Some(speed) = config::validate_speed(config.speed)? {
                args.push("--speed".into());
                args.push(speed.to_string().into());
            }
            args.push("-e".into());
            args.push(pair.primary_source().as_os_str().to_os_string());
        }
    }

    args.push("-o".into());
    args.push(pair.dest().as_os_str().to_os_string());

    if pair.sources().len() > 1 {
        log::debug!(
            "Encoding only the first of {} sources for {}",
            pair.sources().len(),
            pair.dest().display()
        );
    }

    Ok(args)
}

/// Creates the destination directory, then builds the invocation.
pub fn prepare_invocation<F: FileSystem>(
    fs: &F,
    config: &EncodeConfig,
    pair: &FilePair,
) -> CoreResult<EncoderInvocation> {
    if let Some(parent) = pair.dest().parent().filter(|p| !p.as_os_str().is_empty()) {
        fs.ensure_dir(parent)?;
    }

    let args = build_encoder_args(config, pair)?;
    Ok(EncoderInvocation {
        program: config.binpath.clone(),
        args,
    })
}
