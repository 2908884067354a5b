// avifbatch-cli/src/config.rs
//
// Layers the encode configuration: built-in defaults, then the JSON config
// file, then AVIFBATCH_BINPATH, then command-line flags.

use crate::cli::EncodeArgs;
use crate::error::CliResult;

use avifbatch_core::config::{EncodeConfig, EncodeConfigBuilder, EncodeMode};

/// Builds the validated configuration for an `encode` run.
///
/// Boolean flags can only switch a setting on; a config file that enables
/// `deleteLarger` cannot be overridden back to false from the command line.
pub fn build_encode_config(args: &EncodeArgs) -> CliResult<EncodeConfig> {
    let mut base = match &args.config {
        Some(path) => EncodeConfig::from_json_file(path)?,
        None => EncodeConfig::default(),
    };
    base.apply_env_overrides();

    let mut builder = EncodeConfigBuilder::from_config(base);

    if let Some(binpath) = &args.binpath {
        builder = builder.binpath(binpath);
    }
    if let Some(quality) = args.quality {
        builder = builder.quality(quality);
    }
    if let Some(speed) = args.speed {
        builder = builder.speed(speed);
    }
    if args.lossless {
        builder = builder.mode(EncodeMode::LosslessFast);
    }
    if args.delete_larger {
        builder = builder.delete_larger(true);
    }
    if args.delete_larger_than_reference {
        builder = builder.delete_larger_than_reference(true);
    }
    if let Some(ext) = &args.reference_ext {
        builder = builder.reference_extension(ext);
    }
    if let Some(accounting) = args.accounting {
        builder = builder.accounting(accounting.into());
    }

    builder.build()
}
