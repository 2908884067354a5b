// avifbatch-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use avifbatch_core::config::Accounting;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "avifbatch: Batch AVIF conversion tool",
    long_about = "Converts images to AVIF with an external encoder, one file at a time, \
                  and reports how many bytes the batch saved."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Show debug output on the console
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// Disable colored output (also honoured via NO_COLOR)
    #[arg(long, global = true, default_value_t = false)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encodes images from an input path or manifest to AVIF
    Encode(EncodeArgs),
}

/// Accounting policy as accepted on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountingArg {
    /// Count each source once
    Corrected,
    /// Reproduce the historical totals exactly
    Legacy,
}

impl From<AccountingArg> for Accounting {
    fn from(arg: AccountingArg) -> Self {
        match arg {
            AccountingArg::Corrected => Accounting::Corrected,
            AccountingArg::Legacy => Accounting::Legacy,
        }
    }
}

#[derive(Parser, Debug)]
pub struct EncodeArgs {
    /// Input image or directory of images
    #[arg(
        short = 'i',
        long = "input",
        value_name = "INPUT_PATH",
        required_unless_present = "manifest",
        conflicts_with = "manifest"
    )]
    pub input_path: Option<PathBuf>,

    /// Directory where AVIF files will be saved
    #[arg(
        short = 'o',
        long = "output",
        value_name = "OUTPUT_DIR",
        required_unless_present = "manifest"
    )]
    pub output_dir: Option<PathBuf>,

    /// JSON manifest of {"src", "dest"} pairs, instead of --input/--output
    #[arg(long, value_name = "MANIFEST")]
    pub manifest: Option<PathBuf>,

    /// JSON config file (binpath, quality, speed, deleteLarger, deleteLargerWebp)
    #[arg(short, long, value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Encoder executable. Overrides the config file and AVIFBATCH_BINPATH
    #[arg(long, value_name = "PATH")]
    pub binpath: Option<PathBuf>,

    // --- Encoder Settings ---
    /// Quality factor (0-63, 0 is lossless)
    #[arg(
        short,
        long,
        value_name = "QUALITY",
        value_parser = clap::value_parser!(i32).range(0..=63)
    )]
    pub quality: Option<i32>,

    /// Speed factor (0-8, 0 is slowest)
    #[arg(
        short,
        long,
        value_name = "SPEED",
        value_parser = clap::value_parser!(i32).range(0..=8)
    )]
    pub speed: Option<i32>,

    /// Use the fixed near-lossless settings (--min 0 --max 5 -s 3)
    #[arg(long, default_value_t = false)]
    pub lossless: bool,

    // --- Output Retention ---
    /// Delete outputs that came out larger than their source
    #[arg(long, default_value_t = false)]
    pub delete_larger: bool,

    /// Also compare each output against the sibling file with --reference-ext
    #[arg(long, alias = "delete-larger-webp", default_value_t = false)]
    pub delete_larger_than_reference: bool,

    /// Extension of the sibling reference file (default: webp)
    #[arg(long, value_name = "EXT")]
    pub reference_ext: Option<String>,

    /// How byte totals are accumulated
    #[arg(long, value_enum, value_name = "POLICY")]
    pub accounting: Option<AccountingArg>,

    /// Descend into subdirectories of INPUT_PATH
    #[arg(short, long, default_value_t = false)]
    pub recursive: bool,

    // --- Output ---
    /// Directory for log files (defaults to OUTPUT_DIR/logs)
    #[arg(short, long, value_name = "LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Do not write a log file
    #[arg(long, default_value_t = false)]
    pub no_log_file: bool,

    /// Print the final report as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

impl EncodeArgs {
    /// Directory the run's log file goes into.
    pub fn effective_log_dir(&self) -> PathBuf {
        self.log_dir.clone().unwrap_or_else(|| {
            self.output_dir
                .as_deref()
                .map(|dir| dir.join("logs"))
                .unwrap_or_else(|| PathBuf::from("logs"))
        })
    }
}
