//! Core library for batch AVIF conversion through an external encoder.
//!
//! This crate provides image discovery, encoder argument building, sequential
//! batch execution with fail-fast semantics, per-file size evaluation and
//! batch-wide reporting.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use avifbatch_core::{EncodeConfigBuilder, discover_file_pairs, process_batch};
//! use avifbatch_core::external::{CommandSpawner, StdFileSystem};
//! use std::path::Path;
//!
//! let config = EncodeConfigBuilder::new()
//!     .quality(30)
//!     .speed(4)
//!     .delete_larger(true)
//!     .build()
//!     .unwrap();
//!
//! let pairs = discover_file_pairs(Path::new("img"), Path::new("dist"), true).unwrap();
//!
//! match process_batch(&CommandSpawner, &StdFileSystem, &config, &pairs) {
//!     Ok(report) => println!("{}", report.summary_lines().join("\n")),
//!     Err(aborted) => eprintln!("{aborted}"),
//! }
//! ```

pub mod config;
pub mod discovery;
pub mod error;
pub mod external;
pub mod file_pair;
pub mod logging;
pub mod processing;
pub mod reporting;
pub mod utils;

// Re-exports for public API
pub use config::{Accounting, EncodeConfig, EncodeConfigBuilder, EncodeMode};
pub use discovery::{discover_file_pairs, find_processable_images};
pub use error::{CoreError, CoreResult};
pub use file_pair::{FilePair, load_manifest};
pub use processing::{BatchAborted, BatchState, BatchTotals, EncodeOutcome, process_batch};
pub use reporting::BatchReport;
pub use utils::{format_bytes, format_percent};
