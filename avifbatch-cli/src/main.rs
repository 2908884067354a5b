// ============================================================================
// avifbatch-cli/src/main.rs
// ============================================================================
//
// MAIN ENTRY POINT: avifbatch CLI Application
//
// Parses arguments, installs logging, dispatches the subcommand and maps the
// outcome to a process exit code:
//
// - 0 when the batch completed (including an empty batch)
// - the encoder's own exit code when an encode failed
// - 1 for every other error
//
// AI-ASSISTANT-INFO: Entry point for the avifbatch CLI application

use avifbatch_cli::error::exit_code_for;
use avifbatch_cli::logging::{log_file_path, setup_logging};
use avifbatch_cli::{Cli, Commands, run_encode, terminal};
use clap::Parser;
use log::{LevelFilter, debug};
use std::process;

fn main() {
    let cli = Cli::parse();
    terminal::init_color(cli.no_color);

    let Commands::Encode(args) = &cli.command;

    let console_level = if cli.verbose {
        LevelFilter::Debug
    } else if args.json {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };
    let log_file = (!args.no_log_file).then(|| log_file_path(&args.effective_log_dir()));

    if let Err(e) = setup_logging(console_level, args.json, log_file.as_deref()) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
    if let Some(path) = &log_file {
        debug!("Logging to {}", path.display());
    }

    let result = match &cli.command {
        Commands::Encode(args) => run_encode(args),
    };

    match result {
        Ok(report) => debug!("Batch finished in state {:?}", report.state),
        Err(e) => {
            terminal::print_error(&e.to_string());
            process::exit(exit_code_for(&e));
        }
    }
}
