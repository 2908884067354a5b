// avifbatch-cli/src/commands/mod.rs
//
// Subcommand implementations.

pub mod encode;
