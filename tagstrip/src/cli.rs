//! This file defines the command-line interface (CLI) for the tagstrip binary.
//! License: MIT OR Apache-2.0

use clap::Parser;
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "tagstrip",
    version = env!("CARGO_PKG_VERSION"),
    about = "Strip blacklisted group tags from a text document",
    long_about = "tagstrip reads a text file, deletes every fixed group label that follows a dash and one or more spaces (for example '- Data I/O endpoints'), and writes the result to stdout. The label list is built in and cannot be changed at runtime. Set RUST_LOG to see diagnostics on stderr.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Path to the input file.
    #[arg(value_name = "FILE", help = "The text file to strip group tags from.")]
    pub input: PathBuf,
}
