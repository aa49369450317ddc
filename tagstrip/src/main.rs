// tagstrip/src/main.rs
//! tagstrip entry point.
//!
//! Parses the single path argument, builds the engine over the embedded
//! blacklist and writes the stripped document to stdout.

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::io;

use tagstrip::cli::Cli;
use tagstrip::commands::strip::{run_strip, StripOptions};
use tagstrip::logger;
use tagstrip_core::{FilterEngine, RegexEngine};

fn main() -> Result<()> {
    let args = Cli::parse();
    logger::init_logger(None);
    info!("tagstrip started. Version: {}", env!("CARGO_PKG_VERSION"));

    let engine: Box<dyn FilterEngine> = Box::new(
        RegexEngine::with_default_blacklist().context("Failed to build the label filter")?,
    );

    let opts = StripOptions {
        input_path: args.input,
    };

    let stdout = io::stdout();
    let mut writer = stdout.lock();
    run_strip(engine.as_ref(), &opts, &mut writer)?;

    Ok(())
}
