// tagstrip/src/lib.rs
//! # tagstrip CLI
//!
//! Command-line front end for `tagstrip-core`. The binary takes one file path,
//! strips the built-in group labels from it and prints the result to stdout.

pub mod cli;
pub mod commands;
pub mod logger;

pub use commands::strip::{read_document, run_strip, StripOptions};
