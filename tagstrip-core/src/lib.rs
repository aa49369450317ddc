// tagstrip-core/src/lib.rs
//! # tagstrip Core Library
//!
//! `tagstrip-core` holds the platform-independent logic for removing blacklisted
//! group labels from a text document. A label is removed when it directly
//! follows a dash and one or more spaces (`- Data I/O endpoints`), wherever that
//! occurs in the document. Only the matched span is deleted; the newline and any
//! text after the label are kept.
//!
//! The library does no I/O: callers hand it a document and get the stripped
//! document back.
//!
//! ## Modules
//!
//! * `config`: The build-time `Blacklist` and the pattern it produces.
//! * `patterns`: Compilation and caching of the blacklist pattern.
//! * `engine`: The `FilterEngine` trait.
//! * `engines`: Concrete `FilterEngine` implementations.
//! * `label_match`: Reporting types for deleted spans.
//! * `headless`: One-shot convenience wrappers.
//! * `errors`: The `TagStripError` enum.
//!
//! ## Usage Example
//!
//! ```rust
//! use tagstrip_core::{FilterEngine, RegexEngine};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let engine = RegexEngine::with_default_blacklist()?;
//!     let (stripped, summary) = engine.strip("- Data I/O endpoints\nOther content\n")?;
//!     assert_eq!(stripped, "\nOther content\n");
//!     assert_eq!(summary[0].occurrences, 1);
//!     Ok(())
//! }
//! ```
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod headless;
pub mod label_match;
pub mod patterns;

pub use config::{Blacklist, DEFAULT_LABELS, MAX_PATTERN_LENGTH};

pub use errors::TagStripError;

pub use engine::FilterEngine;

pub use engines::regex_engine::RegexEngine;

pub use label_match::{LabelMatch, LabelSummaryItem};

pub use headless::{strip_document, strip_document_with};

pub use patterns::compiler::{compile_blacklist, get_or_compile_blacklist, CompiledBlacklist};
