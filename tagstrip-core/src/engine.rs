// tagstrip-core/src/engine.rs
//! Defines the core `FilterEngine` trait.
//!
//! The trait is the seam between the CLI and the stripping logic: the binary
//! only ever holds a `Box<dyn FilterEngine>`, so it never depends on how
//! spans are found.
//!
//! License: MIT OR APACHE 2.0

use anyhow::Result;

use crate::config::Blacklist;
use crate::label_match::{LabelMatch, LabelSummaryItem};
use crate::patterns::compiler::CompiledBlacklist;

/// Core functionality of a label-stripping engine.
pub trait FilterEngine: Send + Sync {
    /// Deletes every marked blacklist label from `content`.
    ///
    /// Returns the transformed document and one summary item per label that
    /// was seen. Only the matched spans are removed; newlines and trailing
    /// text stay where they were.
    fn strip(&self, content: &str) -> Result<(String, Vec<LabelSummaryItem>)>;

    /// Finds every span `strip` would delete, without modifying anything.
    ///
    /// Matches are sorted by start offset and carry their line number.
    fn find_matches(&self, content: &str) -> Result<Vec<LabelMatch>>;

    /// The compiled pattern backing this engine.
    fn compiled(&self) -> &CompiledBlacklist;

    /// The blacklist this engine was built from.
    fn blacklist(&self) -> &Blacklist;
}
