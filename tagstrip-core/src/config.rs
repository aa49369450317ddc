//! Blacklist configuration for `tagstrip-core`.
//!
//! The blacklist is fixed at build time: it is embedded from
//! `config/default_blacklist.yaml` and parsed once per process. Nothing at
//! runtime (flags, environment, files) can change which labels are stripped.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::debug;
use serde::Deserialize;
use std::hash::{Hash, Hasher};

/// Maximum allowed length for the assembled alternation pattern.
pub const MAX_PATTERN_LENGTH: usize = 4096;

/// The labels shipped in the embedded blacklist, in file order.
pub const DEFAULT_LABELS: [&str; 3] = [
    "Data I/O endpoints",
    "Security and access endpoints",
    "System information endpoints",
];

/// Prefix every label must carry to be stripped: a dash and one or more spaces.
const MARKER_PATTERN: &str = "- +";

/// An ordered list of labels whose marked occurrences are deleted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Blacklist {
    pub labels: Vec<String>,
}

impl Hash for Blacklist {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.labels.hash(state);
    }
}

impl Blacklist {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    /// Loads the blacklist embedded at build time.
    pub fn load_default() -> Result<Self> {
        debug!("Loading default blacklist from embedded string...");
        let default_yaml = include_str!("../config/default_blacklist.yaml");
        let blacklist: Blacklist =
            serde_yml::from_str(default_yaml).context("Failed to parse default blacklist")?;

        debug!("Loaded {} blacklisted labels.", blacklist.labels.len());
        Ok(blacklist)
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Builds the `- +(label|label|...)` alternation.
    ///
    /// Labels are escaped, so they only ever match literally. Returns `None`
    /// for an empty blacklist: an empty alternation would match every bare
    /// `- ` marker.
    pub fn pattern(&self) -> Option<String> {
        if self.labels.is_empty() {
            return None;
        }
        let alternation = self
            .labels
            .iter()
            .map(|label| regex::escape(label))
            .collect::<Vec<_>>()
            .join("|");
        Some(format!("{MARKER_PATTERN}({alternation})"))
    }
}
