//! A `FilterEngine` implementation that deletes blacklisted labels with a
//! single regular-expression alternation.
//! License: MIT OR APACHE 2.0

use anyhow::{anyhow, Context, Result};
use log::debug;
use std::sync::Arc;

use crate::config::Blacklist;
use crate::engine::FilterEngine;
use crate::label_match::{assign_line_numbers, summarize, LabelMatch, LabelSummaryItem};
use crate::patterns::compiler::{get_or_compile_blacklist, CompiledBlacklist};

#[derive(Debug)]
pub struct RegexEngine {
    compiled: Arc<CompiledBlacklist>,
    blacklist: Blacklist,
}

impl RegexEngine {
    pub fn new(blacklist: Blacklist) -> Result<Self> {
        let compiled = get_or_compile_blacklist(&blacklist)
            .context("Failed to compile blacklist for RegexEngine")?;

        Ok(Self {
            compiled,
            blacklist,
        })
    }

    /// Builds an engine over the blacklist embedded at build time.
    pub fn with_default_blacklist() -> Result<Self> {
        Self::new(Blacklist::load_default()?)
    }

    /// Leftmost-first, non-overlapping scan of the whole document.
    fn scan(&self, content: &str) -> Result<Vec<LabelMatch>> {
        let Some(regex) = self.compiled.regex.as_ref() else {
            return Ok(Vec::new());
        };

        let mut matches = Vec::new();
        for caps in regex.captures_iter(content) {
            let whole = caps.get(0).ok_or_else(|| anyhow!("Regex capture failed"))?;
            let label = caps
                .get(1)
                .ok_or_else(|| anyhow!("Label group missing from match at {}", whole.start()))?;
            debug!(
                "Label '{}' matched at bytes {}..{}",
                label.as_str(),
                whole.start(),
                whole.end()
            );
            matches.push(LabelMatch {
                label: label.as_str().to_string(),
                matched_text: whole.as_str().to_string(),
                start: whole.start() as u64,
                end: whole.end() as u64,
                line_number: None,
            });
        }
        Ok(matches)
    }
}

impl FilterEngine for RegexEngine {
    fn strip(&self, content: &str) -> Result<(String, Vec<LabelSummaryItem>)> {
        let matches = self.scan(content)?;
        let mut stripped = String::with_capacity(content.len());
        let mut last_end = 0usize;

        for m in &matches {
            let start = m.start as usize;
            stripped.push_str(&content[last_end..start]);
            last_end = m.end as usize;
        }
        stripped.push_str(&content[last_end..]);

        debug!(
            "Stripped {} spans. Original length: {}, stripped length: {}",
            matches.len(),
            content.len(),
            stripped.len()
        );
        Ok((stripped, summarize(&matches)))
    }

    fn find_matches(&self, content: &str) -> Result<Vec<LabelMatch>> {
        let mut matches = self.scan(content)?;
        assign_line_numbers(content, &mut matches);
        Ok(matches)
    }

    fn compiled(&self) -> &CompiledBlacklist {
        &self.compiled
    }

    fn blacklist(&self) -> &Blacklist {
        &self.blacklist
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_LABELS;

    fn engine() -> RegexEngine {
        RegexEngine::with_default_blacklist().unwrap()
    }

    fn strip(input: &str) -> String {
        engine().strip(input).unwrap().0
    }

    #[test]
    fn removes_marked_label_and_keeps_newline() {
        assert_eq!(
            strip("- Data I/O endpoints\nOther content\n"),
            "\nOther content\n"
        );
    }

    #[test]
    fn removes_label_after_several_spaces() {
        assert_eq!(strip("-   Security and access endpoints here\n"), " here\n");
    }

    #[test]
    fn leaves_unmarked_label_alone() {
        assert_eq!(strip("Data I/O endpoints\n"), "Data I/O endpoints\n");
        assert_eq!(
            strip("No matches in this file at all.\n"),
            "No matches in this file at all.\n"
        );
    }

    #[test]
    fn matches_mid_line() {
        assert_eq!(
            strip("tags: - System information endpoints, - Other\n"),
            "tags: , - Other\n"
        );
    }

    #[test]
    fn keeps_indentation_before_the_dash() {
        let input = "      tags:\n        - Data I/O endpoints\n        - Buckets\n";
        let expected = "      tags:\n        \n        - Buckets\n";
        assert_eq!(strip(input), expected);
    }

    #[test]
    fn agrees_with_global_replace() {
        let engine = engine();
        let input = "- Data I/O endpoints - Security and access endpoints\n--  System information endpoints";
        let regex = engine.compiled().regex.as_ref().unwrap();
        let expected = regex.replace_all(input, "").into_owned();
        assert_eq!(engine.strip(input).unwrap().0, expected);
        assert_eq!(expected, " \n-");
    }

    #[test]
    fn summary_counts_each_label() {
        let input = "- Data I/O endpoints\n- Data I/O endpoints\n- System information endpoints\n";
        let (_, summary) = engine().strip(input).unwrap();
        assert_eq!(
            summary,
            vec![
                LabelSummaryItem { label: "Data I/O endpoints".into(), occurrences: 2 },
                LabelSummaryItem { label: "System information endpoints".into(), occurrences: 1 },
            ]
        );
    }

    #[test]
    fn find_matches_reports_spans_and_lines() {
        let input = "intro\n  -  Security and access endpoints\n";
        let matches = engine().find_matches(input).unwrap();
        assert_eq!(matches.len(), 1);
        let m = &matches[0];
        assert_eq!(m.label, "Security and access endpoints");
        assert_eq!(m.matched_text, "-  Security and access endpoints");
        assert_eq!(&input[m.start as usize..m.end as usize], m.matched_text);
        assert_eq!(m.line_number, Some(2));
    }

    #[test]
    fn default_engine_exposes_embedded_labels() {
        let engine = engine();
        assert_eq!(engine.blacklist().labels(), DEFAULT_LABELS.map(String::from).as_slice());
        assert_eq!(engine.compiled().labels, engine.blacklist().labels());
    }

    #[test]
    fn empty_blacklist_is_identity() {
        let engine = RegexEngine::new(Blacklist::default()).unwrap();
        let input = "- Data I/O endpoints\n- anything\n";
        let (out, summary) = engine.strip(input).unwrap();
        assert_eq!(out, input);
        assert!(summary.is_empty());
        assert!(engine.find_matches(input).unwrap().is_empty());
    }
}
