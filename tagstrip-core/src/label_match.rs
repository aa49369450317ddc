// tagstrip-core/src/label_match.rs
//! Data structures for reporting the spans the engine deletes.

use log::debug;

/// One deleted span: the dash, the spaces and the label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelMatch {
    /// The blacklisted label this span ended with.
    pub label: String,
    /// The exact text removed, including the `-` and spaces.
    pub matched_text: String,
    /// Byte offset of the span start in the original document.
    pub start: u64,
    /// Byte offset one past the span end in the original document.
    pub end: u64,
    /// 1-based line the span starts on.
    pub line_number: Option<u64>,
}

/// Per-label count of deleted spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelSummaryItem {
    pub label: String,
    pub occurrences: usize,
}

/// Fills in `line_number` for every match that lacks one.
///
/// Matches must be sorted by `start`; the document is walked once.
pub fn assign_line_numbers(content: &str, matches: &mut [LabelMatch]) {
    let bytes = content.as_bytes();
    let mut line = 1u64;
    let mut cursor = 0usize;
    for m in matches.iter_mut() {
        let start = (m.start as usize).min(bytes.len()).max(cursor);
        line += bytes[cursor..start].iter().filter(|&&b| b == b'\n').count() as u64;
        cursor = start;
        if m.line_number.is_none() {
            m.line_number = Some(line);
        }
    }
}

/// Groups matches into one summary item per label, in first-seen order.
pub fn summarize(matches: &[LabelMatch]) -> Vec<LabelSummaryItem> {
    let mut summary: Vec<LabelSummaryItem> = Vec::new();
    for m in matches {
        match summary.iter_mut().find(|item| item.label == m.label) {
            Some(item) => item.occurrences += 1,
            None => summary.push(LabelSummaryItem {
                label: m.label.clone(),
                occurrences: 1,
            }),
        }
    }
    debug!("Summarized {} matches into {} labels.", matches.len(), summary.len());
    summary
}
