// tagstrip-core/src/headless.rs

//! `headless.rs`
//! Convenience wrappers for one-shot stripping without building an engine by hand.

use anyhow::Result;

use crate::config::Blacklist;
use crate::engine::FilterEngine;
use crate::engines::regex_engine::RegexEngine;

/// Strips `content` using the embedded blacklist.
pub fn strip_document(content: &str) -> Result<String> {
    strip_document_with(Blacklist::load_default()?, content)
}

/// Strips `content` using an explicit blacklist.
pub fn strip_document_with(blacklist: Blacklist, content: &str) -> Result<String> {
    let engine: Box<dyn FilterEngine> = Box::new(RegexEngine::new(blacklist)?);
    let (stripped, _) = engine.strip(content)?;
    Ok(stripped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn test_strip_document_default_blacklist() -> Result<()> {
        let content = "paths:\n  /api/v2/backup:\n    tags:\n      - Data I/O endpoints\n      - Backup\n";
        let expected = "paths:\n  /api/v2/backup:\n    tags:\n      \n      - Backup\n";
        assert_eq!(strip_document(content)?, expected);
        Ok(())
    }

    #[test]
    fn test_strip_document_with_custom_labels() -> Result<()> {
        let blacklist = Blacklist::new(["Internal"]);
        let stripped = strip_document_with(blacklist, "- Internal\n- Data I/O endpoints\n")?;
        assert_eq!(stripped, "\n- Data I/O endpoints\n");
        Ok(())
    }

    #[test]
    fn test_strip_document_empty_input() -> Result<()> {
        assert_eq!(strip_document("")?, "");
        Ok(())
    }
}
