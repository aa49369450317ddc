//! Strip command: read one document, delete blacklisted labels, write the result.

use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use tagstrip_core::{FilterEngine, TagStripError};

/// Options for a single strip run.
#[derive(Debug, Clone)]
pub struct StripOptions {
    pub input_path: PathBuf,
}

/// Reads the whole document at `path`.
///
/// Any failure to open or read becomes [`TagStripError::InputUnavailable`].
/// Bytes that are not valid UTF-8 are replaced with U+FFFD rather than
/// rejected.
pub fn read_document(path: &Path) -> Result<String, TagStripError> {
    debug!("Reading input from {}", path.display());
    let mut bytes = Vec::new();
    {
        let mut file =
            File::open(path).map_err(|e| TagStripError::input_unavailable(path, e))?;
        file.read_to_end(&mut bytes)
            .map_err(|e| TagStripError::input_unavailable(path, e))?;
    }

    let document = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            warn!(
                "{} is not valid UTF-8; invalid bytes were replaced.",
                path.display()
            );
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    };
    debug!("Read {} bytes from {}", document.len(), path.display());
    Ok(document)
}

/// Runs one strip: read, transform, write to `writer`.
///
/// The stripped document is written verbatim with no trailing newline added.
/// Nothing is written if the input cannot be read.
pub fn run_strip<W: Write>(
    engine: &dyn FilterEngine,
    opts: &StripOptions,
    writer: &mut W,
) -> Result<()> {
    info!("Starting strip operation.");

    let document = read_document(&opts.input_path)?;

    if log::log_enabled!(log::Level::Debug) {
        for m in engine.find_matches(&document)? {
            debug!(
                "Removing '{}' at line {} (bytes {}..{})",
                m.label,
                m.line_number.unwrap_or_default(),
                m.start,
                m.end
            );
        }
    }

    let (stripped, summary) = engine
        .strip(&document)
        .context("Failed to strip blacklisted labels")?;

    writer
        .write_all(stripped.as_bytes())
        .map_err(TagStripError::IoError)?;
    writer.flush().map_err(TagStripError::IoError)?;

    if summary.is_empty() {
        info!("No blacklisted labels found in {}.", opts.input_path.display());
    }
    for item in &summary {
        info!("{} ({} occurrences)", item.label, item.occurrences);
    }

    info!("Strip operation completed.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::ErrorKind;
    use tagstrip_core::RegexEngine;

    #[test]
    fn read_document_reports_missing_file() {
        let err = read_document(Path::new("/definitely/not/here.yml")).unwrap_err();
        match err {
            TagStripError::InputUnavailable { path, source } => {
                assert_eq!(path, PathBuf::from("/definitely/not/here.yml"));
                assert_eq!(source.kind(), ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    /// A writer whose every operation fails, like a closed pipe.
    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(ErrorKind::BrokenPipe, "pipe closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::Error::new(ErrorKind::BrokenPipe, "pipe closed"))
        }
    }

    #[test]
    fn run_strip_reports_output_failure_as_io_error() {
        let mut input = tempfile::NamedTempFile::new().unwrap();
        input.write_all(b"- Data I/O endpoints\n").unwrap();
        let engine = RegexEngine::with_default_blacklist().unwrap();
        let opts = StripOptions {
            input_path: input.path().to_path_buf(),
        };

        let err = run_strip(&engine, &opts, &mut BrokenPipe).unwrap_err();
        match err.downcast_ref::<TagStripError>() {
            Some(TagStripError::IoError(source)) => {
                assert_eq!(source.kind(), ErrorKind::BrokenPipe);
            }
            other => panic!("expected IoError, got {other:?}"),
        }
    }

    #[test]
    fn run_strip_writes_nothing_on_missing_input() {
        let engine = RegexEngine::with_default_blacklist().unwrap();
        let opts = StripOptions {
            input_path: PathBuf::from("/definitely/not/here.yml"),
        };
        let mut out = Vec::new();
        let err = run_strip(&engine, &opts, &mut out).unwrap_err();
        assert!(err.downcast_ref::<TagStripError>().is_some());
        assert!(out.is_empty());
    }
}
