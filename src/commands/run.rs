//! End-to-end allocation run
//!
//! Loads a word source, builds the word table and runs the allocator.

use std::io;
use std::path::PathBuf;
use tracing::info;

use crate::allocator::{Allocation, allocate};
use crate::config::AllocatorConfig;
use crate::core::WordTable;
use crate::error::{ParseError, Result};
use crate::wordlists::RANKED_WORDS;
use crate::wordlists::loader::{ParsedWords, load_from_file, load_from_reader, words_from_slice};

/// Where the ranked word list comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    /// List compiled into the binary
    Embedded,
    /// Standard input
    Stdin,
    /// A file on disk
    File(PathBuf),
}

impl WordSource {
    /// Interpret the `-w` flag: `embedded`, `-` for stdin, or a path
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        match arg {
            "embedded" => Self::Embedded,
            "-" => Self::Stdin,
            path => Self::File(PathBuf::from(path)),
        }
    }

    /// # Errors
    ///
    /// Returns an I/O error if stdin or the file cannot be read.
    pub fn read(&self) -> io::Result<ParsedWords> {
        match self {
            Self::Embedded => Ok(ParsedWords {
                words: words_from_slice(RANKED_WORDS),
                errors: Vec::new(),
            }),
            Self::Stdin => load_from_reader(io::stdin().lock()),
            Self::File(path) => load_from_file(path),
        }
    }
}

/// Result of a full run
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub allocation: Allocation,
    /// Records skipped while reading the source
    pub rejected: Vec<ParseError>,
}

/// Read `source` and allocate shortcuts for it
///
/// # Errors
///
/// Returns an error if the source cannot be read, the word count exceeds the
/// limit in strict mode, or allocation hits a fatal invariant violation.
pub fn run_allocation(source: &WordSource, config: &AllocatorConfig) -> Result<RunOutcome> {
    let parsed = source.read()?;
    allocate_parsed(parsed, config)
}

/// Allocate shortcuts for an already parsed list
///
/// # Errors
///
/// Same as [`run_allocation`], minus I/O.
pub fn allocate_parsed(parsed: ParsedWords, config: &AllocatorConfig) -> Result<RunOutcome> {
    let ParsedWords { words, errors } = parsed;
    let table = WordTable::load(words, config)?;
    let allocation = allocate(table, config)?;

    let summary = allocation.summary();
    info!(
        words = summary.total_words,
        assigned = summary.assigned(),
        skipped = summary.skipped(),
        rejected = errors.len(),
        "allocation finished"
    );

    Ok(RunOutcome {
        allocation,
        rejected: errors,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Method;
    use crate::error::HublinError;
    use crate::wordlists::loader::parse_ranked_words;

    #[test]
    fn source_from_arg() {
        assert_eq!(WordSource::from_arg("embedded"), WordSource::Embedded);
        assert_eq!(WordSource::from_arg("-"), WordSource::Stdin);
        assert_eq!(
            WordSource::from_arg("words.tsv"),
            WordSource::File(PathBuf::from("words.tsv"))
        );
    }

    #[test]
    fn embedded_run_assigns_every_long_word() {
        let outcome = run_allocation(&WordSource::Embedded, &AllocatorConfig::default()).unwrap();
        let summary = outcome.allocation.summary();

        assert_eq!(summary.total_words, RANKED_WORDS.len());
        assert_eq!(summary.unassigned(), 0);
        assert!(outcome.rejected.is_empty());
        assert_eq!(
            outcome.allocation.shortcut_for("the").map(|c| c.to_string()),
            Some("t".into())
        );
        assert_eq!(summary.count(Method::Direct), 27);
    }

    #[test]
    fn rejected_records_are_carried_through() {
        let parsed = parse_ranked_words("1\tthe\nbad line here\n3\tof\n");
        let outcome = allocate_parsed(parsed, &AllocatorConfig::default()).unwrap();
        assert_eq!(outcome.rejected.len(), 1);
        assert_eq!(outcome.allocation.words().len(), 2);
    }

    #[test]
    fn strict_capacity_aborts() {
        let parsed = parse_ranked_words("1\tthe\n2\tof\n3\tand\n");
        let config = AllocatorConfig::new(2).strict(true);
        assert!(matches!(
            allocate_parsed(parsed, &config),
            Err(HublinError::CapacityExceeded { found: 3, max: 2 })
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let source = WordSource::File(PathBuf::from("/nonexistent/hublin/words.tsv"));
        assert!(matches!(
            run_allocation(&source, &AllocatorConfig::default()),
            Err(HublinError::Io(_))
        ));
    }
}
