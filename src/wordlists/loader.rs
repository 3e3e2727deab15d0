//! Word list loading utilities
//!
//! Frequency lists are plain text, one `rank word` record per line. Blank
//! lines and `#` comments are ignored; anything else that does not parse is
//! reported and skipped.

use std::fs;
use std::io::{self, Read};
use std::path::Path;
use tracing::warn;

use crate::core::Word;
use crate::error::{ParseError, RecordError};

/// Words accepted from a source, plus the records that were rejected
#[derive(Debug, Clone, Default)]
pub struct ParsedWords {
    pub words: Vec<Word>,
    pub errors: Vec<ParseError>,
}

/// Parse a ranked frequency list
///
/// Ranks must be positive and strictly increasing. Fields after the word are
/// ignored.
///
/// # Examples
/// ```
/// use hublin::wordlists::loader::parse_ranked_words;
///
/// let parsed = parse_ranked_words("1\tthe\n2\tof\nthree\tand\n4\tto\n");
/// assert_eq!(parsed.words.len(), 3);
/// assert_eq!(parsed.errors.len(), 1);
/// assert_eq!(parsed.errors[0].line, 3);
/// ```
#[must_use]
pub fn parse_ranked_words(text: &str) -> ParsedWords {
    let mut parsed = ParsedWords::default();
    let mut previous: Option<u32> = None;

    for (idx, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        match parse_record(trimmed, previous) {
            Ok(word) => {
                previous = Some(word.rank());
                parsed.words.push(word);
            }
            Err(reason) => {
                let err = ParseError {
                    line: idx + 1,
                    raw: line.to_string(),
                    reason,
                };
                warn!("skipping record: {err}");
                parsed.errors.push(err);
            }
        }
    }

    parsed
}

fn parse_record(line: &str, previous: Option<u32>) -> Result<Word, RecordError> {
    let mut fields = line.split_whitespace();
    let (Some(rank), Some(text)) = (fields.next(), fields.next()) else {
        return Err(RecordError::MissingField);
    };

    let rank: u32 = match rank.parse() {
        Ok(0) | Err(_) => return Err(RecordError::BadRank(rank.to_string())),
        Ok(rank) => rank,
    };
    if let Some(previous) = previous
        && rank <= previous
    {
        return Err(RecordError::RankOrder { rank, previous });
    }

    Ok(Word::new(rank, text)?)
}

/// Load a ranked list from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use hublin::wordlists::loader::load_from_file;
///
/// let parsed = load_from_file("data/words.tsv").unwrap();
/// println!("Loaded {} words", parsed.words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<ParsedWords> {
    let content = fs::read_to_string(path)?;
    Ok(parse_ranked_words(&content))
}

/// Load a ranked list from any reader (stdin, for instance)
///
/// # Errors
///
/// Returns an I/O error if reading fails or the input is not UTF-8.
pub fn load_from_reader<R: Read>(mut reader: R) -> io::Result<ParsedWords> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    Ok(parse_ranked_words(&content))
}

/// Convert an embedded ranked slice to a Word vector
///
/// # Examples
/// ```
/// use hublin::wordlists::loader::words_from_slice;
/// use hublin::wordlists::RANKED_WORDS;
///
/// let words = words_from_slice(RANKED_WORDS);
/// assert_eq!(words.len(), RANKED_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[(u32, &str)]) -> Vec<Word> {
    slice
        .iter()
        .filter_map(|&(rank, text)| Word::new(rank, text).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordError;

    #[test]
    fn parses_tab_and_space_separated() {
        let parsed = parse_ranked_words("1\tthe\n2 of\n3   and  12345\n");
        let texts: Vec<&str> = parsed.words.iter().map(Word::text).collect();
        assert_eq!(texts, ["the", "of", "and"]);
        assert!(parsed.errors.is_empty());
    }

    #[test]
    fn skips_blank_and_comment_lines() {
        let parsed = parse_ranked_words("# header\n\n1\tthe\n   \n2\tof\n");
        assert_eq!(parsed.words.len(), 2);
        assert!(parsed.errors.is_empty());
    }

    #[test]
    fn reports_malformed_records_and_continues() {
        let parsed = parse_ranked_words("1\tthe\nof\nx\tand\n0\tto\n5\tcan't\n6\tin\n");
        let texts: Vec<&str> = parsed.words.iter().map(Word::text).collect();
        assert_eq!(texts, ["the", "in"]);

        let reasons: Vec<(usize, &RecordError)> =
            parsed.errors.iter().map(|e| (e.line, &e.reason)).collect();
        assert_eq!(
            reasons,
            [
                (2, &RecordError::MissingField),
                (3, &RecordError::BadRank("x".into())),
                (4, &RecordError::BadRank("0".into())),
                (5, &RecordError::Word(WordError::InvalidCharacters)),
            ]
        );
        assert_eq!(parsed.errors[1].raw, "x\tand");
    }

    #[test]
    fn rejects_out_of_order_ranks() {
        let parsed = parse_ranked_words("1\tthe\n3\tof\n2\tand\n3\tto\n4\ta\n");
        let texts: Vec<&str> = parsed.words.iter().map(Word::text).collect();
        assert_eq!(texts, ["the", "of", "a"]);
        assert_eq!(
            parsed.errors[0].reason,
            RecordError::RankOrder {
                rank: 2,
                previous: 3
            }
        );
        assert_eq!(parsed.errors.len(), 2);
    }

    #[test]
    fn reader_and_text_agree() {
        let text = "1\tthe\n2\tof\n";
        let from_reader = load_from_reader(text.as_bytes()).unwrap();
        assert_eq!(from_reader.words, parse_ranked_words(text).words);
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &[(1, "the"), (2, "don't"), (3, "of")];
        let words = words_from_slice(input);
        assert_eq!(words.len(), 2);
        assert_eq!(words[1].rank(), 3);
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[(u32, &str)] = &[];
        assert!(words_from_slice(input).is_empty());
    }
}
