//! Ranked words and the word table
//!
//! A `Word` carries its frequency rank, its text, and the assignment state the
//! allocator writes into it. The word table owns every word; a word's index in
//! it is the word's identity for the run.

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;
use tracing::{debug, warn};

use super::slot::SlotId;
use crate::config::AllocatorConfig;
use crate::error::{HublinError, Result};

/// Index of a word in the word table
pub type WordId = usize;

/// Longest word text accepted
pub const MAX_WORD_LEN: usize = 14;

/// Error type for invalid word text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    #[error("word must be 1 to {MAX_WORD_LEN} letters, got {0}")]
    InvalidLength(usize),
    #[error("word must contain only ASCII letters")]
    InvalidCharacters,
}

/// How a word received (or did not receive) its shortcut
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Method {
    #[default]
    Unassigned,
    Direct,
    Perfect,
    Subsequence,
    ForcedFirst,
    ForcedAny,
    Sequential,
    Skipped,
}

impl Method {
    pub const ALL: [Self; 8] = [
        Self::Unassigned,
        Self::Direct,
        Self::Perfect,
        Self::Subsequence,
        Self::ForcedFirst,
        Self::ForcedAny,
        Self::Sequential,
        Self::Skipped,
    ];

    pub const COUNT: usize = Self::ALL.len();

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Unassigned => "unassigned",
            Self::Direct => "direct",
            Self::Perfect => "perfect",
            Self::Subsequence => "subsequence",
            Self::ForcedFirst => "forced-first",
            Self::ForcedAny => "forced-any",
            Self::Sequential => "sequential",
            Self::Skipped => "skipped",
        }
    }

    /// One-character tag used in report columns
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Unassigned => '-',
            Self::Direct => '@',
            Self::Perfect => '*',
            Self::Subsequence => '+',
            Self::ForcedFirst => '1',
            Self::ForcedAny => '2',
            Self::Sequential => '#',
            Self::Skipped => '~',
        }
    }

    /// Position in `Method::ALL`
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Create method from name string
    ///
    /// Accepts the long name or the report symbol.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|m| m.name() == name || (name.len() == 1 && name.starts_with(m.symbol())))
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// A ranked word with its assignment state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    rank: u32,
    text: String,
    slot: Option<SlotId>,
    method: Method,
}

impl Word {
    /// Create a new unassigned word
    ///
    /// # Errors
    /// Returns `WordError` if the text is empty, longer than `MAX_WORD_LEN`,
    /// or contains anything but ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use hublin::core::{Method, Word};
    ///
    /// let word = Word::new(3, "The").unwrap();
    /// assert_eq!(word.text(), "the");
    /// assert_eq!(word.method(), Method::Unassigned);
    ///
    /// assert!(Word::new(4, "don't").is_err());
    /// ```
    pub fn new(rank: u32, text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_ascii_lowercase();

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        // ASCII from here on, so bytes are letters
        if text.is_empty() || text.len() > MAX_WORD_LEN {
            return Err(WordError::InvalidLength(text.len()));
        }

        Ok(Self {
            rank,
            text,
            slot: None,
            method: Method::Unassigned,
        })
    }

    #[inline]
    #[must_use]
    pub const fn rank(&self) -> u32 {
        self.rank
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        self.text.as_bytes()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    #[inline]
    #[must_use]
    pub const fn slot(&self) -> Option<SlotId> {
        self.slot
    }

    #[inline]
    #[must_use]
    pub const fn method(&self) -> Method {
        self.method
    }

    /// Still waiting for a later pass
    #[inline]
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.method == Method::Unassigned
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.text)
    }
}

/// Every loaded word, in rank order
#[derive(Debug, Clone, Default)]
pub struct WordTable {
    words: Vec<Word>,
    by_text: FxHashMap<String, WordId>,
}

impl WordTable {
    /// Build the table from ranked words, capped at `config.max_words`
    ///
    /// Extra words are dropped with a warning, or rejected outright when
    /// `config.strict_capacity` is set. Assignment state is reset.
    ///
    /// # Errors
    /// Returns `HublinError::CapacityExceeded` in strict mode when there are
    /// more words than the configured maximum.
    pub fn load(words: impl IntoIterator<Item = Word>, config: &AllocatorConfig) -> Result<Self> {
        let mut words: Vec<Word> = words.into_iter().collect();

        if words.len() > config.max_words {
            let err = HublinError::CapacityExceeded {
                found: words.len(),
                max: config.max_words,
            };
            if config.strict_capacity {
                return Err(err);
            }
            warn!("{err}; truncating");
            words.truncate(config.max_words);
        }

        let mut by_text = FxHashMap::default();
        for (id, word) in words.iter_mut().enumerate() {
            word.slot = None;
            word.method = Method::Unassigned;
            by_text.entry(word.text.clone()).or_insert(id);
        }

        debug!(words = words.len(), "word table loaded");
        Ok(Self { words, by_text })
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn get(&self, id: WordId) -> Option<&Word> {
        self.words.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }

    /// Look up a word by text (first occurrence wins)
    #[must_use]
    pub fn find(&self, text: &str) -> Option<WordId> {
        self.by_text.get(&text.to_ascii_lowercase()).copied()
    }

    /// Ids of words still unassigned whose length satisfies `keep`
    pub fn pending(&self, keep: impl Fn(usize) -> bool) -> Vec<WordId> {
        self.words
            .iter()
            .enumerate()
            .filter(|(_, w)| w.is_pending() && keep(w.len()))
            .map(|(id, _)| id)
            .collect()
    }

    pub(crate) fn bind(&mut self, id: WordId, slot: SlotId, method: Method) {
        let word = &mut self.words[id];
        word.slot = Some(slot);
        word.method = method;
    }

    pub(crate) fn rebind(&mut self, id: WordId, slot: SlotId) {
        self.words[id].slot = Some(slot);
    }

    pub(crate) fn mark_skipped(&mut self, id: WordId) {
        self.words[id].method = Method::Skipped;
    }
}
