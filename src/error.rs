//! Error types shared across the crate

use thiserror::Error;

use crate::core::{SlotCodeError, WordError};

/// Why a single input record was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("expected `rank word`")]
    MissingField,
    #[error("rank {0:?} is not a positive integer")]
    BadRank(String),
    #[error("rank {rank} does not follow previous rank {previous}")]
    RankOrder { rank: u32, previous: u32 },
    #[error(transparent)]
    Word(#[from] WordError),
}

/// A malformed record in a word-frequency source
///
/// Recoverable: the loader skips the record and keeps going.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}: {reason} (got {raw:?})")]
pub struct ParseError {
    pub line: usize,
    pub raw: String,
    pub reason: RecordError,
}

/// Broken allocation state; always aborts the run
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("short word {word:?} (rank {rank}) could not take its own slot")]
    DirectBind { word: String, rank: u32 },
    #[error("swap references unoccupied slot {slot:?}")]
    UnoccupiedSwapSlot { slot: String },
}

#[derive(Error, Debug)]
pub enum HublinError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("word list holds {found} words, more than the configured maximum of {max}")]
    CapacityExceeded { found: usize, max: usize },

    #[error("allocation invariant violated: {0}")]
    AllocationInvariantViolation(#[from] InvariantViolation),

    #[error(transparent)]
    UnknownSlot(#[from] SlotCodeError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = HublinError> = std::result::Result<T, E>;
