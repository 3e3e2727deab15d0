//! Shortcut slot codes and the slot table
//!
//! The slot universe is fixed: 26 single letters followed by every two-letter
//! pair, 702 slots in all. A slot's position in that order is its `SlotId`.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::word::WordId;

/// Index of a slot in generation order
pub type SlotId = usize;

pub const ALPHABET_LEN: usize = 26;
pub const SINGLE_SLOTS: usize = ALPHABET_LEN;
pub const PAIR_SLOTS: usize = ALPHABET_LEN * ALPHABET_LEN;
pub const TOTAL_SLOTS: usize = SINGLE_SLOTS + PAIR_SLOTS;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlotCodeError {
    #[error("slot code must be one or two lowercase letters, got {0:?}")]
    InvalidCode(String),
    #[error("slot index {0} is out of range (0..{TOTAL_SLOTS})")]
    IndexOutOfRange(usize),
}

/// A one- or two-letter shortcut code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotCode {
    first: u8,
    second: Option<u8>,
}

impl SlotCode {
    /// Single-letter code
    ///
    /// # Panics
    /// Panics in debug mode if `letter` is not `a..=z`
    #[inline]
    #[must_use]
    pub const fn single(letter: u8) -> Self {
        debug_assert!(letter.is_ascii_lowercase());
        Self {
            first: letter,
            second: None,
        }
    }

    /// Two-letter code
    ///
    /// # Panics
    /// Panics in debug mode if either letter is not `a..=z`
    #[inline]
    #[must_use]
    pub const fn pair(first: u8, second: u8) -> Self {
        debug_assert!(first.is_ascii_lowercase() && second.is_ascii_lowercase());
        Self {
            first,
            second: Some(second),
        }
    }

    #[inline]
    #[must_use]
    pub const fn first(self) -> u8 {
        self.first
    }

    #[inline]
    #[must_use]
    pub const fn second(self) -> Option<u8> {
        self.second
    }

    #[inline]
    #[must_use]
    pub const fn is_single(self) -> bool {
        self.second.is_none()
    }

    /// Position of this code in generation order
    #[must_use]
    pub const fn id(self) -> SlotId {
        let outer = (self.first - b'a') as usize;
        match self.second {
            None => outer,
            Some(inner) => SINGLE_SLOTS + outer * ALPHABET_LEN + (inner - b'a') as usize,
        }
    }

    /// Code at a position in generation order
    ///
    /// # Errors
    /// Returns `SlotCodeError::IndexOutOfRange` if `id >= TOTAL_SLOTS`.
    pub const fn from_id(id: SlotId) -> Result<Self, SlotCodeError> {
        if id < SINGLE_SLOTS {
            Ok(Self::single(b'a' + id as u8))
        } else if id < TOTAL_SLOTS {
            let rest = id - SINGLE_SLOTS;
            Ok(Self::pair(
                b'a' + (rest / ALPHABET_LEN) as u8,
                b'a' + (rest % ALPHABET_LEN) as u8,
            ))
        } else {
            Err(SlotCodeError::IndexOutOfRange(id))
        }
    }

    /// Two-column rendering, single letters padded with a blank
    #[must_use]
    pub fn padded(self) -> String {
        format!("{self:<2}")
    }
}

impl fmt::Display for SlotCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = [self.first, b' '];
        let len = match self.second {
            Some(second) => {
                buf[1] = second;
                2
            }
            None => 1,
        };
        // Letters are validated ASCII
        let text = std::str::from_utf8(&buf[..len]).map_err(|_| fmt::Error)?;
        f.pad(text)
    }
}

impl FromStr for SlotCode {
    type Err = SlotCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        match lowered.as_bytes() {
            [a] if a.is_ascii_lowercase() => Ok(Self::single(*a)),
            [a, b] if a.is_ascii_lowercase() && b.is_ascii_lowercase() => Ok(Self::pair(*a, *b)),
            _ => Err(SlotCodeError::InvalidCode(s.to_string())),
        }
    }
}

/// A shortcut slot and its occupant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    code: SlotCode,
    occupant: Option<WordId>,
}

impl Slot {
    #[inline]
    #[must_use]
    pub const fn code(&self) -> SlotCode {
        self.code
    }

    #[inline]
    #[must_use]
    pub const fn occupant(&self) -> Option<WordId> {
        self.occupant
    }

    #[inline]
    #[must_use]
    pub const fn is_free(&self) -> bool {
        self.occupant.is_none()
    }
}

/// Every shortcut slot, in generation order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotTable {
    slots: Vec<Slot>,
}

impl SlotTable {
    /// Build the full slot universe: `a..z`, then `aa..zz` outer-major
    #[must_use]
    pub fn generate() -> Self {
        let singles = (b'a'..=b'z').map(SlotCode::single);
        let pairs = (b'a'..=b'z').flat_map(|first| (b'a'..=b'z').map(move |second| SlotCode::pair(first, second)));

        let slots = singles
            .chain(pairs)
            .map(|code| Slot {
                code,
                occupant: None,
            })
            .collect();

        Self { slots }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn get(&self, id: SlotId) -> Option<&Slot> {
        self.slots.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Slot> {
        self.slots.iter()
    }

    /// First free slot whose code satisfies `matches`, in generation order
    pub fn first_free(&self, matches: impl Fn(SlotCode) -> bool) -> Option<SlotId> {
        self.slots
            .iter()
            .position(|slot| slot.is_free() && matches(slot.code))
    }

    #[must_use]
    pub fn free_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_free()).count()
    }

    pub(crate) fn set_occupant(&mut self, id: SlotId, word: Option<WordId>) {
        self.slots[id].occupant = word;
    }
}

impl Default for SlotTable {
    fn default() -> Self {
        Self::generate()
    }
}
