//! Post-hoc slot exchanges
//!
//! Some allocations are fine by the rules but awkward in practice (two
//! frequent words whose shortcuts read as each other). A swap directive
//! exchanges the words in two slots after allocation has finished.

use std::fmt;
use std::str::FromStr;

use super::Allocation;
use crate::core::{SlotCode, SlotCodeError, SlotId, TOTAL_SLOTS};
use crate::error::{InvariantViolation, Result};

/// Exchange the occupants of two slots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapDirective {
    pub a: SlotId,
    pub b: SlotId,
}

impl SwapDirective {
    /// # Errors
    /// Returns `SlotCodeError::IndexOutOfRange` if either index is past the slot table.
    pub const fn new(a: SlotId, b: SlotId) -> Result<Self, SlotCodeError> {
        if a >= TOTAL_SLOTS {
            return Err(SlotCodeError::IndexOutOfRange(a));
        }
        if b >= TOTAL_SLOTS {
            return Err(SlotCodeError::IndexOutOfRange(b));
        }
        Ok(Self { a, b })
    }

    #[must_use]
    pub const fn between(a: SlotCode, b: SlotCode) -> Self {
        Self { a: a.id(), b: b.id() }
    }

    /// Swap the two occupants; method tags stay with their words
    ///
    /// # Errors
    /// Returns `InvariantViolation::UnoccupiedSwapSlot` if either slot is empty.
    pub fn apply(self, allocation: &mut Allocation) -> Result<()> {
        let first = occupant_of(allocation, self.a)?;
        let second = occupant_of(allocation, self.b)?;
        if self.a != self.b {
            allocation.exchange(self.a, self.b, first, second);
        }
        Ok(())
    }
}

fn occupant_of(allocation: &Allocation, id: SlotId) -> Result<usize> {
    allocation
        .slots()
        .get(id)
        .and_then(crate::core::Slot::occupant)
        .ok_or_else(|| {
            let slot = SlotCode::from_id(id).map_or_else(|_| id.to_string(), |c| c.to_string());
            InvariantViolation::UnoccupiedSwapSlot { slot }.into()
        })
}

fn parse_slot(token: &str) -> Result<SlotId, SlotCodeError> {
    let token = token.trim();
    if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
        let id = token
            .parse()
            .map_err(|_| SlotCodeError::InvalidCode(token.to_string()))?;
        SlotCode::from_id(id).map(SlotCode::id)
    } else {
        token.parse::<SlotCode>().map(SlotCode::id)
    }
}

/// Parses `A:B` where each side is a slot code (`c`, `of`) or a slot index
impl FromStr for SwapDirective {
    type Err = SlotCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (a, b) = s
            .split_once(':')
            .ok_or_else(|| SlotCodeError::InvalidCode(s.to_string()))?;
        Self::new(parse_slot(a)?, parse_slot(b)?)
    }
}

impl fmt::Display for SwapDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (SlotCode::from_id(self.a), SlotCode::from_id(self.b)) {
            (Ok(a), Ok(b)) => write!(f, "{a}:{b}"),
            _ => write!(f, "{}:{}", self.a, self.b),
        }
    }
}
