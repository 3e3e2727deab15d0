//! Slot patterns used when searching for a free slot

use crate::core::SlotCode;

/// Which slot codes a bind attempt will accept
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotPattern {
    /// Exactly this code
    Exact(SlotCode),
    /// Any two-letter code starting with this letter
    FirstLetter(u8),
    /// Any code at all
    Any,
}

impl SlotPattern {
    #[inline]
    #[must_use]
    pub fn matches(self, code: SlotCode) -> bool {
        match self {
            Self::Exact(wanted) => code == wanted,
            Self::FirstLetter(first) => !code.is_single() && code.first() == first,
            Self::Any => true,
        }
    }
}
