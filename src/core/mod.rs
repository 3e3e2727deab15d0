//! Core domain types for shortcut allocation
//!
//! Words, method tags and the slot universe. Cross-references between the two
//! tables are plain indices (`WordId`, `SlotId`).

mod slot;
mod word;

pub use slot::{
    ALPHABET_LEN, PAIR_SLOTS, SINGLE_SLOTS, Slot, SlotCode, SlotCodeError, SlotId, SlotTable,
    TOTAL_SLOTS,
};
pub use word::{MAX_WORD_LEN, Method, Word, WordError, WordId, WordTable};
