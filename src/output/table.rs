//! Static shortcut table dump
//!
//! Emits Rust source with the finished mapping so another program can embed
//! it as const data, the same way `build.rs` embeds the word list.

use std::fmt;

use crate::allocator::{Allocation, rank_by_word_text};
use crate::core::SlotId;

/// Rust source declaring `SHORTCUTS` (slot order) and `SHORTCUTS_BY_WORD`
#[derive(Clone, Copy)]
pub struct StaticTable<'a> {
    allocation: &'a Allocation,
}

impl<'a> StaticTable<'a> {
    #[must_use]
    pub const fn new(allocation: &'a Allocation) -> Self {
        Self { allocation }
    }

    fn write_table(
        &self,
        f: &mut fmt::Formatter<'_>,
        name: &str,
        doc: &str,
        order: &[SlotId],
    ) -> fmt::Result {
        let entries: Vec<(String, &str)> = order
            .iter()
            .filter_map(|&id| self.allocation.slots().get(id))
            .filter_map(|slot| {
                self.allocation
                    .occupant(slot)
                    .map(|word| (slot.code().to_string(), word.text()))
            })
            .collect();

        writeln!(f, "/// {doc} ({} entries)", entries.len())?;
        writeln!(f, "pub const {name}: &[(&str, &str)] = &[")?;
        for (code, word) in &entries {
            writeln!(f, "    (\"{code}\", \"{word}\"),")?;
        }
        writeln!(f, "];")
    }
}

impl fmt::Display for StaticTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "// Generated by hublin")?;
        writeln!(f)?;

        let by_slot: Vec<SlotId> = (0..self.allocation.slots().len()).collect();
        self.write_table(f, "SHORTCUTS", "Shortcut to word, in shortcut order", &by_slot)?;
        writeln!(f)?;
        self.write_table(
            f,
            "SHORTCUTS_BY_WORD",
            "Shortcut to word, in word order",
            &rank_by_word_text(self.allocation),
        )
    }
}

/// Render the static table to a string
#[must_use]
pub fn static_table(allocation: &Allocation) -> String {
    StaticTable::new(allocation).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocator::allocate;
    use crate::config::AllocatorConfig;
    use crate::core::{Word, WordTable};

    #[test]
    fn emits_both_tables() {
        let config = AllocatorConfig::default();
        let words = ["the", "of", "and"]
            .iter()
            .zip(1..)
            .map(|(t, rank)| Word::new(rank, *t).unwrap());
        let alloc = allocate(WordTable::load(words, &config).unwrap(), &config).unwrap();

        let source = static_table(&alloc);
        let expected = "\
// Generated by hublin

/// Shortcut to word, in shortcut order (3 entries)
pub const SHORTCUTS: &[(&str, &str)] = &[
    (\"a\", \"and\"),
    (\"t\", \"the\"),
    (\"of\", \"of\"),
];

/// Shortcut to word, in word order (3 entries)
pub const SHORTCUTS_BY_WORD: &[(&str, &str)] = &[
    (\"a\", \"and\"),
    (\"of\", \"of\"),
    (\"t\", \"the\"),
];
";
        assert_eq!(source, expected);
    }
}
