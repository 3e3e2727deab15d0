//! Shortcut allocation
//!
//! `Allocation` owns both tables for the duration of a run and is the only
//! place where a word and a slot get linked, so the two sides never disagree.

mod driver;
mod pattern;
mod ranking;
mod swap;

pub use driver::allocate;
pub use pattern::SlotPattern;
pub use ranking::rank_by_word_text;
pub use swap::SwapDirective;

use crate::core::{
    Method, PAIR_SLOTS, SINGLE_SLOTS, Slot, SlotCode, SlotId, SlotTable, Word, WordId, WordTable,
};

/// Word table and slot table after (or during) allocation
#[derive(Debug, Clone)]
pub struct Allocation {
    words: WordTable,
    slots: SlotTable,
}

impl Allocation {
    /// Pair a loaded word table with a fresh slot universe
    #[must_use]
    pub fn new(words: WordTable) -> Self {
        Self {
            words,
            slots: SlotTable::generate(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn words(&self) -> &WordTable {
        &self.words
    }

    #[inline]
    #[must_use]
    pub const fn slots(&self) -> &SlotTable {
        &self.slots
    }

    /// Bind `word` to the first free slot matching `pattern`
    ///
    /// Slots are scanned in generation order. On success the slot's occupant,
    /// the word's slot and the word's method are all set; on failure nothing
    /// changes.
    pub fn try_bind(&mut self, pattern: SlotPattern, word: WordId, method: Method) -> bool {
        let Some(slot) = self.slots.first_free(|code| pattern.matches(code)) else {
            return false;
        };
        self.slots.set_occupant(slot, Some(word));
        self.words.bind(word, slot, method);
        true
    }

    pub(crate) fn mark_skipped(&mut self, word: WordId) {
        self.words.mark_skipped(word);
    }

    /// Exchange the occupants of two occupied slots, keeping method tags
    pub(crate) fn exchange(&mut self, a: SlotId, b: SlotId, first: WordId, second: WordId) {
        self.slots.set_occupant(a, Some(second));
        self.slots.set_occupant(b, Some(first));
        self.words.rebind(second, a);
        self.words.rebind(first, b);
    }

    /// Word occupying a slot
    #[must_use]
    pub fn occupant(&self, slot: &Slot) -> Option<&Word> {
        slot.occupant().and_then(|id| self.words.get(id))
    }

    /// Code of the slot bound to a word
    #[must_use]
    pub fn code_of(&self, word: &Word) -> Option<SlotCode> {
        word.slot()
            .and_then(|id| self.slots.get(id))
            .map(Slot::code)
    }

    /// Shortcut assigned to a word, if any
    #[must_use]
    pub fn shortcut_for(&self, text: &str) -> Option<SlotCode> {
        let id = self.words.find(text)?;
        self.words.get(id).and_then(|word| self.code_of(word))
    }

    /// Word a shortcut expands to, if any
    #[must_use]
    pub fn word_for(&self, code: SlotCode) -> Option<&Word> {
        self.slots
            .get(code.id())
            .and_then(|slot| self.occupant(slot))
    }

    /// Per-method counts and slot usage
    #[must_use]
    pub fn summary(&self) -> Summary {
        let mut counts = [0; Method::COUNT];
        for word in self.words.iter() {
            counts[word.method().index()] += 1;
        }
        Summary {
            counts,
            total_words: self.words.len(),
            free_slots: self.slots.free_count(),
        }
    }
}

/// Counters describing a finished allocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    counts: [usize; Method::COUNT],
    pub total_words: usize,
    pub free_slots: usize,
}

impl Summary {
    pub const SINGLE_SLOTS: usize = SINGLE_SLOTS;
    pub const PAIR_SLOTS: usize = PAIR_SLOTS;
    pub const TOTAL_SLOTS: usize = SINGLE_SLOTS + PAIR_SLOTS;

    #[must_use]
    pub const fn count(&self, method: Method) -> usize {
        self.counts[method.index()]
    }

    /// Words holding a shortcut
    #[must_use]
    pub fn assigned(&self) -> usize {
        self.total_words - self.skipped() - self.unassigned()
    }

    #[must_use]
    pub const fn skipped(&self) -> usize {
        self.count(Method::Skipped)
    }

    /// Words the final pass could not place
    #[must_use]
    pub const fn unassigned(&self) -> usize {
        self.count(Method::Unassigned)
    }

    /// `(method, count)` in `Method::ALL` order
    pub fn iter(&self) -> impl Iterator<Item = (Method, usize)> + '_ {
        Method::ALL.into_iter().map(|m| (m, self.count(m)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AllocatorConfig;

    fn allocation(texts: &[&str]) -> Allocation {
        let words = texts
            .iter()
            .zip(1..)
            .map(|(t, rank)| Word::new(rank, *t).unwrap());
        Allocation::new(WordTable::load(words, &AllocatorConfig::default()).unwrap())
    }

    #[test]
    fn try_bind_links_both_sides() {
        let mut alloc = allocation(&["the"]);
        assert!(alloc.try_bind(SlotPattern::Exact(SlotCode::single(b't')), 0, Method::Subsequence));

        let word = alloc.words().get(0).unwrap();
        assert_eq!(word.method(), Method::Subsequence);
        assert_eq!(alloc.code_of(word), Some(SlotCode::single(b't')));

        let slot = alloc.slots().get(SlotCode::single(b't').id()).unwrap();
        assert_eq!(slot.occupant(), Some(0));
    }

    #[test]
    fn try_bind_failure_leaves_word_untouched() {
        let mut alloc = allocation(&["the", "then"]);
        let t = SlotPattern::Exact(SlotCode::single(b't'));
        assert!(alloc.try_bind(t, 0, Method::Subsequence));
        assert!(!alloc.try_bind(t, 1, Method::Subsequence));

        let word = alloc.words().get(1).unwrap();
        assert_eq!(word.slot(), None);
        assert_eq!(word.method(), Method::Unassigned);
    }

    #[test]
    fn try_bind_takes_lowest_matching_slot() {
        let mut alloc = allocation(&["what", "when"]);
        assert!(alloc.try_bind(SlotPattern::FirstLetter(b'w'), 0, Method::ForcedFirst));
        assert!(alloc.try_bind(SlotPattern::FirstLetter(b'w'), 1, Method::ForcedFirst));
        assert_eq!(alloc.shortcut_for("what"), Some(SlotCode::pair(b'w', b'a')));
        assert_eq!(alloc.shortcut_for("when"), Some(SlotCode::pair(b'w', b'b')));
    }

    #[test]
    fn lookups_work_both_ways() {
        let mut alloc = allocation(&["of"]);
        assert!(alloc.try_bind(SlotPattern::Exact(SlotCode::pair(b'o', b'f')), 0, Method::Direct));
        assert_eq!(alloc.shortcut_for("of"), Some(SlotCode::pair(b'o', b'f')));
        assert_eq!(
            alloc.word_for(SlotCode::pair(b'o', b'f')).map(Word::text),
            Some("of")
        );
        assert!(alloc.word_for(SlotCode::single(b'o')).is_none());
        assert!(alloc.shortcut_for("missing").is_none());
    }

    #[test]
    fn summary_counts_methods() {
        let mut alloc = allocation(&["a", "the", "zzz"]);
        assert!(alloc.try_bind(SlotPattern::Exact(SlotCode::single(b'a')), 0, Method::Direct));
        assert!(alloc.try_bind(SlotPattern::Exact(SlotCode::single(b't')), 1, Method::Subsequence));
        alloc.mark_skipped(2);

        let summary = alloc.summary();
        assert_eq!(summary.count(Method::Direct), 1);
        assert_eq!(summary.count(Method::Subsequence), 1);
        assert_eq!(summary.skipped(), 1);
        assert_eq!(summary.unassigned(), 0);
        assert_eq!(summary.assigned(), 2);
        assert_eq!(summary.free_slots, Summary::TOTAL_SLOTS - 2);
        assert_eq!(summary.iter().map(|(_, n)| n).sum::<usize>(), 3);
    }
}
