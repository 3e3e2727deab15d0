//! Tiered assignment driver
//!
//! Five passes in fixed priority order. Each pass only looks at words that
//! every earlier pass left unassigned, walking them in rank order:
//!
//! 1. direct: 1-2 letter words take their own slot
//! 2. letters: single letters of the word, then any single letter, then
//!    ordered letter pairs from the word (first+second is a perfect match)
//! 3. forced-first: the word's first letter plus any second letter
//! 4. forced-any: any first letter plus one of the word's later letters
//! 5. sequential: next free slot; words of 3 letters or fewer are skipped
//!
//! Configured swap directives run last.

use tracing::{debug, warn};

use super::{Allocation, SlotPattern};
use crate::config::AllocatorConfig;
use crate::core::{Method, SlotCode, WordId, WordTable};
use crate::error::{InvariantViolation, Result};

/// Longest word that is its own shortcut
const DIRECT_MAX_LEN: usize = 2;
/// Shortest word that may take a two-letter shortcut
const PAIR_MIN_LEN: usize = 4;

/// Run every pass over `words`, then apply `config.swaps`
///
/// # Errors
/// Returns `HublinError::AllocationInvariantViolation` if a short word cannot
/// take its own slot (duplicate input) or a swap directive names an empty slot.
///
/// # Examples
/// ```
/// use hublin::allocator::allocate;
/// use hublin::config::AllocatorConfig;
/// use hublin::core::{Method, Word, WordTable};
///
/// let config = AllocatorConfig::default();
/// let words = vec![Word::new(1, "the").unwrap(), Word::new(2, "of").unwrap()];
/// let allocation = allocate(WordTable::load(words, &config).unwrap(), &config).unwrap();
///
/// assert_eq!(allocation.shortcut_for("the").unwrap().to_string(), "t");
/// assert_eq!(allocation.shortcut_for("of").unwrap().to_string(), "of");
/// ```
pub fn allocate(words: WordTable, config: &AllocatorConfig) -> Result<Allocation> {
    let mut allocation = Allocation::new(words);

    let direct = direct_pass(&mut allocation)?;
    debug!(bound = direct, "direct pass complete");

    let letters = letters_pass(&mut allocation);
    debug!(bound = letters, "letters pass complete");

    let first = forced_first_pass(&mut allocation);
    debug!(bound = first, "forced-first pass complete");

    let any = forced_any_pass(&mut allocation);
    debug!(bound = any, "forced-any pass complete");

    let (sequential, skipped) = sequential_pass(&mut allocation);
    debug!(bound = sequential, skipped, "sequential pass complete");

    for directive in &config.swaps {
        directive.apply(&mut allocation)?;
    }
    if !config.swaps.is_empty() {
        debug!(swaps = config.swaps.len(), "swap directives applied");
    }

    Ok(allocation)
}

fn letters_of(allocation: &Allocation, id: WordId) -> Vec<u8> {
    allocation
        .words()
        .get(id)
        .map(|w| w.letters().to_vec())
        .unwrap_or_default()
}

fn direct_pass(allocation: &mut Allocation) -> Result<usize> {
    let pending = allocation.words().pending(|len| len <= DIRECT_MAX_LEN);

    for &id in &pending {
        let letters = letters_of(allocation, id);
        let code = match letters[..] {
            [a] => SlotCode::single(a),
            [a, b] => SlotCode::pair(a, b),
            _ => continue,
        };
        if !allocation.try_bind(SlotPattern::Exact(code), id, Method::Direct) {
            let word = allocation.words().get(id);
            return Err(InvariantViolation::DirectBind {
                word: word.map(|w| w.text().to_string()).unwrap_or_default(),
                rank: word.map_or(0, |w| w.rank()),
            }
            .into());
        }
    }

    Ok(pending.len())
}

fn letters_pass(allocation: &mut Allocation) -> usize {
    allocation
        .words()
        .pending(|len| len > DIRECT_MAX_LEN)
        .into_iter()
        .filter(|&id| bind_by_letters(allocation, id))
        .count()
}

fn bind_by_letters(allocation: &mut Allocation, id: WordId) -> bool {
    let letters = letters_of(allocation, id);

    // Single-letter slots: the word's own letters first, then the alphabet
    let singles = letters.iter().copied().chain(b'a'..=b'z');
    for letter in singles {
        let pattern = SlotPattern::Exact(SlotCode::single(letter));
        if allocation.try_bind(pattern, id, Method::Subsequence) {
            return true;
        }
    }

    if letters.len() < PAIR_MIN_LEN {
        return false;
    }

    for i in 0..letters.len() {
        for j in i + 1..letters.len() {
            let method = if (i, j) == (0, 1) {
                Method::Perfect
            } else {
                Method::Subsequence
            };
            let pattern = SlotPattern::Exact(SlotCode::pair(letters[i], letters[j]));
            if allocation.try_bind(pattern, id, method) {
                return true;
            }
        }
    }

    false
}

fn forced_first_pass(allocation: &mut Allocation) -> usize {
    allocation
        .words()
        .pending(|len| len >= PAIR_MIN_LEN)
        .into_iter()
        .filter(|&id| {
            let first = letters_of(allocation, id)[0];
            allocation.try_bind(SlotPattern::FirstLetter(first), id, Method::ForcedFirst)
        })
        .count()
}

fn forced_any_pass(allocation: &mut Allocation) -> usize {
    allocation
        .words()
        .pending(|len| len >= PAIR_MIN_LEN)
        .into_iter()
        .filter(|&id| bind_with_any_first(allocation, id))
        .count()
}

fn bind_with_any_first(allocation: &mut Allocation, id: WordId) -> bool {
    let letters = letters_of(allocation, id);

    for first in b'a'..=b'z' {
        for &second in &letters[1..] {
            let pattern = SlotPattern::Exact(SlotCode::pair(first, second));
            if allocation.try_bind(pattern, id, Method::ForcedAny) {
                return true;
            }
        }
    }

    false
}

/// Returns `(bound, skipped)`
fn sequential_pass(allocation: &mut Allocation) -> (usize, usize) {
    let mut bound = 0;
    let mut skipped = 0;

    for id in allocation.words().pending(|_| true) {
        let long_enough = allocation
            .words()
            .get(id)
            .is_some_and(|w| w.len() >= PAIR_MIN_LEN);

        if !long_enough {
            allocation.mark_skipped(id);
            skipped += 1;
        } else if allocation.try_bind(SlotPattern::Any, id, Method::Sequential) {
            bound += 1;
        } else if let Some(word) = allocation.words().get(id) {
            warn!(word = word.text(), rank = word.rank(), "no free slot left");
        }
    }

    (bound, skipped)
}
