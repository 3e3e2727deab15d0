//! Word lists for shortcut allocation
//!
//! Provides the embedded frequency list and loaders for external ones.

mod embedded;
pub mod loader;

pub use embedded::{RANKED_WORDS, RANKED_WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_MAX_WORDS;

    #[test]
    fn count_matches_const() {
        assert_eq!(RANKED_WORDS.len(), RANKED_WORDS_COUNT);
    }

    #[test]
    fn fits_default_capacity() {
        assert!(RANKED_WORDS_COUNT <= DEFAULT_MAX_WORDS);
    }

    #[test]
    fn ranks_strictly_increase() {
        assert!(RANKED_WORDS.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn words_are_valid() {
        for &(_, word) in RANKED_WORDS {
            assert!(
                (1..=14).contains(&word.len()),
                "Word '{word}' has bad length"
            );
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn short_words_are_unique() {
        let mut short: Vec<&str> = RANKED_WORDS
            .iter()
            .map(|&(_, w)| w)
            .filter(|w| w.len() <= 2)
            .collect();
        let total = short.len();
        short.sort_unstable();
        short.dedup();
        assert_eq!(short.len(), total);
    }
}
