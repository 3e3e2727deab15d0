//! Allocation settings

use crate::allocator::SwapDirective;

/// Default cap on words read from a frequency list
///
/// Keeps the word count comfortably below the 702 available slots once the
/// short words that are skipped are accounted for.
pub const DEFAULT_MAX_WORDS: usize = 800;

/// Configuration for an allocation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocatorConfig {
    /// Maximum number of words taken from the input
    pub max_words: usize,
    /// Fail instead of truncating when the input exceeds `max_words`
    pub strict_capacity: bool,
    /// Slot exchanges applied after every pass has run
    pub swaps: Vec<SwapDirective>,
}

impl AllocatorConfig {
    #[must_use]
    pub const fn new(max_words: usize) -> Self {
        Self {
            max_words,
            strict_capacity: false,
            swaps: Vec::new(),
        }
    }

    #[must_use]
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict_capacity = strict;
        self
    }

    #[must_use]
    pub fn with_swaps(mut self, swaps: impl IntoIterator<Item = SwapDirective>) -> Self {
        self.swaps.extend(swaps);
        self
    }
}

impl Default for AllocatorConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_WORDS)
    }
}
