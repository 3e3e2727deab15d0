//! Word ↔ shortcut lookups

use crate::allocator::Allocation;
use crate::core::{Method, SlotCode};

/// A word together with its shortcut and how it got it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResult {
    pub word: String,
    pub rank: u32,
    pub shortcut: Option<SlotCode>,
    pub method: Method,
}

/// Find the shortcut for a word
///
/// # Errors
///
/// Returns an error if the word is not in the allocated list.
pub fn abbreviate(allocation: &Allocation, word: &str) -> Result<LookupResult, String> {
    let id = allocation
        .words()
        .find(word)
        .ok_or_else(|| format!("Word '{word}' not in word list"))?;
    let entry = allocation
        .words()
        .get(id)
        .ok_or_else(|| format!("Word '{word}' not in word list"))?;

    Ok(LookupResult {
        word: entry.text().to_string(),
        rank: entry.rank(),
        shortcut: allocation.code_of(entry),
        method: entry.method(),
    })
}

/// Find the word a shortcut expands to
///
/// # Errors
///
/// Returns an error if `code` is not a valid slot code or the slot is empty.
pub fn expand(allocation: &Allocation, code: &str) -> Result<LookupResult, String> {
    let slot: SlotCode = code.parse().map_err(|e| format!("Invalid shortcut: {e}"))?;
    let entry = allocation
        .word_for(slot)
        .ok_or_else(|| format!("Shortcut '{slot}' is not assigned"))?;

    Ok(LookupResult {
        word: entry.text().to_string(),
        rank: entry.rank(),
        shortcut: Some(slot),
        method: entry.method(),
    })
}
