//! Alphabetical view of the slot table

use std::cmp::Ordering;

use super::Allocation;
use crate::core::SlotId;

/// Slot ids ordered by their occupant's text
///
/// Byte-wise ascending and stable. Slots holding equal texts keep generation
/// order, whatever the ranks of their words. Unoccupied slots are kept and
/// sort last, in generation order.
#[must_use]
pub fn rank_by_word_text(allocation: &Allocation) -> Vec<SlotId> {
    let text_of = move |id: SlotId| {
        allocation
            .slots()
            .get(id)
            .and_then(|slot| allocation.occupant(slot))
            .map(|word| word.text().as_bytes())
    };

    let mut order: Vec<SlotId> = (0..allocation.slots().len()).collect();
    order.sort_by(|&a, &b| match (text_of(a), text_of(b)) {
        (Some(x), Some(y)) => x.cmp(y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    order
}
