//! Formatting utilities for terminal output
//!
//! Everything here returns plain strings so reports can be tested without a
//! terminal; `display` adds color and prints.

use crate::allocator::{Allocation, Summary, rank_by_word_text};
use crate::core::{Method, Slot, Word};

/// Width of the word column in line reports
const WORD_WIDTH: usize = 15;
/// Width of the word part of a quicksheet cell
const CELL_WORD_WIDTH: usize = 11;

/// Quicksheet ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SheetOrder {
    /// Slot generation order: a..z, then aa..zz
    #[default]
    Shortcut,
    /// Alphabetical by word
    Word,
    /// Frequency rank
    Rank,
}

/// `rank  word  code  symbol  slot#`
#[must_use]
pub fn word_line(allocation: &Allocation, word: &Word) -> String {
    let code = allocation
        .code_of(word)
        .map_or_else(|| "--".to_string(), |c| c.padded());
    let slot = word
        .slot()
        .map_or_else(|| "-".to_string(), |id| (id + 1).to_string());
    format!(
        "{:>4}  {:<WORD_WIDTH$} {}  {}  {:>4}",
        word.rank(),
        word.text(),
        code,
        word.method().symbol(),
        slot
    )
}

/// `code :: word (rank) symbol`, or `code :: -` for a free slot
#[must_use]
pub fn slot_line(allocation: &Allocation, slot: &Slot) -> String {
    let code = slot.code().padded();
    match allocation.occupant(slot) {
        Some(word) => format!(
            "   {code} :: {:<WORD_WIDTH$} ({:>4}) {}",
            word.text(),
            word.rank(),
            word.method().symbol()
        ),
        None => format!("   {code} :: -"),
    }
}

/// Per-slot report rows in generation order
///
/// Without a filter every slot is listed, free ones included. With a method
/// filter only slots whose occupant carries that tag are kept.
#[must_use]
pub fn slot_lines(allocation: &Allocation, method: Option<Method>) -> Vec<String> {
    allocation
        .slots()
        .iter()
        .filter(|slot| match method {
            Some(method) => allocation.occupant(slot).is_some_and(|w| w.method() == method),
            None => true,
        })
        .map(|slot| slot_line(allocation, slot))
        .collect()
}

/// `code - word` in alphabetical order of the word, occupied slots only
#[must_use]
pub fn alphabetical_lines(allocation: &Allocation) -> Vec<String> {
    rank_by_word_text(allocation)
        .into_iter()
        .filter_map(|id| allocation.slots().get(id))
        .filter_map(|slot| {
            allocation
                .occupant(slot)
                .map(|word| format!("{} - {}", slot.code().padded(), word.text()))
        })
        .collect()
}

/// Counter block shared by the summary report and quicksheet footer
#[must_use]
pub fn summary_lines(summary: &Summary) -> Vec<String> {
    let mut lines = vec![
        format!("{:>4} a-z slots", Summary::SINGLE_SLOTS),
        format!("{:>4} aa-zz slots", Summary::PAIR_SLOTS),
        format!("{:>4} total slots", Summary::TOTAL_SLOTS),
        format!("{:>4} free slots", summary.free_slots),
    ];
    lines.extend(
        summary
            .iter()
            .filter(|&(_, count)| count > 0)
            .map(|(method, count)| format!("{count:>4} {method} ({})", method.symbol())),
    );
    lines.push(format!("{:>4} assigned", summary.assigned()));
    lines.push(format!("{:>4} words", summary.total_words));
    lines
}

fn cell(code: &str, word: &str) -> String {
    format!("{code:<2} {word:<CELL_WORD_WIDTH$.CELL_WORD_WIDTH$}")
}

/// One quicksheet cell per entry, in the requested order
#[must_use]
pub fn quicksheet_cells(allocation: &Allocation, order: SheetOrder) -> Vec<String> {
    let slot_cell = |slot: &Slot| {
        let word = allocation.occupant(slot).map_or("", Word::text);
        cell(&slot.code().to_string(), word)
    };

    match order {
        SheetOrder::Shortcut => allocation.slots().iter().map(slot_cell).collect(),
        SheetOrder::Word => rank_by_word_text(allocation)
            .into_iter()
            .filter_map(|id| allocation.slots().get(id))
            .map(slot_cell)
            .collect(),
        SheetOrder::Rank => allocation
            .words()
            .iter()
            .map(|word| {
                let code = allocation
                    .code_of(word)
                    .map_or_else(|| "--".to_string(), |c| c.to_string());
                cell(&code, word.text())
            })
            .collect(),
    }
}

/// Lay cells out column-major, `rows` cells per column
#[must_use]
pub fn grid(cells: &[String], rows: usize) -> Vec<String> {
    if cells.is_empty() || rows == 0 {
        return Vec::new();
    }
    let columns = cells.len().div_ceil(rows);
    let rows = rows.min(cells.len());

    (0..rows)
        .map(|row| {
            (0..columns)
                .filter_map(|col| cells.get(col * rows + row))
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocator::allocate;
    use crate::config::AllocatorConfig;
    use crate::core::{SlotCode, TOTAL_SLOTS, WordTable};

    fn allocation(texts: &[&str]) -> Allocation {
        let config = AllocatorConfig::default();
        let words = texts
            .iter()
            .zip(1..)
            .map(|(t, rank)| Word::new(rank, *t).unwrap());
        allocate(WordTable::load(words, &config).unwrap(), &config).unwrap()
    }

    #[test]
    fn word_line_columns() {
        let alloc = allocation(&["the", "of"]);
        let the = alloc.words().get(0).unwrap();
        assert_eq!(word_line(&alloc, the), "   1  the             t   +    20");
        let of = alloc.words().get(1).unwrap();
        assert_eq!(word_line(&alloc, of), "   2  of              of  @   396");
    }

    #[test]
    fn word_line_without_shortcut() {
        let mut texts: Vec<String> = (b'a'..=b'z').map(|c| char::from(c).to_string()).collect();
        texts.push("the".into());
        let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
        let alloc = allocation(&refs);
        let the = alloc.words().get(26).unwrap();
        assert_eq!(word_line(&alloc, the), "  27  the             --  ~     -");
    }

    #[test]
    fn slot_line_columns() {
        let alloc = allocation(&["the"]);
        let t = alloc.slots().get(SlotCode::single(b't').id()).unwrap();
        assert_eq!(slot_line(&alloc, t), "   t  :: the             (   1) +");
        let a = alloc.slots().get(0).unwrap();
        assert_eq!(slot_line(&alloc, a), "   a  :: -");
    }

    #[test]
    fn slot_report_lists_free_slots() {
        let alloc = allocation(&["the", "of"]);
        let lines = slot_lines(&alloc, None);
        assert_eq!(lines.len(), TOTAL_SLOTS);
        assert_eq!(lines[0], "   a  :: -");
        assert_eq!(lines.iter().filter(|l| l.ends_with(":: -")).count(), TOTAL_SLOTS - 2);
    }

    #[test]
    fn slot_report_filter_keeps_matching_occupants() {
        let alloc = allocation(&["the", "of"]);
        assert_eq!(
            slot_lines(&alloc, Some(Method::Direct)),
            ["   of :: of              (   2) @"]
        );
        assert!(slot_lines(&alloc, Some(Method::Sequential)).is_empty());
    }

    #[test]
    fn alphabetical_occupied_only() {
        let alloc = allocation(&["the", "of", "and"]);
        assert_eq!(alphabetical_lines(&alloc), ["a  - and", "of - of", "t  - the"]);
    }

    #[test]
    fn summary_block_lists_nonzero_methods() {
        let alloc = allocation(&["the", "of"]);
        let lines = summary_lines(&alloc.summary());
        assert!(lines.contains(&"   1 direct (@)".to_string()));
        assert!(lines.contains(&"   1 subsequence (+)".to_string()));
        assert!(!lines.iter().any(|l| l.contains("perfect")));
        assert_eq!(lines.last().map(String::as_str), Some("   2 words"));
    }

    #[test]
    fn cells_truncate_long_words() {
        assert_eq!(cell("ab", "characteristic"), "ab characteris");
        assert_eq!(cell("a", "the"), "a  the        ");
    }

    #[test]
    fn quicksheet_rank_order() {
        let alloc = allocation(&["the", "of"]);
        let cells = quicksheet_cells(&alloc, SheetOrder::Rank);
        assert_eq!(cells, ["t  the        ", "of of         "]);
    }

    #[test]
    fn quicksheet_shortcut_covers_every_slot() {
        let alloc = allocation(&["the"]);
        assert_eq!(quicksheet_cells(&alloc, SheetOrder::Shortcut).len(), 702);
        let by_word = quicksheet_cells(&alloc, SheetOrder::Word);
        assert_eq!(by_word[0], "t  the        ");
    }

    #[test]
    fn grid_is_column_major() {
        let cells: Vec<String> = ["a", "b", "c", "d", "e"].iter().map(ToString::to_string).collect();
        assert_eq!(grid(&cells, 2), ["a  c  e", "b  d"]);
        assert_eq!(grid(&cells, 10), ["a", "b", "c", "d", "e"]);
        assert!(grid(&[], 3).is_empty());
    }
}
