//! Display functions for command results

use super::formatters::{
    SheetOrder, alphabetical_lines, grid, quicksheet_cells, slot_lines, summary_lines, word_line,
};
use super::table::StaticTable;
use crate::allocator::Allocation;
use crate::commands::{LookupResult, RunOutcome};
use crate::core::Method;
use colored::Colorize;

fn header(title: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", title.bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
}

fn total(count: usize) {
    println!("   {} {count}", "TOTAL".bold());
}

/// Print every word in rank order with its shortcut
pub fn print_word_report(allocation: &Allocation) {
    header("WORDS BY FREQUENCY");
    for word in allocation.words().iter() {
        println!("{}", word_line(allocation, word));
    }
    total(allocation.words().len());
}

/// Print the slot table in generation order, or only one method's slots
pub fn print_slot_report(allocation: &Allocation, method: Option<Method>) {
    match method {
        Some(method) => header(&format!("SHORTCUTS ASSIGNED BY {}", method.name().to_uppercase())),
        None => header("SHORTCUTS"),
    }

    let lines = slot_lines(allocation, method);
    for line in &lines {
        println!("{line}");
    }
    total(lines.len());
}

/// Print shortcuts in alphabetical order of their words
pub fn print_alphabetical_report(allocation: &Allocation) {
    header("SHORTCUTS BY WORD");
    let lines = alphabetical_lines(allocation);
    for line in &lines {
        println!("{line}");
    }
    total(lines.len());
}

/// Print the summary counters
pub fn print_summary(outcome: &RunOutcome) {
    header("SUMMARY");
    let summary = outcome.allocation.summary();
    for line in summary_lines(&summary) {
        println!("{line}");
    }

    if summary.unassigned() > 0 {
        println!(
            "{}",
            format!("{:>4} left without a slot", summary.unassigned())
                .red()
                .bold()
        );
    }
    if !outcome.rejected.is_empty() {
        println!(
            "{}",
            format!("{:>4} input records rejected", outcome.rejected.len()).yellow()
        );
    }
}

/// Print the quicksheet grid followed by the summary block
pub fn print_quicksheet(allocation: &Allocation, order: SheetOrder, rows: usize) {
    let title = match order {
        SheetOrder::Shortcut => "QUICKSHEET BY SHORTCUT",
        SheetOrder::Word => "QUICKSHEET BY WORD",
        SheetOrder::Rank => "QUICKSHEET BY RANK",
    };
    header(title);

    let cells = quicksheet_cells(allocation, order);
    for line in grid(&cells, rows) {
        println!("{line}");
    }

    println!();
    for line in summary_lines(&allocation.summary()) {
        println!("{line}");
    }
    println!(
        "\n{}",
        "principle: 1) rank by frequency 2) 1-2 letter words as is 3) match by letters \
         4) force with first letter 5) force with any letter 6) assign in sequence 7) skip \
         if under two letters saved"
            .bright_black()
    );
}

/// Print the static Rust table
pub fn print_static_table(allocation: &Allocation) {
    print!("{}", StaticTable::new(allocation));
}

/// Print a single lookup result
pub fn print_lookup(result: &LookupResult) {
    let shortcut = result
        .shortcut
        .map_or_else(|| "--".to_string(), |c| c.to_string());
    println!(
        "{} = {}  {}",
        result.word.bright_yellow().bold(),
        shortcut.green().bold(),
        format!("(rank {}, {})", result.rank, result.method).bright_black()
    );
}
