//! Terminal output formatting
//!
//! Reports over a finished allocation. Nothing here changes assignments.

pub mod display;
pub mod formatters;
pub mod table;

pub use display::{
    print_alphabetical_report, print_lookup, print_quicksheet, print_slot_report,
    print_static_table, print_summary, print_word_report,
};
pub use formatters::SheetOrder;
