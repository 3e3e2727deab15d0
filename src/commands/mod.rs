//! Command implementations

pub mod lookup;
pub mod run;

pub use lookup::{LookupResult, abbreviate, expand};
pub use run::{RunOutcome, WordSource, allocate_parsed, run_allocation};
