//! Hublin - CLI
//!
//! Assigns keyboard shortcuts to frequency-ranked words and prints reports.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hublin::{
    allocator::SwapDirective,
    commands::{WordSource, abbreviate, expand, run_allocation},
    config::{AllocatorConfig, DEFAULT_MAX_WORDS},
    core::Method,
    logging,
    output::{
        SheetOrder, print_alphabetical_report, print_lookup, print_quicksheet, print_slot_report,
        print_static_table, print_summary, print_word_report,
    },
};

#[derive(Parser)]
#[command(
    name = "hublin",
    about = "Logical one- and two-letter keyboard shortcuts for the most frequent English words",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default), '-' for stdin, or path to a `rank word` file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Maximum number of words read from the list
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_WORDS)]
    max_words: usize,

    /// Fail instead of truncating when the list is longer than --max-words
    #[arg(long, global = true)]
    strict: bool,

    /// Swap two slots' words after allocation, e.g. 'c:p' or '2:15' (repeatable)
    #[arg(long = "swap", global = true, value_name = "A:B")]
    swaps: Vec<SwapDirective>,

    /// Log each allocation pass to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Every word in frequency order with its shortcut (default)
    Words,

    /// Every shortcut in generation order with its word or '-'
    Slots {
        /// Only occupied shortcuts assigned by this method (name or symbol)
        #[arg(short, long, value_parser = parse_method)]
        method: Option<Method>,
    },

    /// Shortcuts in alphabetical order of their words
    Alpha,

    /// Counts per assignment method
    Summary,

    /// Printable grid of shortcuts
    Quicksheet {
        /// Cell ordering
        #[arg(short, long, value_enum, default_value_t = SheetOrder::Shortcut)]
        order: SheetOrder,

        /// Cells per column
        #[arg(short, long, default_value = "63")]
        rows: usize,
    },

    /// Rust source with the shortcut table as const data
    Table,

    /// Show the shortcut for a word
    Abbrev {
        /// Word to look up
        word: String,
    },

    /// Show the word behind a shortcut
    Expand {
        /// One- or two-letter shortcut
        code: String,
    },
}

fn parse_method(name: &str) -> Result<Method, String> {
    Method::from_name(name).ok_or_else(|| {
        let names: Vec<&str> = Method::ALL.iter().map(|m| m.name()).collect();
        format!("unknown method '{name}' (expected one of: {})", names.join(", "))
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = AllocatorConfig::new(cli.max_words)
        .strict(cli.strict)
        .with_swaps(cli.swaps);
    let source = WordSource::from_arg(&cli.wordlist);

    let outcome = run_allocation(&source, &config)
        .with_context(|| format!("failed to allocate shortcuts for '{}'", cli.wordlist))?;
    let allocation = &outcome.allocation;

    // Default to the word report if no command given
    let command = cli.command.unwrap_or(Commands::Words);

    match command {
        Commands::Words => print_word_report(allocation),
        Commands::Slots { method } => print_slot_report(allocation, method),
        Commands::Alpha => print_alphabetical_report(allocation),
        Commands::Summary => print_summary(&outcome),
        Commands::Quicksheet { order, rows } => print_quicksheet(allocation, order, rows),
        Commands::Table => print_static_table(allocation),
        Commands::Abbrev { word } => {
            let result = abbreviate(allocation, &word).map_err(|e| anyhow::anyhow!(e))?;
            print_lookup(&result);
        }
        Commands::Expand { code } => {
            let result = expand(allocation, &code).map_err(|e| anyhow::anyhow!(e))?;
            print_lookup(&result);
        }
    }

    Ok(())
}
