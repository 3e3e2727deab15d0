//! Hublin
//!
//! Assigns one- and two-letter keyboard shortcuts to frequency-ranked English
//! words, so the most common words can be typed in fewer keystrokes.
//!
//! # Quick Start
//!
//! ```rust
//! use hublin::allocator::allocate;
//! use hublin::config::AllocatorConfig;
//! use hublin::core::WordTable;
//! use hublin::wordlists::loader::parse_ranked_words;
//!
//! let config = AllocatorConfig::default();
//! let parsed = parse_ranked_words("1\tthe\n2\tof\n3\tand\n");
//! let table = WordTable::load(parsed.words, &config).unwrap();
//! let allocation = allocate(table, &config).unwrap();
//!
//! assert_eq!(allocation.shortcut_for("and").unwrap().to_string(), "a");
//! ```

// Core domain types
pub mod core;

// Shortcut allocation
pub mod allocator;

// Settings
pub mod config;

// Error types
pub mod error;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Log subscriber setup
pub mod logging;
