//! Build script to generate the embedded word list
//!
//! Reads the ranked frequency list and generates Rust source code with a const array.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_ranked_list(
        "data/words.tsv",
        &Path::new(&out_dir).join("ranked.rs"),
        "RANKED_WORDS",
        "Most frequent American English words, ranked by frequency",
    );

    // Rebuild if the word list changes
    println!("cargo:rerun-if-changed=data/words.tsv");
}

fn generate_ranked_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let records: Vec<(u32, &str)> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| {
            let mut fields = line.split_whitespace();
            let rank = fields
                .next()
                .and_then(|r| r.parse().ok())
                .unwrap_or_else(|| panic!("Bad rank in {input_path}: {line:?}"));
            let word = fields
                .next()
                .unwrap_or_else(|| panic!("Missing word in {input_path}: {line:?}"));
            (rank, word)
        })
        .collect();
    let count = records.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment} ({count} words)").unwrap();
    writeln!(output, "pub const {const_name}: &[(u32, &str)] = &[").unwrap();

    for (rank, word) in records {
        writeln!(output, "    ({rank}, \"{word}\"),").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
