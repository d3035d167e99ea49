//! Build script to generate the embedded word table
//!
//! Reads `word,weight` rows and generates Rust source with a const array.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_word_table(
        "data/words.csv",
        &Path::new(&out_dir).join("words.rs"),
        "WORDS",
        "Common five-letter words with rank-derived relevance weights",
    );

    println!("cargo:rerun-if-changed=data/words.csv");
}

fn generate_word_table(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let rows: Vec<(&str, f64)> = content
        .lines()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let (word, weight) = line
                .split_once(',')
                .unwrap_or_else(|| panic!("Missing weight in row '{line}'"));
            let weight: f64 = weight
                .trim()
                .parse()
                .unwrap_or_else(|e| panic!("Bad weight in row '{line}': {e}"));
            (word.trim(), weight)
        })
        .collect();
    let count = rows.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word table").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[(&str, f64)] = &[").unwrap();

    for (word, weight) in rows {
        writeln!(output, "    (\"{word}\", {weight:?}),").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of rows in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
