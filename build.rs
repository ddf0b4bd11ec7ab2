//! Build script to generate embedded word lists
//!
//! Reads the ranked word list files and generates Rust source code with const arrays.
//! Any entry that is not five lowercase letters fails the build.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    // Likely answers
    generate_word_list(
        "data/common.txt",
        &Path::new(&out_dir).join("common.rs"),
        "COMMON",
        "Common words, the likely answers, ranked by letter variety",
    );

    // Every accepted guess
    generate_word_list(
        "data/legal.txt",
        &Path::new(&out_dir).join("legal.rs"),
        "LEGAL",
        "All legal guesses, ranked by letter variety",
    );

    println!("cargo:rerun-if-changed=data/common.txt");
    println!("cargo:rerun-if-changed=data/legal.txt");
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    for (line, word) in words.iter().enumerate() {
        assert!(
            is_valid_word(word),
            "{input_path}: entry {} ('{word}') is not five lowercase letters a-z",
            line + 1
        );
    }
    let count = words.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated from {input_path}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment} ({count} words)").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    \"{word}\",").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}

fn is_valid_word(word: &str) -> bool {
    word.len() == 5 && word.bytes().all(|b| b.is_ascii_lowercase())
}
