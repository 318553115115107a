//! Build script to generate the embedded word tiers
//!
//! Reads one word list per difficulty and generates Rust source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const TIERS: [(&str, &str, &str); 3] = [
    ("data/easy.txt", "easy.rs", "EASY"),
    ("data/medium.txt", "medium.rs", "MEDIUM"),
    ("data/hard.txt", "hard.rs", "HARD"),
];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    for (input, output, const_name) in TIERS {
        generate_word_list(input, &Path::new(&out_dir).join(output), const_name);
        println!("cargo:rerun-if-changed={input}");
    }
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();
    assert!(!words.is_empty(), "{input_path} must list at least one word");
    let count = words.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated from {input_path}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Built-in words for this tier ({count} words)").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    \"{}\",", word.to_lowercase()).unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
