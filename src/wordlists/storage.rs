//! Custom word storage
//!
//! Custom words live in a comma-delimited file of `Tier,word` records, one per
//! line, appended by the add-word flow. A missing file reads as empty. Records
//! with the wrong number of fields or an unknown tier are skipped.

use crate::core::Tier;
use log::{debug, info};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Storage file used when none is configured
pub const DEFAULT_STORAGE_FILE: &str = "custom_words.csv";

/// One stored (tier, word) record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomWordEntry {
    pub tier: Tier,
    pub word: String,
}

/// Failure to access the storage file
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read word storage {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write word storage {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Read every valid record from the storage file
///
/// # Errors
///
/// Returns `StorageError::Read` if the file exists but cannot be read.
/// A missing file is not an error.
pub fn read_custom_words<P: AsRef<Path>>(path: P) -> Result<Vec<CustomWordEntry>, StorageError> {
    let path = path.as_ref();

    match fs::read_to_string(path) {
        Ok(content) => Ok(parse_records(&content)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("No word storage at {}, using built-in words only", path.display());
            Ok(Vec::new())
        }
        Err(source) => Err(StorageError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Parse storage content, skipping malformed records
#[must_use]
pub fn parse_records(content: &str) -> Vec<CustomWordEntry> {
    content
        .lines()
        .enumerate()
        .filter_map(|(index, line)| match parse_record(line).as_slice() {
            [tier, word] => match Tier::from_stored(tier) {
                Ok(tier) => Some(CustomWordEntry {
                    tier,
                    word: word.clone(),
                }),
                Err(e) => {
                    debug!("Skipping record on line {}: {e}", index + 1);
                    None
                }
            },
            fields => {
                debug!(
                    "Skipping record on line {}: expected 2 fields, found {}",
                    index + 1,
                    fields.len()
                );
                None
            }
        })
        .collect()
}

/// Append one record to the storage file, creating it if needed
///
/// # Errors
///
/// Returns `StorageError::Write` if the file cannot be opened or written.
pub fn append_custom_word<P: AsRef<Path>>(
    path: P,
    entry: &CustomWordEntry,
) -> Result<(), StorageError> {
    let path = path.as_ref();
    let write_error = |source| StorageError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(write_error)?;

    let tier: &str = entry.tier.as_ref();
    writeln!(file, "{}", format_record(&[tier, entry.word.as_str()])).map_err(write_error)
}

/// Lower-case `word` and store it under `tier`
///
/// No duplicate or content checks are made.
///
/// # Errors
///
/// Returns `StorageError::Write` if the record cannot be appended.
///
/// # Examples
/// ```no_run
/// use hangman::core::Tier;
/// use hangman::wordlists::add_custom_word;
///
/// let entry = add_custom_word("custom_words.csv", Tier::Hard, "Xylophone").unwrap();
/// assert_eq!(entry.word, "xylophone");
/// ```
pub fn add_custom_word<P: AsRef<Path>>(
    path: P,
    tier: Tier,
    word: &str,
) -> Result<CustomWordEntry, StorageError> {
    let entry = CustomWordEntry {
        tier,
        word: word.to_lowercase(),
    };
    append_custom_word(&path, &entry)?;
    info!(
        "Added '{}' to {} in {}",
        entry.word,
        entry.tier,
        path.as_ref().display()
    );
    Ok(entry)
}

/// Split one line into fields; quoted fields may contain commas and `""`
fn parse_record(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' if field.is_empty() => in_quotes = true,
            ',' if !in_quotes => fields.push(std::mem::take(&mut field)),
            _ => field.push(c),
        }
    }
    fields.push(field);

    fields
}

fn format_record(fields: &[&str]) -> String {
    fields
        .iter()
        .map(|field| {
            if field.contains([',', '"']) {
                format!("\"{}\"", field.replace('"', "\"\""))
            } else {
                (*field).to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(",")
}
