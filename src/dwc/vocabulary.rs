//! Geography vocabulary collection.
//!
//! Scans a Darwin Core occurrence file for distinct composite geography key
//! values and appends the ones not already present to a controlled
//! vocabulary file. Appended entries start unreviewed: `standard` empty and
//! `checked` 0.

use crate::{Result, VireoError};
use std::collections::BTreeSet;
use std::fs::OpenOptions;
use std::path::Path;
use tracing::debug;

use super::{geog_key, COMPOSITE_DELIMITER, GEOG_KEY_TERMS};

/// Outcome of a vocabulary collection run.
#[derive(Debug, Clone)]
pub struct CollectionReport {
    /// Composite geography values appended to the vocabulary file, sorted.
    pub added_values: Vec<String>,
}

/// Expected header of the geography vocabulary file.
pub fn vocab_header() -> Vec<String> {
    vec![geog_key(), "standard".to_string(), "checked".to_string()]
}

/// Collect distinct composite geography values from `input` and append any
/// not already present to the vocabulary file at `vocab`.
///
/// The vocabulary file is created with the standard header when absent. An
/// existing file whose header differs from the standard one is left
/// untouched and reported as a [`VireoError::Vocabulary`] error.
pub fn collect_geography(input: &Path, vocab: &Path) -> Result<CollectionReport> {
    let source_values = distinct_composite_values(input)?;

    if !vocab.is_file() {
        write_vocab_header(vocab)?;
    }

    check_vocab_header(vocab)?;

    let existing_values = existing_vocab_values(vocab)?;
    let added_values: Vec<String> = source_values
        .difference(&existing_values)
        .cloned()
        .collect();

    append_vocab_values(vocab, &added_values)?;
    debug!(
        "appended {} new geography values to {}",
        added_values.len(),
        vocab.display()
    );

    Ok(CollectionReport { added_values })
}

/// Distinct values of the composite geography key found in a Darwin Core
/// CSV file. Terms missing from the file header contribute empty components.
fn distinct_composite_values(input: &Path) -> Result<BTreeSet<String>> {
    // Occurrence files in the wild are ragged; short rows read as empty
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(input)?;

    let headers = reader.headers()?.clone();
    let positions: Vec<Option<usize>> = GEOG_KEY_TERMS
        .iter()
        .map(|term| headers.iter().position(|h| h.trim() == *term))
        .collect();

    let mut values = BTreeSet::new();
    for record in reader.records() {
        let record = record?;
        let composite: Vec<&str> = positions
            .iter()
            .map(|pos| pos.and_then(|i| record.get(i)).unwrap_or(""))
            .collect();
        values.insert(composite.join(COMPOSITE_DELIMITER));
    }
    Ok(values)
}

fn write_vocab_header(vocab: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(vocab)?;
    writer.write_record(&vocab_header())?;
    writer.flush()?;
    Ok(())
}

/// Compare the vocabulary file header verbatim against the standard one.
fn check_vocab_header(vocab: &Path) -> Result<()> {
    let mut reader = csv::Reader::from_path(vocab)?;
    let actual: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let expected = vocab_header();
    if actual != expected {
        return Err(VireoError::Vocabulary(format!(
            "header read from {} does not match the geography vocabulary header \
             (expected {:?}, found {:?})",
            vocab.display(),
            expected,
            actual
        )));
    }
    Ok(())
}

fn existing_vocab_values(vocab: &Path) -> Result<BTreeSet<String>> {
    let mut reader = csv::Reader::from_path(vocab)?;
    let mut values = BTreeSet::new();
    for record in reader.records() {
        let record = record?;
        if let Some(value) = record.get(0) {
            values.insert(value.to_string());
        }
    }
    Ok(values)
}

fn append_vocab_values(vocab: &Path, values: &[String]) -> Result<()> {
    if values.is_empty() {
        return Ok(());
    }
    let file = OpenOptions::new().append(true).open(vocab)?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);
    for value in values {
        writer.write_record([value.as_str(), "", "0"])?;
    }
    writer.flush()?;
    Ok(())
}
