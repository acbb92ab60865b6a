//! Character frequency analysis.
//!
//! Counts every character of the source text, turns the counts into
//! probabilities and sorts them ascending, ties broken by character code.
//! This sorted list is the only input the tree builder needs.

use crate::error::Error;
use crate::huffman::Result;
use log::debug;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Number of slots in the ASCII alphabet covered by a code table.
pub const ALPHABET_SIZE: usize = 128;

/// A character and its probability of occurrence in the source text.
#[derive(Debug, Clone, Copy)]
pub struct FrequencyEntry {
    character: char,
    probability: f64,
}

impl FrequencyEntry {
    /// Creates an entry for `character` with the given probability.
    pub fn new(character: char, probability: f64) -> Self {
        FrequencyEntry {
            character,
            probability,
        }
    }

    /// The character this entry counts.
    pub fn character(&self) -> char {
        self.character
    }

    /// Share of the source text made up of this character.
    pub fn probability(&self) -> f64 {
        self.probability
    }
}

impl PartialEq for FrequencyEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrequencyEntry {}

impl PartialOrd for FrequencyEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrequencyEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.probability
            .total_cmp(&other.probability)
            .then_with(|| self.character.cmp(&other.character))
    }
}

/// Count occurrences of each character in `text`.
///
/// Only characters in the ASCII alphabet are accepted.
pub fn count_characters(text: &str) -> Result<BTreeMap<char, usize>> {
    let mut counts = BTreeMap::new();
    for ch in text.chars() {
        if !ch.is_ascii() {
            return Err(Error::UnsupportedCharacter(ch));
        }
        *counts.entry(ch).or_insert(0) += 1;
    }
    Ok(counts)
}

/// Build the list of frequency entries for `text`, sorted by ascending
/// probability and then by character.
///
/// A text made of a single distinct character gets a second, zero-probability
/// entry so that the tree always has two leaves.
pub fn build_frequency_table(text: &str) -> Result<Vec<FrequencyEntry>> {
    let counts = count_characters(text)?;
    let total: usize = counts.values().sum();
    if total == 0 {
        return Err(Error::EmptyInput);
    }

    let mut entries: Vec<FrequencyEntry> = counts
        .into_iter()
        .map(|(ch, count)| FrequencyEntry::new(ch, count as f64 / total as f64))
        .collect();

    if entries.len() == 1 {
        entries.push(FrequencyEntry::new(companion_of(entries[0].character), 0.0));
    }

    entries.sort();
    debug!(
        "frequency table: {} distinct characters over {} total",
        entries.len(),
        total
    );
    Ok(entries)
}

// Next character code, or the previous one for the last ASCII code.
fn companion_of(ch: char) -> char {
    let code = ch as u8;
    if (code as usize) + 1 < ALPHABET_SIZE {
        char::from(code + 1)
    } else {
        char::from(code - 1)
    }
}
