//! Candidate secret words, either bundled with the binary or read from a file.

use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

pub const BUNDLED_WORDS: &str = include_str!("../assets/words.txt");
pub const WORD_LENGTHS: RangeInclusive<usize> = 5..=12;

/// Lowercased words of playable length, in their original order.
pub fn filter_candidates(text: &str) -> Vec<String> {
    text.split_whitespace()
        .filter(|word| word.chars().all(|c| c.is_ascii_alphabetic()))
        .filter(|word| WORD_LENGTHS.contains(&word.len()))
        .map(str::to_ascii_lowercase)
        .collect()
}

pub fn load_candidates(path: Option<&Path>) -> Result<Vec<String>> {
    let Some(path) = path else {
        return Ok(filter_candidates(BUNDLED_WORDS));
    };

    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read word list: {}", path.display()))?;
    let words = filter_candidates(&text);
    debug!(path = %path.display(), count = words.len(), "word list loaded");
    Ok(words)
}
