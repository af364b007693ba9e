use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::normalize::normalize;
use super::{Result, ScoringError};

const RAW_TABLE: &str = include_str!("../../assets/contractions.txt");

/// Shared table instance backed by the bundled contraction list.
pub static DEFAULT_TABLE: Lazy<ContractionTable> = Lazy::new(|| {
    ContractionTable::from_table(RAW_TABLE)
        .unwrap_or_else(|err| panic!("failed to initialize contraction table: {err}"))
});

/// Closed mapping from informal tokens to their canonical expansions.
///
/// The set is hand-curated and English-specific; it is never extended at
/// runtime. Both sides of a comparison are expanded through the same table
/// so "gonna" and "going to" score as a full match.
#[derive(Debug, Clone)]
pub struct ContractionTable {
    entries: HashMap<String, Box<[&'static str]>>,
}

impl ContractionTable {
    /// Parses raw table data: one entry per line, informal token followed by
    /// its expansion tokens, `#` starting a comment line.
    pub fn from_table(data: &'static str) -> Result<Self> {
        let mut entries: HashMap<String, Box<[&'static str]>> = HashMap::new();

        for (idx, line) in data.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let mut columns = trimmed.split_whitespace();
            let raw_key = columns.next().ok_or_else(|| {
                ScoringError::new(format!("contraction line {idx} missing key column"))
            })?;

            let key = normalize(raw_key);
            if key.is_empty() {
                return Err(ScoringError::new(format!(
                    "contraction line {idx} produced empty normalization: {raw_key}"
                )));
            }

            let expansion: Vec<&'static str> = columns.collect();
            if expansion.is_empty() {
                return Err(ScoringError::new(format!(
                    "contraction line {idx} missing expansion for {raw_key}"
                )));
            }
            for &word in &expansion {
                if normalize(word) != word {
                    return Err(ScoringError::new(format!(
                        "contraction line {idx} expansion token not normalized: {word}"
                    )));
                }
            }

            entries.insert(key, expansion.into_boxed_slice());
        }

        if entries.is_empty() {
            return Err(ScoringError::new(
                "bundled contraction table contained no entries",
            ));
        }

        Ok(Self { entries })
    }

    /// Returns a handle to the globally shared table.
    pub fn shared() -> &'static Self {
        &DEFAULT_TABLE
    }

    /// Expansion for an exact normalized token, if the table knows it.
    pub fn lookup(&self, token: &str) -> Option<&[&'static str]> {
        self.entries.get(token).map(|seq| seq.as_ref())
    }

    /// Replaces each known token in place with its expansion sequence;
    /// unknown tokens pass through unchanged.
    pub fn expand(&self, tokens: Vec<String>) -> Vec<String> {
        let mut expanded = Vec::with_capacity(tokens.len());
        for token in tokens {
            match self.lookup(&token) {
                Some(words) => expanded.extend(words.iter().map(|word| word.to_string())),
                None => expanded.push(token),
            }
        }
        expanded
    }
}

/// Expands a token sequence through the shared bundled table.
pub fn expand_contractions(tokens: Vec<String>) -> Vec<String> {
    ContractionTable::shared().expand(tokens)
}
