//! Shadowing-attempt scoring against a reference sentence
//!
//! Both texts are normalized into token sequences, contractions expanded,
//! and the sequences aligned by a longest-common-subsequence search that
//! accepts fuzzy token equality. The score is the fraction of reference
//! tokens the attempt covered; extra spoken tokens never reduce it.

mod align;
mod contractions;
mod distance;
mod normalize;
#[cfg(test)]
mod tests;

use std::error::Error;
use std::fmt::{Display, Formatter};

use serde::Serialize;

pub use align::{align_tokens, Alignment};
pub use contractions::{expand_contractions, ContractionTable};
pub use distance::{edit_distance, is_close};
pub use normalize::{normalize, tokenize};

/// Convenient alias for results returned by scoring modules.
pub type Result<T> = std::result::Result<T, ScoringError>;

/// Lightweight error type for scoring setup failures.
#[derive(Debug, Clone)]
pub struct ScoringError {
    message: String,
}

impl ScoringError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Display for ScoringError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for ScoringError {}

/// Classification of a reference token after alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceStatus {
    /// Matched a candidate token exactly.
    Correct,
    /// Matched a candidate token only through the fuzzy predicate.
    Close,
    /// No candidate token aligned with it.
    Missed,
}

/// Classification of a candidate token after alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CandidateStatus {
    Correct,
    /// Spoken filler or insertion absent from the reference.
    Extra,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferenceToken {
    pub word: String,
    pub status: ReferenceStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateToken {
    pub word: String,
    pub status: CandidateStatus,
}

/// Outcome of scoring one spoken attempt against a reference sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlignmentResult {
    /// Matched reference fraction as a rounded percentage, 0 to 100.
    pub score: u8,
    pub reference: Vec<ReferenceToken>,
    pub candidate: Vec<CandidateToken>,
    pub matched_count: usize,
    pub total_count: usize,
}

/// Scores a spoken attempt against a reference sentence.
///
/// An empty or all-whitespace attempt is the explicit no-speech case: every
/// reference token is reported missed and no alignment runs.
pub fn score(reference_text: &str, candidate_text: &str) -> AlignmentResult {
    let reference_tokens = expand_contractions(tokenize(reference_text));
    let total_count = reference_tokens.len();

    if candidate_text.trim().is_empty() {
        let reference = reference_tokens
            .into_iter()
            .map(|word| ReferenceToken {
                word,
                status: ReferenceStatus::Missed,
            })
            .collect();
        return AlignmentResult {
            score: 0,
            reference,
            candidate: Vec::new(),
            matched_count: 0,
            total_count,
        };
    }

    let candidate_tokens = expand_contractions(tokenize(candidate_text));
    let alignment = align_tokens(&reference_tokens, &candidate_tokens);

    let mut reference_status = vec![ReferenceStatus::Missed; reference_tokens.len()];
    let mut candidate_matched = vec![false; candidate_tokens.len()];
    for &(ref_idx, cand_idx) in &alignment.pairs {
        reference_status[ref_idx] = if reference_tokens[ref_idx] == candidate_tokens[cand_idx] {
            ReferenceStatus::Correct
        } else {
            ReferenceStatus::Close
        };
        candidate_matched[cand_idx] = true;
    }

    let matched_count = alignment.matched_count();
    AlignmentResult {
        score: percentage(matched_count, total_count),
        reference: reference_tokens
            .into_iter()
            .zip(reference_status)
            .map(|(word, status)| ReferenceToken { word, status })
            .collect(),
        candidate: candidate_tokens
            .into_iter()
            .zip(candidate_matched)
            .map(|(word, matched)| CandidateToken {
                word,
                status: if matched {
                    CandidateStatus::Correct
                } else {
                    CandidateStatus::Extra
                },
            })
            .collect(),
        matched_count,
        total_count,
    }
}

fn percentage(matched: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    ((matched as f64 / total as f64) * 100.0).round() as u8
}
