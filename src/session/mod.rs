//! Practice-session orchestration over a segmented caption stream
//!
//! The library seam an interactive front end drives: segment the caption
//! stream once, then score spoken attempts sentence by sentence. Pure and
//! in-memory; playback and speech recognition live with the caller.

use tracing::{debug, info};

use crate::captions::{merge_captions, CaptionError, Result};
use crate::scoring::{score, AlignmentResult};
use crate::types::{CaptionSegment, SegmenterConfig, Sentence};

/// Session configuration shared between library callers and the CLI.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionConfig {
    pub segmenter: SegmenterConfig,
}

impl SessionConfig {
    pub fn new(segmenter: SegmenterConfig) -> Self {
        Self { segmenter }
    }
}

/// A shadowing practice run over one caption stream.
#[derive(Debug)]
pub struct PracticeSession {
    sentences: Vec<Sentence>,
}

impl PracticeSession {
    /// Segments the caption stream and prepares it for practice.
    ///
    /// A stream that segments to zero sentences cannot be practiced and is
    /// rejected with [`CaptionError::EmptyInput`].
    pub fn new(segments: &[CaptionSegment], config: SessionConfig) -> Result<Self> {
        let sentences = merge_captions(segments, config.segmenter)?;
        if sentences.is_empty() {
            return Err(CaptionError::EmptyInput);
        }
        info!(
            sentence_count = sentences.len(),
            "caption stream segmented for practice"
        );
        Ok(Self { sentences })
    }

    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    pub fn sentence(&self, index: usize) -> Option<&Sentence> {
        self.sentences.get(index)
    }

    /// Scores one spoken attempt against the sentence at `index`.
    /// Returns `None` when `index` is past the end of the session.
    pub fn attempt(&self, index: usize, candidate_text: &str) -> Option<AlignmentResult> {
        let sentence = self.sentences.get(index)?;
        let result = score(&sentence.text, candidate_text);
        debug!(
            index,
            score = result.score,
            matched = result.matched_count,
            total = result.total_count,
            "scored shadowing attempt"
        );
        Some(result)
    }
}
