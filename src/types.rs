//! Core types for the shadowflow caption and scoring pipelines

use serde::{Deserialize, Serialize};

/// Default silence gap (seconds) treated as a sentence break in unpunctuated streams.
pub const DEFAULT_GAP_THRESHOLD: f64 = 0.8;
/// Default word count that forces a break in unpunctuated streams.
pub const DEFAULT_MAX_BUFFER_WORDS: usize = 15;
/// Default end-time padding (seconds) for a final fragment that reports no duration.
pub const DEFAULT_FINAL_DURATION: f64 = 5.0;

/// A raw timed caption fragment as delivered by a caption source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptionSegment {
    pub text: String,
    /// Offset from the start of the media, in seconds
    pub start: f64,
    /// Display duration in seconds; zero is allowed
    #[serde(default, alias = "dur")]
    pub duration: f64,
}

impl CaptionSegment {
    pub fn new(text: impl Into<String>, start: f64, duration: f64) -> Self {
        Self {
            text: text.into(),
            start,
            duration,
        }
    }

    /// End of this fragment's display window
    pub fn end(&self) -> f64 {
        self.start + self.duration
    }
}

/// A reconstructed sentence with accurate time boundaries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentence {
    pub text: String,
    /// Start of the first contributing fragment, in seconds
    #[serde(alias = "startTime")]
    pub start_time: f64,
    /// End of the last contributing fragment, in seconds
    #[serde(alias = "endTime")]
    pub end_time: f64,
}

impl Sentence {
    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }
}

/// Configuration for sentence boundary detection
#[derive(Debug, Clone, Copy)]
pub struct SegmenterConfig {
    /// Silence gap (seconds) between fragments that ends a sentence in gap mode
    pub gap_threshold: f64,
    /// Buffered word count that ends a sentence in gap mode
    pub max_buffer_words: usize,
    /// Synthesized duration for a zero-duration final fragment with no successor
    pub default_final_duration: f64,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            gap_threshold: DEFAULT_GAP_THRESHOLD,
            max_buffer_words: DEFAULT_MAX_BUFFER_WORDS,
            default_final_duration: DEFAULT_FINAL_DURATION,
        }
    }
}

impl SegmenterConfig {
    pub fn new(gap_threshold: f64, max_buffer_words: usize, default_final_duration: f64) -> Self {
        Self {
            gap_threshold,
            max_buffer_words,
            default_final_duration,
        }
    }
}
