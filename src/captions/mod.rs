//! Sentence reconstruction from raw timed caption streams
//!
//! Caption tracks arrive as small display fragments with imprecise
//! boundaries. This module merges an ordered fragment stream back into
//! sentence records, using terminal punctuation when the track carries it
//! and silence gaps plus a word cap when it does not.

mod accumulator;

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::types::{CaptionSegment, SegmenterConfig, Sentence};

use accumulator::SentenceAccumulator;

/// Convenient alias for results returned by the caption pipeline.
pub type Result<T> = std::result::Result<T, CaptionError>;

/// Errors raised for malformed caption input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptionError {
    /// The caller required a non-empty caption stream and got none.
    EmptyInput,
    /// A fragment violated the timing invariants of the stream.
    InvalidSegment { index: usize, reason: String },
}

impl Display for CaptionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CaptionError::EmptyInput => {
                write!(f, "caption stream produced no usable sentences")
            }
            CaptionError::InvalidSegment { index, reason } => {
                write!(f, "caption fragment {index}: {reason}")
            }
        }
    }
}

impl Error for CaptionError {}

/// Merges an ordered caption fragment stream into sentence records.
///
/// An empty stream yields an empty sentence list; malformed timing data
/// yields [`CaptionError::InvalidSegment`]. Whether the stream carries
/// terminal punctuation is decided once over the whole stream, since
/// auto-generated caption tracks are either fully punctuated or not at all.
pub fn merge_captions(segments: &[CaptionSegment], config: SegmenterConfig) -> Result<Vec<Sentence>> {
    validate_segments(segments)?;

    let punctuated = segments.iter().any(|segment| ends_sentence(&segment.text));
    let mut accumulator = SentenceAccumulator::new();

    for (idx, segment) in segments.iter().enumerate() {
        let is_last = idx + 1 == segments.len();
        let end_time = fragment_end(segment, is_last, config);
        accumulator.append(&segment.text, segment.start, end_time);

        if is_last || breaks_sentence(&accumulator, segment, end_time, &segments[idx + 1..], punctuated, config) {
            accumulator.finish_sentence();
        }
    }

    Ok(accumulator.into_sentences())
}

fn breaks_sentence(
    accumulator: &SentenceAccumulator,
    segment: &CaptionSegment,
    end_time: f64,
    rest: &[CaptionSegment],
    punctuated: bool,
    config: SegmenterConfig,
) -> bool {
    if punctuated {
        return ends_sentence(&segment.text);
    }
    if accumulator.word_count() >= config.max_buffer_words {
        return true;
    }
    match rest.first() {
        Some(next) => next.start - end_time >= config.gap_threshold,
        None => false,
    }
}

fn validate_segments(segments: &[CaptionSegment]) -> Result<()> {
    let mut previous_start = 0.0_f64;
    for (index, segment) in segments.iter().enumerate() {
        if segment.start < 0.0 {
            return Err(invalid(index, format!("negative start time {}", segment.start)));
        }
        if segment.duration < 0.0 {
            return Err(invalid(index, format!("negative duration {}", segment.duration)));
        }
        if segment.start < previous_start {
            return Err(invalid(
                index,
                format!(
                    "start time {} precedes previous fragment at {}",
                    segment.start, previous_start
                ),
            ));
        }
        previous_start = segment.start;
    }
    Ok(())
}

fn invalid(index: usize, reason: String) -> CaptionError {
    CaptionError::InvalidSegment { index, reason }
}

/// Effective end of a fragment's display window. A final fragment with no
/// reported duration gets the configured synthesized duration, since no
/// successor exists to bound it.
fn fragment_end(segment: &CaptionSegment, is_last: bool, config: SegmenterConfig) -> f64 {
    if is_last && segment.duration == 0.0 {
        segment.start + config.default_final_duration
    } else {
        segment.end()
    }
}

fn ends_sentence(text: &str) -> bool {
    matches!(text.trim().chars().last(), Some('.' | '!' | '?'))
}
