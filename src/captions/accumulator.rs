use crate::types::Sentence;

/// Accumulates caption fragments into a running sentence buffer and emits a
/// sentence record at every break point.
pub(super) struct SentenceAccumulator {
    sentences: Vec<Sentence>,
    buffer: String,
    word_count: usize,
    start_time: f64,
    end_time: f64,
    holding: bool,
}

impl SentenceAccumulator {
    pub(super) fn new() -> Self {
        Self {
            sentences: Vec::new(),
            buffer: String::new(),
            word_count: 0,
            start_time: 0.0,
            end_time: 0.0,
            holding: false,
        }
    }

    /// Appends one fragment, recording the buffer start on the first append
    /// and tracking the end of the most recent fragment.
    pub(super) fn append(&mut self, text: &str, start: f64, end: f64) {
        if !self.holding {
            self.start_time = start;
            self.holding = true;
        }
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            if !self.buffer.is_empty() {
                self.buffer.push(' ');
            }
            self.buffer.push_str(trimmed);
            self.word_count += trimmed.split_whitespace().count();
        }
        self.end_time = end;
    }

    pub(super) fn word_count(&self) -> usize {
        self.word_count
    }

    /// Emits the buffered sentence and resets. Buffers with no visible text
    /// are discarded rather than emitted.
    pub(super) fn finish_sentence(&mut self) {
        if !self.holding {
            return;
        }
        if !self.buffer.is_empty() {
            self.sentences.push(Sentence {
                text: std::mem::take(&mut self.buffer),
                start_time: self.start_time,
                end_time: self.end_time,
            });
        }
        self.word_count = 0;
        self.holding = false;
    }

    pub(super) fn into_sentences(self) -> Vec<Sentence> {
        self.sentences
    }
}
