//! Character-offset index over the words of a document.

use serde::{Deserialize, Serialize};

use super::error::SyncError;

/// Slack applied before flooring a fractional character position.
///
/// `start / total * total` is not always exactly `start` in floating point;
/// without the slack a click-to-seek followed by a time update could land on
/// the separator before the clicked word.
const OFFSET_TOLERANCE: f64 = 1e-9;

/// One highlightable word and its range in the virtual text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordToken {
    /// Word text, never empty and never surrounded by whitespace
    pub text: String,
    /// First character offset (inclusive)
    pub start: usize,
    /// Offset just past the last character (exclusive)
    pub end: usize,
}

impl WordToken {
    /// Length of the word in characters.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Always false; tokens are built from non-empty words.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether `offset` falls inside this word.
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }
}

/// How the total character count treats the separator after the last word.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeparatorMode {
    /// Separators only between words; the total ends at the last word.
    #[default]
    Between,
    /// Every word is followed by a separator, including the last one.
    ///
    /// Shifts every time mapping slightly towards the start of the text.
    Trailing,
}

/// How `locate_word_at` searches the token ranges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LookupStrategy {
    /// Scan tokens in order until one contains the target offset.
    Linear,
    /// Binary search over the sorted, non-overlapping ranges.
    #[default]
    Binary,
}

/// Read-only index mapping playback progress to words and back.
///
/// Built once from the final word sequence of a rendered document. When the
/// content changes, build a new index instead of mutating this one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WordTimeIndex {
    tokens: Vec<WordToken>,
    total_chars: usize,
    separator_mode: SeparatorMode,
    strategy: LookupStrategy,
}

impl WordTimeIndex {
    /// Build an index with separators between words only.
    ///
    /// Words are trimmed and empty ones are skipped, so whitespace fragments
    /// leaking from a tokenizer never become zero-width tokens.
    pub fn build<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::build_with(words, SeparatorMode::Between)
    }

    /// Build an index using the given separator accounting.
    pub fn build_with<I, S>(words: I, separator_mode: SeparatorMode) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tokens = Vec::new();
        let mut cursor = 0usize;

        for word in words {
            let text = word.as_ref().trim();
            if text.is_empty() {
                continue;
            }
            let start = cursor;
            let end = start + text.chars().count();
            tokens.push(WordToken {
                text: text.to_string(),
                start,
                end,
            });
            // +1 for the synthetic separator
            cursor = end + 1;
        }

        let total_chars = match (separator_mode, tokens.last()) {
            (_, None) => 0,
            (SeparatorMode::Between, Some(last)) => last.end,
            (SeparatorMode::Trailing, Some(_)) => cursor,
        };

        tracing::debug!(
            words = tokens.len(),
            total_chars,
            ?separator_mode,
            "built word time index"
        );

        Self {
            tokens,
            total_chars,
            separator_mode,
            strategy: LookupStrategy::default(),
        }
    }

    /// Use a different lookup strategy. Results are identical either way.
    pub fn with_strategy(mut self, strategy: LookupStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn tokens(&self) -> &[WordToken] {
        &self.tokens
    }

    pub fn token(&self, index: usize) -> Option<&WordToken> {
        self.tokens.get(index)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Length of the virtual text that playback progress is mapped onto.
    pub fn total_chars(&self) -> usize {
        self.total_chars
    }

    pub fn separator_mode(&self) -> SeparatorMode {
        self.separator_mode
    }

    pub fn strategy(&self) -> LookupStrategy {
        self.strategy
    }

    /// Find the word spoken at `fractional_progress` (0.0 = start, 1.0 = end).
    ///
    /// Returns `None` when the position falls between two words, at or past
    /// the end of the text, on an empty index, or for a negative or
    /// non-finite progress value.
    pub fn locate_word_at(&self, fractional_progress: f64) -> Option<usize> {
        if self.total_chars == 0 || !fractional_progress.is_finite() || fractional_progress < 0.0
        {
            return None;
        }

        let position = (fractional_progress * self.total_chars as f64 + OFFSET_TOLERANCE).floor();
        if position >= self.total_chars as f64 {
            return None;
        }
        let target = position as usize;

        match self.strategy {
            LookupStrategy::Linear => self.tokens.iter().position(|t| t.contains(target)),
            LookupStrategy::Binary => {
                let idx = self.tokens.partition_point(|t| t.end <= target);
                self.tokens
                    .get(idx)
                    .filter(|t| t.start <= target)
                    .map(|_| idx)
            }
        }
    }

    /// Find the word at `current_time` of a playback lasting `duration`.
    ///
    /// An unknown duration (zero, negative, NaN or infinite) yields `None`.
    pub fn locate_word_at_time(&self, current_time: f64, duration: f64) -> Option<usize> {
        if !is_usable_duration(duration) {
            return None;
        }
        self.locate_word_at(current_time / duration)
    }

    /// Playback time at which `word_index` starts.
    ///
    /// The result lies in `[0, duration)`.
    pub fn time_for_word_start(&self, word_index: usize, duration: f64) -> Result<f64, SyncError> {
        if !is_usable_duration(duration) {
            return Err(SyncError::InvalidDuration(duration));
        }
        if self.total_chars == 0 {
            return Err(SyncError::EmptyIndex);
        }
        let token = self.tokens.get(word_index).ok_or(SyncError::WordOutOfRange {
            index: word_index,
            len: self.tokens.len(),
        })?;

        Ok(duration * (token.start as f64 / self.total_chars as f64))
    }
}

/// Whether `duration` can be used as the denominator of a progress fraction.
pub(crate) fn is_usable_duration(duration: f64) -> bool {
    duration.is_finite() && duration > 0.0
}
