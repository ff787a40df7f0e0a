//! Highlighter state
//!
//! Holds the word index of the current document together with the word
//! that is currently highlighted, and turns player events into effects.

use crate::highlighter::events::{HighlightEffect, PlayerEvent};
use crate::sync::{is_usable_duration, SyncError, WordTimeIndex};

/// Tracks which word is highlighted for one rendered document.
#[derive(Debug, Clone)]
pub struct Highlighter {
    index: WordTimeIndex,
    /// Currently highlighted word, if any
    current_word: Option<usize>,
    /// Last usable media duration reported by the player
    duration: Option<f64>,
}

impl Highlighter {
    /// Create a highlighter with nothing highlighted and no known duration.
    pub fn new(index: WordTimeIndex) -> Self {
        Self {
            index,
            current_word: None,
            duration: None,
        }
    }

    /// Seed the media duration, e.g. when it is known before playback starts.
    pub fn with_duration(mut self, duration: f64) -> Self {
        self.set_duration(duration);
        self
    }

    pub fn index(&self) -> &WordTimeIndex {
        &self.index
    }

    pub fn current_word(&self) -> Option<usize> {
        self.current_word
    }

    pub fn duration(&self) -> Option<f64> {
        self.duration
    }

    /// Forget the current highlight (the document is about to be re-rendered).
    pub fn reset(&mut self) {
        self.current_word = None;
    }

    /// Process one event and return the effect to apply, if any.
    pub fn handle_event(&mut self, event: PlayerEvent) -> Option<HighlightEffect> {
        match event {
            PlayerEvent::TimeUpdate {
                current_time,
                duration,
            } => self.handle_time_update(current_time, duration),
            PlayerEvent::DurationChanged { duration } => {
                self.set_duration(duration);
                None
            }
            PlayerEvent::WordClicked { index } => self.handle_word_click(index),
            PlayerEvent::Close => None,
        }
    }

    fn set_duration(&mut self, duration: f64) {
        self.duration = is_usable_duration(duration).then_some(duration);
    }

    fn handle_time_update(&mut self, current_time: f64, duration: f64) -> Option<HighlightEffect> {
        self.set_duration(duration);
        let duration = self.duration?;

        // Gaps between words keep the previous highlight
        let found = self.index.locate_word_at(current_time / duration)?;
        if self.current_word == Some(found) {
            return None;
        }

        let previous = self.current_word.replace(found);
        tracing::trace!(?previous, current = found, current_time, "highlight moved");
        Some(HighlightEffect::Highlight {
            previous,
            current: found,
        })
    }

    fn handle_word_click(&mut self, index: usize) -> Option<HighlightEffect> {
        let Some(duration) = self.duration else {
            tracing::debug!(index, "ignoring word click before duration is known");
            return None;
        };

        match self.index.time_for_word_start(index, duration) {
            Ok(time) => Some(HighlightEffect::Seek { time }),
            Err(SyncError::EmptyIndex) => None,
            Err(e) => {
                tracing::warn!(error = %e, "ignoring word click");
                None
            }
        }
    }
}
