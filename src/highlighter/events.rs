//! Messages flowing into and out of the highlighter.

/// Notification from the playback source or the reader.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlayerEvent {
    /// Playback position changed. `duration` may be zero or NaN while the
    /// media is still loading.
    TimeUpdate { current_time: f64, duration: f64 },
    /// Media metadata became available (or changed).
    DurationChanged { duration: f64 },
    /// The reader clicked the word at `index`.
    WordClicked { index: usize },
    /// The document was torn down; stop listening.
    Close,
}

/// Action the presentation layer should perform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HighlightEffect {
    /// Remove the marker from `previous` (if any), mark `current` and
    /// scroll it into view.
    Highlight {
        previous: Option<usize>,
        current: usize,
    },
    /// Move the playback position to `time` seconds.
    Seek { time: f64 },
}
