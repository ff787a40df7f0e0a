//! Word/time synchronization errors.

/// Errors returned by [`WordTimeIndex::time_for_word_start`](super::WordTimeIndex::time_for_word_start).
///
/// Lookups in the other direction never fail; they report "no match" instead.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SyncError {
    #[error("Word index is empty (no characters to map time onto)")]
    EmptyIndex,

    #[error("Word {index} is out of range (index has {len} words)")]
    WordOutOfRange { index: usize, len: usize },

    #[error("Invalid playback duration: {0}")]
    InvalidDuration(f64),
}
