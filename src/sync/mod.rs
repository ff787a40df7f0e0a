//! Word-level time synchronization.
//!
//! Maps a playback position onto the words of a rendered document and back.
//! Words are laid out in a virtual text where consecutive words are joined by
//! a single synthetic space; playback progress is assumed to advance linearly
//! through that text.
//!
//! - `index`: `WordToken`, `WordTimeIndex` and the two lookups
//! - `error`: `SyncError`

mod error;
mod index;

pub use error::SyncError;
pub(crate) use index::is_usable_duration;
pub use index::{LookupStrategy, SeparatorMode, WordTimeIndex, WordToken};
