//! Playback-driven word highlighting.
//!
//! Connects a playback source (an audio element, or the simulated
//! [`PlaybackClock`](crate::clock::PlaybackClock)) to a rendered document:
//!
//! - `events`: `PlayerEvent` inputs and `HighlightEffect` outputs
//! - `state`: the owned `Highlighter` that tracks the current word
//! - `worker`: the single-threaded loop consuming events from a channel
//!
//! # Usage
//!
//! ```
//! use std::sync::mpsc;
//! use readalong::highlighter::{run_highlighter, HighlightEffect, Highlighter, PlayerEvent};
//! use readalong::sync::WordTimeIndex;
//!
//! let highlighter = Highlighter::new(WordTimeIndex::build(["Hello", "world"]));
//! let (event_tx, event_rx) = mpsc::channel();
//! let (effect_tx, effect_rx) = mpsc::channel();
//!
//! event_tx.send(PlayerEvent::TimeUpdate { current_time: 60.0, duration: 100.0 }).unwrap();
//! event_tx.send(PlayerEvent::Close).unwrap();
//!
//! let highlighter = run_highlighter(highlighter, event_rx, effect_tx);
//! assert_eq!(highlighter.current_word(), Some(1));
//! assert_eq!(
//!     effect_rx.recv().unwrap(),
//!     HighlightEffect::Highlight { previous: None, current: 1 }
//! );
//! ```

mod events;
mod state;
mod worker;

pub use events::{HighlightEffect, PlayerEvent};
pub use state::Highlighter;
pub use worker::run_highlighter;
