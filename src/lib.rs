//! readalong - word highlighting synchronized to audio playback
//!
//! Renders a markdown document, splits it into highlightable words and keeps
//! a highlight on the word being spoken as playback progresses. Clicking a
//! word seeks playback to where that word starts.
//!
//! # Modules
//!
//! - [`sync`] - the word/time index at the core of everything else
//! - [`markdown`] - normalization, rendering and tokenization
//! - [`highlighter`] - event-driven highlight tracking
//! - [`clock`] - simulated playback position
//! - [`controls`] - playback keyboard controls
//! - [`citations`] - inline citation reference parsing
//! - [`config`] - TOML configuration
//! - [`view`] - terminal reading line
//! - [`cli`] - command line definitions

pub mod citations;
pub mod cli;
pub mod clock;
pub mod controls;
pub mod config;
pub mod highlighter;
pub mod markdown;
pub mod sync;
pub mod view;

pub use config::Config;
pub use highlighter::{HighlightEffect, Highlighter, PlayerEvent};
pub use markdown::{render_document, RenderedDocument};
pub use sync::{SyncError, WordTimeIndex, WordToken};
