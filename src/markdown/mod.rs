//! Markdown preparation for read-along playback.
//!
//! Summaries arrive as raw markdown that may carry escaped newlines and
//! excessive blank lines. This module cleans them up, renders them to HTML
//! and splits the rendered text into the words that playback highlights.
//!
//! - [`normalize`] - whitespace and escape cleanup
//! - [`render`] - HTML rendering with one indexed span per word

mod normalize;
mod render;

pub use normalize::{normalize, DEFAULT_MAX_CONSECUTIVE_NEWLINES};
pub use render::{render_document, tokenize, RenderedDocument, WORD_CLASS};
