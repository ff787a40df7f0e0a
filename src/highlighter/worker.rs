//! Event loop for the highlighter
//!
//! Receives player events from a channel, feeds them to a [`Highlighter`]
//! and sends the resulting effects back via a second channel.

use std::sync::mpsc::{Receiver, Sender};

use crate::highlighter::events::{HighlightEffect, PlayerEvent};
use crate::highlighter::state::Highlighter;

/// Process player events until the document is closed.
///
/// Exits on [`PlayerEvent::Close`], when the event channel is closed (all
/// senders dropped), or when nobody listens for effects anymore. Returns the
/// highlighter so the caller can inspect its final state.
pub fn run_highlighter(
    mut highlighter: Highlighter,
    events: Receiver<PlayerEvent>,
    effects: Sender<HighlightEffect>,
) -> Highlighter {
    while let Ok(event) = events.recv() {
        if event == PlayerEvent::Close {
            tracing::debug!("highlighter closed");
            break;
        }
        if let Some(effect) = highlighter.handle_event(event) {
            if effects.send(effect).is_err() {
                tracing::debug!("effect receiver dropped, stopping highlighter");
                break;
            }
        }
    }
    highlighter
}
