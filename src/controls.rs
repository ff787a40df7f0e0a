//! Keyboard controls for simulated playback.
//!
//! Space pauses, `+`/`-` change speed, arrows (or `,`/`.`) seek by
//! [`SEEK_STEP`] seconds, Home/End jump to either end and `q`, Esc or
//! Ctrl+C stop playback.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::clock::{format_duration, PlaybackClock};

/// Seconds skipped by a single seek key press.
pub const SEEK_STEP: f64 = 5.0;

/// What the playback loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Keep playing
    Continue,
    /// Stop playback
    Quit,
}

/// Apply a key press to the playback clock.
pub fn handle_key_event(key: KeyEvent, clock: &mut PlaybackClock) -> KeyAction {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,

        KeyCode::Char(' ') => {
            clock.toggle_pause();
            if clock.paused {
                tracing::info!(
                    "paused at {} ({:.0}s left)",
                    format_duration(clock.current_time()),
                    clock.remaining().as_secs_f64()
                );
            }
            KeyAction::Continue
        }
        KeyCode::Char('+') | KeyCode::Char('=') => {
            clock.speed_up();
            tracing::debug!(speed = clock.speed, "speed changed");
            KeyAction::Continue
        }
        KeyCode::Char('-') | KeyCode::Char('_') => {
            clock.speed_down();
            tracing::debug!(speed = clock.speed, "speed changed");
            KeyAction::Continue
        }

        KeyCode::Left | KeyCode::Char(',') | KeyCode::Char('<') => {
            clock.seek(clock.current_time() - SEEK_STEP);
            KeyAction::Continue
        }
        KeyCode::Right | KeyCode::Char('.') | KeyCode::Char('>') => {
            clock.seek(clock.current_time() + SEEK_STEP);
            KeyAction::Continue
        }
        KeyCode::Home => {
            clock.seek(0.0);
            KeyAction::Continue
        }
        KeyCode::End => {
            clock.seek(clock.duration);
            KeyAction::Continue
        }

        _ => KeyAction::Continue,
    }
}
