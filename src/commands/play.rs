//! Play subcommand handler
//!
//! Drives a highlighter thread from a simulated playback clock and redraws
//! the reading line whenever the highlight moves. When stdin is a terminal
//! the clock also takes keyboard controls.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::tty::IsTty;

use readalong::cli::PlayArgs;
use readalong::clock::{estimate_duration, format_duration, PlaybackClock};
use readalong::controls::{handle_key_event, KeyAction};
use readalong::highlighter::run_highlighter;
use readalong::view::{render_reading_line, terminal_width};
use readalong::{Config, HighlightEffect, Highlighter, PlayerEvent};

use super::{build_index, load_document};

/// How a playback session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PlaybackOutcome {
    Finished,
    Interrupted,
}

/// Raw terminal mode for the lifetime of the guard.
struct RawModeGuard;

impl RawModeGuard {
    /// Enable raw mode if stdin is an interactive terminal.
    fn enable() -> Option<Self> {
        if !io::stdin().is_tty() {
            return None;
        }
        match enable_raw_mode() {
            Ok(()) => Some(Self),
            Err(e) => {
                tracing::warn!("keyboard controls unavailable: {}", e);
                None
            }
        }
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

#[cfg(not(tarpaulin_include))]
pub fn handle_play(args: &PlayArgs, config: &Config) -> Result<()> {
    let document = load_document(&args.file, config)?;
    let index = build_index(&document, config);
    if index.is_empty() {
        println!("Nothing to read in {}", args.file.display());
        return Ok(());
    }

    let duration = args
        .duration
        .unwrap_or_else(|| estimate_duration(index.len(), config.playback.words_per_minute));
    if !(duration.is_finite() && duration > 0.0) {
        return Err(anyhow!("Playback duration must be positive, got {}", duration));
    }
    let speed = args.speed.unwrap_or(config.playback.speed);
    let tick = Duration::from_millis(config.playback.tick_ms.max(1));
    let start_time = match args.start_word {
        Some(word) => index
            .time_for_word_start(word, duration)
            .with_context(|| format!("Cannot start at word {}", word))?,
        None => 0.0,
    };

    let words: Vec<String> = index.tokens().iter().map(|t| t.text.clone()).collect();
    tracing::info!(
        words = words.len(),
        duration,
        speed,
        "starting playback of {}",
        args.file.display()
    );

    let interrupted = Arc::new(AtomicBool::new(false));
    {
        let flag = Arc::clone(&interrupted);
        ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst))
            .context("Failed to install Ctrl-C handler")?;
    }

    let (event_tx, event_rx) = mpsc::channel();
    let (effect_tx, effect_rx) = mpsc::channel();
    let highlighter = Highlighter::new(index).with_duration(duration);
    let worker = thread::spawn(move || run_highlighter(highlighter, event_rx, effect_tx));

    let mut clock = PlaybackClock::new(duration).with_speed(speed);
    clock.seek(start_time);
    let mut stdout = io::stdout();
    let width = terminal_width();
    let raw_mode = RawModeGuard::enable();

    let outcome = loop {
        if interrupted.load(Ordering::SeqCst) {
            break PlaybackOutcome::Interrupted;
        }

        let current_time = clock.current_time();
        if event_tx
            .send(PlayerEvent::TimeUpdate {
                current_time,
                duration,
            })
            .is_err()
        {
            break PlaybackOutcome::Interrupted;
        }

        if raw_mode.is_some() {
            if wait_for_keys(tick, &mut clock)? == KeyAction::Quit {
                break PlaybackOutcome::Interrupted;
            }
        } else {
            thread::sleep(tick);
        }

        while let Ok(effect) = effect_rx.try_recv() {
            match effect {
                HighlightEffect::Highlight { current, .. } => {
                    render_reading_line(
                        &mut stdout,
                        &words,
                        current,
                        clock.current_time(),
                        duration,
                        width,
                    )?;
                }
                HighlightEffect::Seek { time } => {
                    tracing::info!("seeking to {}", format_duration(time));
                    clock.seek(time);
                }
            }
        }

        if clock.is_finished() {
            break PlaybackOutcome::Finished;
        }
    };

    // The worker may already be gone if it stopped on its own
    let _ = event_tx.send(PlayerEvent::Close);
    let highlighter = worker
        .join()
        .map_err(|_| anyhow!("Highlighter thread panicked"))?;

    drop(raw_mode);
    println!();
    match outcome {
        PlaybackOutcome::Finished => println!("Finished ({} words)", words.len()),
        PlaybackOutcome::Interrupted => match highlighter.current_word() {
            Some(word) => println!("Stopped at word {} ({})", word, words[word]),
            None => println!("Stopped"),
        },
    }
    Ok(())
}

/// Wait up to `tick` for key presses and apply them to the clock.
fn wait_for_keys(tick: Duration, clock: &mut PlaybackClock) -> Result<KeyAction> {
    let mut timeout = tick;
    while event::poll(timeout)? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press && handle_key_event(key, clock) == KeyAction::Quit {
                return Ok(KeyAction::Quit);
            }
        }
        // Only the first wait blocks; drain the rest
        timeout = Duration::ZERO;
    }
    Ok(KeyAction::Continue)
}
