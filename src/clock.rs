//! Playback clock
//!
//! A wall-clock stand-in for an audio element: tracks the playback position
//! of a document whose audio is not actually played, with pause, speed
//! control and seeking.

use std::time::{Duration, Instant};

/// Speaking rate used to estimate a duration when none is known.
pub const DEFAULT_WORDS_PER_MINUTE: u32 = 150;

/// Simulated playback position.
#[derive(Debug, Clone)]
pub struct PlaybackClock {
    /// Total playback length in seconds
    pub duration: f64,
    /// Whether playback is paused
    pub paused: bool,
    /// Playback speed multiplier (1.0 = normal)
    pub speed: f64,
    /// Wall clock time when playback started/resumed
    pub start_time: Instant,
    /// Playback position at `start_time`
    pub time_offset: f64,
}

impl PlaybackClock {
    pub const MIN_SPEED: f64 = 0.1;
    pub const MAX_SPEED: f64 = 16.0;

    /// Create a running clock at position 0.
    pub fn new(duration: f64) -> Self {
        Self {
            duration: duration.max(0.0),
            paused: false,
            speed: 1.0,
            start_time: Instant::now(),
            time_offset: 0.0,
        }
    }

    /// Set the initial speed, clamped to the supported range.
    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = clamp_speed(speed);
        self
    }

    /// Current playback position in seconds, within `[0, duration]`.
    pub fn current_time(&self) -> f64 {
        self.time_at(Instant::now())
    }

    /// Playback position at wall clock instant `now`.
    pub fn time_at(&self, now: Instant) -> f64 {
        if self.paused {
            return self.time_offset;
        }
        let elapsed = now.saturating_duration_since(self.start_time);
        (self.time_offset + elapsed.as_secs_f64() * self.speed).clamp(0.0, self.duration)
    }

    /// Jump to `time` (clamped to the playback range) and restart timing.
    pub fn seek(&mut self, time: f64) {
        self.time_offset = time.clamp(0.0, self.duration);
        self.start_time = Instant::now();
    }

    /// Toggle pause, freezing or resuming the position.
    pub fn toggle_pause(&mut self) {
        self.time_offset = self.current_time();
        self.start_time = Instant::now();
        self.paused = !self.paused;
    }

    /// Increase playback speed (max 16x).
    pub fn speed_up(&mut self) {
        self.set_speed(self.speed * 1.5);
    }

    /// Decrease playback speed (min 0.1x).
    pub fn speed_down(&mut self) {
        self.set_speed(self.speed / 1.5);
    }

    fn set_speed(&mut self, speed: f64) {
        // Rebase so the position does not jump
        self.time_offset = self.current_time();
        self.start_time = Instant::now();
        self.speed = clamp_speed(speed);
    }

    /// Whether the end of playback was reached.
    pub fn is_finished(&self) -> bool {
        self.current_time() >= self.duration
    }

    /// Wall time left until the end at the current speed.
    pub fn remaining(&self) -> Duration {
        let left = (self.duration - self.current_time()).max(0.0) / self.speed;
        Duration::from_secs_f64(left)
    }
}

fn clamp_speed(speed: f64) -> f64 {
    if speed.is_finite() {
        speed.clamp(PlaybackClock::MIN_SPEED, PlaybackClock::MAX_SPEED)
    } else {
        1.0
    }
}

/// Estimate how long reading `word_count` words aloud takes, in seconds.
///
/// A zero rate falls back to [`DEFAULT_WORDS_PER_MINUTE`].
pub fn estimate_duration(word_count: usize, words_per_minute: u32) -> f64 {
    let rate = if words_per_minute == 0 {
        DEFAULT_WORDS_PER_MINUTE
    } else {
        words_per_minute
    };
    word_count as f64 * 60.0 / rate as f64
}

/// Format a duration in seconds to MM:SS format.
pub fn format_duration(seconds: f64) -> String {
    let total_secs = seconds.max(0.0) as u64;
    let mins = total_secs / 60;
    let secs = total_secs % 60;
    format!("{:02}:{:02}", mins, secs)
}
