//! Terminal reading line for simulated playback.
//!
//! Shows the playback time followed by the words around the highlighted one,
//! redrawn in place on a single terminal line.

use std::io::Write;
use std::ops::Range;

use anyhow::Result;

use crate::clock::format_duration;

const CLEAR_LINE: &str = "\r\x1b[2K";
const DARK_GREY: &str = "\x1b[90m";
const REVERSE: &str = "\x1b[7m";
const RESET: &str = "\x1b[0m";

/// Width of the ` MM:SS/MM:SS ` time prefix.
const TIME_PREFIX_WIDTH: usize = 12;

/// Terminal width in columns, 80 when it cannot be determined.
pub fn terminal_width() -> u16 {
    crossterm::terminal::size().map(|(cols, _)| cols).unwrap_or(80)
}

/// Pick the words to show around `current` within `budget` characters.
///
/// The current word is always included; neighbours are added alternately
/// after and before it while they fit (each costs its length plus one
/// space).
pub fn reading_window(words: &[String], current: usize, budget: usize) -> Range<usize> {
    if current >= words.len() {
        return 0..0;
    }

    let mut start = current;
    let mut end = current + 1;
    let mut used = words[current].chars().count();

    loop {
        let mut grew = false;
        if let Some(next) = words.get(end) {
            let cost = next.chars().count() + 1;
            if used + cost <= budget {
                used += cost;
                end += 1;
                grew = true;
            }
        }
        if start > 0 {
            let cost = words[start - 1].chars().count() + 1;
            if used + cost <= budget {
                used += cost;
                start -= 1;
                grew = true;
            }
        }
        if !grew {
            break;
        }
    }

    start..end
}

/// Build the reading line with `current` shown in reverse video.
pub fn build_reading_line(
    words: &[String],
    current: usize,
    current_time: f64,
    duration: f64,
    width: u16,
) -> String {
    let budget = (width as usize).saturating_sub(TIME_PREFIX_WIDTH + 1);
    let window = reading_window(words, current, budget);

    let mut output = String::with_capacity(width as usize * 2);
    output.push_str(CLEAR_LINE);
    output.push_str(DARK_GREY);
    output.push_str(&format!(
        "{}/{} ",
        format_duration(current_time),
        format_duration(duration)
    ));
    output.push_str(RESET);

    for i in window.clone() {
        if i > window.start {
            output.push(' ');
        }
        if i == current {
            output.push_str(REVERSE);
            output.push_str(&words[i]);
            output.push_str(RESET);
        } else {
            output.push_str(&words[i]);
        }
    }

    output
}

/// Redraw the reading line in place.
pub fn render_reading_line(
    out: &mut impl Write,
    words: &[String],
    current: usize,
    current_time: f64,
    duration: f64,
    width: u16,
) -> Result<()> {
    let line = build_reading_line(words, current, current_time, duration, width);
    write!(out, "{}", line)?;
    out.flush()?;
    Ok(())
}
