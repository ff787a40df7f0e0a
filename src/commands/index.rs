//! Index, locate and seek subcommand handlers

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use readalong::clock::format_duration;
use readalong::sync::SeparatorMode;
use readalong::{Config, WordTimeIndex, WordToken};

use super::{build_index, load_document};

/// JSON shape of `readalong index --json`.
#[derive(Debug, Serialize)]
struct IndexReport<'a> {
    total_chars: usize,
    separator_mode: SeparatorMode,
    tokens: &'a [WordToken],
}

fn load_index(file: &Path, config: &Config) -> Result<WordTimeIndex> {
    let document = load_document(file, config)?;
    Ok(build_index(&document, config))
}

/// List every word with its character range.
pub fn handle_index(file: &Path, json: bool, config: &Config) -> Result<()> {
    let index = load_index(file, config)?;

    if json {
        let report = IndexReport {
            total_chars: index.total_chars(),
            separator_mode: index.separator_mode(),
            tokens: index.tokens(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let width = index.len().saturating_sub(1).to_string().len();
    for (i, token) in index.tokens().iter().enumerate() {
        println!(
            "{:>width$}  [{}, {})  {}",
            i,
            token.start,
            token.end,
            token.text,
            width = width
        );
    }
    println!("{} words, {} characters", index.len(), index.total_chars());
    Ok(())
}

/// Print the word spoken at `time`.
pub fn handle_locate(file: &Path, time: f64, duration: f64, config: &Config) -> Result<()> {
    let index = load_index(file, config)?;

    match index.locate_word_at_time(time, duration) {
        Some(i) => {
            let token = &index.tokens()[i];
            println!("{}\t{}", i, token.text);
        }
        None => println!("no word at {}", format_duration(time)),
    }
    Ok(())
}

/// Print the time at which word `word` starts.
pub fn handle_seek(file: &Path, word: usize, duration: f64, config: &Config) -> Result<()> {
    let index = load_index(file, config)?;

    let time = index
        .time_for_word_start(word, duration)
        .with_context(|| format!("Cannot seek to word {} in {}", word, file.display()))?;
    println!("{:.3}\t{}", time, format_duration(time));
    Ok(())
}
