//! Subcommand handlers for the readalong binary.

pub mod cite;
pub mod config;
pub mod index;
pub mod play;
pub mod render;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use readalong::markdown::{normalize, render_document};
use readalong::{Config, RenderedDocument, WordTimeIndex};

/// Read, normalize and render a markdown file.
pub fn load_document(path: &Path, config: &Config) -> Result<RenderedDocument> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let markdown = normalize(&raw, config.markdown.max_consecutive_newlines);
    Ok(render_document(&markdown))
}

/// Build the word index for a document using the configured sync settings.
pub fn build_index(document: &RenderedDocument, config: &Config) -> WordTimeIndex {
    document
        .index_with(config.sync.separator_mode)
        .with_strategy(config.sync.lookup)
}
