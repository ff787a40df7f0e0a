//! Render subcommand handler

use std::path::Path;

use anyhow::Result;

use readalong::Config;

use super::load_document;

/// Print the word-wrapped HTML of a markdown file.
#[cfg(not(tarpaulin_include))]
pub fn handle_render(file: &Path, config: &Config) -> Result<()> {
    let document = load_document(file, config)?;
    print!("{}", document.html);
    Ok(())
}
