//! Cite subcommand handler

use std::path::Path;

use anyhow::{Context, Result};

use readalong::citations::{format_citations, parse_reference_ids, ReferenceTable};

/// Print the references named by `spec`, one per line.
#[cfg(not(tarpaulin_include))]
pub fn handle_cite(references: &Path, spec: &str) -> Result<()> {
    let table = ReferenceTable::load(references)
        .with_context(|| format!("Failed to load references from {}", references.display()))?;
    let ids = parse_reference_ids(spec)?;
    for line in format_citations(&table, &ids) {
        println!("{}", line);
    }
    Ok(())
}
