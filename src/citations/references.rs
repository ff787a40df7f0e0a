//! Reference specs and the reference table.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::CitationError;

/// Shown instead of any entry when no references were loaded at all.
pub const DETAILS_NOT_LOADED: &str = "Reference details not loaded.";

/// Shown for an id that is missing from the table or has no text.
pub const DETAILS_NOT_FOUND: &str = "Details not found.";

/// Largest number of ids a single `a-b` range may expand to.
pub const MAX_RANGE_LEN: u32 = 10_000;

/// One entry of the reference table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_text: Option<String>,
}

/// A cited id together with its text, if the table knows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCitation {
    pub id: u32,
    pub text: Option<String>,
}

impl ResolvedCitation {
    /// Display line, e.g. `[3] Smith et al. 2021`.
    pub fn line(&self) -> String {
        format!("[{}] {}", self.id, self.text.as_deref().unwrap_or(DETAILS_NOT_FOUND))
    }
}

/// Reference table keyed by citation id.
///
/// Serialized as a JSON object: `{"1": {"full_text": "..."}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReferenceTable {
    entries: BTreeMap<u32, Reference>,
}

impl ReferenceTable {
    /// Parse a reference table from JSON.
    pub fn from_json(json: &str) -> Result<Self, CitationError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a reference table from a JSON file.
    pub fn load(path: &Path) -> Result<Self, CitationError> {
        if !path.exists() {
            return Err(CitationError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn insert(&mut self, id: u32, full_text: impl Into<String>) {
        self.entries.insert(
            id,
            Reference {
                full_text: Some(full_text.into()),
            },
        );
    }

    pub fn get(&self, id: u32) -> Option<&Reference> {
        self.entries.get(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up every id; ids without text resolve to `None`.
    ///
    /// Blank text counts as no text.
    pub fn resolve(&self, ids: &[u32]) -> Vec<ResolvedCitation> {
        ids.iter()
            .map(|&id| ResolvedCitation {
                id,
                text: self
                    .get(id)
                    .and_then(|r| r.full_text.clone())
                    .filter(|t| !t.trim().is_empty()),
            })
            .collect()
    }

    /// Parse a reference spec and resolve the ids it names.
    pub fn resolve_spec(&self, spec: &str) -> Result<Vec<ResolvedCitation>, CitationError> {
        let ids = parse_reference_ids(spec)?;
        Ok(self.resolve(&ids))
    }
}

/// Parse a citation reference spec into ids, in the order written.
///
/// Parts are comma separated; each part is either a single id or an
/// inclusive range `a-b`. A range with `a > b` contributes nothing and one
/// spanning more than [`MAX_RANGE_LEN`] ids is an error. Empty parts are
/// skipped; anything non-numeric is an error.
pub fn parse_reference_ids(spec: &str) -> Result<Vec<u32>, CitationError> {
    let invalid = |part: &str| CitationError::InvalidId {
        spec: spec.to_string(),
        part: part.to_string(),
    };
    let parse_id = |s: &str, part: &str| s.trim().parse::<u32>().map_err(|_| invalid(part));

    let mut ids = Vec::new();
    for part in spec.split(',').map(str::trim) {
        if part.is_empty() {
            continue;
        }
        match part.split_once('-') {
            Some((start, end)) => {
                let start = parse_id(start, part)?;
                let end = parse_id(end, part)?;
                if end >= start && end - start >= MAX_RANGE_LEN {
                    return Err(CitationError::RangeTooLarge {
                        part: part.to_string(),
                        max: MAX_RANGE_LEN,
                    });
                }
                ids.extend(start..=end);
            }
            None => ids.push(parse_id(part, part)?),
        }
    }

    Ok(ids)
}

/// Lines to display for the cited ids.
///
/// An empty table yields the single "not loaded" line regardless of ids.
pub fn format_citations(table: &ReferenceTable, ids: &[u32]) -> Vec<String> {
    if table.is_empty() {
        return vec![DETAILS_NOT_LOADED.to_string()];
    }
    table.resolve(ids).iter().map(ResolvedCitation::line).collect()
}
