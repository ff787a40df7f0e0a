//! Inline citation references.
//!
//! Summaries cite their sources with markers such as `[1]`, `[3-5]` or
//! `[1,2]`. This module parses those reference specs and resolves them
//! against the reference table shipped alongside a summary.

mod error;
mod references;

pub use error::CitationError;
pub use references::{
    format_citations, parse_reference_ids, Reference, ReferenceTable, ResolvedCitation,
    DETAILS_NOT_FOUND, DETAILS_NOT_LOADED, MAX_RANGE_LEN,
};
