//! Citation parsing errors.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CitationError {
    #[error("Invalid reference id '{part}' in '{spec}'")]
    InvalidId { spec: String, part: String },

    #[error("Reference range '{part}' spans more than {max} ids")]
    RangeTooLarge { part: String, max: u32 },

    #[error("Reference file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Failed to read reference file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Malformed reference data: {0}")]
    Malformed(#[from] serde_json::Error),
}
