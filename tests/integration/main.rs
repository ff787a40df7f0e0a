//! Integration tests for readalong

mod cli_test;
mod highlighter_test;
mod markdown_test;
mod sync_test;
