//! Integration tests for markdown preparation

use std::fs;

use readalong::markdown::{normalize, render_document, tokenize};

use super::helpers::fixtures_dir;

const FIXTURE_WORDS: [&str; 14] = [
    "Summary",
    "The",
    "paper",
    "studies",
    "read-along",
    "audio.",
    "It",
    "reports",
    "two",
    "findings",
    "[1-2].",
    "Listeners",
    "remember",
    "more.",
];

fn fixture_markdown() -> String {
    let raw = fs::read_to_string(fixtures_dir().join("summary.md")).unwrap();
    normalize(&raw, 2)
}

#[test]
fn fixture_words_in_reading_order() {
    assert_eq!(tokenize(&fixture_markdown()), FIXTURE_WORDS);
}

#[test]
fn fixture_index_offsets() {
    let index = render_document(&fixture_markdown()).index();

    assert_eq!(index.len(), 14);
    assert_eq!(index.total_chars(), 99);
    let listeners = index.token(11).unwrap();
    assert_eq!((listeners.start, listeners.end), (75, 84));
}

#[test]
fn escaped_newlines_split_paragraphs() {
    let markdown = fixture_markdown();
    assert!(markdown.contains("audio.\n\nIt reports"));

    let html = render_document(&markdown).html;
    assert!(html.contains(r#"<span class="word" data-word="5">audio.</span></p>"#));
    assert!(html.contains(r#"<p><span class="word" data-word="6">It</span>"#));
}

#[test]
fn code_is_rendered_but_not_spoken() {
    let document = render_document(&fixture_markdown());

    assert!(document.html.contains("not spoken"));
    assert!(!document.words.iter().any(|w| w.contains("spoken")));
}

#[test]
fn span_indices_match_words() {
    let document = render_document(&fixture_markdown());

    for (i, word) in document.words.iter().enumerate() {
        let span = format!(
            r#"<span class="word" data-word="{}">{}</span>"#,
            i,
            html_escape::encode_text(word)
        );
        assert!(document.html.contains(&span), "missing span for {}", word);
    }
}
