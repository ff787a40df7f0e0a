//! HTML rendering with word spans.
//!
//! Ordinary text is split into words and every word is wrapped in
//! `<span class="word" data-word="N">`, where `N` is its position in
//! [`RenderedDocument::words`]. Code (markdown or raw `<code>`/`<pre>`
//! HTML) and image alt text are left untouched and produce no words, so
//! they are never highlighted.

use std::fmt::Write as _;

use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag, TagEnd};

use crate::sync::{SeparatorMode, WordTimeIndex};

/// CSS class carried by every word span.
pub const WORD_CLASS: &str = "word";

/// Rendered HTML plus the words it contains, in reading order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderedDocument {
    pub html: String,
    pub words: Vec<String>,
}

impl RenderedDocument {
    /// Build the time index for this document's words.
    pub fn index(&self) -> WordTimeIndex {
        WordTimeIndex::build(&self.words)
    }

    /// Build the time index using a specific separator accounting.
    pub fn index_with(&self, separator_mode: SeparatorMode) -> WordTimeIndex {
        WordTimeIndex::build_with(&self.words, separator_mode)
    }
}

/// Render markdown to HTML, wrapping each highlightable word in a span.
pub fn render_document(markdown: &str) -> RenderedDocument {
    let mut wrapper = WordWrapper::default();
    for event in Parser::new_ext(markdown, parser_options()) {
        wrapper.push(event);
    }
    wrapper.finish()
}

/// Highlightable words of a markdown document, in reading order.
pub fn tokenize(markdown: &str) -> Vec<String> {
    render_document(markdown).words
}

fn parser_options() -> Options {
    Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH
}

/// Rewrites the parser's event stream, replacing text with word spans.
#[derive(Default)]
struct WordWrapper<'a> {
    events: Vec<Event<'a>>,
    words: Vec<String>,
    /// Text collected since the last non-text event
    pending: String,
    code_depth: usize,
    /// Open raw `<code>`/`<pre>` elements
    html_code_depth: usize,
    image_depth: usize,
}

impl<'a> WordWrapper<'a> {
    fn push(&mut self, event: Event<'a>) {
        if let Event::Text(text) = &event {
            if self.code_depth == 0 && self.html_code_depth == 0 && self.image_depth == 0 {
                // The parser may split one text node into several events
                self.pending.push_str(text);
                return;
            }
        }

        self.flush();
        match &event {
            Event::Start(Tag::CodeBlock(_)) => self.code_depth += 1,
            Event::End(TagEnd::CodeBlock) => self.code_depth = self.code_depth.saturating_sub(1),
            Event::Start(Tag::Image { .. }) => self.image_depth += 1,
            Event::End(TagEnd::Image) => self.image_depth = self.image_depth.saturating_sub(1),
            Event::Html(raw) | Event::InlineHtml(raw) => {
                let (opened, closed) = code_tag_counts(raw);
                self.html_code_depth = (self.html_code_depth + opened).saturating_sub(closed);
            }
            // An unclosed inline element ends with its paragraph
            Event::End(TagEnd::Paragraph) => self.html_code_depth = 0,
            _ => {}
        }
        self.events.push(event);
    }

    fn flush(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.pending);
        let mut out = String::with_capacity(text.len() * 2);

        for (is_space, piece) in split_runs(&text) {
            if is_space {
                out.push_str(&html_escape::encode_text(piece));
            } else {
                let _ = write!(
                    out,
                    r#"<span class="{}" data-word="{}">{}</span>"#,
                    WORD_CLASS,
                    self.words.len(),
                    html_escape::encode_text(piece)
                );
                self.words.push(piece.to_string());
            }
        }

        self.events.push(Event::InlineHtml(CowStr::from(out)));
    }

    fn finish(mut self) -> RenderedDocument {
        self.flush();
        let mut out = String::new();
        html::push_html(&mut out, self.events.into_iter());
        tracing::debug!(words = self.words.len(), "rendered markdown document");
        RenderedDocument {
            html: out,
            words: self.words,
        }
    }
}

/// Count opening and closing `code`/`pre` tags in a raw HTML fragment.
fn code_tag_counts(raw: &str) -> (usize, usize) {
    let lower = raw.to_ascii_lowercase();
    let mut opened = 0;
    let mut closed = 0;

    for (i, _) in lower.match_indices('<') {
        let rest = &lower[i + 1..];
        let (closing, name) = match rest.strip_prefix('/') {
            Some(name) => (true, name),
            None => (false, rest),
        };
        let is_code_tag = ["code", "pre"].iter().any(|tag| {
            name.strip_prefix(tag).is_some_and(|after| {
                after
                    .chars()
                    .next()
                    .is_some_and(|c| c == '>' || c == '/' || c.is_whitespace())
            })
        });
        if !is_code_tag {
            continue;
        }
        let self_closing = name.find('>').is_some_and(|end| name[..end].ends_with('/'));
        if closing {
            closed += 1;
        } else if !self_closing {
            opened += 1;
        }
    }

    (opened, closed)
}

/// Split text into alternating whitespace and non-whitespace runs.
///
/// Yields `(is_whitespace, run)` pairs covering the whole input.
fn split_runs(text: &str) -> Vec<(bool, &str)> {
    let mut runs = Vec::new();
    let mut run_start = 0;
    let mut run_is_space = None;

    for (i, c) in text.char_indices() {
        let is_space = c.is_whitespace();
        match run_is_space {
            Some(current) if current != is_space => {
                runs.push((current, &text[run_start..i]));
                run_start = i;
                run_is_space = Some(is_space);
            }
            None => run_is_space = Some(is_space),
            _ => {}
        }
    }
    if let Some(current) = run_is_space {
        runs.push((current, &text[run_start..]));
    }

    runs
}
