use serde::Serialize;

use super::kinds::{CodeSpan, Emphasis, Link};

/// A parsed inline fragment of a single line.
///
/// Spans never nest: the text of a `Bold` span is the literal sub-string
/// between its delimiters and is not parsed again for italics or links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Span {
    /// Text outside any recognised construct, emitted verbatim.
    PlainText { text: String },
    /// `**text**`
    Bold { text: String },
    /// `*text*`
    Italic { text: String },
    /// `***text***`
    BoldItalic { text: String },
    /// `` `text` ``. Raw zone: nothing inside is interpreted.
    Code { text: String },
    /// `[text](url)`
    Link { text: String, url: String },
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Span::PlainText { text: text.into() }
    }

    /// The text a renderer displays for this span, without markup.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Span::PlainText { text }
            | Span::Bold { text }
            | Span::Italic { text }
            | Span::BoldItalic { text }
            | Span::Code { text }
            | Span::Link { text, .. } => text,
        }
    }

    /// Rebuilds the source markup this span was parsed from.
    ///
    /// Concatenating `source()` over the spans of a line reproduces the line.
    #[must_use]
    pub fn source(&self) -> String {
        match self {
            Span::PlainText { text } => text.clone(),
            Span::Bold { text } => Emphasis::BOLD.wrap(text),
            Span::Italic { text } => Emphasis::ITALIC.wrap(text),
            Span::BoldItalic { text } => Emphasis::BOLD_ITALIC.wrap(text),
            Span::Code { text } => CodeSpan::wrap(text),
            Span::Link { text, url } => Link::wrap(text, url),
        }
    }

    /// Short kind label used by snapshots and the terminal viewer.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Span::PlainText { .. } => "PlainText",
            Span::Bold { .. } => "Bold",
            Span::Italic { .. } => "Italic",
            Span::BoldItalic { .. } => "BoldItalic",
            Span::Code { .. } => "Code",
            Span::Link { .. } => "Link",
        }
    }
}

/// Concatenated display text of a span sequence.
#[must_use]
pub fn spans_text(spans: &[Span]) -> String {
    spans.iter().map(Span::text).collect()
}
