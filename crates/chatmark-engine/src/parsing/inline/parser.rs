use std::sync::OnceLock;

use regex::{Captures, Regex};

use super::types::Span;

/// Alternation of every inline construct, longest delimiter first.
///
/// `***` has to be tried before `**` and `*`, otherwise `***x***` splits into
/// an italic and a bold fragment. Italic content may not start with `*`, so
/// bare asterisk runs (`**`, `***`) never match anything.
const INLINE_PATTERN: &str = concat!(
    r"\*\*\*(?P<bold_italic>.+?)\*\*\*",
    r"|\*\*(?P<bold>.+?)\*\*",
    r"|\*(?P<italic>[^*].*?)\*",
    r"|`(?P<code>[^`]+)`",
    r"|\[(?P<link_text>[^\]]+)\]\((?P<link_url>[^)]+)\)",
);

fn inline_regex() -> &'static Regex {
    static INLINE_REGEX: OnceLock<Regex> = OnceLock::new();
    INLINE_REGEX.get_or_init(|| Regex::new(INLINE_PATTERN).expect("Invalid inline regex"))
}

/// Parses one line of text into a sequence of [`Span`]s.
///
/// The line must already be stripped of its block prefix (`## `, `- `, `> `).
/// Text between constructs becomes [`Span::PlainText`]; a delimiter without a
/// closing counterpart is left in the plain text, never reported as an error.
///
/// An empty line yields no spans.
pub fn parse_inline(line: &str) -> Vec<Span> {
    let mut out = vec![];
    let mut text_start = 0;

    for caps in inline_regex().captures_iter(line) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        if whole.start() > text_start {
            out.push(Span::plain(&line[text_start..whole.start()]));
        }
        out.push(span_from_captures(&caps).unwrap_or_else(|| Span::plain(whole.as_str())));
        text_start = whole.end();
    }

    if text_start < line.len() {
        out.push(Span::plain(&line[text_start..]));
    }
    out
}

fn span_from_captures(caps: &Captures<'_>) -> Option<Span> {
    let group = |name: &str| caps.name(name).map(|m| m.as_str().to_string());

    if let Some(text) = group("bold_italic") {
        return Some(Span::BoldItalic { text });
    }
    if let Some(text) = group("bold") {
        return Some(Span::Bold { text });
    }
    if let Some(text) = group("italic") {
        return Some(Span::Italic { text });
    }
    if let Some(text) = group("code") {
        return Some(Span::Code { text });
    }
    match (group("link_text"), group("link_url")) {
        (Some(text), Some(url)) => Some(Span::Link { text, url }),
        _ => None,
    }
}
