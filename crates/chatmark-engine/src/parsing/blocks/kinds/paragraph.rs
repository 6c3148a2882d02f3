use crate::parsing::{blocks::Block, inline::parse_inline};

/// Paragraph block type.
///
/// Paragraphs have no delimiters - they are the default when no other rule
/// claims a line. Each unclaimed line is its own paragraph and its whole text
/// is inline-parsed.
pub struct Paragraph;

impl Paragraph {
    pub fn from_line(line: &str) -> Block {
        Block::Paragraph {
            content: parse_inline(line),
        }
    }
}

/// Blank line detection: empty or whitespace only.
pub struct BlankLine;

impl BlankLine {
    pub fn matches(line: &str) -> bool {
        line.trim().is_empty()
    }
}
