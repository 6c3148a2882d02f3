use serde::Serialize;

use crate::{chart::ChartDescriptor, parsing::inline::Span, table::Table};

/// One structurally classified unit of a chat message.
///
/// Blocks are produced fresh by every parse and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// `#` to `####` heading.
    Heading { level: u8, content: Vec<Span> },
    /// A single line of text (the catch-all).
    Paragraph { content: Vec<Span> },
    /// `---`, `***` or `___`.
    HorizontalRule,
    /// `- item`, `* item` or `3. item`.
    ListItem {
        ordered: bool,
        /// Indent level derived from leading whitespace, capped.
        depth: usize,
        /// The number as written in the source, present iff `ordered`.
        index: Option<u32>,
        content: Vec<Span>,
    },
    /// Fenced code block. Lines are raw, never inline-parsed.
    CodeBlock {
        language: Option<String>,
        lines: Vec<String>,
    },
    /// `> quoted text`
    Blockquote { content: Vec<Span> },
    /// A blank line. Kept as its own block, never merged with neighbours.
    EmptyLine,
    /// Pipe table; export via [`Table::to_delimited_text`].
    Table(Table),
    /// `[CHART] {...} [/CHART]` region.
    Chart { spec: ChartDescriptor },
}

impl Block {
    /// Inline content of text-bearing blocks.
    #[must_use]
    pub fn spans(&self) -> Option<&[Span]> {
        match self {
            Block::Heading { content, .. }
            | Block::Paragraph { content }
            | Block::ListItem { content, .. }
            | Block::Blockquote { content } => Some(content),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Block::Table(table) => Some(table),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_chart(&self) -> Option<&ChartDescriptor> {
        match self {
            Block::Chart { spec } => Some(spec),
            _ => None,
        }
    }

    /// Short kind label used by snapshots and the terminal viewer.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Block::Heading { .. } => "Heading",
            Block::Paragraph { .. } => "Paragraph",
            Block::HorizontalRule => "HorizontalRule",
            Block::ListItem { .. } => "ListItem",
            Block::CodeBlock { .. } => "CodeBlock",
            Block::Blockquote { .. } => "Blockquote",
            Block::EmptyLine => "EmptyLine",
            Block::Table(_) => "Table",
            Block::Chart { .. } => "Chart",
        }
    }
}
