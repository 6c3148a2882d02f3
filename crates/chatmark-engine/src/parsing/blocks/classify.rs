use crate::{
    chart::ChartDescriptor,
    parsing::{ParseOptions, inline::parse_inline},
    table::{Table, TableRow},
};

use super::{
    kinds::{
        BlankLine, BlockQuote, ChartRegion, CloserIndex, CodeFence, Heading, ListLine, ListMarker,
        Paragraph, ThematicBreak,
    },
    types::Block,
};

/// The result of a rule claiming one or more lines.
#[derive(Debug, Clone, PartialEq)]
pub struct Consumed {
    pub block: Block,
    /// Index of the first line not consumed.
    pub next: usize,
    /// Text left over on the last consumed line, to be scanned as a line of
    /// its own (trailing text after `[/CHART]`).
    pub remainder: Option<String>,
}

impl Consumed {
    fn line(block: Block, at: usize) -> Self {
        Self {
            block,
            next: at + 1,
            remainder: None,
        }
    }
}

/// Line classification rules.
///
/// Exactly one rule claims each line: [`LineRule::PRIORITY`] is tried in
/// order and the first rule whose [`LineRule::try_consume`] succeeds wins.
/// Multi-line rules (chart, table, code fence) consume their whole extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRule {
    Chart,
    Table,
    Heading,
    HorizontalRule,
    UnorderedList,
    OrderedList,
    CodeFence,
    Blockquote,
    EmptyLine,
    Paragraph,
}

impl LineRule {
    pub const PRIORITY: [LineRule; 10] = [
        LineRule::Chart,
        LineRule::Table,
        LineRule::Heading,
        LineRule::HorizontalRule,
        LineRule::UnorderedList,
        LineRule::OrderedList,
        LineRule::CodeFence,
        LineRule::Blockquote,
        LineRule::EmptyLine,
        LineRule::Paragraph,
    ];

    /// Attempts to claim the line at `at` (and any continuation lines).
    ///
    /// Returning `None` lets the next rule look at the same line. `closers`
    /// must have been built from `lines`.
    pub fn try_consume<S: AsRef<str>>(
        self,
        lines: &[S],
        closers: &CloserIndex,
        at: usize,
        options: &ParseOptions,
    ) -> Option<Consumed> {
        let line = lines.get(at)?.as_ref();

        match self {
            LineRule::Chart => consume_chart(lines, closers, at),
            LineRule::Table => consume_table(lines, at),
            LineRule::Heading => Heading::strip(line).map(|(level, rest)| {
                Consumed::line(
                    Block::Heading {
                        level,
                        content: parse_inline(rest),
                    },
                    at,
                )
            }),
            LineRule::HorizontalRule => ThematicBreak::matches(line)
                .then(|| Consumed::line(Block::HorizontalRule, at)),
            LineRule::UnorderedList => ListMarker::unordered(line, options.indent_width)
                .map(|l| Consumed::line(list_block(l, options), at)),
            LineRule::OrderedList => ListMarker::ordered(line, options.indent_width)
                .map(|l| Consumed::line(list_block(l, options), at)),
            LineRule::CodeFence => consume_code_fence(lines, at),
            LineRule::Blockquote => BlockQuote::strip_prefix(line).map(|rest| {
                Consumed::line(
                    Block::Blockquote {
                        content: parse_inline(rest),
                    },
                    at,
                )
            }),
            LineRule::EmptyLine => {
                BlankLine::matches(line).then(|| Consumed::line(Block::EmptyLine, at))
            }
            LineRule::Paragraph => Some(Consumed::line(Paragraph::from_line(line), at)),
        }
    }
}

/// Classifies the line at `at`, returning the winning rule and what it
/// consumed. Total: [`LineRule::Paragraph`] claims anything left over.
///
/// Indexes `lines` on every call; [`BlockScanner`](super::BlockScanner)
/// indexes once and calls [`classify_indexed`].
pub fn classify<S: AsRef<str>>(
    lines: &[S],
    at: usize,
    options: &ParseOptions,
) -> (LineRule, Consumed) {
    classify_indexed(lines, &CloserIndex::build(lines), at, options)
}

pub fn classify_indexed<S: AsRef<str>>(
    lines: &[S],
    closers: &CloserIndex,
    at: usize,
    options: &ParseOptions,
) -> (LineRule, Consumed) {
    LineRule::PRIORITY
        .iter()
        .find_map(|rule| {
            rule.try_consume(lines, closers, at, options)
                .map(|consumed| (*rule, consumed))
        })
        .unwrap_or_else(|| {
            let line = lines.get(at).map_or("", AsRef::as_ref);
            (
                LineRule::Paragraph,
                Consumed::line(Paragraph::from_line(line), at),
            )
        })
}

fn consume_chart<S: AsRef<str>>(
    lines: &[S],
    closers: &CloserIndex,
    at: usize,
) -> Option<Consumed> {
    let region = ChartRegion::locate(lines, closers, at)?;
    match ChartDescriptor::read(region.reader()) {
        Ok(spec) => {
            let remainder = (!BlankLine::matches(region.tail))
                .then(|| region.tail.trim_start().to_string());
            Some(Consumed {
                block: Block::Chart { spec },
                next: region.close_line + 1,
                remainder,
            })
        }
        Err(e) => {
            log::debug!("chart region at line {} left as text: {e}", at + 1);
            None
        }
    }
}

fn consume_table<S: AsRef<str>>(lines: &[S], at: usize) -> Option<Consumed> {
    if !TableRow::matches(lines.get(at)?.as_ref()) {
        return None;
    }
    let end = (at..lines.len())
        .find(|&i| !TableRow::matches(lines[i].as_ref()))
        .unwrap_or(lines.len());

    let table = Table::from_lines(lines[at..end].iter().map(|l| l.as_ref()));
    Some(Consumed {
        block: Block::Table(table),
        next: end,
        remainder: None,
    })
}

fn consume_code_fence<S: AsRef<str>>(lines: &[S], at: usize) -> Option<Consumed> {
    let language = CodeFence::opener(lines.get(at)?.as_ref())?;

    let body_start = at + 1;
    let close = (body_start..lines.len()).find(|&i| CodeFence::closes(lines[i].as_ref()));
    let body_end = close.unwrap_or(lines.len());

    let code_lines = lines[body_start.min(body_end)..body_end]
        .iter()
        .map(|l| l.as_ref().to_string())
        .collect();

    Some(Consumed {
        block: Block::CodeBlock {
            language,
            lines: code_lines,
        },
        // Unterminated fences run to end of input.
        next: close.map_or(lines.len(), |i| i + 1),
        remainder: None,
    })
}

fn list_block(line: ListLine<'_>, options: &ParseOptions) -> Block {
    Block::ListItem {
        ordered: line.ordered,
        depth: ListMarker::depth(line.indent, options.indent_width, options.max_list_depth),
        index: line.index,
        content: parse_inline(line.content),
    }
}
