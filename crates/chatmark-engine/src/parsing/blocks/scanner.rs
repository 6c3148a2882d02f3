use std::borrow::Cow;

use crate::parsing::ParseOptions;

use super::{classify::classify_indexed, kinds::CloserIndex, types::Block};

/// Line-at-a-time block scanner.
///
/// Each step classifies the line under the cursor and advances past
/// whatever the winning rule consumed. When a chart region leaves text after
/// its closing delimiter, that text replaces the closing line and the cursor
/// stays on it so it is scanned as a line of its own.
pub struct BlockScanner<'a> {
    lines: Vec<Cow<'a, str>>,
    /// Built from the unmodified lines. Only the line under the cursor is
    /// ever rewritten, and lookups always start past it.
    closers: CloserIndex,
    cursor: usize,
    options: ParseOptions,
    out: Vec<Block>,
}

impl<'a> BlockScanner<'a> {
    /// `text` must already have its line endings normalized.
    pub fn new(text: &'a str, options: ParseOptions) -> Self {
        let lines: Vec<Cow<'a, str>> = text.lines().map(Cow::Borrowed).collect();
        Self {
            closers: CloserIndex::build(&lines),
            lines,
            cursor: 0,
            options,
            out: vec![],
        }
    }

    pub fn finish(mut self) -> Vec<Block> {
        while self.cursor < self.lines.len() {
            self.step();
        }
        self.out
    }

    fn step(&mut self) {
        let (rule, consumed) = classify_indexed(&self.lines, &self.closers, self.cursor, &self.options);
        log::trace!("line {}: {rule:?} -> {}", self.cursor + 1, consumed.next);
        self.out.push(consumed.block);

        match consumed.remainder {
            // The remainder is strictly shorter than the line it came from,
            // so rescanning always terminates.
            Some(rest) if consumed.next > self.cursor => {
                let last = consumed.next - 1;
                self.lines[last] = Cow::Owned(rest);
                self.cursor = last;
            }
            _ => self.cursor = consumed.next.max(self.cursor + 1),
        }
    }
}
