//! # Message Parsing
//!
//! Turns the raw text of an assistant reply into an ordered list of
//! [`Block`]s, each carrying inline [`inline::Span`]s where it has text.
//!
//! ## Modules
//!
//! - **`blocks`**: Line classification rules and the block scanner
//! - **`inline`**: Single-line span tokenizer (bold, italic, code, links)
//! - **`snapshot`**: Stable outlines and invariant checks for tests
//!
//! Parsing is total: every input, however malformed, yields a block list.

pub mod blocks;
pub mod inline;
pub mod snapshot;

#[cfg(test)]
mod tests;

use std::borrow::Cow;

use blocks::BlockScanner;
pub use blocks::Block;

pub const DEFAULT_INDENT_WIDTH: usize = 2;
pub const DEFAULT_MAX_LIST_DEPTH: usize = 6;

/// Tunables for block scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Columns of leading whitespace per list nesting level.
    pub indent_width: usize,
    /// List depth is clamped to this.
    pub max_list_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            indent_width: DEFAULT_INDENT_WIDTH,
            max_list_depth: DEFAULT_MAX_LIST_DEPTH,
        }
    }
}

/// Rewrites `\r\n` and lone `\r` to `\n`, borrowing when there is nothing to do.
pub fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

/// Parses a message with default options.
pub fn parse_message(text: &str) -> Vec<Block> {
    parse_message_with(text, &ParseOptions::default())
}

pub fn parse_message_with(text: &str, options: &ParseOptions) -> Vec<Block> {
    let text = normalize_line_endings(text);
    let blocks = BlockScanner::new(&text, *options).finish();
    log::debug!("parsed {} bytes into {} blocks", text.len(), blocks.len());
    blocks
}
