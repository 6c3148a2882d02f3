//! # Inline Parsing
//!
//! Splits a single line into typed [`Span`]s.
//!
//! ## Architecture
//!
//! Inline parsing is separate from block scanning and runs over the content of
//! text-bearing blocks (paragraphs, headings, list items, blockquotes) after
//! their block prefix has been stripped.
//!
//! A single alternation regex tries the constructs in priority order:
//! bold-italic, bold, italic, code span, link. Anything between matches is
//! plain text.
//!
//! ## Modules
//!
//! - **`types`**: `Span` enum (PlainText, Bold, Italic, BoldItalic, Code, Link)
//! - **`kinds`**: Inline-specific types with owned delimiters
//! - **`parser`**: `parse_inline()` main entry point
//!
//! ## Grammar Limits
//!
//! Spans never nest. `**a *b* c**` is one bold span whose text still contains
//! the asterisks, and link text is not parsed for emphasis.

pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::parse_inline;
pub use types::{Span, spans_text};
