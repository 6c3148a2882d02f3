//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`Emphasis`**: `*`, `**`, `***` delimiter runs
//! - **`CodeSpan`**: `TICK = '\`'` - raw zone that suppresses other parsing
//! - **`Link`**: `[text](url)` pieces
//!
//! ## Design Principle
//!
//! Delimiter constants live here; span markup is rebuilt from them, so the
//! parser and `Span::source` agree on the syntax.

pub mod code_span;
pub mod emphasis;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
pub use link::Link;
