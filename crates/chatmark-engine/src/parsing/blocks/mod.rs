//! # Block Parsing
//!
//! Splits a chat message into a flat, ordered list of [`Block`]s.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): an ordered rule table
//!    ([`LineRule::PRIORITY`]) is tried against the line under the cursor;
//!    the first rule that matches claims it
//!
//! 2. **Scanning** (`scanner`): [`BlockScanner`] advances past whatever the
//!    winning rule consumed (one line, a whole table, a fenced block or a
//!    chart region) and collects the emitted blocks
//!
//! ## Modules
//!
//! - **`types`**: The [`Block`] enum
//! - **`kinds`**: Block-specific syntax with owned delimiters (Heading, CodeFence, ChartRegion, ...)
//! - **`classify`**: [`LineRule`] table and the [`classify`] entry point
//! - **`scanner`**: [`BlockScanner`] cursor loop
//!
//! ## Key Invariants
//!
//! - Every input line is claimed by exactly one block
//! - Fenced code blocks are raw zones: no block/inline parsing inside
//! - A malformed chart region never fails the parse; its lines fall through
//!   to the remaining rules

pub mod classify;
pub mod kinds;
pub mod scanner;
pub mod types;

pub use classify::{Consumed, LineRule, classify, classify_indexed};
pub use scanner::BlockScanner;
pub use types::Block;
