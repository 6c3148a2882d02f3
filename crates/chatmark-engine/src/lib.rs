//! # chatmark-engine
//!
//! Turns assistant chat replies into typed, renderer-agnostic blocks.
//!
//! ## Modules
//!
//! - **`parsing`**: Block scanner and inline span tokenizer
//! - **`table`**: Rectangular table model and CSV export
//! - **`chart`**: `[CHART]` declaration decoding and render-time derivations
//! - **`actions`**: `[ACTIONS]` proposal block extraction
//! - **`reply`**: `parse_chat_reply`, tying the above together
//! - **`export`**: Clipboard copy and file download of tables

pub mod actions;
pub mod chart;
pub mod export;
pub mod parsing;
pub mod reply;
pub mod table;

// Re-export key types for easier usage
pub use actions::{ProposedAction, split_actions};
pub use chart::{ChartDescriptor, ChartError, ChartKind, PieSlice};
pub use export::{Clipboard, CopyOutcome, ExportError, SystemClipboard, copy_with_fallback};
pub use parsing::{Block, ParseOptions, inline::Span, parse_message, parse_message_with};
pub use reply::{ChatReply, parse_chat_reply};
pub use table::Table;
