//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Converts parsed blocks to a stable, serializable `Snap`
//!   and a one-line-per-block text `outline` for `insta` snapshots
//! - **`invariants`**: Structural checks every parse result must pass (heading
//!   levels, list index/ordered agreement, rectangular tables, depth cap)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{Snap, normalize, outline};
