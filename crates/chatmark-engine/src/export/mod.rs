//! # Export Actions
//!
//! The only side-effecting operations in the crate: putting a table's CSV on
//! the clipboard and saving it as a file. Both take the bytes from
//! [`Table::to_delimited_text`](crate::table::Table::to_delimited_text), so
//! the clipboard and the file always agree.
//!
//! ## Modules
//!
//! - **`clipboard`**: `Clipboard` trait, platform command clipboard, fallback chaining
//! - **`download`**: timestamped file names and `save_table`

pub mod clipboard;
pub mod download;

use std::path::PathBuf;
use std::process::ExitStatus;

pub use clipboard::{Clipboard, ClipboardCommand, CopyOutcome, SystemClipboard, copy_with_fallback};
pub use download::{DEFAULT_FILE_PREFIX, download_file_name, save_table};

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("No clipboard command available")]
    NoClipboard,
    #[error("Clipboard command `{program}` failed: {source}")]
    Spawn {
        program: &'static str,
        #[source]
        source: std::io::Error,
    },
    #[error("Clipboard command `{program}` exited with {status}")]
    Status {
        program: &'static str,
        status: ExitStatus,
    },
    #[error("Copy failed ({primary}); fallback also failed ({fallback})")]
    CopyFailed {
        primary: Box<ExportError>,
        fallback: Box<ExportError>,
    },
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
