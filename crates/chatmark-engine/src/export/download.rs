use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use super::ExportError;
use crate::table::Table;

pub const DEFAULT_FILE_PREFIX: &str = "ai-assistant-table";
pub const FILE_EXTENSION: &str = "csv";

/// `<prefix>-<epoch millis>.csv`
pub fn download_file_name(prefix: &str, timestamp: DateTime<Utc>) -> String {
    format!("{prefix}-{}.{FILE_EXTENSION}", timestamp.timestamp_millis())
}

/// Writes the table's CSV into `dir` (created if needed) and returns the path.
pub fn save_table(
    table: &Table,
    dir: &Path,
    prefix: &str,
    timestamp: DateTime<Utc>,
) -> Result<PathBuf, ExportError> {
    fs::create_dir_all(dir).map_err(|source| ExportError::Write {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = dir.join(download_file_name(prefix, timestamp));
    fs::write(&path, table.to_delimited_text()).map_err(|source| ExportError::Write {
        path: path.clone(),
        source,
    })?;

    log::info!("Saved table to {}", path.display());
    Ok(path)
}
