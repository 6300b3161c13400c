//! Portfolio interchange files.
//!
//! The exported JSON document is the only durable, shareable state the
//! system defines: a lossless whole-record serialization. Import replaces
//! the record wholesale or not at all; there is no partial merge.

use crate::{Error, Result};
use chrono::Utc;
use folio_types::Portfolio;
use std::fs;
use std::path::{Path, PathBuf};

/// File name for an export generated at `timestamp_millis`.
pub fn export_file_name(timestamp_millis: i64) -> String {
    format!("portfolio_{}.json", timestamp_millis)
}

/// Write `record` into `dir` under a generation-stamped file name.
pub fn export_portfolio(record: &Portfolio, dir: &Path) -> Result<PathBuf> {
    let json = record.to_json_pretty()?;

    fs::create_dir_all(dir)?;
    let path = dir.join(export_file_name(Utc::now().timestamp_millis()));
    fs::write(&path, json)?;
    Ok(path)
}

/// Parse `path` as an interchange file.
///
/// Returns a complete record or [`Error::MalformedImport`]; the caller's
/// in-memory record is never touched on failure.
pub fn import_portfolio(path: &Path) -> Result<Portfolio> {
    let text = fs::read_to_string(path)?;
    Portfolio::from_json(&text).map_err(Error::MalformedImport)
}
