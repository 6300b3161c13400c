pub mod check;
pub mod edit;
pub mod export;
pub mod login;
pub mod logout;
pub mod preview;
pub mod status;

use anyhow::Result;
use folio_types::Portfolio;
use std::path::Path;

/// Load the record a read-only command operates on: an interchange file when
/// given, the starter record otherwise.
pub(crate) fn load_record(file: Option<&Path>) -> Result<Portfolio> {
    match file {
        Some(path) => Ok(folio_runtime::import_portfolio(path)?),
        None => Ok(Portfolio::starter()),
    }
}
