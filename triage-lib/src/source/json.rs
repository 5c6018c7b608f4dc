//! Static issue datasets stored as JSON arrays.

use std::fs;
use std::path::Path;

use crate::error::Error;
use crate::model::Issue;

/// Parse a JSON array of issue records.
///
/// Unrecognized status labels become [`IssueStatus::Unknown`] rather than
/// failing, so they load as unselectable rows.
///
/// [`IssueStatus::Unknown`]: crate::model::IssueStatus::Unknown
pub fn parse_issues(json: &str) -> Result<Vec<Issue>, Error> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse an issue dataset from disk.
pub fn load_issues(path: impl AsRef<Path>) -> Result<Vec<Issue>, Error> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let issues = parse_issues(&json)?;
    log::info!("Loaded {} issues from {}", issues.len(), path.display());
    Ok(issues)
}
