use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::models::assignment::Assignment;
use crate::models::group::AssignmentGroup;

/// One element of an ordered upload list: either an assignment or an
/// assignment group, never both and never neither.
///
/// The JSON form is an externally tagged single-key object,
/// `{"assignment": …}` or `{"assignment_group": …}`; an empty object or
/// one carrying both keys is rejected at decode time. Order within a
/// list of entries is semantically significant: a group entry opens the
/// scope that following assignment entries belong to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Entry {
    #[serde(rename = "assignment")]
    Assignment(Assignment),
    #[serde(rename = "assignment_group")]
    Group(AssignmentGroup),
}

/// Deserialize an ordered entry list from a JSON string.
pub fn parse_entries_json_str(json: &str) -> Result<Vec<Entry>> {
    serde_json::from_str(json).context("Failed to parse entry list JSON")
}

/// Read and deserialize an ordered entry list from a file.
pub fn load_entries(path: &Path) -> Result<Vec<Entry>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse_entries_json_str(&contents)
        .with_context(|| format!("Error parsing {}", path.display()))
}
