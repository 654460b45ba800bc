use crate::project::Project;

use super::ExportError;

/// Pretty-printed array of the records exactly as fetched. No sentinel
/// substitution: nulls and empty strings pass through.
pub fn to_json(projects: &[&Project]) -> Result<Vec<u8>, ExportError> {
    Ok(serde_json::to_vec_pretty(projects)?)
}
