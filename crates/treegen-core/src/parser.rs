//! Tree diagram parsing
//!
//! Only lines containing a branch connector are considered. The hierarchy
//! implied by indentation is ignored: every recognised entry becomes one
//! folder directly under the root.

use crate::error::{CoreError, CoreResult};
use crate::folder::FolderName;
use crate::fs::{Filesystem, RealFs};
use std::path::Path;
use tracing::debug;

/// Connector for an entry with later siblings
pub const BRANCH: &str = "├──";

/// Connector for the last entry of a level
pub const LAST_BRANCH: &str = "└──";

/// Horizontal run separating the connector from the name
pub const DELIMITER: &str = "──";

/// Extract the folder name from a single diagram line.
///
/// Returns `None` for lines without a connector, for lines where the
/// delimiter does not split the line into exactly two parts, and for
/// connectors with nothing after them.
#[must_use]
pub fn parse_line(line: &str) -> Option<FolderName> {
    let cleaned = line.trim();
    if !cleaned.contains(BRANCH) && !cleaned.contains(LAST_BRANCH) {
        return None;
    }

    let parts: Vec<&str> = cleaned.split(DELIMITER).collect();
    let [_, name] = parts.as_slice() else {
        debug!(line = cleaned, parts = parts.len(), "Skipping tree line");
        return None;
    };

    FolderName::new(name).ok()
}

/// Parse diagram text into folder names, in line order
#[must_use]
pub fn parse_tree(contents: &str) -> Vec<FolderName> {
    contents.lines().filter_map(parse_line).collect()
}

/// Read and parse a tree file from disk
pub fn parse_tree_file(path: &Path) -> CoreResult<Vec<FolderName>> {
    parse_tree_file_with(&RealFs, path)
}

/// Read and parse a tree file through the given filesystem
pub fn parse_tree_file_with(fs: &impl Filesystem, path: &Path) -> CoreResult<Vec<FolderName>> {
    let contents = fs.read_to_string(path).map_err(|source| CoreError::ReadTree {
        path: path.to_path_buf(),
        source,
    })?;

    let folders = parse_tree(&contents);
    debug!(path = %path.display(), count = folders.len(), "Parsed tree file");
    Ok(folders)
}
