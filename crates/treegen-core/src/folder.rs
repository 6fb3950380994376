//! Folder names extracted from tree lines

use crate::error::{CoreError, CoreResult};
use std::fmt;

/// A non-empty, whitespace-trimmed folder name.
///
/// Used both as the directory name under the root and as the suffix source
/// for the stub file name. Uniqueness is not enforced.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FolderName(String);

impl FolderName {
    /// Create a folder name, trimming surrounding whitespace
    pub fn new(name: impl AsRef<str>) -> CoreResult<Self> {
        let trimmed = name.as_ref().trim();
        if trimmed.is_empty() {
            return Err(CoreError::InvalidFolderName(name.as_ref().to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The name with its first character uppercased and the rest untouched
    #[must_use]
    pub fn capitalized(&self) -> String {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl AsRef<str> for FolderName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FolderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
