//! Stub file naming and content

use crate::folder::FolderName;

/// Marker text written after the comment marker in every stub
pub const AUTO_GENERATED: &str = "Auto-generated:";

/// How stub files are named and what single line they contain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StubTemplate {
    extension: String,
    comment_marker: String,
}

impl StubTemplate {
    /// Custom template; `extension` is given without the leading dot
    pub fn new(extension: impl Into<String>, comment_marker: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
            comment_marker: comment_marker.into(),
        }
    }

    /// Java stubs: `.java` files with a `//` comment line
    #[must_use]
    pub fn java() -> Self {
        Self::new("java", "//")
    }

    #[must_use]
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// `base_name` followed by the capitalized folder name and the extension,
    /// e.g. `user` + `controller` gives `userController.java`
    #[must_use]
    pub fn file_name(&self, base_name: &str, folder: &FolderName) -> String {
        format!("{base_name}{}.{}", folder.capitalized(), self.extension)
    }

    #[must_use]
    pub fn content(&self, file_name: &str) -> String {
        format!("{} {AUTO_GENERATED} {file_name}\n", self.comment_marker)
    }
}

impl Default for StubTemplate {
    fn default() -> Self {
        Self::java()
    }
}
