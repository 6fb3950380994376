//! Folder and stub file creation
//!
//! Each folder is created under the root (if absent) and receives one stub
//! file (if absent). Existing stubs are reported and left untouched, which
//! makes repeated builds with the same input a no-op.

use crate::error::{CoreError, CoreResult};
use crate::folder::FolderName;
use crate::fs::{Filesystem, RealFs};
use crate::stub::StubTemplate;
use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// What happened to one folder's stub file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StubOutcome {
    /// The stub was written
    Created { path: PathBuf },
    /// A file was already present and was not modified
    AlreadyExists { path: PathBuf },
}

impl StubOutcome {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Created { path } | Self::AlreadyExists { path } => path,
        }
    }
}

/// Console status line
impl fmt::Display for StubOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created { path } => write!(f, "✅ Created: {}", path.display()),
            Self::AlreadyExists { path } => {
                write!(f, "⚠️  File already exists: {}", path.display())
            }
        }
    }
}

/// Outcomes of one build, in folder order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub outcomes: Vec<StubOutcome>,
}

impl BuildReport {
    #[must_use]
    pub fn created(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, StubOutcome::Created { .. }))
            .count()
    }

    #[must_use]
    pub fn skipped(&self) -> usize {
        self.outcomes.len() - self.created()
    }
}

/// Creates folders and stub files through a [`Filesystem`]
#[derive(Debug)]
pub struct StructureBuilder<F> {
    fs: F,
    template: StubTemplate,
}

impl<F: Filesystem> StructureBuilder<F> {
    /// Builder using Java stubs
    pub fn new(fs: F) -> Self {
        Self {
            fs,
            template: StubTemplate::java(),
        }
    }

    #[must_use]
    pub fn with_template(mut self, template: StubTemplate) -> Self {
        self.template = template;
        self
    }

    pub fn filesystem(&self) -> &F {
        &self.fs
    }

    /// Create `root_dir`, then one folder and one stub per entry in `folders`.
    ///
    /// A status line per folder is written to `out`. Stops at the first
    /// filesystem error; anything created before it stays on disk.
    pub fn build<W: Write>(
        &self,
        base_name: &str,
        folders: &[FolderName],
        root_dir: &Path,
        out: &mut W,
    ) -> CoreResult<BuildReport> {
        self.ensure_dir(root_dir)?;

        let mut report = BuildReport::default();
        for folder in folders {
            let outcome = self.build_folder(base_name, folder, root_dir)?;
            writeln!(out, "{outcome}").map_err(CoreError::Console)?;
            report.outcomes.push(outcome);
        }

        info!(
            root = %root_dir.display(),
            created = report.created(),
            skipped = report.skipped(),
            "Structure build finished"
        );
        Ok(report)
    }

    fn build_folder(
        &self,
        base_name: &str,
        folder: &FolderName,
        root_dir: &Path,
    ) -> CoreResult<StubOutcome> {
        let folder_path = root_dir.join(folder.as_str());
        self.ensure_dir(&folder_path)?;

        let file_name = self.template.file_name(base_name, folder);
        let path = folder_path.join(&file_name);

        if self.fs.exists(&path) {
            return Ok(StubOutcome::AlreadyExists { path });
        }

        match self.fs.create_new(&path, &self.template.content(&file_name)) {
            Ok(()) => Ok(StubOutcome::Created { path }),
            // Appeared between the check and the write
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                Ok(StubOutcome::AlreadyExists { path })
            }
            Err(source) => Err(CoreError::WriteStub { path, source }),
        }
    }

    fn ensure_dir(&self, path: &Path) -> CoreResult<()> {
        if self.fs.exists(path) {
            debug!(path = %path.display(), "Directory already present");
        } else {
            debug!(path = %path.display(), "Creating directory");
        }
        self.fs
            .create_dir_all(path)
            .map_err(|source| CoreError::CreateDir {
                path: path.to_path_buf(),
                source,
            })
    }
}

/// Build on the real filesystem with Java stubs
pub fn build<W: Write>(
    base_name: &str,
    folders: &[FolderName],
    root_dir: &Path,
    out: &mut W,
) -> CoreResult<BuildReport> {
    StructureBuilder::new(RealFs).build(base_name, folders, root_dir, out)
}
