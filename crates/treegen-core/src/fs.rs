//! Filesystem access used by the parser and builder
//!
//! Everything that touches the disk goes through [`Filesystem`], so the
//! builder can run against [`MemoryFs`] in unit tests.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// The filesystem operations treegen needs
pub trait Filesystem {
    /// Whether anything (file or directory) exists at `path`
    fn exists(&self, path: &Path) -> bool;

    /// Create `path` and all missing parents; no-op if it is already a directory
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Create a new file with `contents`.
    ///
    /// Fails with [`io::ErrorKind::AlreadyExists`] if the file is present;
    /// existing files are never truncated.
    fn create_new(&self, path: &Path, contents: &str) -> io::Result<()>;

    /// Read a whole file as UTF-8
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

impl<T: Filesystem + ?Sized> Filesystem for &T {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        (**self).create_dir_all(path)
    }

    fn create_new(&self, path: &Path, contents: &str) -> io::Result<()> {
        (**self).create_new(path, contents)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        (**self).read_to_string(path)
    }
}

/// The real filesystem, via `std::fs`
#[derive(Debug, Clone, Copy, Default)]
pub struct RealFs;

impl Filesystem for RealFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn create_new(&self, path: &Path, contents: &str) -> io::Result<()> {
        let mut file = OpenOptions::new().write(true).create_new(true).open(path)?;
        file.write_all(contents.as_bytes())
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Node {
    Dir,
    File(String),
}

/// An in-memory filesystem.
///
/// Paths are compared literally, with no normalisation of `.` or `..`.
#[derive(Debug, Default)]
pub struct MemoryFs {
    nodes: RefCell<BTreeMap<PathBuf, Node>>,
}

impl MemoryFs {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file, creating its parent directories
    pub fn insert_file(&self, path: impl AsRef<Path>, contents: impl Into<String>) {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            for dir in ancestors_top_down(parent) {
                self.nodes.borrow_mut().entry(dir).or_insert(Node::Dir);
            }
        }
        self.nodes
            .borrow_mut()
            .insert(path.to_path_buf(), Node::File(contents.into()));
    }

    /// Contents of the file at `path`, if it is a file
    #[must_use]
    pub fn file_contents(&self, path: impl AsRef<Path>) -> Option<String> {
        match self.nodes.borrow().get(path.as_ref()) {
            Some(Node::File(contents)) => Some(contents.clone()),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_dir(&self, path: impl AsRef<Path>) -> bool {
        matches!(self.nodes.borrow().get(path.as_ref()), Some(Node::Dir))
    }

    /// All file paths, sorted
    #[must_use]
    pub fn files(&self) -> Vec<PathBuf> {
        self.nodes
            .borrow()
            .iter()
            .filter(|(_, node)| matches!(node, Node::File(_)))
            .map(|(path, _)| path.clone())
            .collect()
    }

    /// A copy of every entry, for before/after comparisons
    #[must_use]
    pub fn snapshot(&self) -> Vec<(PathBuf, Option<String>)> {
        self.nodes
            .borrow()
            .iter()
            .map(|(path, node)| match node {
                Node::Dir => (path.clone(), None),
                Node::File(contents) => (path.clone(), Some(contents.clone())),
            })
            .collect()
    }
}

impl Filesystem for MemoryFs {
    fn exists(&self, path: &Path) -> bool {
        self.nodes.borrow().contains_key(path)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        let mut nodes = self.nodes.borrow_mut();
        for dir in ancestors_top_down(path) {
            match nodes.get(&dir) {
                Some(Node::Dir) => {}
                Some(Node::File(_)) => {
                    return Err(io::Error::new(
                        io::ErrorKind::AlreadyExists,
                        format!("{} is a file", dir.display()),
                    ));
                }
                None => {
                    nodes.insert(dir, Node::Dir);
                }
            }
        }
        Ok(())
    }

    fn create_new(&self, path: &Path, contents: &str) -> io::Result<()> {
        let mut nodes = self.nodes.borrow_mut();
        if nodes.contains_key(path) {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{} already exists", path.display()),
            ));
        }
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if nodes.get(parent) != Some(&Node::Dir) {
                return Err(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("parent directory {} does not exist", parent.display()),
                ));
            }
        }
        nodes.insert(path.to_path_buf(), Node::File(contents.to_string()));
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        match self.nodes.borrow().get(path) {
            Some(Node::File(contents)) => Ok(contents.clone()),
            Some(Node::Dir) => Err(io::Error::other(format!(
                "{} is a directory",
                path.display()
            ))),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} not found", path.display()),
            )),
        }
    }
}

/// Non-empty ancestors of `path`, outermost first, `path` itself last
fn ancestors_top_down(path: &Path) -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = path
        .ancestors()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .collect();
    dirs.reverse();
    dirs
}
