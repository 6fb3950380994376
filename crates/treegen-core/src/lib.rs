//! treegen core - tree-diagram parsing and folder/stub generation
//!
//! This crate turns a box-drawing tree diagram into a flat list of folder
//! names and materialises those folders, each with one generated stub file.

#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]

pub mod builder;
pub mod error;
pub mod folder;
pub mod fs;
pub mod parser;
pub mod stub;

pub use builder::{build, BuildReport, StructureBuilder, StubOutcome};
pub use error::{CoreError, CoreResult};
pub use folder::FolderName;
pub use fs::{Filesystem, MemoryFs, RealFs};
pub use parser::{parse_line, parse_tree, parse_tree_file, parse_tree_file_with};
pub use stub::StubTemplate;
