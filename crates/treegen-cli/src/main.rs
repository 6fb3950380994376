//! treegen CLI - scaffold folders and stub files from a tree diagram
//!
//! `treegen <tree_file> <base_name> <root_directory>`

mod logging;

use anyhow::Context;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing::debug;
use treegen_core::{parse_tree_file, RealFs, StructureBuilder};

const USAGE: &str = "Usage: treegen <tree_file> <base_name> <root_directory>";

#[derive(Parser, Debug)]
#[command(name = "treegen")]
#[command(about = "treegen - create folders and stub files from a tree diagram")]
#[command(disable_help_flag = true, disable_version_flag = true)]
#[command(allow_hyphen_values = true)]
struct Cli {
    /// Text file containing the tree diagram
    tree_file: PathBuf,

    /// Prefix for every generated stub file name
    base_name: String,

    /// Directory the folders are created in
    root_directory: PathBuf,
}

fn main() {
    logging::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            debug!(kind = ?e.kind(), "Rejected arguments");
            println!("{USAGE}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let folders = parse_tree_file(&cli.tree_file)?;
    debug!(count = folders.len(), "Folders to create");

    let builder = StructureBuilder::new(RealFs);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    builder
        .build(&cli.base_name, &folders, &cli.root_directory, &mut out)
        .with_context(|| {
            format!(
                "Structure build under {} stopped",
                cli.root_directory.display()
            )
        })?;

    Ok(())
}
