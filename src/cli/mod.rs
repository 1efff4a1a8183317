pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "epubfix",
    version,
    about = "Generate and check the sample EPUB test fixture"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write the sample EPUB fixture
    Generate {
        /// Output EPUB file path
        #[arg(short, long, default_value = "sample.epub")]
        output: PathBuf,
    },
    /// List the entries of the built-in fixture
    List,
    /// Print one fixture entry to stdout
    Show {
        /// Entry name, e.g. content.opf or META-INF/container.xml
        entry: String,
    },
    /// Check an EPUB file against the built-in fixture
    Verify {
        /// Path to the EPUB file
        file: PathBuf,
    },
}
