//! CLI argument parsing for metagen.
//!
//! Uses clap derive macros for declarative argument definitions.
//! The run itself lives in the `commands` module.

use clap::Parser;
use std::path::PathBuf;

/// Metagen: expand `(@directive@)` markers in a C++ source template.
///
/// Supported directives:
/// - `(@limit@)` writes the member-count limit
/// - `(@generate_specializations@)` writes one tuple-view branch per arity
#[derive(Parser, Debug)]
#[command(name = "metagen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input file name.
    pub input: PathBuf,

    /// Output file name.
    pub output: PathBuf,

    /// Maximum number of non-static data members in types [1-255].
    #[arg(value_parser = clap::value_parser!(u8).range(1..=255))]
    pub limit: Option<u8>,

    /// YAML config file with defaults for the run.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print a JSON summary of the run to stdout.
    #[arg(long)]
    pub summary: bool,

    /// Log debug diagnostics to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
