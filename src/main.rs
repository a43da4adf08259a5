//! Metagen: source-to-source expander for generated C++ boilerplate.
//!
//! This is the main entry point for the `metagen` CLI. It parses arguments,
//! runs the expansion, and handles errors with proper exit codes.

mod cli;
mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod expand;
pub mod fs;
pub mod source;

use cli::Cli;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    // --verbose enables DEBUG, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match commands::run(&cli) {
        Ok(summary) => {
            if cli.summary {
                match summary.to_json() {
                    Ok(json) => println!("{}", json),
                    Err(err) => {
                        eprintln!("Error: {}", err);
                        return ExitCode::from(err.exit_code() as u8);
                    }
                }
            }
            ExitCode::from(exit_codes::SUCCESS as u8)
        }
        Err(err) => {
            // Any output from this run has already been discarded
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
