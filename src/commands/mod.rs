//! The expansion command.
//!
//! Reads the input template, expands it and writes the result atomically.
//! An expansion error aborts before the output file is touched.

use crate::cli::Cli;
use crate::config::Config;
use crate::error::{MetagenError, Result};
use crate::expand::{DirectiveRegistry, Expander, Invocation, Limit};
use crate::fs::atomic_write_file;
use crate::source::read_source;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info};

/// What a successful run did.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub limit: Option<u8>,
    pub lines_written: usize,
    pub directives: Vec<Invocation>,
}

impl RunSummary {
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| MetagenError::UserError(format!("failed to serialize summary: {}", e)))
    }
}

/// Execute a run for the parsed command line.
pub fn run(cli: &Cli) -> Result<RunSummary> {
    let config = match &cli.config {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            Config::load(path)?
        }
        None => Config::default(),
    };

    let limit = config.resolve_limit(cli.limit)?;
    expand_file(cli, &config, limit)
}

fn expand_file(cli: &Cli, config: &Config, limit: Option<Limit>) -> Result<RunSummary> {
    let source = read_source(&cli.input, config.strip_trailing_whitespace)?;
    debug!(
        input = %cli.input.display(),
        bytes = source.len(),
        "read template source"
    );

    let registry = DirectiveRegistry::builtin();
    debug!(
        directives = ?registry.names().collect::<Vec<_>>(),
        limit = ?limit.map(Limit::get),
        "expanding"
    );

    let expander = Expander::new(registry, limit);
    let expansion = expander.expand(&source)?;

    for invocation in &expansion.invocations {
        debug!(
            directive = invocation.name,
            line = invocation.line,
            lines = invocation.lines_written,
            "expanded directive"
        );
    }

    atomic_write_file(&cli.output, &expansion.output)?;

    let lines_written = expansion.output.lines().count();
    info!(
        output = %cli.output.display(),
        lines = lines_written,
        directives = expansion.invocations.len(),
        "wrote expanded output"
    );

    Ok(RunSummary {
        input: cli.input.clone(),
        output: cli.output.clone(),
        limit: expander.limit().map(Limit::get),
        lines_written,
        directives: expansion.invocations,
    })
}
