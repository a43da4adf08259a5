//! Expansion driver.
//!
//! The driver consumes the source strictly left to right. Each step writes
//! the text before the next marker, runs the directive the marker names and
//! drops everything up to and including the closing token. When no opening
//! token is left, the rest of the source is written as is.

use super::directive::{DirectiveRegistry, Limit};
use super::error::{ExpandError, MalformedReason};
use super::scanner::{CLOSE_TOKEN, MarkerScan, OPEN_TOKEN, find_next_marker};
use super::sink::OutputSink;
use serde::Serialize;

/// One executed directive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Invocation {
    /// Directive name as written in the marker.
    pub name: &'static str,
    /// 1-based source line of the opening token.
    pub line: usize,
    /// Lines the directive wrote.
    pub lines_written: usize,
}

/// Output of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expansion {
    pub output: String,
    pub invocations: Vec<Invocation>,
}

/// Expands markers in a source text using a fixed registry and limit.
#[derive(Debug, Clone)]
pub struct Expander {
    registry: DirectiveRegistry,
    limit: Option<Limit>,
}

impl Expander {
    pub fn new(registry: DirectiveRegistry, limit: Option<Limit>) -> Self {
        Self { registry, limit }
    }

    pub fn limit(&self) -> Option<Limit> {
        self.limit
    }

    /// Expand every marker in `source`.
    ///
    /// On error nothing is returned; partial output is never exposed.
    pub fn expand(&self, source: &str) -> Result<Expansion, ExpandError> {
        let mut sink = OutputSink::new();
        let mut invocations = Vec::new();
        let mut rest = source;
        // Lines consumed before `rest`, for error positions.
        let mut line_base = 1;

        while let Some(scan) = find_next_marker(rest) {
            let line = line_base + count_lines(&rest[..scan.open()]);

            let (open, close) = match scan {
                MarkerScan::Span { open, close } => (open, close),
                MarkerScan::Unterminated { .. } => {
                    return Err(ExpandError::MalformedInput {
                        line,
                        reason: MalformedReason::Unterminated,
                    });
                }
                MarkerScan::StrayClose { close, .. } => {
                    return Err(ExpandError::MalformedInput {
                        line: line_base + count_lines(&rest[..close]),
                        reason: MalformedReason::CloseBeforeOpen,
                    });
                }
            };

            sink.write_line(&rest[..open]);

            let name = &rest[open + OPEN_TOKEN.len()..close];
            let directive = self
                .registry
                .resolve(name)
                .ok_or_else(|| ExpandError::UnknownDirective {
                    name: name.to_string(),
                    line,
                })?;

            let before = sink.writes();
            directive.run(self.limit, &mut sink)?;
            invocations.push(Invocation {
                name: directive.name(),
                line,
                lines_written: sink.writes() - before,
            });

            let consumed = close + CLOSE_TOKEN.len();
            line_base += count_lines(&rest[..consumed]);
            rest = &rest[consumed..];
        }

        sink.write_line(rest);

        Ok(Expansion {
            output: sink.into_string(),
            invocations,
        })
    }
}

fn count_lines(text: &str) -> usize {
    text.bytes().filter(|&b| b == b'\n').count()
}
