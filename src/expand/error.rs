//! Errors raised while expanding a template.

use thiserror::Error;

/// An expansion failure. Any output produced before the error is invalid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpandError {
    /// Marker tokens are out of order or a marker is never closed.
    #[error("malformed input at line {line}: {reason}")]
    MalformedInput { line: usize, reason: MalformedReason },

    /// The marker names a directive that is not registered.
    #[error("unknown directive '{name}' at line {line}")]
    UnknownDirective { name: String, line: usize },

    /// A directive needs the member-count limit but none was supplied.
    #[error("directive '{directive}' requires a member-count limit, but none was given")]
    MissingParameter { directive: &'static str },
}

/// Why a marker was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    /// `(@` with no `@)` after it.
    Unterminated,
    /// `@)` appearing before the next `(@`.
    CloseBeforeOpen,
}

impl std::fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MalformedReason::Unterminated => write!(f, "'(@' is never closed by '@)'"),
            MalformedReason::CloseBeforeOpen => write!(f, "'@)' appears before '(@'"),
        }
    }
}
