//! Error types for the metagen CLI.
//!
//! Uses thiserror for derive macros and maps every error to an exit code.

use crate::exit_codes;
use crate::expand::ExpandError;
use thiserror::Error;

/// Main error type for metagen operations.
#[derive(Error, Debug)]
pub enum MetagenError {
    /// The template could not be expanded.
    #[error(transparent)]
    Expand(#[from] ExpandError),

    /// Bad arguments or an I/O failure on the input or output file.
    #[error("{0}")]
    UserError(String),

    /// The config file could not be read, parsed or validated.
    #[error("Config error: {0}")]
    ConfigError(String),
}

impl MetagenError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            MetagenError::Expand(ExpandError::MissingParameter { .. }) => {
                exit_codes::MISSING_PARAMETER
            }
            MetagenError::Expand(_) => exit_codes::TEMPLATE_ERROR,
            MetagenError::UserError(_) => exit_codes::USER_ERROR,
            MetagenError::ConfigError(_) => exit_codes::USER_ERROR,
        }
    }
}

/// Result type alias for metagen operations.
pub type Result<T> = std::result::Result<T, MetagenError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expand::MalformedReason;

    #[test]
    fn malformed_input_has_template_exit_code() {
        let err: MetagenError = ExpandError::MalformedInput {
            line: 1,
            reason: MalformedReason::CloseBeforeOpen,
        }
        .into();
        assert_eq!(err.exit_code(), exit_codes::TEMPLATE_ERROR);
    }

    #[test]
    fn unknown_directive_has_template_exit_code() {
        let err: MetagenError = ExpandError::UnknownDirective {
            name: "frobnicate".to_string(),
            line: 4,
        }
        .into();
        assert_eq!(err.exit_code(), exit_codes::TEMPLATE_ERROR);
    }

    #[test]
    fn missing_parameter_has_its_own_exit_code() {
        let err: MetagenError = ExpandError::MissingParameter { directive: "limit" }.into();
        assert_eq!(err.exit_code(), exit_codes::MISSING_PARAMETER);
    }

    #[test]
    fn user_and_config_errors_are_user_errors() {
        let err = MetagenError::UserError("bad path".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);

        let err = MetagenError::ConfigError("limit must be at least 1".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err: MetagenError = ExpandError::UnknownDirective {
            name: "frobnicate".to_string(),
            line: 2,
        }
        .into();
        assert_eq!(err.to_string(), "unknown directive 'frobnicate' at line 2");

        let err = MetagenError::ConfigError("limit must be at least 1".to_string());
        assert_eq!(err.to_string(), "Config error: limit must be at least 1");
    }
}
