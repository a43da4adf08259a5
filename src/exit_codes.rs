//! Exit code constants for the metagen CLI.
//!
//! - 0: Success
//! - 1: User error (unreadable input, unwritable output, bad config)
//! - 2: Template error (malformed marker or unknown directive)
//! - 3: Missing member-count limit

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: I/O failure or invalid configuration.
pub const USER_ERROR: i32 = 1;

/// Template error: malformed marker or unknown directive in the input.
pub const TEMPLATE_ERROR: i32 = 2;

/// A directive needed the member-count limit but none was given.
pub const MISSING_PARAMETER: i32 = 3;
