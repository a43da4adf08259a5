//! Config struct definition and default implementation.

use serde::{Deserialize, Serialize};

/// Settings read from a metagen config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Member-count limit used when none is given on the command line.
    pub limit: Option<u32>,

    /// Strip trailing whitespace from input lines before expansion.
    #[serde(default = "default_true")]
    pub strip_trailing_whitespace: bool,
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            limit: None,
            strip_trailing_whitespace: true,
        }
    }
}
