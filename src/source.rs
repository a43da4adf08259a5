//! Reading and normalizing template sources.

use crate::error::{MetagenError, Result};
use std::path::Path;

/// Strip trailing whitespace from every line and rejoin with `\n`.
///
/// A final line terminator is not kept, so `"a \nb\n"` becomes `"a\nb"`.
/// Carriage returns are treated as trailing whitespace.
pub fn normalize(raw: &str) -> String {
    raw.lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Read a template file, optionally normalizing it.
pub fn read_source<P: AsRef<Path>>(path: P, strip_trailing_whitespace: bool) -> Result<String> {
    let path = path.as_ref();

    let raw = std::fs::read_to_string(path).map_err(|e| {
        MetagenError::UserError(format!(
            "failed to read input file '{}': {}",
            path.display(),
            e
        ))
    })?;

    if strip_trailing_whitespace {
        Ok(normalize(&raw))
    } else {
        Ok(raw)
    }
}
