//! Script reading with invocation checks.
//!
//! File-mode input acquisition: validate the path, read the whole script,
//! and hand the pipeline a sequence of trimmed lines.

use crate::core::Dialect;
use crate::error::{IoError, Result};
use std::fs;
use std::path::Path;

/// Reads a script file as trimmed lines.
///
/// The extension is checked before existence: a path without the
/// recognized extension is rejected whether or not it exists, and only
/// then is a missing file reported as such. Both are invocation errors
/// that the caller turns into an exit with status 1.
///
/// # Errors
///
/// [`IoError::WrongExtension`], [`IoError::FileNotFound`], or
/// [`IoError::ReadFailed`].
pub fn read_script<P: AsRef<Path>>(path: P, dialect: &Dialect) -> Result<Vec<String>> {
    let path_ref = path.as_ref();
    let path_str = path_ref.to_string_lossy().to_string();

    if !dialect.matches_extension(path_ref) {
        return Err(IoError::WrongExtension { path: path_str }.into());
    }

    if !path_ref.is_file() {
        return Err(IoError::FileNotFound { path: path_str }.into());
    }

    let content = fs::read_to_string(path_ref).map_err(|e| IoError::ReadFailed {
        path: path_str,
        reason: e.to_string(),
    })?;

    Ok(trimmed_lines(&content))
}

/// Splits source text into lines with surrounding whitespace removed.
///
/// Trimming happens at acquisition; the comment filter downstream does no
/// further transformation.
#[must_use]
pub fn trimmed_lines(content: &str) -> Vec<String> {
    content.lines().map(|line| line.trim().to_string()).collect()
}
