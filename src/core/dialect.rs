//! Language dialect configuration.
//!
//! The comment marker, trigger keyword, and recognized file extension are
//! carried in a single `Dialect` value passed through the pipeline, keeping
//! the grammar rule in one place instead of scattered literals.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Comment marker: a line whose first character is this is dropped whole.
pub const COMMENT_MARKER: char = '#';

/// Trigger keyword: marks a line as carrying an executable payload when
/// immediately followed by a colon.
pub const TRIGGER: &str = "in_ra_màn_hình";

/// Recognized script file extension (without the leading dot).
pub const EXTENSION: &str = "vipl";

/// The fixed tokens of a ViPL-style language.
///
/// # Examples
///
/// ```
/// use vipl_rs::core::Dialect;
///
/// let dialect = Dialect::default();
/// assert!(dialect.is_comment("# note"));
/// assert!(!dialect.is_comment("in_ra_màn_hình:1"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dialect {
    /// Leading character that marks an entire line as ignorable.
    pub comment_marker: char,

    /// Literal keyword that introduces a statement payload.
    pub trigger: String,

    /// File extension required for file-mode invocation.
    pub extension: String,
}

impl Default for Dialect {
    fn default() -> Self {
        Self {
            comment_marker: COMMENT_MARKER,
            trigger: TRIGGER.to_string(),
            extension: EXTENSION.to_string(),
        }
    }
}

impl Dialect {
    /// Returns true if the line is a comment.
    ///
    /// Only the first character counts; there is no inline comment form.
    #[must_use]
    pub fn is_comment(&self, line: &str) -> bool {
        line.starts_with(self.comment_marker)
    }

    /// Returns true if the path carries the recognized extension.
    #[must_use]
    pub fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .is_some_and(|ext| ext == self.extension.as_str())
    }

    /// Regex source matching the trigger keyword plus colon, capturing the
    /// payload up to end of line.
    #[must_use]
    pub fn statement_pattern(&self) -> String {
        format!("{}:(.*)", regex::escape(&self.trigger))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_dialect() {
        let dialect = Dialect::default();
        assert_eq!(dialect.comment_marker, '#');
        assert_eq!(dialect.trigger, "in_ra_màn_hình");
        assert_eq!(dialect.extension, "vipl");
    }

    #[test]
    fn test_is_comment() {
        let dialect = Dialect::default();
        assert!(dialect.is_comment("# a comment"));
        assert!(dialect.is_comment("#no space"));
        assert!(!dialect.is_comment(" # not first character"));
        assert!(!dialect.is_comment(""));
        assert!(!dialect.is_comment("code # trailing"));
    }

    #[test]
    fn test_matches_extension() {
        let dialect = Dialect::default();
        assert!(dialect.matches_extension(&PathBuf::from("hello.vipl")));
        assert!(dialect.matches_extension(&PathBuf::from("dir/nested.vipl")));
        assert!(!dialect.matches_extension(&PathBuf::from("hello.txt")));
        assert!(!dialect.matches_extension(&PathBuf::from("hello")));
        // Extension matching is case-sensitive.
        assert!(!dialect.matches_extension(&PathBuf::from("hello.VIPL")));
    }

    #[test]
    fn test_statement_pattern_escapes_trigger() {
        let dialect = Dialect {
            comment_marker: ';',
            trigger: "print.now".to_string(),
            extension: "toy".to_string(),
        };
        let re = regex::Regex::new(&dialect.statement_pattern()).unwrap();
        assert!(re.is_match("print.now:1"));
        // The dot is a literal, not a wildcard.
        assert!(!re.is_match("printXnow:1"));
    }

    #[test]
    fn test_pattern_captures_to_end_of_line() {
        let dialect = Dialect::default();
        let re = regex::Regex::new(&dialect.statement_pattern()).unwrap();
        let caps: Vec<_> = re
            .captures_iter("in_ra_màn_hình:1+1\nin_ra_màn_hình:\"hi\"")
            .map(|c| c[1].to_string())
            .collect();
        assert_eq!(caps, vec!["1+1", "\"hi\""]);
    }
}
