//! Comment filtering and statement extraction.
//!
//! The first two stages of the pipeline after input acquisition: drop
//! comment lines, rejoin what remains into a single blob, then capture
//! every trigger-keyword payload out of the blob in order of appearance.

use crate::core::{Dialect, Statement};
use crate::error::Result;
use regex::Regex;

/// Drops comment lines and rejoins the remainder into one blob.
///
/// A line is a comment when its first character is the dialect's comment
/// marker; it is dropped whole. Kept lines are not otherwise transformed.
///
/// # Examples
///
/// ```
/// use vipl_rs::core::Dialect;
/// use vipl_rs::scan::strip_comments;
///
/// let lines = vec!["# header".to_string(), "kept".to_string()];
/// assert_eq!(strip_comments(&lines, &Dialect::default()), "kept");
/// ```
#[must_use]
pub fn strip_comments(lines: &[String], dialect: &Dialect) -> String {
    let kept: Vec<&str> = lines
        .iter()
        .map(String::as_str)
        .filter(|&line| !dialect.is_comment(line))
        .collect();
    kept.join("\n")
}

/// Captures statement payloads out of a filtered source blob.
///
/// The pattern is built once per dialect; extraction itself cannot fail.
#[derive(Debug)]
pub struct Extractor {
    pattern: Regex,
}

impl Extractor {
    /// Compiles the statement pattern for a dialect.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern fails to compile. The trigger
    /// keyword is escaped, so this only happens for pathological dialects.
    pub fn new(dialect: &Dialect) -> Result<Self> {
        let pattern = Regex::new(&dialect.statement_pattern())?;
        Ok(Self { pattern })
    }

    /// Returns every payload in the blob, in order of appearance.
    ///
    /// Each occurrence of the trigger keyword followed by a colon captures
    /// the rest of its line. Lines without the trigger are ignored.
    #[must_use]
    pub fn extract(&self, blob: &str) -> Vec<Statement> {
        self.pattern
            .captures_iter(blob)
            .enumerate()
            .map(|(index, caps)| Statement::new(caps[1].to_string(), index))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> Extractor {
        Extractor::new(&Dialect::default()).unwrap()
    }

    fn lines(src: &[&str]) -> Vec<String> {
        src.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_strip_comments_drops_whole_lines() {
        let src = lines(&["# one", "keep", "#two", "also keep"]);
        assert_eq!(
            strip_comments(&src, &Dialect::default()),
            "keep\nalso keep"
        );
    }

    #[test]
    fn test_strip_comments_is_first_character_only() {
        let src = lines(&["code # not a comment line"]);
        assert_eq!(
            strip_comments(&src, &Dialect::default()),
            "code # not a comment line"
        );
    }

    #[test]
    fn test_strip_comments_empty_input() {
        assert_eq!(strip_comments(&[], &Dialect::default()), "");
    }

    #[test]
    fn test_extract_single_statement() {
        let stmts = extractor().extract("in_ra_màn_hình:2+2");
        assert_eq!(stmts.len(), 1);
        assert_eq!(stmts[0].payload, "2+2");
        assert_eq!(stmts[0].index, 0);
    }

    #[test]
    fn test_extract_preserves_order() {
        let blob = "in_ra_màn_hình:\"a\"\nnoise\nin_ra_màn_hình:1\nin_ra_màn_hình:2";
        let stmts = extractor().extract(blob);
        let payloads: Vec<&str> = stmts.iter().map(|s| s.payload.as_str()).collect();
        assert_eq!(payloads, vec!["\"a\"", "1", "2"]);
    }

    #[test]
    fn test_extract_ignores_plain_lines() {
        let stmts = extractor().extract("nothing here\nstill nothing");
        assert!(stmts.is_empty());
    }

    #[test]
    fn test_extract_stops_at_end_of_line() {
        let stmts = extractor().extract("in_ra_màn_hình:first\nsecond line");
        assert_eq!(stmts.len(), 1);
        assert_eq!(stmts[0].payload, "first");
    }

    #[test]
    fn test_commented_trigger_never_reaches_extraction() {
        let dialect = Dialect::default();
        let src = lines(&["# in_ra_màn_hình:\"hidden\"", "in_ra_màn_hình:\"shown\""]);
        let blob = strip_comments(&src, &dialect);
        let stmts = extractor().extract(&blob);
        assert_eq!(stmts.len(), 1);
        assert_eq!(stmts[0].payload, "\"shown\"");
    }

    #[test]
    fn test_extract_empty_payload() {
        let stmts = extractor().extract("in_ra_màn_hình:");
        assert_eq!(stmts.len(), 1);
        assert_eq!(stmts[0].payload, "");
    }
}
