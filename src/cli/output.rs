//! Output formatting for CLI runs.
//!
//! Supports text and JSON output formats.

use crate::core::{Outcome, OutcomeKind};
use crate::error::Error;
use serde::Serialize;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output.
    Json,
}

impl OutputFormat {
    /// Parses format from string.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// One statement's record in JSON output.
#[derive(Serialize)]
struct OutcomeRecord<'a> {
    /// Payload as captured from the source.
    payload: &'a str,
    /// Line contributed to standard output, if any.
    output: Option<String>,
    /// Evaluation error message, if any.
    error: Option<String>,
}

impl<'a> From<&'a Outcome> for OutcomeRecord<'a> {
    fn from(outcome: &'a Outcome) -> Self {
        let error = match &outcome.kind {
            OutcomeKind::Printed(_) => None,
            OutcomeKind::Invalid(err) | OutcomeKind::Failed(err) => Some(err.to_string()),
        };
        Self {
            payload: &outcome.payload,
            output: outcome.stdout_line(),
            error,
        }
    }
}

/// Formats a file-mode run for standard output.
///
/// Text format is the printed lines themselves, one per statement outcome
/// that produces one. JSON format is an array of per-statement records.
#[must_use]
pub fn format_run(outcomes: &[Outcome], format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            let lines: Vec<String> = outcomes.iter().filter_map(Outcome::stdout_line).collect();
            if lines.is_empty() {
                String::new()
            } else {
                format!("{}\n", lines.join("\n"))
            }
        }
        OutputFormat::Json => {
            let records: Vec<OutcomeRecord<'_>> = outcomes.iter().map(Into::into).collect();
            format_json(&records)
        }
    }
}

/// Formats a top-level error.
#[must_use]
pub fn format_error(error: &Error, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => error.to_string(),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct ErrorRecord {
                error: String,
            }
            format_json(&ErrorRecord {
                error: error.to_string(),
            })
        }
    }
}

fn format_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value)
        .map_or_else(|e| format!("{{\"error\": \"{e}\"}}"), |s| format!("{s}\n"))
}
