//! Batch request parsing.
//!
//! A batch is either a JSON array of request objects or an NDJSON stream with
//! one request object per line.  The format is chosen by the first
//! non-whitespace character: `[` selects the array form, anything else NDJSON.
//! Blank NDJSON lines are skipped.
//!
//! A document that is not well-formed (bad JSON, missing fields) is rejected as
//! a whole with [`BatchParseError`].  A well-formed entry that breaks the input
//! contract (empty value, unknown type) is reported per entry so the rest of
//! the batch can still be validated.

use std::fmt;

use crate::types::{RawRequest, RequestError, ValidationRequest};

/// One parsed batch entry: a request, or the contract violation it carried.
pub type BatchEntry = Result<ValidationRequest, RequestError>;

/// A batch document that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchParseError {
    /// 1-based NDJSON line number, `None` for the JSON array form.
    pub line: Option<usize>,
    /// Description from the JSON parser.
    pub message: String,
}

impl fmt::Display for BatchParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "line {line}: {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

impl std::error::Error for BatchParseError {}

/// Parses a batch document into per-entry requests, in input order.
///
/// # Errors
///
/// Returns [`BatchParseError`] if the document is not a JSON array of request
/// objects or a sequence of NDJSON request objects.
///
/// ```
/// use gs1id_core::batch::parse_requests;
///
/// let entries = parse_requests(
///     "{\"identifier_value\":\"ABC-123\",\"identifier_type\":\"OTHER\"}\n\
///      {\"identifier_value\":\"\",\"identifier_type\":\"GTIN\"}\n",
/// )
/// .unwrap_or_default();
/// assert_eq!(entries.len(), 2);
/// assert!(entries[0].is_ok());
/// assert!(entries[1].is_err());
/// ```
pub fn parse_requests(content: &str) -> Result<Vec<BatchEntry>, BatchParseError> {
    if content.trim_start().starts_with('[') {
        parse_array(content)
    } else {
        parse_ndjson(content)
    }
}

fn parse_array(content: &str) -> Result<Vec<BatchEntry>, BatchParseError> {
    let raw: Vec<RawRequest> = serde_json::from_str(content).map_err(|e| BatchParseError {
        line: None,
        message: e.to_string(),
    })?;
    Ok(raw.into_iter().map(RawRequest::into_request).collect())
}

fn parse_ndjson(content: &str) -> Result<Vec<BatchEntry>, BatchParseError> {
    let mut entries = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let raw: RawRequest = serde_json::from_str(line).map_err(|e| BatchParseError {
            line: Some(idx + 1),
            message: e.to_string(),
        })?;
        entries.push(raw.into_request());
    }
    Ok(entries)
}
