//! Implementation of `gs1id batch <FILE>`.
//!
//! Reads a JSON array or NDJSON stream of requests from a file or stdin,
//! prints one outcome per entry to stdout, then a summary line to stderr.
//!
//! Exit codes:
//! - 0 = every identifier valid
//! - 1 = at least one identifier invalid
//! - 2 = the input could not be read or parsed, or an entry broke the input
//!   contract (takes precedence over 1)
use std::io::Write;

use gs1id_core::{ValidationConfig, parse_requests, validate_identifier_with_config};

use crate::error::CliError;
use crate::format::{BatchSummary, FormatterConfig, write_outcome, write_rejection, write_summary};

/// Runs the `batch` command over already-read `content`.
///
/// `source` labels the input in error messages (`"-"` for stdin).  Outcomes
/// go to `out`; the summary goes to `summary_out`.
///
/// # Errors
///
/// - [`CliError::ParseFailed`]: `content` is not a request batch.
/// - [`CliError::InvalidRequest`]: one or more entries broke the input contract.
/// - [`CliError::IdentifiersInvalid`]: one or more identifiers are invalid.
pub fn run<W: Write, E: Write>(
    out: &mut W,
    summary_out: &mut E,
    content: &str,
    source: &str,
    extended: bool,
    config: &FormatterConfig,
) -> Result<(), CliError> {
    let entries = parse_requests(content).map_err(|e| CliError::ParseFailed {
        source: source.to_owned(),
        detail: e.to_string(),
    })?;
    tracing::info!(source, entries = entries.len(), extended, "validating batch");

    let validation = ValidationConfig {
        run_extended: extended,
    };
    let mut summary = BatchSummary::default();

    for (idx, entry) in entries.iter().enumerate() {
        match entry {
            Ok(request) => {
                let outcome = validate_identifier_with_config(request, &validation);
                tracing::debug!(
                    entry = idx + 1,
                    identifier_type = %outcome.identifier_type,
                    valid = outcome.is_valid,
                    "validated identifier"
                );
                if outcome.is_valid {
                    summary.valid += 1;
                } else {
                    summary.invalid += 1;
                }
                write_outcome(out, &outcome, config).map_err(|e| CliError::stdout(&e))?;
            }
            Err(err) => {
                tracing::warn!(entry = idx + 1, %err, "rejected batch entry");
                summary.rejected += 1;
                write_rejection(out, idx + 1, err, config).map_err(|e| CliError::stdout(&e))?;
            }
        }
    }

    write_summary(summary_out, &summary, config).map_err(|e| CliError::IoError {
        source: "stderr".to_owned(),
        detail: e.to_string(),
    })?;
    tracing::info!(
        valid = summary.valid,
        invalid = summary.invalid,
        rejected = summary.rejected,
        "batch complete"
    );

    if summary.rejected > 0 {
        Err(CliError::InvalidRequest {
            detail: format!(
                "{} of {} entries broke the input contract",
                summary.rejected,
                summary.total()
            ),
        })
    } else if summary.invalid > 0 {
        Err(CliError::IdentifiersInvalid {
            invalid: summary.invalid,
            total: summary.evaluated(),
        })
    } else {
        Ok(())
    }
}
