//! Implementation of `gs1id check-digit <PAYLOAD>`.
//!
//! Prints the GS1 modulo-10 check digit for a numeric payload and the
//! completed key.  Exit code 2 for an empty or non-numeric payload.
use std::io::Write;

use gs1id_core::gs1_check_digit;

use crate::error::CliError;
use crate::format::{FormatterConfig, write_check_digit};

/// Runs the `check-digit` command.
///
/// # Errors
///
/// Returns [`CliError::InvalidRequest`] if `payload` is empty or contains
/// anything other than digits 0-9.
pub fn run<W: Write>(out: &mut W, payload: &str, config: &FormatterConfig) -> Result<(), CliError> {
    let check_digit = gs1_check_digit(payload).ok_or_else(|| CliError::InvalidRequest {
        detail: format!("payload {payload:?} must be one or more digits 0-9"),
    })?;
    tracing::debug!(payload_len = payload.len(), check_digit, "computed check digit");
    write_check_digit(out, payload, check_digit, config).map_err(|e| CliError::stdout(&e))
}
