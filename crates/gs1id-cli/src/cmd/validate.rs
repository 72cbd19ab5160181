//! Implementation of `gs1id validate <VALUE> --type <TYPE>`.
//!
//! Exit codes:
//! - 0 = valid
//! - 1 = invalid (at least one rule failed)
//! - 2 = the request broke the input contract (empty value, unknown type)
use std::io::Write;

use gs1id_core::{ValidationConfig, validate};

use crate::error::CliError;
use crate::format::{FormatterConfig, write_outcome};

/// Runs the `validate` command, writing the outcome to `out`.
///
/// # Errors
///
/// - [`CliError::InvalidRequest`]: empty value or unrecognised type.
/// - [`CliError::IdentifiersInvalid`]: the identifier failed a rule.
pub fn run<W: Write>(
    out: &mut W,
    value: &str,
    identifier_type: &str,
    extended: bool,
    config: &FormatterConfig,
) -> Result<(), CliError> {
    let validation = ValidationConfig {
        run_extended: extended,
    };
    let outcome = validate(value, identifier_type, &validation)?;
    tracing::debug!(
        identifier_type = %outcome.identifier_type,
        valid = outcome.is_valid,
        checks = outcome.details.len(),
        "validated identifier"
    );

    write_outcome(out, &outcome, config).map_err(|e| CliError::stdout(&e))?;

    if outcome.is_valid {
        Ok(())
    } else {
        Err(CliError::IdentifiersInvalid {
            invalid: 1,
            total: 1,
        })
    }
}
