//! Implementation of `gs1id types`: the rule table, one row per type.
use std::io::Write;

use gs1id_core::{IdentifierType, ValidationConfig, rule_set};

use crate::error::CliError;
use crate::format::{FormatterConfig, write_rule_row};

/// Runs the `types` command.
///
/// # Errors
///
/// Returns [`CliError::IoError`] only if writing to `out` fails.
pub fn run<W: Write>(out: &mut W, extended: bool, config: &FormatterConfig) -> Result<(), CliError> {
    let validation = ValidationConfig {
        run_extended: extended,
    };
    for identifier_type in IdentifierType::ALL {
        let rules = rule_set(identifier_type, &validation);
        write_rule_row(out, identifier_type, &rules, config).map_err(|e| CliError::stdout(&e))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;
    use crate::format::FormatMode;

    fn render(extended: bool) -> String {
        let config = FormatterConfig {
            mode: FormatMode::Human,
            colors: false,
            quiet: false,
        };
        let mut out = Vec::new();
        run(&mut out, extended, &config).expect("write to Vec");
        String::from_utf8(out).expect("utf-8")
    }

    #[test]
    fn one_row_per_type() {
        let text = render(false);
        assert_eq!(text.lines().count(), IdentifierType::ALL.len());
        for code in IdentifierType::codes() {
            assert!(
                text.lines().any(|l| l.starts_with(code)),
                "missing {code}: {text}"
            );
        }
    }

    #[test]
    fn extended_adds_gsrn_check_digit() {
        assert!(!render(false).contains("GSRN Check Digit"));
        assert!(render(true).contains("GSRN Check Digit"));
    }
}
