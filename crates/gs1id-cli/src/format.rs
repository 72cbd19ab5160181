/// Outcome formatting: human-readable and JSON (NDJSON) modes.
///
/// This module is the presentation boundary for [`ValidationOutcome`]: the
/// structured [`gs1id_core::CheckResult`] records are turned into text here and
/// nowhere else.
///
/// - **Human mode** (default): a status line per identifier followed by one
///   indented line per rule, `Length Check (13): Failed (actual length: 14).`
///   Colors are disabled when `--no-color` is set, the `NO_COLOR` environment
///   variable is present (per <https://no-color.org>), or stdout is not a TTY.
/// - **JSON mode**: each outcome is serialized as a single-line JSON object.
///
/// Quiet mode reduces human output to the status line and suppresses the batch
/// summary.  Results go to stdout; the batch summary goes to stderr.
use std::io::{IsTerminal as _, Write};

use gs1id_core::{IdentifierType, RequestError, Rule, RuleStatus, ValidationOutcome};
use serde_json::json;

use crate::OutputFormat;

// ---------------------------------------------------------------------------
// Color support detection
// ---------------------------------------------------------------------------

/// Returns `true` if ANSI color codes should be emitted to stdout.
pub fn colors_enabled(no_color_flag: bool) -> bool {
    if no_color_flag {
        return false;
    }
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    std::io::stdout().is_terminal()
}

const ANSI_RED: &str = "\x1b[31m";
const ANSI_GREEN: &str = "\x1b[32m";
const ANSI_YELLOW: &str = "\x1b[33m";
const ANSI_RESET: &str = "\x1b[0m";

// ---------------------------------------------------------------------------
// FormatterConfig
// ---------------------------------------------------------------------------

/// Output format selection, mirroring the CLI `--format` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatMode {
    /// Human-readable, optionally colored output.
    Human,
    /// Structured NDJSON output.
    Json,
}

impl From<OutputFormat> for FormatMode {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Human => Self::Human,
            OutputFormat::Json => Self::Json,
        }
    }
}

/// Configuration for the formatter, derived from CLI flags.
#[derive(Debug, Clone)]
pub struct FormatterConfig {
    /// Human or JSON output.
    pub mode: FormatMode,
    /// Whether ANSI colors are enabled.
    pub colors: bool,
    /// One line per outcome, no summary.
    pub quiet: bool,
}

impl FormatterConfig {
    /// Constructs a [`FormatterConfig`] from the raw CLI flags.
    pub fn from_flags(format: OutputFormat, no_color_flag: bool, quiet: bool) -> Self {
        Self {
            mode: format.into(),
            colors: colors_enabled(no_color_flag),
            quiet,
        }
    }

    fn paint(&self, color: &str, text: &str) -> String {
        if self.colors {
            format!("{color}{text}{ANSI_RESET}")
        } else {
            text.to_owned()
        }
    }
}

// ---------------------------------------------------------------------------
// Outcomes
// ---------------------------------------------------------------------------

/// Writes one [`ValidationOutcome`] in the configured mode.
///
/// Human format:
///
/// ```text
/// [INVALID] GTIN "123"
///   Numeric Check: Passed (all characters are digits 0-9).
///   Length Check (8,12,13,14): Failed (actual length: 3).
///   GTIN-13 Check Digit: Not Applicable (skipped because ...).
///   Invalid GTIN: failed Length Check (8,12,13,14)
/// ```
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_outcome<W: Write>(
    writer: &mut W,
    outcome: &ValidationOutcome,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    match config.mode {
        FormatMode::Human => write_outcome_human(writer, outcome, config),
        FormatMode::Json => write_json_line(writer, outcome),
    }
}

fn write_outcome_human<W: Write>(
    writer: &mut W,
    outcome: &ValidationOutcome,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    let tag = if outcome.is_valid {
        config.paint(ANSI_GREEN, "[VALID]")
    } else {
        config.paint(ANSI_RED, "[INVALID]")
    };
    writeln!(
        writer,
        "{tag} {} {:?}",
        outcome.identifier_type, outcome.validated_value
    )?;
    if config.quiet {
        return Ok(());
    }
    for check in &outcome.details {
        let status = match check.status {
            RuleStatus::Passed => check.status.to_string(),
            RuleStatus::Failed => config.paint(ANSI_RED, "Failed"),
            RuleStatus::NotApplicable => config.paint(ANSI_YELLOW, "Not Applicable"),
        };
        writeln!(writer, "  {}: {status} ({}).", check.rule, check.detail)?;
    }
    writeln!(writer, "  {}", outcome.message)
}

/// Writes a batch entry that broke the input contract.
///
/// `entry` is the 1-based position in the batch.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_rejection<W: Write>(
    writer: &mut W,
    entry: usize,
    error: &RequestError,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    match config.mode {
        FormatMode::Human => {
            let tag = config.paint(ANSI_RED, "[REJECTED]");
            writeln!(writer, "{tag} entry {entry}: {error}")
        }
        FormatMode::Json => write_json_line(
            writer,
            &json!({ "entry": entry, "error": error.to_string() }),
        ),
    }
}

// ---------------------------------------------------------------------------
// Batch summary
// ---------------------------------------------------------------------------

/// Counts accumulated over one batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Outcomes with `is_valid == true`.
    pub valid: usize,
    /// Outcomes with `is_valid == false`.
    pub invalid: usize,
    /// Entries that broke the input contract.
    pub rejected: usize,
}

impl BatchSummary {
    /// Number of entries seen.
    pub fn total(&self) -> usize {
        self.valid + self.invalid + self.rejected
    }

    /// Number of entries that were evaluated.
    pub fn evaluated(&self) -> usize {
        self.valid + self.invalid
    }
}

/// Writes the batch summary line.  Suppressed in quiet mode.
///
/// Human format: `4 identifiers: 2 valid, 1 invalid, 1 rejected`.
/// JSON format: `{"summary":{"total":4,"valid":2,"invalid":1,"rejected":1}}`.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_summary<W: Write>(
    writer: &mut W,
    summary: &BatchSummary,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    if config.quiet {
        return Ok(());
    }
    match config.mode {
        FormatMode::Human => writeln!(
            writer,
            "{} {}: {} valid, {} invalid, {} rejected",
            summary.total(),
            pluralize(summary.total(), "identifier", "identifiers"),
            summary.valid,
            summary.invalid,
            summary.rejected,
        ),
        FormatMode::Json => write_json_line(
            writer,
            &json!({
                "summary": {
                    "total": summary.total(),
                    "valid": summary.valid,
                    "invalid": summary.invalid,
                    "rejected": summary.rejected,
                }
            }),
        ),
    }
}

// ---------------------------------------------------------------------------
// check-digit and types
// ---------------------------------------------------------------------------

/// Writes a computed check digit and the completed key.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_check_digit<W: Write>(
    writer: &mut W,
    payload: &str,
    check_digit: u8,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    let key = format!("{payload}{check_digit}");
    match config.mode {
        FormatMode::Human if config.quiet => writeln!(writer, "{check_digit}"),
        FormatMode::Human => writeln!(writer, "check digit: {check_digit}\nkey: {key}"),
        FormatMode::Json => write_json_line(
            writer,
            &json!({ "payload": payload, "check_digit": check_digit, "key": key }),
        ),
    }
}

/// Writes one row of the rule table: a type and its ordered rules.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_rule_row<W: Write>(
    writer: &mut W,
    identifier_type: IdentifierType,
    rules: &[Rule],
    config: &FormatterConfig,
) -> std::io::Result<()> {
    let names: Vec<String> = rules.iter().map(Rule::name).collect();
    match config.mode {
        FormatMode::Human => writeln!(writer, "{identifier_type:<6} {}", names.join(", ")),
        FormatMode::Json => write_json_line(
            writer,
            &json!({ "identifier_type": identifier_type, "rules": names }),
        ),
    }
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

fn write_json_line<W: Write, T: serde::Serialize + ?Sized>(
    writer: &mut W,
    value: &T,
) -> std::io::Result<()> {
    serde_json::to_writer(&mut *writer, value)?;
    writeln!(writer)
}

fn pluralize<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 { singular } else { plural }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
