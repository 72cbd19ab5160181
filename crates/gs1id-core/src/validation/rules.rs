/// The per-type rule table and the evaluation of each rule.
///
/// [`rule_set`] maps every [`IdentifierType`] to a fixed, ordered list of
/// [`Rule`] values through an exhaustive `match`; adding a type without a rule
/// list is a compile error.  [`Rule::evaluate`] turns one rule into one
/// [`CheckResult`], given the results of the rules evaluated before it.
///
/// | Type  | Reference rules | Extended profile adds |
/// |-------|-----------------|-----------------------|
/// | GTIN  | numeric, length 8/12/13/14, GTIN-13 check digit | check digit for every length |
/// | GLN   | numeric, length 13, check digit | |
/// | SSCC  | numeric, length 18, check digit (conceptual only) | check digit verified |
/// | GRAI  | charset (informational), length 14-30 | |
/// | GIAI  | charset (informational), length 11-30 | |
/// | GSRN  | numeric, length 18 | check digit |
/// | GDTI  | base numeric (first 13), base length 13 | base check digit, serial component |
/// | OTHER | charset alphanumeric/hyphen, length 5-30 | |
use std::fmt;

use crate::check_digits::{CheckDigitOutcome, verify_gs1_check_digit, verify_gtin13_check_digit};
use crate::structural::{
    LengthSpec, char_len, first_disallowed_char, is_alphanumeric, is_alphanumeric_or_hyphen,
    is_numeric_only, is_valid_length,
};
use crate::types::IdentifierType;
use crate::validation::{CheckResult, RuleStatus, ValidationConfig};

/// Accepted GTIN lengths: GTIN-8, GTIN-12, GTIN-13, GTIN-14.
pub const GTIN_LENGTHS: LengthSpec = LengthSpec::OneOf(&[8, 12, 13, 14]);

/// Length of the numeric GDTI base (company prefix, document type, check digit).
pub const GDTI_BASE_LEN: usize = 13;

/// Maximum total GDTI length, base plus serial component.
pub const GDTI_MAX_LEN: usize = 30;

/// Character set enforced by a [`Rule::Charset`] rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Charset {
    /// Alphanumeric content is allowed.  Informational: never fails.
    Alphanumeric,
    /// Only ASCII letters, digits, and hyphens.
    AlphanumericHyphen,
}

/// Which check-digit verification a [`Rule::CheckDigit`] performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckDigitRule {
    /// GTIN-13 only; other GTIN lengths are reported Not Applicable.
    Gtin13,
    /// Any GTIN length, verified with the right-aligned GS1 weighting.
    Gtin,
    /// GLN, verified with the GTIN-13 algorithm.
    Gln,
    /// SSCC check digit acknowledged but not verified.
    SsccConceptual,
    /// SSCC check digit verified.
    Sscc,
    /// GSRN check digit verified.
    Gsrn,
    /// Check digit of the 13-digit GDTI base.
    GdtiBase,
}

/// One structural rule in a type's rule list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// Every character is a digit 0-9.
    NumericOnly,
    /// The character count is accepted by the [`LengthSpec`].
    Length(LengthSpec),
    /// Every character belongs to the [`Charset`].
    Charset(Charset),
    /// The first 13 characters (the GDTI base) are digits.
    BaseNumeric,
    /// A complete 13-character GDTI base is present.
    ///
    /// Only the base is measured: whatever follows it passes this rule.  The
    /// serial's charset and the 30-character total are checked by
    /// [`Rule::SerialComponent`], which only the extended profile runs.
    BaseLength,
    /// The trailing check digit is correct.
    CheckDigit(CheckDigitRule),
    /// The GDTI serial after the base is alphanumeric and within the total length.
    SerialComponent,
}

impl Rule {
    /// Returns the display name used in details, e.g. `"Length Check (8,12,13,14)"`.
    pub fn name(&self) -> String {
        match self {
            Self::NumericOnly => "Numeric Check".to_owned(),
            Self::Length(spec) => format!("Length Check ({spec})"),
            Self::Charset(Charset::Alphanumeric) => "Charset Check (alphanumeric)".to_owned(),
            Self::Charset(Charset::AlphanumericHyphen) => {
                "Charset Check (alphanumeric, hyphen)".to_owned()
            }
            Self::BaseNumeric => format!("Base Numeric Check (first {GDTI_BASE_LEN})"),
            Self::BaseLength => format!("Base Length Check ({GDTI_BASE_LEN})"),
            Self::CheckDigit(kind) => match kind {
                CheckDigitRule::Gtin13 => "GTIN-13 Check Digit".to_owned(),
                CheckDigitRule::Gtin => "GTIN Check Digit".to_owned(),
                CheckDigitRule::Gln => "GLN Check Digit".to_owned(),
                CheckDigitRule::SsccConceptual | CheckDigitRule::Sscc => {
                    "SSCC Check Digit".to_owned()
                }
                CheckDigitRule::Gsrn => "GSRN Check Digit".to_owned(),
                CheckDigitRule::GdtiBase => "GDTI Base Check Digit".to_owned(),
            },
            Self::SerialComponent => "Serial Component (GDTI)".to_owned(),
        }
    }

    /// Returns `true` for check-digit rules.
    pub fn is_check_digit(&self) -> bool {
        matches!(self, Self::CheckDigit(_))
    }

    /// Evaluates this rule against `value`.
    ///
    /// `prior` holds the results of the rules evaluated before this one in
    /// the same pass.  Check-digit rules are only applicable when none of
    /// them failed; every other rule is independent of `prior`.
    pub fn evaluate(&self, value: &str, prior: &[CheckResult]) -> CheckResult {
        let len = char_len(value);
        match *self {
            Self::NumericOnly if is_numeric_only(value) => {
                CheckResult::new(*self, RuleStatus::Passed, "all characters are digits 0-9")
            }
            Self::NumericOnly => match value.chars().find(|c| !c.is_ascii_digit()) {
                Some(c) => CheckResult::new(
                    *self,
                    RuleStatus::Failed,
                    format!("contains non-numeric character {c:?}"),
                ),
                None => CheckResult::new(*self, RuleStatus::Failed, "value is empty"),
            },
            Self::Length(spec) => {
                let status = if is_valid_length(value, spec) {
                    RuleStatus::Passed
                } else {
                    RuleStatus::Failed
                };
                CheckResult::new(*self, status, format!("actual length: {len}"))
            }
            Self::Charset(Charset::Alphanumeric) => CheckResult::new(
                *self,
                RuleStatus::Passed,
                "alphanumeric characters are allowed",
            ),
            Self::Charset(Charset::AlphanumericHyphen) if is_alphanumeric_or_hyphen(value) => {
                CheckResult::new(*self, RuleStatus::Passed, "only letters, digits and hyphens")
            }
            Self::Charset(Charset::AlphanumericHyphen) => match first_disallowed_char(value) {
                Some(c) => CheckResult::new(
                    *self,
                    RuleStatus::Failed,
                    format!("contains disallowed character {c:?}"),
                ),
                None => CheckResult::new(*self, RuleStatus::Failed, "value is empty"),
            },
            Self::BaseNumeric => evaluate_base_numeric(*self, value, len),
            Self::BaseLength => {
                if len >= GDTI_BASE_LEN {
                    CheckResult::new(
                        *self,
                        RuleStatus::Passed,
                        format!("base length: {GDTI_BASE_LEN}, total length: {len}"),
                    )
                } else {
                    CheckResult::new(
                        *self,
                        RuleStatus::Failed,
                        format!("actual length: {len}, shorter than the {GDTI_BASE_LEN}-character base"),
                    )
                }
            }
            Self::CheckDigit(kind) => evaluate_check_digit(*self, kind, value, len, prior),
            Self::SerialComponent => evaluate_serial(*self, value, len),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// Returns the ordered rule list for `identifier_type` under `config`.
///
/// The order is the evaluation order: numeric, then length, then any
/// type-specific rule, then the check digit.
pub fn rule_set(identifier_type: IdentifierType, config: &ValidationConfig) -> Vec<Rule> {
    let extended = config.run_extended;
    match identifier_type {
        IdentifierType::Gtin => vec![
            Rule::NumericOnly,
            Rule::Length(GTIN_LENGTHS),
            Rule::CheckDigit(if extended {
                CheckDigitRule::Gtin
            } else {
                CheckDigitRule::Gtin13
            }),
        ],
        IdentifierType::Gln => vec![
            Rule::NumericOnly,
            Rule::Length(LengthSpec::Exactly(13)),
            Rule::CheckDigit(CheckDigitRule::Gln),
        ],
        IdentifierType::Sscc => vec![
            Rule::NumericOnly,
            Rule::Length(LengthSpec::Exactly(18)),
            Rule::CheckDigit(if extended {
                CheckDigitRule::Sscc
            } else {
                CheckDigitRule::SsccConceptual
            }),
        ],
        IdentifierType::Grai => vec![
            Rule::Charset(Charset::Alphanumeric),
            Rule::Length(LengthSpec::Between(14, 30)),
        ],
        IdentifierType::Giai => vec![
            Rule::Charset(Charset::Alphanumeric),
            Rule::Length(LengthSpec::Between(11, 30)),
        ],
        IdentifierType::Gsrn => {
            let mut rules = vec![Rule::NumericOnly, Rule::Length(LengthSpec::Exactly(18))];
            if extended {
                rules.push(Rule::CheckDigit(CheckDigitRule::Gsrn));
            }
            rules
        }
        IdentifierType::Gdti => {
            let mut rules = vec![Rule::BaseNumeric, Rule::BaseLength];
            if extended {
                rules.push(Rule::CheckDigit(CheckDigitRule::GdtiBase));
                rules.push(Rule::SerialComponent);
            }
            rules
        }
        IdentifierType::Other => vec![
            Rule::Charset(Charset::AlphanumericHyphen),
            Rule::Length(LengthSpec::Between(5, 30)),
        ],
    }
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// Splits `value` after its first `n` characters.  `None` if it is shorter.
fn split_after_chars(value: &str, n: usize) -> Option<(&str, &str)> {
    if n == 0 {
        return Some(("", value));
    }
    let mut seen = 0;
    for (idx, c) in value.char_indices() {
        seen += 1;
        if seen == n {
            return Some(value.split_at(idx + c.len_utf8()));
        }
    }
    None
}

fn evaluate_base_numeric(rule: Rule, value: &str, len: usize) -> CheckResult {
    let Some((base, _)) = split_after_chars(value, GDTI_BASE_LEN) else {
        return CheckResult::new(
            rule,
            RuleStatus::NotApplicable,
            format!("value has {len} characters; a {GDTI_BASE_LEN}-character base is required"),
        );
    };
    if is_numeric_only(base) {
        return CheckResult::new(rule, RuleStatus::Passed, format!("base {base:?} is numeric"));
    }
    let offender = base
        .chars()
        .find(|c| !c.is_ascii_digit())
        .map_or_else(String::new, |c| format!(" {c:?}"));
    CheckResult::new(
        rule,
        RuleStatus::Failed,
        format!("base contains non-numeric character{offender}"),
    )
}

fn evaluate_check_digit(
    rule: Rule,
    kind: CheckDigitRule,
    value: &str,
    len: usize,
    prior: &[CheckResult],
) -> CheckResult {
    if kind == CheckDigitRule::SsccConceptual {
        return sscc_conceptual(rule);
    }

    let failed: Vec<String> = prior
        .iter()
        .filter(|c| c.failed())
        .map(CheckResult::rule_name)
        .collect();
    if !failed.is_empty() {
        return CheckResult::new(
            rule,
            RuleStatus::NotApplicable,
            format!("skipped because {} failed", failed.join(", ")),
        );
    }

    match kind {
        CheckDigitRule::Gtin13 if len != 13 => CheckResult::new(
            rule,
            RuleStatus::NotApplicable,
            format!("verified only for GTIN-13; actual length: {len}"),
        ),
        CheckDigitRule::Gtin13 | CheckDigitRule::Gln => {
            check_digit_result(rule, &verify_gtin13_check_digit(value))
        }
        CheckDigitRule::Gtin | CheckDigitRule::Sscc | CheckDigitRule::Gsrn => {
            check_digit_result(rule, &verify_gs1_check_digit(value))
        }
        CheckDigitRule::GdtiBase => match split_after_chars(value, GDTI_BASE_LEN) {
            Some((base, _)) => check_digit_result(rule, &verify_gs1_check_digit(base)),
            None => CheckResult::new(
                rule,
                RuleStatus::NotApplicable,
                format!("no {GDTI_BASE_LEN}-character base present"),
            ),
        },
        CheckDigitRule::SsccConceptual => sscc_conceptual(rule),
    }
}

fn sscc_conceptual(rule: Rule) -> CheckResult {
    CheckResult::new(
        rule,
        RuleStatus::NotApplicable,
        "conceptual only; the SSCC check digit is not verified in the reference profile",
    )
}

fn check_digit_result(rule: Rule, outcome: &CheckDigitOutcome) -> CheckResult {
    let status = if outcome.valid {
        RuleStatus::Passed
    } else {
        RuleStatus::Failed
    };
    CheckResult::new(rule, status, outcome.reason.clone())
}

fn evaluate_serial(rule: Rule, value: &str, len: usize) -> CheckResult {
    let Some((_, serial)) = split_after_chars(value, GDTI_BASE_LEN) else {
        return CheckResult::new(
            rule,
            RuleStatus::NotApplicable,
            format!("no {GDTI_BASE_LEN}-character base present"),
        );
    };
    if serial.is_empty() {
        return CheckResult::new(rule, RuleStatus::Passed, "not present");
    }
    if !is_alphanumeric(serial) {
        let offender = serial
            .chars()
            .find(|c| !c.is_ascii_alphanumeric())
            .map_or_else(String::new, |c| format!(" {c:?}"));
        return CheckResult::new(
            rule,
            RuleStatus::Failed,
            format!("serial must be alphanumeric, found{offender}"),
        );
    }
    if len > GDTI_MAX_LEN {
        return CheckResult::new(
            rule,
            RuleStatus::Failed,
            format!("total length {len} exceeds {GDTI_MAX_LEN}"),
        );
    }
    CheckResult::new(
        rule,
        RuleStatus::Passed,
        format!("serial {serial:?} present, total length: {len}"),
    )
}
