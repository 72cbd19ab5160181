/// Result types and the top-level entry points of the identifier validator.
///
/// This module defines [`RuleStatus`], [`CheckResult`], [`ValidationOutcome`],
/// and [`ValidationConfig`], plus the [`validate_identifier`] family of
/// functions that run the per-type rule table from [`rules`].
///
/// Validation is a single deterministic pass over a fixed, ordered rule list.
/// Every rule in the list produces exactly one [`CheckResult`]; rules whose
/// prerequisites failed are reported as [`RuleStatus::NotApplicable`] rather
/// than omitted, so the outcome always lists the full rule sequence.
pub mod rules;

use std::fmt;

use serde::ser::SerializeStruct as _;
use serde::{Serialize, Serializer};

use crate::types::{IdentifierType, RequestError, ValidationRequest};
pub use rules::{Charset, CheckDigitRule, Rule, rule_set};

#[cfg(test)]
mod tests;

/// The result of evaluating one rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleStatus {
    /// The rule applied and the identifier satisfied it.
    Passed,
    /// The rule applied and the identifier violated it.
    Failed,
    /// The rule could not be evaluated, typically because a structural rule
    /// it depends on already failed.  Never forces invalidity on its own.
    NotApplicable,
}

impl fmt::Display for RuleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Passed => f.write_str("Passed"),
            Self::Failed => f.write_str("Failed"),
            Self::NotApplicable => f.write_str("Not Applicable"),
        }
    }
}

/// One evaluated rule: which rule, its status, and the measured value behind
/// the verdict (actual length, offending character, expected check digit).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    /// The rule that was evaluated.
    pub rule: Rule,
    /// Whether the rule passed, failed, or did not apply.
    pub status: RuleStatus,
    /// Concrete, human-readable evidence for the status.
    pub detail: String,
}

impl CheckResult {
    /// Constructs a new [`CheckResult`].
    pub fn new(rule: Rule, status: RuleStatus, detail: impl Into<String>) -> Self {
        Self {
            rule,
            status,
            detail: detail.into(),
        }
    }

    /// Returns `true` if the rule applied and passed.
    pub fn passed(&self) -> bool {
        self.status == RuleStatus::Passed
    }

    /// Returns `true` if the rule applied and failed.
    pub fn failed(&self) -> bool {
        self.status == RuleStatus::Failed
    }

    /// Returns the display name of the rule, e.g. `"Length Check (13)"`.
    pub fn rule_name(&self) -> String {
        self.rule.name()
    }
}

impl fmt::Display for CheckResult {
    /// Renders the presentation line: `Length Check (13): Failed (actual length: 14).`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({}).", self.rule, self.status, self.detail)
    }
}

impl Serialize for CheckResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("CheckResult", 3)?;
        state.serialize_field("rule", &self.rule.name())?;
        state.serialize_field("status", &self.status)?;
        state.serialize_field("detail", &self.detail)?;
        state.end()
    }
}

/// The complete result of validating one identifier.
///
/// Constructed once by the validator and never mutated afterwards.  An
/// invalid identifier is a normal outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationOutcome {
    /// `true` iff no rule in `details` failed.
    pub is_valid: bool,
    /// Short summary naming the type and the pass/fail state.
    pub message: String,
    /// Every rule evaluated, in evaluation order.
    pub details: Vec<CheckResult>,
    /// The type the value was validated against.
    pub identifier_type: IdentifierType,
    /// The value exactly as supplied.
    pub validated_value: String,
}

impl ValidationOutcome {
    /// Assembles an outcome from evaluated rules, deriving `is_valid` and
    /// `message` from them.
    pub fn from_checks(
        identifier_type: IdentifierType,
        value: &str,
        details: Vec<CheckResult>,
    ) -> Self {
        let failed: Vec<String> = details
            .iter()
            .filter(|c| c.failed())
            .map(CheckResult::rule_name)
            .collect();
        let is_valid = failed.is_empty();
        let message = if is_valid {
            let applicable = details.iter().filter(|c| c.passed()).count();
            format!(
                "Valid {identifier_type}: {applicable} of {} checks passed, none failed",
                details.len()
            )
        } else {
            format!("Invalid {identifier_type}: failed {}", failed.join(", "))
        };
        Self {
            is_valid,
            message,
            details,
            identifier_type,
            validated_value: value.to_owned(),
        }
    }

    /// Returns an iterator over the rules that failed.
    pub fn failures(&self) -> impl Iterator<Item = &CheckResult> {
        self.details.iter().filter(|c| c.failed())
    }

    /// Returns the result for the first rule matching `predicate`, if any.
    pub fn find(&self, predicate: impl Fn(&Rule) -> bool) -> Option<&CheckResult> {
        self.details.iter().find(|c| predicate(&c.rule))
    }

    /// Renders every detail as a presentation line, in evaluation order.
    pub fn detail_lines(&self) -> Vec<String> {
        self.details.iter().map(ToString::to_string).collect()
    }
}

/// Selects which rule profile the validator runs.
///
/// The default profile is the reference rule table.  The extended profile
/// additionally verifies the GS1 check digit of every numeric key (GTIN-8/12/14,
/// SSCC, GSRN, the GDTI base) and the GDTI serial component.
///
/// ```
/// # use gs1id_core::ValidationConfig;
/// let cfg = ValidationConfig::default();
/// assert!(!cfg.run_extended);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidationConfig {
    /// Run the extended GS1 rules.  Default `false`.
    pub run_extended: bool,
}

impl ValidationConfig {
    /// The extended profile.
    pub fn extended() -> Self {
        Self { run_extended: true }
    }
}

/// Validates `request` against the reference rule table.
///
/// ```
/// use gs1id_core::{IdentifierType, ValidationRequest, validate_identifier};
///
/// let req = ValidationRequest::new("4006381333931", IdentifierType::Gtin).unwrap();
/// assert!(validate_identifier(&req).is_valid);
/// ```
pub fn validate_identifier(request: &ValidationRequest) -> ValidationOutcome {
    validate_identifier_with_config(request, &ValidationConfig::default())
}

/// Validates `request` with the rule profile selected by `config`.
pub fn validate_identifier_with_config(
    request: &ValidationRequest,
    config: &ValidationConfig,
) -> ValidationOutcome {
    let value = request.value();
    let rules = rule_set(request.identifier_type(), config);
    let mut details: Vec<CheckResult> = Vec::with_capacity(rules.len());
    for rule in rules {
        let result = rule.evaluate(value, &details);
        details.push(result);
    }
    ValidationOutcome::from_checks(request.identifier_type(), value, details)
}

/// Validates raw text input, enforcing the input contract first.
///
/// # Errors
///
/// Returns [`RequestError`] if `value` is empty or `identifier_type` is not a
/// recognised type code.  Every other input yields a [`ValidationOutcome`].
pub fn validate(
    value: &str,
    identifier_type: &str,
    config: &ValidationConfig,
) -> Result<ValidationOutcome, RequestError> {
    let request = ValidationRequest::parse(value, identifier_type)?;
    Ok(validate_identifier_with_config(&request, config))
}
