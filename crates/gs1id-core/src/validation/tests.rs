#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use super::*;
use crate::structural::LengthSpec;
use crate::types::IdentifierType;

fn run(value: &str, ty: IdentifierType) -> ValidationOutcome {
    let req = ValidationRequest::new(value, ty).expect("non-empty value");
    validate_identifier(&req)
}

fn run_extended(value: &str, ty: IdentifierType) -> ValidationOutcome {
    let req = ValidationRequest::new(value, ty).expect("non-empty value");
    validate_identifier_with_config(&req, &ValidationConfig::extended())
}

fn status_of(outcome: &ValidationOutcome, name: &str) -> RuleStatus {
    outcome
        .details
        .iter()
        .find(|c| c.rule_name() == name)
        .map(|c| c.status)
        .unwrap_or_else(|| panic!("no rule named {name:?} in {:?}", outcome.detail_lines()))
}

fn check_digit_status(outcome: &ValidationOutcome) -> RuleStatus {
    outcome
        .find(Rule::is_check_digit)
        .map(|c| c.status)
        .unwrap_or_else(|| panic!("no check digit rule in {:?}", outcome.detail_lines()))
}

// ---------------------------------------------------------------------------
// RuleStatus / CheckResult
// ---------------------------------------------------------------------------

#[test]
fn rule_status_display() {
    assert_eq!(RuleStatus::Passed.to_string(), "Passed");
    assert_eq!(RuleStatus::Failed.to_string(), "Failed");
    assert_eq!(RuleStatus::NotApplicable.to_string(), "Not Applicable");
}

#[test]
fn check_result_display_line() {
    let result = CheckResult::new(
        Rule::Length(LengthSpec::Exactly(13)),
        RuleStatus::Failed,
        "actual length: 14",
    );
    assert_eq!(
        result.to_string(),
        "Length Check (13): Failed (actual length: 14)."
    );
}

#[test]
fn check_result_serializes_rule_name() {
    let result = CheckResult::new(Rule::NumericOnly, RuleStatus::NotApplicable, "n/a");
    let json = serde_json::to_value(&result).expect("serialize");
    assert_eq!(json["rule"], "Numeric Check");
    assert_eq!(json["status"], "not_applicable");
    assert_eq!(json["detail"], "n/a");
}

// ---------------------------------------------------------------------------
// Reference scenarios
// ---------------------------------------------------------------------------

#[test]
fn gtin13_valid() {
    let outcome = run("4006381333931", IdentifierType::Gtin);
    assert!(outcome.is_valid, "{:?}", outcome.detail_lines());
    assert_eq!(outcome.details.len(), 3);
    assert!(outcome.details.iter().all(CheckResult::passed));
    assert_eq!(outcome.identifier_type, IdentifierType::Gtin);
    assert_eq!(outcome.validated_value, "4006381333931");
    assert!(outcome.message.starts_with("Valid GTIN"), "{}", outcome.message);
}

#[test]
fn gtin13_bad_check_digit() {
    let outcome = run("4006381333932", IdentifierType::Gtin);
    assert!(!outcome.is_valid);
    assert_eq!(status_of(&outcome, "Numeric Check"), RuleStatus::Passed);
    assert_eq!(
        status_of(&outcome, "Length Check (8,12,13,14)"),
        RuleStatus::Passed
    );
    let check = outcome
        .find(Rule::is_check_digit)
        .expect("check digit rule present");
    assert_eq!(check.status, RuleStatus::Failed);
    assert!(check.detail.contains("expected 1, got 2"), "{}", check.detail);
    assert!(
        outcome.message.contains("GTIN-13 Check Digit"),
        "{}",
        outcome.message
    );
}

#[test]
fn gtin_too_short() {
    let outcome = run("123", IdentifierType::Gtin);
    assert!(!outcome.is_valid);
    assert_eq!(status_of(&outcome, "Numeric Check"), RuleStatus::Passed);
    let length = outcome
        .find(|r| matches!(r, Rule::Length(_)))
        .expect("length rule present");
    assert_eq!(length.status, RuleStatus::Failed);
    assert!(length.detail.contains('3'), "{}", length.detail);
    assert_eq!(check_digit_status(&outcome), RuleStatus::NotApplicable);
}

#[test]
fn gln_too_long() {
    let outcome = run("12345678901234", IdentifierType::Gln);
    assert!(!outcome.is_valid);
    assert_eq!(status_of(&outcome, "Length Check (13)"), RuleStatus::Failed);
    assert!(
        outcome
            .details
            .iter()
            .any(|c| c.detail.contains("14")),
        "{:?}",
        outcome.detail_lines()
    );
    assert_eq!(check_digit_status(&outcome), RuleStatus::NotApplicable);
}

#[test]
fn other_with_hyphen_is_valid() {
    let outcome = run("ABC-123", IdentifierType::Other);
    assert!(outcome.is_valid, "{:?}", outcome.detail_lines());
    assert_eq!(outcome.details.len(), 2);
}

#[test]
fn empty_value_is_a_contract_violation() {
    assert_eq!(
        validate("", "GTIN", &ValidationConfig::default()),
        Err(RequestError::EmptyValue)
    );
}

#[test]
fn unknown_type_is_a_contract_violation() {
    let err = validate("123", "ISBN", &ValidationConfig::default())
        .expect_err("ISBN is not a type");
    assert!(matches!(err, RequestError::UnrecognizedType { .. }));
}

#[test]
fn validate_accepts_lowercase_type() {
    let outcome =
        validate("4006381333931", "gtin", &ValidationConfig::default()).expect("valid request");
    assert!(outcome.is_valid);
    assert_eq!(outcome.identifier_type, IdentifierType::Gtin);
}

// ---------------------------------------------------------------------------
// Per-type reference rules
// ---------------------------------------------------------------------------

#[test]
fn gtin_non_numeric_fails_and_skips_check_digit() {
    let outcome = run("400638133393A", IdentifierType::Gtin);
    assert!(!outcome.is_valid);
    let numeric = outcome
        .find(|r| *r == Rule::NumericOnly)
        .expect("numeric rule present");
    assert_eq!(numeric.status, RuleStatus::Failed);
    assert!(numeric.detail.contains("'A'"), "{}", numeric.detail);
    assert_eq!(check_digit_status(&outcome), RuleStatus::NotApplicable);
}

#[test]
fn gtin_other_lengths_skip_check_digit_in_reference_profile() {
    // Wrong check digits, but only GTIN-13 is verified by default.
    for value in ["96385075", "036000291453", "10614141000416"] {
        let outcome = run(value, IdentifierType::Gtin);
        assert!(outcome.is_valid, "{value}: {:?}", outcome.detail_lines());
        assert_eq!(check_digit_status(&outcome), RuleStatus::NotApplicable);
    }
}

#[test]
fn gln_valid_and_invalid() {
    assert!(run("0614141000418", IdentifierType::Gln).is_valid);
    let outcome = run("0614141000419", IdentifierType::Gln);
    assert!(!outcome.is_valid);
    assert_eq!(status_of(&outcome, "GLN Check Digit"), RuleStatus::Failed);
}

#[test]
fn sscc_check_digit_is_conceptual_only() {
    // Wrong check digit still passes: the reference profile does not verify it.
    let outcome = run("106141411234567895", IdentifierType::Sscc);
    assert!(outcome.is_valid, "{:?}", outcome.detail_lines());
    let check = outcome.find(Rule::is_check_digit).expect("check digit rule");
    assert_eq!(check.status, RuleStatus::NotApplicable);
    assert!(check.detail.contains("conceptual"), "{}", check.detail);
}

#[test]
fn sscc_wrong_length() {
    let outcome = run("1234567890123456789", IdentifierType::Sscc);
    assert!(!outcome.is_valid);
    assert_eq!(status_of(&outcome, "Length Check (18)"), RuleStatus::Failed);
}

#[test]
fn grai_charset_is_informational() {
    let outcome = run("ABC_DEF GHI!JKLM", IdentifierType::Grai);
    assert!(outcome.is_valid, "{:?}", outcome.detail_lines());
    assert_eq!(
        status_of(&outcome, "Charset Check (alphanumeric)"),
        RuleStatus::Passed
    );
}

#[test]
fn grai_length_bounds() {
    assert!(run(&"A".repeat(14), IdentifierType::Grai).is_valid);
    assert!(run(&"A".repeat(30), IdentifierType::Grai).is_valid);
    assert!(!run(&"A".repeat(13), IdentifierType::Grai).is_valid);
    assert!(!run(&"A".repeat(31), IdentifierType::Grai).is_valid);
}

#[test]
fn giai_length_bounds() {
    assert!(run(&"7".repeat(11), IdentifierType::Giai).is_valid);
    assert!(!run(&"7".repeat(10), IdentifierType::Giai).is_valid);
    let outcome = run(&"7".repeat(31), IdentifierType::Giai);
    assert_eq!(status_of(&outcome, "Length Check (11-30)"), RuleStatus::Failed);
}

#[test]
fn gsrn_has_no_check_digit_in_reference_profile() {
    let outcome = run("123456789012345678", IdentifierType::Gsrn);
    assert!(outcome.is_valid, "{:?}", outcome.detail_lines());
    assert!(outcome.find(Rule::is_check_digit).is_none());
}

#[test]
fn gsrn_non_numeric() {
    assert!(!run("12345678901234567X", IdentifierType::Gsrn).is_valid);
}

#[test]
fn gdti_with_serial_is_valid() {
    let outcome = run("4006381333931ABC123", IdentifierType::Gdti);
    assert!(outcome.is_valid, "{:?}", outcome.detail_lines());
    assert_eq!(
        status_of(&outcome, "Base Numeric Check (first 13)"),
        RuleStatus::Passed
    );
    assert_eq!(
        status_of(&outcome, "Base Length Check (13)"),
        RuleStatus::Passed
    );
}

#[test]
fn gdti_too_short() {
    let outcome = run("123456", IdentifierType::Gdti);
    assert!(!outcome.is_valid);
    assert_eq!(
        status_of(&outcome, "Base Numeric Check (first 13)"),
        RuleStatus::NotApplicable
    );
    assert_eq!(
        status_of(&outcome, "Base Length Check (13)"),
        RuleStatus::Failed
    );
}

#[test]
fn gdti_non_numeric_base() {
    let outcome = run("40063813339X1", IdentifierType::Gdti);
    assert!(!outcome.is_valid);
    assert_eq!(
        status_of(&outcome, "Base Numeric Check (first 13)"),
        RuleStatus::Failed
    );
}

#[test]
fn other_rejects_underscore_and_short_values() {
    let underscore = run("ABC_123", IdentifierType::Other);
    assert!(!underscore.is_valid);
    assert!(
        underscore.details.iter().any(|c| c.detail.contains("'_'")),
        "{:?}",
        underscore.detail_lines()
    );
    assert!(!run("AB-1", IdentifierType::Other).is_valid);
}

#[test]
fn whitespace_is_not_trimmed() {
    let outcome = run(" 4006381333931", IdentifierType::Gtin);
    assert!(!outcome.is_valid);
    assert_eq!(outcome.validated_value, " 4006381333931");
}

#[test]
fn multibyte_value_does_not_panic() {
    for ty in IdentifierType::ALL {
        let outcome = run("ÅÅÅÅÅÅÅÅÅÅÅÅÅÅÅ", ty);
        assert_eq!(outcome.details.len(), outcome.detail_lines().len());
    }
}

// ---------------------------------------------------------------------------
// Outcome invariants
// ---------------------------------------------------------------------------

#[test]
fn is_valid_iff_no_failures() {
    let samples = [
        ("4006381333931", IdentifierType::Gtin),
        ("4006381333932", IdentifierType::Gtin),
        ("123", IdentifierType::Gtin),
        ("ABC-123", IdentifierType::Other),
        ("4006381333931AB", IdentifierType::Gdti),
        ("x", IdentifierType::Giai),
    ];
    for (value, ty) in samples {
        for outcome in [run(value, ty), run_extended(value, ty)] {
            assert_eq!(
                outcome.is_valid,
                outcome.failures().next().is_none(),
                "{value}/{ty}"
            );
        }
    }
}

#[test]
fn details_follow_rule_set_order() {
    for ty in IdentifierType::ALL {
        let config = ValidationConfig::default();
        let outcome = run("0000000000000", ty);
        let names: Vec<String> = outcome.details.iter().map(CheckResult::rule_name).collect();
        let expected: Vec<String> = rule_set(ty, &config).iter().map(Rule::name).collect();
        assert_eq!(names, expected, "{ty}");
    }
}

#[test]
fn validation_is_idempotent() {
    let a = run("4006381333932", IdentifierType::Gtin);
    let b = run("4006381333932", IdentifierType::Gtin);
    assert_eq!(a, b);
}

#[test]
fn invalid_message_names_failing_rules() {
    let outcome = run("123", IdentifierType::Gln);
    assert!(outcome.message.starts_with("Invalid GLN"), "{}", outcome.message);
    assert!(
        outcome.message.contains("Length Check (13)"),
        "{}",
        outcome.message
    );
}

#[test]
fn outcome_serializes_to_json() {
    let outcome = run("ABC-123", IdentifierType::Other);
    let json = serde_json::to_value(&outcome).expect("serialize");
    assert_eq!(json["is_valid"], true);
    assert_eq!(json["identifier_type"], "OTHER");
    assert_eq!(json["validated_value"], "ABC-123");
    let details = json["details"].as_array().expect("details array");
    assert_eq!(details.len(), 2);
    assert_eq!(details[0]["rule"], "Charset Check (alphanumeric, hyphen)");
}

// ---------------------------------------------------------------------------
// Extended profile
// ---------------------------------------------------------------------------

#[test]
fn extended_is_off_by_default() {
    assert!(!ValidationConfig::default().run_extended);
    assert!(ValidationConfig::extended().run_extended);
}

#[test]
fn extended_gtin_verifies_every_length() {
    for valid in ["96385074", "036000291452", "4006381333931", "10614141000415"] {
        let outcome = run_extended(valid, IdentifierType::Gtin);
        assert!(outcome.is_valid, "{valid}: {:?}", outcome.detail_lines());
        assert_eq!(check_digit_status(&outcome), RuleStatus::Passed);
    }
    for invalid in ["96385075", "036000291453", "4006381333932", "10614141000416"] {
        let outcome = run_extended(invalid, IdentifierType::Gtin);
        assert!(!outcome.is_valid, "{invalid}");
        assert_eq!(status_of(&outcome, "GTIN Check Digit"), RuleStatus::Failed);
    }
}

#[test]
fn extended_sscc_verifies_check_digit() {
    assert!(run_extended("106141411234567897", IdentifierType::Sscc).is_valid);
    let outcome = run_extended("106141411234567895", IdentifierType::Sscc);
    assert!(!outcome.is_valid);
    assert_eq!(check_digit_status(&outcome), RuleStatus::Failed);
}

#[test]
fn extended_gsrn_verifies_check_digit() {
    // Same 17-digit payload as the SSCC vector; the algorithm is shared.
    assert!(run_extended("106141411234567897", IdentifierType::Gsrn).is_valid);
    let outcome = run_extended("106141411234567890", IdentifierType::Gsrn);
    assert!(!outcome.is_valid);
    assert_eq!(
        status_of(&outcome, "GSRN Check Digit"),
        RuleStatus::Failed
    );
}

#[test]
fn extended_gdti_base_and_serial() {
    let ok = run_extended("4006381333931ABC123", IdentifierType::Gdti);
    assert!(ok.is_valid, "{:?}", ok.detail_lines());
    assert_eq!(
        status_of(&ok, "GDTI Base Check Digit"),
        RuleStatus::Passed
    );
    assert_eq!(status_of(&ok, "Serial Component (GDTI)"), RuleStatus::Passed);

    let bare = run_extended("4006381333931", IdentifierType::Gdti);
    assert!(bare.is_valid, "{:?}", bare.detail_lines());

    let bad_base = run_extended("4006381333932ABC", IdentifierType::Gdti);
    assert!(!bad_base.is_valid);
    assert_eq!(
        status_of(&bad_base, "GDTI Base Check Digit"),
        RuleStatus::Failed
    );

    let bad_serial = run_extended("4006381333931AB_C", IdentifierType::Gdti);
    assert!(!bad_serial.is_valid);
    assert_eq!(
        status_of(&bad_serial, "Serial Component (GDTI)"),
        RuleStatus::Failed
    );
}

#[test]
fn gdti_serial_is_only_checked_by_extended_profile() {
    let value = format!("4006381333931{}", "!".repeat(500));
    let reference = run(&value, IdentifierType::Gdti);
    assert!(reference.is_valid, "{}", reference.message);
    assert!(reference.find(|r| matches!(r, Rule::SerialComponent)).is_none());

    let extended = run_extended(&value, IdentifierType::Gdti);
    assert!(!extended.is_valid);
    assert_eq!(
        status_of(&extended, "Serial Component (GDTI)"),
        RuleStatus::Failed
    );
}

#[test]
fn extended_gdti_short_value_skips_base_check_digit() {
    let outcome = run_extended("123", IdentifierType::Gdti);
    assert!(!outcome.is_valid);
    assert_eq!(
        status_of(&outcome, "GDTI Base Check Digit"),
        RuleStatus::NotApplicable
    );
    assert_eq!(
        status_of(&outcome, "Serial Component (GDTI)"),
        RuleStatus::NotApplicable
    );
}

#[test]
fn extended_leaves_other_types_unchanged() {
    for (value, ty) in [
        ("0614141000418", IdentifierType::Gln),
        ("ABCDEFGHIJKLMN", IdentifierType::Grai),
        ("ABCDEFGHIJK", IdentifierType::Giai),
        ("ABC-123", IdentifierType::Other),
    ] {
        assert_eq!(run(value, ty), run_extended(value, ty), "{ty}");
    }
}
