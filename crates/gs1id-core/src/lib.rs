#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod batch;
pub mod check_digits;
pub mod structural;
pub mod types;
pub mod validation;

pub use batch::{BatchEntry, BatchParseError, parse_requests};
pub use check_digits::{
    CheckDigitOutcome, gs1_check_digit, gs1_mod10, verify_gs1_check_digit,
    verify_gtin13_check_digit,
};
pub use structural::{LengthSpec, is_alphanumeric, is_numeric_only, is_valid_length};
pub use types::{IdentifierType, RequestError, ValidationRequest};
pub use validation::{
    Charset, CheckDigitRule, CheckResult, Rule, RuleStatus, ValidationConfig, ValidationOutcome,
    rule_set, validate, validate_identifier, validate_identifier_with_config,
};

/// Returns the current version of the gs1id-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
