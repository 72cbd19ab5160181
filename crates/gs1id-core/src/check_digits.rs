//! Pure GS1 modulo-10 check-digit functions.
//!
//! Every GS1 numeric key (GTIN-8/12/13/14, GLN, SSCC, GSRN, the GDTI base)
//! ends in a single check digit computed with the same weighted modulo-10
//! scheme.  The functions here never allocate on the success path and never
//! panic: malformed input produces `None` or an invalid [`CheckDigitOutcome`].
//!
//! # References
//!
//! - GS1 General Specifications, Section 7.9 (check digit calculation)

/// Result of verifying the trailing check digit of a numeric key.
///
/// `calculated` and `actual` are `None` when the input was rejected before
/// any arithmetic took place (wrong length, non-digit characters).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckDigitOutcome {
    /// Whether the trailing digit equals the calculated check digit.
    pub valid: bool,
    /// The check digit computed from the payload digits.
    pub calculated: Option<u8>,
    /// The trailing digit found in the input.
    pub actual: Option<u8>,
    /// Human-readable explanation of the result.
    pub reason: String,
}

impl CheckDigitOutcome {
    fn rejected(reason: impl Into<String>) -> Self {
        Self {
            valid: false,
            calculated: None,
            actual: None,
            reason: reason.into(),
        }
    }

    fn compared(calculated: u8, actual: u8) -> Self {
        let valid = calculated == actual;
        let reason = if valid {
            "check digit matches calculated value".to_owned()
        } else {
            format!("check digit mismatch: expected {calculated}, got {actual}")
        };
        Self {
            valid,
            calculated: Some(calculated),
            actual: Some(actual),
            reason,
        }
    }
}

/// Computes the GS1 modulo-10 check digit for a numeric payload.
///
/// The payload is every digit of the key except the check digit itself.
/// Weights alternate 3, 1, 3, … starting from the rightmost payload digit, so
/// the same function serves GTIN-8 (7-digit payload) through SSCC (17-digit
/// payload).  For a 12-digit payload this is the familiar GTIN-13 rule where
/// odd positions from the left weigh 1 and even positions weigh 3.
///
/// Returns `None` if `payload` is empty or contains anything other than ASCII
/// digits.
///
/// # Examples
///
/// ```
/// use gs1id_core::check_digits::gs1_check_digit;
///
/// assert_eq!(gs1_check_digit("400638133393"), Some(1));
/// assert_eq!(gs1_check_digit("40063813339X"), None);
/// ```
pub fn gs1_check_digit(payload: &str) -> Option<u8> {
    let bytes = payload.as_bytes();
    if bytes.is_empty() || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }

    let mut sum: u32 = 0;
    for (i, byte) in bytes.iter().rev().enumerate() {
        let digit = u32::from(byte - b'0');
        let weight: u32 = if i % 2 == 0 { 3 } else { 1 };
        // Reduced on every step so arbitrarily long payloads cannot overflow.
        sum = (sum + digit * weight) % 10;
    }

    let check = (10 - sum) % 10;
    u8::try_from(check).ok()
}

/// Verifies the trailing check digit of a numeric GS1 key of any length.
///
/// The input must be at least two ASCII digits (one payload digit plus the
/// check digit).  Anything else is rejected with `valid: false`.
pub fn verify_gs1_check_digit(value: &str) -> CheckDigitOutcome {
    let bytes = value.as_bytes();
    if bytes.len() < 2 {
        return CheckDigitOutcome::rejected(
            "input must contain at least one payload digit and a check digit",
        );
    }
    if !bytes.iter().all(u8::is_ascii_digit) {
        return CheckDigitOutcome::rejected("input must contain only digits 0-9");
    }

    let (payload, check) = value.split_at(value.len() - 1);
    let Some(calculated) = gs1_check_digit(payload) else {
        return CheckDigitOutcome::rejected("input must contain only digits 0-9");
    };
    let actual = check.as_bytes()[0] - b'0';
    CheckDigitOutcome::compared(calculated, actual)
}

/// Verifies the check digit of a GTIN-13 (also applied to GLN).
///
/// **Pre-condition enforced here:** the input must be exactly 13 ASCII
/// digits.  Anything else yields `valid: false` with a reason.
///
/// # Algorithm
///
/// Positions are numbered 1 to 13 from the left.  Positions 1, 3, …, 11 carry
/// weight 1 and positions 2, 4, …, 12 carry weight 3.  The check digit is
/// `(10 - (sum mod 10)) mod 10` and must equal the digit at position 13.
///
/// # Examples
///
/// ```
/// use gs1id_core::check_digits::verify_gtin13_check_digit;
///
/// assert!(verify_gtin13_check_digit("4006381333931").valid);
/// assert!(!verify_gtin13_check_digit("4006381333932").valid);
/// ```
pub fn verify_gtin13_check_digit(value: &str) -> CheckDigitOutcome {
    let bytes = value.as_bytes();
    if bytes.len() != 13 || !bytes.iter().all(u8::is_ascii_digit) {
        return CheckDigitOutcome::rejected(
            "input must be a 13-digit numeric string for GTIN-13 check digit validation",
        );
    }

    let mut sum: u32 = 0;
    for (i, byte) in bytes[..12].iter().enumerate() {
        let digit = u32::from(byte - b'0');
        let weight: u32 = if i % 2 == 1 { 3 } else { 1 };
        sum += digit * weight;
    }

    let calculated = (10 - (sum % 10)) % 10;
    let actual = bytes[12] - b'0';
    match u8::try_from(calculated) {
        Ok(calculated) => CheckDigitOutcome::compared(calculated, actual),
        Err(_) => CheckDigitOutcome::rejected("check digit arithmetic overflowed"),
    }
}

/// Returns `true` if `value` is a numeric GS1 key with a correct check digit.
///
/// Convenience wrapper over [`verify_gs1_check_digit`].
///
/// ```
/// use gs1id_core::check_digits::gs1_mod10;
///
/// assert!(gs1_mod10("0614141000418"));
/// assert!(!gs1_mod10("0614141000419"));
/// ```
pub fn gs1_mod10(value: &str) -> bool {
    verify_gs1_check_digit(value).valid
}
