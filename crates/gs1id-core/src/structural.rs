/// Cheap, deterministic shape checks shared by every rule set.
///
/// All predicates are total: they accept any `&str`, including the empty
/// string and non-ASCII text, and never panic.  Lengths are measured in
/// characters, not bytes.
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

// ---------------------------------------------------------------------------
// Regex statics
//
// The pattern is a compile-time literal, so Regex::new never returns Err. The
// fallback chain exists only because the workspace bans expect() and unwrap().
// ---------------------------------------------------------------------------

/// One or more ASCII letters, digits, or hyphens.
static ALNUM_HYPHEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9-]+$").unwrap_or_else(|_| {
        Regex::new("a^").unwrap_or_else(|_| unreachable!("regex engine broken"))
    })
});

/// Returns `true` iff `value` is non-empty and every character is `0` to `9`.
///
/// ```
/// use gs1id_core::structural::is_numeric_only;
///
/// assert!(is_numeric_only("0123"));
/// assert!(!is_numeric_only("12a"));
/// assert!(!is_numeric_only(""));
/// ```
pub fn is_numeric_only(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// Returns `true` iff `value` is non-empty and purely ASCII alphanumeric.
pub fn is_alphanumeric(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_alphanumeric())
}

/// Returns `true` iff `value` is non-empty and contains only ASCII letters,
/// digits, and hyphens.
pub fn is_alphanumeric_or_hyphen(value: &str) -> bool {
    ALNUM_HYPHEN_RE.is_match(value)
}

/// Returns the first character of `value` that is not an ASCII letter, digit,
/// or hyphen.
pub fn first_disallowed_char(value: &str) -> Option<char> {
    value
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '-'))
}

/// Returns the number of Unicode scalar values in `value`, not bytes or UTF-16
/// code units (`"🙂"` counts as 1).
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// The set of lengths a rule accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthSpec {
    /// Exactly this many characters.
    Exactly(usize),
    /// Any of the listed lengths.
    OneOf(&'static [usize]),
    /// Any length in the inclusive range `min..=max`.
    Between(usize, usize),
}

impl LengthSpec {
    /// Returns `true` if `len` is an accepted length.
    pub fn contains(self, len: usize) -> bool {
        match self {
            Self::Exactly(n) => len == n,
            Self::OneOf(set) => set.contains(&len),
            Self::Between(min, max) => (min..=max).contains(&len),
        }
    }
}

impl fmt::Display for LengthSpec {
    /// Renders the accepted lengths: `13`, `8,12,13,14`, or `14-30`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exactly(n) => write!(f, "{n}"),
            Self::OneOf(set) => {
                let parts: Vec<String> = set.iter().map(ToString::to_string).collect();
                f.write_str(&parts.join(","))
            }
            Self::Between(min, max) => write!(f, "{min}-{max}"),
        }
    }
}

/// Returns `true` iff the character count of `value` is accepted by `expected`.
///
/// ```
/// use gs1id_core::structural::{LengthSpec, is_valid_length};
///
/// assert!(is_valid_length("12345678", LengthSpec::OneOf(&[8, 12, 13, 14])));
/// assert!(!is_valid_length("123", LengthSpec::Exactly(13)));
/// assert!(is_valid_length("ABCDE", LengthSpec::Between(5, 30)));
/// ```
pub fn is_valid_length(value: &str, expected: LengthSpec) -> bool {
    expected.contains(char_len(value))
}
