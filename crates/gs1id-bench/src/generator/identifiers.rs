//! Per-type identifier generators with valid GS1 check digits.
//!
//! Check digits are computed here independently of `gs1id-core` so the
//! generator can serve as a cross-check of the validator.

use gs1id_core::IdentifierType;
use rand::Rng;
use rand::rngs::StdRng;

const ALPHANUM: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Accepted GTIN lengths.
const GTIN_LENGTHS: [usize; 4] = [8, 12, 13, 14];

/// Generates a value for `identifier_type` that passes both rule profiles.
pub fn gen_identifier(rng: &mut StdRng, identifier_type: IdentifierType) -> String {
    match identifier_type {
        IdentifierType::Gtin => {
            let len = GTIN_LENGTHS[rng.gen_range(0..GTIN_LENGTHS.len())];
            gen_numeric_key(rng, len)
        }
        IdentifierType::Gln => gen_numeric_key(rng, 13),
        IdentifierType::Sscc | IdentifierType::Gsrn => gen_numeric_key(rng, 18),
        IdentifierType::Grai => gen_alphanumeric(rng, 14, 30),
        IdentifierType::Giai => gen_alphanumeric(rng, 11, 30),
        IdentifierType::Gdti => gen_gdti(rng),
        IdentifierType::Other => gen_other(rng),
    }
}

/// Breaks a generated value so the extended rule profile rejects it.
///
/// - numeric keys: the check digit is changed
/// - GDTI: the base check digit (13th character) is changed
/// - GRAI, GIAI: truncated below the minimum length
/// - OTHER: an underscore is inserted
pub fn corrupt(rng: &mut StdRng, identifier_type: IdentifierType, value: &str) -> String {
    match identifier_type {
        IdentifierType::Gtin
        | IdentifierType::Gln
        | IdentifierType::Sscc
        | IdentifierType::Gsrn => {
            let last = value.chars().count().saturating_sub(1);
            shift_digit(rng, value, last)
        }
        IdentifierType::Gdti => shift_digit(rng, value, 12),
        IdentifierType::Grai => value.chars().take(rng.gen_range(1..14)).collect(),
        IdentifierType::Giai => value.chars().take(rng.gen_range(1..11)).collect(),
        IdentifierType::Other => {
            let pos = rng.gen_range(0..=value.len());
            let (head, tail) = value.split_at(pos);
            format!("{head}_{tail}")
        }
    }
}

/// Generates a numeric key of `len` digits ending in its GS1 check digit.
pub fn gen_numeric_key(rng: &mut StdRng, len: usize) -> String {
    let body: Vec<u8> = (0..len.saturating_sub(1))
        .map(|_| rng.gen_range(0u8..10))
        .collect();
    let check = mod10_check_digit(&body);
    body.iter()
        .map(|d| (b'0' + d) as char)
        .chain(std::iter::once((b'0' + check) as char))
        .collect()
}

/// GS1 modulo-10: weight 3 on the digit next to the check digit, alternating
/// with 1 towards the left.
fn mod10_check_digit(body: &[u8]) -> u8 {
    let mut sum: u32 = 0;
    for (i, &digit) in body.iter().rev().enumerate() {
        let weight: u32 = if i % 2 == 0 { 3 } else { 1 };
        sum += u32::from(digit) * weight;
    }
    ((10 - (sum % 10)) % 10) as u8
}

fn gen_alphanumeric(rng: &mut StdRng, min: usize, max: usize) -> String {
    let len = rng.gen_range(min..=max);
    (0..len)
        .map(|_| ALPHANUM[rng.gen_range(0..ALPHANUM.len())] as char)
        .collect()
}

/// A valid 13-digit base followed by an optional alphanumeric serial of up
/// to 17 characters.
fn gen_gdti(rng: &mut StdRng) -> String {
    let base = gen_numeric_key(rng, 13);
    let serial_len = rng.gen_range(0..=17);
    let serial: String = (0..serial_len)
        .map(|_| ALPHANUM[rng.gen_range(0..ALPHANUM.len())] as char)
        .collect();
    format!("{base}{serial}")
}

/// Alphanumeric segments joined by hyphens, 5-30 characters in total.
fn gen_other(rng: &mut StdRng) -> String {
    let mut value = gen_alphanumeric(rng, 5, 30);
    if value.len() > 6 && rng.gen_bool(0.5) {
        let pos = rng.gen_range(1..value.len() - 1);
        value.replace_range(pos..=pos, "-");
    }
    value
}

/// Replaces the digit at char index `pos` with a different digit.
fn shift_digit(rng: &mut StdRng, value: &str, pos: usize) -> String {
    let delta = rng.gen_range(1u32..10);
    value
        .chars()
        .enumerate()
        .map(|(i, c)| match c.to_digit(10) {
            Some(d) if i == pos => char::from_digit((d + delta) % 10, 10).unwrap_or(c),
            Some(_) | None => c,
        })
        .collect()
}
