//! CPF identification number validation.
//!
//! # Responsibility
//! - Normalize raw user input into the digits-only storage shape.
//! - Verify the two CPF check digits and reject sentinel values.
//!
//! # Invariants
//! - Every function here is pure and never panics, whatever the input.
//! - `validate_identifier(raw) == check_identifier(raw).is_ok()`.

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Number of digits in a normalized CPF.
pub const IDENTIFIER_LEN: usize = 11;

static NON_DIGIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^0-9]").expect("valid non-digit regex"));

/// First failing rule for an identifier candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierError {
    /// Digit count after normalization is not 11.
    WrongLength { len: usize },
    /// One digit repeated 11 times (`00000000000` .. `99999999999`).
    RepeatedDigit,
    /// Tenth digit does not match the computed first check digit.
    FirstCheckDigit,
    /// Eleventh digit does not match the computed second check digit.
    SecondCheckDigit,
}

impl Display for IdentifierError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WrongLength { len } => {
                write!(f, "identifier must have {IDENTIFIER_LEN} digits, got {len}")
            }
            Self::RepeatedDigit => write!(f, "identifier must not repeat a single digit"),
            Self::FirstCheckDigit => write!(f, "identifier first check digit mismatch"),
            Self::SecondCheckDigit => write!(f, "identifier second check digit mismatch"),
        }
    }
}

impl Error for IdentifierError {}

/// Strips every character that is not an ASCII digit.
pub fn normalize_identifier(raw: &str) -> String {
    NON_DIGIT_RE.replace_all(raw, "").into_owned()
}

/// Returns whether `raw` is a valid CPF once normalized.
pub fn validate_identifier(raw: &str) -> bool {
    check_identifier(raw).is_ok()
}

/// Validates `raw` and reports the first failing rule.
///
/// Rule order: length, repeated digit, first check digit, second check digit.
pub fn check_identifier(raw: &str) -> Result<(), IdentifierError> {
    let digits = to_digits(&normalize_identifier(raw));
    if digits.len() != IDENTIFIER_LEN {
        return Err(IdentifierError::WrongLength { len: digits.len() });
    }
    if digits.iter().all(|digit| *digit == digits[0]) {
        return Err(IdentifierError::RepeatedDigit);
    }
    if check_digit(&digits[..9]) != digits[9] {
        return Err(IdentifierError::FirstCheckDigit);
    }
    if check_digit(&digits[..10]) != digits[10] {
        return Err(IdentifierError::SecondCheckDigit);
    }
    Ok(())
}

/// Renders 11 digits as `000.000.000-00` for display.
///
/// Returns `None` unless `digits` is exactly 11 ASCII digits.
pub fn format_identifier(digits: &str) -> Option<String> {
    if digits.len() != IDENTIFIER_LEN || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(format!(
        "{}.{}.{}-{}",
        &digits[0..3],
        &digits[3..6],
        &digits[6..9],
        &digits[9..11]
    ))
}

fn to_digits(normalized: &str) -> Vec<u32> {
    normalized.chars().filter_map(|c| c.to_digit(10)).collect()
}

// Weights run from `prefix.len() + 1` down to 2. A remainder of 10 maps to 0.
fn check_digit(prefix: &[u32]) -> u32 {
    let top_weight = prefix.len() as u32 + 1;
    let sum: u32 = prefix
        .iter()
        .enumerate()
        .map(|(index, digit)| digit * (top_weight - index as u32))
        .sum();
    match (sum * 10) % 11 {
        10 => 0,
        rest => rest,
    }
}
