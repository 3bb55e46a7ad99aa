//! # Input Validation
//!
//! Turns the raw text of the two number fields into `f64` values.
//!
//! ```text
//! "12.5"  → Ok(12.5)
//! ""      → Err(MissingInput)
//! "abc"   → Err(InvalidNumber)
//! "inf"   → Err(InvalidNumber)   // parses, but not finite
//! ```
//!
//! Pure functions. The caller decides how to surface the error.

use thiserror::Error;

/// Whether a validation ran over both fields or only Number A.
///
/// The user-facing message differs ("both numbers" vs "a number").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Pair,
    Single,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{}", missing_message(.0))]
    MissingInput(Scope),
    #[error("{}", invalid_message(.0))]
    InvalidNumber(Scope),
}

fn missing_message(scope: &Scope) -> &'static str {
    match scope {
        Scope::Pair => "Please enter both numbers",
        Scope::Single => "Please enter a number",
    }
}

fn invalid_message(scope: &Scope) -> &'static str {
    match scope {
        Scope::Pair => "Please enter valid numbers",
        Scope::Single => "Please enter a valid number",
    }
}

/// Validates both fields. Emptiness is checked on both before parsing either.
pub fn validate_pair(raw_a: &str, raw_b: &str) -> Result<(f64, f64), ValidationError> {
    if raw_a.trim().is_empty() || raw_b.trim().is_empty() {
        return Err(ValidationError::MissingInput(Scope::Pair));
    }
    match (parse_finite(raw_a), parse_finite(raw_b)) {
        (Some(a), Some(b)) => Ok((a, b)),
        _ => Err(ValidationError::InvalidNumber(Scope::Pair)),
    }
}

pub fn validate_single(raw: &str) -> Result<f64, ValidationError> {
    if raw.trim().is_empty() {
        return Err(ValidationError::MissingInput(Scope::Single));
    }
    parse_finite(raw).ok_or(ValidationError::InvalidNumber(Scope::Single))
}

fn parse_finite(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
