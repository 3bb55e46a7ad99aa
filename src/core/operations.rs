//! # Operations
//!
//! The three calculator operations plus the primitives they are built from.
//! Everything here is a pure function over validated `f64` values.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Division by zero error: a - b cannot be zero")]
    DivisionByZero,
}

// ── Primitives ──────────────────────────────────────────────────────────────

pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

pub fn divide(a: f64, b: f64) -> Result<f64, DomainError> {
    if b == 0.0 {
        return Err(DomainError::DivisionByZero);
    }
    Ok(a / b)
}

// ── Arithmetic ──────────────────────────────────────────────────────────────

/// `((a + b) / (a - b)) * (a + b)`.
///
/// Fails when `a - b` is exactly zero. There is no epsilon: `0.3` and
/// `0.1 + 0.2` are different numbers and divide fine.
pub fn arithmetic(a: f64, b: f64) -> Result<f64, DomainError> {
    let sum = add(a, b);
    let diff = subtract(a, b);
    let fraction = divide(sum, diff)?;
    Ok(multiply(fraction, sum))
}

// ── Sum of squares ──────────────────────────────────────────────────────────

/// Sum of the squared decimal digits of `|round(value)|`.
pub fn sum_of_squares(value: f64) -> u64 {
    let rounded = round_half_up(value).abs();
    // `{:.0}` never switches to exponent notation, so every char is a digit
    format!("{rounded:.0}")
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| u64::from(d * d))
        .sum()
}

/// Rounds to the nearest integer, ties toward positive infinity
/// (`2.5 → 3`, `-2.5 → -2`). `f64::round` sends ties away from zero instead.
fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 { floor + 1.0 } else { floor }
}

// ── Even / odd ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Parity {
    Even,
    Odd,
    /// The input had a fractional part. Shown as a result, not an error.
    NotAnInteger,
}

impl fmt::Display for Parity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parity::Even => write!(f, "Even"),
            Parity::Odd => write!(f, "Odd"),
            Parity::NotAnInteger => write!(f, "Please enter an integer for even/odd check"),
        }
    }
}

pub fn even_odd(value: f64) -> Parity {
    if value.fract() != 0.0 {
        return Parity::NotAnInteger;
    }
    if value % 2.0 == 0.0 {
        Parity::Even
    } else {
        Parity::Odd
    }
}
