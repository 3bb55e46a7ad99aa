//! # Session State
//!
//! Everything the calculator form remembers between keystrokes.
//!
//! ```text
//! Calculator
//! ├── input_a: String                     // Number A, raw text
//! ├── input_b: String                     // Number B, raw text
//! ├── result: Option<CalculationResult>   // the single active result
//! └── error: Option<String>               // error banner text
//! ```
//!
//! Holding the result as one `Option` of an enum is what makes the three
//! result panels mutually exclusive: setting one replaces the others.
//!
//! State changes only happen through `update(state, action)` in action.rs.

use serde::Serialize;

use crate::core::operations::Parity;

/// Which of the two number fields an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    A,
    B,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::A => "Number A",
            Field::B => "Number B",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "operation", content = "result", rename_all = "snake_case")]
pub enum CalculationResult {
    Arithmetic(f64),
    SumOfSquares(u64),
    EvenOdd(Parity),
}

impl CalculationResult {
    pub fn title(&self) -> &'static str {
        match self {
            CalculationResult::Arithmetic(_) => "Arithmetic Operation",
            CalculationResult::SumOfSquares(_) => "MoD_Sum_square",
            CalculationResult::EvenOdd(_) => "Even_ODD Check",
        }
    }

    /// Value text for display. Only the arithmetic result is affected by
    /// `decimal_places`; the stored value keeps full precision.
    pub fn display_value(&self, decimal_places: usize) -> String {
        match self {
            CalculationResult::Arithmetic(value) => format!("{value:.decimal_places$}"),
            CalculationResult::SumOfSquares(sum) => sum.to_string(),
            CalculationResult::EvenOdd(parity) => parity.to_string(),
        }
    }
}

/// What the result region should show right now.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<'a> {
    /// Nothing computed yet, no error.
    Idle,
    Error(&'a str),
    Result(CalculationResult),
}

#[derive(Debug, Default)]
pub struct Calculator {
    pub input_a: String,
    pub input_b: String,
    pub result: Option<CalculationResult>,
    pub error: Option<String>,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self, field: Field) -> &str {
        match field {
            Field::A => &self.input_a,
            Field::B => &self.input_b,
        }
    }

    pub fn input_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::A => &mut self.input_a,
            Field::B => &mut self.input_b,
        }
    }

    /// The error takes precedence: a failed compute after a successful one
    /// still has the old result stored, but the banner is what the user
    /// asked about last.
    pub fn outcome(&self) -> Outcome<'_> {
        if let Some(ref error) = self.error {
            return Outcome::Error(error);
        }
        match self.result {
            Some(result) => Outcome::Result(result),
            None => Outcome::Idle,
        }
    }

    /// Resets inputs, result, and error to the initial empty state.
    pub fn clear_all(&mut self) {
        self.input_a.clear();
        self.input_b.clear();
        self.result = None;
        self.error = None;
    }
}
