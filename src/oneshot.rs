//! # One-shot Mode
//!
//! Runs a single operation from the command line and prints the result,
//! without starting the terminal form. Uses the same `update()` path as the
//! TUI so validation and error messages are identical.

use clap::Subcommand;
use log::info;
use serde_json::json;

use crate::core::action::{Action, update};
use crate::core::state::{CalculationResult, Calculator, Field, Outcome};

#[derive(Debug, Clone, Subcommand)]
pub enum Operation {
    /// Compute (a+b)/(a-b)*(a+b)
    Arithmetic {
        #[arg(allow_hyphen_values = true)]
        a: String,
        #[arg(allow_hyphen_values = true)]
        b: String,
    },
    /// Sum of the squared digits of round(|a|)
    SumSquares {
        #[arg(allow_hyphen_values = true)]
        a: String,
    },
    /// Check whether a is even or odd
    EvenOdd {
        #[arg(allow_hyphen_values = true)]
        a: String,
    },
}

/// Text to print and where to print it.
#[derive(Debug, PartialEq)]
pub struct Report {
    pub text: String,
    pub is_error: bool,
}

/// Runs one operation on a fresh session.
pub fn execute(operation: &Operation) -> Calculator {
    let mut app = Calculator::new();
    let (a, b, action) = match operation {
        Operation::Arithmetic { a, b } => (a, Some(b), Action::ComputeArithmetic),
        Operation::SumSquares { a } => (a, None, Action::ComputeSumOfSquares),
        Operation::EvenOdd { a } => (a, None, Action::ComputeEvenOdd),
    };

    update(&mut app, Action::SetInput { field: Field::A, text: a.clone() });
    if let Some(b) = b {
        update(&mut app, Action::SetInput { field: Field::B, text: b.clone() });
    }
    update(&mut app, action);
    info!("One-shot {:?} finished: {:?}", operation, app.outcome());
    app
}

pub fn report(app: &Calculator, decimal_places: usize, as_json: bool) -> Report {
    match app.outcome() {
        Outcome::Result(result) if as_json => Report {
            text: result_json(&result, decimal_places),
            is_error: false,
        },
        Outcome::Result(result) => Report {
            text: result.display_value(decimal_places),
            is_error: false,
        },
        Outcome::Error(message) if as_json => Report {
            text: json!({ "error": message }).to_string(),
            is_error: true,
        },
        Outcome::Error(message) => Report {
            text: message.to_string(),
            is_error: true,
        },
        // Every operation either sets a result or an error
        Outcome::Idle => Report {
            text: String::new(),
            is_error: false,
        },
    }
}

/// JSON has no infinity, so a non-finite arithmetic value is written as its
/// display string instead of `null`.
fn result_json(result: &CalculationResult, decimal_places: usize) -> String {
    match result {
        CalculationResult::Arithmetic(value) if !value.is_finite() => json!({
            "operation": "arithmetic",
            "result": result.display_value(decimal_places),
        })
        .to_string(),
        _ => serde_json::to_string(result)
            .unwrap_or_else(|e| json!({ "error": e.to_string() }).to_string()),
    }
}
