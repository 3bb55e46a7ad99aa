//! # Actions
//!
//! Everything that can happen in Tally becomes an `Action`.
//! User types a digit into Number A? That's `Action::InputChar { field: Field::A, ch }`.
//! User presses the MoD_Sum_square button? That's `Action::ComputeSumOfSquares`.
//!
//! The `update()` function takes the current state and an action and mutates
//! the state in place. No I/O here apart from logging.
//!
//! ```text
//! State + Action  →  update()  →  New State (+ Effect)
//! ```
//!
//! Every compute action follows the same shape:
//!
//! ```text
//! clear error → validate → compute ─┬─ Ok  → result = Some(new)   (others gone)
//!                                   └─ Err → error = Some(msg)    (result kept,
//!                                                                  except arithmetic
//!                                                                  on division by zero)
//! ```

use log::debug;
use thiserror::Error;

use crate::core::input::{ValidationError, validate_pair, validate_single};
use crate::core::operations::{self, DomainError};
use crate::core::state::{CalculationResult, Calculator, Field};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetInput { field: Field, text: String },
    InputChar { field: Field, ch: char },
    Backspace { field: Field },
    ComputeArithmetic,
    ComputeSumOfSquares,
    ComputeEvenOdd,
    ClearAll,
    Quit,
}

/// What the caller should do after `update()` returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Domain(#[from] DomainError),
}

pub fn update(app: &mut Calculator, action: Action) -> Effect {
    match action {
        Action::SetInput { field, text } => {
            *app.input_mut(field) = text;
            log_input_change(app, field);
        }
        Action::InputChar { field, ch } => {
            app.input_mut(field).push(ch);
            log_input_change(app, field);
        }
        Action::Backspace { field } => {
            if app.input_mut(field).pop().is_some() {
                log_input_change(app, field);
            }
        }
        Action::ComputeArithmetic => {
            app.error = None;
            match compute_arithmetic(&app.input_a, &app.input_b) {
                Ok(result) => app.result = Some(result),
                Err(e) => {
                    if matches!(e, CalcError::Domain(DomainError::DivisionByZero))
                        && matches!(app.result, Some(CalculationResult::Arithmetic(_)))
                    {
                        app.result = None;
                    }
                    fail(app, e);
                }
            }
        }
        Action::ComputeSumOfSquares => {
            app.error = None;
            match compute_sum_of_squares(&app.input_a) {
                Ok(result) => app.result = Some(result),
                Err(e) => fail(app, e),
            }
        }
        Action::ComputeEvenOdd => {
            app.error = None;
            match compute_even_odd(&app.input_a) {
                Ok(result) => app.result = Some(result),
                Err(e) => fail(app, e),
            }
        }
        Action::ClearAll => {
            debug!("Clearing inputs, result and error");
            app.clear_all();
        }
        Action::Quit => return Effect::Quit,
    }

    if let Some(ref result) = app.result {
        debug!("Active result: {:?}", result);
    }
    Effect::None
}

pub fn compute_arithmetic(raw_a: &str, raw_b: &str) -> Result<CalculationResult, CalcError> {
    let (a, b) = validate_pair(raw_a, raw_b)?;
    let value = operations::arithmetic(a, b)?;
    Ok(CalculationResult::Arithmetic(value))
}

pub fn compute_sum_of_squares(raw: &str) -> Result<CalculationResult, CalcError> {
    let value = validate_single(raw)?;
    Ok(CalculationResult::SumOfSquares(operations::sum_of_squares(value)))
}

pub fn compute_even_odd(raw: &str) -> Result<CalculationResult, CalcError> {
    let value = validate_single(raw)?;
    Ok(CalculationResult::EvenOdd(operations::even_odd(value)))
}

fn fail(app: &mut Calculator, error: CalcError) {
    debug!("Computation failed: {:?}", error);
    app.error = Some(error.to_string());
}

fn log_input_change(app: &Calculator, field: Field) {
    debug!("Input values updated ({}: {:?})", field.label(), app.input(field));
}
