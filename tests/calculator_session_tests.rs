use tally::core::action::{Action, Effect, update};
use tally::core::operations::Parity;
use tally::core::state::{CalculationResult, Calculator, Field, Outcome};
use tally::oneshot::{self, Operation};
use tally::tui::{TuiEvent, TuiState, handle_event};

// ============================================================================
// Helper Functions
// ============================================================================

/// Types text into a field the way the form would, one key at a time.
fn type_into(app: &mut Calculator, field: Field, text: &str) {
    for ch in text.chars() {
        update(app, Action::InputChar { field, ch });
    }
}

// ============================================================================
// Session Flow
// ============================================================================

#[test]
fn test_full_session_through_core_actions() {
    let mut app = Calculator::new();
    assert_eq!(app.outcome(), Outcome::Idle);

    // Missing B
    type_into(&mut app, Field::A, "10");
    update(&mut app, Action::ComputeArithmetic);
    assert_eq!(app.outcome(), Outcome::Error("Please enter both numbers"));
    assert!(app.result.is_none());

    // Valid pair
    type_into(&mut app, Field::B, "4");
    update(&mut app, Action::ComputeArithmetic);
    let expected = ((10.0_f64 + 4.0) / (10.0 - 4.0)) * (10.0 + 4.0);
    assert_eq!(app.outcome(), Outcome::Result(CalculationResult::Arithmetic(expected)));

    // Switching operation replaces the result
    update(&mut app, Action::ComputeSumOfSquares);
    assert_eq!(app.result, Some(CalculationResult::SumOfSquares(1)));

    update(&mut app, Action::ComputeEvenOdd);
    assert_eq!(app.result, Some(CalculationResult::EvenOdd(Parity::Even)));

    // Division by zero only clears an arithmetic result
    update(&mut app, Action::SetInput { field: Field::B, text: "10".into() });
    update(&mut app, Action::ComputeArithmetic);
    assert_eq!(
        app.error.as_deref(),
        Some("Division by zero error: a - b cannot be zero")
    );
    assert_eq!(app.result, Some(CalculationResult::EvenOdd(Parity::Even)));

    assert_eq!(update(&mut app, Action::ClearAll), Effect::None);
    assert_eq!(app.outcome(), Outcome::Idle);
    assert!(app.input_a.is_empty() && app.input_b.is_empty());
}

#[test]
fn test_invalid_text_is_reported_not_computed() {
    let mut app = Calculator::new();
    update(&mut app, Action::SetInput { field: Field::A, text: "abc".into() });
    update(&mut app, Action::SetInput { field: Field::B, text: "1".into() });

    update(&mut app, Action::ComputeArithmetic);
    assert_eq!(app.error.as_deref(), Some("Please enter valid numbers"));

    update(&mut app, Action::ComputeEvenOdd);
    assert_eq!(app.error.as_deref(), Some("Please enter a valid number"));
    assert!(app.result.is_none());
}

// ============================================================================
// Terminal Routing
// ============================================================================

#[test]
fn test_keyboard_driven_session() {
    let mut app = Calculator::new();
    let mut tui = TuiState::new(4);

    for event in [
        TuiEvent::InputChar('-'),
        TuiEvent::InputChar('1'),
        TuiEvent::InputChar('2'),
        TuiEvent::InputChar('3'),
        TuiEvent::ComputeSumOfSquares,
    ] {
        handle_event(&mut app, &mut tui, event);
    }
    assert_eq!(app.result, Some(CalculationResult::SumOfSquares(14)));

    handle_event(&mut app, &mut tui, TuiEvent::Backspace);
    handle_event(&mut app, &mut tui, TuiEvent::Backspace);
    handle_event(&mut app, &mut tui, TuiEvent::Backspace);
    handle_event(&mut app, &mut tui, TuiEvent::InputChar('7'));
    handle_event(&mut app, &mut tui, TuiEvent::ComputeEvenOdd);
    assert_eq!(app.input_a, "-7");
    assert_eq!(app.result, Some(CalculationResult::EvenOdd(Parity::Odd)));

    assert_eq!(handle_event(&mut app, &mut tui, TuiEvent::Quit), Effect::Quit);
}

// ============================================================================
// One-shot Mode
// ============================================================================

#[test]
fn test_oneshot_matches_interactive_rules() {
    let app = oneshot::execute(&Operation::Arithmetic {
        a: "".to_string(),
        b: "2".to_string(),
    });
    let report = oneshot::report(&app, 4, false);
    assert!(report.is_error);
    assert_eq!(report.text, "Please enter both numbers");

    let app = oneshot::execute(&Operation::EvenOdd { a: "8".to_string() });
    let report = oneshot::report(&app, 4, true);
    assert_eq!(report.text, r#"{"operation":"even_odd","result":"Even"}"#);
}

#[test]
fn test_oneshot_decimal_places() {
    let app = oneshot::execute(&Operation::Arithmetic {
        a: "1".to_string(),
        b: "2".to_string(),
    });
    // (3 / -1) * 3
    assert_eq!(oneshot::report(&app, 2, false).text, "-9.00");
}
