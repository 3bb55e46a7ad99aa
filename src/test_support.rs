//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::state::Calculator;

/// Creates a Calculator with both fields pre-filled.
pub fn calculator_with(a: &str, b: &str) -> Calculator {
    Calculator {
        input_a: a.to_string(),
        input_b: b.to_string(),
        ..Calculator::default()
    }
}

/// Flattens a ratatui buffer into one string for `contains` checks.
pub fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    buffer.content().iter().map(|c| c.symbol()).collect()
}
