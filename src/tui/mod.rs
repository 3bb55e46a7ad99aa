//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the form,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Focus Ring
//!
//! ```text
//! Number A → Number B → [Calculate] → [Sum_square] → [Even_ODD] → [Clear] ─┐
//!    ▲                                                                      │
//!    └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Typing goes to the focused field. Enter in a field runs the arithmetic
//! operation; Enter on a button presses it. F1-F3 and Ctrl+L work from
//! anywhere.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps up to 500ms per poll and only
//! redraws after an event (key, paste, or resize).

mod component;
pub mod components;
mod event;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::time::Duration;

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::{Calculator, Field};
use crate::tui::component::EventHandler;
use crate::tui::components::{Button, FieldEvent, NumberField};
pub use crate::tui::event::TuiEvent;
use crate::tui::event::{poll_event_immediate, poll_event_timeout};

const IDLE_POLL: Duration = Duration::from_millis(500);

/// Which widget receives typed characters and Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(Field),
    Button(Button),
}

impl Focus {
    const RING: [Focus; 6] = [
        Focus::Field(Field::A),
        Focus::Field(Field::B),
        Focus::Button(Button::Arithmetic),
        Focus::Button(Button::SumOfSquares),
        Focus::Button(Button::EvenOdd),
        Focus::Button(Button::Clear),
    ];

    fn position(self) -> usize {
        Self::RING.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::RING[(self.position() + 1) % Self::RING.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::RING.len();
        Self::RING[(self.position() + len - 1) % len]
    }

    pub fn button(self) -> Option<Button> {
        match self {
            Focus::Button(button) => Some(button),
            Focus::Field(_) => None,
        }
    }
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub focus: Focus,
    pub decimal_places: usize,
}

impl TuiState {
    pub fn new(decimal_places: usize) -> Self {
        Self {
            focus: Focus::Field(Field::A), // User expects to type immediately
            decimal_places,
        }
    }
}

/// Routes one terminal event to the focused component or straight to core.
pub fn handle_event(app: &mut Calculator, tui: &mut TuiState, event: TuiEvent) -> Effect {
    match event {
        TuiEvent::Resize => Effect::None,
        TuiEvent::Quit => update(app, Action::Quit),
        TuiEvent::FocusNext => {
            tui.focus = tui.focus.next();
            Effect::None
        }
        TuiEvent::FocusPrev => {
            tui.focus = tui.focus.prev();
            Effect::None
        }
        TuiEvent::ComputeArithmetic => update(app, Action::ComputeArithmetic),
        TuiEvent::ComputeSumOfSquares => update(app, Action::ComputeSumOfSquares),
        TuiEvent::ComputeEvenOdd => update(app, Action::ComputeEvenOdd),
        TuiEvent::ClearAll => press(app, tui, Button::Clear),
        TuiEvent::InputChar(_) | TuiEvent::Paste(_) | TuiEvent::Backspace | TuiEvent::Submit => {
            match tui.focus {
                Focus::Field(field) => {
                    let field_event =
                        NumberField::new(field, app.input(field), true).handle_event(&event);
                    match field_event {
                        Some(field_event) => edit(app, field, field_event),
                        None => Effect::None,
                    }
                }
                Focus::Button(button) if event == TuiEvent::Submit => press(app, tui, button),
                // Keys other than Enter do nothing on a button
                Focus::Button(_) => Effect::None,
            }
        }
    }
}

fn edit(app: &mut Calculator, field: Field, event: FieldEvent) -> Effect {
    match event {
        FieldEvent::Insert(ch) => update(app, Action::InputChar { field, ch }),
        FieldEvent::Paste(text) => {
            let text = format!("{}{}", app.input(field), text);
            update(app, Action::SetInput { field, text })
        }
        FieldEvent::Backspace => update(app, Action::Backspace { field }),
        FieldEvent::Submit => update(app, Action::ComputeArithmetic),
    }
}

fn press(app: &mut Calculator, tui: &mut TuiState, button: Button) -> Effect {
    debug!("Button pressed: {}", button.label());
    let effect = update(app, button.action());
    if button == Button::Clear {
        tui.focus = Focus::Field(Field::A);
    }
    effect
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,                        // Show cursor for input editing
            SetCursorStyle::SteadyBlock, // Non-blinking: draw() resets the blink timer
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste, SetCursorStyle::DefaultUserShape);
    }
}

pub fn run(config: &ResolvedConfig) -> std::io::Result<()> {
    let mut app = Calculator::new();
    let mut tui = TuiState::new(config.decimal_places);

    let mut terminal = ratatui::init();
    let result = run_loop(&mut terminal, &mut app, &mut tui);
    ratatui::restore();
    result
}

fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut Calculator,
    tui: &mut TuiState,
) -> std::io::Result<()> {
    let _terminal_mode_guard = TerminalModeGuard::new()?;
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app, tui))?;
            needs_redraw = false;
        }

        let Some(first_event) = poll_event_timeout(IDLE_POLL)? else {
            continue;
        };
        needs_redraw = true;

        // Process first event + drain ALL pending events before next draw
        let mut pending = Some(first_event);
        while let Some(event) = pending {
            if handle_event(app, tui, event) == Effect::Quit {
                info!("Quit requested");
                return Ok(());
            }
            pending = poll_event_immediate()?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::operations::Parity;
    use crate::core::state::CalculationResult;

    fn type_str(app: &mut Calculator, tui: &mut TuiState, text: &str) {
        for c in text.chars() {
            handle_event(app, tui, TuiEvent::InputChar(c));
        }
    }

    #[test]
    fn test_focus_ring_wraps() {
        let start = Focus::Field(Field::A);
        let mut focus = start;
        for _ in 0..Focus::RING.len() {
            focus = focus.next();
        }
        assert_eq!(focus, start);
        assert_eq!(start.prev(), Focus::Button(Button::Clear));
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut app = Calculator::new();
        let mut tui = TuiState::new(4);
        type_str(&mut app, &mut tui, "3");
        handle_event(&mut app, &mut tui, TuiEvent::FocusNext);
        type_str(&mut app, &mut tui, "1x");
        assert_eq!(app.input_a, "3");
        assert_eq!(app.input_b, "1");
    }

    #[test]
    fn test_enter_in_field_runs_arithmetic() {
        let mut app = Calculator::new();
        let mut tui = TuiState::new(4);
        type_str(&mut app, &mut tui, "3");
        handle_event(&mut app, &mut tui, TuiEvent::FocusNext);
        type_str(&mut app, &mut tui, "1");
        handle_event(&mut app, &mut tui, TuiEvent::Submit);
        assert_eq!(app.result, Some(CalculationResult::Arithmetic(8.0)));
    }

    #[test]
    fn test_enter_on_button_presses_it() {
        let mut app = Calculator::new();
        let mut tui = TuiState::new(4);
        type_str(&mut app, &mut tui, "8");
        tui.focus = Focus::Button(Button::EvenOdd);
        // Characters are ignored while a button has focus
        type_str(&mut app, &mut tui, "9");
        handle_event(&mut app, &mut tui, TuiEvent::Submit);
        assert_eq!(app.input_a, "8");
        assert_eq!(app.result, Some(CalculationResult::EvenOdd(Parity::Even)));
    }

    #[test]
    fn test_clear_resets_focus() {
        let mut app = Calculator::new();
        let mut tui = TuiState::new(4);
        type_str(&mut app, &mut tui, "12");
        handle_event(&mut app, &mut tui, TuiEvent::ComputeSumOfSquares);
        assert_eq!(app.result, Some(CalculationResult::SumOfSquares(5)));

        tui.focus = Focus::Button(Button::SumOfSquares);
        handle_event(&mut app, &mut tui, TuiEvent::ClearAll);
        assert_eq!(tui.focus, Focus::Field(Field::A));
        assert!(app.input_a.is_empty());
        assert!(app.result.is_none());
    }

    #[test]
    fn test_paste_appends() {
        let mut app = Calculator::new();
        let mut tui = TuiState::new(4);
        type_str(&mut app, &mut tui, "-");
        handle_event(&mut app, &mut tui, TuiEvent::Paste("123".to_string()));
        assert_eq!(app.input_a, "-123");
    }

    #[test]
    fn test_quit() {
        let mut app = Calculator::new();
        let mut tui = TuiState::new(4);
        assert_eq!(handle_event(&mut app, &mut tui, TuiEvent::Quit), Effect::Quit);
    }
}
