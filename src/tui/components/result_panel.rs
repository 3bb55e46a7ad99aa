//! # ResultPanel Component
//!
//! The "Results" region. Shows the one active result as a card:
//!
//! ```text
//! ╭ Results ──────────────────────────╮
//! │╭ Arithmetic Operation ───────────╮│
//! ││Result = (a+b)/(a-b)*(a+b)       ││
//! ││= 8.0000                         ││
//! │╰─────────────────────────────────╯│
//! ╰───────────────────────────────────╯
//! ```
//!
//! With no result and no error it shows a hint instead. With an error and no
//! result it stays empty; the error banner carries the message.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};

use crate::core::state::CalculationResult;
use crate::tui::component::Component;

pub const EMPTY_HINT: &str = "Click any operation button to see results here";

pub struct ResultPanel<'a> {
    pub result: Option<CalculationResult>,
    pub has_error: bool,
    /// Current Number A text, echoed in the single-input cards.
    pub input_a: &'a str,
    pub decimal_places: usize,
}

impl ResultPanel<'_> {
    fn card_lines(&self, result: &CalculationResult) -> Vec<Line<'static>> {
        let formula = match result {
            CalculationResult::Arithmetic(_) => "Result = (a+b)/(a-b)*(a+b)".to_string(),
            CalculationResult::SumOfSquares(_) => {
                format!("Sum of squares of digits of {}", self.input_a)
            }
            CalculationResult::EvenOdd(_) => format!("Number: {}", self.input_a),
        };
        let value = match result {
            CalculationResult::EvenOdd(_) => {
                format!("Result: {}", result.display_value(self.decimal_places))
            }
            _ => format!("= {}", result.display_value(self.decimal_places)),
        };

        vec![
            Line::styled(formula, Style::default().fg(Color::DarkGray)),
            Line::styled(value, Style::default().add_modifier(Modifier::BOLD)),
        ]
    }
}

fn card_color(result: &CalculationResult) -> Color {
    match result {
        CalculationResult::Arithmetic(_) => Color::Green,
        CalculationResult::SumOfSquares(_) => Color::Magenta,
        CalculationResult::EvenOdd(_) => Color::Blue,
    }
}

impl Component for ResultPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let outer = Block::bordered().title("Results");
        let inner = outer.inner(area);
        frame.render_widget(outer, area);

        match self.result {
            Some(ref result) => {
                let [card_area, _] =
                    Layout::vertical([Constraint::Length(4), Constraint::Min(0)]).areas(inner);
                let card = Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(card_color(result)))
                    .title(result.title());
                let paragraph = Paragraph::new(self.card_lines(result))
                    .block(card)
                    .wrap(Wrap { trim: true });
                frame.render_widget(paragraph, card_area);
            }
            None if !self.has_error => {
                let hint = Paragraph::new(EMPTY_HINT)
                    .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC));
                frame.render_widget(hint, inner);
            }
            None => {}
        }
    }
}
