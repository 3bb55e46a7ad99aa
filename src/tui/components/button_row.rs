//! # ButtonRow Component
//!
//! The four action buttons, laid out side by side. Each button shows its
//! label, a short description, and its function-key shortcut. The focused
//! button is highlighted; Enter on it runs the button's `Action`.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::core::action::Action;
use crate::tui::component::Component;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Arithmetic,
    SumOfSquares,
    EvenOdd,
    Clear,
}

impl Button {
    pub const ALL: [Button; 4] = [
        Button::Arithmetic,
        Button::SumOfSquares,
        Button::EvenOdd,
        Button::Clear,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Button::Arithmetic => "Calculate Result",
            Button::SumOfSquares => "MoD_Sum_square",
            Button::EvenOdd => "Even_ODD",
            Button::Clear => "Clear All",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Button::Arithmetic => "(a+b)/(a-b)*(a+b)",
            Button::SumOfSquares => "Sum of squares of digits",
            Button::EvenOdd => "Even or odd",
            Button::Clear => "Reset everything",
        }
    }

    pub fn shortcut(&self) -> &'static str {
        match self {
            Button::Arithmetic => "F1",
            Button::SumOfSquares => "F2",
            Button::EvenOdd => "F3",
            Button::Clear => "^L",
        }
    }

    pub fn action(&self) -> Action {
        match self {
            Button::Arithmetic => Action::ComputeArithmetic,
            Button::SumOfSquares => Action::ComputeSumOfSquares,
            Button::EvenOdd => Action::ComputeEvenOdd,
            Button::Clear => Action::ClearAll,
        }
    }

    fn color(&self) -> Color {
        match self {
            Button::Arithmetic => Color::Green,
            Button::SumOfSquares => Color::Magenta,
            Button::EvenOdd => Color::Blue,
            Button::Clear => Color::Red,
        }
    }
}

pub struct ButtonRow {
    /// Which button has focus, if any.
    pub focused: Option<Button>,
}

impl ButtonRow {
    pub fn new(focused: Option<Button>) -> Self {
        Self { focused }
    }
}

impl Component for ButtonRow {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let areas = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(area);

        for (button, button_area) in Button::ALL.iter().zip(areas.iter()) {
            let focused = self.focused == Some(*button);
            let border_style = if focused {
                Style::default().fg(button.color()).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(button.color()).add_modifier(Modifier::DIM)
            };
            let label_style = if focused {
                Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };

            let block = Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(border_style)
                .title(format!(" {} ", button.shortcut()));

            let lines = vec![
                Line::styled(button.label(), label_style),
                Line::styled(button.description(), Style::default().fg(Color::DarkGray)),
            ];

            frame.render_widget(
                Paragraph::new(lines)
                    .alignment(Alignment::Center)
                    .block(block),
                *button_area,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_button_actions() {
        assert_eq!(Button::Arithmetic.action(), Action::ComputeArithmetic);
        assert_eq!(Button::SumOfSquares.action(), Action::ComputeSumOfSquares);
        assert_eq!(Button::EvenOdd.action(), Action::ComputeEvenOdd);
        assert_eq!(Button::Clear.action(), Action::ClearAll);
    }

    #[test]
    fn test_render_shows_all_labels() {
        let backend = TestBackend::new(120, 4);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut row = ButtonRow::new(Some(Button::EvenOdd));

        terminal.draw(|f| row.render(f, f.area())).unwrap();

        let text = buffer_text(terminal.backend().buffer());
        for button in Button::ALL {
            assert!(text.contains(button.label()), "missing {}", button.label());
        }
        assert!(text.contains("F2"));
    }
}
