//! # NumberField Component
//!
//! One labelled text box for Number A or Number B.
//!
//! The text itself lives in core state (`Calculator::input_a` / `input_b`)
//! because Clear All has to reset it. The field only renders the text it is
//! given and turns key presses into `FieldEvent`s for the event loop to
//! forward as `Action`s.
//!
//! Only characters that can appear in a decimal number are accepted
//! (`0-9 . - + e E`). Anything else is dropped before it reaches state.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::core::state::Field;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, PartialEq)]
pub enum FieldEvent {
    Insert(char),
    /// Pasted text, already filtered down to accepted characters.
    Paste(String),
    Backspace,
    /// Enter pressed inside the field.
    Submit,
}

pub struct NumberField<'a> {
    pub field: Field,
    pub text: &'a str,
    pub focused: bool,
}

impl<'a> NumberField<'a> {
    pub fn new(field: Field, text: &'a str, focused: bool) -> Self {
        Self { field, text, focused }
    }

    fn placeholder(&self) -> &'static str {
        match self.field {
            Field::A => "Enter first number",
            Field::B => "Enter second number",
        }
    }
}

pub fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E')
}

impl Component for NumberField<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray).add_modifier(Modifier::DIM)
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(format!("{}:", self.field.label()));

        let paragraph = if self.text.is_empty() {
            Paragraph::new(self.placeholder()).style(Style::default().fg(Color::DarkGray))
        } else {
            Paragraph::new(self.text)
        };

        frame.render_widget(paragraph.block(block), area);

        if self.focused {
            // Cursor stays inside the right border however long the text is
            let text_width = u16::try_from(self.text.chars().count()).unwrap_or(u16::MAX);
            let max_x = area.x.saturating_add(area.width.saturating_sub(2));
            let cursor_x = area.x.saturating_add(1).saturating_add(text_width).min(max_x);
            frame.set_cursor_position((cursor_x, area.y.saturating_add(1)));
        }
    }
}

impl EventHandler for NumberField<'_> {
    type Event = FieldEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) if is_number_char(*c) => Some(FieldEvent::Insert(*c)),
            TuiEvent::Paste(text) => {
                let accepted: String = text.trim().chars().filter(|c| is_number_char(*c)).collect();
                (!accepted.is_empty()).then_some(FieldEvent::Paste(accepted))
            }
            TuiEvent::Backspace => (!self.text.is_empty()).then_some(FieldEvent::Backspace),
            TuiEvent::Submit => Some(FieldEvent::Submit),
            _ => None,
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
    fn test_accepts_number_chars_only() {
        let mut field = NumberField::new(Field::A, "", true);
        assert_eq!(
            field.handle_event(&TuiEvent::InputChar('4')),
            Some(FieldEvent::Insert('4'))
        );
        assert_eq!(
            field.handle_event(&TuiEvent::InputChar('-')),
            Some(FieldEvent::Insert('-'))
        );
        assert_eq!(field.handle_event(&TuiEvent::InputChar('x')), None);
        assert_eq!(field.handle_event(&TuiEvent::InputChar(' ')), None);
    }

    #[test]
    fn test_paste_is_filtered() {
        let mut field = NumberField::new(Field::B, "", true);
        assert_eq!(
            field.handle_event(&TuiEvent::Paste(" 1,234.5\n".to_string())),
            Some(FieldEvent::Paste("1234.5".to_string()))
        );
        assert_eq!(field.handle_event(&TuiEvent::Paste("abc".to_string())), None);
    }

    #[test]
    fn test_backspace_only_when_not_empty() {
        let mut empty = NumberField::new(Field::A, "", true);
        assert_eq!(empty.handle_event(&TuiEvent::Backspace), None);

        let mut filled = NumberField::new(Field::A, "12", true);
        assert_eq!(filled.handle_event(&TuiEvent::Backspace), Some(FieldEvent::Backspace));
    }

    #[test]
    fn test_render_shows_label_and_text() {
        let backend = TestBackend::new(30, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut field = NumberField::new(Field::A, "-123", true);

        terminal.draw(|f| field.render(f, f.area())).unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Number A:"));
        assert!(text.contains("-123"));
    }

    #[test]
    fn test_render_placeholder_when_empty() {
        let backend = TestBackend::new(30, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut field = NumberField::new(Field::B, "", false);

        terminal.draw(|f| field.render(f, f.area())).unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Number B:"));
        assert!(text.contains("Enter second number"));
    }

    #[test]
    fn test_cursor_follows_text() {
        let backend = TestBackend::new(30, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut field = NumberField::new(Field::A, "-12", true);

        terminal.draw(|f| field.render(f, f.area())).unwrap();

        assert_eq!(terminal.get_cursor_position().unwrap().x, 4);
    }

    #[test]
    fn test_cursor_clamped_for_text_longer_than_u16() {
        let backend = TestBackend::new(30, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let long = "9".repeat(70_000);
        let mut field = NumberField::new(Field::A, &long, true);

        terminal.draw(|f| field.render(f, f.area())).unwrap();

        assert_eq!(terminal.get_cursor_position().unwrap().x, 28);
    }
}
