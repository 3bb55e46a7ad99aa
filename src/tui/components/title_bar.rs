//! # TitleBar Component
//!
//! Single-line header: app name plus the key hints for whatever has focus.
//!
//! The hint text is a prop. The event loop knows the focus, so it decides
//! what to say; the bar just renders it:
//!
//! 1. **Hint present**: `"Tally: Basic Calculator | Enter: calculate · Tab: next"`
//! 2. **No hint**: `"Tally: Basic Calculator"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar {
    pub hint: String,
}

impl TitleBar {
    pub fn new(hint: String) -> Self {
        Self { hint }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(
            "Tally: Basic Calculator",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )];
        if !self.hint.is_empty() {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                self.hint.as_str(),
                Style::default().fg(Color::DarkGray),
            ));
        }
        frame.render_widget(Line::from(spans), area);
    }
}
