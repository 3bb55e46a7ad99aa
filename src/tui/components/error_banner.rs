//! # ErrorBanner Component
//!
//! Red bordered box for validation and division-by-zero messages.
//! Only rendered while `Calculator::error` is set.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Paragraph};

use crate::tui::component::Component;

pub struct ErrorBanner<'a> {
    pub message: &'a str,
}

impl Component for ErrorBanner<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = Style::default().fg(Color::Red);
        let paragraph = Paragraph::new(format!("⚠ {}", self.message))
            .style(style.add_modifier(Modifier::BOLD))
            .block(Block::bordered().title("Error").border_style(style));
        frame.render_widget(paragraph, area);
    }
}
