use crate::core::state::{Calculator, Field};
use crate::tui::component::Component;
use crate::tui::components::{ButtonRow, ErrorBanner, NumberField, ResultPanel, TitleBar};
use crate::tui::{Focus, TuiState};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

const FIELD_HEIGHT: u16 = 3;
const BUTTON_ROW_HEIGHT: u16 = 4;
const ERROR_HEIGHT: u16 = 3;

pub fn draw_ui(frame: &mut Frame, app: &Calculator, tui: &TuiState) {
    use Constraint::{Length, Min};

    let error_height = if app.error.is_some() { ERROR_HEIGHT } else { 0 };
    let layout = Layout::vertical([
        Length(1),
        Length(FIELD_HEIGHT),
        Length(FIELD_HEIGHT),
        Length(BUTTON_ROW_HEIGHT),
        Length(error_height),
        Min(0),
    ]);
    let [title_area, a_area, b_area, button_area, error_area, result_area] =
        layout.areas(frame.area());

    TitleBar::new(focus_hint(tui.focus).to_string()).render(frame, title_area);

    for (field, area) in [(Field::A, a_area), (Field::B, b_area)] {
        NumberField::new(field, app.input(field), tui.focus == Focus::Field(field))
            .render(frame, area);
    }

    ButtonRow::new(tui.focus.button()).render(frame, button_area);

    if let Some(message) = app.error.as_deref() {
        ErrorBanner { message }.render(frame, error_area);
    }

    ResultPanel {
        result: app.result,
        has_error: app.error.is_some(),
        input_a: &app.input_a,
        decimal_places: tui.decimal_places,
    }
    .render(frame, result_area);
}

fn focus_hint(focus: Focus) -> &'static str {
    match focus {
        Focus::Field(_) => "Enter: calculate · Tab: next · F1-F3: run · ^L: clear · Esc: quit",
        Focus::Button(_) => "Enter: press · Tab: next · Shift+Tab: back · Esc: quit",
    }
}
