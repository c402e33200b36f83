// src/ui/widgets/loading.rs

use ratatui::{prelude::*, widgets::Paragraph};

/// Shown until the persisted session has been read. Nothing protected is
/// drawn in this state.
pub fn render_loading(frame: &mut Frame, area: Rect) {
    let text = Text::from(vec![
        Line::from("ZeroIntel".bold().cyan()),
        Line::from(""),
        Line::from("Loading...".dark_gray()),
    ]);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), chunks[1]);
}
