// src/ui/widgets/nav.rs

use crate::app::App;
use crate::core::router::Route;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Tabs},
};

/// Navigation tabs for the five destinations plus the signed-in identity.
pub fn render_nav(frame: &mut Frame, app: &App, route: &Route, area: Rect) {
    let titles: Vec<Line> = Route::DESTINATIONS
        .iter()
        .enumerate()
        .map(|(i, r)| Line::from(format!("{} {}", i + 1, r.label())))
        .collect();

    // The detail screen lives under News.
    let selected = match route {
        Route::Article(_) => Some(1),
        other => Route::DESTINATIONS.iter().position(|r| r == other),
    };

    let user = app
        .session
        .current()
        .map(|s| s.identifier.clone())
        .unwrap_or_default();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Line::from(" ZeroIntel ".bold().cyan()))
        .title(Line::from(format!(" {} ", user).dark_gray()).right_aligned());

    let tabs = Tabs::new(titles)
        .block(block)
        .select(selected)
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .divider(" | ");
    frame.render_widget(tabs, area);
}
