// src/ui/widgets/footer.rs

use crate::app::App;
use crate::core::router::Route;
use ratatui::{
    prelude::*,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

fn hints(pairs: &[(&'static str, &'static str)]) -> Line<'static> {
    let mut spans = Vec::with_capacity(pairs.len() * 2);
    for (key, action) in pairs {
        spans.push(Span::styled(*key, Style::new().bold().fg(Color::Yellow)));
        spans.push(Span::raw(format!(" {}  ", action)));
    }
    Line::from(spans)
}

/// Renders the footer widget, which displays the keys available on `route`.
pub fn render_footer(frame: &mut Frame, app: &App, route: &Route, area: Rect) {
    let searching = match route {
        Route::News => app.news.searching,
        Route::Vulnerabilities => app.vulnerabilities.searching,
        Route::Breaches => app.breaches.searching,
        Route::Intelligence => app.intelligence.searching,
        _ => false,
    };

    let line = match route {
        _ if searching => hints(&[("Type", "to search"), ("Enter/Esc", "done")]),
        Route::Home => hints(&[
            ("1-5", "screens"),
            ("↑↓", "select"),
            ("Enter", "open"),
            ("L", "logout"),
            ("Q", "quit"),
        ]),
        Route::News => hints(&[
            ("/", "search"),
            ("←→", "filter"),
            ("Space", "cycle"),
            ("S", "sort"),
            ("R", "reset"),
            ("Enter", "open"),
            ("Q", "quit"),
        ]),
        Route::Vulnerabilities | Route::Breaches | Route::Intelligence => hints(&[
            ("/", "search"),
            ("←→", "filter"),
            ("Space", "cycle"),
            ("S", "sort"),
            ("R", "reset"),
            ("↑↓", "select"),
            ("Q", "quit"),
        ]),
        Route::Article(_) => hints(&[
            ("Esc", "back to news"),
            ("↑↓", "related"),
            ("Enter", "open"),
            ("Q", "quit"),
        ]),
        Route::Login => Line::from(""),
    };

    let footer = Paragraph::new(line).alignment(Alignment::Center);
    frame.render_widget(footer, area);
}
