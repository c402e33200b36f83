// src/ui/widgets/home.rs

use crate::app::App;
use crate::core::presentation::{breaking_news, time_ago};
use crate::ui::widgets::rows::{RowView, severity_badge};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, Paragraph, Wrap},
};

fn stat_card(frame: &mut Frame, value: &'static str, label: &'static str, area: Rect) {
    let text = Text::from(vec![
        Line::from(value.bold().cyan()),
        Line::from(label.dark_gray()),
    ]);
    let card = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(card, area);
}

/// The dashboard: headline stats, breaking news, featured articles and
/// trending tags.
pub fn render_home(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Stats
            Constraint::Length(5), // Breaking news
            Constraint::Min(0),    // Featured + trending
        ])
        .split(area);

    // --- Stats ---
    let stats = app.data.stats;
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(chunks[0]);
    stat_card(frame, stats.threats_monitored, "Threats Monitored", cards[0]);
    stat_card(frame, stats.sources, "Intelligence Sources", cards[1]);
    stat_card(frame, stats.daily_updates, "Daily Updates", cards[2]);
    stat_card(frame, stats.active_campaigns, "Active Campaigns", cards[3]);

    // --- Breaking News ---
    let breaking: Vec<Line> = breaking_news(app.data.articles)
        .into_iter()
        .map(|a| {
            Line::from(vec![
                severity_badge(a.severity),
                Span::raw(format!(" {} ", a.title)),
                Span::styled(time_ago(a.published_at, app.now), Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect();
    let breaking_block = Block::default()
        .borders(Borders::ALL)
        .title(Line::from(" BREAKING ".bold().red()))
        .border_style(Style::default().fg(Color::Red));
    frame.render_widget(Paragraph::new(breaking).block(breaking_block), chunks[1]);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(chunks[2]);

    // --- Featured ---
    let now = app.now;
    let items: Vec<_> = app.featured().iter().map(|a| a.row(now)).collect();
    let featured = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Featured Threats"))
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");
    frame.render_stateful_widget(featured, bottom[0], &mut app.home_state);

    // --- Trending ---
    let tags: Vec<Line> = app
        .data
        .trending_tags
        .iter()
        .map(|t| Line::from(Span::styled(format!("#{}", t), Style::default().fg(Color::Cyan))))
        .collect();
    let trending = Paragraph::new(tags)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Trending"));
    frame.render_widget(trending, bottom[1]);
}
