// src/ui/widgets/detail.rs

use crate::app::App;
use crate::core::presentation::{format_date, format_thousands, related_articles, time_ago};
use crate::ui::widgets::rows::{RowView, severity_badge};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, Paragraph, Wrap},
};

fn render_not_found(frame: &mut Frame, area: Rect) {
    let text = Text::from(vec![
        Line::from(""),
        Line::from("Article Not Found".bold().red()),
        Line::from(""),
        Line::from("The article you're looking for doesn't exist or has been removed."),
        Line::from(""),
        Line::from(vec![
            Span::raw("Press "),
            Span::styled("Esc", Style::new().bold().fg(Color::Yellow)),
            Span::raw(" to go back to News."),
        ]),
    ]);
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

/// Full article view with up to three related articles underneath.
pub fn render_article(frame: &mut Frame, app: &mut App, id: &str, area: Rect) {
    let Some(article) = app.data.article(id) else {
        render_not_found(frame, area);
        return;
    };
    let now = app.now;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(5)])
        .split(area);

    let dim = Style::default().fg(Color::DarkGray);
    let mut lines = vec![
        Line::from(vec![
            severity_badge(article.severity),
            Span::raw(" "),
            Span::styled(article.category.label(), Style::default().fg(Color::Cyan)),
            Span::styled(format!("  {}", time_ago(article.published_at, now)), dim),
        ]),
        Line::from(""),
        Line::from(article.title.bold()),
        Line::from(""),
        Line::from(article.summary.italic()),
        Line::from(""),
        Line::from(vec![
            Span::styled("By ", dim),
            Span::raw(article.author),
            Span::styled(format!(" · {} · ", format_date(article.published_at)), dim),
            Span::raw(format!("{} views", format_thousands(article.views))),
            Span::styled(format!(" · {}", article.source), dim),
        ]),
        Line::from(""),
    ];
    lines.extend(article.content.split('\n').map(Line::from));
    lines.push(Line::from(""));
    lines.push(Line::from(
        article
            .tags
            .iter()
            .map(|t| Span::styled(format!("#{} ", t), Style::default().fg(Color::Cyan)))
            .collect::<Vec<_>>(),
    ));

    let body = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Article"));
    frame.render_widget(body, chunks[0]);

    let related = related_articles(app.data.articles, article);
    let items: Vec<_> = related.iter().map(|a| a.row(now)).collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Related Articles"))
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, chunks[1], &mut app.related_state);
}
