// src/ui/widgets/list_view.rs

use crate::app::ListPage;
use crate::core::listing::Listing;
use crate::ui::layout::create_list_layout;
use crate::ui::widgets::rows::RowView;
use chrono::{DateTime, Utc};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, Paragraph, Wrap},
};

/// Renders one filterable list screen. The visible set is re-derived from
/// `records` and the page's criteria on every draw.
pub fn render_list<R: Listing + RowView>(
    frame: &mut Frame,
    page: &mut ListPage<R>,
    records: &'static [R],
    now: DateTime<Utc>,
    area: Rect,
) {
    let layout = create_list_layout(area);
    let view = page.view(records);

    // --- Search ---
    let query = page.criteria.query.as_str();
    let search_style = if page.searching {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let search_text = if query.is_empty() && !page.searching {
        Line::from(R::SEARCH_HINT.dark_gray())
    } else {
        Line::from(query.yellow())
    };
    let search = Paragraph::new(search_text).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("{} · Search", R::TITLE))
            .border_style(search_style),
    );
    frame.render_widget(search, layout.search);
    if page.searching {
        frame.set_cursor_position((
            layout.search.x + query.chars().count() as u16 + 1,
            layout.search.y + 1,
        ));
    }

    // --- Filter bar ---
    let mut spans = Vec::new();
    for (i, control) in R::controls(&page.criteria.filters).into_iter().enumerate() {
        let style = if i == page.focused_control {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        } else {
            Style::default().fg(Color::Cyan)
        };
        spans.push(Span::styled(format!(" {}: {} ", control.name, control.value), style));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled(
        format!("Sort: {} ", R::sort_label(page.criteria.sort)),
        Style::default().fg(Color::Magenta),
    ));
    spans.push(Span::styled(
        format!("· {} of {} ", view.len(), records.len()),
        Style::default().fg(Color::DarkGray),
    ));
    let filters = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title("Filters"));
    frame.render_widget(filters, layout.filters);

    // --- Results ---
    if view.is_empty() {
        let empty = Text::from(vec![
            Line::from("No results found".bold()),
            Line::from(""),
            Line::from("Nothing matches the current search and filters.".dark_gray()),
            Line::from(vec![
                Span::raw("Press "),
                Span::styled("r", Style::new().bold().fg(Color::Yellow)),
                Span::raw(" to reset."),
            ]),
        ]);
        let empty = Paragraph::new(empty)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Results"));
        frame.render_widget(empty, layout.list);
        frame.render_widget(
            Block::default().borders(Borders::ALL).title("Preview"),
            layout.preview,
        );
        return;
    }

    if page.list_state.selected().is_some_and(|i| i >= view.len()) {
        page.list_state.select(None);
    }

    let items: Vec<_> = view.iter().map(|r| r.row(now)).collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Results"))
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, layout.list, &mut page.list_state);

    let preview_lines = page
        .list_state
        .selected()
        .and_then(|i| view.get(i))
        .map(|r| r.preview(now))
        .unwrap_or_else(|| vec![Line::from("Select an entry with ↑/↓.".dark_gray())]);
    let preview = Paragraph::new(preview_lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Preview"));
    frame.render_widget(preview, layout.preview);
}
