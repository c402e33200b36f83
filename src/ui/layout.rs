// src/ui/layout.rs

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Areas of an authenticated screen: navigation tabs on top, the routed
/// content in the middle and key hints at the bottom.
pub struct AppLayout {
    pub nav: Rect,
    pub body: Rect,
    pub footer: Rect,
}

pub fn create_layout(frame_size: Rect) -> AppLayout {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame_size);

    AppLayout {
        nav: main_chunks[0],
        body: main_chunks[1],
        footer: main_chunks[2],
    }
}

/// Areas of a list screen: search box, filter bar, then the result list
/// beside a preview of the selected record.
pub struct ListLayout {
    pub search: Rect,
    pub filters: Rect,
    pub list: Rect,
    pub preview: Rect,
}

pub fn create_list_layout(area: Rect) -> ListLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[2]);

    ListLayout {
        search: rows[0],
        filters: rows[1],
        list: columns[0],
        preview: columns[1],
    }
}

/// A rectangle of the given percentage size centered within `r`.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
