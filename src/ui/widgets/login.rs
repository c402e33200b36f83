// src/ui/widgets/login.rs

use crate::app::{App, LoginField, SPINNER_CHARS};
use crate::ui::layout::centered_rect;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

const MASK: char = '•';

fn field_block(title: &'static str, focused: bool) -> Block<'static> {
    let style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default().borders(Borders::ALL).title(title).border_style(style)
}

/// Renders the sign-in form: phone number, password, error line and the
/// submit hint (or a spinner while the request is in flight).
pub fn render_login(frame: &mut Frame, app: &App, area: Rect) {
    let form = &app.login;
    let popup_area = centered_rect(50, 70, area);

    let outer = Block::default()
        .borders(Borders::ALL)
        .title(" ZeroIntel ")
        .title_alignment(Alignment::Center)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(Clear, popup_area);
    frame.render_widget(outer, popup_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(2), // Heading
            Constraint::Length(3), // Phone number
            Constraint::Length(3), // Password
            Constraint::Length(2), // Error
            Constraint::Length(1), // Submit
            Constraint::Min(0),    // Key hints
        ])
        .split(popup_area);

    let heading = Text::from(vec![
        Line::from("Access Threat Intelligence Platform".bold()),
        Line::from("Sign in to continue".dark_gray()),
    ]);
    frame.render_widget(Paragraph::new(heading).alignment(Alignment::Center), chunks[0]);

    let phone_focused = form.focus == LoginField::PhoneNumber;
    let phone = Paragraph::new(form.phone_number.as_str())
        .block(field_block("Phone Number", phone_focused))
        .style(Style::default().fg(Color::Yellow));
    frame.render_widget(phone, chunks[1]);

    let password_text = if form.show_password {
        form.password.clone()
    } else {
        MASK.to_string().repeat(form.password.chars().count())
    };
    let password_title = if form.show_password { "Password (visible)" } else { "Password" };
    let password = Paragraph::new(password_text.as_str())
        .block(field_block(password_title, !phone_focused))
        .style(Style::default().fg(Color::Yellow));
    frame.render_widget(password, chunks[2]);

    if let Some(error) = &form.error {
        let error = Paragraph::new(error.as_str())
            .style(Style::default().fg(Color::Red))
            .wrap(Wrap { trim: true })
            .alignment(Alignment::Center);
        frame.render_widget(error, chunks[3]);
    }

    let submit = if form.in_flight {
        Line::from(vec![
            Span::styled(SPINNER_CHARS[app.spinner_frame], Style::default().fg(Color::Cyan)),
            Span::raw(" Authenticating..."),
        ])
    } else if form.can_submit() {
        Line::from("[ Sign In ]".bold().green())
    } else {
        Line::from("[ Sign In ]".dark_gray())
    };
    frame.render_widget(Paragraph::new(submit).alignment(Alignment::Center), chunks[4]);

    let hints = Line::from(vec![
        Span::styled("Tab", Style::new().bold().fg(Color::Yellow)),
        Span::raw(" switch field  "),
        Span::styled("Ctrl+R", Style::new().bold().fg(Color::Yellow)),
        Span::raw(" show/hide  "),
        Span::styled("Enter", Style::new().bold().fg(Color::Yellow)),
        Span::raw(" sign in  "),
        Span::styled("Esc", Style::new().bold().fg(Color::Yellow)),
        Span::raw(" quit"),
    ]);
    frame.render_widget(
        Paragraph::new(hints).alignment(Alignment::Center).wrap(Wrap { trim: true }),
        chunks[5],
    );

    if !form.in_flight {
        let (target, len) = match form.focus {
            LoginField::PhoneNumber => (chunks[1], form.phone_number.chars().count()),
            LoginField::Password => (chunks[2], form.password.chars().count()),
        };
        frame.set_cursor_position((target.x + len as u16 + 1, target.y + 1));
    }
}
