// src/main.rs

use color_eyre::eyre::Result;
use crossterm::{
    ExecutableCommand,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use std::io::{Stdout, stdout};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info};

mod app;
mod config;
mod core;
mod logging;
mod ui;

use crate::app::{App, ListPage, LoginResult};
use crate::config::Config;
use crate::core::auth::AuthGateway;
use crate::core::listing::Listing;
use crate::core::mock_data::MockDataStore;
use crate::core::presentation::related_articles;
use crate::core::router::{GuardDecision, Route};
use crate::core::session::{FileStorage, SessionStore};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let report_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        report_panic(info);
    }));

    let (config, config_file) = Config::load()?;
    logging::initialize_logging(&config.data_dir)?;
    match &config_file {
        Some(path) => info!(path = %path.display(), "Loaded config file."),
        None => info!("No config file, using defaults."),
    }
    info!(endpoint = %config.login_endpoint, data_dir = %config.data_dir.display(), "Starting.");

    let session = SessionStore::new(FileStorage::new(&config.data_dir, &config.session_key));
    let gateway = AuthGateway::new(config.login_endpoint.clone(), config.request_timeout())?;
    let mut app = App::new(MockDataStore::load(), session, gateway);

    // --- Setup ---
    stdout().execute(EnterAlternateScreen)?;
    enable_raw_mode()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.clear()?;

    let result = run(&mut terminal, &mut app, config.tick_rate()).await;

    restore_terminal()?;

    if let Err(e) = &result {
        error!(error = %e, "Exited with error.");
    }
    result
}

fn restore_terminal() -> std::io::Result<()> {
    stdout().execute(LeaveAlternateScreen)?;
    disable_raw_mode()
}

async fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    tick_rate: Duration,
) -> Result<()> {
    let (tx, mut rx) = mpsc::channel(1);

    // The first frame is the loading placeholder; the session is read after it.
    terminal.draw(|frame| ui::render(app, frame))?;
    app.hydrate();

    while !app.should_quit {
        terminal.draw(|frame| ui::render(app, frame))?;

        if event::poll(tick_rate)? {
            handle_events(app, &tx)?;
        }

        if let Ok(result) = rx.try_recv() {
            app.finish_login(result);
        }

        app.on_tick();
    }
    Ok(())
}

fn handle_events(app: &mut App, tx: &mpsc::Sender<LoginResult>) -> Result<()> {
    if let Event::Key(key) = event::read()? {
        if key.kind == KeyEventKind::Press {
            match app.decision() {
                GuardDecision::Render(Route::Login) => handle_login_input(app, key, tx),
                GuardDecision::Render(route) => handle_screen_input(app, &route, key.code),
                GuardDecision::Placeholder | GuardDecision::Redirect { .. } => {
                    if key.code == KeyCode::Char('q') {
                        app.quit();
                    }
                }
            }
        }
    }
    Ok(())
}

fn handle_login_input(app: &mut App, key: KeyEvent, tx: &mpsc::Sender<LoginResult>) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if key.code == KeyCode::Char('r') {
            app.login.toggle_password_visibility();
        }
        return;
    }
    match key.code {
        KeyCode::Esc => app.quit(),
        KeyCode::Tab | KeyCode::BackTab => app.login.toggle_focus(),
        _ if app.login.in_flight => {}
        KeyCode::Char(c) => app.login.push_char(c),
        KeyCode::Backspace => app.login.backspace(),
        KeyCode::Enter => {
            let Some(submission) = app.begin_login() else { return };
            let gateway = app.gateway.clone();
            let tx_clone = tx.clone();
            tokio::spawn(async move {
                let outcome = gateway
                    .authenticate(&submission.identifier, &submission.secret)
                    .await;
                let result = LoginResult { identifier: submission.identifier, outcome };
                let _ = tx_clone.send(result).await;
            });
        }
        _ => {}
    }
}

/// Screen keys first; whatever a screen leaves unhandled falls through to
/// the global keys.
fn handle_screen_input(app: &mut App, route: &Route, key_code: KeyCode) {
    let handled = match route {
        Route::Home => handle_home_input(app, key_code),
        Route::News => match handle_list_input(&mut app.news, app.data.articles, key_code) {
            ListAction::Open(article) => {
                app.open_article(article);
                true
            }
            action => action.is_handled(),
        },
        Route::Vulnerabilities => {
            handle_list_input(&mut app.vulnerabilities, app.data.vulnerabilities, key_code)
                .is_handled()
        }
        Route::Breaches => {
            handle_list_input(&mut app.breaches, app.data.breaches, key_code).is_handled()
        }
        Route::Intelligence => {
            handle_list_input(&mut app.intelligence, app.data.intel_reports, key_code).is_handled()
        }
        Route::Article(id) => handle_article_input(app, id, key_code),
        Route::Login => false,
    };
    if !handled {
        handle_global_input(app, key_code);
    }
}

fn handle_global_input(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('L') => app.logout(),
        KeyCode::Char(c @ '1'..='5') => {
            let index = c as usize - '1' as usize;
            app.navigate(Route::DESTINATIONS[index].clone());
        }
        _ => {}
    }
}

fn handle_home_input(app: &mut App, key_code: KeyCode) -> bool {
    let featured = app.featured();
    match key_code {
        KeyCode::Up => app::select_previous(&mut app.home_state, featured.len()),
        KeyCode::Down => app::select_next(&mut app.home_state, featured.len()),
        KeyCode::Enter => {
            if let Some(article) = app.home_state.selected().and_then(|i| featured.get(i)) {
                app.open_article(article);
            }
        }
        _ => return false,
    }
    true
}

fn handle_article_input(app: &mut App, id: &str, key_code: KeyCode) -> bool {
    let related = app
        .data
        .article(id)
        .map(|article| related_articles(app.data.articles, article))
        .unwrap_or_default();
    match key_code {
        KeyCode::Esc | KeyCode::Char('b') => app.navigate(Route::News),
        KeyCode::Up => app::select_previous(&mut app.related_state, related.len()),
        KeyCode::Down => app::select_next(&mut app.related_state, related.len()),
        KeyCode::Enter => {
            if let Some(article) = app.related_state.selected().and_then(|i| related.get(i)) {
                app.open_article(article);
            }
        }
        _ => return false,
    }
    true
}

enum ListAction<R: 'static> {
    Handled,
    Ignored,
    Open(&'static R),
}

impl<R: 'static> ListAction<R> {
    fn is_handled(&self) -> bool {
        !matches!(self, ListAction::Ignored)
    }
}

fn handle_list_input<R: Listing>(
    page: &mut ListPage<R>,
    records: &'static [R],
    key_code: KeyCode,
) -> ListAction<R> {
    if page.searching {
        match key_code {
            KeyCode::Char(c) => page.type_char(c),
            KeyCode::Backspace => page.backspace(),
            KeyCode::Esc | KeyCode::Enter => page.searching = false,
            _ => {}
        }
        return ListAction::Handled;
    }

    match key_code {
        KeyCode::Char('/') => page.searching = true,
        KeyCode::Left => page.previous_control(),
        KeyCode::Right => page.next_control(),
        KeyCode::Char(' ') => page.cycle_focused_control(records),
        KeyCode::Char('s') => page.cycle_sort(),
        KeyCode::Char('r') => page.reset(),
        KeyCode::Up => page.select_previous(page.view(records).len()),
        KeyCode::Down => page.select_next(page.view(records).len()),
        KeyCode::Enter => {
            return match page.selected(records) {
                Some(record) => ListAction::Open(record),
                None => ListAction::Handled,
            };
        }
        _ => return ListAction::Ignored,
    }
    ListAction::Handled
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::signed_in_app;
    use pretty_assertions::assert_eq;

    fn press(app: &mut App, key_code: KeyCode) {
        if let GuardDecision::Render(route) = app.decision() {
            handle_screen_input(app, &route, key_code);
        }
    }

    #[test]
    fn esc_leaves_missing_article_for_news() {
        let (mut app, _dir) = signed_in_app();
        app.navigate(Route::Article("42".into()));
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.navigator.current(), &Route::News);
    }

    #[test]
    fn b_leaves_article_for_news() {
        let (mut app, _dir) = signed_in_app();
        app.navigate(Route::Article("1".into()));
        press(&mut app, KeyCode::Char('b'));
        assert_eq!(app.navigator.current(), &Route::News);
    }

    #[test]
    fn enter_on_news_opens_selected_article() {
        let (mut app, _dir) = signed_in_app();
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.navigator.current(), &Route::News);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        // Newest first: article 1 leads the default view.
        assert_eq!(app.navigator.current(), &Route::Article("1".into()));
    }

    #[test]
    fn search_mode_captures_global_keys() {
        let (mut app, _dir) = signed_in_app();
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('/'));
        press(&mut app, KeyCode::Char('q'));
        press(&mut app, KeyCode::Char('3'));
        assert!(!app.should_quit);
        assert_eq!(app.news.criteria.query, "q3");
        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('r'));
        assert!(app.news.criteria.is_default());
        assert_eq!(app.navigator.current(), &Route::News);
    }

    #[test]
    fn logout_key_returns_to_login() {
        let (mut app, _dir) = signed_in_app();
        press(&mut app, KeyCode::Char('4'));
        press(&mut app, KeyCode::Char('L'));
        assert_eq!(app.navigator.current(), &Route::Login);
        assert!(app.session.current().is_none());
    }
}
