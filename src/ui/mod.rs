// src/ui/mod.rs

use crate::app::App;
use crate::core::router::{GuardDecision, Route};
use ratatui::prelude::*;

mod layout;
mod widgets;

pub fn render(app: &mut App, frame: &mut Frame) {
    let area = frame.area();
    let route = match app.decision() {
        GuardDecision::Render(route) => route,
        // A redirect is applied by the navigator before the next draw.
        GuardDecision::Placeholder | GuardDecision::Redirect { .. } => {
            widgets::loading::render_loading(frame, area);
            return;
        }
    };

    if route == Route::Login {
        widgets::login::render_login(frame, app, area);
        return;
    }

    let layout = layout::create_layout(area);
    widgets::nav::render_nav(frame, app, &route, layout.nav);

    let now = app.now;
    match &route {
        Route::Home => widgets::home::render_home(frame, app, layout.body),
        Route::News => {
            widgets::list_view::render_list(frame, &mut app.news, app.data.articles, now, layout.body)
        }
        Route::Vulnerabilities => widgets::list_view::render_list(
            frame,
            &mut app.vulnerabilities,
            app.data.vulnerabilities,
            now,
            layout.body,
        ),
        Route::Breaches => widgets::list_view::render_list(
            frame,
            &mut app.breaches,
            app.data.breaches,
            now,
            layout.body,
        ),
        Route::Intelligence => widgets::list_view::render_list(
            frame,
            &mut app.intelligence,
            app.data.intel_reports,
            now,
            layout.body,
        ),
        Route::Article(id) => widgets::detail::render_article(frame, app, id, layout.body),
        Route::Login => {}
    }

    widgets::footer::render_footer(frame, app, &route, layout.footer);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::{app, signed_in_app};
    use ratatui::backend::TestBackend;

    fn draw(app: &mut App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn placeholder_before_hydration() {
        let (mut app, _dir) = app();
        let screen = draw(&mut app, 80, 24);
        assert!(screen.contains("Loading..."));
        assert!(!screen.contains("Featured Threats"));
    }

    #[test]
    fn unknown_article_renders_not_found_with_way_back() {
        let (mut app, _dir) = signed_in_app();
        app.navigate(Route::Article("42".into()));
        let screen = draw(&mut app, 120, 40);
        assert!(screen.contains("Article Not Found"));
        assert!(screen.contains("to go back to News."));
    }

    #[test]
    fn known_article_renders_title_and_related() {
        let (mut app, _dir) = signed_in_app();
        app.navigate(Route::Article("1".into()));
        let screen = draw(&mut app, 160, 50);
        assert!(screen.contains("Critical Zero-Day Vulnerability"));
        assert!(screen.contains("Related Articles"));
        assert!(!screen.contains("Article Not Found"));
    }

    #[test]
    fn empty_result_offers_reset() {
        let (mut app, _dir) = signed_in_app();
        app.navigate(Route::News);
        for c in "no such threat".chars() {
            app.news.type_char(c);
        }
        let screen = draw(&mut app, 120, 40);
        assert!(screen.contains("No results found"));
        assert!(screen.contains("to reset."));

        app.news.reset();
        let screen = draw(&mut app, 120, 40);
        assert!(!screen.contains("No results found"));
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let (mut app, _dir) = signed_in_app();
        for route in [Route::Home, Route::News, Route::Breaches, Route::Article("42".into())] {
            app.navigate(route);
            draw(&mut app, 5, 3);
        }
        app.logout();
        draw(&mut app, 5, 3);
    }
}
