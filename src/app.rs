// src/app.rs

use crate::core::auth::{AuthError, AuthGateway, AuthOutcome, normalize_phone_number};
use crate::core::filter::{Criteria, apply};
use crate::core::listing::Listing;
use crate::core::mock_data::MockDataStore;
use crate::core::models::{Article, Breach, IntelReport, Vulnerability};
use crate::core::router::{GuardDecision, GuardState, Navigator, Route, guard};
use crate::core::session::{SessionStorage, SessionStore};
use chrono::{DateTime, Utc};
use ratatui::widgets::ListState;
use tracing::{debug, info};

pub const SPINNER_CHARS: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// How many articles the home screen features.
pub const FEATURED_COUNT: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    PhoneNumber,
    Password,
}

/// Credentials taken from the login form for one authentication attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginSubmission {
    pub identifier: String,
    pub secret: String,
}

/// The completed background login call, delivered back to the event loop.
#[derive(Debug)]
pub struct LoginResult {
    pub identifier: String,
    pub outcome: Result<AuthOutcome, AuthError>,
}

#[derive(Debug)]
pub struct LoginForm {
    pub phone_number: String,
    pub password: String,
    pub focus: LoginField,
    pub show_password: bool,
    pub error: Option<String>,
    pub in_flight: bool,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self {
            phone_number: String::new(),
            password: String::new(),
            focus: LoginField::PhoneNumber,
            show_password: false,
            error: None,
            in_flight: false,
        }
    }
}

impl LoginForm {
    pub fn push_char(&mut self, c: char) {
        match self.focus {
            LoginField::PhoneNumber => {
                let mut raw = std::mem::take(&mut self.phone_number);
                raw.push(c);
                self.phone_number = normalize_phone_number(&raw);
            }
            LoginField::Password => self.password.push(c),
        }
    }

    pub fn backspace(&mut self) {
        match self.focus {
            LoginField::PhoneNumber => self.phone_number.pop(),
            LoginField::Password => self.password.pop(),
        };
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            LoginField::PhoneNumber => LoginField::Password,
            LoginField::Password => LoginField::PhoneNumber,
        };
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    /// Submit is disabled while a request is in flight and while a field is empty.
    pub fn can_submit(&self) -> bool {
        !self.in_flight && !self.phone_number.is_empty() && !self.password.is_empty()
    }

    /// Marks the form busy and hands out the credentials, or `None` when
    /// submitting is currently disabled.
    pub fn begin_submit(&mut self) -> Option<LoginSubmission> {
        if !self.can_submit() {
            return None;
        }
        self.in_flight = true;
        self.error = None;
        Some(LoginSubmission {
            identifier: self.phone_number.clone(),
            secret: self.password.clone(),
        })
    }

    pub fn fail(&mut self, message: String) {
        self.in_flight = false;
        self.error = Some(message);
    }
}

/// State of one filterable list screen.
pub struct ListPage<R: Listing> {
    pub criteria: Criteria<R>,
    pub list_state: ListState,
    pub focused_control: usize,
    pub searching: bool,
}

impl<R: Listing> Default for ListPage<R> {
    fn default() -> Self {
        Self {
            criteria: Criteria::default(),
            list_state: ListState::default(),
            focused_control: 0,
            searching: false,
        }
    }
}

impl<R: Listing> ListPage<R> {
    /// The derived view, recomputed from scratch.
    pub fn view(&self, records: &'static [R]) -> Vec<&'static R> {
        apply(records, &self.criteria)
    }

    pub fn selected(&self, records: &'static [R]) -> Option<&'static R> {
        let view = self.view(records);
        self.list_state.selected().and_then(|i| view.get(i).copied())
    }

    pub fn type_char(&mut self, c: char) {
        self.criteria.query.push(c);
        self.list_state.select(None);
    }

    pub fn backspace(&mut self) {
        self.criteria.query.pop();
        self.list_state.select(None);
    }

    pub fn next_control(&mut self) {
        let count = R::controls(&self.criteria.filters).len();
        self.focused_control = (self.focused_control + 1) % count.max(1);
    }

    pub fn previous_control(&mut self) {
        let count = R::controls(&self.criteria.filters).len().max(1);
        self.focused_control = (self.focused_control + count - 1) % count;
    }

    pub fn cycle_focused_control(&mut self, records: &[R]) {
        R::cycle_control(&mut self.criteria.filters, self.focused_control, records);
        self.list_state.select(None);
    }

    pub fn cycle_sort(&mut self) {
        self.criteria.sort = R::next_sort(self.criteria.sort);
    }

    /// One-action reset of every criterion, offered by the empty state.
    pub fn reset(&mut self) {
        self.criteria.reset();
        self.list_state.select(None);
        self.searching = false;
    }

    pub fn select_next(&mut self, len: usize) {
        select_next(&mut self.list_state, len);
    }

    pub fn select_previous(&mut self, len: usize) {
        select_previous(&mut self.list_state, len);
    }
}

pub fn select_next(state: &mut ListState, len: usize) {
    if len == 0 {
        state.select(None);
        return;
    }
    let next = match state.selected() {
        Some(i) if i + 1 < len => i + 1,
        Some(i) => i.min(len - 1),
        None => 0,
    };
    state.select(Some(next));
}

pub fn select_previous(state: &mut ListState, len: usize) {
    if len == 0 {
        state.select(None);
        return;
    }
    let previous = match state.selected() {
        Some(i) => i.saturating_sub(1).min(len - 1),
        None => 0,
    };
    state.select(Some(previous));
}

pub struct App<S: SessionStorage = crate::core::session::FileStorage> {
    pub should_quit: bool,
    pub data: MockDataStore,
    pub session: SessionStore<S>,
    pub gateway: AuthGateway,
    pub navigator: Navigator,
    pub login: LoginForm,
    pub news: ListPage<Article>,
    pub vulnerabilities: ListPage<Vulnerability>,
    pub breaches: ListPage<Breach>,
    pub intelligence: ListPage<IntelReport>,
    pub home_state: ListState,
    pub related_state: ListState,
    pub spinner_frame: usize,
    pub now: DateTime<Utc>,
}

impl<S: SessionStorage> App<S> {
    /// Wires the application together. The session store and gateway are
    /// required up front; there is no lazily looked-up session context.
    pub fn new(data: MockDataStore, session: SessionStore<S>, gateway: AuthGateway) -> Self {
        Self {
            should_quit: false,
            data,
            session,
            gateway,
            navigator: Navigator::new(Route::Home),
            login: LoginForm::default(),
            news: ListPage::default(),
            vulnerabilities: ListPage::default(),
            breaches: ListPage::default(),
            intelligence: ListPage::default(),
            home_state: ListState::default(),
            related_state: ListState::default(),
            spinner_frame: 0,
            now: Utc::now(),
        }
    }

    pub fn guard_state(&self) -> GuardState {
        GuardState::of(&self.session)
    }

    /// What the current location renders as right now.
    pub fn decision(&self) -> GuardDecision {
        guard(self.navigator.current(), self.guard_state())
    }

    /// Reads the persisted session and lets the guard settle the first screen.
    pub fn hydrate(&mut self) {
        self.session.hydrate();
        let decision = self.navigator.resolve(self.guard_state());
        info!(route = %self.navigator.current().path(), ?decision, "Session hydrated.");
    }

    pub fn navigate(&mut self, to: Route) {
        if matches!(to, Route::Article(_)) {
            self.related_state.select(None);
        }
        self.navigator.navigate(to, self.guard_state());
        debug!(route = %self.navigator.current().path(), "Navigated.");
    }

    pub fn open_article(&mut self, article: &Article) {
        self.navigate(Route::Article(article.id.to_string()));
    }

    /// Takes credentials from the form if a submit is currently allowed.
    pub fn begin_login(&mut self) -> Option<LoginSubmission> {
        self.login.begin_submit()
    }

    /// Applies a finished login attempt: persist and move on, or show the error.
    pub fn finish_login(&mut self, result: LoginResult) {
        match self.session.establish(&result.identifier, result.outcome) {
            Ok(_) => {
                self.login = LoginForm::default();
                self.navigator.complete_login(self.guard_state());
            }
            Err(e) => self.login.fail(e.to_string()),
        }
    }

    pub fn logout(&mut self) {
        self.session.logout();
        self.navigator.resolve(self.guard_state());
    }

    /// Articles featured on the home screen.
    pub fn featured(&self) -> &'static [Article] {
        let articles = self.data.articles;
        &articles[..articles.len().min(FEATURED_COUNT)]
    }

    pub fn on_tick(&mut self) {
        self.now = Utc::now();
        if self.login.in_flight {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_CHARS.len();
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::core::session::FileStorage;
    use tempfile::{TempDir, tempdir};
    use url::Url;

    /// A fresh app whose session lives in a temporary directory.
    pub fn app() -> (App, TempDir) {
        let dir = tempdir().unwrap();
        let session = SessionStore::new(FileStorage::new(dir.path(), "user"));
        let gateway = AuthGateway::with_client(
            reqwest::Client::new(),
            Url::parse("http://127.0.0.1:9/login").unwrap(),
        );
        (App::new(MockDataStore::load(), session, gateway), dir)
    }

    pub fn signed_in_app() -> (App, TempDir) {
        let (mut app, dir) = app();
        app.hydrate();
        app.finish_login(LoginResult {
            identifier: "5551234".into(),
            outcome: Ok(AuthOutcome { message: None }),
        });
        (app, dir)
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::app;
    use super::*;
    use pretty_assertions::assert_eq;

    fn ok() -> Result<AuthOutcome, AuthError> {
        Ok(AuthOutcome { message: None })
    }

    #[test]
    fn starts_loading_then_redirects_to_login() {
        let (mut app, _dir) = app();
        assert_eq!(app.decision(), GuardDecision::Placeholder);
        app.hydrate();
        assert_eq!(app.navigator.current(), &Route::Login);
        assert_eq!(app.navigator.origin(), Some(&Route::Home));
    }

    #[test]
    fn phone_field_accepts_digits_only() {
        let mut form = LoginForm::default();
        for c in "+1 (555) 12a3".chars() {
            form.push_char(c);
        }
        assert_eq!(form.phone_number, "1555123");
        form.toggle_focus();
        form.push_char('x');
        assert_eq!(form.password, "x");
    }

    #[test]
    fn submit_is_disabled_while_in_flight() {
        let mut form = LoginForm::default();
        assert_eq!(form.begin_submit(), None);
        form.phone_number = "555".into();
        form.password = "pw".into();
        let first = form.begin_submit();
        assert_eq!(
            first,
            Some(LoginSubmission { identifier: "555".into(), secret: "pw".into() })
        );
        assert_eq!(form.begin_submit(), None);
        form.fail("bad credentials".into());
        assert!(!form.in_flight);
        assert_eq!(form.error.as_deref(), Some("bad credentials"));
        assert!(form.can_submit());
    }

    #[test]
    fn failed_login_shows_error_and_stays_on_login() {
        let (mut app, dir) = app();
        app.hydrate();
        app.login.phone_number = "555".into();
        app.login.password = "pw".into();
        let submission = app.begin_login().unwrap();
        app.finish_login(LoginResult {
            identifier: submission.identifier,
            outcome: Err(AuthError::Rejected("bad credentials".into())),
        });
        assert_eq!(app.login.error.as_deref(), Some("bad credentials"));
        assert_eq!(app.navigator.current(), &Route::Login);
        assert!(!dir.path().join("user.json").exists());
    }

    #[test]
    fn successful_login_returns_to_origin() {
        let (mut app, _dir) = app();
        app.navigate(Route::Breaches);
        app.hydrate();
        assert_eq!(app.navigator.current(), &Route::Login);

        app.finish_login(LoginResult { identifier: "555".into(), outcome: ok() });
        assert_eq!(app.navigator.current(), &Route::Breaches);
        assert_eq!(app.decision(), GuardDecision::Render(Route::Breaches));
        assert!(app.login.phone_number.is_empty());
    }

    #[test]
    fn logout_sends_back_to_login() {
        let (mut app, _dir) = app();
        app.hydrate();
        app.finish_login(LoginResult { identifier: "555".into(), outcome: ok() });
        app.navigate(Route::News);
        app.logout();
        assert_eq!(app.navigator.current(), &Route::Login);
        assert_eq!(app.navigator.origin(), Some(&Route::News));
    }

    #[test]
    fn unknown_article_is_reachable_but_absent() {
        let (mut app, _dir) = app();
        app.hydrate();
        app.finish_login(LoginResult { identifier: "555".into(), outcome: ok() });
        app.navigate(Route::Article("42".into()));
        assert_eq!(app.decision(), GuardDecision::Render(Route::Article("42".into())));
        assert!(app.data.article("42").is_none());
    }

    #[test]
    fn list_page_reset_after_empty_result() {
        let (mut app, _dir) = app();
        for c in "no such thing".chars() {
            app.news.type_char(c);
        }
        assert!(app.news.view(app.data.articles).is_empty());
        app.news.reset();
        assert_eq!(app.news.view(app.data.articles).len(), app.data.articles.len());
        assert!(app.news.criteria.is_default());
    }

    #[test]
    fn list_page_controls_wrap() {
        let mut page: ListPage<Breach> = ListPage::default();
        page.previous_control();
        assert_eq!(page.focused_control, 2);
        page.next_control();
        assert_eq!(page.focused_control, 0);
    }

    #[test]
    fn selection_stays_in_bounds() {
        let mut state = ListState::default();
        select_next(&mut state, 2);
        select_next(&mut state, 2);
        select_next(&mut state, 2);
        assert_eq!(state.selected(), Some(1));
        select_previous(&mut state, 2);
        select_previous(&mut state, 2);
        assert_eq!(state.selected(), Some(0));
        select_next(&mut state, 0);
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn featured_is_first_six() {
        let (app, _dir) = app();
        let ids: Vec<u32> = app.featured().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }
}
