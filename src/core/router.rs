// src/core/router.rs

//! Client-side routes and the guard that protects them.

use crate::core::session::{SessionStorage, SessionStore};
use tracing::debug;

pub const LOGIN_PATH: &str = "/login";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    Home,
    News,
    Vulnerabilities,
    Breaches,
    Intelligence,
    /// Detail screen keyed by the raw route parameter; it may not name a real article.
    Article(String),
}

impl Route {
    /// Top-level destinations in navigation-bar order.
    pub const DESTINATIONS: [Route; 5] = [
        Route::Home,
        Route::News,
        Route::Vulnerabilities,
        Route::Breaches,
        Route::Intelligence,
    ];

    pub fn path(&self) -> String {
        match self {
            Route::Login => LOGIN_PATH.to_string(),
            Route::Home => "/".to_string(),
            Route::News => "/news".to_string(),
            Route::Vulnerabilities => "/vulnerabilities".to_string(),
            Route::Breaches => "/breaches".to_string(),
            Route::Intelligence => "/intelligence".to_string(),
            Route::Article(id) => format!("/article/{}", id),
        }
    }

    /// Resolves a path to a route. Unknown paths yield `None`.
    pub fn parse(path: &str) -> Option<Route> {
        let route = match path {
            LOGIN_PATH => Route::Login,
            "/" => Route::Home,
            "/news" => Route::News,
            "/vulnerabilities" => Route::Vulnerabilities,
            "/breaches" => Route::Breaches,
            "/intelligence" => Route::Intelligence,
            other => {
                let id = other.strip_prefix("/article/")?;
                if id.is_empty() || id.contains('/') {
                    return None;
                }
                Route::Article(id.to_string())
            }
        };
        Some(route)
    }

    pub fn is_protected(&self) -> bool {
        !matches!(self, Route::Login)
    }

    /// Label used in the navigation bar.
    pub fn label(&self) -> &'static str {
        match self {
            Route::Login => "Login",
            Route::Home => "Home",
            Route::News => "News",
            Route::Vulnerabilities => "CVEs",
            Route::Breaches => "Breaches",
            Route::Intelligence => "Intel",
            Route::Article(_) => "Article",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    /// The session store has not been hydrated yet.
    Loading,
    Authenticated,
    Unauthenticated,
}

impl GuardState {
    pub fn of<S: SessionStorage>(store: &SessionStore<S>) -> Self {
        if !store.is_hydrated() {
            GuardState::Loading
        } else if store.is_authenticated() {
            GuardState::Authenticated
        } else {
            GuardState::Unauthenticated
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session state is unresolved: show a placeholder and do not redirect.
    Placeholder,
    Render(Route),
    Redirect { to: Route, origin: Option<Route> },
}

/// Decides what a request for `requested` turns into under `state`.
pub fn guard(requested: &Route, state: GuardState) -> GuardDecision {
    match (state, requested) {
        (GuardState::Loading, _) => GuardDecision::Placeholder,
        (GuardState::Authenticated, Route::Login) => GuardDecision::Redirect {
            to: Route::Home,
            origin: None,
        },
        (GuardState::Authenticated, route) => GuardDecision::Render(route.clone()),
        (GuardState::Unauthenticated, route) if !route.is_protected() => {
            GuardDecision::Render(route.clone())
        }
        (GuardState::Unauthenticated, route) => GuardDecision::Redirect {
            to: Route::Login,
            origin: Some(route.clone()),
        },
    }
}

/// Current location plus the origin captured by the last login redirect.
#[derive(Debug, Clone)]
pub struct Navigator {
    current: Route,
    origin: Option<Route>,
}

impl Navigator {
    pub fn new(initial: Route) -> Self {
        Self { current: initial, origin: None }
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    pub fn origin(&self) -> Option<&Route> {
        self.origin.as_ref()
    }

    /// Requests `to`, following any redirect the guard issues.
    pub fn navigate(&mut self, to: Route, state: GuardState) -> GuardDecision {
        let decision = guard(&to, state);
        match &decision {
            GuardDecision::Placeholder => self.current = to,
            GuardDecision::Render(route) => self.current = route.clone(),
            GuardDecision::Redirect { to: target, origin } => {
                debug!(from = %to.path(), to = %target.path(), "Route guard redirect.");
                if origin.is_some() {
                    self.origin = origin.clone();
                }
                self.current = target.clone();
            }
        }
        decision
    }

    /// Re-evaluates the current location after the session state changed.
    pub fn resolve(&mut self, state: GuardState) -> GuardDecision {
        self.navigate(self.current.clone(), state)
    }

    /// Post-login destination: the captured origin when there is one, else home.
    pub fn complete_login(&mut self, state: GuardState) -> GuardDecision {
        let target = self.origin.take().unwrap_or(Route::Home);
        self.navigate(target, state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn paths_round_trip_for_every_destination() {
        for route in Route::DESTINATIONS.iter().cloned().chain([Route::Login, Route::Article("7".into())]) {
            assert_eq!(Route::parse(&route.path()), Some(route));
        }
        assert_eq!(Route::parse("/article/"), None);
        assert_eq!(Route::parse("/nowhere"), None);
        assert_eq!(Route::parse("/article/abc"), Some(Route::Article("abc".into())));
    }

    #[test]
    fn loading_never_redirects() {
        for route in Route::DESTINATIONS {
            assert_eq!(guard(&route, GuardState::Loading), GuardDecision::Placeholder);
        }
        assert_eq!(guard(&Route::Login, GuardState::Loading), GuardDecision::Placeholder);
    }

    #[test]
    fn unauthenticated_redirects_with_origin() {
        assert_eq!(
            guard(&Route::Breaches, GuardState::Unauthenticated),
            GuardDecision::Redirect { to: Route::Login, origin: Some(Route::Breaches) }
        );
        assert_eq!(
            guard(&Route::Login, GuardState::Unauthenticated),
            GuardDecision::Render(Route::Login)
        );
    }

    #[test]
    fn authenticated_renders_and_bounces_off_login() {
        assert_eq!(
            guard(&Route::News, GuardState::Authenticated),
            GuardDecision::Render(Route::News)
        );
        assert_eq!(
            guard(&Route::Login, GuardState::Authenticated),
            GuardDecision::Redirect { to: Route::Home, origin: None }
        );
    }

    #[test]
    fn login_returns_to_captured_origin() {
        let mut nav = Navigator::new(Route::Article("3".into()));
        nav.resolve(GuardState::Loading);
        assert_eq!(nav.current(), &Route::Article("3".into()));

        nav.resolve(GuardState::Unauthenticated);
        assert_eq!(nav.current(), &Route::Login);
        assert_eq!(nav.origin(), Some(&Route::Article("3".into())));

        nav.complete_login(GuardState::Authenticated);
        assert_eq!(nav.current(), &Route::Article("3".into()));
        assert_eq!(nav.origin(), None);
    }

    #[test]
    fn login_without_origin_goes_home() {
        let mut nav = Navigator::new(Route::Login);
        nav.resolve(GuardState::Unauthenticated);
        assert_eq!(nav.current(), &Route::Login);
        nav.complete_login(GuardState::Authenticated);
        assert_eq!(nav.current(), &Route::Home);
    }
}
