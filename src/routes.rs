//! Routes and Guards
//!
//! Maps URL paths to routes and decides, from the session flag alone,
//! whether a route renders or redirects.

use crate::session::SessionFlag;

/// Client-side routes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Signup,
    Home,
}

/// Which guard a route sits behind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Only for logged-out users (login, signup)
    Public,
    /// Only for logged-in users (dashboard)
    Protected,
}

impl Route {
    pub const ALL: [Route; 3] = [Route::Login, Route::Signup, Route::Home];

    pub fn path(self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Signup => "/signup",
            Route::Home => "/",
        }
    }

    /// Exact path lookup. A single trailing slash is tolerated.
    pub fn from_path(path: &str) -> Option<Route> {
        let trimmed = match path.strip_suffix('/') {
            Some(rest) if !rest.is_empty() => rest,
            _ => path,
        };
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Self::ALL.into_iter().find(|route| route.path() == normalized)
    }

    pub fn access(self) -> Access {
        match self {
            Route::Login | Route::Signup => Access::Public,
            Route::Home => Access::Protected,
        }
    }
}

/// Outcome of a guard check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    Redirect(Route),
}

/// Decide whether to render nested views or redirect
pub trait Guard {
    fn decide(&self, session: &dyn SessionFlag) -> GuardDecision;
}

/// Sends logged-out users to the login page
#[derive(Debug, Clone, Copy, Default)]
pub struct ProtectedGuard;

impl Guard for ProtectedGuard {
    fn decide(&self, session: &dyn SessionFlag) -> GuardDecision {
        if session.is_authenticated() {
            GuardDecision::Render
        } else {
            GuardDecision::Redirect(Route::Login)
        }
    }
}

/// Sends logged-in users to the dashboard
#[derive(Debug, Clone, Copy, Default)]
pub struct PublicGuard;

impl Guard for PublicGuard {
    fn decide(&self, session: &dyn SessionFlag) -> GuardDecision {
        if session.is_authenticated() {
            GuardDecision::Redirect(Route::Home)
        } else {
            GuardDecision::Render
        }
    }
}

impl Access {
    pub fn guard(self) -> &'static dyn Guard {
        match self {
            Access::Public => &PublicGuard,
            Access::Protected => &ProtectedGuard,
        }
    }
}

/// Result of routing a path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Render(Route),
    Redirect(Route),
    NotFound,
}

/// Route a path through its guard
pub fn resolve(path: &str, session: &dyn SessionFlag) -> Resolution {
    let Some(route) = Route::from_path(path) else {
        return Resolution::NotFound;
    };

    match route.access().guard().decide(session) {
        GuardDecision::Render => Resolution::Render(route),
        GuardDecision::Redirect(target) => {
            tracing::debug!(from = route.path(), to = target.path(), "guard redirect");
            Resolution::Redirect(target)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{AuthState, Session};

    fn logged_out() -> AuthState {
        AuthState { is_logged_in: false }
    }

    fn logged_in() -> AuthState {
        AuthState { is_logged_in: true }
    }

    #[test]
    fn test_protected_guard() {
        assert_eq!(
            ProtectedGuard.decide(&logged_out()),
            GuardDecision::Redirect(Route::Login)
        );
        assert_eq!(ProtectedGuard.decide(&logged_in()), GuardDecision::Render);
    }

    #[test]
    fn test_public_guard() {
        assert_eq!(PublicGuard.decide(&logged_out()), GuardDecision::Render);
        assert_eq!(
            PublicGuard.decide(&logged_in()),
            GuardDecision::Redirect(Route::Home)
        );
    }

    #[test]
    fn test_resolve_follows_session() {
        let session = Session::new();

        assert_eq!(resolve("/", &session), Resolution::Redirect(Route::Login));
        assert_eq!(resolve("/login", &session), Resolution::Render(Route::Login));
        assert_eq!(resolve("/signup", &session), Resolution::Render(Route::Signup));

        session.login();
        assert_eq!(resolve("/", &session), Resolution::Render(Route::Home));
        assert_eq!(resolve("/login", &session), Resolution::Redirect(Route::Home));
        assert_eq!(resolve("/signup", &session), Resolution::Redirect(Route::Home));

        session.logout();
        assert_eq!(resolve("/", &session), Resolution::Redirect(Route::Login));
    }

    #[test]
    fn test_unknown_path() {
        assert_eq!(resolve("/reports", &logged_in()), Resolution::NotFound);
        assert_eq!(resolve("/login/extra", &logged_out()), Resolution::NotFound);
    }

    #[test]
    fn test_from_path() {
        assert_eq!(Route::from_path("/"), Some(Route::Home));
        assert_eq!(Route::from_path(""), Some(Route::Home));
        assert_eq!(Route::from_path("/login/"), Some(Route::Login));
        assert_eq!(Route::from_path("/signup"), Some(Route::Signup));
        assert_eq!(Route::from_path("login"), None);
    }

    #[test]
    fn test_route_access() {
        assert_eq!(Route::Login.access(), Access::Public);
        assert_eq!(Route::Signup.access(), Access::Public);
        assert_eq!(Route::Home.access(), Access::Protected);
    }
}
