//! Session Context
//!
//! One [`Session`] per app, mirrored into a signal so route guards re-run
//! whenever the flag flips.

use csvdash::{Session, SessionFlag};
use leptos::*;

/// Session handle provided to all components
#[derive(Clone)]
pub struct SessionContext {
    session: Session,
    authenticated: RwSignal<bool>,
}

impl SessionContext {
    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn login(&self) {
        self.session.login();
    }

    pub fn logout(&self) {
        self.session.logout();
    }
}

/// The value always comes from the [`Session`]. The signal is only tracked,
/// so reactive callers re-run once the deferred update lands; until then
/// they read the new flag but have not been woken for it.
impl SessionFlag for SessionContext {
    fn is_authenticated(&self) -> bool {
        self.authenticated.track();
        self.session.is_authenticated()
    }
}

/// Create the session and provide it to the component tree
pub fn provide_session() -> SessionContext {
    let session = Session::new();
    let authenticated = create_rw_signal(session.is_authenticated());

    let id = session.subscribe(move |flag| {
        // Deferred: logout can fire from inside another signal's update,
        // and the guard it wakes tears that component down.
        spawn_local(async move {
            authenticated.set(flag);
        });
    });

    let for_cleanup = session.clone();
    on_cleanup(move || for_cleanup.unsubscribe(id));

    let context = SessionContext {
        session,
        authenticated,
    };
    provide_context(context.clone());
    context
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> SessionContext {
        SessionContext {
            session: Session::new(),
            authenticated: create_rw_signal(false),
        }
    }

    #[test]
    fn test_flag_follows_session_before_signal_update() {
        let runtime = create_runtime();
        let context = context();

        context.login();
        assert!(context.is_authenticated());
        assert!(!context.authenticated.get_untracked());

        context.logout();
        assert!(!context.is_authenticated());

        runtime.dispose();
    }

    #[test]
    fn test_clones_share_one_session() {
        let runtime = create_runtime();
        let context = context();
        let other = context.clone();

        other.login();
        assert!(context.is_authenticated());
        assert!(context.session().is_authenticated());

        runtime.dispose();
    }
}
