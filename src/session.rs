//! Session State Store
//!
//! One authentication flag per process. The app root creates a [`Session`]
//! and hands clones of the same handle to whoever needs it; guards only see
//! the read side through [`SessionFlag`].

use std::cell::RefCell;
use std::rc::Rc;

/// Read-only view of the authentication flag
pub trait SessionFlag {
    fn is_authenticated(&self) -> bool;
}

/// Authentication state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AuthState {
    pub is_logged_in: bool,
}

/// The only two transitions the session knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthAction {
    LoggedIn,
    LoggedOut,
}

impl AuthState {
    /// Apply an action, returning the next state
    pub fn reduce(self, action: AuthAction) -> Self {
        match action {
            AuthAction::LoggedIn => Self { is_logged_in: true },
            AuthAction::LoggedOut => Self { is_logged_in: false },
        }
    }
}

impl SessionFlag for AuthState {
    fn is_authenticated(&self) -> bool {
        self.is_logged_in
    }
}

/// Handle returned by [`Session::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Rc<dyn Fn(bool)>;

#[derive(Default)]
struct SessionInner {
    state: AuthState,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

/// Shared session handle
///
/// Cloning yields another handle to the same flag.
#[derive(Clone, Default)]
pub struct Session {
    inner: Rc<RefCell<SessionInner>>,
}

impl Session {
    /// Create a logged-out session
    pub fn new() -> Self {
        Self::default()
    }

    pub fn login(&self) {
        self.dispatch(AuthAction::LoggedIn);
    }

    pub fn logout(&self) {
        self.dispatch(AuthAction::LoggedOut);
    }

    /// Current state snapshot
    pub fn state(&self) -> AuthState {
        self.inner.borrow().state
    }

    /// Apply a transition and notify listeners if the flag changed
    pub fn dispatch(&self, action: AuthAction) {
        let (changed, flag, listeners) = {
            let mut inner = self.inner.borrow_mut();
            let next = inner.state.reduce(action);
            let changed = next != inner.state;
            inner.state = next;

            let listeners: Vec<Listener> = if changed {
                inner.listeners.iter().map(|(_, l)| Rc::clone(l)).collect()
            } else {
                Vec::new()
            };
            (changed, next.is_logged_in, listeners)
        };

        if changed {
            tracing::debug!(authenticated = flag, "session changed");
        }

        // Borrow released: listeners may read the session again.
        for listener in listeners {
            listener(flag);
        }
    }

    /// Register a listener called with the new flag on every change
    pub fn subscribe(&self, listener: impl Fn(bool) + 'static) -> SubscriptionId {
        let mut inner = self.inner.borrow_mut();
        let id = SubscriptionId(inner.next_id);
        inner.next_id += 1;
        inner.listeners.push((id, Rc::new(listener)));
        id
    }

    /// Remove a listener; unknown ids are ignored
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.inner.borrow_mut().listeners.retain(|(sid, _)| *sid != id);
    }
}

impl SessionFlag for Session {
    fn is_authenticated(&self) -> bool {
        self.inner.borrow().state.is_logged_in
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Session")
            .field("state", &inner.state)
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}
