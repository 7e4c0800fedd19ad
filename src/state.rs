//! Global application state

use leptos::prelude::*;

use crate::session::{self, BrowserStore};
use crate::types::{Role, Session, User};

/// Global application state, shared through context.
///
/// Session writes always go through here so the signals and localStorage
/// stay in step.
#[derive(Clone)]
pub struct AppState {
    /// Bearer token for authenticated requests
    pub token: RwSignal<Option<String>>,
    /// Logged-in user descriptor
    pub user: RwSignal<Option<User>>,
    /// Loading state for in-flight auth calls
    pub is_loading: RwSignal<bool>,
    /// Last failure message shown inline
    pub error: RwSignal<Option<String>>,
    /// API base URL; empty means same-origin relative requests
    pub api_base: RwSignal<String>,
}

impl AppState {
    pub fn new() -> Self {
        // Restore a previous session from localStorage, if any
        let restored = session::load(&BrowserStore);
        let (token, user) = match restored {
            Some(s) => (Some(s.token), Some(s.user)),
            None => (None, None),
        };

        Self {
            token: RwSignal::new(token),
            user: RwSignal::new(user),
            is_loading: RwSignal::new(false),
            error: RwSignal::new(None),
            api_base: RwSignal::new(String::new()),
        }
    }

    pub fn save_auth(&self, session: &Session) {
        session::save(&BrowserStore, session);
        self.token.set(Some(session.token.clone()));
        self.user.set(Some(session.user.clone()));
    }

    /// Drop the session and everything scoped to it, including the
    /// pending-invoice cache. Navigation afterward is the caller's job.
    pub fn clear_auth(&self) {
        session::clear(&BrowserStore);
        self.token.set(None);
        self.user.set(None);
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.get().is_some() && self.user.get().is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.get().map(|u| u.role)
    }

    pub fn set_error(&self, msg: impl Into<String>) {
        self.error.set(Some(msg.into()));
    }

    pub fn clear_error(&self) {
        self.error.set(None);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
