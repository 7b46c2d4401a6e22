//! Session store: the signed-in identity for this page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided to every screen as a `RwSignal<BrowserSessionStore>` context. Only
//! the operations below mutate it, and each one writes the in-memory session
//! and the persisted sinks in the same call.
//!
//! DESIGN
//! ======
//! `is_authenticated` is derived from `user` and `token` rather than stored,
//! so the three fields can never disagree.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;
use crate::util::session_repo::{BrowserSessionRepository, SessionRepository};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    user: Option<User>,
    token: Option<String>,
}

impl Session {
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }
}

/// Result of `SessionStore::load_from_persistence`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Both sinks were present and the session now holds them.
    Adopted,
    /// At least one sink was missing; the session was left as it was.
    Incomplete { user: bool, token: bool },
}

#[derive(Clone, Debug)]
pub struct SessionStore<R> {
    session: Session,
    repo: R,
}

impl<R: SessionRepository> SessionStore<R> {
    /// An anonymous session over `repo`. Nothing is read until
    /// `load_from_persistence`.
    pub fn new(repo: R) -> Self {
        Self { session: Session::default(), repo }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Overwrite the session with `user`/`token` and persist both.
    pub fn login(&mut self, user: User, token: String) {
        self.repo.set(&user, &token);
        self.session = Session { user: Some(user), token: Some(token) };
    }

    /// Clear the session and both sinks. Safe to call when already anonymous.
    pub fn logout(&mut self) {
        self.repo.clear();
        self.session = Session::default();
    }

    /// Adopt the persisted session when both sinks are present; otherwise
    /// leave the current session untouched.
    pub fn load_from_persistence(&mut self) -> LoadOutcome {
        let persisted = self.repo.get();
        match (persisted.user, persisted.token) {
            (Some(user), Some(token)) => {
                self.session = Session { user: Some(user), token: Some(token) };
                LoadOutcome::Adopted
            }
            (user, token) => LoadOutcome::Incomplete { user: user.is_some(), token: token.is_some() },
        }
    }

    /// The user screens should act as: the session's, or the persisted record
    /// when the session is anonymous (the route guard admits on that alone).
    pub fn current_user(&self) -> Option<User> {
        self.session.user.clone().or_else(|| self.repo.get().user)
    }

    /// Apply `update` to the current user and persist the user record only.
    /// Returns `false` when there is no user to update.
    pub fn refresh_user(&mut self, update: impl FnOnce(&mut User)) -> bool {
        if let Some(user) = self.session.user.as_mut() {
            update(user);
            self.repo.set_user(user);
            return true;
        }
        let Some(mut user) = self.repo.get().user else {
            return false;
        };
        update(&mut user);
        self.repo.set_user(&user);
        true
    }
}

/// The store the app runs with.
pub type BrowserSessionStore = SessionStore<BrowserSessionRepository>;
