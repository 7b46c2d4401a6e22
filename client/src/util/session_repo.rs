//! Session repository: one entry point for both persisted session sinks.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token lives in a cookie and the user record in `localStorage`. The two
//! are written independently by the browser (cookies expire on their own), so
//! readers get a `PersistedSession` where either half may be missing. Both the
//! session store and the route guard read through this module.

#[cfg(test)]
#[path = "session_repo_test.rs"]
mod session_repo_test;

use crate::config::{TOKEN_COOKIE, USER_STORAGE_KEY};
use crate::net::types::User;

use super::cookie::{CookieJar, CookieOptions, DocumentCookies};
use super::storage::{KeyValueStore, LocalStorage, load_json, save_json};

/// Snapshot of both sinks as they are right now.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PersistedSession {
    pub user: Option<User>,
    pub token: Option<String>,
}

impl PersistedSession {
    pub fn has_user(&self) -> bool {
        self.user.is_some()
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }
}

/// Read/write access to the persisted session.
pub trait SessionRepository {
    fn get(&self) -> PersistedSession;
    /// Persist both halves of a fresh login.
    fn set(&self, user: &User, token: &str);
    /// Rewrite only the user record (balance changes and the like).
    fn set_user(&self, user: &User);
    /// Remove both sinks.
    fn clear(&self);
}

/// Repository over one cookie jar and one key/value store.
#[derive(Clone, Debug)]
pub struct CookieStorageRepository<C, S> {
    cookies: C,
    storage: S,
    token_options: CookieOptions,
}

impl<C: CookieJar, S: KeyValueStore> CookieStorageRepository<C, S> {
    pub fn new(cookies: C, storage: S) -> Self {
        Self { cookies, storage, token_options: CookieOptions::session_token() }
    }

    pub fn cookies(&self) -> &C {
        &self.cookies
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

impl<C: CookieJar, S: KeyValueStore> SessionRepository for CookieStorageRepository<C, S> {
    fn get(&self) -> PersistedSession {
        PersistedSession {
            user: load_json(&self.storage, USER_STORAGE_KEY),
            token: self.cookies.get(TOKEN_COOKIE),
        }
    }

    fn set(&self, user: &User, token: &str) {
        self.cookies.set(TOKEN_COOKIE, token, &self.token_options);
        save_json(&self.storage, USER_STORAGE_KEY, user);
    }

    fn set_user(&self, user: &User) {
        save_json(&self.storage, USER_STORAGE_KEY, user);
    }

    fn clear(&self) {
        self.cookies.remove(TOKEN_COOKIE, &self.token_options);
        self.storage.remove(USER_STORAGE_KEY);
    }
}

/// The repository the app runs with: `document.cookie` + `localStorage`.
pub type BrowserSessionRepository = CookieStorageRepository<DocumentCookies, LocalStorage>;

pub fn browser_repository() -> BrowserSessionRepository {
    CookieStorageRepository::new(DocumentCookies, LocalStorage)
}
