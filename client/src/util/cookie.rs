//! Cookie sink for the session token.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token lives in a first-party cookie so the API receives it on
//! credentialed requests. Strings assigned to `document.cookie` are built and
//! parsed with the `cookie` crate; `DocumentCookies` applies them in the
//! browser and `MemoryCookies` replays them the way a browser would for tests.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use cookie::time::Duration;
use cookie::{Cookie, SameSite};

use crate::config::TOKEN_MAX_AGE_SECS;

/// Attributes written alongside a cookie value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CookieOptions {
    pub path: String,
    pub max_age_secs: Option<u64>,
    pub secure: bool,
    pub same_site: SameSite,
}

impl CookieOptions {
    /// Token cookie attributes: site-wide, seven days, HTTPS only, strict same-site.
    pub fn session_token() -> Self {
        Self {
            path: "/".to_owned(),
            max_age_secs: Some(TOKEN_MAX_AGE_SECS),
            secure: true,
            same_site: SameSite::Strict,
        }
    }

    fn from_cookie(cookie: &Cookie<'_>) -> Self {
        Self {
            path: cookie.path().unwrap_or("/").to_owned(),
            max_age_secs: cookie
                .max_age()
                .and_then(|age| u64::try_from(age.whole_seconds()).ok()),
            secure: cookie.secure().unwrap_or(false),
            same_site: cookie.same_site().unwrap_or(SameSite::Lax),
        }
    }
}

fn build_cookie(name: &str, value: &str, options: &CookieOptions, max_age: Option<Duration>) -> Cookie<'static> {
    let builder = Cookie::build((name.to_owned(), value.to_owned()))
        .path(options.path.clone())
        .secure(options.secure)
        .same_site(options.same_site);
    match max_age {
        Some(age) => builder.max_age(age).build(),
        None => builder.build(),
    }
}

/// Build the string assigned to `document.cookie` to store `name=value`.
/// The value is written as given.
pub fn format_set_cookie(name: &str, value: &str, options: &CookieOptions) -> String {
    let max_age = options
        .max_age_secs
        .map(|secs| Duration::seconds(i64::try_from(secs).unwrap_or(i64::MAX)));
    build_cookie(name, value, options, max_age).to_string()
}

/// Build the string that expires `name` immediately. The path must match the
/// one it was written with or the browser keeps the original.
pub fn format_remove_cookie(name: &str, options: &CookieOptions) -> String {
    build_cookie(name, "", options, Some(Duration::ZERO)).to_string()
}

/// Find `name` in a `document.cookie` style header (`a=1; b=2`). Empty values
/// count as absent.
pub fn find_cookie(header: &str, name: &str) -> Option<String> {
    Cookie::split_parse(header)
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == name)
        .map(|cookie| cookie.value().to_owned())
        .filter(|value| !value.is_empty())
}

/// Cookie storage addressed by name. Writes are best effort.
pub trait CookieJar {
    fn get(&self, name: &str) -> Option<String>;
    fn set(&self, name: &str, value: &str, options: &CookieOptions);
    fn remove(&self, name: &str, options: &CookieOptions);
}

/// `document.cookie` in the browser; inert elsewhere.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentCookies;

#[cfg(feature = "hydrate")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    use wasm_bindgen::JsCast;
    web_sys::window()?
        .document()?
        .dyn_into::<web_sys::HtmlDocument>()
        .ok()
}

#[cfg(feature = "hydrate")]
fn write_document_cookie(cookie: &str) {
    let Some(doc) = html_document() else {
        return;
    };
    if doc.set_cookie(cookie).is_err() {
        log::warn!("browser rejected cookie write");
    }
}

impl CookieJar for DocumentCookies {
    fn get(&self, name: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let header = html_document()?.cookie().ok()?;
            find_cookie(&header, name)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = name;
            None
        }
    }

    fn set(&self, name: &str, value: &str, options: &CookieOptions) {
        #[cfg(feature = "hydrate")]
        {
            write_document_cookie(&format_set_cookie(name, value, options));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (name, value, options);
        }
    }

    fn remove(&self, name: &str, options: &CookieOptions) {
        #[cfg(feature = "hydrate")]
        {
            write_document_cookie(&format_remove_cookie(name, options));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (name, options);
        }
    }
}

/// In-process jar. Takes the same `Set-Cookie` strings `DocumentCookies`
/// writes and answers reads through `find_cookie`.
#[derive(Clone, Debug, Default)]
pub struct MemoryCookies {
    entries: Arc<Mutex<HashMap<String, Cookie<'static>>>>,
}

impl MemoryCookies {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attributes the cookie was last written with.
    pub fn options(&self, name: &str) -> Option<CookieOptions> {
        self.entries.lock().ok()?.get(name).map(CookieOptions::from_cookie)
    }

    /// Drop a cookie without going through the jar API, as a browser does on expiry.
    pub fn expire(&self, name: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(name);
        }
    }

    /// Current contents rendered as a `document.cookie` read would return them.
    pub fn header(&self) -> String {
        let Ok(entries) = self.entries.lock() else {
            return String::new();
        };
        let mut pairs: Vec<String> = entries.values().map(|c| c.stripped().to_string()).collect();
        pairs.sort();
        pairs.join("; ")
    }

    /// Apply one `Set-Cookie` string. A non-positive Max-Age deletes.
    fn apply(&self, set_cookie: String) {
        let cookie = match Cookie::parse(set_cookie) {
            Ok(cookie) => cookie,
            Err(e) => {
                log::warn!("ignoring unparsable cookie write: {e}");
                return;
            }
        };
        let Ok(mut entries) = self.entries.lock() else {
            return;
        };
        if cookie.max_age().is_some_and(|age| age <= Duration::ZERO) {
            entries.remove(cookie.name());
        } else {
            entries.insert(cookie.name().to_owned(), cookie);
        }
    }
}

impl CookieJar for MemoryCookies {
    fn get(&self, name: &str) -> Option<String> {
        find_cookie(&self.header(), name)
    }

    fn set(&self, name: &str, value: &str, options: &CookieOptions) {
        self.apply(format_set_cookie(name, value, options));
    }

    fn remove(&self, name: &str, options: &CookieOptions) {
        self.apply(format_remove_cookie(name, options));
    }
}
