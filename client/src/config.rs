//! Client configuration constants.
//!
//! SYSTEM CONTEXT
//! ==============
//! The remote bookings API owns all business rules; the client only needs its
//! base URL (fixed at build time) and the names of the browser sinks that hold
//! the login session.

/// API base used when `BOOKINGS_API_URL` is not set at build time.
pub const DEFAULT_API_URL: &str = "http://localhost:3000/app/bulir";

/// Cookie holding the bearer token.
pub const TOKEN_COOKIE: &str = "token";

/// `localStorage` key holding the JSON user record.
pub const USER_STORAGE_KEY: &str = "user";

/// `localStorage` key holding the provider's cached service count.
pub const SERVICE_COUNT_KEY: &str = "serviceCount";

/// Token cookie lifetime: seven days.
pub const TOKEN_MAX_AGE_SECS: u64 = 7 * 24 * 60 * 60;

/// How long a toast stays on screen.
pub const TOAST_DURATION_MS: u32 = 4_000;

/// Toasts beyond this count push out the oldest.
pub const MAX_VISIBLE_TOASTS: usize = 5;

/// Base URL of the remote bookings API, without a trailing slash.
pub fn api_base_url() -> &'static str {
    option_env!("BOOKINGS_API_URL")
        .unwrap_or(DEFAULT_API_URL)
        .trim_end_matches('/')
}
