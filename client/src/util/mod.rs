//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (cookies,
//! `localStorage`, route guarding, date handling) from page and component
//! logic so they can be tested natively.

pub mod auth;
pub mod cookie;
pub mod dates;
pub mod session_repo;
pub mod storage;
