//! Networking modules for the remote bookings API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls, `types` defines the JSON schema, and `error`
//! classifies failures for notification and logging.

pub mod api;
pub mod error;
pub mod types;
