//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render headers, catalogues, and dialogs while reading and
//! writing the session store and notification queue from Leptos context.

pub mod client_header;
pub mod provider_header;
pub mod require_session;
pub mod service_catalog;
pub mod service_form;
pub mod service_list;
pub mod toast_stack;
