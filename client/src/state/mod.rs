//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `notifications`) so components can
//! depend on small focused models provided through context.

pub mod notifications;
pub mod session;
