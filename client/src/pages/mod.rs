//! Route-level page components.

pub mod client_bookings;
pub mod client_home;
pub mod login;
pub mod provider_bookings;
pub mod provider_home;
pub mod register;
