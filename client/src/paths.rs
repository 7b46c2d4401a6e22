//! Route paths shared by the router, guards, and navigation links.

pub const LOGIN: &str = "/";
pub const REGISTER: &str = "/signin";
pub const CLIENT_HOME: &str = "/client";
pub const CLIENT_BOOKINGS: &str = "/client/bookings";
pub const PROVIDER_HOME: &str = "/provider";
pub const PROVIDER_BOOKINGS: &str = "/provider/bookings";
