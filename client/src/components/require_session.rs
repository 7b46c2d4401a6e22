//! Wrapper that sends anonymous visitors back to the login screen.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::util::auth::{GuardPolicy, install_route_guard};
use crate::util::session_repo::browser_repository;

/// Render `children` after installing the route guard.
///
/// The guard reads the persisted user record once on mount; children render
/// unchanged either way and the redirect replaces the history entry.
#[component]
pub fn RequireSession(#[prop(optional)] policy: GuardPolicy, children: Children) -> impl IntoView {
    let navigate = use_navigate();
    install_route_guard(browser_repository(), policy, navigate);
    children()
}
