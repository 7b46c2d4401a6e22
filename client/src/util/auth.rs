//! Route guard for screens that need a signed-in account.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guarded pages check the persisted session once when they mount and send the
//! visitor to the login screen when it does not qualify. The check reads the
//! session repository, not the in-memory store, and never validates the token
//! with the API; a stale token surfaces later as a failed API call.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::paths;

use super::session_repo::{PersistedSession, SessionRepository};

/// What a guarded route requires of the persisted session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GuardPolicy {
    /// A stored user record is enough. Matches the historical behavior, which
    /// admits a visitor whose token cookie has already expired.
    #[default]
    UserPresent,
    /// Both the user record and the token cookie must be present.
    UserAndToken,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(&'static str),
}

pub fn guard_decision(persisted: &PersistedSession, policy: GuardPolicy) -> GuardDecision {
    let admitted = match policy {
        GuardPolicy::UserPresent => persisted.has_user(),
        GuardPolicy::UserAndToken => persisted.has_user() && persisted.has_token(),
    };
    if admitted { GuardDecision::Allow } else { GuardDecision::Redirect(paths::LOGIN) }
}

/// Evaluate the guard against whatever `repo` currently holds.
pub fn check_route(repo: &impl SessionRepository, policy: GuardPolicy) -> GuardDecision {
    guard_decision(&repo.get(), policy)
}

/// Check the route and, on a redirect, navigate there replacing the current
/// history entry.
pub fn run_route_guard(
    repo: &impl SessionRepository,
    policy: GuardPolicy,
    navigate: &impl Fn(&str, NavigateOptions),
) -> GuardDecision {
    let decision = check_route(repo, policy);
    if let GuardDecision::Redirect(target) = decision {
        log::debug!("route guard redirecting to {target}");
        navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
    }
    decision
}

/// Run the guard once when the calling component mounts.
pub fn install_route_guard<R, F>(repo: R, policy: GuardPolicy, navigate: F)
where
    R: SessionRepository + 'static,
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        run_route_guard(&repo, policy, &navigate);
    });
}
