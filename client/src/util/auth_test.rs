use super::*;
use crate::config::USER_STORAGE_KEY;
use crate::net::types::{Role, User};
use crate::state::session::SessionStore;
use crate::util::cookie::MemoryCookies;
use crate::util::session_repo::CookieStorageRepository;
use crate::util::storage::{KeyValueStore, MemoryStore};

fn ana() -> User {
    User {
        id: "u1".to_owned(),
        name: "Ana".to_owned(),
        tax_id: String::new(),
        email: String::new(),
        role: Role::Client,
        balance: 0.0,
    }
}

fn make_repo() -> (CookieStorageRepository<MemoryCookies, MemoryStore>, MemoryStore) {
    let storage = MemoryStore::new();
    (CookieStorageRepository::new(MemoryCookies::new(), storage.clone()), storage)
}

// =============================================================
// guard_decision
// =============================================================

#[test]
fn redirects_to_login_when_nothing_persisted() {
    let persisted = PersistedSession::default();
    assert_eq!(
        guard_decision(&persisted, GuardPolicy::default()),
        GuardDecision::Redirect(crate::paths::LOGIN)
    );
}

#[test]
fn allows_when_user_persisted() {
    let persisted = PersistedSession { user: Some(ana()), token: Some("abc".to_owned()) };
    assert_eq!(guard_decision(&persisted, GuardPolicy::UserPresent), GuardDecision::Allow);
    assert_eq!(guard_decision(&persisted, GuardPolicy::UserAndToken), GuardDecision::Allow);
}

#[test]
fn default_policy_admits_user_without_token() {
    let persisted = PersistedSession { user: Some(ana()), token: None };
    assert_eq!(guard_decision(&persisted, GuardPolicy::default()), GuardDecision::Allow);
}

#[test]
fn strict_policy_requires_token_too() {
    let persisted = PersistedSession { user: Some(ana()), token: None };
    assert_eq!(
        guard_decision(&persisted, GuardPolicy::UserAndToken),
        GuardDecision::Redirect(crate::paths::LOGIN)
    );
}

#[test]
fn token_alone_never_admits() {
    let persisted = PersistedSession { user: None, token: Some("abc".to_owned()) };
    assert_eq!(
        guard_decision(&persisted, GuardPolicy::UserPresent),
        GuardDecision::Redirect(crate::paths::LOGIN)
    );
}

// =============================================================
// check_route against a repository
// =============================================================

#[test]
fn fresh_page_load_redirects() {
    let (repo, _) = make_repo();
    assert_eq!(check_route(&repo, GuardPolicy::default()), GuardDecision::Redirect(crate::paths::LOGIN));
}

#[test]
fn user_without_cookie_is_admitted_while_store_stays_anonymous() {
    let (repo, storage) = make_repo();
    storage.set(USER_STORAGE_KEY, &serde_json::to_string(&ana()).unwrap());

    let mut store = SessionStore::new(repo.clone());
    store.load_from_persistence();

    assert!(!store.is_authenticated());
    assert_eq!(check_route(&repo, GuardPolicy::default()), GuardDecision::Allow);
}

#[test]
fn logout_makes_guard_redirect() {
    let (repo, _) = make_repo();
    let mut store = SessionStore::new(repo.clone());
    store.login(ana(), "abc".to_owned());
    assert_eq!(check_route(&repo, GuardPolicy::default()), GuardDecision::Allow);

    store.logout();
    assert_eq!(check_route(&repo, GuardPolicy::default()), GuardDecision::Redirect(crate::paths::LOGIN));
}

// =============================================================
// run_route_guard navigation
// =============================================================

type Visits = std::rc::Rc<std::cell::RefCell<Vec<(String, bool)>>>;

fn recording_navigate() -> (Visits, impl Fn(&str, NavigateOptions)) {
    let visits = Visits::default();
    let sink = visits.clone();
    let navigate = move |to: &str, options: NavigateOptions| {
        sink.borrow_mut().push((to.to_owned(), options.replace));
    };
    (visits, navigate)
}

#[test]
fn guard_replaces_history_entry_when_redirecting() {
    let (repo, _) = make_repo();
    let (visits, navigate) = recording_navigate();

    let decision = run_route_guard(&repo, GuardPolicy::default(), &navigate);

    assert_eq!(decision, GuardDecision::Redirect(crate::paths::LOGIN));
    assert_eq!(*visits.borrow(), vec![(crate::paths::LOGIN.to_owned(), true)]);
}

#[test]
fn guard_does_not_navigate_when_admitted() {
    let (repo, storage) = make_repo();
    storage.set(USER_STORAGE_KEY, &serde_json::to_string(&ana()).unwrap());
    let (visits, navigate) = recording_navigate();

    let decision = run_route_guard(&repo, GuardPolicy::default(), &navigate);

    assert_eq!(decision, GuardDecision::Allow);
    assert!(visits.borrow().is_empty());
}

#[test]
fn strict_guard_redirects_after_cookie_expiry() {
    let (repo, _) = make_repo();
    let mut store = SessionStore::new(repo.clone());
    store.login(ana(), "abc".to_owned());
    repo.cookies().expire(crate::config::TOKEN_COOKIE);
    let (visits, navigate) = recording_navigate();

    assert_eq!(run_route_guard(&repo, GuardPolicy::default(), &navigate), GuardDecision::Allow);
    assert_eq!(
        run_route_guard(&repo, GuardPolicy::UserAndToken, &navigate),
        GuardDecision::Redirect(crate::paths::LOGIN)
    );
    assert_eq!(visits.borrow().len(), 1);
}
