use super::*;
use crate::net::types::Role;
use crate::util::cookie::MemoryCookies;
use crate::util::storage::MemoryStore;

fn make_user() -> User {
    User {
        id: "u1".to_owned(),
        name: "Ana".to_owned(),
        tax_id: String::new(),
        email: String::new(),
        role: Role::Client,
        balance: 0.0,
    }
}

fn make_repo() -> (CookieStorageRepository<MemoryCookies, MemoryStore>, MemoryCookies, MemoryStore) {
    let cookies = MemoryCookies::new();
    let storage = MemoryStore::new();
    let repo = CookieStorageRepository::new(cookies.clone(), storage.clone());
    (repo, cookies, storage)
}

#[test]
fn get_on_empty_sinks_is_empty() {
    let (repo, _, _) = make_repo();
    assert_eq!(repo.get(), PersistedSession::default());
}

#[test]
fn set_writes_cookie_and_user_entry() {
    let (repo, cookies, storage) = make_repo();
    repo.set(&make_user(), "abc");

    assert_eq!(cookies.get(TOKEN_COOKIE), Some("abc".to_owned()));
    assert_eq!(cookies.options(TOKEN_COOKIE), Some(CookieOptions::session_token()));
    let raw = storage.get(USER_STORAGE_KEY).unwrap();
    assert_eq!(serde_json::from_str::<User>(&raw).unwrap(), make_user());
}

#[test]
fn get_reads_back_both_halves() {
    let (repo, _, _) = make_repo();
    repo.set(&make_user(), "abc");
    let persisted = repo.get();
    assert_eq!(persisted.user, Some(make_user()));
    assert_eq!(persisted.token, Some("abc".to_owned()));
}

#[test]
fn set_user_leaves_token_alone() {
    let (repo, cookies, _) = make_repo();
    repo.set(&make_user(), "abc");
    let mut richer = make_user();
    richer.balance = 900.0;
    repo.set_user(&richer);

    assert_eq!(cookies.get(TOKEN_COOKIE), Some("abc".to_owned()));
    assert_eq!(repo.get().user, Some(richer));
}

#[test]
fn clear_removes_both_sinks() {
    let (repo, cookies, storage) = make_repo();
    repo.set(&make_user(), "abc");
    repo.clear();
    assert_eq!(cookies.get(TOKEN_COOKIE), None);
    assert_eq!(storage.get(USER_STORAGE_KEY), None);
    assert_eq!(repo.get(), PersistedSession::default());
}

#[test]
fn halves_are_independent() {
    let (repo, cookies, _) = make_repo();
    repo.set(&make_user(), "abc");
    cookies.expire(TOKEN_COOKIE);

    let persisted = repo.get();
    assert!(persisted.has_user());
    assert!(!persisted.has_token());
}

#[test]
fn malformed_user_entry_reads_as_missing() {
    let (repo, cookies, storage) = make_repo();
    cookies.set(TOKEN_COOKIE, "abc", &CookieOptions::session_token());
    storage.set(USER_STORAGE_KEY, "{\"name\":");
    let persisted = repo.get();
    assert_eq!(persisted.user, None);
    assert_eq!(persisted.token, Some("abc".to_owned()));
}
