use super::*;

// =============================================================
// Formatting
// =============================================================

#[test]
fn format_set_cookie_writes_session_token_attributes() {
    let written = format_set_cookie("token", "abc", &CookieOptions::session_token());
    let parsed = Cookie::parse(written).expect("parse");
    assert_eq!(parsed.name_value(), ("token", "abc"));
    assert_eq!(parsed.path(), Some("/"));
    assert_eq!(parsed.max_age(), Some(Duration::days(7)));
    assert_eq!(parsed.secure(), Some(true));
    assert_eq!(parsed.same_site(), Some(SameSite::Strict));
}

#[test]
fn format_set_cookie_omits_max_age_when_unset() {
    let options = CookieOptions {
        path: "/app".to_owned(),
        max_age_secs: None,
        secure: false,
        same_site: SameSite::Lax,
    };
    let written = format_set_cookie("pref", "1", &options);
    assert!(!written.contains("Max-Age"));
    assert!(!written.contains("Secure"));
    let parsed = Cookie::parse(written).expect("parse");
    assert_eq!(parsed.path(), Some("/app"));
    assert_eq!(parsed.same_site(), Some(SameSite::Lax));
}

#[test]
fn format_set_cookie_writes_value_verbatim() {
    let written = format_set_cookie("token", "a/b+c=", &CookieOptions::session_token());
    assert!(written.starts_with("token=a/b+c=; "));
}

#[test]
fn format_remove_cookie_expires_on_same_path() {
    let written = format_remove_cookie("token", &CookieOptions::session_token());
    let parsed = Cookie::parse(written).expect("parse");
    assert_eq!(parsed.name_value(), ("token", ""));
    assert_eq!(parsed.max_age(), Some(Duration::ZERO));
    assert_eq!(parsed.path(), Some("/"));
    assert_eq!(parsed.secure(), Some(true));
    assert_eq!(parsed.same_site(), Some(SameSite::Strict));
}

// =============================================================
// Parsing
// =============================================================

#[test]
fn find_cookie_matches_exact_name() {
    let header = "xtoken=nope; token=abc; tokens=other";
    assert_eq!(find_cookie(header, "token"), Some("abc".to_owned()));
}

#[test]
fn find_cookie_missing_name() {
    assert_eq!(find_cookie("theme=dark", "token"), None);
    assert_eq!(find_cookie("", "token"), None);
}

#[test]
fn find_cookie_treats_empty_value_as_absent() {
    assert_eq!(find_cookie("token=; theme=dark", "token"), None);
}

#[test]
fn find_cookie_keeps_plus_and_padding() {
    assert_eq!(find_cookie("token=ab+cd", "token"), Some("ab+cd".to_owned()));
    assert_eq!(find_cookie("theme=dark; token=abc==", "token"), Some("abc==".to_owned()));
}

#[test]
fn jwt_shaped_token_reads_back_unchanged() {
    let token = "eyJhbGciOiJIUzI1NiJ9.eyJzdWIiOiJ1MSJ9.sig-_part";
    let written = format_set_cookie("token", token, &CookieOptions::session_token());
    let pair = written.split(';').next().unwrap_or_default();
    assert_eq!(find_cookie(pair, "token"), Some(token.to_owned()));
}

// =============================================================
// MemoryCookies
// =============================================================

#[test]
fn memory_cookies_records_value_and_options() {
    let jar = MemoryCookies::new();
    jar.set("token", "abc", &CookieOptions::session_token());
    assert_eq!(jar.get("token"), Some("abc".to_owned()));
    assert_eq!(jar.options("token"), Some(CookieOptions::session_token()));
}

#[test]
fn memory_cookies_header_looks_like_document_cookie() {
    let jar = MemoryCookies::new();
    jar.set("token", "ab+cd", &CookieOptions::session_token());
    jar.set("theme", "dark", &CookieOptions::session_token());
    assert_eq!(jar.header(), "theme=dark; token=ab+cd");
    assert_eq!(jar.get("token"), Some("ab+cd".to_owned()));
}

#[test]
fn memory_cookies_empty_write_reads_as_absent() {
    let jar = MemoryCookies::new();
    jar.set("token", "", &CookieOptions::session_token());
    assert_eq!(jar.get("token"), None);
    assert_eq!(jar.header(), "token=");
}

#[test]
fn memory_cookies_remove_deletes_through_max_age_zero() {
    let jar = MemoryCookies::new();
    jar.set("token", "abc", &CookieOptions::session_token());
    jar.remove("token", &CookieOptions::session_token());
    assert_eq!(jar.get("token"), None);
    assert_eq!(jar.options("token"), None);
    assert_eq!(jar.header(), "");
}

#[test]
fn memory_cookies_expire_drops_entry() {
    let jar = MemoryCookies::new();
    jar.set("token", "abc", &CookieOptions::session_token());
    jar.expire("token");
    assert_eq!(jar.get("token"), None);
}
