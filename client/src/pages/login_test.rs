use super::*;

#[test]
fn validate_login_input_trims_email_only() {
    assert_eq!(
        validate_login_input("  user@example.com ", "secret"),
        Ok(("user@example.com".to_owned(), "secret".to_owned()))
    );
}

#[test]
fn validate_login_input_keeps_password_whitespace() {
    assert_eq!(
        validate_login_input("user@example.com", " pw "),
        Ok(("user@example.com".to_owned(), " pw ".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_email() {
    assert_eq!(validate_login_input("   ", "secret"), Err(MISSING_CREDENTIALS_MESSAGE));
}

#[test]
fn validate_login_input_requires_password() {
    assert_eq!(validate_login_input("user@example.com", ""), Err(MISSING_CREDENTIALS_MESSAGE));
}
