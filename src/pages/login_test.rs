use super::*;

#[test]
fn validate_login_input_trims_the_email() {
    assert_eq!(
        validate_login_input("  user@example.com  ", "pw"),
        Ok(("user@example.com".to_owned(), "pw".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(
        validate_login_input("", "pw"),
        Err("Enter both email and password.")
    );
    assert_eq!(
        validate_login_input("user@example.com", ""),
        Err("Enter both email and password.")
    );
    assert_eq!(
        validate_login_input("   ", "pw"),
        Err("Enter both email and password.")
    );
}

#[test]
fn login_failure_notice_does_not_leak_which_field_was_wrong() {
    assert_eq!(LOGIN_FAILED_NOTICE, "Email or password not recognized.");
}

#[test]
fn password_whitespace_is_preserved() {
    assert_eq!(
        validate_login_input("a@b.com", " pw "),
        Ok(("a@b.com".to_owned(), " pw ".to_owned()))
    );
}
