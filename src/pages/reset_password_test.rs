use super::*;

#[test]
fn validate_reset_input_accepts_key_and_matching_passwords() {
    assert_eq!(
        validate_reset_input(Some("tok-1"), "longenough", "longenough"),
        Ok(("tok-1".to_owned(), "longenough".to_owned()))
    );
}

#[test]
fn validate_reset_input_requires_a_key() {
    assert_eq!(
        validate_reset_input(None, "longenough", "longenough"),
        Err("Missing reset key. Use the link from your email.")
    );
    assert_eq!(
        validate_reset_input(Some(""), "longenough", "longenough"),
        Err("Missing reset key. Use the link from your email.")
    );
}

#[test]
fn done_notice_points_back_at_login() {
    assert!(RESET_DONE_NOTICE.contains("Log in"));
}

#[test]
fn validate_reset_input_enforces_password_rules() {
    assert_eq!(
        validate_reset_input(Some("tok"), "short", "short"),
        Err("Password must be at least 8 characters long.")
    );
    assert_eq!(
        validate_reset_input(Some("tok"), "longenough", "other"),
        Err("Passwords do not match.")
    );
}
