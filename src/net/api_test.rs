use futures::FutureExt;

use super::*;

#[test]
fn login_authorization_formats_basic_email_password() {
    assert_eq!(login_authorization("a@b.com", "pw"), "Basic:a@b.com:pw");
}

#[test]
fn api_key_authorization_formats_basic_api_key() {
    assert_eq!(api_key_authorization("K123"), "Basic:api:K123");
}

#[test]
fn user_endpoint_formats_expected_path() {
    assert_eq!(user_endpoint(42), "/api/user/42");
}

#[test]
fn request_reset_password_endpoint_embeds_email() {
    assert_eq!(
        request_reset_password_endpoint("a@b.com"),
        "/api/requestresetpassword/a@b.com"
    );
}

#[test]
fn failed_message_formats_status() {
    assert_eq!(failed_message("signup", 400), "signup failed: 400");
}

#[test]
fn confirm_email_request_failed_message_appends_detail() {
    assert_eq!(
        confirm_email_request_failed_message(None),
        "Failed to send email confirmation email"
    );
    assert_eq!(
        confirm_email_request_failed_message(Some("not logged in")),
        "Failed to send email confirmation email: not logged in"
    );
}

#[test]
fn authorization_slot_is_shared_between_clones() {
    let api = Api::default();
    let clone = api.clone();
    api.set_authorization(Some(api_key_authorization("K1")));
    assert_eq!(clone.authorization().as_deref(), Some("Basic:api:K1"));

    clone.set_authorization(None);
    assert_eq!(api.authorization(), None);
}

#[cfg(not(feature = "browser"))]
#[test]
fn native_calls_stub_out_with_an_error() {
    let api = Api::default();
    let outcome = api.request_api_key().now_or_never();
    assert_eq!(outcome, Some(Err("not available outside the browser".to_owned())));
}
