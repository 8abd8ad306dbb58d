use super::*;

#[test]
fn user_deserializes_with_partial_fields() {
    let raw = serde_json::json!({
        "id": 42,
        "name": "Ada",
        "is_educator": true,
        "email_confirmed": true,
        "picture_url": "https://uploads.example/ada.png"
    });
    let user: User = serde_json::from_value(raw).unwrap();
    assert_eq!(user.id, 42);
    assert_eq!(user.name, "Ada");
    assert!(user.is_educator);
    assert!(!user.is_community_partner);
    assert_eq!(user.email, None);
    assert_eq!(user.picture_url.as_deref(), Some("https://uploads.example/ada.png"));
}

#[test]
fn api_key_grant_reads_camel_case_key() {
    let raw = serde_json::json!({
        "apiKey": "K123",
        "user": { "id": 1, "name": "Ada" }
    });
    let grant: ApiKeyGrant = serde_json::from_value(raw).unwrap();
    assert_eq!(grant.api_key, "K123");
    assert_eq!(grant.user.id, 1);
}

#[test]
fn user_grant_reads_warning_message_when_present() {
    let raw = serde_json::json!({
        "apiKey": "K456",
        "data": { "id": 2, "name": "Grace" },
        "warningMessage": "Failed to send email confirmation: timeout"
    });
    let grant: UserGrant = serde_json::from_value(raw).unwrap();
    assert_eq!(grant.data.name, "Grace");
    assert!(grant.warning_message.is_some());

    let raw = serde_json::json!({
        "apiKey": "K456",
        "data": { "id": 2, "name": "Grace" }
    });
    let grant: UserGrant = serde_json::from_value(raw).unwrap();
    assert_eq!(grant.warning_message, None);
}

#[test]
fn error_body_tolerates_missing_message() {
    let body: ErrorBody = serde_json::from_value(serde_json::json!({})).unwrap();
    assert_eq!(body.message, None);

    let body: ErrorBody =
        serde_json::from_value(serde_json::json!({ "message": "taken" })).unwrap();
    assert_eq!(body.message.as_deref(), Some("taken"));
}

#[test]
fn new_user_serializes_signup_payload_shape() {
    let user = NewUser {
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        is_educator: true,
        is_community_partner: false,
        zipcode: Some("97201".to_owned()),
    };
    let value = serde_json::to_value(&user).unwrap();
    assert_eq!(value["name"], "Ada");
    assert_eq!(value["email"], "ada@example.com");
    assert_eq!(value["is_educator"], true);
}
