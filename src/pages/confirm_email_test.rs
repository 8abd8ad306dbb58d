use super::*;

#[test]
fn status_text_covers_every_state() {
    assert_eq!(status_text(&ConfirmStatus::Working), "Confirming your email address...");
    assert_eq!(
        status_text(&ConfirmStatus::MissingKey),
        "No confirmation key found. Use the link from your email."
    );
    assert_eq!(status_text(&ConfirmStatus::Confirmed), "Your email address is confirmed.");
    assert_eq!(
        status_text(&ConfirmStatus::Failed("bad key".to_owned())),
        "Email confirmation failed: bad key"
    );
}
