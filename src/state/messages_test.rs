use super::*;

#[test]
fn push_appends_in_order_with_increasing_ids() {
    let mut log = MessageLog::default();
    let first = log.error("bad credentials");
    let second = log.info("password reset email sent");

    assert!(first < second);
    assert_eq!(log.messages.len(), 2);
    assert_eq!(log.messages[0].severity, Severity::Error);
    assert_eq!(log.messages[0].text, "bad credentials");
    assert_eq!(log.messages[1].severity, Severity::Info);
}

#[test]
fn dismiss_removes_only_the_target_notice() {
    let mut log = MessageLog::default();
    let first = log.error("one");
    let second = log.error("two");

    log.dismiss(first);
    assert_eq!(log.messages.len(), 1);
    assert_eq!(log.messages[0].id, second);
}

#[test]
fn dismiss_of_unknown_id_is_a_no_op() {
    let mut log = MessageLog::default();
    log.info("still here");
    log.dismiss(99);
    assert_eq!(log.messages.len(), 1);
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut log = MessageLog::default();
    let first = log.error("one");
    log.dismiss(first);
    let second = log.error("two");
    assert_ne!(first, second);
}
