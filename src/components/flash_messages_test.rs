use super::*;

#[test]
fn severity_maps_to_distinct_classes() {
    assert_eq!(severity_class(Severity::Error), "flash flash--error");
    assert_eq!(severity_class(Severity::Info), "flash flash--info");
}

#[test]
fn dismiss_window_is_long_enough_to_read() {
    assert!(DISMISS_AFTER >= Duration::from_secs(5));
}
