use super::*;

#[test]
fn describe_panic_includes_location_and_payload() {
    assert_eq!(
        describe_panic(Some("index out of bounds"), Some("src/app.rs:10:5")),
        "panicked at src/app.rs:10:5: index out of bounds"
    );
    assert_eq!(describe_panic(Some("boom"), None), "panicked: boom");
    assert_eq!(describe_panic(None, Some("src/app.rs:1:1")), "panicked at src/app.rs:1:1");
    assert_eq!(describe_panic(None, None), "panicked");
}

#[test]
fn build_report_fills_empty_cause() {
    let report = build_report("http://h/#/login", "panicked: boom", "stack", None, "agent");
    assert_eq!(report.cause, "");
    assert_eq!(report.error_message, "panicked: boom");
}

#[test]
fn report_serializes_with_wire_field_names() {
    let report = build_report(
        "http://host/#/settings",
        "panicked: boom",
        "Error\n  at f",
        Some("effect"),
        "Mozilla/5.0",
    );
    let value = serde_json::to_value(&report).unwrap_or_default();
    assert_eq!(value["errorUrl"], "http://host/#/settings");
    assert_eq!(value["errorMessage"], "panicked: boom");
    assert_eq!(value["stackTrace"], "Error\n  at f");
    assert_eq!(value["cause"], "effect");
    assert_eq!(value["browser"], "Mozilla/5.0");
}
