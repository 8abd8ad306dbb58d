use super::*;

#[test]
fn parse_user_id_reads_a_numeric_param() {
    assert_eq!(parse_user_id(Some("42")), Ok(42));
}

#[test]
fn parse_user_id_rejects_missing_or_junk_params() {
    assert_eq!(parse_user_id(None), Err("That profile link is not valid."));
    assert_eq!(parse_user_id(Some("abc")), Err("That profile link is not valid."));
    assert_eq!(parse_user_id(Some("")), Err("That profile link is not valid."));
}
