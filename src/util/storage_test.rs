use super::*;

#[test]
fn keys_match_the_persisted_contract() {
    // A reload must find the session under exactly these names.
    assert_eq!(TOKEN_KEY, "token");
    assert_eq!(USER_KEY, "usuario");
}

#[test]
fn native_reads_are_absent_not_errors() {
    // Outside the browser every load degrades to None.
    assert!(load_token().is_none());
    assert!(load_user().is_none());
    assert!(load_json::<serde_json::Value>("anything").is_none());
}
