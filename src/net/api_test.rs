use super::*;

#[test]
fn profile_update_failed_message_formats_status() {
    assert_eq!(profile_update_failed_message(409), "profile update failed: 409");
}

#[test]
fn credentials_serialize_as_plain_fields() {
    let credentials = Credentials { username: "alice".to_owned(), password: "hunter2".to_owned() };
    let json = serde_json::to_value(&credentials).unwrap();
    assert_eq!(json["username"], "alice");
    assert_eq!(json["password"], "hunter2");
}
