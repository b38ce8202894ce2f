use super::*;

#[test]
fn empty_password_is_rejected_with_required_message() {
    assert_eq!(validate_login_input("alice", ""), Err("Username and password are required."));
}

#[test]
fn empty_username_is_rejected_with_required_message() {
    assert_eq!(validate_login_input("", "hunter2"), Err(REQUIRED_FIELDS));
}

#[test]
fn whitespace_only_fields_are_rejected() {
    assert_eq!(validate_login_input("   ", "hunter2"), Err(REQUIRED_FIELDS));
    assert_eq!(validate_login_input("alice", "   "), Err(REQUIRED_FIELDS));
}

#[test]
fn filled_fields_pass_validation() {
    assert_eq!(validate_login_input("alice", "hunter2"), Ok(()));
}

#[test]
fn rejected_credentials_message_matches_ui_copy() {
    assert_eq!(INVALID_CREDENTIALS, "Invalid username or password.");
}
