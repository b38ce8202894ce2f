use super::*;

// =============================================================
// Field validation
// =============================================================

#[test]
fn missing_fields_are_rejected() {
    assert_eq!(validate_register_input("", "pw", "pw"), Err(REQUIRED_FIELDS));
    assert_eq!(validate_register_input("alice", "", "pw"), Err(REQUIRED_FIELDS));
    assert_eq!(validate_register_input("alice", "pw", ""), Err(REQUIRED_FIELDS));
}

#[test]
fn mismatched_confirmation_is_rejected() {
    assert_eq!(validate_register_input("alice", "pw1", "pw2"), Err(PASSWORD_MISMATCH));
}

#[test]
fn matching_fields_pass_validation() {
    assert_eq!(validate_register_input("alice", "hunter2", "hunter2"), Ok(()));
}

#[test]
fn required_check_runs_before_mismatch_check() {
    // An empty confirm field reads as "required", not "mismatch".
    assert_eq!(validate_register_input("alice", "pw", ""), Err(REQUIRED_FIELDS));
}
