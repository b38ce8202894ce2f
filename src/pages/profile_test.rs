use super::*;

// =============================================================
// Field validation
// =============================================================

#[test]
fn empty_username_is_rejected() {
    assert_eq!(validate_profile_input("", "", ""), Err(USERNAME_REQUIRED));
    assert_eq!(validate_profile_input("   ", "", ""), Err(USERNAME_REQUIRED));
}

#[test]
fn mismatched_new_password_is_rejected() {
    assert_eq!(validate_profile_input("alice", "new", "other"), Err(PASSWORD_MISMATCH));
}

#[test]
fn empty_new_password_skips_confirmation_check() {
    assert_eq!(validate_profile_input("alice", "", ""), Ok(()));
}

#[test]
fn matching_new_password_passes() {
    assert_eq!(validate_profile_input("alice", "new", "new"), Ok(()));
}

// =============================================================
// Save-button gating
// =============================================================

#[test]
fn untouched_form_counts_as_no_changes() {
    assert!(no_changes("alice", "alice", "", ""));
}

#[test]
fn renamed_user_is_a_change() {
    assert!(!no_changes("alicia", "alice", "", ""));
}

#[test]
fn entered_password_is_a_change() {
    assert!(!no_changes("alice", "alice", "new", ""));
}

#[test]
fn lone_confirmation_is_flagged() {
    assert!(only_confirm_filled("alice", "alice", "", "stray"));
    assert!(!only_confirm_filled("alice", "alice", "new", "stray"));
    assert!(!only_confirm_filled("alicia", "alice", "", "stray"));
}
