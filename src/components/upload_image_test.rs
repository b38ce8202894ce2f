use super::*;

// =============================================================
// Image type allowlist
// =============================================================

#[test]
fn accepted_image_types_pass() {
    assert!(is_supported_image_type("image/jpeg"));
    assert!(is_supported_image_type("image/png"));
    assert!(is_supported_image_type("image/gif"));
    assert!(is_supported_image_type("image/webp"));
}

#[test]
fn bmp_is_rejected() {
    assert!(!is_supported_image_type("image/bmp"));
}

#[test]
fn non_image_types_are_rejected() {
    assert!(!is_supported_image_type("application/pdf"));
    assert!(!is_supported_image_type("text/html"));
    assert!(!is_supported_image_type(""));
}

#[test]
fn type_check_is_case_sensitive_like_the_browser_mime() {
    // Browsers report lowercase MIME types; anything else is not ours.
    assert!(!is_supported_image_type("IMAGE/PNG"));
}

// =============================================================
// Messages
// =============================================================

#[test]
fn unsupported_type_message_matches_ui_copy() {
    assert_eq!(UNSUPPORTED_IMAGE_TYPE, "Unsupported Image Type");
}

#[test]
fn missing_file_message_matches_ui_copy() {
    assert_eq!(NO_FILE_SELECTED, "Choose an image first.");
}
