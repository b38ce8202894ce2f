#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn upload_failure_message_is_user_presentable() {
    assert_eq!(UPLOAD_FAILED_MESSAGE, "Unable to upload image");
}
