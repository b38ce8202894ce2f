use super::*;

#[test]
fn recipe_endpoint_formats_expected_path() {
    assert_eq!(recipe_endpoint(42), "/api/recipes/42");
}

#[test]
fn user_recipes_endpoint_formats_expected_path() {
    assert_eq!(user_recipes_endpoint(3), "/api/recipes/user/3");
}

#[test]
fn recipes_request_failed_message_formats_status() {
    assert_eq!(recipes_request_failed_message(404), "recipe request failed: 404");
}

#[test]
fn update_failed_message_formats_status() {
    assert_eq!(update_failed_message(500), "failed to update recipe (status 500)");
}

#[test]
fn generate_failed_message_formats_status() {
    assert_eq!(generate_failed_message(503), "generation request failed: 503");
}
