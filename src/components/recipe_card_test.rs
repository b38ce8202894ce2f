use super::*;

#[test]
fn placeholder_image_url_is_seeded_by_id() {
    assert_eq!(
        placeholder_image_url(9, "Pancakes"),
        "https://placeholders.io/400/400/Pancakes?style=photographic&seed=9"
    );
}

#[test]
fn placeholder_image_urls_differ_per_recipe() {
    assert_ne!(placeholder_image_url(1, "Soup"), placeholder_image_url(2, "Soup"));
}
