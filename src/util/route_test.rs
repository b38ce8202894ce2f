use super::*;

#[test]
fn parses_plain_decimal_ids() {
    assert_eq!(parse_recipe_id("7"), Some(7));
    assert_eq!(parse_recipe_id("42"), Some(42));
}

#[test]
fn rejects_empty_and_non_numeric() {
    assert_eq!(parse_recipe_id(""), None);
    assert_eq!(parse_recipe_id("abc"), None);
    assert_eq!(parse_recipe_id("7b"), None);
    assert_eq!(parse_recipe_id("-3"), None);
}

#[test]
fn rejects_overflowing_ids() {
    assert_eq!(parse_recipe_id("99999999999999999999"), None);
}
