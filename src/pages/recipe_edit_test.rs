use super::*;

#[test]
fn empty_title_is_rejected() {
    assert_eq!(validate_recipe_edit("", "30"), Err(TITLE_REQUIRED));
    assert_eq!(validate_recipe_edit("   ", "30"), Err(TITLE_REQUIRED));
}

#[test]
fn non_numeric_time_is_rejected() {
    assert_eq!(validate_recipe_edit("Pancakes", "soon"), Err(TIME_INVALID));
    assert_eq!(validate_recipe_edit("Pancakes", ""), Err(TIME_INVALID));
}

#[test]
fn non_positive_time_is_rejected() {
    assert_eq!(validate_recipe_edit("Pancakes", "0"), Err(TIME_INVALID));
    assert_eq!(validate_recipe_edit("Pancakes", "-5"), Err(TIME_INVALID));
}

#[test]
fn valid_input_yields_minutes() {
    assert_eq!(validate_recipe_edit("Pancakes", "25"), Ok(25));
    assert_eq!(validate_recipe_edit("Pancakes", " 25 "), Ok(25));
}
