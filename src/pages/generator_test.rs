use super::*;

// =============================================================
// Ingredient chips
// =============================================================

#[test]
fn add_ingredient_trims_and_appends() {
    let mut list = Vec::new();
    assert!(add_ingredient(&mut list, "  chicken  "));
    assert_eq!(list, vec!["chicken"]);
}

#[test]
fn add_ingredient_rejects_blank_input() {
    let mut list = Vec::new();
    assert!(!add_ingredient(&mut list, ""));
    assert!(!add_ingredient(&mut list, "   "));
    assert!(list.is_empty());
}

#[test]
fn add_ingredient_rejects_duplicates() {
    let mut list = vec!["chicken".to_owned()];
    assert!(!add_ingredient(&mut list, "chicken"));
    assert!(!add_ingredient(&mut list, " chicken "));
    assert_eq!(list.len(), 1);
}

#[test]
fn add_ingredient_keeps_insertion_order() {
    let mut list = Vec::new();
    add_ingredient(&mut list, "chicken");
    add_ingredient(&mut list, "rice");
    assert_eq!(list, vec!["chicken", "rice"]);
}

// =============================================================
// Request validation
// =============================================================

#[test]
fn empty_ingredient_list_is_rejected() {
    assert_eq!(validate_generate(&[], "30"), Err(NO_INGREDIENTS));
}

#[test]
fn invalid_time_is_rejected() {
    let items = vec!["chicken".to_owned()];
    assert_eq!(validate_generate(&items, ""), Err(TIME_INVALID));
    assert_eq!(validate_generate(&items, "zero"), Err(TIME_INVALID));
    assert_eq!(validate_generate(&items, "0"), Err(TIME_INVALID));
}

#[test]
fn valid_request_yields_time_budget() {
    let items = vec!["chicken".to_owned()];
    assert_eq!(validate_generate(&items, "45"), Ok(45));
}

// =============================================================
// Save status
// =============================================================

#[test]
fn save_status_defaults_to_idle() {
    assert_eq!(SaveStatus::default(), SaveStatus::Idle);
}
