use super::*;

#[test]
fn blank_input_maps_to_none() {
    assert_eq!(none_if_empty(""), None);
    assert_eq!(none_if_empty("   "), None);
}

#[test]
fn values_are_trimmed() {
    assert_eq!(none_if_empty(" https://example.com/a.png "), Some("https://example.com/a.png".to_owned()));
}
