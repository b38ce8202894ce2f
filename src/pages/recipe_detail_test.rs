use super::*;

fn make_recipe(user_id: i64) -> Recipe {
    Recipe {
        id: 7,
        user_id,
        title: "Pancakes".to_owned(),
        image_url: None,
        total_time: 25,
        ingredients: vec!["egg".to_owned()],
        instructions: vec!["mix".to_owned()],
    }
}

#[test]
fn owner_sees_controls() {
    let user = User { id: 3, username: "alice".to_owned() };
    assert!(is_owner(Some(&user), &make_recipe(3)));
}

#[test]
fn other_users_do_not() {
    let user = User { id: 4, username: "bob".to_owned() };
    assert!(!is_owner(Some(&user), &make_recipe(3)));
}

#[test]
fn signed_out_viewer_does_not() {
    assert!(!is_owner(None, &make_recipe(3)));
}

#[test]
fn ownerless_payload_matches_nobody() {
    // user_id defaults to 0 on sparse payloads; no real user has id 0.
    let user = User { id: 3, username: "alice".to_owned() };
    assert!(!is_owner(Some(&user), &make_recipe(0)));
}
