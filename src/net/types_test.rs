use super::*;

// =============================================================
// Helpers
// =============================================================

fn make_recipe() -> Recipe {
    Recipe {
        id: 7,
        user_id: 3,
        title: "Pancakes".to_owned(),
        image_url: Some("https://example.com/pancakes.png".to_owned()),
        total_time: 25,
        ingredients: vec!["egg".to_owned(), "flour".to_owned()],
        instructions: vec!["mix".to_owned(), "bake".to_owned()],
    }
}

// =============================================================
// User serde
// =============================================================

#[test]
fn user_round_trip() {
    let user = User { id: 1, username: "alice".to_owned() };
    let json = serde_json::to_string(&user).unwrap();
    let back: User = serde_json::from_str(&json).unwrap();
    assert_eq!(user, back);
}

#[test]
fn user_id_deserializes_from_numeric_string() {
    let user: User = serde_json::from_str(r#"{"id": "42", "username": "bob"}"#).unwrap();
    assert_eq!(user.id, 42);
}

#[test]
fn user_id_rejects_non_numeric_string() {
    assert!(serde_json::from_str::<User>(r#"{"id": "abc", "username": "bob"}"#).is_err());
}

// =============================================================
// Recipe serde + list normalization
// =============================================================

#[test]
fn recipe_round_trip_preserves_ordered_lists() {
    let recipe = make_recipe();
    let json = serde_json::to_string(&recipe).unwrap();
    let back: Recipe = serde_json::from_str(&json).unwrap();
    assert_eq!(back.ingredients, vec!["egg", "flour"]);
    assert_eq!(back.instructions, vec!["mix", "bake"]);
    assert_eq!(recipe, back);
}

#[test]
fn ingredients_normalize_from_objects_and_strings() {
    let from_objects = serde_json::json!({
        "id": 1,
        "title": "Omelette",
        "ingredients": [{"name": "egg"}],
        "instructions": []
    });
    let from_strings = serde_json::json!({
        "id": 1,
        "title": "Omelette",
        "ingredients": ["egg"],
        "instructions": []
    });
    let a: Recipe = serde_json::from_value(from_objects).unwrap();
    let b: Recipe = serde_json::from_value(from_strings).unwrap();
    assert_eq!(a.ingredients, vec!["egg"]);
    assert_eq!(b.ingredients, vec!["egg"]);
}

#[test]
fn instructions_accept_step_text_and_step_variants() {
    let value = serde_json::json!({
        "id": 1,
        "title": "Toast",
        "ingredients": [],
        "instructions": [
            {"step_text": "slice", "step_number": 1},
            {"step": "toast"},
            "serve"
        ]
    });
    let recipe: Recipe = serde_json::from_value(value).unwrap();
    assert_eq!(recipe.instructions, vec!["slice", "toast", "serve"]);
}

#[test]
fn unrecognized_list_item_normalizes_to_empty_string() {
    let value = serde_json::json!({
        "id": 1,
        "title": "Mystery",
        "ingredients": [{"quantity": 3}, 17, null],
        "instructions": []
    });
    let recipe: Recipe = serde_json::from_value(value).unwrap();
    assert_eq!(recipe.ingredients, vec!["", "", ""]);
}

#[test]
fn recipe_user_id_defaults_to_zero_when_absent() {
    let value = serde_json::json!({
        "id": 5,
        "title": "Soup",
        "total_time": 30,
        "ingredients": [],
        "instructions": []
    });
    let recipe: Recipe = serde_json::from_value(value).unwrap();
    assert_eq!(recipe.user_id, 0);
    assert_eq!(recipe.image_url, None);
}

#[test]
fn recipe_total_time_accepts_integral_float() {
    let value = serde_json::json!({
        "id": 5,
        "title": "Soup",
        "total_time": 30.0,
        "ingredients": [],
        "instructions": []
    });
    let recipe: Recipe = serde_json::from_value(value).unwrap();
    assert_eq!(recipe.total_time, 30);
}

#[test]
fn recipe_total_time_rejects_fractional_float() {
    let value = serde_json::json!({
        "id": 5,
        "title": "Soup",
        "total_time": 30.5,
        "ingredients": [],
        "instructions": []
    });
    assert!(serde_json::from_value::<Recipe>(value).is_err());
}

// =============================================================
// Write payload constructors
// =============================================================

#[test]
fn recipe_create_from_parts_wraps_and_numbers_steps() {
    let payload = RecipeCreate::from_parts(
        "Pancakes".to_owned(),
        None,
        25,
        &["egg".to_owned(), "flour".to_owned()],
        &["mix".to_owned(), "bake".to_owned()],
    );
    assert_eq!(payload.ingredients[0].name, "egg");
    assert_eq!(payload.ingredients[1].name, "flour");
    assert_eq!(payload.instructions[0].step_text, "mix");
    assert_eq!(payload.instructions[0].step_number, 1);
    assert_eq!(payload.instructions[1].step_text, "bake");
    assert_eq!(payload.instructions[1].step_number, 2);
}

#[test]
fn recipe_create_omits_absent_image_url() {
    let payload = RecipeCreate::from_parts("Toast".to_owned(), None, 5, &[], &[]);
    let json = serde_json::to_value(&payload).unwrap();
    assert!(json.get("image_url").is_none());
}

#[test]
fn recipe_create_from_generated_maps_name_to_title() {
    let generated = GeneratedRecipe {
        name: "Shakshuka".to_owned(),
        total_time: 35,
        ingredients: vec!["egg".to_owned(), "tomato".to_owned()],
        instructions: vec!["simmer".to_owned(), "crack eggs".to_owned()],
    };
    let payload = RecipeCreate::from_generated(&generated);
    assert_eq!(payload.title, "Shakshuka");
    assert_eq!(payload.total_time, 35);
    assert_eq!(payload.instructions[1].step_number, 2);
}

#[test]
fn recipe_update_image_only_serializes_single_field() {
    let payload = RecipeUpdate::image_only("https://example.com/p.png".to_owned());
    let json = serde_json::to_value(&payload).unwrap();
    let object = json.as_object().unwrap();
    assert_eq!(object.len(), 1);
    assert_eq!(object["image_url"], "https://example.com/p.png");
}

#[test]
fn recipe_update_edit_carries_every_field() {
    let payload = RecipeUpdate::edit(
        "Pancakes".to_owned(),
        Some("https://example.com/p.png".to_owned()),
        25,
        &["egg".to_owned()],
        &["mix".to_owned()],
    );
    assert_eq!(payload.title.as_deref(), Some("Pancakes"));
    assert_eq!(payload.total_time, Some(25));
    assert_eq!(payload.instructions.unwrap()[0].step_number, 1);
}

// =============================================================
// Auth payloads
// =============================================================

#[test]
fn signup_data_omits_absent_image_url() {
    let data = SignupData { username: "alice".to_owned(), password: "pw".to_owned(), image_url: None };
    let json = serde_json::to_value(&data).unwrap();
    assert!(json.get("image_url").is_none());
}

#[test]
fn profile_update_omits_unchanged_password() {
    let update = ProfileUpdate { username: "alice".to_owned(), password: None };
    let json = serde_json::to_value(&update).unwrap();
    assert!(json.get("password").is_none());
}

#[test]
fn auth_response_success_defaults_to_false() {
    let body: AuthResponse = serde_json::from_str("{}").unwrap();
    assert!(!body.success);
}

// =============================================================
// AI result parsing
// =============================================================

#[test]
fn parse_generated_accepts_bare_array() {
    let value = serde_json::json!([
        {"name": "Soup", "total_time": 20, "ingredients": ["water"], "instructions": ["boil"]}
    ]);
    let recipes = parse_generated(&value);
    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0].name, "Soup");
}

#[test]
fn parse_generated_accepts_recipes_envelope() {
    let value = serde_json::json!({
        "recipes": [{"name": "Soup", "total_time": 20, "ingredients": [], "instructions": []}]
    });
    assert_eq!(parse_generated(&value).len(), 1);
}

#[test]
fn parse_generated_accepts_result_string() {
    let inner = r#"[{"name": "Soup", "total_time": 20, "ingredients": [], "instructions": []}]"#;
    let value = serde_json::json!({ "result": inner });
    let recipes = parse_generated(&value);
    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0].total_time, 20);
}

#[test]
fn parse_generated_accepts_result_object() {
    let value = serde_json::json!({
        "result": {"recipes": [{"name": "Soup", "total_time": 20, "ingredients": [], "instructions": []}]}
    });
    assert_eq!(parse_generated(&value).len(), 1);
}

#[test]
fn parse_generated_handles_object_ingredient_lists() {
    let value = serde_json::json!([
        {"name": "Soup", "total_time": 20, "ingredients": [{"name": "water"}], "instructions": [{"step_text": "boil"}]}
    ]);
    let recipes = parse_generated(&value);
    assert_eq!(recipes[0].ingredients, vec!["water"]);
    assert_eq!(recipes[0].instructions, vec!["boil"]);
}

#[test]
fn parse_generated_garbage_yields_empty() {
    assert!(parse_generated(&serde_json::json!(42)).is_empty());
    assert!(parse_generated(&serde_json::json!({"something": "else"})).is_empty());
    assert!(parse_generated(&serde_json::json!({"result": "not json"})).is_empty());
}

// =============================================================
// Error body details
// =============================================================

#[test]
fn error_detail_extracts_message() {
    let body = serde_json::json!({"detail": "Recipe not found"});
    assert_eq!(error_detail(&body).as_deref(), Some("Recipe not found"));
}

#[test]
fn error_detail_absent_or_non_string_is_none() {
    assert_eq!(error_detail(&serde_json::json!({})), None);
    assert_eq!(error_detail(&serde_json::json!({"detail": 500})), None);
}
