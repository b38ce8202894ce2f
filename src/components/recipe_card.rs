//! Recipe cards for the cookbook grid and the community feed.

#[cfg(test)]
#[path = "recipe_card_test.rs"]
mod recipe_card_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::Recipe;

/// Bundled fallback image for cookbook cards without an uploaded photo.
const DEFAULT_RECIPE_IMAGE: &str = "/assets/default-recipe.jpeg";

/// Fallback image for community cards, seeded by recipe id so each card
/// keeps a stable placeholder across renders.
fn placeholder_image_url(id: i64, title: &str) -> String {
    format!("https://placeholders.io/400/400/{title}?style=photographic&seed={id}")
}

/// Cookbook card with open, edit, and delete actions.
#[component]
pub fn RecipeCard(recipe: Recipe, on_delete: Callback<i64>) -> impl IntoView {
    let navigate = use_navigate();
    let id = recipe.id;
    let title = recipe.title.clone();
    let alt = format!("{title} recipe image");
    let image = recipe.image_url.clone().unwrap_or_else(|| DEFAULT_RECIPE_IMAGE.to_owned());
    let total_time = recipe.total_time;

    let navigate_detail = navigate.clone();
    let navigate_edit = navigate;

    view! {
        <div
            class="recipe-card"
            on:click=move |_| {
                navigate_detail(&format!("/recipe/{id}"), NavigateOptions::default());
            }
        >
            <div class="recipe-card__image-box">
                <img src=image alt=alt class="recipe-card__image"/>
            </div>
            <div class="recipe-card__content">
                <div class="recipe-card__title">{title}</div>
                <div class="recipe-card__time">
                    <span class="recipe-card__time-label">"Total time:"</span>
                    <span class="recipe-card__time-value">{total_time} " min"</span>
                </div>
                <div class="recipe-card__actions">
                    <button
                        class="btn recipe-card__btn recipe-card__btn--edit"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            navigate_edit(&format!("/recipe/edit/{id}"), NavigateOptions::default());
                        }
                    >
                        "Edit"
                    </button>
                    <button
                        class="btn recipe-card__btn recipe-card__btn--delete"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            on_delete.run(id);
                        }
                    >
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Read-only card for the community feed.
#[component]
pub fn CommunityRecipeCard(recipe: Recipe) -> impl IntoView {
    let navigate = use_navigate();
    let id = recipe.id;
    let title = recipe.title.clone();
    let alt = format!("{title} recipe image");
    let image = recipe
        .image_url
        .clone()
        .unwrap_or_else(|| placeholder_image_url(id, &recipe.title));
    let total_time = recipe.total_time;

    view! {
        <div
            class="recipe-card"
            on:click=move |_| {
                navigate(&format!("/recipe/{id}"), NavigateOptions::default());
            }
        >
            <div class="recipe-card__image-box">
                <img src=image alt=alt class="recipe-card__image"/>
            </div>
            <div class="recipe-card__content">
                <div class="recipe-card__title">{title}</div>
                <div class="recipe-card__time">
                    <span class="recipe-card__time-label">"Total time:"</span>
                    <span class="recipe-card__time-value">{total_time} " min"</span>
                </div>
            </div>
        </div>
    }
}
