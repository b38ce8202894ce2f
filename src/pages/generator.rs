//! AI recipe generator page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The authenticated landing route: collects an ingredient list and a time
//! budget, asks the backend's generation endpoint for suggestions, and lets
//! each suggestion be saved into the cookbook independently.

#[cfg(test)]
#[path = "generator_test.rs"]
mod generator_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::GeneratedRecipe;
use crate::state::auth::AuthState;
use crate::state::request::RequestState;
use crate::util::auth::install_unauth_redirect;

const NO_INGREDIENTS: &str = "Add at least one ingredient.";
const TIME_INVALID: &str = "Total time must be a positive number of minutes.";

/// Add one ingredient chip; trims input and rejects blanks and duplicates.
fn add_ingredient(list: &mut Vec<String>, raw: &str) -> bool {
    let value = raw.trim();
    if value.is_empty() || list.iter().any(|existing| existing == value) {
        return false;
    }
    list.push(value.to_owned());
    true
}

/// Check the request before any network call, returning the time budget.
fn validate_generate(ingredients: &[String], max_time_raw: &str) -> Result<i64, &'static str> {
    if ingredients.is_empty() {
        return Err(NO_INGREDIENTS);
    }
    match max_time_raw.trim().parse::<i64>() {
        Ok(minutes) if minutes > 0 => Ok(minutes),
        _ => Err(TIME_INVALID),
    }
}

/// Per-suggestion save progress, indexed alongside the results list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum SaveStatus {
    #[default]
    Idle,
    Saving,
    Saved,
    Error,
}

/// Generator page. Redirects to `/login` if the user is not authenticated.
#[component]
pub fn GeneratorPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    install_unauth_redirect(auth, navigate);

    let ingredient_input = RwSignal::new(String::new());
    let ingredients = RwSignal::new(Vec::<String>::new());
    let max_time = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let results = RwSignal::new(RequestState::<Vec<GeneratedRecipe>>::Idle);
    let save_status = RwSignal::new(Vec::<SaveStatus>::new());

    let on_add = move || {
        let mut added = false;
        ingredients.update(|items| added = add_ingredient(items, &ingredient_input.get_untracked()));
        if added {
            ingredient_input.set(String::new());
        }
    };

    let on_generate = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if results.get().is_pending() {
            return;
        }
        error.set(String::new());
        let items = ingredients.get();
        let minutes = match validate_generate(&items, &max_time.get()) {
            Ok(minutes) => minutes,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        results.set(RequestState::Pending);
        save_status.set(Vec::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let request = crate::net::types::GenerateRequest { ingredients: items, max_time: minutes };
            match crate::net::api_recipes::generate_recipes(&request).await {
                Ok(recipes) => {
                    if recipes.is_empty() {
                        log::warn!("generation response contained no parsable recipes");
                    }
                    save_status.set(vec![SaveStatus::Idle; recipes.len()]);
                    results.set(RequestState::Succeeded(recipes));
                }
                Err(message) => results.set(RequestState::Failed(message)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (items, minutes);
            results.set(RequestState::Idle);
        }
    };

    let on_reset = move |_| {
        ingredient_input.set(String::new());
        ingredients.set(Vec::new());
        max_time.set(String::new());
        error.set(String::new());
        results.set(RequestState::Idle);
        save_status.set(Vec::new());
    };

    let save_recipe = move |index: usize| {
        #[cfg(feature = "hydrate")]
        {
            let Some(recipe) = results
                .get_untracked()
                .succeeded()
                .and_then(|items| items.get(index))
                .cloned()
            else {
                return;
            };
            save_status.update(|statuses| {
                if let Some(slot) = statuses.get_mut(index) {
                    *slot = SaveStatus::Saving;
                }
            });
            leptos::task::spawn_local(async move {
                let payload = crate::net::types::RecipeCreate::from_generated(&recipe);
                let outcome = match crate::net::api_recipes::create_recipe(&payload).await {
                    Ok(_) => SaveStatus::Saved,
                    Err(_) => SaveStatus::Error,
                };
                save_status.update(|statuses| {
                    if let Some(slot) = statuses.get_mut(index) {
                        *slot = outcome;
                    }
                });
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = index;
        }
    };

    view! {
        <Show
            when=move || auth.get().authenticated()
            fallback=move || {
                view! {
                    <div class="generator-page">
                        <p>
                            {move || {
                                if auth.get().loading { "Loading..." } else { "Redirecting to login..." }
                            }}
                        </p>
                    </div>
                }
            }
        >
            <div class="generator-page">
                <h1 class="generator-page__title">"Hungry? Let's Find a Recipe!"</h1>
                <Show when=move || !error.get().is_empty()>
                    <p class="generator-page__error">{move || error.get()}</p>
                </Show>
                <form class="generator-form" on:submit=on_generate>
                    <label class="generator-form__label">
                        "Add your ingredients:"
                        <span class="generator-form__add-row">
                            <input
                                class="generator-form__input"
                                type="text"
                                placeholder="e.g. chicken"
                                prop:value=move || ingredient_input.get()
                                on:input=move |ev| ingredient_input.set(event_target_value(&ev))
                                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                    if ev.key() == "Enter" {
                                        ev.prevent_default();
                                        on_add();
                                    }
                                }
                            />
                            <button
                                class="btn generator-form__add-btn"
                                type="button"
                                disabled=move || ingredient_input.get().trim().is_empty()
                                on:click=move |_| on_add()
                            >
                                "Add"
                            </button>
                        </span>
                    </label>
                    <Show when=move || !ingredients.get().is_empty()>
                        <ul class="generator-form__chips">
                            {move || {
                                ingredients
                                    .get()
                                    .into_iter()
                                    .enumerate()
                                    .map(|(index, ingredient)| {
                                        view! {
                                            <li class="generator-form__chip">
                                                <span>{ingredient}</span>
                                                <button
                                                    class="generator-form__remove-btn"
                                                    type="button"
                                                    on:click=move |_| {
                                                        ingredients
                                                            .update(|items| {
                                                                if index < items.len() {
                                                                    items.remove(index);
                                                                }
                                                            });
                                                    }
                                                >
                                                    "✕"
                                                </button>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </ul>
                    </Show>
                    <label class="generator-form__label">
                        "Total time (minutes):"
                        <input
                            class="generator-form__input generator-form__input--time"
                            type="number"
                            min="1"
                            prop:value=move || max_time.get()
                            on:input=move |ev| max_time.set(event_target_value(&ev))
                        />
                    </label>
                    <div class="generator-form__actions">
                        <button
                            class="btn btn--primary"
                            type="submit"
                            disabled=move || {
                                results.get().is_pending() || ingredients.get().is_empty()
                            }
                        >
                            {move || {
                                if results.get().is_pending() { "Loading..." } else { "Generate Recipes" }
                            }}
                        </button>
                        <button class="btn" type="button" on:click=on_reset>
                            "Reset"
                        </button>
                    </div>
                </form>
                {move || match results.get() {
                    RequestState::Idle | RequestState::Pending => ().into_any(),
                    RequestState::Failed(message) => {
                        view! { <p class="generator-page__error">{message}</p> }.into_any()
                    }
                    RequestState::Succeeded(recipes) if recipes.is_empty() => {
                        view! { <p>"No recipes came back. Try different ingredients."</p> }
                            .into_any()
                    }
                    RequestState::Succeeded(recipes) => {
                        view! {
                            <div class="generator-results">
                                {recipes
                                    .into_iter()
                                    .enumerate()
                                    .map(|(index, recipe)| {
                                        let status = move || {
                                            save_status.get().get(index).copied().unwrap_or_default()
                                        };
                                        view! {
                                            <div class="generator-results__card">
                                                <h2 class="generator-results__name">
                                                    {recipe.name.clone()}
                                                </h2>
                                                <div class="generator-results__time">
                                                    <strong>"Total Time: "</strong>
                                                    {recipe.total_time}
                                                    " minutes"
                                                </div>
                                                <strong>"Ingredients:"</strong>
                                                <ul class="generator-results__ingredients">
                                                    {recipe
                                                        .ingredients
                                                        .iter()
                                                        .map(|item| view! { <li>{item.clone()}</li> })
                                                        .collect::<Vec<_>>()}
                                                </ul>
                                                <strong>"Instructions:"</strong>
                                                <ol class="generator-results__instructions">
                                                    {recipe
                                                        .instructions
                                                        .iter()
                                                        .map(|step| view! { <li>{step.clone()}</li> })
                                                        .collect::<Vec<_>>()}
                                                </ol>
                                                <button
                                                    class="btn generator-results__save-btn"
                                                    disabled=move || {
                                                        matches!(
                                                            status(),
                                                            SaveStatus::Saving | SaveStatus::Saved
                                                        )
                                                    }
                                                    on:click=move |_| save_recipe(index)
                                                >
                                                    {move || match status() {
                                                        SaveStatus::Saved => "Added!",
                                                        SaveStatus::Saving => "Adding...",
                                                        _ => "Add to Cookbook",
                                                    }}
                                                </button>
                                                <Show when=move || status() == SaveStatus::Error>
                                                    <p class="generator-results__save-error">
                                                        "Error adding recipe."
                                                    </p>
                                                </Show>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                            .into_any()
                    }
                }}
            </div>
        </Show>
    }
}
