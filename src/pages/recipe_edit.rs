//! Recipe edit page: in-place editing of an existing cookbook recipe.

#[cfg(test)]
#[path = "recipe_edit_test.rs"]
mod recipe_edit_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::upload_image::UploadImage;
use crate::state::auth::AuthState;
use crate::state::request::RequestState;
use crate::util::auth::install_unauth_redirect;
use crate::util::form::none_if_empty;
use crate::util::route::parse_recipe_id;

const INVALID_ID: &str = "Invalid recipe ID";
const TITLE_REQUIRED: &str = "Title is required.";
const TIME_INVALID: &str = "Total time must be a positive number of minutes.";

/// Check the form fields before any network call, returning the parsed
/// total time in minutes.
fn validate_recipe_edit(title: &str, total_time_raw: &str) -> Result<i64, &'static str> {
    if title.trim().is_empty() {
        return Err(TITLE_REQUIRED);
    }
    match total_time_raw.trim().parse::<i64>() {
        Ok(minutes) if minutes > 0 => Ok(minutes),
        _ => Err(TIME_INVALID),
    }
}

/// Recipe edit page. Redirects to `/login` if the user is not authenticated.
#[component]
pub fn RecipeEditPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    install_unauth_redirect(auth, navigate.clone());

    let params = use_params_map();

    // Load state carries the recipe id; the editable fields live in their
    // own signals so inputs can bind to them directly.
    let load = RwSignal::new(RequestState::<i64>::Idle);
    let title = RwSignal::new(String::new());
    let image_url = RwSignal::new(String::new());
    let total_time = RwSignal::new(String::new());
    let ingredients = RwSignal::new(Vec::<String>::new());
    let instructions = RwSignal::new(Vec::<String>::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        if !auth.get().authenticated() {
            return;
        }
        let raw = params.with(|map| map.get("id").unwrap_or_default());
        requested.set(true);
        let Some(id) = parse_recipe_id(&raw) else {
            load.set(RequestState::Failed(INVALID_ID.to_owned()));
            return;
        };
        load.set(RequestState::Pending);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api_recipes::get_recipe(id).await {
                Ok(recipe) => {
                    title.set(recipe.title);
                    image_url.set(recipe.image_url.unwrap_or_default());
                    total_time.set(recipe.total_time.to_string());
                    ingredients.set(recipe.ingredients);
                    instructions.set(recipe.instructions);
                    load.set(RequestState::Succeeded(recipe.id));
                }
                Err(message) => load.set(RequestState::Failed(message)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    let navigate_save = navigate.clone();
    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(String::new());
        let Some(id) = load.get().succeeded().copied() else {
            return;
        };
        let minutes = match validate_recipe_edit(&title.get(), &total_time.get()) {
            Ok(minutes) => minutes,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate_save.clone();
            leptos::task::spawn_local(async move {
                let payload = crate::net::types::RecipeUpdate::edit(
                    title.get_untracked().trim().to_owned(),
                    none_if_empty(&image_url.get_untracked()),
                    minutes,
                    &ingredients.get_untracked(),
                    &instructions.get_untracked(),
                );
                match crate::net::api_recipes::update_recipe(id, &payload).await {
                    Ok(_) => {
                        navigate(&format!("/recipe/{id}"), NavigateOptions::default());
                    }
                    Err(message) => {
                        error.set(message);
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, minutes, &navigate_save);
            busy.set(false);
        }
    };

    let navigate_cancel = navigate.clone();
    let on_cancel = move |_| {
        if let Some(id) = load.get_untracked().succeeded().copied() {
            navigate_cancel(&format!("/recipe/{id}"), NavigateOptions::default());
        } else {
            navigate_cancel("/cookbook", NavigateOptions::default());
        }
    };

    let on_image_uploaded = Callback::new(move |url: String| image_url.set(url));

    let form = move || match load.get() {
        RequestState::Idle | RequestState::Pending => view! { <p>"Loading..."</p> }.into_any(),
        RequestState::Failed(message) => {
            view! { <p class="recipe-edit__error">{message}</p> }.into_any()
        }
        RequestState::Succeeded(id) => view! {
            <form class="recipe-edit__form" on:submit=on_save.clone()>
                <label class="recipe-edit__label">
                    "Recipe Title"
                    <input
                        class="recipe-edit__input"
                        type="text"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                </label>
                <label class="recipe-edit__label">
                    "Image URL"
                    <input
                        class="recipe-edit__input"
                        type="text"
                        prop:value=move || image_url.get()
                        on:input=move |ev| image_url.set(event_target_value(&ev))
                    />
                </label>
                <label class="recipe-edit__label">
                    "Total Time (min)"
                    <input
                        class="recipe-edit__input"
                        type="number"
                        min="1"
                        prop:value=move || total_time.get()
                        on:input=move |ev| total_time.set(event_target_value(&ev))
                    />
                </label>
                <h3>"Ingredients"</h3>
                <ul class="recipe-edit__list">
                    {move || {
                        ingredients
                            .get()
                            .into_iter()
                            .enumerate()
                            .map(|(index, value)| {
                                view! {
                                    <li>
                                        <input
                                            class="recipe-edit__input"
                                            type="text"
                                            prop:value=value
                                            on:input=move |ev| {
                                                ingredients
                                                    .update(|items| {
                                                        if let Some(slot) = items.get_mut(index) {
                                                            *slot = event_target_value(&ev);
                                                        }
                                                    });
                                            }
                                        />
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
                <h3>"Instructions"</h3>
                <ol class="recipe-edit__list">
                    {move || {
                        instructions
                            .get()
                            .into_iter()
                            .enumerate()
                            .map(|(index, value)| {
                                view! {
                                    <li>
                                        <textarea
                                            class="recipe-edit__textarea"
                                            prop:value=value
                                            on:input=move |ev| {
                                                instructions
                                                    .update(|items| {
                                                        if let Some(slot) = items.get_mut(index) {
                                                            *slot = event_target_value(&ev);
                                                        }
                                                    });
                                            }
                                        ></textarea>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ol>
                <Show when=move || !error.get().is_empty()>
                    <p class="recipe-edit__error">{move || error.get()}</p>
                </Show>
                <div class="recipe-edit__actions">
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Saving..." } else { "Save" }}
                    </button>
                    <button
                        class="btn"
                        type="button"
                        on:click=on_cancel.clone()
                        disabled=move || busy.get()
                    >
                        "Cancel"
                    </button>
                </div>
            </form>
            <h3>"Recipe Photo"</h3>
            <UploadImage recipe_id=id on_uploaded=on_image_uploaded/>
        }
        .into_any(),
    };

    view! {
        <Show
            when=move || auth.get().authenticated()
            fallback=move || {
                view! {
                    <div class="recipe-edit-page">
                        <p>
                            {move || {
                                if auth.get().loading { "Loading..." } else { "Redirecting to login..." }
                            }}
                        </p>
                    </div>
                }
            }
        >
            <div class="recipe-edit-page">
                <h1 class="recipe-edit-page__title">"Edit Recipe"</h1>
                {form.clone()}
            </div>
        </Show>
    }
}
