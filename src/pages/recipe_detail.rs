//! Recipe detail page: full ingredient and instruction lists.

#[cfg(test)]
#[path = "recipe_detail_test.rs"]
mod recipe_detail_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::net::types::{Recipe, User};
use crate::state::auth::AuthState;
use crate::state::request::RequestState;
use crate::util::auth::install_unauth_redirect;
use crate::util::route::parse_recipe_id;

const INVALID_ID: &str = "Invalid recipe ID";

/// Edit/delete controls only appear for the recipe's owner.
fn is_owner(user: Option<&User>, recipe: &Recipe) -> bool {
    user.is_some_and(|user| user.id == recipe.user_id)
}

/// Recipe detail page. Redirects to `/login` if the user is not
/// authenticated (recipe reads are session-scoped on the backend).
#[component]
pub fn RecipeDetailPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    install_unauth_redirect(auth, navigate.clone());

    let params = use_params_map();
    let recipe = RwSignal::new(RequestState::<Recipe>::Idle);
    let show_delete = RwSignal::new(false);
    let action_error = RwSignal::new(String::new());

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
            recipe.set(RequestState::Failed(INVALID_ID.to_owned()));
            return;
        };
        recipe.set(RequestState::Pending);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api_recipes::get_recipe(id).await {
                Ok(found) => recipe.set(RequestState::Succeeded(found)),
                Err(message) => recipe.set(RequestState::Failed(message)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    let on_delete_cancel = Callback::new(move |()| show_delete.set(false));

    let body = {
        let navigate = navigate.clone();
        move || match recipe.get() {
            RequestState::Idle | RequestState::Pending => {
                view! { <p>"Loading..."</p> }.into_any()
            }
            RequestState::Failed(message) => {
                view! { <p class="recipe-detail__error">{message}</p> }.into_any()
            }
            RequestState::Succeeded(found) => {
                let owned = is_owner(auth.get().user.as_ref(), &found);
                let id = found.id;
                let title = found.title.clone();
                let image = found
                    .image_url
                    .clone()
                    .map(|url| view! { <img src=url alt=found.title.clone() class="recipe-detail__image"/> });
                let navigate_edit = navigate.clone();
                view! {
                    <div class="recipe-detail">
                        <h2 class="recipe-detail__title">{title}</h2>
                        {image}
                        <p class="recipe-detail__time">
                            <strong>"Total Time: "</strong>
                            {found.total_time}
                            " min"
                        </p>
                        <h3>"Ingredients"</h3>
                        <ul class="recipe-detail__ingredients">
                            {found
                                .ingredients
                                .iter()
                                .map(|ingredient| view! { <li>{ingredient.clone()}</li> })
                                .collect::<Vec<_>>()}
                        </ul>
                        <h3>"Instructions"</h3>
                        <ol class="recipe-detail__instructions">
                            {found
                                .instructions
                                .iter()
                                .map(|step| view! { <li>{step.clone()}</li> })
                                .collect::<Vec<_>>()}
                        </ol>
                        <Show when=move || owned>
                            <div class="recipe-detail__actions">
                                <button
                                    class="btn"
                                    on:click={
                                        let navigate_edit = navigate_edit.clone();
                                        move |_| {
                                            navigate_edit(
                                                &format!("/recipe/edit/{id}"),
                                                NavigateOptions::default(),
                                            );
                                        }
                                    }
                                >
                                    "Edit"
                                </button>
                                <button class="btn btn--danger" on:click=move |_| show_delete.set(true)>
                                    "Delete"
                                </button>
                            </div>
                        </Show>
                    </div>
                }
                    .into_any()
            }
        }
    };

    view! {
        <Show
            when=move || auth.get().authenticated()
            fallback=move || {
                view! {
                    <div class="recipe-detail-page">
                        <p>
                            {move || {
                                if auth.get().loading { "Loading..." } else { "Redirecting to login..." }
                            }}
                        </p>
                    </div>
                }
            }
        >
            <div class="recipe-detail-page">
                <Show when=move || !action_error.get().is_empty()>
                    <p class="recipe-detail__error">{move || action_error.get()}</p>
                </Show>
                {body.clone()}
                <Show when=move || show_delete.get()>
                    <ConfirmDeleteDialog
                        recipe=recipe
                        error=action_error
                        on_cancel=on_delete_cancel
                    />
                </Show>
            </div>
        </Show>
    }
}

/// Confirmation dialog; a successful delete leaves for the cookbook.
#[component]
fn ConfirmDeleteDialog(
    recipe: RwSignal<RequestState<Recipe>>,
    error: RwSignal<String>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let busy = RwSignal::new(false);
    let navigate = use_navigate();

    let submit = {
        let navigate = navigate.clone();
        move |_| {
            if busy.get() {
                return;
            }
            let Some(id) = recipe.get_untracked().succeeded().map(|found| found.id) else {
                return;
            };
            busy.set(true);
            #[cfg(feature = "hydrate")]
            {
                let navigate = navigate.clone();
                leptos::task::spawn_local(async move {
                    match crate::net::api_recipes::delete_recipe(id).await {
                        Ok(()) => {
                            navigate("/cookbook", NavigateOptions::default());
                        }
                        Err(message) => {
                            error.set(message);
                            busy.set(false);
                            on_cancel.run(());
                        }
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (id, error, &navigate);
                busy.set(false);
            }
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Delete Recipe"</h2>
                <p class="dialog__danger">"This will permanently delete this recipe."</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(()) disabled=move || busy.get()>
                        "Cancel"
                    </button>
                    <button class="btn btn--danger" on:click=submit disabled=move || busy.get()>
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}
