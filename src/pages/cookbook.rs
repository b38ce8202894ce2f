//! Personal cookbook: the signed-in user's saved recipes.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::recipe_card::RecipeCard;
use crate::net::types::Recipe;
use crate::state::auth::AuthState;
use crate::state::request::RequestState;
use crate::util::auth::install_unauth_redirect;

const LOAD_FAILED: &str = "Something went wrong loading recipes, try again..";

/// Cookbook page — the viewer's own recipes with edit/delete actions.
/// Redirects to `/login` if the user is not authenticated.
#[component]
pub fn CookbookPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    let recipes = RwSignal::new(RequestState::<Vec<Recipe>>::Idle);
    let delete_target = RwSignal::new(None::<i64>);
    let action_error = RwSignal::new(String::new());

    // Fetch once the session has resolved to a user; the list endpoint is
    // per-user so there is nothing to ask for before that.
    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        let Some(user) = auth.get().user else {
            return;
        };
        requested.set(true);
        recipes.set(RequestState::Pending);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api_recipes::list_user_recipes(user.id).await {
                Ok(items) => recipes.set(RequestState::Succeeded(items)),
                Err(message) => recipes.set(RequestState::Failed(message)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &user;
        }
    });

    let on_delete_request = Callback::new(move |id: i64| delete_target.set(Some(id)));
    let on_delete_cancel = Callback::new(move |()| delete_target.set(None));

    view! {
        <Show
            when=move || auth.get().authenticated()
            fallback=move || {
                view! {
                    <div class="cookbook-page">
                        <p>
                            {move || {
                                if auth.get().loading { "Loading..." } else { "Redirecting to login..." }
                            }}
                        </p>
                    </div>
                }
            }
        >
            <div class="cookbook-page">
                <h1 class="cookbook-page__title">"My Cookbook"</h1>
                <Show when=move || !action_error.get().is_empty()>
                    <p class="cookbook-page__error">{move || action_error.get()}</p>
                </Show>
                {move || match recipes.get() {
                    RequestState::Idle | RequestState::Pending => {
                        view! { <p>"Loading..."</p> }.into_any()
                    }
                    RequestState::Failed(_) => {
                        view! { <p class="cookbook-page__error">{LOAD_FAILED}</p> }.into_any()
                    }
                    RequestState::Succeeded(items) if items.is_empty() => {
                        view! { <p>"You don't have any saved recipes yet."</p> }.into_any()
                    }
                    RequestState::Succeeded(items) => {
                        view! {
                            <div class="cookbook-page__grid">
                                {items
                                    .into_iter()
                                    .map(|recipe| {
                                        view! {
                                            <RecipeCard recipe=recipe on_delete=on_delete_request/>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                            .into_any()
                    }
                }}
                <Show when=move || delete_target.get().is_some()>
                    <DeleteRecipeDialog
                        target=delete_target
                        recipes=recipes
                        error=action_error
                        on_cancel=on_delete_cancel
                    />
                </Show>
            </div>
        </Show>
    }
}

/// Confirmation dialog for deleting a cookbook recipe.
#[component]
fn DeleteRecipeDialog(
    target: RwSignal<Option<i64>>,
    recipes: RwSignal<RequestState<Vec<Recipe>>>,
    error: RwSignal<String>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let busy = RwSignal::new(false);

    let submit = Callback::new(move |()| {
        if busy.get() {
            return;
        }
        let Some(id) = target.get_untracked() else {
            return;
        };
        busy.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api_recipes::delete_recipe(id).await {
                Ok(()) => {
                    error.set(String::new());
                    recipes.update(|state| {
                        if let RequestState::Succeeded(items) = state {
                            items.retain(|recipe| recipe.id != id);
                        }
                    });
                }
                Err(message) => error.set(message),
            }
            busy.set(false);
            target.set(None);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, recipes, error);
            busy.set(false);
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Delete Recipe"</h2>
                <p class="dialog__danger">"This will permanently delete this recipe."</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(()) disabled=move || busy.get()>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--danger"
                        on:click=move |_| submit.run(())
                        disabled=move || busy.get()
                    >
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}
