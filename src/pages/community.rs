//! Public community feed of every shared recipe.

use leptos::prelude::*;

use crate::components::recipe_card::CommunityRecipeCard;
use crate::net::types::Recipe;
use crate::state::request::RequestState;

const LOAD_FAILED: &str = "Something went wrong loading recipes, try again..";

#[component]
pub fn CommunityPage() -> impl IntoView {
    // The feed is public, so the fetch starts immediately rather than
    // waiting on the session.
    let recipes = RwSignal::new(RequestState::<Vec<Recipe>>::Pending);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api_recipes::list_recipes().await {
            Ok(items) => recipes.set(RequestState::Succeeded(items)),
            Err(message) => recipes.set(RequestState::Failed(message)),
        }
    });

    view! {
        <div class="community-page">
            <h1 class="community-page__title">"The Community Table"</h1>
            <p class="community-page__subtitle">"AI recipes brought to life by real cooks."</p>
            {move || match recipes.get() {
                RequestState::Idle | RequestState::Pending => {
                    view! { <p>"Loading..."</p> }.into_any()
                }
                RequestState::Failed(_) => {
                    view! { <p class="community-page__error">{LOAD_FAILED}</p> }.into_any()
                }
                RequestState::Succeeded(items) if items.is_empty() => {
                    view! { <p>"No saved recipes yet."</p> }.into_any()
                }
                RequestState::Succeeded(items) => {
                    view! {
                        <div class="community-page__grid">
                            {items
                                .into_iter()
                                .map(|recipe| view! { <CommunityRecipeCard recipe=recipe/> })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
