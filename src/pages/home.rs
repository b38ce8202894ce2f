//! Public landing page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;

/// Hero landing: pitches the app to visitors and routes signed-in users
/// straight to the generator.
#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let navigate_login = navigate.clone();
    let navigate_register = navigate.clone();
    let navigate_generate = navigate;

    view! {
        <section class="home-hero">
            <div class="home-hero__text">
                <h1 class="home-hero__title">"LESS THINKING, " <br/> "MORE EATING."</h1>
                <p class="home-hero__subtitle">"AI-powered meals, fit for you."</p>
                <div class="home-hero__actions">
                    <Show
                        when=move || auth.get().user.is_some()
                        fallback=move || {
                            let navigate_login = navigate_login.clone();
                            let navigate_register = navigate_register.clone();
                            view! {
                                <button
                                    class="btn btn--primary"
                                    on:click=move |_| {
                                        navigate_login("/login", NavigateOptions::default());
                                    }
                                >
                                    "Login"
                                </button>
                                <button
                                    class="btn"
                                    on:click=move |_| {
                                        navigate_register("/register", NavigateOptions::default());
                                    }
                                >
                                    "Sign Up"
                                </button>
                            }
                        }
                    >
                        <button
                            class="btn btn--primary"
                            on:click={
                                let navigate_generate = navigate_generate.clone();
                                move |_| {
                                    navigate_generate("/generate", NavigateOptions::default());
                                }
                            }
                        >
                            "Find a Recipe"
                        </button>
                    </Show>
                </div>
            </div>
        </section>
    }
}
