//! Top navigation chrome, conditionally rendered from session state.
//!
//! Plain anchors are used for navigation; the router intercepts local link
//! clicks, so these stay client-side transitions.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::state::ui::UiState;

/// Navigation bar: brand + public links always, auth links while signed
/// out, app links and the user menu while signed in.
#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();
    let menu_open = RwSignal::new(false);

    let username = move || auth.get().user.map(|user| user.username).unwrap_or_default();

    let navigate_profile = navigate.clone();
    let on_edit_profile = move |_| {
        menu_open.set(false);
        navigate_profile("/profile/edit", NavigateOptions::default());
    };

    let on_logout = move |_| {
        menu_open.set(false);
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                if crate::net::api::logout().await.is_err() {
                    log::warn!("logout request failed; clearing session locally");
                }
                auth.update(|state| state.finish_refresh(None));
                navigate("/login", NavigateOptions::default());
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &navigate;
        }
    };

    view! {
        <nav class="main-nav">
            <a href="/" class="main-nav__brand">
                "ChefGPT"
            </a>
            <a href="/" class="main-nav__link">
                "Home"
            </a>
            <a href="/community" class="main-nav__link">
                "Community"
            </a>

            <span class="main-nav__spacer"></span>

            <button
                class="btn main-nav__dark-toggle"
                on:click=move |_| {
                    let current = ui.get().dark_mode;
                    let next = crate::util::dark_mode::toggle(current);
                    ui.update(|state| state.dark_mode = next);
                }
                title="Toggle dark mode"
            >
                {move || if ui.get().dark_mode { "☀" } else { "☾" }}
            </button>

            <Show
                when=move || auth.get().user.is_some()
                fallback=|| {
                    view! {
                        <a href="/login" class="main-nav__link">
                            "Login"
                        </a>
                        <a href="/register" class="main-nav__link">
                            "Register"
                        </a>
                    }
                }
            >
                <a href="/generate" class="main-nav__link">
                    "Recipe Generator"
                </a>
                <a href="/cookbook" class="main-nav__link">
                    "Cookbook"
                </a>
                <div class="user-menu">
                    <button
                        class="btn user-menu__toggle"
                        on:click=move |_| menu_open.update(|open| *open = !*open)
                    >
                        {username}
                        " ▾"
                    </button>
                    {
                        let on_edit_profile = on_edit_profile.clone();
                        let on_logout = on_logout.clone();
                        view! {
                            <Show when=move || menu_open.get()>
                                <div class="user-menu__dropdown">
                                    <button
                                        class="user-menu__item"
                                        on:click=on_edit_profile.clone()
                                    >
                                        "Edit Profile"
                                    </button>
                                    <button class="user-menu__item" on:click=on_logout.clone()>
                                        "Logout"
                                    </button>
                                </div>
                            </Show>
                        }
                    }
                </div>
            </Show>
        </nav>
    }
}
