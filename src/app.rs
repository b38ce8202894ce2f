//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::pages::{
    community::CommunityPage, cookbook::CookbookPage, generator::GeneratorPage, home::HomePage,
    login::LoginPage, profile::ProfilePage, recipe_detail::RecipeDetailPage,
    recipe_edit::RecipeEditPage, register::RegisterPage,
};
use crate::state::{auth::AuthState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared session and UI-chrome contexts, kicks off the one-shot
/// "who am I" session bootstrap, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let ui = RwSignal::new(UiState { dark_mode: crate::util::dark_mode::read_preference() });

    provide_context(auth);
    provide_context(ui);

    crate::util::dark_mode::apply(ui.get_untracked().dark_mode);

    // Ask the backend who is signed in, exactly once at startup. Every later
    // refresh is user-initiated (login, logout, profile save).
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        crate::state::auth::refresh(auth).await;
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/chefgpt.css"/>
        <Title text="ChefGPT"/>

        <Router>
            <NavBar/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("community") view=CommunityPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=(StaticSegment("profile"), StaticSegment("edit")) view=ProfilePage/>
                <Route path=StaticSegment("cookbook") view=CookbookPage/>
                <Route path=StaticSegment("generate") view=GeneratorPage/>
                <Route path=(StaticSegment("recipe"), ParamSegment("id")) view=RecipeDetailPage/>
                <Route
                    path=(StaticSegment("recipe"), StaticSegment("edit"), ParamSegment("id"))
                    view=RecipeEditPage
                />
            </Routes>
        </Router>
    }
}
