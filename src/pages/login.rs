//! Login page with username/password credentials.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;

const REQUIRED_FIELDS: &str = "Username and password are required.";
#[cfg(any(test, feature = "hydrate"))]
const INVALID_CREDENTIALS: &str = "Invalid username or password.";
#[cfg(any(test, feature = "hydrate"))]
const LOGIN_FAILED: &str = "Login failed. Please try again.";

/// Check the form fields before any network call.
fn validate_login_input(username: &str, password: &str) -> Result<(), &'static str> {
    if username.trim().is_empty() || password.trim().is_empty() {
        return Err(REQUIRED_FIELDS);
    }
    Ok(())
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(String::new());
        let username_value = username.get();
        let password_value = password.get();
        if let Err(message) = validate_login_input(&username_value, &password_value) {
            error.set(message.to_owned());
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let credentials = crate::net::types::Credentials {
                    username: username_value,
                    password: password_value,
                };
                match crate::net::api::login(&credentials).await {
                    Ok(true) => {
                        crate::state::auth::refresh(auth).await;
                        navigate("/generate", leptos_router::NavigateOptions::default());
                    }
                    Ok(false) => {
                        error.set(INVALID_CREDENTIALS.to_owned());
                        busy.set(false);
                    }
                    Err(_) => {
                        error.set(LOGIN_FAILED.to_owned());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (auth, &navigate);
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1 class="login-card__title">"Welcome!"</h1>
                <form class="login-form" on:submit=on_submit>
                    <label class="login-form__label">
                        "Username:"
                        <input
                            class="login-form__input"
                            type="text"
                            autocomplete="username"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="login-form__label">
                        "Password:"
                        <input
                            class="login-form__input"
                            type="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || !error.get().is_empty()>
                        <p class="login-form__error">{move || error.get()}</p>
                    </Show>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Logging in..." } else { "Login" }}
                    </button>
                </form>
                <a href="/register" class="login-card__link">
                    "Don't have an account? Sign Up Here."
                </a>
            </div>
        </div>
    }
}
