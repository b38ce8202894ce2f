//! Account registration page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::util::form::none_if_empty;

const REQUIRED_FIELDS: &str = "Username, password, and confirm password are required.";
const PASSWORD_MISMATCH: &str = "Passwords do not match.";
#[cfg(any(test, feature = "hydrate"))]
const SIGNUP_REJECTED: &str = "Sign up failed. That username may already be taken.";
#[cfg(any(test, feature = "hydrate"))]
const SIGNUP_FAILED: &str = "Sign up failed. Please try again.";

/// Check the form fields before any network call.
fn validate_register_input(
    username: &str,
    password: &str,
    confirm: &str,
) -> Result<(), &'static str> {
    if username.trim().is_empty() || password.trim().is_empty() || confirm.trim().is_empty() {
        return Err(REQUIRED_FIELDS);
    }
    if password != confirm {
        return Err(PASSWORD_MISMATCH);
    }
    Ok(())
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let image_url = RwSignal::new(String::new());
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
        if let Err(message) =
            validate_register_input(&username_value, &password_value, &confirm.get())
        {
            error.set(message.to_owned());
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            let avatar = none_if_empty(&image_url.get());
            leptos::task::spawn_local(async move {
                let signup_data = crate::net::types::SignupData {
                    username: username_value,
                    password: password_value,
                    image_url: avatar,
                };
                match crate::net::api::signup(&signup_data).await {
                    Ok(true) => {
                        navigate("/login", leptos_router::NavigateOptions::default());
                    }
                    Ok(false) => {
                        error.set(SIGNUP_REJECTED.to_owned());
                        busy.set(false);
                    }
                    Err(_) => {
                        error.set(SIGNUP_FAILED.to_owned());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &navigate;
            busy.set(false);
        }
    };

    view! {
        <div class="register-page">
            <div class="register-card">
                <h1 class="register-card__title">"Create Account"</h1>
                <form class="register-form" on:submit=on_submit novalidate=true>
                    <label class="register-form__label">
                        "Username"
                        <input
                            class="register-form__input"
                            type="text"
                            autocomplete="username"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="register-form__label">
                        "Password"
                        <input
                            class="register-form__input"
                            type="password"
                            autocomplete="new-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="register-form__label">
                        "Confirm Password"
                        <input
                            class="register-form__input"
                            type="password"
                            autocomplete="new-password"
                            prop:value=move || confirm.get()
                            on:input=move |ev| confirm.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="register-form__label">
                        "Profile picture URL (optional)"
                        <input
                            class="register-form__input"
                            type="url"
                            placeholder="https://..."
                            prop:value=move || image_url.get()
                            on:input=move |ev| image_url.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || !error.get().is_empty()>
                        <p class="register-form__error">{move || error.get()}</p>
                    </Show>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Create Account" }}
                    </button>
                </form>
                <div class="register-card__secondary">
                    "Already have an account? "
                    <a href="/login" class="register-card__link">
                        "Log In"
                    </a>
                </div>
            </div>
        </div>
    }
}
