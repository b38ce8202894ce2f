//! Profile edit page for the signed-in user.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

const USERNAME_REQUIRED: &str = "Username is required";
const PASSWORD_MISMATCH: &str = "Passwords do not match";

/// Check the form fields before any network call. An empty new password
/// means "leave it unchanged" and skips the confirmation check.
fn validate_profile_input(
    username: &str,
    new_password: &str,
    confirm_password: &str,
) -> Result<(), &'static str> {
    if username.trim().is_empty() {
        return Err(USERNAME_REQUIRED);
    }
    if !new_password.is_empty() && new_password != confirm_password {
        return Err(PASSWORD_MISMATCH);
    }
    Ok(())
}

/// Nothing to save: the username is untouched and no new password entered.
fn no_changes(username: &str, original: &str, new_password: &str, confirm_password: &str) -> bool {
    username == original && new_password.is_empty() && confirm_password.is_empty()
}

/// Only the confirmation field is filled — there is no password to confirm.
fn only_confirm_filled(
    username: &str,
    original: &str,
    new_password: &str,
    confirm_password: &str,
) -> bool {
    username == original && new_password.is_empty() && !confirm_password.is_empty()
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    install_unauth_redirect(auth, navigate.clone());

    let username = RwSignal::new(String::new());
    let original_username = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let success = RwSignal::new(false);
    let busy = RwSignal::new(false);

    // Seed the form from the session once it resolves.
    let seeded = RwSignal::new(false);
    Effect::new(move || {
        if seeded.get() {
            return;
        }
        if let Some(user) = auth.get().user {
            username.set(user.username.clone());
            original_username.set(user.username);
            seeded.set(true);
        }
    });

    let save_disabled = move || {
        busy.get()
            || no_changes(
                &username.get(),
                &original_username.get(),
                &new_password.get(),
                &confirm_password.get(),
            )
            || only_confirm_filled(
                &username.get(),
                &original_username.get(),
                &new_password.get(),
                &confirm_password.get(),
            )
    };

    let navigate_done = navigate.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(String::new());
        success.set(false);
        let username_value = username.get();
        let password_value = new_password.get();
        if let Err(message) =
            validate_profile_input(&username_value, &password_value, &confirm_password.get())
        {
            error.set(message.to_owned());
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate_done.clone();
            leptos::task::spawn_local(async move {
                let update = crate::net::types::ProfileUpdate {
                    username: username_value,
                    password: if password_value.is_empty() { None } else { Some(password_value) },
                };
                match crate::net::api::update_profile(&update).await {
                    Ok(()) => {
                        success.set(true);
                        new_password.set(String::new());
                        confirm_password.set(String::new());
                        // The username may have changed; refresh the session
                        // so the nav chrome agrees with the backend.
                        crate::state::auth::refresh(auth).await;
                        navigate("/", leptos_router::NavigateOptions::default());
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
            let _ = &navigate_done;
            busy.set(false);
        }
    };

    let navigate_cancel = navigate.clone();
    let on_cancel = move |_| {
        navigate_cancel("/", leptos_router::NavigateOptions::default());
    };

    view! {
        <Show
            when=move || auth.get().authenticated()
            fallback=move || {
                view! {
                    <div class="profile-page">
                        <p>
                            {move || {
                                if auth.get().loading { "Loading..." } else { "Redirecting to login..." }
                            }}
                        </p>
                    </div>
                }
            }
        >
            <div class="profile-page">
                <div class="profile-card">
                    <h1 class="profile-card__title">"Edit Profile"</h1>
                    <form class="profile-form" on:submit=on_submit.clone()>
                        <label class="profile-form__label">
                            "Username"
                            <input
                                class="profile-form__input"
                                type="text"
                                prop:value=move || username.get()
                                on:input=move |ev| username.set(event_target_value(&ev))
                                disabled=move || busy.get()
                            />
                        </label>
                        <label class="profile-form__label">
                            "New Password"
                            <input
                                class="profile-form__input"
                                type="password"
                                autocomplete="new-password"
                                prop:value=move || new_password.get()
                                on:input=move |ev| new_password.set(event_target_value(&ev))
                                disabled=move || busy.get()
                            />
                        </label>
                        <label class="profile-form__label">
                            "Confirm New Password"
                            <input
                                class="profile-form__input"
                                type="password"
                                autocomplete="new-password"
                                prop:value=move || confirm_password.get()
                                on:input=move |ev| confirm_password.set(event_target_value(&ev))
                                disabled=move || busy.get()
                            />
                        </label>
                        <Show when=move || !error.get().is_empty()>
                            <p class="profile-form__error">{move || error.get()}</p>
                        </Show>
                        <Show when=move || success.get()>
                            <p class="profile-form__success">"Profile updated successfully!"</p>
                        </Show>
                        <div class="profile-form__actions">
                            <button class="btn btn--primary" type="submit" disabled=save_disabled>
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
                </div>
            </div>
        </Show>
    }
}
