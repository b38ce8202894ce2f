//! Recipe image upload with file picker and drag-and-drop.
//!
//! Both input paths feed the same validation + preview logic. Previews are
//! object URLs; each one is revoked when replaced and again on teardown,
//! otherwise the browser keeps the underlying blob alive.

#[cfg(test)]
#[path = "upload_image_test.rs"]
mod upload_image_test;

use leptos::prelude::*;

#[cfg(any(test, feature = "hydrate"))]
const UNSUPPORTED_IMAGE_TYPE: &str = "Unsupported Image Type";
#[cfg(any(test, feature = "hydrate"))]
const NO_FILE_SELECTED: &str = "Choose an image first.";

/// Client-side allowlist, mirrored from the backend's accepted formats.
#[cfg(any(test, feature = "hydrate"))]
fn is_supported_image_type(mime: &str) -> bool {
    matches!(mime, "image/jpeg" | "image/png" | "image/gif" | "image/webp")
}

#[cfg(feature = "hydrate")]
fn first_selected_file(input: &web_sys::HtmlInputElement) -> Option<web_sys::File> {
    input.files().and_then(|files| files.get(0))
}

/// Swap the preview object URL, revoking the previous one.
#[cfg(feature = "hydrate")]
fn replace_preview(preview: RwSignal<Option<String>>, file: Option<&web_sys::File>) {
    if let Some(old) = preview.get_untracked() {
        let _ = web_sys::Url::revoke_object_url(&old);
    }
    let next = file.and_then(|file| web_sys::Url::create_object_url_with_blob(file).ok());
    preview.set(next);
}

/// Image upload form for one recipe: validates the file type client-side,
/// previews the selection, uploads it, then points the recipe's `image_url`
/// at the stored photo.
#[component]
pub fn UploadImage(recipe_id: i64, on_uploaded: Callback<String>) -> impl IntoView {
    let error = RwSignal::new(String::new());
    let uploaded = RwSignal::new(false);
    let preview = RwSignal::new(None::<String>);
    let drag_active = RwSignal::new(false);
    let updating = RwSignal::new(false);
    let input_ref = NodeRef::<leptos::html::Input>::new();

    // Accept or reject one candidate file, updating error + preview.
    #[cfg(feature = "hydrate")]
    let take_file = move |file: &web_sys::File| {
        if !is_supported_image_type(&file.type_()) {
            error.set(UNSUPPORTED_IMAGE_TYPE.to_owned());
            replace_preview(preview, None);
            return false;
        }
        error.set(String::new());
        replace_preview(preview, Some(file));
        true
    };

    let on_change = move |_ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(file) = input_ref.get_untracked().as_ref().and_then(first_selected_file) {
                take_file(&file);
            }
        }
    };

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        drag_active.set(false);
        #[cfg(feature = "hydrate")]
        {
            let Some(file) = ev
                .data_transfer()
                .and_then(|transfer| transfer.files())
                .and_then(|files| files.get(0))
            else {
                return;
            };
            if !take_file(&file) {
                return;
            }
            // Mirror the dropped file into the input so submit sees it.
            if let Some(input) = input_ref.get_untracked() {
                if let Ok(transfer) = web_sys::DataTransfer::new() {
                    let _ = transfer.items().add_with_file(&file);
                    if let Some(files) = transfer.files() {
                        input.set_files(Some(&files));
                    }
                }
            }
        }
    };

    let on_drag_over = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        drag_active.set(true);
    };

    let on_drag_leave = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        drag_active.set(false);
    };

    let on_zone_click = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(input) = input_ref.get_untracked() {
                input.click();
            }
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if updating.get() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            error.set(String::new());
            let Some(file) = input_ref.get_untracked().as_ref().and_then(first_selected_file)
            else {
                error.set(NO_FILE_SELECTED.to_owned());
                return;
            };
            if !is_supported_image_type(&file.type_()) {
                error.set(UNSUPPORTED_IMAGE_TYPE.to_owned());
                return;
            }
            updating.set(true);
            uploaded.set(false);
            leptos::task::spawn_local(async move {
                match crate::net::api_photos::upload_photo(&file).await {
                    Ok(url) => {
                        let update = crate::net::types::RecipeUpdate::image_only(url.clone());
                        match crate::net::api_recipes::update_recipe(recipe_id, &update).await {
                            Ok(_) => {
                                uploaded.set(true);
                                on_uploaded.run(url);
                            }
                            Err(message) => error.set(message),
                        }
                    }
                    Err(message) => error.set(message),
                }
                updating.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (recipe_id, on_uploaded);
        }
    };

    on_cleanup(move || {
        #[cfg(feature = "hydrate")]
        replace_preview(preview, None);
    });

    view! {
        <form class="upload-image" on:submit=on_submit>
            <Show when=move || uploaded.get()>
                <p class="upload-image__success">"Image uploaded successfully!"</p>
            </Show>
            <Show when=move || !error.get().is_empty()>
                <p class="upload-image__error">{move || error.get()}</p>
            </Show>
            <div
                class=move || {
                    if drag_active.get() {
                        "upload-image__dropzone upload-image__dropzone--active"
                    } else {
                        "upload-image__dropzone"
                    }
                }
                on:drop=on_drop
                on:dragover=on_drag_over
                on:dragleave=on_drag_leave
                on:click=on_zone_click
            >
                <p class="upload-image__hint">
                    {move || {
                        if drag_active.get() {
                            "Drop it here!"
                        } else {
                            "Drag & drop an image here, or click to select"
                        }
                    }}
                </p>
                <p class="upload-image__formats">"Supports: JPEG, PNG, GIF, WebP"</p>
                <input
                    node_ref=input_ref
                    class="upload-image__input"
                    type="file"
                    name="photo"
                    accept="image/jpeg,image/png,image/gif,image/webp"
                    on:change=on_change
                    // Prevents the dropzone click handler from reopening the picker.
                    on:click=move |ev| ev.stop_propagation()
                    disabled=move || updating.get()
                />
                <Show when=move || preview.get().is_some()>
                    <img
                        class="upload-image__preview"
                        src=move || preview.get().unwrap_or_default()
                        alt="Preview"
                    />
                </Show>
            </div>
            <button class="btn btn--primary" type="submit" disabled=move || updating.get()>
                {move || if updating.get() { "Uploading..." } else { "Save Image" }}
            </button>
        </form>
    }
}
