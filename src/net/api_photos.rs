//! REST wrapper for the photo upload endpoint.
//!
//! Uploading is multipart and browser-only, so unlike the other wrappers
//! this one exists only under `hydrate` — its callers already live inside
//! hydrate-gated event handlers.

#[cfg(test)]
#[path = "api_photos_test.rs"]
mod api_photos_test;

#[cfg(any(test, feature = "hydrate"))]
const UPLOAD_FAILED_MESSAGE: &str = "Unable to upload image";

/// Upload an image via multipart `POST /api/photos`, returning the stored URL.
///
/// # Errors
///
/// Returns a message string if the form cannot be built, the request fails,
/// or the backend rejects the upload.
#[cfg(feature = "hydrate")]
pub async fn upload_photo(file: &web_sys::File) -> Result<String, String> {
    use super::types::PhotoResponse;

    let form = web_sys::FormData::new().map_err(|_| UPLOAD_FAILED_MESSAGE.to_owned())?;
    form.append_with_blob_and_filename("photo", file, &file.name())
        .map_err(|_| UPLOAD_FAILED_MESSAGE.to_owned())?;

    let resp = gloo_net::http::Request::post("/api/photos")
        .body(form)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        log::warn!("photo upload rejected with status {}", resp.status());
        return Err(UPLOAD_FAILED_MESSAGE.to_owned());
    }
    let body: PhotoResponse = resp.json().await.map_err(|e| e.to_string())?;
    Ok(body.photo_url)
}
