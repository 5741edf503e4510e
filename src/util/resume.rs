//! Resume download: fetch the PDF and hand it to the browser as a file save.
//!
//! ERROR HANDLING
//! ==============
//! Every failure funnels into the same fallback: the printable HTML resume
//! opens in a new tab. A missing PDF, a network error, or a blocked blob URL
//! all degrade the same way, and none of them surface as an error to the
//! visitor.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "resume_test.rs"]
mod resume_test;

/// Served path of the resume PDF.
pub const RESUME_PATH: &str = "/Divy_Kalathiya_Resume.pdf";

/// Printable fallback page opened when the PDF cannot be fetched.
pub const FALLBACK_PATH: &str = "/resume-template.html";

/// Filename portion of a served path, used as the suggested save name.
#[must_use]
pub fn filename_for(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Downloads the resume PDF, opening the printable fallback when the file is
/// missing or the save fails. Resolves once the browser has taken over.
pub async fn download_resume() {
    #[cfg(target_arch = "wasm32")]
    {
        match fetch_resume().await {
            Some(bytes) => {
                if save_pdf(&bytes, filename_for(RESUME_PATH)).is_none() {
                    open_fallback();
                }
            }
            None => open_fallback(),
        }
    }
}

#[cfg(target_arch = "wasm32")]
async fn fetch_resume() -> Option<Vec<u8>> {
    let resp = gloo_net::http::Request::get(RESUME_PATH).send().await.ok()?;
    if !resp.ok() {
        return None;
    }
    resp.binary().await.ok()
}

/// Wraps the bytes in a blob and clicks a synthetic download link, the only
/// way a plain page can trigger a file save.
#[cfg(target_arch = "wasm32")]
fn save_pdf(bytes: &[u8], filename: &str) -> Option<()> {
    use wasm_bindgen::JsCast;

    let window = web_sys::window()?;
    let document = window.document()?;

    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::of1(&array);
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("application/pdf");
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).ok()?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).ok()?;

    let anchor = document.create_element("a").ok()?;
    let anchor: web_sys::HtmlAnchorElement = anchor.unchecked_into();
    anchor.set_href(&url);
    anchor.set_download(filename);
    let body = document.body()?;
    body.append_child(&anchor).ok()?;
    anchor.click();
    let _ = body.remove_child(&anchor);
    let _ = web_sys::Url::revoke_object_url(&url);
    Some(())
}

#[cfg(target_arch = "wasm32")]
fn open_fallback() {
    leptos::logging::warn!("resume PDF unavailable; opening printable fallback");
    if let Some(window) = web_sys::window() {
        let _ = window.open_with_url_and_target(FALLBACK_PATH, "_blank");
    }
}
