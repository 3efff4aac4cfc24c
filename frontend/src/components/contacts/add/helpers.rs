//! DOM helpers for the contact creation form: blocking alerts, transient
//! toasts, file input access and photo previews.

use gloo_file::{Blob, ObjectUrl};
use web_sys::HtmlInputElement;

/// Shows a blocking browser alert.
pub fn show_alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

const TOAST_STYLE: &str = "position:fixed;bottom:20px;left:50%;transform:translateX(-50%);\
    background:rgba(0,0,0,0.8);color:#fff;padding:10px 20px;border-radius:4px;\
    z-index:10000;font-family:Arial, sans-serif;";
const TOAST_MILLIS: u32 = 3000;

/// Non-blocking notice confirming that the profile photo reached the server.
/// Failures use [`show_alert`] instead, since those must interrupt the user.
pub fn show_toast(message: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };

    toast.set_text_content(Some(message));
    toast.set_attribute("style", TOAST_STYLE).ok();

    if body.append_child(&toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_MILLIS).await;
            toast.remove();
        });
    }
}

/// First file picked in a file input, if any.
pub fn selected_file(input: &HtmlInputElement) -> Option<web_sys::File> {
    input.files().and_then(|files| files.get(0))
}

/// Local object URL showing `file` before it reaches the server.
pub fn preview_url(file: &web_sys::File) -> ObjectUrl {
    ObjectUrl::from(Blob::from(file.clone()))
}

/// Clears a file input so picking the same file again fires `change`.
pub fn reset_file_input(input: Option<HtmlInputElement>) {
    if let Some(input) = input {
        input.set_value("");
    }
}
