//! Runtime state of the contact creation form.

use std::rc::Rc;

use gloo_file::ObjectUrl;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::api::HttpContactApi;
use crate::config::ApiConfig;
use crate::tasks::Tasks;

use super::workflow::ContactForm;

/// State container for the `ContactAddComponent`.
///
/// Fields are `pub` because they are accessed by the `view` and `update` modules.
pub struct ContactAddComponent {
    /// Field values, known contacts, photo and submit phase. The photo preview
    /// is an object URL that is revoked when it is dropped.
    pub form: ContactForm<ObjectUrl>,

    /// Client shared with the spawned request futures.
    pub api: Rc<HttpContactApi>,

    /// Background requests, aborted when the component is destroyed.
    pub tasks: Tasks,

    /// Reference to the memo `<textarea>`.
    pub memo_ref: NodeRef,

    /// Reference to the photo file input.
    pub file_input_ref: NodeRef,

    /// Guard so the contact list is fetched only on the first render.
    pub loaded: bool,
}

impl ContactAddComponent {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            form: ContactForm::new(),
            api: Rc::new(HttpContactApi::new(config)),
            tasks: Tasks::new(),
            memo_ref: NodeRef::default(),
            file_input_ref: NodeRef::default(),
            loaded: false,
        }
    }

    /// Grows the memo textarea to its `scrollHeight` so it never shows an
    /// inner scrollbar.
    pub fn resize_memo(&self) {
        if let Some(textarea) = self.memo_ref.cast::<HtmlTextAreaElement>() {
            if let Ok(html_elem) = textarea.clone().dyn_into::<HtmlElement>() {
                let style = html_elem.style();
                // reset first so the textarea can also shrink
                let _ = style.set_property("height", "auto");
                let scroll_height = textarea.scroll_height();
                let _ = style.set_property("height", &format!("{}px", scroll_height));
            }
        }
    }
}
