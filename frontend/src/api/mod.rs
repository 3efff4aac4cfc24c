//! Client for the contacts API.
//!
//! [`ContactApi`] is the seam between the form workflow and the network. The
//! browser build talks to the server through [`HttpContactApi`]; the workflow
//! tests substitute an in-memory implementation.

use common::model::contact::{ContactSummary, CreatedContact, NewContact};
use common::model::photo::UploadResult;
use common::requests::{UPLOAD_FILE_FIELD, UPLOAD_OWNER_FIELD};
use gloo_net::http::{Request, Response};
use log::debug;
use web_sys::FormData;

use crate::config::ApiConfig;
use crate::error::ApiError;

/// Operations the contact creation screen needs from the server.
#[allow(async_fn_in_trait)]
pub trait ContactApi {
    /// Handle to the picked image file.
    type Photo;

    async fn list_contacts(&self) -> Result<Vec<ContactSummary>, ApiError>;

    /// Creates a contact and returns the id assigned by the server.
    async fn create_contact(&self, contact: &NewContact) -> Result<i64, ApiError>;

    async fn upload_photo(&self, photo: &Self::Photo) -> Result<UploadResult, ApiError>;
}

/// [`ContactApi`] over `fetch`, configured with an explicit [`ApiConfig`].
pub struct HttpContactApi {
    config: ApiConfig,
}

impl HttpContactApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

impl ContactApi for HttpContactApi {
    type Photo = web_sys::File;

    async fn list_contacts(&self) -> Result<Vec<ContactSummary>, ApiError> {
        let response = Request::get(&self.config.contacts_url()).send().await?;
        let response = ensure_success(response)?;
        Ok(response.json::<Vec<ContactSummary>>().await?)
    }

    async fn create_contact(&self, contact: &NewContact) -> Result<i64, ApiError> {
        let response = Request::post(&self.config.contacts_url())
            .json(contact)?
            .send()
            .await?;
        let response = ensure_success(response)?;
        let body = response.text().await?;
        created_id(&body)
    }

    async fn upload_photo(&self, photo: &web_sys::File) -> Result<UploadResult, ApiError> {
        let form = FormData::new().map_err(js_error)?;
        form.append_with_blob_and_filename(UPLOAD_FILE_FIELD, photo, &photo.name())
            .map_err(js_error)?;
        form.append_with_str(UPLOAD_OWNER_FIELD, &self.config.upload_owner_id.to_string())
            .map_err(js_error)?;

        let response = Request::post(&self.config.photo_upload_url())
            .body(form)?
            .send()
            .await?;
        let response = ensure_success(response)?;

        let content_type = response.headers().get("content-type");
        if !is_json_content_type(content_type.as_deref()) {
            let text = response.text().await.unwrap_or_default();
            debug!("Upload answered with a non-JSON body: {}", text);
            return Err(ApiError::UnexpectedFormat(content_type.unwrap_or_default()));
        }

        Ok(response.json::<UploadResult>().await?)
    }
}

fn ensure_success(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        Ok(response)
    } else {
        Err(ApiError::Status(response.status()))
    }
}

fn js_error(value: wasm_bindgen::JsValue) -> ApiError {
    ApiError::Network(format!("{:?}", value))
}

/// Extracts the server-assigned id from a create response body.
///
/// Ids start at 1, so an id of 0 is treated the same as a missing one.
pub fn created_id(body: &str) -> Result<i64, ApiError> {
    let created: CreatedContact =
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    created
        .id
        .filter(|id| *id != 0)
        .ok_or(ApiError::MissingField("id"))
}

/// Whether a `Content-Type` header value announces a JSON body.
pub fn is_json_content_type(content_type: Option<&str>) -> bool {
    content_type
        .map(|ct| ct.to_ascii_lowercase().contains("application/json"))
        .unwrap_or(false)
}
