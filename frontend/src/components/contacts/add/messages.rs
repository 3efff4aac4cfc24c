use common::model::contact::ContactSummary;
use common::model::photo::UploadResult;

use crate::error::ApiError;

#[derive(Clone)]
pub enum Msg {
    ContactsLoaded(Result<Vec<ContactSummary>, ApiError>),
    SetName(String),
    SetPhoneNumber(String),
    SetEmail(String),
    SetNickname(String),
    SetMemo(String),
    AutoResize,
    PhotoSelected(web_sys::File),
    PhotoUploaded {
        ticket: u64,
        result: Result<UploadResult, ApiError>,
    },
    Submit,
    SubmitFinished(Result<i64, ApiError>),
    Back,
}
