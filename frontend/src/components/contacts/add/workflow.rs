//! Platform independent core of the contact creation form.
//!
//! [`ContactForm`] owns everything the form knows (field values, the contact
//! list used for id derivation, the photo state and the submit phase) and
//! exposes the transitions the Yew component drives from its messages. Nothing
//! here touches the DOM or the network, which is what lets the tests below
//! exercise the full create flow against an in-memory [`ContactApi`].
//!
//! [`ContactApi`]: crate::api::ContactApi

use common::model::contact::{ContactSummary, NewContact};
use common::model::photo::UploadResult;
use log::{debug, error, info, warn};

use crate::error::{ApiError, ValidationError};

pub const UPLOAD_FAILED_MESSAGE: &str = "Photo upload failed.";
pub const UPLOAD_FORMAT_MESSAGE: &str = "The server response format is not valid.";

/// Raw values of the form inputs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormDraft {
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub nickname: String,
    pub memo: String,
}

impl FormDraft {
    /// Name and phone number must be present; whitespace alone does not count.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() || self.phone_number.trim().is_empty() {
            return Err(ValidationError::MissingRequiredFields);
        }
        Ok(())
    }
}

/// Advisory id for a new contact: one past the highest known id, or 1.
///
/// The server has the final say; this value is only sent along with the
/// create request. A listed `i64::MAX` has no successor, so the guess
/// saturates there.
pub fn next_advisory_id(contacts: &[ContactSummary]) -> i64 {
    contacts
        .iter()
        .map(|c| c.id)
        .max()
        .map_or(1, |max| max.saturating_add(1))
}

/// Profile photo of the draft.
///
/// `P` is the handle of the local preview (an object URL in the browser). The
/// preview is shown while the upload is `Pending` and stays once the server
/// has `Confirmed` it with a filename. An upload answered in an unreadable
/// format leaves the preview `Unconfirmed`: still shown, never submitted.
#[derive(Debug, Clone, PartialEq)]
pub enum PhotoState<P> {
    Empty,
    Pending { ticket: u64, preview: P },
    Confirmed { preview: P, filename: String },
    Unconfirmed { preview: P },
}

impl<P> Default for PhotoState<P> {
    fn default() -> Self {
        PhotoState::Empty
    }
}

impl<P> PhotoState<P> {
    pub fn preview(&self) -> Option<&P> {
        match self {
            PhotoState::Empty => None,
            PhotoState::Pending { preview, .. }
            | PhotoState::Confirmed { preview, .. }
            | PhotoState::Unconfirmed { preview } => Some(preview),
        }
    }

    /// Server filename, only once the upload has been confirmed.
    pub fn filename(&self) -> Option<&str> {
        match self {
            PhotoState::Confirmed { filename, .. } => Some(filename),
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, PhotoState::Pending { .. })
    }
}

/// What the user should be told once an upload settles.
#[derive(Debug, Clone, PartialEq)]
pub enum UploadFeedback {
    Confirmed,
    /// The upload failed and the preview has been rolled back.
    Failed(&'static str),
    /// The server answered in an unexpected format; the preview stays but no
    /// filename is attached.
    Rejected(&'static str),
    /// The result belongs to an upload that has since been replaced.
    Stale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    Navigated(i64),
}

/// State of one contact creation form.
#[derive(Debug)]
pub struct ContactForm<P> {
    pub draft: FormDraft,
    pub contacts: Vec<ContactSummary>,
    pub photo: PhotoState<P>,
    pub phase: SubmitPhase,
    next_ticket: u64,
}

impl<P> Default for ContactForm<P> {
    fn default() -> Self {
        Self {
            draft: FormDraft::default(),
            contacts: Vec::new(),
            photo: PhotoState::default(),
            phase: SubmitPhase::Idle,
            next_ticket: 0,
        }
    }
}

impl<P> ContactForm<P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the result of the initial list fetch. Failures leave the list
    /// empty, so the advisory id falls back to 1.
    pub fn contacts_loaded(&mut self, result: Result<Vec<ContactSummary>, ApiError>) {
        match result {
            Ok(contacts) => {
                debug!("Loaded {} existing contacts", contacts.len());
                self.contacts = contacts;
            }
            Err(e) => {
                error!("Failed to load contacts: {}", e);
                self.contacts.clear();
            }
        }
    }

    /// Shows `preview` right away and returns the ticket the upload result
    /// must carry. Any earlier photo, pending or confirmed, is replaced along
    /// with its filename, so a submit during this upload carries no photo.
    pub fn begin_upload(&mut self, preview: P) -> u64 {
        self.next_ticket += 1;
        let ticket = self.next_ticket;
        self.photo = PhotoState::Pending { ticket, preview };
        ticket
    }

    pub fn finish_upload(
        &mut self,
        ticket: u64,
        result: Result<UploadResult, ApiError>,
    ) -> UploadFeedback {
        let current = matches!(self.photo, PhotoState::Pending { ticket: t, .. } if t == ticket);
        if !current {
            debug!("Ignoring result of superseded upload #{}", ticket);
            return UploadFeedback::Stale;
        }

        let previous = std::mem::take(&mut self.photo);
        match (previous, result) {
            (PhotoState::Pending { preview, .. }, Ok(upload)) => {
                info!("Photo uploaded as {}", upload.filename);
                self.photo = PhotoState::Confirmed {
                    preview,
                    filename: upload.filename,
                };
                UploadFeedback::Confirmed
            }
            (PhotoState::Pending { preview, .. }, Err(e @ ApiError::UnexpectedFormat(_))) => {
                warn!("Photo upload returned an unexpected format: {}", e);
                self.photo = PhotoState::Unconfirmed { preview };
                UploadFeedback::Rejected(UPLOAD_FORMAT_MESSAGE)
            }
            (_, Err(e)) => {
                error!("Photo upload failed: {}", e);
                UploadFeedback::Failed(UPLOAD_FAILED_MESSAGE)
            }
            (_, Ok(_)) => UploadFeedback::Stale,
        }
    }

    /// Validates the draft and, when valid, moves to `Submitting` and returns
    /// the payload to post.
    ///
    /// Returns `Ok(None)` while a submission is already in flight or after
    /// navigation, so repeated clicks never issue a second request.
    pub fn begin_submit(&mut self) -> Result<Option<NewContact>, ValidationError> {
        if self.phase != SubmitPhase::Idle {
            debug!("Submit ignored while {:?}", self.phase);
            return Ok(None);
        }

        self.draft.validate()?;

        let contact = NewContact {
            id: next_advisory_id(&self.contacts),
            name: self.draft.name.clone(),
            phone_number: self.draft.phone_number.clone(),
            email: self.draft.email.clone(),
            nickname: self.draft.nickname.clone(),
            memo: self.draft.memo.clone(),
            photo_url: self.photo.filename().map(str::to_string),
        };
        self.phase = SubmitPhase::Submitting;
        Ok(Some(contact))
    }

    /// Settles a submission. Returns the server id to navigate to on success;
    /// failures are logged and the form goes back to `Idle`.
    pub fn finish_submit(&mut self, result: Result<i64, ApiError>) -> Option<i64> {
        match result {
            Ok(id) => {
                info!("Contact created with id {}", id);
                self.phase = SubmitPhase::Navigated(id);
                Some(id)
            }
            Err(e) => {
                error!("Failed to create contact: {}", e);
                self.phase = SubmitPhase::Idle;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use futures::executor::block_on;

    use super::*;
    use crate::api::ContactApi;
    use crate::routes::Route;

    struct MockApi {
        contacts: Result<Vec<ContactSummary>, ApiError>,
        create_response: Result<i64, ApiError>,
        upload_response: Result<UploadResult, ApiError>,
        created: RefCell<Vec<NewContact>>,
        calls: Cell<usize>,
    }

    impl MockApi {
        fn new() -> Self {
            Self {
                contacts: Ok(Vec::new()),
                create_response: Ok(1),
                upload_response: Ok(UploadResult {
                    filename: "photo.png".into(),
                }),
                created: RefCell::new(Vec::new()),
                calls: Cell::new(0),
            }
        }
    }

    impl ContactApi for MockApi {
        type Photo = &'static str;

        async fn list_contacts(&self) -> Result<Vec<ContactSummary>, ApiError> {
            self.calls.set(self.calls.get() + 1);
            self.contacts.clone()
        }

        async fn create_contact(&self, contact: &NewContact) -> Result<i64, ApiError> {
            self.calls.set(self.calls.get() + 1);
            self.created.borrow_mut().push(contact.clone());
            self.create_response.clone()
        }

        async fn upload_photo(&self, _photo: &&'static str) -> Result<UploadResult, ApiError> {
            self.calls.set(self.calls.get() + 1);
            self.upload_response.clone()
        }
    }

    /// Drives one submit the way the component does.
    fn submit(
        form: &mut ContactForm<&'static str>,
        api: &MockApi,
    ) -> Result<Option<i64>, ValidationError> {
        match form.begin_submit()? {
            Some(contact) => {
                let result = block_on(api.create_contact(&contact));
                Ok(form.finish_submit(result))
            }
            None => Ok(None),
        }
    }

    fn upload(
        form: &mut ContactForm<&'static str>,
        api: &MockApi,
        file: &'static str,
    ) -> UploadFeedback {
        let ticket = form.begin_upload(file);
        let result = block_on(api.upload_photo(&file));
        form.finish_upload(ticket, result)
    }

    fn filled_form() -> ContactForm<&'static str> {
        let mut form = ContactForm::new();
        form.draft.name = "Kim".into();
        form.draft.phone_number = "010-1234-5678".into();
        form
    }

    fn ids(ids: &[i64]) -> Vec<ContactSummary> {
        ids.iter().map(|&id| ContactSummary { id }).collect()
    }

    #[test]
    fn advisory_id_is_one_past_the_maximum() {
        assert_eq!(next_advisory_id(&[]), 1);
        assert_eq!(next_advisory_id(&ids(&[5])), 6);
        assert_eq!(next_advisory_id(&ids(&[3, 7])), 8);
        assert_eq!(next_advisory_id(&ids(&[9, 2, 4])), 10);
        assert_eq!(next_advisory_id(&ids(&[-4, -2])), -1);
    }

    #[test]
    fn advisory_id_saturates_at_the_largest_id() {
        assert_eq!(next_advisory_id(&ids(&[i64::MAX])), i64::MAX);
        assert_eq!(next_advisory_id(&ids(&[3, i64::MAX, 7])), i64::MAX);
    }

    #[test]
    fn missing_required_fields_never_reach_the_network() {
        let api = MockApi::new();

        for (name, phone) in [("", "010"), ("Kim", ""), ("", ""), ("   ", "010")] {
            let mut form = ContactForm::new();
            form.draft.name = name.into();
            form.draft.phone_number = phone.into();

            assert_eq!(
                submit(&mut form, &api),
                Err(ValidationError::MissingRequiredFields)
            );
            assert_eq!(form.phase, SubmitPhase::Idle);
        }
        assert_eq!(api.calls.get(), 0);
    }

    #[test]
    fn validation_message_is_user_facing() {
        assert_eq!(
            ValidationError::MissingRequiredFields.to_string(),
            "Name and phone number are required."
        );
    }

    #[test]
    fn confirmed_upload_is_attached_to_the_contact() {
        let api = MockApi::new();
        let mut form = filled_form();

        assert_eq!(upload(&mut form, &api, "blob:1"), UploadFeedback::Confirmed);
        assert_eq!(form.photo.preview(), Some(&"blob:1"));
        assert_eq!(submit(&mut form, &api), Ok(Some(1)));

        let created = api.created.borrow();
        assert_eq!(created[0].photo_url.as_deref(), Some("photo.png"));
    }

    #[test]
    fn submit_before_upload_completes_omits_the_photo() {
        let api = MockApi::new();
        let mut form = filled_form();

        form.begin_upload("blob:1");
        assert!(form.photo.is_pending());
        submit(&mut form, &api).unwrap();

        assert_eq!(api.created.borrow()[0].photo_url, None);
    }

    #[test]
    fn failed_upload_rolls_back_the_preview() {
        let mut api = MockApi::new();
        api.upload_response = Err(ApiError::Network("connection refused".into()));
        let mut form = filled_form();

        let feedback = upload(&mut form, &api, "blob:1");

        assert_eq!(feedback, UploadFeedback::Failed(UPLOAD_FAILED_MESSAGE));
        assert_eq!(form.photo, PhotoState::Empty);

        // still submittable, without a photo
        api.upload_response = Ok(UploadResult {
            filename: "unused".into(),
        });
        assert_eq!(submit(&mut form, &api), Ok(Some(1)));
        assert_eq!(api.created.borrow()[0].photo_url, None);
    }

    #[test]
    fn error_status_on_upload_is_an_upload_failure() {
        let mut api = MockApi::new();
        api.upload_response = Err(ApiError::Status(500));
        let mut form = filled_form();

        assert_eq!(
            upload(&mut form, &api, "blob:1"),
            UploadFeedback::Failed(UPLOAD_FAILED_MESSAGE)
        );
    }

    #[test]
    fn non_json_upload_response_is_a_format_error() {
        let mut api = MockApi::new();
        api.upload_response = Err(ApiError::UnexpectedFormat("text/html".into()));
        let mut form = filled_form();

        let feedback = upload(&mut form, &api, "blob:1");

        assert_eq!(feedback, UploadFeedback::Rejected(UPLOAD_FORMAT_MESSAGE));
        assert_eq!(form.photo.preview(), Some(&"blob:1"));
        assert_eq!(form.photo.filename(), None);
        assert!(!form.photo.is_pending());

        submit(&mut form, &api).unwrap();
        assert_eq!(api.created.borrow()[0].photo_url, None);
    }

    #[test]
    fn failed_replacement_also_drops_an_earlier_confirmed_photo() {
        let mut api = MockApi::new();
        let mut form = filled_form();
        upload(&mut form, &api, "blob:1");

        api.upload_response = Err(ApiError::Network("offline".into()));
        upload(&mut form, &api, "blob:2");

        assert_eq!(form.photo, PhotoState::Empty);
        submit(&mut form, &api).unwrap();
        assert_eq!(api.created.borrow()[0].photo_url, None);
    }

    #[test]
    fn submit_during_a_replacement_upload_sends_no_photo() {
        let api = MockApi::new();
        let mut form = filled_form();
        upload(&mut form, &api, "blob:1");
        assert_eq!(form.photo.filename(), Some("photo.png"));

        form.begin_upload("blob:2");
        submit(&mut form, &api).unwrap();

        assert_eq!(api.created.borrow()[0].photo_url, None);
    }

    #[test]
    fn superseded_upload_result_is_ignored() {
        let mut form: ContactForm<&'static str> = filled_form();
        let first = form.begin_upload("blob:1");
        let second = form.begin_upload("blob:2");

        let late = form.finish_upload(
            first,
            Ok(UploadResult {
                filename: "old.png".into(),
            }),
        );
        assert_eq!(late, UploadFeedback::Stale);
        assert!(form.photo.is_pending());

        let current = form.finish_upload(
            second,
            Ok(UploadResult {
                filename: "new.png".into(),
            }),
        );
        assert_eq!(current, UploadFeedback::Confirmed);
        assert_eq!(form.photo.filename(), Some("new.png"));
        assert_eq!(form.photo.preview(), Some(&"blob:2"));
    }

    #[test]
    fn create_response_without_id_does_not_navigate() {
        let mut api = MockApi::new();
        api.create_response = crate::api::created_id(r#"{"name":"Kim"}"#);
        let mut form = filled_form();

        assert_eq!(submit(&mut form, &api), Ok(None));
        assert_eq!(form.phase, SubmitPhase::Idle);
    }

    #[test]
    fn failed_status_returns_to_idle() {
        let mut api = MockApi::new();
        api.create_response = Err(ApiError::Status(500));
        let mut form = filled_form();

        assert_eq!(submit(&mut form, &api), Ok(None));
        assert_eq!(form.phase, SubmitPhase::Idle);

        api.create_response = Ok(3);
        assert_eq!(submit(&mut form, &api), Ok(Some(3)));
    }

    #[test]
    fn server_id_drives_navigation() {
        let mut api = MockApi::new();
        api.create_response = crate::api::created_id(r#"{"id":42}"#);
        let mut form = filled_form();

        let id = submit(&mut form, &api).unwrap().unwrap();

        assert_eq!(Route::ContactDetail(id).path(), "/contact/42");
        assert_eq!(form.phase, SubmitPhase::Navigated(42));
    }

    #[test]
    fn submit_is_ignored_while_in_flight() {
        let mut form = filled_form();

        assert!(form.begin_submit().unwrap().is_some());
        assert_eq!(form.begin_submit(), Ok(None));
        assert_eq!(form.phase, SubmitPhase::Submitting);
    }

    #[test]
    fn navigated_form_does_not_submit_again() {
        let mut form = filled_form();
        form.begin_submit().unwrap();
        form.finish_submit(Ok(5));

        assert_eq!(form.begin_submit(), Ok(None));
    }

    #[test]
    fn failed_list_load_leaves_the_list_empty() {
        let mut form: ContactForm<&'static str> = ContactForm::new();
        form.contacts = ids(&[1]);
        form.contacts_loaded(Err(ApiError::Decode("expected array".into())));

        assert!(form.contacts.is_empty());
        assert_eq!(next_advisory_id(&form.contacts), 1);
    }

    #[test]
    fn list_create_and_navigate_scenario() {
        let mut api = MockApi::new();
        api.contacts = Ok(ids(&[3, 7]));
        api.create_response = crate::api::created_id(r#"{"id":8,"name":"Kim"}"#);

        let mut form = filled_form();
        form.draft.email = "kim@example.com".into();
        form.draft.memo = "met at\nthe conference".into();
        form.contacts_loaded(block_on(api.list_contacts()));

        let id = submit(&mut form, &api).unwrap().unwrap();

        let created = api.created.borrow();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].id, 8);
        assert_eq!(created[0].email, "kim@example.com");
        assert_eq!(created[0].nickname, "");
        assert_eq!(Route::ContactDetail(id).path(), "/contact/8");
    }

    #[test]
    fn server_id_wins_over_the_advisory_one() {
        let mut api = MockApi::new();
        api.contacts = Ok(ids(&[3, 7]));
        api.create_response = Ok(100);
        let mut form = filled_form();
        form.contacts_loaded(block_on(api.list_contacts()));

        assert_eq!(submit(&mut form, &api), Ok(Some(100)));
        assert_eq!(api.created.borrow()[0].id, 8);
    }
}
