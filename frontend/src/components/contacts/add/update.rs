//! Update function for the contact creation form.
//!
//! Field edits mutate the draft directly. The three requests (contact list,
//! photo upload, create) are spawned as tracked tasks and report back with a
//! message; the decisions on those results live in [`ContactForm`].
//!
//! [`ContactForm`]: super::workflow::ContactForm

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api::ContactApi;
use crate::tasks::TaskKind;

use super::helpers::{preview_url, reset_file_input, show_alert, show_toast};
use super::messages::Msg;
use super::state::ContactAddComponent;
use super::workflow::UploadFeedback;

/// Central update function for the component.
///
/// Returns `true` when the view should re-render.
pub fn update(
    component: &mut ContactAddComponent,
    ctx: &Context<ContactAddComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::ContactsLoaded(result) => {
            component.tasks.finish(TaskKind::LoadContacts);
            component.form.contacts_loaded(result);
            false
        }
        Msg::SetName(value) => {
            component.form.draft.name = value;
            true
        }
        Msg::SetPhoneNumber(value) => {
            component.form.draft.phone_number = value;
            true
        }
        Msg::SetEmail(value) => {
            component.form.draft.email = value;
            true
        }
        Msg::SetNickname(value) => {
            component.form.draft.nickname = value;
            true
        }
        Msg::SetMemo(value) => {
            component.form.draft.memo = value;
            true
        }
        Msg::AutoResize => {
            component.resize_memo();
            false
        }
        Msg::PhotoSelected(file) => {
            let ticket = component.form.begin_upload(preview_url(&file));

            let api = component.api.clone();
            let link = ctx.link().clone();
            component.tasks.spawn(TaskKind::UploadPhoto, async move {
                let result = api.upload_photo(&file).await;
                link.send_message(Msg::PhotoUploaded { ticket, result });
            });
            true
        }
        Msg::PhotoUploaded { ticket, result } => {
            match component.form.finish_upload(ticket, result) {
                UploadFeedback::Confirmed => {
                    component.tasks.finish(TaskKind::UploadPhoto);
                    show_toast("Photo uploaded.");
                }
                UploadFeedback::Failed(message) => {
                    component.tasks.finish(TaskKind::UploadPhoto);
                    reset_file_input(component.file_input_ref.cast::<HtmlInputElement>());
                    show_alert(message);
                }
                UploadFeedback::Rejected(message) => {
                    component.tasks.finish(TaskKind::UploadPhoto);
                    show_alert(message);
                }
                UploadFeedback::Stale => return false,
            }
            true
        }
        Msg::Submit => match component.form.begin_submit() {
            Err(e) => {
                show_alert(&e.to_string());
                false
            }
            Ok(None) => false,
            Ok(Some(contact)) => {
                let api = component.api.clone();
                let link = ctx.link().clone();
                component.tasks.spawn(TaskKind::Submit, async move {
                    let result = api.create_contact(&contact).await;
                    link.send_message(Msg::SubmitFinished(result));
                });
                true
            }
        },
        Msg::SubmitFinished(result) => {
            component.tasks.finish(TaskKind::Submit);
            if let Some(id) = component.form.finish_submit(result) {
                ctx.props().on_created.emit(id);
            }
            true
        }
        Msg::Back => {
            ctx.props().on_back.emit(());
            false
        }
    }
}
