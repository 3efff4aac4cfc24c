//! View rendering for the contact creation form.

use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use super::helpers::selected_file;
use super::messages::Msg;
use super::state::ContactAddComponent;
use super::workflow::{PhotoState, SubmitPhase};

pub fn view(component: &ContactAddComponent, ctx: &Context<ContactAddComponent>) -> Html {
    let link = ctx.link();
    let draft = &component.form.draft;
    let submitting = component.form.phase == SubmitPhase::Submitting;

    html! {
        <div class="add-contact" style="max-width:480px;margin:auto;padding:16px;font-family:Arial, sans-serif;">
            <button
                class="back-button"
                onclick={link.callback(|_| Msg::Back)}
                style="border:none;background:none;font-size:1.5rem;cursor:pointer;"
            >
                { "←" }
            </button>
            <h1>{ "Add contact" }</h1>
            <form
                class="add-form"
                onsubmit={link.callback(|e: SubmitEvent| {
                    e.prevent_default();
                    Msg::Submit
                })}
            >
                { text_field("name", "Name", &draft.name, true, link.callback(Msg::SetName)) }
                { text_field("phone_number", "Phone number", &draft.phone_number, true, link.callback(Msg::SetPhoneNumber)) }
                { text_field("email", "Email", &draft.email, false, link.callback(Msg::SetEmail)) }
                { text_field("nickname", "Nickname", &draft.nickname, false, link.callback(Msg::SetNickname)) }
                <div class="form-detail" style="display:flex;flex-direction:column;margin-bottom:12px;">
                    <label for="memo">{ "Memo" }</label>
                    <textarea
                        id="memo"
                        ref={component.memo_ref.clone()}
                        value={draft.memo.clone()}
                        oninput={link.batch_callback(|e: InputEvent| {
                            let value = e.target_unchecked_into::<HtmlTextAreaElement>().value();
                            vec![Msg::SetMemo(value), Msg::AutoResize]
                        })}
                        rows={1}
                        style="width:100%;min-height:40px;resize:none;overflow:hidden;"
                    />
                </div>
                { photo_field(component, link) }
                <button class="submit-button" type="submit" disabled={submitting}>
                    { if submitting { "Saving..." } else { "Save" } }
                </button>
            </form>
        </div>
    }
}

/// Labelled single line input bound to one draft field.
fn text_field(
    id: &'static str,
    label: &'static str,
    value: &str,
    required: bool,
    on_change: Callback<String>,
) -> Html {
    html! {
        <div class="form-detail" style="display:flex;flex-direction:column;margin-bottom:12px;">
            <label for={id}>{ label }</label>
            <input
                type="text"
                id={id}
                value={value.to_string()}
                required={required}
                oninput={Callback::from(move |e: InputEvent| {
                    on_change.emit(e.target_unchecked_into::<HtmlInputElement>().value())
                })}
            />
        </div>
    }
}

/// Profile photo preview and picker.
fn photo_field(component: &ContactAddComponent, link: &Scope<ContactAddComponent>) -> Html {
    let preview = match &component.form.photo {
        PhotoState::Empty => html! { <p>{ "No photo" }</p> },
        PhotoState::Pending { preview, .. }
        | PhotoState::Confirmed { preview, .. }
        | PhotoState::Unconfirmed { preview } => {
            let src: &str = preview;
            html! {
                <img
                    src={src.to_string()}
                    alt="Preview"
                    class="profile-preview"
                    style="max-width:160px;max-height:160px;border-radius:8px;"
                />
            }
        }
    };
    let status = if component.form.photo.is_pending() {
        html! { <span style="color:#888;font-size:0.9rem;">{ "Uploading..." }</span> }
    } else {
        html! {}
    };

    html! {
        <div class="form-detail" style="display:flex;flex-direction:column;margin-bottom:12px;">
            <label>{ "Profile photo" }</label>
            { preview }
            { status }
            <input
                type="file"
                accept="image/*"
                ref={component.file_input_ref.clone()}
                onchange={link.batch_callback(|e: Event| {
                    let input = e.target_unchecked_into::<HtmlInputElement>();
                    selected_file(&input).map(Msg::PhotoSelected)
                })}
            />
        </div>
    }
}
