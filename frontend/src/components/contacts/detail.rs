use yew::{html, Callback, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct ContactDetailProps {
    pub id: i64,
    #[prop_or_default]
    pub on_back: Callback<()>,
}

/// Landing view after a contact has been created.
pub struct ContactDetail;

impl Component for ContactDetail {
    type Message = ();
    type Properties = ContactDetailProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ContactDetail
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let on_back = props.on_back.reform(|_| ());

        html! {
            <div class="contact-detail" style="max-width:480px;margin:auto;padding:16px;font-family:Arial, sans-serif;">
                <button
                    class="back-button"
                    onclick={on_back}
                    style="border:none;background:none;font-size:1.5rem;cursor:pointer;"
                >
                    { "←" }
                </button>
                <h1>{ format!("Contact #{}", props.id) }</h1>
            </div>
        }
    }
}
