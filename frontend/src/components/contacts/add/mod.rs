//! Contact creation form: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering, and helpers.
//!
//! Responsibilities
//! - On first render, fetch the existing contacts used to derive the advisory id.
//! - Delegate messages to `update::update` and rendering to `view::view`.
//! - Abort outstanding requests when the component is destroyed.

use std::rc::Rc;

use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;
pub mod workflow;

use crate::api::{ContactApi, HttpContactApi};
use crate::tasks::TaskKind;
pub use messages::Msg;
pub use props::ContactAddProps;
pub use state::ContactAddComponent;

impl Component for ContactAddComponent {
    type Message = Msg;
    type Properties = ContactAddProps;

    fn create(ctx: &Context<Self>) -> Self {
        ContactAddComponent::new(ctx.props().config.clone())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().config != old_props.config {
            self.api = Rc::new(HttpContactApi::new(ctx.props().config.clone()));
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;

            let api = self.api.clone();
            let link = ctx.link().clone();
            self.tasks.spawn(TaskKind::LoadContacts, async move {
                let result = api.list_contacts().await;
                link.send_message(Msg::ContactsLoaded(result));
            });
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.tasks.abort_all();
    }
}
