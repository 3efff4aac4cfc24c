//! Root component: picks the screen for the current path and keeps the
//! browser history in sync with in-app navigation.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use yew::{html, Component, Context, Html};

use crate::components::contacts::add::ContactAddComponent;
use crate::components::contacts::detail::ContactDetail;
use crate::config::ApiConfig;
use crate::routes::Route;

pub enum Msg {
    Navigate(Route),
    /// Browser back/forward changed the location.
    LocationChanged,
}

pub struct App {
    route: Route,
    config: ApiConfig,
    _popstate: Option<Closure<dyn Fn()>>,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        let popstate = web_sys::window().map(|window| {
            let closure =
                Closure::<dyn Fn()>::new(move || link.send_message(Msg::LocationChanged));
            window.set_onpopstate(Some(closure.as_ref().unchecked_ref()));
            closure
        });

        Self {
            route: current_route(),
            config: ApiConfig::from_env(),
            _popstate: popstate,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Navigate(route) => {
                push_history(&route);
                self.route = route;
            }
            Msg::LocationChanged => self.route = current_route(),
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let go_home = link.callback(|_| Msg::Navigate(Route::Home));

        match &self.route {
            Route::Home | Route::NotFound => html! {
                <div style="max-width:480px;margin:auto;padding:16px;font-family:Arial, sans-serif;">
                    <h1>{ "Contacts" }</h1>
                    <button onclick={link.callback(|_| Msg::Navigate(Route::NewContact))}>
                        { "Add contact" }
                    </button>
                </div>
            },
            Route::NewContact => html! {
                <ContactAddComponent
                    config={self.config.clone()}
                    on_created={link.callback(|id| Msg::Navigate(Route::ContactDetail(id)))}
                    on_back={go_home}
                />
            },
            Route::ContactDetail(id) => html! {
                <ContactDetail id={*id} on_back={go_home} />
            },
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let Some(window) = web_sys::window() {
            window.set_onpopstate(None);
        }
    }
}

fn current_route() -> Route {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .map(|path| Route::parse(&path))
        .unwrap_or(Route::Home)
}

fn push_history(route: &Route) {
    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
        let _ = history.push_state_with_url(&JsValue::NULL, "", Some(&route.path()));
    }
}
