use crate::app::App;

mod api;
mod app;
mod components;
mod config;
mod error;
mod logger;
mod routes;
mod tasks;

fn main() {
    match config::log_level() {
        Ok(level) => logger::init(level),
        Err(e) => {
            logger::init(config::default_log_level());
            log::warn!("Invalid LOG_LEVEL value: {}", e);
        }
    }
    yew::Renderer::<App>::new().render();
}
