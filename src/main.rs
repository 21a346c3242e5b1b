mod config;
mod core;
mod dialogs;
mod domain;
mod drawing;
mod localize;
mod notes;
mod render;
mod session;
mod widget;

fn main() -> cosmic::iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    localize::localize();
    core::app::run()
}
