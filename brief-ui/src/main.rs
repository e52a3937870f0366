mod app;
mod bridge;
mod components;
mod logging;
mod markdown;
mod session;

fn main() {
    logging::init();
    leptos::mount_to_body(app::App);
}
