mod components;
mod config;
mod i18n;
mod navigation;
mod pages;
mod sections;
mod utils;

use pages::landing::App;

fn main() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    wasm_logger::init(wasm_logger::Config::new(level));
    yew::Renderer::<App>::new().render();
}
