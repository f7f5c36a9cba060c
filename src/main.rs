// Component modules only run in the browser; the rest also builds natively for tests.
#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

mod api;
mod channels;
mod config;
mod log;
mod pipeline;
mod projection;
mod state;
mod sync;
mod theme;
mod types;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;
#[cfg(target_arch = "wasm32")]
mod pages;

#[cfg(target_arch = "wasm32")]
use app::App;

#[cfg(target_arch = "wasm32")]
fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!(
        "This crate targets WebAssembly. Use `trunk serve` to run the frontend against a running backend. Do not `cargo run` this crate natively."
    );
    std::process::exit(1);
}
