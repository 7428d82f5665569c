//! Citybuild Client
//!
//! Yew WASM frontend application.
//!
//! This crate is WASM-only. Use `trunk build` or `cargo check --target wasm32-unknown-unknown`.

#[cfg(not(target_arch = "wasm32"))]
compile_error!(
    "citybuild-client only supports wasm32 target. Use: cargo check -p citybuild-client --target wasm32-unknown-unknown"
);

mod app;
mod bridge;
mod components;
mod hooks;
mod pages;
mod routes;
mod surface;
mod time;

use app::App;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Layer};
use tracing_web::MakeWebConsoleWriter;

fn main() {
    console_error_panic_hook::set_once();

    let config = hooks::client_config();

    // Initialize tracing for wasm with tracing-web
    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new())
        .with_filter(filter);

    tracing_subscriber::registry().with(fmt_layer).init();
    tracing::info!(?config, "citybuild client starting");

    yew::Renderer::<App>::with_props(app::AppProps { config }).render();
}
