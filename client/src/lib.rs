//! # client
//!
//! Leptos + WASM frontend for the notice board: a login-gated bulletin board
//! with file attachments and an infinite-scroll image gallery.
//!
//! The crate holds pages, components, the session store, the outbound request
//! pipeline, and the route guard. The `noticeboard` host renders it with the
//! `ssr` feature; the browser bundle is built with `hydrate`.

pub mod app;
pub mod components;
pub mod forms;
pub mod net;
pub mod pages;
pub mod routing;
pub mod state;
pub mod util;

/// WASM entry point; hydrates the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
