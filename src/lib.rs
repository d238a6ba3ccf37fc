//! # life-lessons
//!
//! Leptos + WASM single-page client for the Digital Life Lessons service.
//! All durable state lives behind a remote REST API and an external
//! identity provider; this crate renders views, manages client-side
//! session/auth state, and issues HTTP calls.
//!
//! The crate splits into `auth` (identity bridge), `state` (session store
//! and toasts), `net` (authenticated request client and typed endpoints),
//! `components` (route guards and shared UI), and `pages` (route screens).

pub mod app;
pub mod auth;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach the client to the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
