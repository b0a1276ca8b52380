//! # client
//!
//! Leptos + WASM admin console for the SkillMentor tutoring platform.
//!
//! This crate contains the route table, the auth/role state machine that
//! gates those routes, the REST gateway to the academic backend, and the
//! admin pages and components built on top of them. All decision logic is
//! plain Rust so it can be unit-tested natively; browser-only glue lives
//! behind the `hydrate` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
