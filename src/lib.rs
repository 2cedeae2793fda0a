//! # procura
//!
//! Leptos + WASM front-end for the Procura procurement marketplace: RFQ
//! creation and vendor bidding, KYC verification workflows, and role-scoped
//! dashboards for clients, vendors, and admins.
//!
//! Persistence, authentication, and messaging live in a hosted backend
//! consumed over same-origin REST endpoints; this crate owns the session
//! resolution, role-based route gating, and landing-redirect logic in front
//! of them.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
