// ============================================================================
// MARKETPLACE ADMIN CONSOLE - Yew frontend
// ============================================================================
// Layers:
// - components / hooks: Yew views and the auth context
// - viewmodels: session lifecycle (SessionManager)
// - services: backend communication only, every call returns an ApiResult
// - stores / state: persisted session and Rc<RefCell> reactive state
// - routing: routes, access rules and navigation
// ============================================================================

pub mod components;
pub mod config;
pub mod hooks;
pub mod models;
pub mod routing;
pub mod services;
pub mod state;
pub mod stores;
pub mod utils;
pub mod viewmodels;

#[cfg(test)]
mod test_support;

use crate::config::CONFIG;

/// Installs panic and log hooks, then mounts the app on `<body>`
pub fn run() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!(
        "🚀 Admin console starting ({}, backend {})",
        CONFIG.environment,
        CONFIG.api_base_url
    );

    yew::Renderer::<components::App>::new().render();
}
