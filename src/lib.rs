// ============================================================================
// EMPLOYMENT MANAGEMENT CONSOLE - Yew front-end over the EMS REST backend
// ============================================================================
// - models: wire types shared with the backend
// - services: HTTP client, token refresh, per-entity clients and caches
// - state: Token Store and its reactivity primitive
// - viewmodels: form validation and submit logic, no DOM
// - router: paths and role-based access guard
// - hooks / context / components: the Yew view layer
// ============================================================================

pub mod components;
pub mod config;
pub mod context;
pub mod hooks;
pub mod models;
pub mod router;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;

use crate::components::App;
use crate::config::CONFIG;

/// Install the panic hook and logger, then mount the app on `<body>`
pub fn run() {
    console_error_panic_hook::set_once();

    if CONFIG.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    }
    log::info!("🚀 Employment Management System console starting...");
    log::info!("🌐 [CONFIG] Backend: {} ({})", CONFIG.backend_url(), CONFIG.environment);

    yew::Renderer::<App>::new().render();
}
