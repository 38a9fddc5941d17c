// ============================================================================
// TABLE BANKING DASHBOARD - GLUE DEL NAVEGADOR (RUST + WASM)
// ============================================================================
// - Session guard: sin token → login
// - Stats panel: GET autenticado de estadísticas → texto en el DOM
// - Logout: borra credenciales locales → login
// Todo el acceso al navegador pasa por traits inyectables (storage,
// navegación, fetch, DOM) para poder testear sin navegador.
// ============================================================================

pub mod config;
pub mod dom;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;

#[cfg(target_arch = "wasm32")]
mod app;

#[cfg(test)]
mod testing;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(config::CONFIG.log_level()));

    app::App::new().start()
}

/// Logout llamable desde JavaScript (`onclick="logout()"`)
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn logout() {
    services::auth_service::logout(&utils::BrowserStorage::new(), &services::BrowserNavigator::new());
}
