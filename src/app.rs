// ============================================================================
// APP - Arranque en el navegador (guard + panel + logout)
// ============================================================================
// Los dos componentes se inicializan por separado en DOMContentLoaded.
// La carga del panel es la única operación asíncrona y nadie la espera.
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use crate::config::CONFIG;
use crate::dom::{on_click, query_selector_all, DomRenderTarget};
use crate::services::api_client::ApiClient;
use crate::services::auth_service;
use crate::services::navigation::BrowserNavigator;
use crate::services::session_guard::{GuardDecision, SessionGuard};
use crate::utils::constants::LOGOUT_SELECTOR;
use crate::utils::storage::BrowserStorage;
use crate::viewmodels::StatsPanel;

/// Aplicación principal
pub struct App {
    store: Rc<BrowserStorage>,
    navigator: Rc<BrowserNavigator>,
}

impl App {
    pub fn new() -> Self {
        Self {
            store: Rc::new(BrowserStorage::new()),
            navigator: Rc::new(BrowserNavigator::new()),
        }
    }

    /// Inicializar todo cuando el documento esté listo
    pub fn start(self) -> Result<(), JsValue> {
        crate::dom::on_dom_ready(move || {
            log::info!("🏦 [APP] Table Banking App initialized");
            self.run_session_guard();
            self.load_stats();
            if let Err(e) = self.bind_logout_buttons() {
                log::error!("❌ [APP] Error registrando logout: {:?}", e);
            }
        })
    }

    fn run_session_guard(&self) -> GuardDecision {
        let guard = SessionGuard::new(
            Rc::clone(&self.store),
            Rc::clone(&self.navigator),
            CONFIG.login_path.clone(),
        );
        guard.check()
    }

    fn load_stats(&self) {
        let panel = StatsPanel::new(
            ApiClient::new(),
            Rc::clone(&self.store),
            DomRenderTarget::new(),
            CONFIG.currency_prefix.clone(),
        );
        spawn_local(async move {
            panel.load().await;
        });
    }

    /// Click en `[data-action="logout"]` → logout
    fn bind_logout_buttons(&self) -> Result<usize, JsValue> {
        let buttons = query_selector_all(LOGOUT_SELECTOR)?;
        for button in &buttons {
            let store = Rc::clone(&self.store);
            let navigator = Rc::clone(&self.navigator);
            on_click(button, move |event| {
                event.prevent_default();
                auth_service::logout(&store, &navigator);
            })?;
        }
        log::debug!("🚪 [APP] {} botones de logout registrados", buttons.len());
        Ok(buttons.len())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
