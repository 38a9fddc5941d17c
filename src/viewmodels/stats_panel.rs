// ============================================================================
// STATS PANEL VIEWMODEL - Fetch autenticado + render de estadísticas
// ============================================================================
// Una sola petición por carga de página, sin reintentos.
// Cualquier fallo se registra y deja el DOM como estaba.
// ============================================================================

use crate::dom::render::RenderTarget;
use crate::models::DashboardStats;
use crate::services::api_client::StatsClient;
use crate::services::auth_service::access_token;
use crate::state::panel_state::{PanelState, PanelStateHandle};
use crate::utils::storage::CredentialStore;

pub struct StatsPanel<C, S, R> {
    client: C,
    store: S,
    target: R,
    currency_prefix: String,
    state: PanelStateHandle,
}

impl<C, S, R> StatsPanel<C, S, R>
where
    C: StatsClient,
    S: CredentialStore,
    R: RenderTarget,
{
    pub fn new(client: C, store: S, target: R, currency_prefix: impl Into<String>) -> Self {
        Self {
            client,
            store,
            target,
            currency_prefix: currency_prefix.into(),
            state: PanelStateHandle::new(),
        }
    }

    /// Handle para observar el estado desde fuera del future
    pub fn state_handle(&self) -> PanelStateHandle {
        self.state.clone()
    }

    pub fn state(&self) -> PanelState {
        self.state.get()
    }

    /// Cargar y pintar las estadísticas; nunca devuelve error
    pub async fn load(&self) -> PanelState {
        if !self.state.is_idle() {
            log::debug!("📊 [STATS] Panel ya cargado, sin reintento");
            return self.state.get();
        }

        self.state.set(PanelState::Requesting);
        let token = access_token(&self.store);

        match self.client.fetch_stats(token.as_deref()).await {
            Ok(stats) => {
                self.render(&stats);
                log::debug!(
                    "✅ [STATS] {} grupos, {} miembros, {} préstamos activos",
                    stats.total_groups, stats.total_members, stats.active_loans
                );
                self.state.set(PanelState::Rendered(stats));
            }
            Err(e) => {
                log::error!("❌ [STATS] Error cargando dashboard: {}", e);
                self.state.set(PanelState::Failed(e));
            }
        }

        self.state.get()
    }

    fn render(&self, stats: &DashboardStats) {
        for (field, text) in stats.display_values(&self.currency_prefix) {
            if let Err(e) = self.target.set_text(field.element_id(), &text) {
                log::warn!("⚠️ [STATS] {}", e);
            }
        }
    }
}
