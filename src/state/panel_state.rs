// ============================================================================
// PANEL STATE - Estado del ciclo fetch/render del panel de estadísticas
// ============================================================================
// Idle → Requesting → {Rendered | Failed}; los dos últimos son finales
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::models::DashboardStats;
use crate::services::api_client::ApiError;

#[derive(Debug, Clone, PartialEq)]
pub enum PanelState {
    Idle,
    Requesting,
    Rendered(DashboardStats),
    Failed(ApiError),
}

impl PanelState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, PanelState::Rendered(_) | PanelState::Failed(_))
    }
}

/// Handle compartido del estado (el panel se mueve a `spawn_local`)
#[derive(Clone, Debug)]
pub struct PanelStateHandle {
    inner: Rc<RefCell<PanelState>>,
}

impl PanelStateHandle {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(PanelState::Idle)),
        }
    }

    pub fn get(&self) -> PanelState {
        self.inner.borrow().clone()
    }

    pub fn set(&self, state: PanelState) {
        *self.inner.borrow_mut() = state;
    }

    pub fn is_idle(&self) -> bool {
        matches!(*self.inner.borrow(), PanelState::Idle)
    }
}

impl Default for PanelStateHandle {
    fn default() -> Self {
        Self::new()
    }
}
