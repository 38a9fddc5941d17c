// ============================================================================
// SESSION GUARD - Redirige al login si no hay token
// ============================================================================

use crate::services::auth_service::is_authenticated;
use crate::services::navigation::Navigator;
use crate::utils::constants::LOGIN_MARKER;
use crate::utils::storage::CredentialStore;

/// Resultado de la comprobación al cargar la página
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Hay token, no se hace nada
    Authenticated,
    /// Sin token pero ya estamos en el login
    OnLoginPage,
    /// Sin token: se pidió navegar al login
    Redirected,
}

pub struct SessionGuard<S, N> {
    store: S,
    navigator: N,
    login_path: String,
}

impl<S: CredentialStore, N: Navigator> SessionGuard<S, N> {
    pub fn new(store: S, navigator: N, login_path: impl Into<String>) -> Self {
        Self {
            store,
            navigator,
            login_path: login_path.into(),
        }
    }

    /// Comprobar la sesión; sin token no es un error, solo una redirección
    pub fn check(&self) -> GuardDecision {
        if is_authenticated(&self.store) {
            return GuardDecision::Authenticated;
        }

        let path = self.navigator.current_path();
        if is_login_path(&path) {
            log::debug!("🔓 [GUARD] Sin token, ya en {}", path);
            return GuardDecision::OnLoginPage;
        }

        log::info!("🔒 [GUARD] Sin token, redirigiendo a {}", self.login_path);
        if let Err(e) = self.navigator.navigate(&self.login_path) {
            log::error!("❌ [GUARD] {}", e);
        }
        GuardDecision::Redirected
    }
}

pub fn is_login_path(path: &str) -> bool {
    path.contains(LOGIN_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingNavigator;
    use crate::utils::constants::ACCESS_TOKEN_KEY;
    use crate::utils::storage::MemoryStorage;

    #[test]
    fn redirects_once_without_token() {
        let store = MemoryStorage::new();
        let navigator = RecordingNavigator::at("/dashboard");
        let guard = SessionGuard::new(&store, &navigator, "/login");

        assert_eq!(guard.check(), GuardDecision::Redirected);
        assert_eq!(navigator.visits(), vec!["/login".to_string()]);
    }

    #[test]
    fn never_redirects_with_token() {
        let store = MemoryStorage::with_entry(ACCESS_TOKEN_KEY, "eyJhbGciOi");
        for path in ["/dashboard", "/", "/login", "/groups/12"] {
            let navigator = RecordingNavigator::at(path);
            let guard = SessionGuard::new(&store, &navigator, "/login");

            assert_eq!(guard.check(), GuardDecision::Authenticated);
            assert!(navigator.visits().is_empty());
        }
    }

    #[test]
    fn stays_on_login_page() {
        let store = MemoryStorage::new();
        for path in ["/login", "/login/", "/accounts/login?next=/"] {
            let navigator = RecordingNavigator::at(path);
            let guard = SessionGuard::new(&store, &navigator, "/login");

            assert_eq!(guard.check(), GuardDecision::OnLoginPage);
            assert!(navigator.visits().is_empty());
        }
    }

    #[test]
    fn empty_token_counts_as_missing() {
        let store = MemoryStorage::with_entry(ACCESS_TOKEN_KEY, "");
        let navigator = RecordingNavigator::at("/dashboard");
        let guard = SessionGuard::new(&store, &navigator, "/login");

        assert_eq!(guard.check(), GuardDecision::Redirected);
    }

    #[test]
    fn navigation_failure_does_not_panic() {
        let store = MemoryStorage::new();
        let navigator = RecordingNavigator::failing("/dashboard");
        let guard = SessionGuard::new(&store, &navigator, "/login");

        assert_eq!(guard.check(), GuardDecision::Redirected);
    }
}
