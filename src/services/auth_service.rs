use crate::config::CONFIG;
use crate::services::navigation::Navigator;
use crate::utils::constants::{ACCESS_TOKEN_KEY, USER_KEY};
use crate::utils::storage::CredentialStore;

/// Token de acceso guardado por el login externo (vacío = sin token)
pub fn access_token<S: CredentialStore>(store: &S) -> Option<String> {
    store.get(ACCESS_TOKEN_KEY).filter(|token| !token.is_empty())
}

pub fn is_authenticated<S: CredentialStore>(store: &S) -> bool {
    access_token(store).is_some()
}

/// Logout puramente local: borra token y usuario y vuelve al login
pub fn logout<S: CredentialStore, N: Navigator>(store: &S, navigator: &N) {
    logout_to(store, navigator, &CONFIG.login_path)
}

pub fn logout_to<S: CredentialStore, N: Navigator>(store: &S, navigator: &N, login_path: &str) {
    log::info!("🚪 [LOGOUT] Limpiando credenciales locales");

    // Cada borrado es independiente: un fallo no impide el resto
    for key in [ACCESS_TOKEN_KEY, USER_KEY] {
        if let Err(e) = store.remove(key) {
            log::error!("❌ [LOGOUT] {}", e);
        }
    }

    if let Err(e) = navigator.navigate(login_path) {
        log::error!("❌ [LOGOUT] {}", e);
    }
}
