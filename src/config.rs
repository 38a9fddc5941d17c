use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Origen del backend; vacío = mismo origen que la página
    pub backend_url: String,
    pub stats_endpoint: String,
    pub login_path: String,
    pub currency_prefix: String,
    pub enable_logging: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: String::new(),
            stats_endpoint: "/api/dashboard/stats/".to_string(),
            login_path: "/login".to_string(),
            currency_prefix: "KES".to_string(),
            enable_logging: true,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            backend_url: option_env!("BACKEND_URL")
                .map(|s| s.trim_end_matches('/').to_string())
                .unwrap_or(defaults.backend_url),
            stats_endpoint: option_env!("STATS_ENDPOINT")
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .unwrap_or(defaults.stats_endpoint),
            login_path: option_env!("LOGIN_PATH")
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .unwrap_or(defaults.login_path),
            currency_prefix: option_env!("CURRENCY_PREFIX")
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .unwrap_or(defaults.currency_prefix),
            enable_logging: option_env!("ENABLE_LOGGING")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.enable_logging),
        }
    }

    /// URL completa del endpoint de estadísticas
    pub fn stats_url(&self) -> String {
        format!("{}{}", self.backend_url, self.stats_endpoint)
    }

    /// Nivel de log para wasm-logger
    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Debug
        } else {
            log::Level::Error
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
