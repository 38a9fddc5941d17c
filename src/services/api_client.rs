// ============================================================================
// API CLIENT - Estadísticas del dashboard (Stateless)
// ============================================================================
// Construye el GET autenticado, lo envía con gloo-net e interpreta la
// respuesta: estado HTTP, JSON plano y validación de `DashboardStats`.
// ============================================================================

use std::rc::Rc;
use gloo_net::http::Request;
use crate::config::CONFIG;
use crate::models::DashboardStats;

/// Error de la petición de estadísticas
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Fallo de transporte (conexión rechazada, CORS, DNS...)
    Network(String),
    /// Respuesta con estado no exitoso
    Status { code: u16, text: String },
    /// El cuerpo no es JSON válido para `DashboardStats`
    Parse(String),
    /// JSON válido con valores fuera de rango
    InvalidPayload(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Status { code, text } => write!(f, "HTTP {}: {}", code, text),
            ApiError::Parse(msg) => write!(f, "Parse error: {}", msg),
            ApiError::InvalidPayload(msg) => write!(f, "Invalid payload: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

/// Fuente de estadísticas del dashboard
#[allow(async_fn_in_trait)]
pub trait StatsClient {
    /// GET del endpoint de estadísticas; `token` va como `Bearer` si existe
    async fn fetch_stats(&self, token: Option<&str>) -> Result<DashboardStats, ApiError>;
}

impl<T: StatsClient + ?Sized> StatsClient for &T {
    async fn fetch_stats(&self, token: Option<&str>) -> Result<DashboardStats, ApiError> {
        (**self).fetch_stats(token).await
    }
}

impl<T: StatsClient + ?Sized> StatsClient for Rc<T> {
    async fn fetch_stats(&self, token: Option<&str>) -> Result<DashboardStats, ApiError> {
        (**self).fetch_stats(token).await
    }
}

/// Cliente HTTP real (gloo-net / fetch del navegador)
#[derive(Clone, Debug)]
pub struct ApiClient {
    stats_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            stats_url: CONFIG.stats_url(),
        }
    }

    pub fn with_url(stats_url: impl Into<String>) -> Self {
        Self {
            stats_url: stats_url.into(),
        }
    }

    /// Petición GET con cabeceras; `Authorization` solo si hay token
    pub fn stats_request(&self, token: Option<&str>) -> Result<Request, ApiError> {
        let mut builder = Request::get(&self.stats_url).header("Content-Type", "application/json");
        match token {
            Some(token) => builder = builder.header("Authorization", &bearer(token)),
            None => log::debug!("🔓 [STATS] Sin token, petición sin Authorization"),
        }
        builder
            .build()
            .map_err(|e| ApiError::Network(format!("Request build error: {}", e)))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl StatsClient for ApiClient {
    async fn fetch_stats(&self, token: Option<&str>) -> Result<DashboardStats, ApiError> {
        log::debug!("📊 GET {}", self.stats_url);

        let response = self
            .stats_request(token)?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()));
        read_stats_response(response.status(), &response.status_text(), body)
    }
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

/// Interpretar estado + cuerpo de la respuesta de estadísticas
///
/// El estado se mira antes que el cuerpo: un 4xx/5xx es `Status` aunque la
/// lectura del cuerpo haya fallado.
pub fn read_stats_response(
    status: u16,
    status_text: &str,
    body: Result<String, ApiError>,
) -> Result<DashboardStats, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::Status {
            code: status,
            text: status_text.to_string(),
        });
    }

    let stats: DashboardStats = serde_json::from_str(&body?)
        .map_err(|e| ApiError::Parse(e.to_string()))?;
    stats.validate().map_err(ApiError::InvalidPayload)?;
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"{"total_groups":5,"total_members":42,"active_loans":3,"total_savings":12345.6}"#;

    fn body(text: &str) -> Result<String, ApiError> {
        Ok(text.to_string())
    }

    #[test]
    fn ok_response_decodes_stats() {
        let stats = read_stats_response(200, "OK", body(BODY)).unwrap();
        assert_eq!(stats.total_members, 42);
        assert_eq!(stats.active_loans, 3);
    }

    #[test]
    fn non_success_status_is_rejected_before_parsing() {
        let err = read_stats_response(401, "Unauthorized", body(BODY)).unwrap_err();
        assert_eq!(err, ApiError::Status { code: 401, text: "Unauthorized".to_string() });
        assert_eq!(err.to_string(), "HTTP 401: Unauthorized");
    }

    #[test]
    fn status_wins_over_unreadable_body() {
        let unreadable = Err(ApiError::Network("body stream aborted".to_string()));
        assert!(matches!(
            read_stats_response(503, "Service Unavailable", unreadable),
            Err(ApiError::Status { code: 503, .. })
        ));
    }

    #[test]
    fn unreadable_body_on_success_is_a_network_error() {
        let unreadable = Err(ApiError::Network("body stream aborted".to_string()));
        assert_eq!(
            read_stats_response(200, "OK", unreadable),
            Err(ApiError::Network("body stream aborted".to_string()))
        );
    }

    #[test]
    fn nested_envelope_is_malformed() {
        let nested = r#"{"success":true,"stats":{"total_groups":5,"total_members":42,"active_loans":3}}"#;
        assert!(matches!(read_stats_response(200, "OK", body(nested)), Err(ApiError::Parse(_))));
    }

    #[test]
    fn html_body_is_malformed() {
        assert!(matches!(
            read_stats_response(200, "OK", body("<html>login</html>")),
            Err(ApiError::Parse(_))
        ));
    }

    #[test]
    fn negative_savings_is_invalid_payload() {
        let negative = r#"{"total_groups":1,"total_members":1,"active_loans":0,"total_savings":-5}"#;
        assert!(matches!(
            read_stats_response(200, "OK", body(negative)),
            Err(ApiError::InvalidPayload(_))
        ));
    }

    #[test]
    fn bearer_header_value() {
        assert_eq!(bearer("abc123"), "Bearer abc123");
    }
}
