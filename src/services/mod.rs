pub mod api_client;
pub mod auth_service;
pub mod navigation;
pub mod session_guard;

pub use api_client::{ApiClient, ApiError, StatsClient};
pub use auth_service::*;
pub use navigation::{BrowserNavigator, Navigator};
pub use session_guard::{GuardDecision, SessionGuard};
