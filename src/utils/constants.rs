/// Clave del token de acceso en localStorage (lo escribe el login externo)
pub const ACCESS_TOKEN_KEY: &str = "access_token";

/// Clave del perfil de usuario cacheado
pub const USER_KEY: &str = "user";

/// Si la ruta actual contiene este marcador, ya estamos en el login
pub const LOGIN_MARKER: &str = "login";

/// Atributo que marca los botones de logout (`data-action="logout"`)
pub const LOGOUT_SELECTOR: &str = "[data-action=\"logout\"]";

// IDs de los elementos del panel de estadísticas
pub const TOTAL_GROUPS_ID: &str = "totalGroups";
pub const TOTAL_MEMBERS_ID: &str = "totalMembers";
pub const ACTIVE_LOANS_ID: &str = "activeLoans";
pub const TOTAL_SAVINGS_ID: &str = "totalSavings";
