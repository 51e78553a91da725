use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub backend: BackendConfig,
    pub auth: AuthConfig,
    pub pagination: PaginationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub port: u16,
    pub enable_cors: bool,
}

/// Where the tenant REST backend lives and how long we wait for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    pub api_base_url: String,
    /// Reserved for the notification stream; the portal core never opens it.
    pub ws_base_url: String,
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    pub google_client_id: String,
    pub login_path: String,
    pub logout_path: String,
    pub switch_tenant_path: String,
    pub cookie_name: String,
    pub cookie_expiry_hours: u64,
    /// Seconds before the token's own `exp` at which we treat it as expired.
    pub expiry_buffer_secs: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationConfig {
    pub default_page: u64,
    pub default_limit: u64,
    /// Cap used when pulling reference lists for dropdowns.
    pub max_limit: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            Ok("staging") | Ok("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        // Set defaults based on environment, then override with specific env vars
        match environment {
            Environment::Production => Self::production(),
            Environment::Staging => Self::staging(),
            Environment::Development => Self::development(),
        }
        .with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Self {
        // Server overrides
        if let Ok(v) = env::var("PORTAL_BIND_ADDR") {
            self.server.bind_addr = v;
        }
        if let Ok(v) = env::var("PORTAL_PORT").or_else(|_| env::var("PORT")) {
            self.server.port = v.parse().unwrap_or(self.server.port);
        }
        if let Ok(v) = env::var("PORTAL_ENABLE_CORS") {
            self.server.enable_cors = v.parse().unwrap_or(self.server.enable_cors);
        }

        // Backend overrides
        if let Ok(v) = env::var("PORTAL_API_URL") {
            self.backend.api_base_url = v;
        }
        if let Ok(v) = env::var("PORTAL_WS_URL") {
            self.backend.ws_base_url = v;
        }
        if let Ok(v) = env::var("PORTAL_REQUEST_TIMEOUT_SECS") {
            self.backend.request_timeout_secs =
                v.parse().unwrap_or(self.backend.request_timeout_secs);
        }

        // Auth overrides
        if let Ok(v) = env::var("PORTAL_GOOGLE_CLIENT_ID") {
            self.auth.google_client_id = v;
        }
        if let Ok(v) = env::var("PORTAL_AUTH_LOGIN") {
            self.auth.login_path = v;
        }
        if let Ok(v) = env::var("PORTAL_AUTH_LOGOUT") {
            self.auth.logout_path = v;
        }
        if let Ok(v) = env::var("PORTAL_AUTH_SWITCH") {
            self.auth.switch_tenant_path = v;
        }
        if let Ok(v) = env::var("PORTAL_COOKIE_NAME") {
            self.auth.cookie_name = v;
        }
        if let Ok(v) = env::var("PORTAL_COOKIE_EXPIRY_HOURS") {
            self.auth.cookie_expiry_hours = v.parse().unwrap_or(self.auth.cookie_expiry_hours);
        }
        if let Ok(v) = env::var("PORTAL_EXPIRY_BUFFER_SECS") {
            self.auth.expiry_buffer_secs = v.parse().unwrap_or(self.auth.expiry_buffer_secs);
        }

        // Pagination overrides
        if let Ok(v) = env::var("PORTAL_DEFAULT_LIMIT") {
            self.pagination.default_limit = v.parse().unwrap_or(self.pagination.default_limit);
        }
        if let Ok(v) = env::var("PORTAL_MAX_LIMIT") {
            self.pagination.max_limit = v.parse().unwrap_or(self.pagination.max_limit);
        }

        self
    }

    fn base(environment: Environment) -> Self {
        Self {
            environment,
            server: ServerConfig {
                bind_addr: "0.0.0.0".to_string(),
                port: 8080,
                enable_cors: true,
            },
            backend: BackendConfig {
                api_base_url: "http://localhost:3000".to_string(),
                ws_base_url: "ws://localhost:3000".to_string(),
                request_timeout_secs: 30,
            },
            auth: AuthConfig {
                google_client_id: String::new(),
                login_path: "/api/auth/google".to_string(),
                logout_path: "/api/user/logout".to_string(),
                switch_tenant_path: "/api/tenants/switch".to_string(),
                cookie_name: "app_token".to_string(),
                cookie_expiry_hours: 1,
                expiry_buffer_secs: 60,
            },
            pagination: PaginationConfig {
                default_page: 1,
                default_limit: 20,
                max_limit: 100,
            },
        }
    }

    fn development() -> Self {
        Self::base(Environment::Development)
    }

    fn staging() -> Self {
        let mut config = Self::base(Environment::Staging);
        config.server.enable_cors = false;
        config
    }

    fn production() -> Self {
        let mut config = Self::base(Environment::Production);
        config.server.enable_cors = false;
        config.backend.request_timeout_secs = 10;
        config
    }
}

// Global singleton config - initialized once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

// Convenience function for accessing config
pub fn config() -> &'static AppConfig {
    &CONFIG
}
