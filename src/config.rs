use serde::{Deserialize, Serialize};

// ============================================================================
// CONFIG - Compile-time settings (see build.rs for .env loading)
// ============================================================================

const DEFAULT_BACKEND_URL_DEVELOPMENT: &str = "http://127.0.0.1:8000";
const DEFAULT_BACKEND_URL_PRODUCTION: &str = "https://api.ems.example.com";
const DEFAULT_SESSION_STORAGE_KEY: &str = "ems_console_auth";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url_development: String,
    pub backend_url_production: String,
    pub environment: String,
    pub enable_logging: bool,
    pub log_level: String,
    pub cache_ttl_seconds: i64,
    pub session_storage_key: String,
    pub notification_timeout_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url_development: DEFAULT_BACKEND_URL_DEVELOPMENT.to_string(),
            backend_url_production: DEFAULT_BACKEND_URL_PRODUCTION.to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            log_level: "info".to_string(),
            cache_ttl_seconds: 60,
            session_storage_key: DEFAULT_SESSION_STORAGE_KEY.to_string(),
            notification_timeout_ms: 4500,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables captured at compile time
    pub fn from_env() -> Self {
        Self::from_lookup(|key| match key {
            "BACKEND_URL_DEVELOPMENT" => option_env!("BACKEND_URL_DEVELOPMENT"),
            "BACKEND_URL_PRODUCTION" => option_env!("BACKEND_URL_PRODUCTION"),
            "ENVIRONMENT" => option_env!("ENVIRONMENT"),
            "ENABLE_LOGGING" => option_env!("ENABLE_LOGGING"),
            "LOG_LEVEL" => option_env!("LOG_LEVEL"),
            "CACHE_TTL_SECONDS" => option_env!("CACHE_TTL_SECONDS"),
            "SESSION_STORAGE_KEY" => option_env!("SESSION_STORAGE_KEY"),
            "NOTIFICATION_TIMEOUT_MS" => option_env!("NOTIFICATION_TIMEOUT_MS"),
            _ => None,
        })
    }

    fn from_lookup<'a>(lookup: impl Fn(&str) -> Option<&'a str>) -> Self {
        let defaults = Self::default();
        Self {
            backend_url_development: lookup("BACKEND_URL_DEVELOPMENT")
                .map(str::to_string)
                .unwrap_or(defaults.backend_url_development),
            backend_url_production: lookup("BACKEND_URL_PRODUCTION")
                .map(str::to_string)
                .unwrap_or(defaults.backend_url_production),
            environment: lookup("ENVIRONMENT")
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            enable_logging: lookup("ENABLE_LOGGING")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            log_level: lookup("LOG_LEVEL")
                .map(str::to_string)
                .unwrap_or(defaults.log_level),
            cache_ttl_seconds: lookup("CACHE_TTL_SECONDS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.cache_ttl_seconds),
            session_storage_key: lookup("SESSION_STORAGE_KEY")
                .map(str::to_string)
                .unwrap_or(defaults.session_storage_key),
            notification_timeout_ms: lookup("NOTIFICATION_TIMEOUT_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.notification_timeout_ms),
        }
    }

    /// Backend base URL for the current environment, without trailing slash
    pub fn backend_url(&self) -> &str {
        let url = match self.environment.as_str() {
            "production" => &self.backend_url_production,
            _ => &self.backend_url_development,
        };
        url.trim_end_matches('/')
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

// Global static configuration
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_selects_backend_url() {
        let config = AppConfig::from_lookup(|key| match key {
            "ENVIRONMENT" => Some("production"),
            "BACKEND_URL_PRODUCTION" => Some("https://ems.acme.io/"),
            _ => None,
        });
        assert_eq!(config.backend_url(), "https://ems.acme.io");

        let dev = AppConfig::default();
        assert_eq!(dev.backend_url(), "http://127.0.0.1:8000");
    }

    #[test]
    fn unparsable_values_fall_back_to_defaults() {
        let config = AppConfig::from_lookup(|key| match key {
            "CACHE_TTL_SECONDS" => Some("soon"),
            "ENABLE_LOGGING" => Some("maybe"),
            "LOG_LEVEL" => Some("debug"),
            _ => None,
        });
        assert_eq!(config.cache_ttl_seconds, 60);
        assert!(config.is_logging_enabled());
        assert_eq!(config.log_level(), log::Level::Debug);
    }
}
