//! Environment-driven configuration

use std::env;
use tracing::warn;

const DEFAULT_JWT_SECRET: &str = "dev-secret-change-me";

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub db_path: String,
    pub jwt_secret: String,
    /// Token lifetime in seconds
    pub token_expiry_secs: i64,
    /// Credentials for the user seeded on first boot
    pub admin_email: String,
    pub admin_password: String,
    /// Allowed CORS origin for browser calls; permissive when unset
    pub allowed_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(8080);

        let db_path = env::var("SQLITE_PATH").unwrap_or_else(|_| "data/employees.db".to_string());

        let jwt_secret = env::var("JWT_SECRET").unwrap_or_else(|_| {
            warn!("⚠️  JWT_SECRET not set, using the development default");
            DEFAULT_JWT_SECRET.to_string()
        });

        let token_expiry_secs = env::var("JWT_EXPIRES_IN")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .filter(|&v| v > 0)
            .unwrap_or(86_400); // 1 day

        let admin_email =
            env::var("DEFAULT_ADMIN_EMAIL").unwrap_or_else(|_| "admin@example.com".to_string());
        let admin_password =
            env::var("DEFAULT_ADMIN_PASSWORD").unwrap_or_else(|_| "admin123".to_string());

        let allowed_origin = env::var("FRONTEND_URL").ok().filter(|v| !v.trim().is_empty());

        Self {
            port,
            db_path,
            jwt_secret,
            token_expiry_secs,
            admin_email,
            admin_password,
            allowed_origin,
        }
    }
}
