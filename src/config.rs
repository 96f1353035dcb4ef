//! Environment-driven configuration. `.env` is honored via dotenvy.

/// Runtime settings read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// sqlx connection string. Default is a local file-backed store.
    pub database_url: String,
    /// Listening port for the HTTP server.
    pub port: u16,
    /// Reserved for session/signing use; no current endpoint consumes it.
    pub secret_key: String,
    /// Enables debug-level tracing when set.
    pub debug: bool,
}

impl AppConfig {
    /// Read config from the environment, substituting defaults for anything
    /// absent or unparseable.
    pub fn from_env() -> Self {
        AppConfig {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://dev.db".into()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
            secret_key: std::env::var("SECRET_KEY")
                .unwrap_or_else(|_| "change-me-in-production".into()),
            debug: std::env::var("APP_DEBUG").map(|v| v == "1").unwrap_or(false),
        }
    }
}
