//! Application settings loaded from environment variables.

use std::env;

use super::constants::{
    DEFAULT_POSTGRES_PORT, DEFAULT_POSTGRES_SERVER, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
};

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `DATABASE_URL` wins when set; otherwise the URL is assembled
    /// from the individual `POSTGRES_*` variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| Self::postgres_url());

        Self {
            database_url,
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SERVER_PORT),
        }
    }

    /// Assemble a connection URL from the individual POSTGRES_* variables.
    fn postgres_url() -> String {
        let user = env::var("POSTGRES_USER").unwrap_or_else(|_| "postgres".to_string());
        let password = env::var("POSTGRES_PASSWORD").unwrap_or_default();
        let server =
            env::var("POSTGRES_SERVER").unwrap_or_else(|_| DEFAULT_POSTGRES_SERVER.to_string());
        let port = env::var("POSTGRES_PORT").unwrap_or_else(|_| DEFAULT_POSTGRES_PORT.to_string());
        let db = env::var("POSTGRES_DB").unwrap_or_else(|_| "gas_platform".to_string());

        format!("postgres://{}:{}@{}:{}/{}", user, password, server, port, db)
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
